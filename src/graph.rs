//! Candidate edges and the sparse adjacency representation.
//!
//! Edges are stored once in canonical orientation (i < j) sorted
//! lexicographically; a CSR neighbor table provides symmetric adjacency
//! for traversal.

use crate::{Error, Result};

/// An unordered pair of point indices with the Euclidean distance between
/// them as weight. Canonical orientation is `i < j`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateEdge {
    pub i: u32,
    pub j: u32,
    pub weight: f32,
}

impl CandidateEdge {
    /// Build an edge in canonical orientation regardless of argument order.
    pub fn new(a: u32, b: u32, weight: f32) -> Self {
        if a <= b {
            Self { i: a, j: b, weight }
        } else {
            Self { i: b, j: a, weight }
        }
    }
}

/// Accumulates candidate edges, then freezes them into an `AdjacencyGraph`.
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    vertex_count: usize,
    edges: Vec<CandidateEdge>,
}

impl GraphBuilder {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edges: Vec::new(),
        }
    }

    pub fn push(&mut self, edge: CandidateEdge) {
        self.edges.push(edge);
    }

    /// Sort edges into canonical (i, j) order, drop duplicate pairs, and
    /// build the CSR neighbor table.
    ///
    /// Fails with `InvalidData` on self-loops or out-of-range indices;
    /// weights are checked later by the consumers that care (the reducer).
    pub fn build(self) -> Result<AdjacencyGraph> {
        let Self {
            vertex_count,
            mut edges,
        } = self;

        for e in &edges {
            if e.i == e.j {
                return Err(Error::InvalidData(format!(
                    "self-loop on vertex {}",
                    e.i
                )));
            }
            if e.i as usize >= vertex_count || e.j as usize >= vertex_count {
                return Err(Error::InvalidData(format!(
                    "edge ({}, {}) out of range for {} vertices",
                    e.i, e.j, vertex_count
                )));
            }
        }

        edges.sort_unstable_by(|a, b| (a.i, a.j).cmp(&(b.i, b.j)));
        edges.dedup_by_key(|e| (e.i, e.j));

        // CSR over both directions.
        let mut counts = vec![0usize; vertex_count];
        for e in &edges {
            counts[e.i as usize] += 1;
            counts[e.j as usize] += 1;
        }
        let mut offsets = Vec::with_capacity(vertex_count + 1);
        let mut total = 0usize;
        offsets.push(0);
        for &c in &counts {
            total += c;
            offsets.push(total);
        }
        let mut cursor = offsets[..vertex_count].to_vec();
        let mut neighbors = vec![0u32; total];
        for e in &edges {
            neighbors[cursor[e.i as usize]] = e.j;
            cursor[e.i as usize] += 1;
            neighbors[cursor[e.j as usize]] = e.i;
            cursor[e.j as usize] += 1;
        }
        for v in 0..vertex_count {
            neighbors[offsets[v]..offsets[v + 1]].sort_unstable();
        }

        Ok(AdjacencyGraph {
            vertex_count,
            edges,
            offsets,
            neighbors,
        })
    }
}

/// Sparse symmetric weighted graph over `vertex_count` points.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyGraph {
    vertex_count: usize,
    edges: Vec<CandidateEdge>,
    offsets: Vec<usize>,
    neighbors: Vec<u32>,
}

impl AdjacencyGraph {
    pub fn empty(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edges: Vec::new(),
            offsets: vec![0; vertex_count + 1],
            neighbors: Vec::new(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edges in canonical orientation, ascending (i, j).
    pub fn edges(&self) -> &[CandidateEdge] {
        &self.edges
    }

    /// Neighbors of `v` in ascending index order.
    pub fn neighbors(&self, v: usize) -> &[u32] {
        &self.neighbors[self.offsets[v]..self.offsets[v + 1]]
    }

    /// Defensive invariant check for graphs built outside the neighbor
    /// search: canonical orientation, finite non-negative weights.
    pub fn validate(&self) -> Result<()> {
        for e in &self.edges {
            if e.i >= e.j {
                return Err(Error::InvalidData(format!(
                    "edge ({}, {}) is not in canonical orientation",
                    e.i, e.j
                )));
            }
            if !e.weight.is_finite() || e.weight < 0.0 {
                return Err(Error::InvalidData(format!(
                    "edge ({}, {}) has invalid weight {}",
                    e.i, e.j, e.weight
                )));
            }
        }
        Ok(())
    }
}
