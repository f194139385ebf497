//! Minimum spanning forest reduction.
//!
//! Kruskal over edges ordered by (weight, i, j); the index tie-break makes
//! the output forest unique for a given input graph. Connectivity per
//! component is preserved, only cycle edges are dropped.

use crate::graph::{AdjacencyGraph, CandidateEdge};
use crate::Result;

/// Union-find with path halving and union by rank.
struct DisjointSet {
    parent: Vec<u32>,
    rank: Vec<u8>,
}

impl DisjointSet {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n as u32).collect(),
            rank: vec![0; n],
        }
    }

    fn find(&mut self, mut x: u32) -> u32 {
        while self.parent[x as usize] != x {
            let grandparent = self.parent[self.parent[x as usize] as usize];
            self.parent[x as usize] = grandparent;
            x = grandparent;
        }
        x
    }

    /// Returns false if `a` and `b` were already in the same set.
    fn union(&mut self, a: u32, b: u32) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }
        match self.rank[ra as usize].cmp(&self.rank[rb as usize]) {
            std::cmp::Ordering::Less => self.parent[ra as usize] = rb,
            std::cmp::Ordering::Greater => self.parent[rb as usize] = ra,
            std::cmp::Ordering::Equal => {
                self.parent[rb as usize] = ra;
                self.rank[ra as usize] += 1;
            }
        }
        true
    }
}

/// A minimum-weight acyclic subgraph spanning each connected component of
/// the input graph.
#[derive(Debug, Clone, Default)]
pub struct SpanningForest {
    edges: Vec<CandidateEdge>,
    total_weight: f64,
}

impl SpanningForest {
    /// Kept edges, in selection order (ascending weight, ties by (i, j)).
    pub fn edges(&self) -> &[CandidateEdge] {
        &self.edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }
}

/// Reduce `graph` to its minimum spanning forest.
///
/// The graph is validated first (canonical orientation, finite non-negative
/// weights), so malformed independently-built graphs fail with
/// `InvalidData` instead of producing a bogus forest.
pub fn spanning_forest(graph: &AdjacencyGraph) -> Result<SpanningForest> {
    graph.validate()?;

    let mut order: Vec<usize> = (0..graph.edge_count()).collect();
    let edges = graph.edges();
    order.sort_unstable_by(|&a, &b| {
        edges[a]
            .weight
            .total_cmp(&edges[b].weight)
            .then_with(|| (edges[a].i, edges[a].j).cmp(&(edges[b].i, edges[b].j)))
    });

    let mut sets = DisjointSet::new(graph.vertex_count());
    let mut kept = Vec::new();
    let mut total_weight = 0.0f64;
    for idx in order {
        let e = edges[idx];
        if sets.union(e.i, e.j) {
            total_weight += e.weight as f64;
            kept.push(e);
        }
    }

    Ok(SpanningForest {
        edges: kept,
        total_weight,
    })
}
