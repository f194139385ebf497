//! Candidate graph construction from nearest-neighbor queries.
//!
//! Each point queries an R-tree for candidates out to
//! `search_margin * max_radius`, keeps its `max_neighbors` closest, and the
//! exact `< max_radius` filter decides which pairs become edges. Queries
//! run in parallel; results are assembled in point-index order so the
//! output is identical regardless of thread scheduling.

use nalgebra::Point3;
use rayon::prelude::*;
use rstar::{PointDistance, RTree, RTreeObject, AABB};

use crate::cloud::PointCloud;
use crate::config::TopologyConfig;
use crate::graph::{AdjacencyGraph, CandidateEdge, GraphBuilder};
use crate::{Error, Result};

// Wrapper for RTree
struct IndexedPoint(usize, Point3<f32>);

impl RTreeObject for IndexedPoint {
    type Envelope = AABB<[f32; 3]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point([self.1.x, self.1.y, self.1.z])
    }
}

impl PointDistance for IndexedPoint {
    fn distance_2(&self, point: &[f32; 3]) -> f32 {
        let dx = self.1.x - point[0];
        let dy = self.1.y - point[1];
        let dz = self.1.z - point[2];
        dx * dx + dy * dy + dz * dz
    }
}

/// Build the weighted candidate adjacency graph for `cloud`.
///
/// For each point: candidates within `search_margin * max_radius` are
/// ranked by distance (ties by index, ascending) and truncated to
/// `max_neighbors`; survivors closer than `max_radius` contribute an edge.
/// Each unordered pair appears once, in canonical (i, j) orientation.
///
/// An empty cloud yields an empty graph.
pub fn build_neighbor_graph(
    cloud: &PointCloud,
    config: &TopologyConfig,
) -> Result<AdjacencyGraph> {
    if config.max_neighbors < 1 {
        return Err(Error::InvalidConfig(format!(
            "max_neighbors must be >= 1, got {}",
            config.max_neighbors
        )));
    }
    if !config.max_radius.is_finite() || config.max_radius <= 0.0 {
        return Err(Error::InvalidConfig(format!(
            "max_radius must be a positive finite number, got {}",
            config.max_radius
        )));
    }

    let n = cloud.len();
    if n == 0 {
        return Ok(AdjacencyGraph::empty(0));
    }

    let wrappers: Vec<IndexedPoint> = cloud
        .points
        .iter()
        .enumerate()
        .map(|(i, p)| IndexedPoint(i, *p))
        .collect();
    let tree = RTree::bulk_load(wrappers);

    let search_radius = config.search_margin * config.max_radius;
    let search_r2 = search_radius * search_radius;
    let r2 = config.max_radius * config.max_radius;
    let k = config.max_neighbors;

    // Per-point candidate lists, collected in index order.
    let per_point: Vec<Vec<CandidateEdge>> = (0..n)
        .into_par_iter()
        .map(|i| {
            let p = cloud.points[i];
            let query = [p.x, p.y, p.z];
            let mut found: Vec<(f32, u32)> = tree
                .locate_within_distance(query, search_r2)
                .filter(|w| w.0 != i)
                .map(|w| (w.distance_2(&query), w.0 as u32))
                .collect();
            found.sort_unstable_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
            found.truncate(k);
            found
                .into_iter()
                .filter(|&(d2, _)| d2 < r2)
                .map(|(d2, j)| CandidateEdge::new(i as u32, j, d2.sqrt()))
                .collect()
        })
        .collect();

    let mut builder = GraphBuilder::new(n);
    for edges in per_point {
        for e in edges {
            builder.push(e);
        }
    }
    builder.build()
}

/// Min/mean/max candidate-edge weight, for diagnostic reporting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeighborStats {
    pub min: f32,
    pub mean: f32,
    pub max: f32,
}

impl NeighborStats {
    /// `None` for an edgeless graph.
    pub fn from_graph(graph: &AdjacencyGraph) -> Option<Self> {
        let edges = graph.edges();
        if edges.is_empty() {
            return None;
        }
        let mut min = f32::MAX;
        let mut max = f32::MIN;
        let mut sum = 0.0f64;
        for e in edges {
            min = min.min(e.weight);
            max = max.max(e.weight);
            sum += e.weight as f64;
        }
        Some(Self {
            min,
            mean: (sum / edges.len() as f64) as f32,
            max,
        })
    }
}
