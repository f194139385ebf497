//! Spatial topology analysis for 3D synaptic puncta centroids.
//!
//! Given a cloud of detected signal centroids, this crate infers which
//! centroids are close enough to be considered connected, reduces those
//! connections to a minimum-weight spanning forest, and labels coherent
//! spatial clusters.
//!
//! # Module Organization
//!
//! - `cloud`: point storage and canonicalization of raw (z, y, x) triples
//! - `config`: explicit pipeline configuration
//! - `graph`: candidate edges and the sparse adjacency representation
//! - `neighbors`: R-tree nearest-neighbor candidate graph construction
//! - `forest`: minimum spanning forest reduction
//! - `components`: connected-component labeling with sizes and centroids
//! - `filter`: size-threshold group filtering
//! - `pipeline`: end-to-end entry points
//!
//! # Usage
//!
//! ```
//! use puncta_topology::{analyze, PointCloud, TopologyConfig};
//! use nalgebra::Point3;
//!
//! let cloud = PointCloud::new(vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(10.0, 10.0, 10.0),
//! ]);
//! let config = TopologyConfig {
//!     max_neighbors: 20,
//!     max_radius: 5.0,
//!     ..TopologyConfig::default()
//! };
//! let analysis = analyze(&cloud, &config).unwrap();
//! assert_eq!(analysis.labeling.component_count(), 2);
//! ```

pub mod cloud;
pub mod components;
pub mod config;
pub mod filter;
pub mod forest;
pub mod graph;
pub mod neighbors;
pub mod pipeline;

pub use cloud::PointCloud;
pub use components::{label_components, ComponentLabeling};
pub use config::TopologyConfig;
pub use filter::{filter_groups, GroupFilterResult};
pub use forest::{spanning_forest, SpanningForest};
pub use graph::{AdjacencyGraph, CandidateEdge, GraphBuilder};
pub use neighbors::{build_neighbor_graph, NeighborStats};
pub use pipeline::{analyze, analyze_zyx, TopologyAnalysis};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}
