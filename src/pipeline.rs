//! End-to-end analysis entry points.
//!
//! One synchronous batch run per call: candidate graph, component labels
//! over the full graph, spanning forest, group filter. All artifacts are
//! returned together so callers can render the filtered view while keeping
//! the complete labeling for diagnostics.

use std::time::Instant;

use log::debug;

use crate::cloud::PointCloud;
use crate::components::{label_components, ComponentLabeling};
use crate::config::TopologyConfig;
use crate::filter::{filter_groups, GroupFilterResult};
use crate::forest::{spanning_forest, SpanningForest};
use crate::graph::AdjacencyGraph;
use crate::neighbors::{build_neighbor_graph, NeighborStats};
use crate::Result;

/// Every artifact of one analysis run.
#[derive(Debug, Clone)]
pub struct TopologyAnalysis {
    /// Full candidate adjacency graph.
    pub graph: AdjacencyGraph,
    /// Minimum spanning forest of `graph`.
    pub forest: SpanningForest,
    /// Component labels and sizes over the full candidate graph.
    pub labeling: ComponentLabeling,
    /// Forest edges restricted to components of at least `min_group_size`
    /// members, with the qualifying-component count.
    pub groups: GroupFilterResult,
}

/// Run the whole pipeline on an already-canonicalized cloud.
///
/// Fails fast on an invalid configuration; data errors surface from the
/// step that detects them. Identical input always produces identical
/// output, errors included.
pub fn analyze(cloud: &PointCloud, config: &TopologyConfig) -> Result<TopologyAnalysis> {
    config.validate()?;

    let start = Instant::now();
    let graph = build_neighbor_graph(cloud, config)?;
    if let Some(stats) = NeighborStats::from_graph(&graph) {
        debug!(
            "candidate graph: {} points, {} edges, weight range {:.3}..{:.3} (mean {:.3}) in {:.1?}",
            graph.vertex_count(),
            graph.edge_count(),
            stats.min,
            stats.max,
            stats.mean,
            start.elapsed()
        );
    } else {
        debug!(
            "candidate graph: {} points, no edges in {:.1?}",
            graph.vertex_count(),
            start.elapsed()
        );
    }

    let step = Instant::now();
    let labeling = label_components(&graph);
    debug!(
        "labeled {} components in {:.1?}",
        labeling.component_count(),
        step.elapsed()
    );

    let step = Instant::now();
    let forest = spanning_forest(&graph)?;
    debug!(
        "spanning forest: {} edges, total weight {:.3} in {:.1?}",
        forest.edge_count(),
        forest.total_weight(),
        step.elapsed()
    );

    let groups = filter_groups(&labeling, forest.edges(), config.min_group_size)?;
    debug!(
        "{} of {} components have >= {} members",
        groups.qualifying_components,
        labeling.component_count(),
        config.min_group_size
    );

    Ok(TopologyAnalysis {
        graph,
        forest,
        labeling,
        groups,
    })
}

/// Canonicalize raw (z, y, x) triples with `config.axis_scale`, then run
/// the pipeline. Returns the canonical cloud alongside the analysis so the
/// caller can map results back onto positions.
pub fn analyze_zyx(
    raw: &[[f32; 3]],
    config: &TopologyConfig,
) -> Result<(PointCloud, TopologyAnalysis)> {
    config.validate()?;
    let cloud = PointCloud::from_zyx(raw, config.axis_scale)?;
    let analysis = analyze(&cloud, config)?;
    Ok((cloud, analysis))
}
