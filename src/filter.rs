//! Size-threshold filtering of labeled components.
//!
//! Lets consumers ignore noise-sized clusters without touching the
//! underlying labeling, which stays available for diagnostics.

use crate::components::ComponentLabeling;
use crate::graph::CandidateEdge;
use crate::{Error, Result};

/// Edges whose endpoints lie in large-enough components, plus the count of
/// components that met the threshold.
#[derive(Debug, Clone, Default)]
pub struct GroupFilterResult {
    pub edges: Vec<CandidateEdge>,
    pub qualifying_components: usize,
}

/// Keep the edges whose both endpoints belong to a component of size
/// `>= min_group_size`. `edges` may be a spanning forest or the full
/// candidate edge set; upstream structures are not modified.
pub fn filter_groups(
    labeling: &ComponentLabeling,
    edges: &[CandidateEdge],
    min_group_size: usize,
) -> Result<GroupFilterResult> {
    if min_group_size < 1 {
        return Err(Error::InvalidConfig(format!(
            "min_group_size must be >= 1, got {}",
            min_group_size
        )));
    }

    let qualifying_components = labeling
        .sizes
        .iter()
        .filter(|&&s| s >= min_group_size)
        .count();

    let keeps = |v: u32| labeling.sizes[labeling.labels[v as usize] as usize] >= min_group_size;
    let edges = edges
        .iter()
        .filter(|e| keeps(e.i) && keeps(e.j))
        .copied()
        .collect();

    Ok(GroupFilterResult {
        edges,
        qualifying_components,
    })
}
