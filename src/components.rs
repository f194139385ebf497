//! Connected-component labeling.
//!
//! BFS flood fill over the symmetric adjacency, seeded in ascending vertex
//! order, so labels are dense from 0 in first-visit order and stable for a
//! given graph.

use std::collections::VecDeque;

use nalgebra::Point3;

use crate::cloud::PointCloud;
use crate::graph::AdjacencyGraph;

const UNLABELED: u32 = u32::MAX;

/// Per-point component labels plus per-component sizes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentLabeling {
    pub labels: Vec<u32>,
    pub sizes: Vec<usize>,
}

impl ComponentLabeling {
    pub fn component_count(&self) -> usize {
        self.sizes.len()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Mean position of each component's members. `cloud` must be the
    /// point set the labeled graph was built over.
    pub fn centroids(&self, cloud: &PointCloud) -> Vec<Point3<f32>> {
        let mut sums = vec![[0.0f64; 3]; self.sizes.len()];
        for (idx, &label) in self.labels.iter().enumerate() {
            let p = cloud.points[idx];
            let s = &mut sums[label as usize];
            s[0] += p.x as f64;
            s[1] += p.y as f64;
            s[2] += p.z as f64;
        }
        sums.iter()
            .zip(&self.sizes)
            .map(|(s, &count)| {
                let inv = 1.0 / count as f64;
                Point3::new(
                    (s[0] * inv) as f32,
                    (s[1] * inv) as f32,
                    (s[2] * inv) as f32,
                )
            })
            .collect()
    }
}

/// Label every vertex of `graph` with its connected component.
///
/// Two vertices share a label iff a path of edges connects them. An empty
/// graph yields zero components.
pub fn label_components(graph: &AdjacencyGraph) -> ComponentLabeling {
    let n = graph.vertex_count();
    let mut labels = vec![UNLABELED; n];
    let mut sizes = Vec::new();
    let mut queue = VecDeque::new();

    for seed in 0..n {
        if labels[seed] != UNLABELED {
            continue;
        }
        let label = sizes.len() as u32;
        labels[seed] = label;
        queue.push_back(seed as u32);

        let mut size = 0usize;
        while let Some(v) = queue.pop_front() {
            size += 1;
            for &nb in graph.neighbors(v as usize) {
                if labels[nb as usize] == UNLABELED {
                    labels[nb as usize] = label;
                    queue.push_back(nb);
                }
            }
        }
        sizes.push(size);
    }

    ComponentLabeling { labels, sizes }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{CandidateEdge, GraphBuilder};
    use nalgebra::Point3;

    fn graph_from(vertex_count: usize, edges: &[(u32, u32)]) -> AdjacencyGraph {
        let mut b = GraphBuilder::new(vertex_count);
        for &(i, j) in edges {
            b.push(CandidateEdge::new(i, j, 1.0));
        }
        b.build().unwrap()
    }

    #[test]
    fn labels_follow_first_visit_order() {
        // Vertex 0 is isolated, so it claims label 0; the chain 1-2-3 gets
        // label 1 and vertex 4 gets label 2.
        let g = graph_from(5, &[(1, 2), (2, 3)]);
        let labeling = label_components(&g);
        assert_eq!(labeling.labels, vec![0, 1, 1, 1, 2]);
        assert_eq!(labeling.sizes, vec![1, 3, 1]);
        assert_eq!(labeling.component_count(), 3);
        assert_eq!(labeling.len(), 5);
    }

    #[test]
    fn sizes_sum_to_vertex_count() {
        let g = graph_from(6, &[(0, 5), (1, 4), (2, 3), (3, 4)]);
        let labeling = label_components(&g);
        assert_eq!(labeling.sizes.iter().sum::<usize>(), 6);
    }

    #[test]
    fn empty_graph_has_no_components() {
        let labeling = label_components(&AdjacencyGraph::empty(0));
        assert!(labeling.is_empty());
        assert_eq!(labeling.component_count(), 0);
    }

    #[test]
    fn centroids_are_component_means() {
        let cloud = PointCloud::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(10.0, 10.0, 10.0),
        ]);
        let g = graph_from(3, &[(0, 1)]);
        let labeling = label_components(&g);
        let centroids = labeling.centroids(&cloud);
        assert_eq!(centroids.len(), 2);
        assert_eq!(centroids[0], Point3::new(1.0, 0.0, 0.0));
        assert_eq!(centroids[1], Point3::new(10.0, 10.0, 10.0));
    }
}
