//! Point storage and canonicalization.
//!
//! Raw centroid triples arrive in storage order (z, y, x) with coordinates
//! in grid-index units. `PointCloud::from_zyx` reorders them to (x, y, z)
//! and applies the per-axis scale so downstream radius thresholds are in
//! physical units.

use nalgebra::Point3;

use crate::{Error, Result};

/// An ordered set of 3D centroids in canonical (x, y, z) order.
///
/// The index of a point in `points` is its identity for every derived
/// structure (edges, labels).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointCloud {
    pub points: Vec<Point3<f32>>,
}

impl PointCloud {
    pub fn new(points: Vec<Point3<f32>>) -> Self {
        Self { points }
    }

    /// Canonicalize raw (z, y, x) triples: reorder to (x, y, z) and scale
    /// each axis by `axis_scale` (given in the same (z, y, x) order as the
    /// raw data, so voxel spacing can be passed straight through).
    ///
    /// Fails on any non-finite coordinate, identifying the offending row.
    pub fn from_zyx(raw: &[[f32; 3]], axis_scale: [f32; 3]) -> Result<Self> {
        let mut points = Vec::with_capacity(raw.len());
        for (row, t) in raw.iter().enumerate() {
            if t.iter().any(|c| !c.is_finite()) {
                return Err(Error::InvalidData(format!(
                    "non-finite coordinate in row {}: ({}, {}, {})",
                    row, t[0], t[1], t[2]
                )));
            }
            points.push(Point3::new(
                t[2] * axis_scale[2],
                t[1] * axis_scale[1],
                t[0] * axis_scale[0],
            ));
        }
        Ok(Self { points })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
