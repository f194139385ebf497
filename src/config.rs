//! Pipeline configuration.
//!
//! All tunables live in one explicit struct passed to the entry points;
//! nothing is read from the process environment.

use crate::{Error, Result};

/// Configuration for a topology analysis run.
#[derive(Debug, Clone, PartialEq)]
pub struct TopologyConfig {
    /// Maximum number of nearest neighbors considered per point.
    pub max_neighbors: usize,
    /// Maximum Euclidean distance (in canonical units, e.g. microns) for two
    /// points to be considered adjacent.
    pub max_radius: f32,
    /// Minimum member count for a component to pass the group filter.
    pub min_group_size: usize,
    /// Per-axis scale factors in raw storage order (z, y, x), converting
    /// grid indices to physical units. Typically the voxel spacing.
    pub axis_scale: [f32; 3],
    /// Candidate queries search out to `search_margin * max_radius` before
    /// the exact `< max_radius` filter is applied. Widen this if the index
    /// ever truncates true neighbors; 2.0 matches the historical behavior.
    pub search_margin: f32,
}

impl Default for TopologyConfig {
    fn default() -> Self {
        Self {
            max_neighbors: 20,
            max_radius: 5.0,
            min_group_size: 1,
            axis_scale: [1.0, 1.0, 1.0],
            search_margin: 2.0,
        }
    }
}

impl TopologyConfig {
    /// Check every field before any computation starts.
    pub fn validate(&self) -> Result<()> {
        if self.max_neighbors < 1 {
            return Err(Error::InvalidConfig(format!(
                "max_neighbors must be >= 1, got {}",
                self.max_neighbors
            )));
        }
        if !self.max_radius.is_finite() || self.max_radius <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "max_radius must be a positive finite number, got {}",
                self.max_radius
            )));
        }
        if self.min_group_size < 1 {
            return Err(Error::InvalidConfig(format!(
                "min_group_size must be >= 1, got {}",
                self.min_group_size
            )));
        }
        if !self.search_margin.is_finite() || self.search_margin < 1.0 {
            return Err(Error::InvalidConfig(format!(
                "search_margin must be >= 1.0, got {}",
                self.search_margin
            )));
        }
        for (axis, &s) in self.axis_scale.iter().enumerate() {
            if !s.is_finite() || s <= 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "axis_scale[{}] must be a positive finite number, got {}",
                    axis, s
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(TopologyConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_bad_fields() {
        let mut c = TopologyConfig::default();
        c.max_neighbors = 0;
        assert!(c.validate().is_err());

        let mut c = TopologyConfig::default();
        c.max_radius = 0.0;
        assert!(c.validate().is_err());

        let mut c = TopologyConfig::default();
        c.max_radius = f32::NAN;
        assert!(c.validate().is_err());

        let mut c = TopologyConfig::default();
        c.min_group_size = 0;
        assert!(c.validate().is_err());

        let mut c = TopologyConfig::default();
        c.search_margin = 0.5;
        assert!(c.validate().is_err());

        let mut c = TopologyConfig::default();
        c.axis_scale = [0.5, -1.0, 0.5];
        let err = c.validate().unwrap_err();
        assert!(err.to_string().contains("axis_scale[1]"));
    }
}
