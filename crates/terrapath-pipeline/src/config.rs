//! Pipeline configuration.
//!
//! One explicit object carries everything a run needs; there is no
//! process-wide state.

use terrapath_core::{Error, Result};
use terrapath_layers::DEFAULT_Z_FACTOR;
use terrapath_paths::DEFAULT_MAX_ACCUMULATION;

/// Default buffer distance (length units) applied when rasterizing the
/// infrastructure layers.
pub const DEFAULT_BUFFER_DISTANCE: f64 = 2000.0;

/// The six cost-factor weights, in their fixed order: road, rail, lake,
/// river, slope, elevation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weights {
    pub road: f64,
    pub rail: f64,
    pub lake: f64,
    pub river: f64,
    pub slope: f64,
    pub elevation: f64,
}

impl Default for Weights {
    /// Equal weighting of every factor.
    fn default() -> Self {
        Self {
            road: 1.0,
            rail: 1.0,
            lake: 1.0,
            river: 1.0,
            slope: 1.0,
            elevation: 1.0,
        }
    }
}

impl Weights {
    /// Validate that every weight is non-negative and finite.
    pub fn validate(&self) -> Result<()> {
        for (name, w) in [
            ("road", self.road),
            ("rail", self.rail),
            ("lake", self.lake),
            ("river", self.river),
            ("slope", self.slope),
            ("elevation", self.elevation),
        ] {
            if !w.is_finite() || w < 0.0 {
                return Err(Error::Configuration(format!(
                    "{name} weight must be non-negative and finite, got {w}"
                )));
            }
        }
        Ok(())
    }
}

/// Full configuration for a pipeline run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PipelineConfig {
    pub weights: Weights,
    /// Buffer distance passed to the rasterizer for each feature layer.
    pub buffer_distance: f64,
    /// Accumulation cutoff for the cost-distance solve.
    pub max_accumulation: f64,
    /// Vertical exaggeration for the slope layer.
    pub z_factor: f64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            weights: Weights::default(),
            buffer_distance: DEFAULT_BUFFER_DISTANCE,
            max_accumulation: DEFAULT_MAX_ACCUMULATION,
            z_factor: DEFAULT_Z_FACTOR,
        }
    }
}

impl PipelineConfig {
    /// Validate the whole configuration.
    pub fn validate(&self) -> Result<()> {
        self.weights.validate()?;
        if !self.buffer_distance.is_finite() || self.buffer_distance < 0.0 {
            return Err(Error::Configuration(format!(
                "buffer distance must be non-negative and finite, got {}",
                self.buffer_distance
            )));
        }
        Ok(())
    }
}
