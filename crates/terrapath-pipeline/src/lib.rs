//! **terrapath-pipeline** — orchestration of the least-cost path analysis.
//!
//! Wires the four stages together behind one configuration object:
//!
//! 1. cost layers (obstacle masks, slope, elevation)
//! 2. weighted cost surface
//! 3. cost-distance solve
//! 4. path trace
//!
//! External geospatial concerns (vector buffering, rasterization, map
//! rendering) enter only through the [`collaborators`] traits.

pub mod collaborators;
pub mod config;
pub mod pipeline;

pub use collaborators::{GridVectorizer, Polyline, Rasterize, Render, Vectorize};
pub use config::{DEFAULT_BUFFER_DISTANCE, PipelineConfig, Weights};
pub use pipeline::{PipelineInputs, PipelineOutput, run};
