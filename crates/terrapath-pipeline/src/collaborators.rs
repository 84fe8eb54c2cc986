//! Seams for the external geospatial collaborators.
//!
//! Buffering, rasterization, vectorization and map rendering live outside
//! this workspace; the pipeline only depends on these traits.

use terrapath_core::{GridSpec, Point, Raster, Result};

/// A vectorized path in world coordinates.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polyline {
    pub points: Vec<(f64, f64)>,
}

/// Buffers a vector layer by `buffer_distance` and rasterizes it onto the
/// common grid as a presence mask.
pub trait Rasterize {
    /// The collaborator's vector layer handle.
    type Layer;

    fn rasterize(
        &self,
        layer: &Self::Layer,
        spec: &GridSpec,
        buffer_distance: f64,
    ) -> Result<Raster<bool>>;
}

/// Converts a traced cell path into a world-coordinate polyline.
pub trait Vectorize {
    fn vectorize(&self, path: &[Point], spec: &GridSpec) -> Polyline;
}

/// Renders a polyline onto a map template, producing a finished document.
pub trait Render {
    fn render(&self, polyline: &Polyline, template: &str) -> Result<Vec<u8>>;
}

/// The built-in vectorizer: maps each cell to its centre in world
/// coordinates. Pure arithmetic over the grid spec, no I/O.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridVectorizer;

impl Vectorize for GridVectorizer {
    fn vectorize(&self, path: &[Point], spec: &GridSpec) -> Polyline {
        Polyline {
            points: path.iter().map(|&p| spec.cell_center(p)).collect(),
        }
    }
}
