//! The four-stage least-cost path pipeline.
//!
//! Raw layers → cost grids → combined surface → distance + backlink grids
//! → traced path. Every stage is a pure function of its inputs and runs
//! exactly once, sequentially.

use terrapath_core::{Error, Point, Raster, Result};
use terrapath_layers::{combine, elevation_cost, obstacle_cost, slope_cost};
use terrapath_paths::{CostDistance, SolveOptions, cost_distance, trace_path};

use crate::collaborators::Rasterize;
use crate::config::PipelineConfig;

/// Everything a run consumes: the DEM, the four infrastructure layers
/// (held as collaborator handles until rasterization), and the endpoint
/// cells already resolved onto the grid.
pub struct PipelineInputs<'a, L> {
    pub dem: &'a Raster<f64>,
    pub road: &'a L,
    pub rail: &'a L,
    pub river: &'a L,
    pub lake: &'a L,
    pub sources: &'a [Point],
    pub destinations: &'a [Point],
}

/// Everything a run produces. Downstream map rendering consumes `path`
/// (via a `Vectorize` collaborator); the intermediate grids are kept for
/// inspection and export.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub cost_surface: Raster<f64>,
    pub cost_distance: CostDistance,
    /// Least-cost path, ordered source → destination.
    pub path: Vec<Point>,
    /// The destination cell the path was traced to (cheapest reachable).
    pub destination: Point,
}

/// Run the full pipeline.
///
/// Builds the six cost layers, combines them under the configured weights,
/// solves cost distance from the source set, picks the cheapest reachable
/// destination cell, and traces the path to it.
pub fn run<R: Rasterize>(
    rasterizer: &R,
    inputs: &PipelineInputs<'_, R::Layer>,
    config: &PipelineConfig,
) -> Result<PipelineOutput> {
    config.validate()?;
    if inputs.destinations.is_empty() {
        return Err(Error::Configuration("empty destination set".into()));
    }

    let spec = *inputs.dem.spec();

    // Stage 1: cost layers.
    let feature_cost = |name: &str, layer: &R::Layer| -> Result<Raster<f64>> {
        let mask = rasterizer.rasterize(layer, &spec, config.buffer_distance)?;
        inputs.dem.check_aligned(&mask)?;
        log::info!("rasterized and reclassified {name} layer");
        Ok(obstacle_cost(&mask))
    };
    let road = feature_cost("road", inputs.road)?;
    let rail = feature_cost("rail", inputs.rail)?;
    let lake = feature_cost("lake", inputs.lake)?;
    let river = feature_cost("river", inputs.river)?;
    let slope = slope_cost(inputs.dem, config.z_factor)?;
    let elev = elevation_cost(inputs.dem)?;
    log::info!("terrain cost layers done");

    // Stage 2: weighted cost surface.
    let w = &config.weights;
    let cost_surface = combine(
        &[&slope, &lake, &river, &rail, &road, &elev],
        &[w.slope, w.lake, w.river, w.rail, w.road, w.elevation],
    )?;
    log::info!("cost surface done");

    // Stage 3: cost distance.
    let opts = SolveOptions {
        max_accumulation: config.max_accumulation,
    };
    let cd = cost_distance(&cost_surface, inputs.sources, &opts)?;
    log::info!("cost distance done");

    // Stage 4: trace to the cheapest reachable destination.
    let destination = inputs
        .destinations
        .iter()
        .copied()
        .filter(|&p| cd.reached(p))
        .min_by(|&a, &b| {
            cd.distance
                .value(a)
                .total_cmp(&cd.distance.value(b))
        })
        .ok_or(Error::UnreachableDestination(inputs.destinations[0]))?;
    let path = trace_path(&cd.backlink, destination)?;
    log::info!(
        "least cost path done: {} cells, accumulated cost {:.3}",
        path.len(),
        cd.distance.value(destination)
    );

    Ok(PipelineOutput {
        cost_surface,
        cost_distance: cd,
        path,
        destination,
    })
}
