//! Least-cost path demo on synthetic terrain.
//!
//! Generates a DEM with a central ridge, a river, a lake and existing
//! road/rail corridors, runs the full pipeline, and prints the cost
//! surface with the traced path overlaid.
//!
//!     leastcost --road 1 --rail 1 --lake 1 --river 1 --slope 1 --elevation 1

use clap::Parser;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use terrapath_core::{GridSpec, Point, Raster, Result, is_no_data};
use terrapath_pipeline::{
    GridVectorizer, PipelineConfig, PipelineInputs, Rasterize, Vectorize, Weights, run,
};

#[derive(Parser, Debug)]
#[command(about = "Least-cost path between two points on synthetic terrain")]
struct Args {
    /// Grid side length in cells.
    #[arg(long, default_value_t = 40)]
    size: u32,

    /// Cell size in world units.
    #[arg(long, default_value_t = 1000.0)]
    cell_size: f64,

    /// Random seed for the synthetic terrain.
    #[arg(long, default_value_t = 7)]
    seed: u64,

    #[arg(long, default_value_t = 1.0)]
    road: f64,
    #[arg(long, default_value_t = 1.0)]
    rail: f64,
    #[arg(long, default_value_t = 1.0)]
    lake: f64,
    #[arg(long, default_value_t = 1.0)]
    river: f64,
    #[arg(long, default_value_t = 1.0)]
    slope: f64,
    #[arg(long, default_value_t = 1.0)]
    elevation: f64,

    /// Buffer distance around infrastructure layers, in world units.
    #[arg(long, default_value_t = 2000.0)]
    buffer: f64,

    /// Accumulation cutoff for the cost-distance solve.
    #[arg(long, default_value_t = 200_000_000.0)]
    cutoff: f64,
}

/// Demo rasterizer: the "vector layer" is a seed mask on the target grid;
/// buffering dilates it by `buffer_distance / cell_size` cells.
struct MaskRasterizer;

impl Rasterize for MaskRasterizer {
    type Layer = Raster<bool>;

    fn rasterize(
        &self,
        layer: &Raster<bool>,
        spec: &GridSpec,
        buffer_distance: f64,
    ) -> Result<Raster<bool>> {
        let radius = (buffer_distance / spec.cell_size).ceil() as i32;
        let out = layer.map(|p, _| {
            for dy in -radius..=radius {
                for dx in -radius..=radius {
                    if layer.get(p.shift(dx, dy)) == Some(&true) {
                        return true;
                    }
                }
            }
            false
        });
        Ok(out)
    }
}

fn synthetic_dem(spec: GridSpec, rng: &mut StdRng) -> Raster<f64> {
    let mut dem = Raster::filled(spec, 0.0);
    let cx = spec.width as f64 / 2.0;
    for p in spec.iter() {
        // A north-south ridge down the middle plus gentle noise.
        let d = (p.x as f64 - cx).abs();
        let ridge = (600.0 - d * 40.0).max(0.0);
        let base = 200.0 + p.y as f64 * 2.0;
        dem.set(p, base + ridge + rng.random_range(0.0..15.0));
    }
    dem
}

fn line_mask(spec: GridSpec, cells: impl Iterator<Item = Point>) -> Raster<bool> {
    let mut mask = Raster::filled(spec, false);
    for p in cells {
        mask.set(p, true);
    }
    mask
}

fn print_map(surface: &Raster<f64>, path: &[Point], src: Point, dst: Point) {
    let (lo, hi) = surface.finite_min_max().unwrap_or((0.0, 1.0));
    let shades = [' ', '.', ':', '-', '=', '+', '*', '#'];
    for y in 0..surface.height() as i32 {
        let mut row = String::new();
        for x in 0..surface.width() as i32 {
            let p = Point::new(x, y);
            let ch = if p == src {
                'S'
            } else if p == dst {
                'F'
            } else if path.contains(&p) {
                'o'
            } else {
                let v = surface.value(p);
                if is_no_data(v) {
                    'X'
                } else {
                    let t = ((v - lo) / (hi - lo).max(f64::EPSILON)).clamp(0.0, 1.0);
                    shades[(t * (shades.len() - 1) as f64).round() as usize]
                }
            };
            row.push(ch);
        }
        println!("{row}");
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let n = args.size;
    let spec = GridSpec::new(n, n, args.cell_size, 400_000.0, 4_600_000.0);
    let mut rng = StdRng::seed_from_u64(args.seed);

    let dem = synthetic_dem(spec, &mut rng);
    let h = n as i32;
    // A river meandering down the east side, a lake in the northeast,
    // a road and a railway along the west edge.
    let river = line_mask(
        spec,
        (0..h).map(|y| Point::new(3 * h / 4 + ((y / 6) % 2), y)),
    );
    let lake = line_mask(
        spec,
        (0..h / 6).flat_map(|y| (0..h / 6).map(move |x| Point::new(x + 4 * h / 5, y + 2))),
    );
    let road = line_mask(spec, (0..h).map(|y| Point::new(2, y)));
    let rail = line_mask(spec, (0..h).map(|y| Point::new(4, y)));

    let sources = [Point::new(1, h - 2)];
    let destinations = [Point::new(h - 2, 1)];

    let config = PipelineConfig {
        weights: Weights {
            road: args.road,
            rail: args.rail,
            lake: args.lake,
            river: args.river,
            slope: args.slope,
            elevation: args.elevation,
        },
        buffer_distance: args.buffer,
        max_accumulation: args.cutoff,
        ..Default::default()
    };

    let inputs = PipelineInputs {
        dem: &dem,
        road: &road,
        rail: &rail,
        river: &river,
        lake: &lake,
        sources: &sources,
        destinations: &destinations,
    };

    let out = run(&MaskRasterizer, &inputs, &config)?;

    print_map(&out.cost_surface, &out.path, sources[0], out.destination);

    let line = GridVectorizer.vectorize(&out.path, &spec);
    log::info!(
        "path: {} cells, cost {:.3}, world endpoints {:?} -> {:?}",
        out.path.len(),
        out.cost_distance.distance.value(out.destination),
        line.points.first(),
        line.points.last(),
    );
    Ok(())
}
