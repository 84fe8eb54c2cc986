//! Path Tracer — walks backlinks from a destination to a source cell.

use terrapath_core::{Error, Point, Raster, Result};

use crate::backlink::Backlink;

/// Trace the least-cost path ending at `destination`.
///
/// Follows the recorded backlinks until a source cell is reached and
/// returns the cell sequence ordered source → destination, both endpoints
/// included. Fails with [`Error::UnreachableDestination`] if the
/// destination was never reached, and defensively if the walk exceeds
/// width × height steps (a cycle would mean a corrupted backlink grid).
pub fn trace_path(backlink: &Raster<Backlink>, destination: Point) -> Result<Vec<Point>> {
    let max_steps = backlink.spec().len();
    let mut path = Vec::new();
    let mut cur = destination;

    loop {
        if path.len() > max_steps {
            // Must never happen with a correct solver.
            return Err(Error::UnreachableDestination(destination));
        }
        match backlink.get(cur) {
            None | Some(Backlink::None) => {
                return Err(Error::UnreachableDestination(destination));
            }
            Some(Backlink::Source) => {
                path.push(cur);
                break;
            }
            Some(Backlink::Step(d)) => {
                path.push(cur);
                cur = cur + d.offset();
            }
        }
    }

    path.reverse();
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{SolveOptions, cost_distance};
    use terrapath_core::{Dir, GridSpec, NO_DATA, Raster};

    fn flat(n: u32) -> Raster<f64> {
        Raster::filled(GridSpec::unit(n, n), 1.0)
    }

    #[test]
    fn uniform_grid_traces_the_diagonal() {
        let n = 6;
        let surface = flat(n);
        let cd = cost_distance(&surface, &[Point::ZERO], &SolveOptions::default()).unwrap();
        let dest = Point::new(n as i32 - 1, n as i32 - 1);
        let path = trace_path(&cd.backlink, dest).unwrap();
        // N cells, N-1 diagonal steps.
        assert_eq!(path.len(), n as usize);
        assert_eq!(path[0], Point::ZERO);
        assert_eq!(*path.last().unwrap(), dest);
        for pair in path.windows(2) {
            assert!(pair[0].adjacent_8(pair[1]));
        }
    }

    #[test]
    fn five_by_five_scenario() {
        let surface = flat(5);
        let cd = cost_distance(&surface, &[Point::ZERO], &SolveOptions::default()).unwrap();
        let path = trace_path(&cd.backlink, Point::new(4, 4)).unwrap();
        assert_eq!(path.len(), 5);
    }

    #[test]
    fn wall_forces_path_through_the_gap() {
        // Row 2 impassable except column 4.
        let mut surface = flat(5);
        for x in 0..4 {
            surface.set(Point::new(x, 2), NO_DATA);
        }
        let cd = cost_distance(&surface, &[Point::ZERO], &SolveOptions::default()).unwrap();
        let path = trace_path(&cd.backlink, Point::new(4, 4)).unwrap();
        assert!(path.contains(&Point::new(4, 2)), "path {path:?}");
        assert_eq!(path[0], Point::ZERO);
        for pair in path.windows(2) {
            assert!(pair[0].adjacent_8(pair[1]));
        }
    }

    #[test]
    fn unreached_destination_fails() {
        let mut surface = flat(5);
        // Seal off the bottom-right corner completely.
        for p in [
            Point::new(3, 4),
            Point::new(3, 3),
            Point::new(4, 3),
        ] {
            surface.set(p, NO_DATA);
        }
        let cd = cost_distance(&surface, &[Point::ZERO], &SolveOptions::default()).unwrap();
        assert!(matches!(
            trace_path(&cd.backlink, Point::new(4, 4)),
            Err(Error::UnreachableDestination(_))
        ));
        // Out of bounds is equally unreachable.
        assert!(trace_path(&cd.backlink, Point::new(9, 9)).is_err());
    }

    #[test]
    fn corrupted_backlink_cycle_is_detected() {
        let spec = GridSpec::unit(3, 3);
        let mut backlink = Raster::filled(spec, Backlink::None);
        // Two cells pointing at each other, no source anywhere.
        backlink.set(Point::new(0, 0), Backlink::Step(Dir::East));
        backlink.set(Point::new(1, 0), Backlink::Step(Dir::West));
        assert!(matches!(
            trace_path(&backlink, Point::new(0, 0)),
            Err(Error::UnreachableDestination(_))
        ));
    }

    #[test]
    fn tracing_a_source_yields_a_single_cell() {
        let surface = flat(3);
        let src = Point::new(1, 1);
        let cd = cost_distance(&surface, &[src], &SolveOptions::default()).unwrap();
        assert_eq!(trace_path(&cd.backlink, src).unwrap(), vec![src]);
    }
}
