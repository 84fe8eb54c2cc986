//! Cost-Distance Solver — multi-source Dijkstra over the 8-connected grid.

use std::collections::BinaryHeap;
use std::f64::consts::SQRT_2;

use terrapath_core::{Dir, Error, Point, Raster, Result, UNREACHABLE, is_no_data};

use crate::backlink::Backlink;

/// Default accumulation cutoff. Expansion never exceeds this cumulative
/// cost; cells beyond it stay unreachable.
pub const DEFAULT_MAX_ACCUMULATION: f64 = 200_000_000.0;

/// Solver parameters.
#[derive(Debug, Clone, Copy)]
pub struct SolveOptions {
    /// Maximum cumulative cost to accumulate before a cell is left
    /// unreachable.
    pub max_accumulation: f64,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            max_accumulation: DEFAULT_MAX_ACCUMULATION,
        }
    }
}

/// Output of [`cost_distance`]: per-cell cumulative cost and the backlink
/// toward the cheapest predecessor.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostDistance {
    /// Minimum cumulative cost from the source set. Unreached cells hold
    /// [`UNREACHABLE`].
    pub distance: Raster<f64>,
    /// Direction toward the cheapest predecessor; `Backlink::Source` at
    /// source cells, `Backlink::None` where unreached.
    pub backlink: Raster<Backlink>,
}

impl CostDistance {
    /// Whether `p` was reached by the solve.
    pub fn reached(&self, p: Point) -> bool {
        self.distance
            .get(p)
            .is_some_and(|&d| d != UNREACHABLE && !is_no_data(d))
    }
}

// Frontier entry ordered for a min-heap on (cost, seq). The sequence number
// makes equal-cost pops follow insertion order, so results are
// deterministic.
#[derive(Clone, Copy, PartialEq)]
struct FrontierRef {
    cost: f64,
    seq: u64,
    idx: usize,
}

impl Eq for FrontierRef {}

impl Ord for FrontierRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest cost first,
        // earliest seq on ties.
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Compute the minimum cumulative cost from any cell in `sources` to every
/// reachable cell of `surface`.
///
/// The edge cost between adjacent cells is the mean of their two surface
/// values, scaled by the move distance (1 orthogonal, sqrt(2) diagonal).
/// No-data cells are impassable and never expanded into. Sources lying on
/// no-data cells are ignored; an empty or all-impassable source set is a
/// configuration error. A non-finite cumulative cost aborts the solve with
/// an arithmetic overflow error.
pub fn cost_distance(
    surface: &Raster<f64>,
    sources: &[Point],
    opts: &SolveOptions,
) -> Result<CostDistance> {
    if sources.is_empty() {
        return Err(Error::Configuration("empty source set".into()));
    }
    if !(opts.max_accumulation.is_finite() && opts.max_accumulation >= 0.0) {
        return Err(Error::Configuration(format!(
            "max accumulation must be non-negative and finite, got {}",
            opts.max_accumulation
        )));
    }
    for (p, &v) in surface.iter() {
        if v < 0.0 {
            return Err(Error::Configuration(format!(
                "negative cost {v} at {p}"
            )));
        }
    }

    let spec = *surface.spec();
    let mut distance = Raster::filled(spec, UNREACHABLE);
    let mut backlink = Raster::filled(spec, Backlink::None);
    let mut open: BinaryHeap<FrontierRef> = BinaryHeap::new();
    let mut seq: u64 = 0;

    // Seed sources. Duplicates and off-grid or impassable points are
    // skipped rather than rejected; only a fully unusable set is an error.
    let mut seeded = 0usize;
    for &src in sources {
        let Some(si) = spec.idx(src) else { continue };
        if is_no_data(surface.cells()[si]) || distance.cells()[si] == 0.0 {
            continue;
        }
        distance.cells_mut()[si] = 0.0;
        backlink.set(src, Backlink::Source);
        open.push(FrontierRef {
            cost: 0.0,
            seq,
            idx: si,
        });
        seq += 1;
        seeded += 1;
    }
    if seeded == 0 {
        return Err(Error::Configuration(
            "no source cell lies on a passable grid cell".into(),
        ));
    }
    log::debug!("cost distance: {seeded} source cells, cutoff {}", opts.max_accumulation);

    while let Some(current) = open.pop() {
        let ci = current.idx;
        // Stale entry: a cheaper route reached this cell after it was
        // pushed.
        if current.cost > distance.cells()[ci] {
            continue;
        }
        let cp = spec.point(ci);
        let cv = surface.cells()[ci];

        for dir in Dir::ALL {
            let np = cp + dir.offset();
            let Some(ni) = spec.idx(np) else { continue };
            let nv = surface.cells()[ni];
            if is_no_data(nv) {
                continue;
            }
            let step = if dir.is_diagonal() { SQRT_2 } else { 1.0 };
            let tentative = current.cost + 0.5 * (cv + nv) * step;
            if !tentative.is_finite() {
                return Err(Error::ArithmeticOverflow(np));
            }
            if tentative > opts.max_accumulation || tentative >= distance.cells()[ni] {
                continue;
            }
            distance.cells_mut()[ni] = tentative;
            // Point back toward the predecessor we came from.
            backlink.set(np, Backlink::Step(dir.opposite()));
            open.push(FrontierRef {
                cost: tentative,
                seq,
                idx: ni,
            });
            seq += 1;
        }
    }

    log::debug!("cost distance: done after {seq} frontier pushes");
    Ok(CostDistance { distance, backlink })
}
