//! **terrapath-paths** — cost-distance solving and path tracing.
//!
//! Stage 3 and 4 of the least-cost path pipeline:
//!
//! - [`cost_distance`] runs a multi-source Dijkstra expansion over an
//!   8-connected cost surface, producing a cumulative [`CostDistance`]
//!   grid pair (distance + backlinks);
//! - [`trace_path`] follows the backlinks from a destination cell back to
//!   a source.
//!
//! Edge costs follow the usual cost-distance convention: the mean of the
//! two adjacent cell costs, scaled by 1 for orthogonal and sqrt(2) for
//! diagonal moves.

mod backlink;
mod distance;
mod solver;
mod tracer;

pub use backlink::Backlink;
pub use distance::{chebyshev_diagonal, euclidean};
pub use solver::{CostDistance, DEFAULT_MAX_ACCUMULATION, SolveOptions, cost_distance};
pub use tracer::trace_path;
