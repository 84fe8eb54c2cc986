//! **terrapath-layers** — cost layer construction and combination.
//!
//! Stage 1 and 2 of the least-cost path pipeline:
//!
//! - obstacle reclassification ([`obstacle_cost`])
//! - terrain-derived layers ([`slope_cost`], [`elevation_cost`])
//! - the weighted-sum Cost Surface Combiner ([`combine`])

mod combine;
mod obstacle;
mod terrain;

pub use combine::combine;
pub use obstacle::obstacle_cost;
pub use terrain::{DEFAULT_Z_FACTOR, elevation_cost, slope_cost};
