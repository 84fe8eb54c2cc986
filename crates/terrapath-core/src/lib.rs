//! **terrapath-core** — raster grid and geometry primitives for least-cost
//! path analysis.
//!
//! This crate provides the foundational types used across the *terrapath*
//! workspace: cell coordinates and compass directions, the shared grid
//! definition ([`GridSpec`]), owned raster storage ([`Raster`]), the
//! no-data and unreachable sentinels, and the common error type.

pub mod error;
pub mod geom;
pub mod raster;

pub use error::{Error, Result};
pub use geom::{Dir, GridSpec, Point};
pub use raster::{NO_DATA, Raster, UNREACHABLE, is_no_data};
