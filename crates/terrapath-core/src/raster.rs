//! The [`Raster`] type — an owned 2D grid of cell values.
//!
//! Unlike a shared-view grid, a `Raster` exclusively owns its storage: each
//! pipeline stage produces a raster, hands it to the next stage, and never
//! mutates it afterwards. Cloning copies the data.

use crate::error::{Error, Result};
use crate::geom::{GridSpec, Point};

/// No-data sentinel for cost rasters. Marks impassable or unknown cells.
///
/// NaN propagates through arithmetic, so a weighted sum involving a no-data
/// cell stays no-data without special-casing. Test with [`is_no_data`], not
/// `==`.
pub const NO_DATA: f64 = f64::NAN;

/// Sentinel for cells never reached by the cost-distance solver.
pub const UNREACHABLE: f64 = f64::INFINITY;

/// Whether `v` is the no-data sentinel.
#[inline]
pub fn is_no_data(v: f64) -> bool {
    v.is_nan()
}

/// An owned row-major 2D grid of `T` values with a [`GridSpec`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Raster<T> {
    spec: GridSpec,
    cells: Vec<T>,
}

impl<T: Clone> Raster<T> {
    /// Create a raster filled with `fill`.
    pub fn filled(spec: GridSpec, fill: T) -> Self {
        Self {
            cells: vec![fill; spec.len()],
            spec,
        }
    }

    /// Create a raster from an existing row-major cell vector.
    ///
    /// Fails with a configuration error if the vector length does not match
    /// the spec.
    pub fn from_cells(spec: GridSpec, cells: Vec<T>) -> Result<Self> {
        if cells.len() != spec.len() {
            return Err(Error::Configuration(format!(
                "cell count {} does not match grid {}",
                cells.len(),
                spec
            )));
        }
        Ok(Self { spec, cells })
    }
}

impl<T: Clone + Default> Raster<T> {
    /// Create a raster filled with `T::default()`.
    pub fn new(spec: GridSpec) -> Self {
        Self::filled(spec, T::default())
    }
}

impl<T> Raster<T> {
    /// The grid definition.
    #[inline]
    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    /// Grid width in cells.
    #[inline]
    pub fn width(&self) -> u32 {
        self.spec.width
    }

    /// Grid height in cells.
    #[inline]
    pub fn height(&self) -> u32 {
        self.spec.height
    }

    /// Whether `p` lies inside the raster.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.spec.contains(p)
    }

    /// Reference to the cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, p: Point) -> Option<&T> {
        self.spec.idx(p).map(|i| &self.cells[i])
    }

    /// Set the cell at `p`. Out-of-bounds writes are ignored.
    #[inline]
    pub fn set(&mut self, p: Point, value: T) {
        if let Some(i) = self.spec.idx(p) {
            self.cells[i] = value;
        }
    }

    /// The flat row-major cell slice.
    #[inline]
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// Mutable flat cell slice.
    #[inline]
    pub fn cells_mut(&mut self) -> &mut [T] {
        &mut self.cells
    }

    /// Row-major iterator over `(Point, &T)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &T)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, v)| (self.spec.point(i), v))
    }

    /// Produce a new raster of the same shape by mapping every cell.
    pub fn map<U, F: FnMut(Point, &T) -> U>(&self, mut f: F) -> Raster<U> {
        Raster {
            spec: self.spec,
            cells: self
                .cells
                .iter()
                .enumerate()
                .map(|(i, v)| f(self.spec.point(i), v))
                .collect(),
        }
    }

    /// Check that another raster shares this raster's grid definition.
    pub fn check_aligned<U>(&self, other: &Raster<U>) -> Result<()> {
        if self.spec != other.spec {
            return Err(Error::Configuration(format!(
                "grid mismatch: {} vs {}",
                self.spec, other.spec
            )));
        }
        Ok(())
    }
}

impl Raster<f64> {
    /// Cost value at `p`. Out-of-bounds reads yield [`NO_DATA`].
    #[inline]
    pub fn value(&self, p: Point) -> f64 {
        self.get(p).copied().unwrap_or(NO_DATA)
    }

    /// Minimum and maximum over finite cells, or `None` if every cell is
    /// no-data.
    pub fn finite_min_max(&self) -> Option<(f64, f64)> {
        let mut out: Option<(f64, f64)> = None;
        for &v in &self.cells {
            if !v.is_finite() {
                continue;
            }
            out = Some(match out {
                Some((lo, hi)) => (lo.min(v), hi.max(v)),
                None => (v, v),
            });
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_and_get_set() {
        let spec = GridSpec::unit(4, 3);
        let mut r = Raster::filled(spec, 2.5f64);
        assert_eq!(r.get(Point::new(3, 2)), Some(&2.5));
        r.set(Point::new(1, 1), 9.0);
        assert_eq!(r.value(Point::new(1, 1)), 9.0);
        // Out-of-bounds writes are silent, reads are NO_DATA.
        r.set(Point::new(4, 0), 1.0);
        assert!(is_no_data(r.value(Point::new(4, 0))));
    }

    #[test]
    fn from_cells_rejects_wrong_length() {
        let spec = GridSpec::unit(3, 3);
        assert!(Raster::from_cells(spec, vec![0.0; 8]).is_err());
        assert!(Raster::from_cells(spec, vec![0.0; 9]).is_ok());
    }

    #[test]
    fn map_preserves_spec() {
        let spec = GridSpec::new(3, 2, 10.0, 5.0, 5.0);
        let r = Raster::filled(spec, 1.0f64);
        let doubled = r.map(|_, v| v * 2.0);
        assert_eq!(doubled.spec(), &spec);
        assert!(doubled.cells().iter().all(|&v| v == 2.0));
    }

    #[test]
    fn check_aligned_detects_mismatch() {
        let a: Raster<f64> = Raster::filled(GridSpec::unit(3, 3), 0.0);
        let b: Raster<f64> = Raster::filled(GridSpec::unit(3, 4), 0.0);
        let c: Raster<f64> = Raster::filled(GridSpec::new(3, 3, 2.0, 0.0, 0.0), 0.0);
        assert!(a.check_aligned(&a.clone()).is_ok());
        assert!(a.check_aligned(&b).is_err());
        assert!(a.check_aligned(&c).is_err());
    }

    #[test]
    fn finite_min_max_skips_sentinels() {
        let spec = GridSpec::unit(2, 2);
        let r = Raster::from_cells(spec, vec![3.0, NO_DATA, -1.0, UNREACHABLE]).unwrap();
        assert_eq!(r.finite_min_max(), Some((-1.0, 3.0)));
        let empty = Raster::filled(spec, NO_DATA);
        assert_eq!(empty.finite_min_max(), None);
    }

    #[test]
    fn no_data_is_not_equal_to_itself() {
        // NaN semantics: must use the predicate, never ==.
        assert!(is_no_data(NO_DATA));
        assert_ne!(NO_DATA, NO_DATA);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn raster_round_trip() {
        let spec = GridSpec::unit(2, 2);
        let r = Raster::from_cells(spec, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let json = serde_json::to_string(&r).unwrap();
        let back: Raster<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }
}
