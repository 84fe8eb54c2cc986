//! Terrain-derived cost layers: slope and normalized elevation.

use terrapath_core::{Error, NO_DATA, Point, Raster, Result, is_no_data};

/// Default vertical exaggeration applied before computing slope.
pub const DEFAULT_Z_FACTOR: f64 = 0.1;

/// Percent-rise slope of a DEM by Horn's 3x3 method.
///
/// For each cell the east-west and north-south elevation gradients are
/// estimated from the weighted 3x3 neighborhood, scaled by `z_factor`, and
/// combined as `100 * sqrt(gx^2 + gy^2)`. Border cells clamp the window to
/// the grid; no-data neighbors fall back to the centre elevation, and a
/// no-data centre stays no-data.
pub fn slope_cost(dem: &Raster<f64>, z_factor: f64) -> Result<Raster<f64>> {
    let spec = *dem.spec();
    if spec.is_empty() {
        return Err(Error::Configuration("slope of an empty DEM".into()));
    }
    if !(z_factor.is_finite() && z_factor > 0.0) {
        return Err(Error::Configuration(format!(
            "z-factor must be positive and finite, got {z_factor}"
        )));
    }

    let mut out = Raster::filled(spec, NO_DATA);
    for p in spec.iter() {
        let center = dem.value(p);
        if is_no_data(center) {
            continue;
        }
        let z = |dx: i32, dy: i32| -> f64 {
            let q = Point::new(
                (p.x + dx).clamp(0, spec.width as i32 - 1),
                (p.y + dy).clamp(0, spec.height as i32 - 1),
            );
            let v = dem.value(q);
            if is_no_data(v) { center } else { v }
        };
        // Horn weights: corners 1, edges 2.
        let gx = ((z(1, -1) + 2.0 * z(1, 0) + z(1, 1)) - (z(-1, -1) + 2.0 * z(-1, 0) + z(-1, 1)))
            / (8.0 * spec.cell_size);
        let gy = ((z(-1, 1) + 2.0 * z(0, 1) + z(1, 1)) - (z(-1, -1) + 2.0 * z(0, -1) + z(1, -1)))
            / (8.0 * spec.cell_size);
        let rise = (gx * z_factor).hypot(gy * z_factor);
        out.set(p, 100.0 * rise);
    }
    Ok(out)
}

/// Normalize a DEM into an elevation cost layer.
///
/// Each cell becomes `(v - min) * (10 / max)` where min and max are the
/// DEM's own finite statistics. No-data propagates.
pub fn elevation_cost(dem: &Raster<f64>) -> Result<Raster<f64>> {
    let Some((min, max)) = dem.finite_min_max() else {
        return Err(Error::Configuration(
            "elevation cost of an all-no-data DEM".into(),
        ));
    };
    if max == 0.0 {
        return Err(Error::Configuration(
            "DEM maximum is zero, cannot scale elevation cost".into(),
        ));
    }
    let scale = 10.0 / max;
    Ok(dem.map(|_, &v| if is_no_data(v) { NO_DATA } else { (v - min) * scale }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use terrapath_core::GridSpec;

    const EPS: f64 = 1e-9;

    fn ramp_dem(width: u32, height: u32, cell_size: f64, rise_per_cell: f64) -> Raster<f64> {
        let spec = GridSpec::new(width, height, cell_size, 0.0, 0.0);
        let mut dem = Raster::filled(spec, 0.0);
        for p in spec.iter() {
            dem.set(p, p.x as f64 * rise_per_cell);
        }
        dem
    }

    #[test]
    fn slope_of_constant_gradient() {
        // 1 unit of rise per 10-unit cell, z-factor 1: 10 percent everywhere.
        let dem = ramp_dem(6, 6, 10.0, 1.0);
        let slope = slope_cost(&dem, 1.0).unwrap();
        // Border columns see a clamped window (half gradient), so check the
        // interior only.
        for (p, &v) in slope.iter() {
            if p.x == 0 || p.x == 5 {
                continue;
            }
            assert!((v - 10.0).abs() < EPS, "slope {v} at {p}");
        }
    }

    #[test]
    fn slope_scales_with_z_factor() {
        let dem = ramp_dem(5, 5, 10.0, 1.0);
        let slope = slope_cost(&dem, 0.1).unwrap();
        let v = slope.value(Point::new(2, 2));
        assert!((v - 1.0).abs() < EPS);
    }

    #[test]
    fn slope_of_flat_dem_is_zero() {
        let dem = Raster::filled(GridSpec::unit(4, 4), 250.0);
        let slope = slope_cost(&dem, DEFAULT_Z_FACTOR).unwrap();
        assert!(slope.cells().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn slope_propagates_no_data() {
        let mut dem = ramp_dem(4, 4, 10.0, 1.0);
        dem.set(Point::new(1, 1), NO_DATA);
        let slope = slope_cost(&dem, 1.0).unwrap();
        assert!(is_no_data(slope.value(Point::new(1, 1))));
        // Neighbors stay defined.
        assert!(slope.value(Point::new(2, 1)).is_finite());
    }

    #[test]
    fn slope_rejects_bad_z_factor() {
        let dem = ramp_dem(3, 3, 10.0, 1.0);
        assert!(slope_cost(&dem, 0.0).is_err());
        assert!(slope_cost(&dem, f64::NAN).is_err());
    }

    #[test]
    fn elevation_normalization() {
        let spec = GridSpec::unit(2, 2);
        let dem = Raster::from_cells(spec, vec![100.0, 150.0, 200.0, 400.0]).unwrap();
        let cost = elevation_cost(&dem).unwrap();
        // (v - 100) * (10 / 400)
        assert!((cost.value(Point::new(0, 0)) - 0.0).abs() < EPS);
        assert!((cost.value(Point::new(1, 1)) - 7.5).abs() < EPS);
    }

    #[test]
    fn elevation_rejects_all_no_data() {
        let dem: Raster<f64> = Raster::filled(GridSpec::unit(2, 2), NO_DATA);
        assert!(elevation_cost(&dem).is_err());
    }
}
