//! Obstacle-mask reclassification.

use terrapath_core::Raster;

/// Reclassify a rasterized feature mask into a {0, 1} cost layer: cells
/// covered by the (buffered) feature cost 1, everything else costs 0.
///
/// The mask itself comes from an external rasterizer; this step only maps
/// presence to cost.
pub fn obstacle_cost(mask: &Raster<bool>) -> Raster<f64> {
    mask.map(|_, &covered| if covered { 1.0 } else { 0.0 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use terrapath_core::{GridSpec, Point, Raster};

    #[test]
    fn presence_maps_to_one() {
        let spec = GridSpec::unit(3, 2);
        let mut mask = Raster::filled(spec, false);
        mask.set(Point::new(1, 0), true);
        mask.set(Point::new(2, 1), true);

        let cost = obstacle_cost(&mask);
        assert_eq!(cost.value(Point::new(1, 0)), 1.0);
        assert_eq!(cost.value(Point::new(2, 1)), 1.0);
        assert_eq!(cost.value(Point::new(0, 0)), 0.0);
        assert_eq!(cost.spec(), &spec);
    }
}
