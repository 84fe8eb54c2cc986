//! Cost Surface Combiner — weighted sum of aligned cost layers.

use terrapath_core::{Error, NO_DATA, Raster, Result, is_no_data};

/// Combine aligned cost layers into one surface: `out[i] = sum(w_k * layer_k[i])`.
///
/// All layers must share one grid definition and every weight must be
/// non-negative and finite. No-data in any layer makes the output cell
/// no-data; it is never silently treated as zero. A non-finite sum on a
/// data cell is an arithmetic overflow.
pub fn combine(layers: &[&Raster<f64>], weights: &[f64]) -> Result<Raster<f64>> {
    let Some((first, rest)) = layers.split_first() else {
        return Err(Error::Configuration("no cost layers to combine".into()));
    };
    if layers.len() != weights.len() {
        return Err(Error::Configuration(format!(
            "{} layers but {} weights",
            layers.len(),
            weights.len()
        )));
    }
    for &w in weights {
        if !w.is_finite() || w < 0.0 {
            return Err(Error::Configuration(format!(
                "weights must be non-negative and finite, got {w}"
            )));
        }
    }
    for layer in rest {
        first.check_aligned(layer)?;
    }

    let spec = *first.spec();
    let mut cells = vec![0.0f64; spec.len()];
    for (layer, &w) in layers.iter().zip(weights) {
        for (acc, &v) in cells.iter_mut().zip(layer.cells()) {
            // NaN propagates on its own; the multiply-add never masks it.
            *acc += w * v;
        }
    }
    for (i, v) in cells.iter().enumerate() {
        if !v.is_finite() && !is_no_data(*v) {
            return Err(Error::ArithmeticOverflow(spec.point(i)));
        }
    }
    Raster::from_cells(spec, cells)
}
