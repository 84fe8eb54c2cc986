use terrapath_core::Point;

/// Euclidean distance between two cell coordinates, in cell units.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    ((a.x - b.x) as f64).hypot((a.y - b.y) as f64)
}

/// Shortest 8-connected move distance: diagonal steps count sqrt(2),
/// orthogonal steps count 1.
#[inline]
pub fn chebyshev_diagonal(a: Point, b: Point) -> f64 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    let (lo, hi) = if dx < dy { (dx, dy) } else { (dy, dx) };
    lo as f64 * std::f64::consts::SQRT_2 + (hi - lo) as f64
}
