//! Geometry primitives: [`Point`], [`Dir`] and [`GridSpec`].

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D grid cell coordinate. X grows right (columns), Y grows down (rows).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a point shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// All eight neighbours (cardinal + diagonal), clockwise from north.
    #[inline]
    pub fn neighbors_8(self) -> [Point; 8] {
        [
            Self::new(self.x, self.y - 1),
            Self::new(self.x + 1, self.y - 1),
            Self::new(self.x + 1, self.y),
            Self::new(self.x + 1, self.y + 1),
            Self::new(self.x, self.y + 1),
            Self::new(self.x - 1, self.y + 1),
            Self::new(self.x - 1, self.y),
            Self::new(self.x - 1, self.y - 1),
        ]
    }

    /// Whether `other` is one of this point's eight neighbours.
    #[inline]
    pub fn adjacent_8(self, other: Point) -> bool {
        let d = self - other;
        d != Point::ZERO && d.x.abs() <= 1 && d.y.abs() <= 1
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// ---------------------------------------------------------------------------
// Dir
// ---------------------------------------------------------------------------

/// One of the eight compass directions between adjacent cells.
///
/// The integer encoding (E=1 .. NE=8, clockwise) matches the conventional
/// backlink raster scheme, with 0 reserved for source cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Dir {
    East = 1,
    SouthEast = 2,
    South = 3,
    SouthWest = 4,
    West = 5,
    NorthWest = 6,
    North = 7,
    NorthEast = 8,
}

impl Dir {
    /// All eight directions in encoding order.
    pub const ALL: [Dir; 8] = [
        Dir::East,
        Dir::SouthEast,
        Dir::South,
        Dir::SouthWest,
        Dir::West,
        Dir::NorthWest,
        Dir::North,
        Dir::NorthEast,
    ];

    /// Unit cell offset of this direction.
    #[inline]
    pub const fn offset(self) -> Point {
        match self {
            Dir::East => Point::new(1, 0),
            Dir::SouthEast => Point::new(1, 1),
            Dir::South => Point::new(0, 1),
            Dir::SouthWest => Point::new(-1, 1),
            Dir::West => Point::new(-1, 0),
            Dir::NorthWest => Point::new(-1, -1),
            Dir::North => Point::new(0, -1),
            Dir::NorthEast => Point::new(1, -1),
        }
    }

    /// The opposite direction.
    #[inline]
    pub const fn opposite(self) -> Dir {
        match self {
            Dir::East => Dir::West,
            Dir::SouthEast => Dir::NorthWest,
            Dir::South => Dir::North,
            Dir::SouthWest => Dir::NorthEast,
            Dir::West => Dir::East,
            Dir::NorthWest => Dir::SouthEast,
            Dir::North => Dir::South,
            Dir::NorthEast => Dir::SouthWest,
        }
    }

    /// Whether this direction is diagonal (moves on both axes).
    #[inline]
    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Dir::SouthEast | Dir::SouthWest | Dir::NorthWest | Dir::NorthEast
        )
    }

    /// Direction of the single step from `from` to an adjacent `to`.
    /// Returns `None` if the cells are not 8-adjacent.
    pub fn between(from: Point, to: Point) -> Option<Dir> {
        let d = to - from;
        match (d.x, d.y) {
            (1, 0) => Some(Dir::East),
            (1, 1) => Some(Dir::SouthEast),
            (0, 1) => Some(Dir::South),
            (-1, 1) => Some(Dir::SouthWest),
            (-1, 0) => Some(Dir::West),
            (-1, -1) => Some(Dir::NorthWest),
            (0, -1) => Some(Dir::North),
            (1, -1) => Some(Dir::NorthEast),
            _ => None,
        }
    }

    /// Decode from the 1–8 integer scheme.
    pub const fn from_code(code: u8) -> Option<Dir> {
        match code {
            1 => Some(Dir::East),
            2 => Some(Dir::SouthEast),
            3 => Some(Dir::South),
            4 => Some(Dir::SouthWest),
            5 => Some(Dir::West),
            6 => Some(Dir::NorthWest),
            7 => Some(Dir::North),
            8 => Some(Dir::NorthEast),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// GridSpec
// ---------------------------------------------------------------------------

/// Common grid definition shared by every raster in a pipeline run:
/// dimensions, square cell size, and the world coordinate of the top-left
/// corner of cell (0, 0).
///
/// All rasters consumed together must carry equal specs; a mismatch is a
/// configuration error, never silently reinterpreted.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSpec {
    pub width: u32,
    pub height: u32,
    pub cell_size: f64,
    pub origin_x: f64,
    pub origin_y: f64,
}

impl GridSpec {
    /// Create a spec with cell size 1 and origin (0, 0). Enough for
    /// grid-space work and tests.
    pub const fn unit(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cell_size: 1.0,
            origin_x: 0.0,
            origin_y: 0.0,
        }
    }

    /// Create a fully georeferenced spec.
    pub const fn new(width: u32, height: u32, cell_size: f64, origin_x: f64, origin_y: f64) -> Self {
        Self {
            width,
            height,
            cell_size,
            origin_x,
            origin_y,
        }
    }

    /// Total number of cells.
    #[inline]
    pub const fn len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Whether the grid has zero cells.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as u32) < self.width && (p.y as u32) < self.height
    }

    /// Convert a `Point` to a flat row-major index. Returns `None` if out
    /// of bounds.
    #[inline]
    pub fn idx(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.y as usize * self.width as usize + p.x as usize)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let w = self.width as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }

    /// World coordinate of the centre of cell `p`.
    pub fn cell_center(&self, p: Point) -> (f64, f64) {
        (
            self.origin_x + (p.x as f64 + 0.5) * self.cell_size,
            self.origin_y - (p.y as f64 + 0.5) * self.cell_size,
        )
    }

    /// Cell containing the world coordinate, or `None` if outside the
    /// grid extent.
    pub fn world_to_cell(&self, wx: f64, wy: f64) -> Option<Point> {
        let x = ((wx - self.origin_x) / self.cell_size).floor();
        let y = ((self.origin_y - wy) / self.cell_size).floor();
        let p = Point::new(x as i32, y as i32);
        self.contains(p).then_some(p)
    }

    /// Row-major iterator over every cell coordinate.
    pub fn iter(&self) -> impl Iterator<Item = Point> + use<> {
        let w = self.width as i32;
        let h = self.height as i32;
        (0..h).flat_map(move |y| (0..w).map(move |x| Point::new(x, y)))
    }
}

impl fmt::Display for GridSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} @ {} ({}, {})",
            self.width, self.height, self.cell_size, self.origin_x, self.origin_y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic() {
        let a = Point::new(1, 2);
        let b = Point::new(3, 4);
        assert_eq!(a + b, Point::new(4, 6));
        assert_eq!(b - a, Point::new(2, 2));
        assert_eq!(a.shift(-1, 1), Point::new(0, 3));
    }

    #[test]
    fn point_adjacency() {
        let p = Point::new(3, 3);
        for n in p.neighbors_8() {
            assert!(p.adjacent_8(n));
        }
        assert!(!p.adjacent_8(p));
        assert!(!p.adjacent_8(Point::new(5, 3)));
    }

    #[test]
    fn dir_offsets_cover_all_neighbors() {
        let p = Point::new(2, 2);
        let from_dirs: Vec<Point> = Dir::ALL.iter().map(|d| p + d.offset()).collect();
        for n in p.neighbors_8() {
            assert!(from_dirs.contains(&n));
        }
    }

    #[test]
    fn dir_between_and_opposite() {
        let a = Point::new(4, 4);
        for d in Dir::ALL {
            let b = a + d.offset();
            assert_eq!(Dir::between(a, b), Some(d));
            assert_eq!(Dir::between(b, a), Some(d.opposite()));
        }
        assert_eq!(Dir::between(a, a), None);
        assert_eq!(Dir::between(a, Point::new(7, 4)), None);
    }

    #[test]
    fn dir_code_round_trip() {
        for d in Dir::ALL {
            assert_eq!(Dir::from_code(d as u8), Some(d));
        }
        assert_eq!(Dir::from_code(0), None);
        assert_eq!(Dir::from_code(9), None);
    }

    #[test]
    fn spec_index_round_trip() {
        let spec = GridSpec::unit(7, 5);
        for (i, p) in spec.iter().enumerate() {
            assert_eq!(spec.idx(p), Some(i));
            assert_eq!(spec.point(i), p);
        }
        assert_eq!(spec.idx(Point::new(7, 0)), None);
        assert_eq!(spec.idx(Point::new(0, -1)), None);
    }

    #[test]
    fn spec_world_transforms() {
        let spec = GridSpec::new(10, 10, 30.0, 500.0, 4000.0);
        let p = Point::new(3, 2);
        let (wx, wy) = spec.cell_center(p);
        assert_eq!(wx, 500.0 + 3.5 * 30.0);
        assert_eq!(wy, 4000.0 - 2.5 * 30.0);
        assert_eq!(spec.world_to_cell(wx, wy), Some(p));
        assert_eq!(spec.world_to_cell(0.0, 0.0), None);
    }
}
