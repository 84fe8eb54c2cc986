//! Per-cell backlinks recorded by the cost-distance solver.

use terrapath_core::Dir;

/// Where a cell's cheapest accumulated cost came from.
///
/// `Step(d)` points *toward* the cheaper predecessor: following `d` from
/// the cell moves one step closer to a source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Backlink {
    /// Never reached by the solver.
    #[default]
    None,
    /// A source cell (accumulated cost 0).
    Source,
    /// One step toward the cheapest predecessor.
    Step(Dir),
}

impl Backlink {
    /// Encode to the conventional backlink raster scheme: 0 = source,
    /// 1–8 = direction, 255 = unreached.
    pub const fn encode(self) -> u8 {
        match self {
            Backlink::None => 255,
            Backlink::Source => 0,
            Backlink::Step(d) => d as u8,
        }
    }

    /// Decode from the integer scheme. Any value outside {0..=8, 255} is
    /// `None`.
    pub const fn decode(code: u8) -> Backlink {
        match code {
            0 => Backlink::Source,
            c => match Dir::from_code(c) {
                Some(d) => Backlink::Step(d),
                None => Backlink::None,
            },
        }
    }
}
