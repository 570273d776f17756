use crate::{util::column_letters, TileError, TileFamily};
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, convert::TryFrom, fmt};

/// The logical address of a tile within a map: column `x` and row `y`, both
/// zero-based. A coordinate also remembers which [TileFamily] it belongs to,
/// because the same `(x, y)` means a completely different patch of pixels for
/// a hexagon than for a triangle. Two coordinates are only equal if their
/// families match as well.
///
/// Coordinates are ordered row-major (`y` first, then `x`), which is the same
/// order [crate::TileMap::tiles] walks the map.
///
/// Coordinates are displayed spreadsheet-style, with the column as letters
/// and the row as a number: `(1, 3)` is `B3`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTileCoord")]
pub struct TileCoord {
    family: TileFamily,
    x: u32,
    y: u32,
}

impl TileCoord {
    /// Build a coordinate from unsigned components. This can't fail, since
    /// unsigned components are always non-negative.
    pub const fn new(family: TileFamily, x: u32, y: u32) -> Self {
        Self { family, x, y }
    }

    /// Build a coordinate from signed components, e.g. values that came out
    /// of pixel math. Returns an error if either component is negative or too
    /// large to be a column/row index.
    pub fn try_new(
        family: TileFamily,
        x: i64,
        y: i64,
    ) -> Result<Self, TileError> {
        match (u32::try_from(x), u32::try_from(y)) {
            (Ok(ux), Ok(uy)) => Ok(Self::new(family, ux, uy)),
            _ => Err(TileError::NegativeCoord { x, y }),
        }
    }

    pub fn family(&self) -> TileFamily {
        self.family
    }

    /// Horizontal location (column)
    pub fn x(&self) -> u32 {
        self.x
    }

    /// Vertical location (row)
    pub fn y(&self) -> u32 {
        self.y
    }
}

impl PartialOrd for TileCoord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TileCoord {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.family, self.y, self.x).cmp(&(other.family, other.y, other.x))
    }
}

impl fmt::Display for TileCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", column_letters(self.x), self.y)
    }
}

/// Unchecked mirror of [TileCoord], used so that deserialization goes through
/// the same validation as [TileCoord::try_new]
#[derive(Deserialize)]
#[serde(rename = "TileCoord")]
struct RawTileCoord {
    family: TileFamily,
    x: i64,
    y: i64,
}

impl TryFrom<RawTileCoord> for TileCoord {
    type Error = TileError;

    fn try_from(raw: RawTileCoord) -> Result<Self, Self::Error> {
        Self::try_new(raw.family, raw.x, raw.y)
    }
}
