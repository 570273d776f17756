use crate::{TileCoord, TileFamily};
use thiserror::Error;

/// Everything that can go wrong while building or querying a tile map. Points
/// that fall off the map are **not** errors; those come back as `None` from
/// the various `point_to_coord` functions.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TileError {
    /// The tile grid handed to a map constructor isn't a non-empty rectangle
    #[error("invalid tile grid shape: {0}")]
    InvalidShape(String),

    /// A tile was placed at a grid index that doesn't match its coordinate
    #[error("tile {found:?} is at grid index ({x}, {y})")]
    CoordMismatch { x: u32, y: u32, found: TileCoord },

    /// Tile coordinate components must be non-negative and fit in a `u32`
    #[error("coordinate ({x}, {y}) is negative or out of index range")]
    NegativeCoord { x: i64, y: i64 },

    /// Tile side lengths must be at least one pixel
    #[error("tile side must be positive, but was {0}")]
    InvalidSide(u32),

    /// An index lookup fell outside the map
    #[error(
        "index ({x}, {y}) is outside the map bounds [0, {x_size}) x [0, {y_size})"
    )]
    OutOfRange {
        x: u32,
        y: u32,
        x_size: u32,
        y_size: u32,
    },

    /// Two values from different tile families were mixed together
    #[error("expected a {expected} value, got {found}")]
    FamilyMismatch {
        expected: TileFamily,
        found: TileFamily,
    },

    /// A view needs at least one scale
    #[error("a view needs at least one scale")]
    EmptyScales,

    /// A scale index was outside `[0, count)`
    #[error("scale {scale} is out of range for a view with {count} scales")]
    ScaleOutOfRange { scale: usize, count: usize },
}
