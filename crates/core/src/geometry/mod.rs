//! Pixel geometry for each tile family.
//!
//! ## Coordinate Systems
//!
//! There are two coordinate systems in play:
//!
//! - **Tile coordinates** ([TileCoord]) are discrete `(x, y)` column/row
//!   indexes into a map. They say nothing about where a tile is drawn.
//! - **Pixel points** ([Point2]) are continuous positions in the rendered map,
//!   with the origin at the top-left corner and y growing downward.
//!
//! Converting a coordinate to a point gives the top-left corner of the tile's
//! bounding box (its _origin_). Converting a point to a coordinate finds the
//! tile whose polygon contains that point, or nothing if the point is off
//! the map. How a polygon is laid out depends on the family, and on the
//! [TileDimension] (the scale) used for rendering:
//!
//! - [rect]: squares in a plain grid
//! - [hex]: hexagons in rows, odd rows shifted right by half a tile
//! - [tri]: triangles alternating up and down, half a side apart
//!
//! Every point on the map belongs to exactly one tile. Points on a side shared
//! by two tiles always resolve to the same one of the two, but which one
//! depends on the family; see each module for details.

pub mod hex;
pub mod rect;
pub mod tri;

use crate::{
    geometry::{hex::HexDimension, rect::RectDimension, tri::TriDimension},
    Point2, TileCoord, TileError, Vector2,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{Display, EnumIter, EnumString};

/// The three shapes of regular tile that a map can be built from.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TileFamily {
    /// Squares
    Rect,
    /// Hexagons with pointy tops, in offset rows
    Hex,
    /// Equilateral triangles, alternating up and down
    Tri,
}

/// The size of one tile at one scale. A tile's whole geometry is derived from
/// a single side length, but _how_ it's derived depends on the tile family, so
/// each family carries its own precomputed measures.
///
/// A view holds one of these per scale (magnification level), all of the same
/// family as its map.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TileDimension {
    Rect(RectDimension),
    Hex(HexDimension),
    Tri(TriDimension),
}

impl TileDimension {
    /// Build the dimensions of a tile of the given family and side length.
    /// Returns an error if the side is zero.
    pub fn new(family: TileFamily, side: u32) -> Result<Self, TileError> {
        Ok(match family {
            TileFamily::Rect => Self::Rect(RectDimension::new(side)?),
            TileFamily::Hex => Self::Hex(HexDimension::new(side)?),
            TileFamily::Tri => Self::Tri(TriDimension::new(side)?),
        })
    }

    pub fn family(&self) -> TileFamily {
        match self {
            Self::Rect(_) => TileFamily::Rect,
            Self::Hex(_) => TileFamily::Hex,
            Self::Tri(_) => TileFamily::Tri,
        }
    }

    /// Nominal length of one side of the tile, in pixels
    pub fn side(&self) -> u32 {
        match self {
            Self::Rect(dim) => dim.side(),
            Self::Hex(dim) => dim.side(),
            Self::Tri(dim) => dim.side(),
        }
    }

    /// Width of the tile's bounding box
    pub fn width(&self) -> f64 {
        match self {
            Self::Rect(dim) => dim.width(),
            Self::Hex(dim) => dim.width(),
            Self::Tri(dim) => dim.width(),
        }
    }

    /// Height of the tile's bounding box
    pub fn height(&self) -> f64 {
        match self {
            Self::Rect(dim) => dim.height(),
            Self::Hex(dim) => dim.height(),
            Self::Tri(dim) => dim.height(),
        }
    }

    /// Area of the tile polygon
    pub fn area(&self) -> f64 {
        match self {
            Self::Rect(dim) => dim.area(),
            Self::Hex(dim) => dim.area(),
            Self::Tri(dim) => dim.area(),
        }
    }

    /// Perimeter of the tile polygon
    pub fn perimeter(&self) -> f64 {
        match self {
            Self::Rect(dim) => dim.perimeter(),
            Self::Hex(dim) => dim.perimeter(),
            Self::Tri(dim) => dim.perimeter(),
        }
    }

    /// Area of the tile's bounding box
    pub fn bounding_area(&self) -> f64 {
        match self {
            Self::Rect(dim) => dim.bounding_area(),
            Self::Hex(dim) => dim.bounding_area(),
            Self::Tri(dim) => dim.bounding_area(),
        }
    }

    /// Perimeter of the tile's bounding box
    pub fn bounding_perimeter(&self) -> f64 {
        match self {
            Self::Rect(dim) => dim.bounding_perimeter(),
            Self::Hex(dim) => dim.bounding_perimeter(),
            Self::Tri(dim) => dim.bounding_perimeter(),
        }
    }

    /// Return an error unless this dimension belongs to the given family
    pub(crate) fn check_family(
        &self,
        expected: TileFamily,
    ) -> Result<(), TileError> {
        check_family(expected, self.family())
    }

    /// Origin (top-left of the bounding box) of the tile at the coordinate.
    /// The caller is responsible for making sure the coordinate and this
    /// dimension are of the same family.
    pub(crate) fn coord_to_point(&self, coord: TileCoord) -> Point2 {
        let (x, y) = (coord.x(), coord.y());
        match self {
            Self::Rect(dim) => dim.coord_to_point(x, y),
            Self::Hex(dim) => dim.coord_to_point(x, y),
            Self::Tri(dim) => dim.coord_to_point(x, y),
        }
    }

    /// Offset from a tile's origin to its center: half the bounding box.
    /// This is the true center for squares and regular hexagons. For
    /// triangles it's only the center of the bounding box, which sits above
    /// the centroid of an upward triangle and below the centroid of a
    /// downward one.
    pub fn centroid_offset(&self) -> Vector2 {
        Vector2::new(self.width() / 2.0, self.height() / 2.0)
    }

    /// Origin of the tile at the coordinate, plus [Self::centroid_offset]
    pub(crate) fn coord_to_centroid_point(&self, coord: TileCoord) -> Point2 {
        self.coord_to_point(coord) + self.centroid_offset()
    }

    /// The tile under a point, for a map of `x_size` by `y_size` tiles.
    /// `None` if the point is off the map, or isn't a real number.
    pub(crate) fn point_to_coord(
        &self,
        point: Point2,
        x_size: u32,
        y_size: u32,
    ) -> Option<TileCoord> {
        // No tile covers a negative pixel. Filtering these out here also
        // keeps the section math below from overflowing at the i64 floor.
        if !point.is_finite() || point.x < 0.0 || point.y < 0.0 {
            return None;
        }
        let (x, y) = match self {
            Self::Rect(dim) => dim.point_to_index(point),
            Self::Hex(dim) => dim.point_to_index(point),
            Self::Tri(dim) => dim.point_to_index(point),
        };
        if (0..i64::from(x_size)).contains(&x)
            && (0..i64::from(y_size)).contains(&y)
        {
            // Both were just checked to be within u32 range
            Some(TileCoord::new(self.family(), x as u32, y as u32))
        } else {
            None
        }
    }

    /// Polygon of the tile at the coordinate, drawn from the given origin
    pub(crate) fn outline(&self, origin: Point2, coord: TileCoord) -> Vec<Point2> {
        match self {
            Self::Rect(dim) => dim.outline(origin),
            Self::Hex(dim) => dim.outline(origin),
            Self::Tri(dim) => dim.outline(origin, coord.x(), coord.y()),
        }
    }

    /// Total pixel extent of a map of `x_size` by `y_size` tiles
    pub(crate) fn pixel_size(&self, x_size: u32, y_size: u32) -> Vector2 {
        match self {
            Self::Rect(dim) => dim.pixel_size(x_size, y_size),
            Self::Hex(dim) => dim.pixel_size(x_size, y_size),
            Self::Tri(dim) => dim.pixel_size(x_size, y_size),
        }
    }
}

impl fmt::Display for TileDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} s={} ({:.3}x{:.3})",
            self.family(),
            self.side(),
            self.width(),
            self.height()
        )
    }
}

/// Return an error unless `found` is the `expected` family
pub(crate) fn check_family(
    expected: TileFamily,
    found: TileFamily,
) -> Result<(), TileError> {
    if expected == found {
        Ok(())
    } else {
        Err(TileError::FamilyMismatch { expected, found })
    }
}
