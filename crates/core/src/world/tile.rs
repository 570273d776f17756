use crate::{Point2, Surface, TileCoord, TileDimension, TileError};
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    hash::{Hash, Hasher},
};

/// A single cell of a map. Each tile is identified by its coordinate, which is
/// fixed at construction, and can optionally carry a label to display.
///
/// Equality and hashing only consider the coordinate: two tiles at the same
/// spot in the same family are the same tile, regardless of their labels.
///
/// Tiles don't know where they are drawn. Pixel positions depend on the scale,
/// so rendering always takes an origin point and a [TileDimension] from the
/// caller.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tile {
    coord: TileCoord,
    label: Option<String>,
}

impl Tile {
    /// Fraction of the side length used as the label font size
    const LABEL_SCALE: f64 = 1.0 / 3.0;

    /// Create an unlabeled tile
    pub fn new(coord: TileCoord) -> Self {
        Self { coord, label: None }
    }

    /// Create a tile with a display label
    pub fn with_label(coord: TileCoord, label: impl Into<String>) -> Self {
        Self {
            coord,
            label: Some(label.into()),
        }
    }

    pub fn coord(&self) -> TileCoord {
        self.coord
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// The vertices of this tile's polygon, when drawn at `origin` with the
    /// given dimensions. Vertices are in clockwise order (in screen space,
    /// with y pointing down). Returns an error if the dimension belongs to a
    /// different tile family.
    pub fn outline(
        &self,
        origin: Point2,
        dim: &TileDimension,
    ) -> Result<Vec<Point2>, TileError> {
        dim.check_family(self.coord.family())?;
        Ok(dim.outline(origin, self.coord))
    }

    /// Draw this tile onto a surface: first the outline (filled if
    /// `highlight` is set), then optionally the label centered in the tile.
    /// Unlabeled tiles use their coordinate as the label text.
    pub fn draw<S: Surface>(
        &self,
        surface: &mut S,
        origin: Point2,
        dim: &TileDimension,
        highlight: bool,
        show_label: bool,
    ) -> Result<(), TileError> {
        dim.check_family(self.coord.family())?;
        self.draw_unchecked(surface, origin, dim, highlight, show_label);
        Ok(())
    }

    /// [Self::draw], minus the family check
    pub(crate) fn draw_unchecked<S: Surface>(
        &self,
        surface: &mut S,
        origin: Point2,
        dim: &TileDimension,
        highlight: bool,
        show_label: bool,
    ) {
        let outline = dim.outline(origin, self.coord);
        surface.draw_outline(self.coord, &outline, highlight);

        if show_label {
            let center = origin + dim.centroid_offset();
            let font_size = f64::from(dim.side()) * Self::LABEL_SCALE;
            surface.draw_label(&self.to_string(), center, font_size, highlight);
        }
    }
}

impl PartialEq for Tile {
    fn eq(&self, other: &Self) -> bool {
        self.coord == other.coord
    }
}

impl Eq for Tile {}

impl Hash for Tile {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coord.hash(state);
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => write!(f, "{label}"),
            None => write!(f, "{}", self.coord),
        }
    }
}
