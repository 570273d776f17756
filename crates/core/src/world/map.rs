use crate::{
    geometry::check_family, Point2, Tile, TileCoord, TileDimension, TileError,
    TileFamily, Vector2,
};
use log::{debug, trace};
use std::convert::TryFrom;

/// A rectangular grid of tiles, all of the same family. The grid is fixed at
/// construction: it can't be resized, and tiles can't be swapped out.
///
/// Tiles are stored in a flat buffer, one row after another, so the tile at
/// `(x, y)` lives at index `y * x_size + x`. That also makes row-major the
/// natural order for [TileMap::tiles].
#[derive(Clone, Debug)]
pub struct TileMap {
    family: TileFamily,
    x_size: u32,
    y_size: u32,
    tiles: Vec<Tile>,
}

impl TileMap {
    /// Build a map from a grid of tiles. The outer vec is the rows (indexed by
    /// `y`), and each row is indexed by `x`. Every row must be the same
    /// non-zero length, and every tile's coordinate must be of the map's
    /// family and match its position in the grid.
    pub fn new(
        family: TileFamily,
        rows: Vec<Vec<Tile>>,
    ) -> Result<Self, TileError> {
        let x_len = match rows.first() {
            None => {
                return Err(TileError::InvalidShape("map has no rows".into()))
            }
            Some(row) if row.is_empty() => {
                return Err(TileError::InvalidShape(
                    "first row has no tiles".into(),
                ))
            }
            Some(row) => row.len(),
        };
        let x_size = u32::try_from(x_len).map_err(|_| {
            TileError::InvalidShape(format!("{} columns is too many", x_len))
        })?;
        let y_size = u32::try_from(rows.len()).map_err(|_| {
            TileError::InvalidShape(format!("{} rows is too many", rows.len()))
        })?;

        let mut tiles = Vec::with_capacity(x_len * rows.len());
        for (y, row) in (0u32..).zip(rows) {
            if row.len() != x_len {
                return Err(TileError::InvalidShape(format!(
                    "row {} has {} tiles, expected {}",
                    y,
                    row.len(),
                    x_len
                )));
            }
            for (x, tile) in (0u32..).zip(row) {
                if tile.coord() != TileCoord::new(family, x, y) {
                    return Err(TileError::CoordMismatch {
                        x,
                        y,
                        found: tile.coord(),
                    });
                }
                tiles.push(tile);
            }
        }

        debug!("Built {}x{} {} map", x_size, y_size, family);
        Ok(Self {
            family,
            x_size,
            y_size,
            tiles,
        })
    }

    /// Build a map by calling `init` once for each coordinate, in row-major
    /// order. Fails if either size is zero, or if `init` returns a tile with
    /// a coordinate other than the one it was given.
    pub fn generate<F>(
        family: TileFamily,
        x_size: u32,
        y_size: u32,
        mut init: F,
    ) -> Result<Self, TileError>
    where
        F: FnMut(TileCoord) -> Tile,
    {
        let rows = (0..y_size)
            .map(|y| {
                (0..x_size)
                    .map(|x| init(TileCoord::new(family, x, y)))
                    .collect()
            })
            .collect();
        Self::new(family, rows)
    }

    /// A map of tiles with no labels
    pub fn unlabeled(
        family: TileFamily,
        x_size: u32,
        y_size: u32,
    ) -> Result<Self, TileError> {
        Self::generate(family, x_size, y_size, Tile::new)
    }

    /// A map where every tile is labeled with its raw coordinate, e.g.
    /// `(3,7)`. Handy for debugging hit tests.
    pub fn labeled(
        family: TileFamily,
        x_size: u32,
        y_size: u32,
    ) -> Result<Self, TileError> {
        Self::generate(family, x_size, y_size, |coord| {
            Tile::with_label(coord, format!("({},{})", coord.x(), coord.y()))
        })
    }

    pub fn family(&self) -> TileFamily {
        self.family
    }

    /// Number of columns
    pub fn x_size(&self) -> u32 {
        self.x_size
    }

    /// Number of rows
    pub fn y_size(&self) -> u32 {
        self.y_size
    }

    /// Total number of tiles
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false, since a map can't be built without tiles. Here to keep
    /// clippy happy about having `len`.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Get the tile at column `x`, row `y`. Returns an error if either index
    /// is outside the map. Indexes are never clamped.
    pub fn tile(&self, x: u32, y: u32) -> Result<&Tile, TileError> {
        let out_of_range = || TileError::OutOfRange {
            x,
            y,
            x_size: self.x_size,
            y_size: self.y_size,
        };
        if x >= self.x_size || y >= self.y_size {
            return Err(out_of_range());
        }
        let index = y as usize * self.x_size as usize + x as usize;
        self.tiles.get(index).ok_or_else(out_of_range)
    }

    /// Get the tile at a coordinate. Fails if the coordinate is from another
    /// family or outside the map.
    pub fn tile_at(&self, coord: TileCoord) -> Result<&Tile, TileError> {
        check_family(self.family, coord.family())?;
        self.tile(coord.x(), coord.y())
    }

    /// Iterate over every tile, row by row: all of row 0 left to right, then
    /// all of row 1, and so on. Call again to start over.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.tiles.iter()
    }

    /// The tile under a pixel point, when the map is rendered with the given
    /// dimension. `Ok(None)` means the point is off the map. Fails only if
    /// the dimension is of another family.
    pub fn point_to_coord(
        &self,
        point: Point2,
        dim: &TileDimension,
    ) -> Result<Option<TileCoord>, TileError> {
        dim.check_family(self.family)?;
        let coord = dim.point_to_coord(point, self.x_size, self.y_size);
        trace!("{} -> {:?}", point, coord);
        Ok(coord)
    }

    /// Top-left corner of the bounding box of the tile at a coordinate. The
    /// coordinate doesn't have to be on the map, but it does have to be of
    /// the same family as the map and the dimension.
    pub fn coord_to_point(
        &self,
        coord: TileCoord,
        dim: &TileDimension,
    ) -> Result<Point2, TileError> {
        self.check_families(coord, dim)?;
        Ok(dim.coord_to_point(coord))
    }

    /// Middle of the bounding box of the tile at a coordinate. For triangles
    /// this is _not_ the centroid of the triangle itself; see
    /// [TileDimension] for details.
    pub fn coord_to_centroid_point(
        &self,
        coord: TileCoord,
        dim: &TileDimension,
    ) -> Result<Point2, TileError> {
        self.check_families(coord, dim)?;
        Ok(dim.coord_to_centroid_point(coord))
    }

    /// Total pixel extent of the whole map, rendered with the given dimension
    pub fn pixel_size(&self, dim: &TileDimension) -> Result<Vector2, TileError> {
        dim.check_family(self.family)?;
        Ok(dim.pixel_size(self.x_size, self.y_size))
    }

    fn check_families(
        &self,
        coord: TileCoord,
        dim: &TileDimension,
    ) -> Result<(), TileError> {
        check_family(self.family, coord.family())?;
        dim.check_family(self.family)
    }
}
