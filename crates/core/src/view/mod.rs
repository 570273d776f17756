pub mod selection;

use crate::{
    timed, Bounds, Point2, Selection, Surface, Tile, TileCoord, TileDimension,
    TileError, TileMap, Vector2, ViewConfig,
};
use anyhow::Context;
use log::{debug, trace};
use validator::Validate;

/// A live view of a [TileMap]: the map itself, the set of scales it can be
/// drawn at, which scale is current, and which tiles are selected. This is
/// the state a presentation layer needs to turn mouse clicks into tiles and
/// tiles into pixels. It doesn't draw or handle events by itself.
///
/// All pixel-space queries on a view use the current scale. Every scale is
/// checked against the map's tile family when the view is built, so unlike
/// the equivalent [TileMap] functions, these queries can't fail.
#[derive(Clone, Debug)]
pub struct MapView {
    map: TileMap,
    dimensions: Vec<TileDimension>,
    scale: usize,
    selection: Selection,
}

impl MapView {
    /// Build a view of a map from a config. Returns an error if the config is
    /// invalid. The underlying validation errors can be recovered with
    /// [anyhow::Error::downcast].
    pub fn new(map: TileMap, config: &ViewConfig) -> anyhow::Result<Self> {
        config.validate().context("invalid view config")?;
        let dimensions = config
            .scales
            .iter()
            .map(|side| TileDimension::new(map.family(), *side))
            .collect::<Result<Vec<_>, _>>()
            .context("invalid scale")?;
        Ok(Self::with_scales(map, dimensions, config.initial_scale)?)
    }

    /// Build a view of a map from a list of prebuilt scales. Every scale must
    /// be of the same tile family as the map, and `initial_scale` must index
    /// into the list.
    pub fn with_scales(
        map: TileMap,
        dimensions: Vec<TileDimension>,
        initial_scale: usize,
    ) -> Result<Self, TileError> {
        if dimensions.is_empty() {
            return Err(TileError::EmptyScales);
        }
        for dim in &dimensions {
            dim.check_family(map.family())?;
        }
        let mut view = Self {
            map,
            dimensions,
            scale: 0,
            selection: Selection::new(),
        };
        view.set_scale(initial_scale)?;
        debug!(
            "Built view of {}x{} {} map with {} scales",
            view.map.x_size(),
            view.map.y_size(),
            view.map.family(),
            view.dimensions.len()
        );
        Ok(view)
    }

    pub fn map(&self) -> &TileMap {
        &self.map
    }

    /// Index of the current scale
    pub fn scale(&self) -> usize {
        self.scale
    }

    /// Switch to a different scale. Returns the scale index now in effect, or
    /// an error if the new one is out of range. The selection is unaffected.
    pub fn set_scale(&mut self, scale: usize) -> Result<usize, TileError> {
        if scale >= self.dimensions.len() {
            return Err(TileError::ScaleOutOfRange {
                scale,
                count: self.dimensions.len(),
            });
        }
        let previous = std::mem::replace(&mut self.scale, scale);
        debug!("Scale {} -> {} ({})", previous, scale, self.dimensions[scale]);
        Ok(self.scale)
    }

    /// Number of available scales
    pub fn scale_count(&self) -> usize {
        self.dimensions.len()
    }

    /// Dimensions of every scale, in order
    pub fn scales(&self) -> &[TileDimension] {
        &self.dimensions
    }

    /// Dimensions of one scale, or `None` if the index is out of range
    pub fn dimension(&self, scale: usize) -> Option<&TileDimension> {
        self.dimensions.get(scale)
    }

    /// Dimensions of the current scale
    pub fn current_dimension(&self) -> &TileDimension {
        // The constructor and set_scale both guarantee the index is in range
        &self.dimensions[self.scale]
    }

    /// The coordinate of the tile under a point, or `None` if the point is
    /// off the map
    pub fn point_to_coord(&self, point: Point2) -> Option<TileCoord> {
        let coord = self.current_dimension().point_to_coord(
            point,
            self.map.x_size(),
            self.map.y_size(),
        );
        trace!("{} -> {:?}", point, coord);
        coord
    }

    /// The tile under a point, or `None` if the point is off the map
    pub fn tile_at_point(&self, point: Point2) -> Option<&Tile> {
        self.point_to_coord(point)
            .and_then(|coord| self.map.tile_at(coord).ok())
    }

    /// Top-left corner of a tile's bounding box. Fails if the coordinate is
    /// from a different tile family than the map.
    pub fn coord_to_point(
        &self,
        coord: TileCoord,
    ) -> Result<Point2, TileError> {
        self.map.coord_to_point(coord, self.current_dimension())
    }

    /// Middle of a tile's bounding box
    pub fn coord_to_centroid_point(
        &self,
        coord: TileCoord,
    ) -> Result<Point2, TileError> {
        self.map
            .coord_to_centroid_point(coord, self.current_dimension())
    }

    /// The bounding box of a tile at the current scale. This is the region
    /// that needs repainting when the tile's selection status changes.
    pub fn tile_bounds(&self, coord: TileCoord) -> Result<Bounds, TileError> {
        let dim = self.current_dimension();
        Ok(Bounds {
            origin: self.coord_to_point(coord)?,
            size: Vector2::new(dim.width(), dim.height()),
        })
    }

    /// Total pixel extent of the map at the current scale
    pub fn pixel_size(&self) -> Vector2 {
        self.current_dimension()
            .pixel_size(self.map.x_size(), self.map.y_size())
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn is_selected(&self, coord: TileCoord) -> bool {
        self.selection.contains(coord)
    }

    /// Select a tile. Returns `true` if it wasn't selected already. Fails if
    /// the coordinate isn't on the map.
    pub fn select(&mut self, coord: TileCoord) -> Result<bool, TileError> {
        self.map.tile_at(coord)?;
        Ok(self.selection.add(coord))
    }

    /// Deselect a tile. Returns `true` if it was selected before.
    pub fn deselect(&mut self, coord: TileCoord) -> bool {
        self.selection.remove(coord)
    }

    /// Flip a tile's selection status. Returns the new status. Fails if the
    /// coordinate isn't on the map.
    pub fn toggle(&mut self, coord: TileCoord) -> Result<bool, TileError> {
        self.map.tile_at(coord)?;
        Ok(self.selection.toggle(coord))
    }

    /// Flip the selection status of the tile under a point, which is what a
    /// mouse click does. Returns the tile's coordinate and its new status,
    /// or `None` if the point is off the map (in which case nothing changes).
    pub fn toggle_at(&mut self, point: Point2) -> Option<(TileCoord, bool)> {
        let coord = self.point_to_coord(point)?;
        Some((coord, self.selection.toggle(coord)))
    }

    /// Replace the whole selection. Returns `true` if the selected set is
    /// different afterwards. Fails, without changing anything, if any of the
    /// coordinates isn't on the map.
    pub fn set_selection(
        &mut self,
        coords: impl IntoIterator<Item = TileCoord>,
    ) -> Result<bool, TileError> {
        let coords = coords
            .into_iter()
            .map(|coord| self.map.tile_at(coord).map(|_| coord))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.selection.replace(coords))
    }

    /// Deselect everything. Returns `true` if anything was selected.
    pub fn clear_selection(&mut self) -> bool {
        self.selection.clear()
    }

    /// Draw every tile onto a surface at the current scale, in row-major
    /// order. Selected tiles are highlighted.
    pub fn draw<S: Surface>(&self, surface: &mut S, show_labels: bool) {
        let dim = self.current_dimension();
        timed!("Map drawing", {
            for tile in self.map.tiles() {
                let coord = tile.coord();
                let origin = dim.coord_to_point(coord);
                let highlight = self.selection.contains(coord);
                tile.draw_unchecked(surface, origin, dim, highlight, show_labels);
            }
        })
    }

    /// Render the whole map at the current scale as an SVG document
    #[cfg(feature = "svg")]
    pub fn render_as_svg(&self, show_labels: bool) -> String {
        let mut surface = crate::SvgSurface::new(self.pixel_size());
        self.draw(&mut surface, show_labels);
        surface.into_document().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TileFamily;

    fn rect_view() -> MapView {
        let map = TileMap::labeled(TileFamily::Rect, 4, 3).unwrap();
        let config = ViewConfig {
            scales: vec![10, 20],
            ..Default::default()
        };
        MapView::new(map, &config).unwrap()
    }

    #[test]
    fn test_new_invalid_config() {
        let map = TileMap::unlabeled(TileFamily::Rect, 2, 2).unwrap();
        let config = ViewConfig {
            scales: vec![],
            ..Default::default()
        };
        assert!(MapView::new(map, &config).is_err());
    }

    #[test]
    fn test_with_scales() {
        let map = TileMap::unlabeled(TileFamily::Hex, 2, 2).unwrap();
        assert_eq!(
            MapView::with_scales(map.clone(), vec![], 0).unwrap_err(),
            TileError::EmptyScales
        );
        let tri = TileDimension::new(TileFamily::Tri, 10).unwrap();
        assert!(matches!(
            MapView::with_scales(map.clone(), vec![tri], 0),
            Err(TileError::FamilyMismatch { .. })
        ));
        let hex = TileDimension::new(TileFamily::Hex, 10).unwrap();
        assert_eq!(
            MapView::with_scales(map, vec![hex], 1).unwrap_err(),
            TileError::ScaleOutOfRange { scale: 1, count: 1 }
        );
    }

    #[test]
    fn test_scale() {
        let mut view = rect_view();
        assert_eq!(view.scale(), 0);
        assert_eq!(view.scale_count(), 2);
        assert_eq!(view.current_dimension().side(), 10);
        assert_eq!(view.pixel_size(), Vector2::new(40.0, 30.0));

        assert_eq!(view.set_scale(1), Ok(1));
        assert_eq!(view.current_dimension().side(), 20);
        assert_eq!(view.pixel_size(), Vector2::new(80.0, 60.0));
        assert_eq!(
            view.set_scale(2),
            Err(TileError::ScaleOutOfRange { scale: 2, count: 2 })
        );
        assert_eq!(view.scale(), 1);
        assert!(view.dimension(2).is_none());
    }

    #[test]
    fn test_queries_follow_scale() {
        let mut view = rect_view();
        let point = Point2::new(25.0, 15.0);
        let coord = TileCoord::new(TileFamily::Rect, 2, 1);
        assert_eq!(view.point_to_coord(point), Some(coord));
        assert_eq!(view.tile_at_point(point).unwrap().label(), Some("(2,1)"));
        view.set_scale(1).unwrap();
        assert_eq!(
            view.point_to_coord(point),
            Some(TileCoord::new(TileFamily::Rect, 1, 0))
        );
        assert_eq!(view.coord_to_point(coord), Ok(Point2::new(40.0, 20.0)));
        assert_eq!(
            view.tile_bounds(coord),
            Ok(Bounds {
                origin: Point2::new(40.0, 20.0),
                size: Vector2::new(20.0, 20.0),
            })
        );
        assert_eq!(view.point_to_coord(Point2::new(80.0, 0.0)), None);
    }

    #[test]
    fn test_selection() {
        let mut view = rect_view();
        let coord = TileCoord::new(TileFamily::Rect, 1, 1);
        assert_eq!(view.select(coord), Ok(true));
        assert_eq!(view.select(coord), Ok(false));
        assert!(view.is_selected(coord));
        assert!(view.deselect(coord));
        assert!(!view.deselect(coord));

        // Off the map
        let off_map = TileCoord::new(TileFamily::Rect, 9, 9);
        assert!(view.select(off_map).is_err());
        assert!(view.set_selection(vec![coord, off_map]).is_err());
        assert!(view.selection().is_empty());

        assert_eq!(view.set_selection(vec![coord]), Ok(true));
        assert_eq!(view.toggle(coord), Ok(false));
        assert!(!view.clear_selection());
    }

    #[test]
    fn test_toggle_at() {
        let mut view = rect_view();
        let point = Point2::new(5.0, 5.0);
        let coord = TileCoord::new(TileFamily::Rect, 0, 0);
        assert_eq!(view.toggle_at(point), Some((coord, true)));
        assert_eq!(view.toggle_at(point), Some((coord, false)));
        assert_eq!(view.toggle_at(Point2::new(-1.0, 5.0)), None);
        assert!(view.selection().is_empty());
    }
}
