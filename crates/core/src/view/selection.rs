use crate::TileCoord;
use fnv::FnvBuildHasher;
use indexmap::IndexSet;
use log::trace;

/// The set of tiles that are currently selected (highlighted) in a view.
/// Tiles are tracked by coordinate and iterate in the order they were
/// selected.
///
/// Every mutating operation reports whether it actually changed anything.
/// Selection doesn't repaint anything itself; a presentation layer can use
/// that flag to repaint only the tile that changed instead of the whole map.
/// See [MapView::tile_bounds](crate::MapView::tile_bounds).
#[derive(Clone, Debug, Default)]
pub struct Selection {
    tiles: IndexSet<TileCoord, FnvBuildHasher>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, coord: TileCoord) -> bool {
        self.tiles.contains(&coord)
    }

    /// Select a tile. Returns `true` if it wasn't already selected.
    pub fn add(&mut self, coord: TileCoord) -> bool {
        let changed = self.tiles.insert(coord);
        trace!("Select {} (changed: {})", coord, changed);
        changed
    }

    /// Deselect a tile. Returns `true` if it was selected before. Ordering of
    /// the remaining tiles is preserved.
    pub fn remove(&mut self, coord: TileCoord) -> bool {
        let changed = self.tiles.shift_remove(&coord);
        trace!("Deselect {} (changed: {})", coord, changed);
        changed
    }

    /// Flip a tile's selection status. Returns the _new_ status, i.e. `true`
    /// if the tile is now selected. This always changes the selection.
    pub fn toggle(&mut self, coord: TileCoord) -> bool {
        if self.remove(coord) {
            false
        } else {
            self.add(coord)
        }
    }

    /// Replace the whole selection with a new set of tiles. Returns `true` if
    /// the selected set is different afterwards. Order isn't considered, so
    /// re-selecting the same tiles in a different order is not a change (but
    /// the new order is still kept).
    pub fn replace(
        &mut self,
        coords: impl IntoIterator<Item = TileCoord>,
    ) -> bool {
        let new_tiles: IndexSet<_, FnvBuildHasher> =
            coords.into_iter().collect();
        // IndexSet equality ignores order
        let changed = new_tiles != self.tiles;
        self.tiles = new_tiles;
        trace!("Replace selection (changed: {})", changed);
        changed
    }

    /// Deselect everything. Returns `true` if anything was selected.
    pub fn clear(&mut self) -> bool {
        let changed = !self.tiles.is_empty();
        self.tiles.clear();
        changed
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Iterate over selected tiles, in the order they were selected
    pub fn iter(&self) -> impl Iterator<Item = TileCoord> + '_ {
        self.tiles.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TileFamily;

    fn hex(x: u32, y: u32) -> TileCoord {
        TileCoord::new(TileFamily::Hex, x, y)
    }

    #[test]
    fn test_add_remove() {
        let mut selection = Selection::new();
        assert!(selection.add(hex(1, 1)));
        assert!(!selection.add(hex(1, 1)));
        assert!(selection.contains(hex(1, 1)));
        assert_eq!(selection.len(), 1);

        assert!(!selection.remove(hex(2, 2)));
        assert!(selection.remove(hex(1, 1)));
        assert!(!selection.remove(hex(1, 1)));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_families_are_distinct() {
        let mut selection = Selection::new();
        selection.add(hex(0, 0));
        assert!(!selection.contains(TileCoord::new(TileFamily::Rect, 0, 0)));
    }

    #[test]
    fn test_toggle() {
        let mut selection = Selection::new();
        assert!(selection.toggle(hex(0, 3)));
        assert!(selection.contains(hex(0, 3)));
        assert!(!selection.toggle(hex(0, 3)));
        assert!(!selection.contains(hex(0, 3)));
    }

    #[test]
    fn test_replace() {
        let mut selection = Selection::new();
        selection.add(hex(0, 0));
        selection.add(hex(1, 0));

        // Same set, different order
        assert!(!selection.replace(vec![hex(1, 0), hex(0, 0)]));
        assert_eq!(selection.iter().collect::<Vec<_>>(), [hex(1, 0), hex(0, 0)]);

        assert!(selection.replace(vec![hex(2, 2)]));
        assert_eq!(selection.iter().collect::<Vec<_>>(), [hex(2, 2)]);

        // Duplicates collapse
        assert!(selection.replace(vec![hex(3, 3), hex(3, 3)]));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut selection = Selection::new();
        assert!(!selection.clear());
        selection.add(hex(4, 4));
        assert!(selection.clear());
        assert!(selection.is_empty());
    }

    #[test]
    fn test_iter_order() {
        let mut selection = Selection::new();
        for coord in [hex(5, 0), hex(1, 2), hex(3, 1)] {
            selection.add(coord);
        }
        selection.remove(hex(1, 2));
        assert_eq!(selection.iter().collect::<Vec<_>>(), [hex(5, 0), hex(3, 1)]);
    }
}
