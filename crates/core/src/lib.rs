//! Tessera is the coordinate geometry behind interactive tile maps. A map is a
//! rectangular grid of regular tiles from one of three families: squares,
//! hexagons or triangles. This crate converts between logical tile
//! coordinates and pixel-space points for each family, at any number of
//! magnification levels, and tracks which tiles are selected. Drawing pixels
//! and dispatching input events are left to whatever presentation layer sits
//! on top.
//!
//! ```
//! use tessera::{MapView, Point2, TileFamily, TileMap, ViewConfig};
//!
//! let map = TileMap::unlabeled(TileFamily::Hex, 17, 17).unwrap();
//! let mut view = MapView::new(map, &ViewConfig::default()).unwrap();
//!
//! // A click at some pixel position toggles the tile under it, if any
//! if let Some((coord, selected)) = view.toggle_at(Point2::new(40.0, 30.0)) {
//!     println!("{} selected: {}", coord, selected);
//! }
//! ```
//!
//! See [ViewConfig] for details on how the view can be customized.

mod config;
mod error;
mod geometry;
mod render;
mod util;
mod view;
mod world;

pub use crate::{
    config::ViewConfig,
    error::TileError,
    geometry::{
        hex::HexDimension, rect::RectDimension, tri::TriDimension,
        TileDimension, TileFamily,
    },
    render::{
        unit::{Bounds, Color3, Point2, Vector2},
        Surface,
    },
    view::{selection::Selection, MapView},
    world::{coord::TileCoord, map::TileMap, tile::Tile},
};

#[cfg(feature = "svg")]
pub use crate::render::svg::SvgSurface;
