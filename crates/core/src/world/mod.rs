//! The logical side of a map: coordinates, tiles, and the grid that holds
//! them. Nothing in here knows about pixels on its own; every pixel-space
//! operation takes a [TileDimension](crate::TileDimension) for the scale
//! being rendered.

pub mod coord;
pub mod map;
pub mod tile;
