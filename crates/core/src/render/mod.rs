#[cfg(feature = "svg")]
pub mod svg;
pub mod unit;

use crate::{Point2, TileCoord};

/// Something that tiles can be drawn onto. The core only ever works out
/// _what_ to draw (polygons and text, in pixel space); turning that into
/// actual pixels is up to the implementor. An implementation for SVG is
/// available behind the `svg` feature.
pub trait Surface {
    /// Draw the outline of a tile. `outline` holds the polygon's vertices in
    /// clockwise order. Highlighted tiles should be filled in so they stand
    /// out.
    fn draw_outline(
        &mut self,
        coord: TileCoord,
        outline: &[Point2],
        highlight: bool,
    );

    /// Draw a line of text centered on a point
    fn draw_label(
        &mut self,
        text: &str,
        center: Point2,
        font_size: f64,
        bold: bool,
    );
}
