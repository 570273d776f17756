use crate::{Color3, Point2, Surface, TileCoord, Vector2};
use svg::{
    node::{
        self,
        element::{Polygon, Text},
        Comment,
    },
    Document,
};

/// Fill for tiles that aren't highlighted
const FILL_COLOR: Color3 = Color3::WHITE;
/// Fill for highlighted tiles
const HIGHLIGHT_COLOR: Color3 = Color3::LIGHT_GRAY;
/// Tile borders and label text
const INK_COLOR: Color3 = Color3::BLACK;

/// A [Surface] that collects tiles into an SVG document. Draw onto it, then
/// call [SvgSurface::into_document] to get the finished SVG.
pub struct SvgSurface {
    size: Vector2,
    nodes: Vec<SvgNode>,
}

/// The SVG lib only lets us add children by value, so we hold onto the nodes
/// and build the document at the end
enum SvgNode {
    Comment(Comment),
    Polygon(Polygon),
    Text(Text),
}

impl SvgSurface {
    /// Create an empty surface. `size` is the pixel extent of the map, which
    /// becomes the view box of the document.
    pub fn new(size: Vector2) -> Self {
        Self {
            size,
            nodes: Vec::new(),
        }
    }

    /// Number of elements drawn so far
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Assemble everything drawn so far into an SVG document
    pub fn into_document(self) -> Document {
        let width = self.size.x.ceil();
        let height = self.size.y.ceil();
        let document = Document::new()
            .set("viewBox", (0.0, 0.0, width, height))
            .set("width", width)
            .set("height", height);

        self.nodes
            .into_iter()
            .fold(document, |document, node| match node {
                SvgNode::Comment(comment) => document.add(comment),
                SvgNode::Polygon(polygon) => document.add(polygon),
                SvgNode::Text(text) => document.add(text),
            })
    }
}

impl Surface for SvgSurface {
    fn draw_outline(
        &mut self,
        coord: TileCoord,
        outline: &[Point2],
        highlight: bool,
    ) {
        let fill = if highlight { HIGHLIGHT_COLOR } else { FILL_COLOR };
        // Readability!
        self.nodes
            .push(SvgNode::Comment(Comment::new(coord.to_string())));
        self.nodes.push(SvgNode::Polygon(
            Polygon::new()
                .set(
                    "points",
                    outline
                        .iter()
                        .map(|point| (point.x, point.y))
                        .collect::<Vec<_>>(),
                )
                .set("fill", fill.to_html())
                .set("stroke", INK_COLOR.to_html())
                .set("stroke-width", 1),
        ));
    }

    fn draw_label(
        &mut self,
        text: &str,
        center: Point2,
        font_size: f64,
        bold: bool,
    ) {
        let weight = if bold { "bold" } else { "normal" };
        self.nodes.push(SvgNode::Text(
            Text::new()
                .set("x", center.x)
                .set("y", center.y)
                .set("font-size", font_size)
                .set("font-weight", weight)
                .set("text-anchor", "middle")
                .set("dominant-baseline", "central")
                .set("fill", INK_COLOR.to_html())
                .add(node::Text::new(text)),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TileFamily;

    #[test]
    fn test_document() {
        let mut surface = SvgSurface::new(Vector2::new(20.0, 10.5));
        assert!(surface.is_empty());
        surface.draw_outline(
            TileCoord::new(TileFamily::Rect, 0, 0),
            &[
                Point2::ORIGIN,
                Point2::new(10.0, 0.0),
                Point2::new(10.0, 10.0),
                Point2::new(0.0, 10.0),
            ],
            true,
        );
        surface.draw_label("(0,0)", Point2::new(5.0, 5.0), 3.0, true);
        assert_eq!(surface.len(), 3);

        let svg = surface.into_document().to_string();
        assert!(svg.contains("viewBox=\"0 0 20 11\""));
        assert!(svg.contains("<!-- A0 -->"));
        assert!(svg.contains("points=\"0,0 10,0 10,10 0,10\""));
        assert!(svg.contains("fill=\"#c0c0c0\""));
        assert!(svg.contains("font-weight=\"bold\""));
        assert!(svg.contains("(0,0)"));
    }
}
