//! Equilateral triangles in rows, alternating between pointing up and
//! pointing down. Each step in `x` moves half a side to the right, so two
//! neighboring triangles share one slanted side and together fill a
//! parallelogram.
//!
//! Tile `(x, y)` points down when exactly one of `x` and `y` is odd. So row 0
//! starts with an upward triangle, row 1 with a downward one, and so on.

use crate::{Point2, TileError, Vector2};

/// Dimensions of a triangular tile at one scale.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TriDimension {
    side: u32,
    height: f64,
}

impl TriDimension {
    /// Build the dimensions for a triangle with the given side length.
    /// Returns an error for a zero side.
    pub fn new(side: u32) -> Result<Self, TileError> {
        if side == 0 {
            return Err(TileError::InvalidSide(0));
        }
        Ok(Self {
            side,
            height: f64::from(side) * 3.0_f64.sqrt() / 2.0,
        })
    }

    /// Does the tile at `(x, y)` point down (flat side on top)?
    pub fn points_down(x: i64, y: i64) -> bool {
        (x.rem_euclid(2) == 1) ^ (y.rem_euclid(2) == 1)
    }

    pub fn side(&self) -> u32 {
        self.side
    }

    pub fn width(&self) -> f64 {
        self.side.into()
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Horizontal distance between the origins of two neighboring tiles
    pub fn half_width(&self) -> f64 {
        f64::from(self.side) / 2.0
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height / 2.0
    }

    pub fn perimeter(&self) -> f64 {
        3.0 * f64::from(self.side)
    }

    pub fn bounding_area(&self) -> f64 {
        self.width() * self.height
    }

    pub fn bounding_perimeter(&self) -> f64 {
        2.0 * (self.width() + self.height)
    }

    /// Top-left corner of the bounding box of the tile at `(x, y)`
    pub(crate) fn coord_to_point(&self, x: u32, y: u32) -> Point2 {
        Point2 {
            x: f64::from(x) * self.half_width(),
            y: f64::from(y) * self.height,
        }
    }

    /// Candidate `(x, y)` for the tile under a point. Not bounds-checked.
    ///
    /// The row is found directly. Within a row, the plane is cut into
    /// half-width sections. Section `n` holds the left half of tile `n` and
    /// the right half of tile `n - 1`, split by the left side of tile `n`.
    /// Which way that side slants depends on which way tile `n` points.
    pub(crate) fn point_to_index(&self, point: Point2) -> (i64, i64) {
        let half_width = self.half_width();
        let section_x = (point.x / half_width).floor();
        let row = (point.y / self.height).floor();
        let offset_x = point.x - section_x * half_width;
        let offset_y = point.y - row * self.height;
        let section_x = section_x as i64;
        let row = row as i64;

        let m = self.height / half_width;
        let column = if Self::points_down(section_x, row) {
            // Left side runs from the top-left corner down to the bottom
            // vertex; anything below it is the upward tile to the left
            if offset_y > offset_x * m {
                section_x - 1
            } else {
                section_x
            }
        } else {
            // Left side runs from the bottom-left corner up to the top
            // vertex; anything above it is the downward tile to the left
            if offset_y < self.height - offset_x * m {
                section_x - 1
            } else {
                section_x
            }
        };
        (column, row)
    }

    /// The three vertices of the tile at `(x, y)`, clockwise
    pub(crate) fn outline(&self, origin: Point2, x: u32, y: u32) -> Vec<Point2> {
        let s = f64::from(self.side);
        let height = self.height;
        if Self::points_down(x.into(), y.into()) {
            vec![
                origin,
                origin + Vector2::new(s, 0.0),
                origin + Vector2::new(s / 2.0, height),
            ]
        } else {
            vec![
                origin + Vector2::new(s / 2.0, 0.0),
                origin + Vector2::new(s, height),
                origin + Vector2::new(0.0, height),
            ]
        }
    }

    /// Pixel extent of a full map of `x_size` by `y_size` tiles. The last
    /// tile in a row starts at `(x_size - 1)` half widths and is a full width
    /// wide.
    pub(crate) fn pixel_size(&self, x_size: u32, y_size: u32) -> Vector2 {
        Vector2::new(
            self.width() * (f64::from(x_size) + 1.0) / 2.0,
            self.height * f64::from(y_size),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_measures() {
        let dim = TriDimension::new(20).unwrap();
        assert_approx_eq!(dim.height(), 17.320_508_075);
        assert_approx_eq!(dim.width(), 20.0);
        assert_approx_eq!(dim.area(), 173.205_080_756);
        assert_approx_eq!(dim.perimeter(), 60.0);
        assert_approx_eq!(dim.bounding_area(), 346.410_161_513);
        assert_approx_eq!(dim.bounding_perimeter(), 74.641_016_151);
        assert_eq!(TriDimension::new(0), Err(TileError::InvalidSide(0)));
    }

    #[test]
    fn test_orientation() {
        assert!(!TriDimension::points_down(0, 0));
        assert!(TriDimension::points_down(1, 0));
        assert!(TriDimension::points_down(0, 1));
        assert!(!TriDimension::points_down(1, 1));
        assert!(TriDimension::points_down(-1, 0));
    }

    #[test]
    fn test_coord_to_point() {
        let dim = TriDimension::new(20).unwrap();
        assert_eq!(dim.coord_to_point(0, 0), Point2::ORIGIN);
        let p = dim.coord_to_point(3, 2);
        assert_approx_eq!(p.x, 30.0);
        assert_approx_eq!(p.y, 2.0 * dim.height());
    }

    #[test]
    fn test_point_to_index() {
        let dim = TriDimension::new(20).unwrap();
        let height = dim.height();

        // Upward tile (0, 0) has its top vertex at (10, 0). Near the bottom
        // of section 0 we're inside it, near the top we're left of it
        assert_eq!(dim.point_to_index(Point2::new(5.0, height - 1.0)), (0, 0));
        assert_eq!(dim.point_to_index(Point2::new(1.0, 1.0)), (-1, 0));

        // Section 1 is the left half of downward tile (1, 0) and the right
        // half of (0, 0)
        assert_eq!(dim.point_to_index(Point2::new(11.0, 1.0)), (1, 0));
        assert_eq!(dim.point_to_index(Point2::new(11.0, height - 1.0)), (0, 0));

        // Row 1 starts with a downward tile
        assert_eq!(
            dim.point_to_index(Point2::new(5.0, height + 1.0)),
            (0, 1)
        );
        assert_eq!(
            dim.point_to_index(Point2::new(1.0, 2.0 * height - 1.0)),
            (-1, 1)
        );
    }

    #[test]
    fn test_outline() {
        let dim = TriDimension::new(20).unwrap();
        let up = dim.outline(Point2::ORIGIN, 0, 0);
        assert_eq!(up[0], Point2::new(10.0, 0.0));
        let down = dim.outline(Point2::ORIGIN, 1, 0);
        assert_eq!(down[0], Point2::ORIGIN);
        assert_eq!(down[1], Point2::new(20.0, 0.0));
    }

    #[test]
    fn test_pixel_size() {
        let dim = TriDimension::new(20).unwrap();
        let size = dim.pixel_size(5, 2);
        assert_approx_eq!(size.x, 60.0);
        assert_approx_eq!(size.y, 2.0 * dim.height());
    }
}
