//! Square tiles laid out edge to edge, with no offset between rows.

use crate::{Point2, TileError, Vector2};

/// Dimensions of a square tile at one scale. The bounding box of a square is
/// the square itself, so the bounding measures equal the polygon measures.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RectDimension {
    side: u32,
}

impl RectDimension {
    /// Build the dimensions for a square with the given side length. Returns
    /// an error for a zero side.
    pub fn new(side: u32) -> Result<Self, TileError> {
        if side == 0 {
            return Err(TileError::InvalidSide(0));
        }
        Ok(Self { side })
    }

    pub fn side(&self) -> u32 {
        self.side
    }

    pub fn width(&self) -> f64 {
        self.side.into()
    }

    pub fn height(&self) -> f64 {
        self.side.into()
    }

    pub fn area(&self) -> f64 {
        let s = f64::from(self.side);
        s * s
    }

    pub fn perimeter(&self) -> f64 {
        4.0 * f64::from(self.side)
    }

    pub fn bounding_area(&self) -> f64 {
        self.area()
    }

    pub fn bounding_perimeter(&self) -> f64 {
        self.perimeter()
    }

    /// Top-left corner of the tile at `(x, y)`
    pub(crate) fn coord_to_point(&self, x: u32, y: u32) -> Point2 {
        Point2 {
            x: f64::from(x) * self.width(),
            y: f64::from(y) * self.height(),
        }
    }

    /// Candidate `(x, y)` for the tile under a point. Not bounds-checked.
    pub(crate) fn point_to_index(&self, point: Point2) -> (i64, i64) {
        let s = f64::from(self.side);
        ((point.x / s).floor() as i64, (point.y / s).floor() as i64)
    }

    /// The four corners, clockwise from the origin
    pub(crate) fn outline(&self, origin: Point2) -> Vec<Point2> {
        let s = f64::from(self.side);
        vec![
            origin,
            origin + Vector2::new(s, 0.0),
            origin + Vector2::new(s, s),
            origin + Vector2::new(0.0, s),
        ]
    }

    /// Pixel extent of a full map of `x_size` by `y_size` tiles
    pub(crate) fn pixel_size(&self, x_size: u32, y_size: u32) -> Vector2 {
        Vector2::new(
            self.width() * f64::from(x_size),
            self.height() * f64::from(y_size),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measures() {
        let dim = RectDimension::new(10).unwrap();
        assert_eq!(dim.width(), 10.0);
        assert_eq!(dim.height(), 10.0);
        assert_eq!(dim.area(), 100.0);
        assert_eq!(dim.perimeter(), 40.0);
        assert_eq!(dim.bounding_area(), 100.0);
        assert_eq!(dim.bounding_perimeter(), 40.0);
        assert_eq!(RectDimension::new(0), Err(TileError::InvalidSide(0)));
    }

    #[test]
    fn test_transforms() {
        let dim = RectDimension::new(10).unwrap();
        assert_eq!(dim.coord_to_point(2, 3), Point2::new(20.0, 30.0));
        assert_eq!(dim.point_to_index(Point2::new(25.0, 35.0)), (2, 3));
        // Edges belong to the tile on the right/bottom
        assert_eq!(dim.point_to_index(Point2::new(20.0, 30.0)), (2, 3));
        assert_eq!(dim.point_to_index(Point2::new(19.999, 29.999)), (1, 2));
        // Negative points floor away from zero, so they never land on row 0
        assert_eq!(dim.point_to_index(Point2::new(-0.5, 5.0)), (-1, 0));
    }

    #[test]
    fn test_pixel_size() {
        let dim = RectDimension::new(8).unwrap();
        assert_eq!(dim.pixel_size(3, 5), Vector2::new(24.0, 40.0));
    }
}
