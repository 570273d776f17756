//! Hexagons with a vertex at the top and bottom, laid out in rows. Every odd
//! row is shifted right by half a tile so that rows nest into each other.
//!
//! ```text
//!          R
//!     __  |-|  ____
//!     |  /\     | H
//!     | /  \   _|__
//!   B ||    |   | S
//!     ||    |  _|_
//!     | \  /    | H
//!     |  \/    _|
//!     +-----|
//!         A
//! ```
//!
//! - `S` is the side length
//! - `H` is the vertical rise of a slanted side, `S/2`
//! - `R` is half the distance between the two vertical sides, `S·cos(30°)`
//! - `A` is the full width, `2R`
//! - `B` is the full height, `2S`
//!
//! Rows overlap vertically by `H`, so consecutive rows are `H + S` apart.

use crate::{Point2, TileError, Vector2};
use std::f64::consts::FRAC_PI_6;

/// Dimensions of a hexagonal tile at one scale. See the module docs for a
/// diagram of what each measure means.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HexDimension {
    side: u32,
    h: f64,
    r: f64,
    a: f64,
    b: f64,
}

impl HexDimension {
    /// Build the dimensions for a hexagon with the given side length. Returns
    /// an error for a zero side.
    pub fn new(side: u32) -> Result<Self, TileError> {
        if side == 0 {
            return Err(TileError::InvalidSide(0));
        }
        let s = f64::from(side);
        let r = s * FRAC_PI_6.cos();
        Ok(Self {
            side,
            h: s / 2.0,
            r,
            a: 2.0 * r,
            b: 2.0 * s,
        })
    }

    pub fn side(&self) -> u32 {
        self.side
    }

    /// Vertical rise of one slanted side
    pub fn h(&self) -> f64 {
        self.h
    }

    /// Half the width across the vertical sides
    pub fn r(&self) -> f64 {
        self.r
    }

    /// Full width, which is also the horizontal pitch between tiles in a row
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Full height, vertex to vertex
    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn width(&self) -> f64 {
        self.a
    }

    pub fn height(&self) -> f64 {
        self.b
    }

    /// Vertical distance between the origins of two consecutive rows
    pub fn row_pitch(&self) -> f64 {
        self.h + f64::from(self.side)
    }

    pub fn area(&self) -> f64 {
        let s = f64::from(self.side);
        // 3√3·s²/2, with the halving done last to keep the error down
        3.0 * 3.0_f64.sqrt() * (s * s) / 2.0
    }

    pub fn perimeter(&self) -> f64 {
        6.0 * f64::from(self.side)
    }

    pub fn bounding_area(&self) -> f64 {
        self.a * self.b
    }

    pub fn bounding_perimeter(&self) -> f64 {
        4.0 * self.r + 2.0 * self.b
    }

    /// Top-left corner of the bounding box of the tile at `(x, y)`
    pub(crate) fn coord_to_point(&self, x: u32, y: u32) -> Point2 {
        Point2 {
            x: f64::from(x) * self.a + f64::from(y & 1) * self.r,
            y: f64::from(y) * self.row_pitch(),
        }
    }

    /// Candidate `(x, y)` for the tile under a point. Not bounds-checked.
    ///
    /// The plane is cut into sections `A` wide and `H + S` tall. Each section
    /// is mostly covered by one hexagon, with the corners belonging to
    /// neighbors from the row above. The slanted sides of those neighbors
    /// have slope `±H/R`, so comparing the point's offset within the section
    /// against those lines tells us which of the (up to three) hexagons it is
    /// in. Points exactly on a slanted side go to the lower hexagon.
    pub(crate) fn point_to_index(&self, point: Point2) -> (i64, i64) {
        let pitch = self.row_pitch();
        let section_x = (point.x / self.a).floor();
        let section_y = (point.y / pitch).floor();
        let offset_x = point.x - section_x * self.a;
        let offset_y = point.y - section_y * pitch;
        let section_x = section_x as i64;
        let section_y = section_y as i64;

        let h = self.h;
        let m = self.h / self.r;

        if section_y.rem_euclid(2) == 0 {
            // Even row: the section's hexagon starts flush with the section,
            // and its top corners are cut off by the odd row above
            if offset_y < h - offset_x * m {
                // Top-left corner
                (section_x - 1, section_y - 1)
            } else if offset_y < -h + offset_x * m {
                // Top-right corner
                (section_x, section_y - 1)
            } else {
                (section_x, section_y)
            }
        } else if offset_x >= self.r {
            // Odd row, right half: the section's hexagon starts halfway in
            if offset_y < 2.0 * h - offset_x * m {
                // Under the bottom-right side of the even row above
                (section_x, section_y - 1)
            } else {
                (section_x, section_y)
            }
        } else {
            // Odd row, left half: this is the right half of the hexagon to
            // the left
            if offset_y < offset_x * m {
                // Under the bottom-left side of the even row above
                (section_x, section_y - 1)
            } else {
                (section_x - 1, section_y)
            }
        }
    }

    /// The six vertices, clockwise from the upper-left one
    pub(crate) fn outline(&self, origin: Point2) -> Vec<Point2> {
        let s = f64::from(self.side);
        let (h, r, a, b) = (self.h, self.r, self.a, self.b);
        vec![
            origin + Vector2::new(0.0, h),
            origin + Vector2::new(r, 0.0),
            origin + Vector2::new(a, h),
            origin + Vector2::new(a, h + s),
            origin + Vector2::new(r, b),
            origin + Vector2::new(0.0, h + s),
        ]
    }

    /// Pixel extent of a full map of `x_size` by `y_size` tiles. The shifted
    /// odd rows stick out by `R` on the right, and the last row hangs `H`
    /// below the last row pitch.
    pub(crate) fn pixel_size(&self, x_size: u32, y_size: u32) -> Vector2 {
        Vector2::new(
            self.a * f64::from(x_size) + self.r,
            self.row_pitch() * f64::from(y_size) + self.h,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_measures() {
        let dim = HexDimension::new(32).unwrap();
        assert_approx_eq!(dim.h(), 16.0);
        assert_approx_eq!(dim.r(), 27.712_812_921, 1e-6);
        assert_approx_eq!(dim.a(), 55.425_625_842, 1e-6);
        assert_approx_eq!(dim.b(), 64.0);
        assert_approx_eq!(dim.width(), dim.a());
        assert_approx_eq!(dim.height(), 64.0);
        assert_approx_eq!(dim.area(), 2660.430_040_425, 1e-6);
        assert_approx_eq!(dim.perimeter(), 192.0);
        assert_approx_eq!(dim.bounding_area(), dim.a() * 64.0);
        assert_approx_eq!(dim.bounding_perimeter(), 4.0 * dim.r() + 128.0);
        assert_eq!(HexDimension::new(0), Err(TileError::InvalidSide(0)));
    }

    #[test]
    fn test_coord_to_point() {
        let dim = HexDimension::new(32).unwrap();
        assert_eq!(dim.coord_to_point(0, 0), Point2::ORIGIN);
        let p = dim.coord_to_point(0, 1);
        assert_approx_eq!(p.x, dim.r());
        assert_approx_eq!(p.y, 48.0);
        let p = dim.coord_to_point(3, 2);
        assert_approx_eq!(p.x, 3.0 * dim.a());
        assert_approx_eq!(p.y, 96.0);
    }

    #[test]
    fn test_point_to_index_corners() {
        let dim = HexDimension::new(32).unwrap();
        let (r, a) = (dim.r(), dim.a());

        // Even row section (1, 2) starts at (a, 96)
        let base = Point2::new(a, 96.0);
        // Middle of the section is the section's own hex
        assert_eq!(dim.point_to_index(base + Vector2::new(r, 24.0)), (1, 2));
        // Top-left corner is the odd-row hex up and to the left
        assert_eq!(dim.point_to_index(base + Vector2::new(1.0, 1.0)), (0, 1));
        // Top-right corner is the odd-row hex straight up
        assert_eq!(
            dim.point_to_index(base + Vector2::new(a - 1.0, 1.0)),
            (1, 1)
        );

        // Odd row section (1, 1) starts at (a, 48)
        let base = Point2::new(a, 48.0);
        // Top of the right half is the even-row hex above
        assert_eq!(
            dim.point_to_index(base + Vector2::new(r + 1.0, 1.0)),
            (1, 0)
        );
        // Bottom of the right half is the section's own hex
        assert_eq!(
            dim.point_to_index(base + Vector2::new(r + 1.0, 40.0)),
            (1, 1)
        );
        // Top of the left half is also the even-row hex above
        assert_eq!(
            dim.point_to_index(base + Vector2::new(r - 1.0, 1.0)),
            (1, 0)
        );
        // Bottom of the left half is the odd-row hex to the left
        assert_eq!(
            dim.point_to_index(base + Vector2::new(r - 1.0, 40.0)),
            (0, 1)
        );
    }

    #[test]
    fn test_point_to_index_vertical_side() {
        let dim = HexDimension::new(32).unwrap();
        // A point on the vertical side shared by (0, 2) and (1, 2) belongs to
        // the hex on the right
        let point = Point2::new(dim.a(), 96.0 + 24.0);
        assert_eq!(dim.point_to_index(point), (1, 2));
        assert_eq!(dim.point_to_index(point), dim.point_to_index(point));
    }

    #[test]
    fn test_pixel_size() {
        let dim = HexDimension::new(32).unwrap();
        let size = dim.pixel_size(4, 3);
        assert_approx_eq!(size.x, 4.0 * dim.a() + dim.r());
        // Bottom vertex of the last row: 2 * 48 + 64
        assert_approx_eq!(size.y, 160.0);
    }
}
