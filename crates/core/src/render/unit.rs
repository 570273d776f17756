use derive_more::{
    Add, AddAssign, Display, Div, DivAssign, From, Into, Mul, MulAssign, Neg,
    Sub, SubAssign,
};
use serde::{Deserialize, Serialize};
use std::ops;

/// A point in 2D pixel space. The origin is the top-left corner of the
/// rendered map, x grows to the right and y grows **down**, the same way
/// screen pixels are addressed.
///
/// Pixel positions are continuous. Tile coordinates are the discrete
/// counterpart, see [crate::TileCoord].
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    PartialOrd,
    From,
    Into,
    Mul,
    Div,
    MulAssign,
    DivAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", "self.x", "self.y")]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Is each component a real number? NaN and infinity can't be mapped onto
    /// any tile.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// An offset in 2D pixel space. See [Point2] for a description of the axes.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    PartialOrd,
    From,
    Into,
    Neg,
    Add,
    Sub,
    Mul,
    Div,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "<{}, {}>", "self.x", "self.y")]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl ops::Add<Vector2> for Point2 {
    type Output = Point2;

    fn add(self, rhs: Vector2) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl ops::Sub<Point2> for Point2 {
    type Output = Vector2;

    fn sub(self, rhs: Point2) -> Self::Output {
        Vector2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

/// An axis-aligned rectangle in pixel space, defined by its top-left corner
/// and its size. This is what a presentation layer should repaint when a
/// single tile changes.
#[derive(Copy, Clone, Debug, Display, PartialEq, Serialize, Deserialize)]
#[display(fmt = "{} {}x{}", "self.origin", "self.size.x", "self.size.y")]
pub struct Bounds {
    pub origin: Point2,
    pub size: Vector2,
}

impl Bounds {
    /// The corner opposite of the origin
    pub fn far_corner(&self) -> Point2 {
        self.origin + self.size
    }

    /// Does this rectangle contain the point? The near edges are inclusive and
    /// the far edges are exclusive, so adjacent rectangles never share a
    /// point.
    pub fn contains(&self, point: Point2) -> bool {
        let far = self.far_corner();
        point.x >= self.origin.x
            && point.y >= self.origin.y
            && point.x < far.x
            && point.y < far.y
    }
}

/// An RGB color. Values are stored as floats between 0 and 1 (inclusive).
/// This uses f32 because the extra precision from f64 is pointless.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color3 {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl Color3 {
    pub const BLACK: Self = Self::new_int(0, 0, 0);
    pub const WHITE: Self = Self::new_int(255, 255, 255);
    /// Fill used for highlighted (selected) tiles
    pub const LIGHT_GRAY: Self = Self::new_int(192, 192, 192);

    /// Create a new RGB color from integer components in the [0,255] range.
    pub const fn new_int(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
        }
    }

    /// Convert this number to a set of 3 bytes: `(red, green, blue)`
    pub fn to_ints(self) -> (u8, u8, u8) {
        (
            (self.red * 255.0).round() as u8,
            (self.green * 255.0).round() as u8,
            (self.blue * 255.0).round() as u8,
        )
    }

    /// Convert this color to an HTML color code: `#rrggbb`
    pub fn to_html(self) -> String {
        let (r, g, b) = self.to_ints();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}
