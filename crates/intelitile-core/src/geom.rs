//! Integer screen-space geometry: points and validated rectangles.
//!
//! Coordinates follow screen conventions, so `y` grows downward and a
//! rectangle's `top` is numerically smaller than its `bottom`.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    ops::{Add, Sub},
};

/// A point (or offset) in screen space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate, growing downward.
    pub y: i32,
}

impl Point {
    /// Construct a point from its coordinates.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// An axis-aligned rectangle with strictly positive width and height.
///
/// The only way to obtain a `Rect` is through a constructor that checks
/// `left < right` and `top < bottom`, so every measurement taken from a
/// `Rect` is meaningful.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Top-left corner (inclusive edge).
    top_left: Point,
    /// Bottom-right corner (exclusive edge).
    bottom_right: Point,
}

impl Rect {
    /// Build a rectangle from two corners, or `None` if they do not span a
    /// positive area.
    #[must_use]
    pub fn new(top_left: Point, bottom_right: Point) -> Option<Self> {
        Self::is_valid(top_left, bottom_right).then_some(Self {
            top_left,
            bottom_right,
        })
    }

    /// Build a rectangle from an origin and a size, as window managers report
    /// geometry. Returns `None` for non-positive sizes or coordinate overflow.
    #[must_use]
    pub fn from_origin_size(x: i32, y: i32, width: i32, height: i32) -> Option<Self> {
        let right = x.checked_add(width)?;
        let bottom = y.checked_add(height)?;
        Self::new(Point::new(x, y), Point::new(right, bottom))
    }

    /// A rectangle anchored at the origin, describing a whole screen.
    #[must_use]
    pub fn screen(width: i32, height: i32) -> Option<Self> {
        Self::from_origin_size(0, 0, width, height)
    }

    /// Whether the two corners describe a physically possible rectangle whose
    /// width and height fit in an `i32`.
    #[inline]
    #[must_use]
    pub fn is_valid(top_left: Point, bottom_right: Point) -> bool {
        top_left.x < bottom_right.x
            && top_left.y < bottom_right.y
            && bottom_right.x.checked_sub(top_left.x).is_some()
            && bottom_right.y.checked_sub(top_left.y).is_some()
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.top_left.x
    }
    #[inline]
    pub fn top(&self) -> i32 {
        self.top_left.y
    }
    #[inline]
    pub fn right(&self) -> i32 {
        self.bottom_right.x
    }
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.bottom_right.y
    }

    #[inline]
    pub fn top_left(&self) -> Point {
        self.top_left
    }
    #[inline]
    pub fn bottom_right(&self) -> Point {
        self.bottom_right
    }
    #[inline]
    pub fn top_right(&self) -> Point {
        Point::new(self.right(), self.top())
    }
    #[inline]
    pub fn bottom_left(&self) -> Point {
        Point::new(self.left(), self.bottom())
    }

    /// Extent of the rectangle as an offset from its top-left corner.
    #[inline]
    pub fn size(&self) -> Point {
        self.bottom_right - self.top_left
    }
    #[inline]
    pub fn width(&self) -> i32 {
        self.size().x
    }
    #[inline]
    pub fn height(&self) -> i32 {
        self.size().y
    }

    /// Area in square pixels, widened so full-screen products cannot overflow.
    #[inline]
    pub fn area(&self) -> i64 {
        i64::from(self.width()) * i64::from(self.height())
    }

    /// Strict overlap test: rectangles that only share an edge or a corner do
    /// not intersect.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        other.left() < self.right()
            && other.top() < self.bottom()
            && other.right() > self.left()
            && other.bottom() > self.top()
    }
}

impl Display for Rect {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "R({}x{}+{}+{})",
            self.width(),
            self.height(),
            self.left(),
            self.top()
        )
    }
}
