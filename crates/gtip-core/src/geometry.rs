#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! All coordinates are character cells relative to the viewport's working
//! origin (0-indexed, origin at top-left, editor chrome excluded).

/// A single cell position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// Column.
    pub x: u16,
    /// Row.
    pub y: u16,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

impl From<(u16, u16)> for Point {
    fn from((x, y): (u16, u16)) -> Self {
        Self::new(x, y)
    }
}

/// A width/height pair in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    /// Width in cells.
    pub width: u16,
    /// Height in cells.
    pub height: u16,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Check if either dimension is zero.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Shrink each dimension to at most the corresponding one in `max`.
    #[inline]
    pub fn clamp_max(self, max: Size) -> Size {
        Size::new(self.width.min(max.width), self.height.min(max.height))
    }
}

impl From<(u16, u16)> for Size {
    fn from((width, height): (u16, u16)) -> Self {
        Self::new(width, height)
    }
}

/// A rectangle for panel bounds and hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: u16,
    /// Top edge (inclusive).
    pub y: u16,
    /// Width in cells.
    pub width: u16,
    /// Height in cells.
    pub height: u16,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from an origin and a size.
    #[inline]
    pub const fn from_parts(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Top-left corner.
    #[inline]
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Width and height.
    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Rightmost occupied column, or `None` for a zero-width rectangle.
    #[inline]
    pub const fn last_column(&self) -> Option<u16> {
        if self.width == 0 {
            None
        } else {
            Some(self.right() - 1)
        }
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub const fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Crop the rectangle so it does not extend past a viewport of `bounds`
    /// anchored at the origin. The origin itself is kept.
    pub fn crop_to(&self, bounds: Size) -> Rect {
        let room = Size::new(
            bounds.width.saturating_sub(self.x),
            bounds.height.saturating_sub(self.y),
        );
        Rect::from_parts(self.origin(), self.size().clamp_max(room))
    }
}

#[cfg(test)]
mod tests {
    use super::{Point, Rect, Size};

    // --- Point / Size ---

    #[test]
    fn point_from_tuple() {
        assert_eq!(Point::from((3, 7)), Point::new(3, 7));
    }

    #[test]
    fn size_is_empty() {
        assert!(Size::new(0, 5).is_empty());
        assert!(Size::new(5, 0).is_empty());
        assert!(!Size::new(1, 1).is_empty());
    }

    #[test]
    fn size_clamp_max() {
        let s = Size::new(30, 4).clamp_max(Size::new(20, 10));
        assert_eq!(s, Size::new(20, 4));
    }

    // --- Rect accessors ---

    #[test]
    fn rect_parts_round_trip() {
        let r = Rect::from_parts(Point::new(2, 3), Size::new(10, 4));
        assert_eq!(r, Rect::new(2, 3, 10, 4));
        assert_eq!(r.origin(), Point::new(2, 3));
        assert_eq!(r.size(), Size::new(10, 4));
    }

    #[test]
    fn rect_right_bottom_exclusive() {
        let r = Rect::new(10, 20, 30, 40);
        assert_eq!(r.right(), 40);
        assert_eq!(r.bottom(), 60);
    }

    #[test]
    fn rect_right_bottom_saturating() {
        let r = Rect::new(u16::MAX - 5, u16::MAX - 3, 100, 100);
        assert_eq!(r.right(), u16::MAX);
        assert_eq!(r.bottom(), u16::MAX);
    }

    #[test]
    fn rect_last_column() {
        assert_eq!(Rect::new(4, 0, 3, 1).last_column(), Some(6));
        assert_eq!(Rect::new(4, 0, 0, 1).last_column(), None);
    }

    #[test]
    fn rect_is_empty() {
        assert!(Rect::new(5, 5, 0, 10).is_empty());
        assert!(!Rect::new(0, 0, 1, 1).is_empty());
    }

    #[test]
    fn rect_contains_boundary_conditions() {
        let r = Rect::new(0, 0, 5, 5);
        assert!(r.contains(Point::new(0, 0)));
        assert!(r.contains(Point::new(4, 4)));
        assert!(!r.contains(Point::new(5, 0)));
        assert!(!r.contains(Point::new(0, 5)));
    }

    // --- Cropping ---

    #[test]
    fn crop_keeps_fitting_rect() {
        let r = Rect::new(2, 2, 5, 5);
        assert_eq!(r.crop_to(Size::new(80, 24)), r);
    }

    #[test]
    fn crop_trims_overflow() {
        let r = Rect::new(70, 20, 20, 10);
        assert_eq!(r.crop_to(Size::new(80, 24)), Rect::new(70, 20, 10, 4));
    }

    #[test]
    fn crop_origin_outside_is_empty() {
        let r = Rect::new(90, 30, 5, 5);
        assert!(r.crop_to(Size::new(80, 24)).is_empty());
    }
}
