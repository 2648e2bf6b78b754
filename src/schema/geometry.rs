//! Integral pixel geometry shared by the raw export and the parsed atlas.

use serde::{Deserialize, Serialize};

/// Width and height in integral pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Wh {
    pub w: i32,
    pub h: i32,
}

impl Wh {
    pub const fn new(w: i32, h: i32) -> Self {
        Self { w, h }
    }

    /// Pixel area (width * height).
    #[inline]
    pub fn area(self) -> i64 {
        self.w as i64 * self.h as i64
    }
}

/// An axis-aligned rectangle in integral pixels from the top-left.
///
/// A rectangle with a negative width or height is "flipped" and contains no
/// points. Flipped rectangles stand in for "no slices" so that a cel always
/// carries a slice bounds value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    /// The flipped sentinel used when a cel or film has no slices.
    pub const EMPTY: Rect = Rect::new(0, 0, -1, -1);

    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn is_flipped(&self) -> bool {
        self.w < 0 || self.h < 0
    }

    #[inline]
    pub fn wh(&self) -> Wh {
        Wh::new(self.w, self.h)
    }

    /// Pixel area. Flipped rectangles report zero.
    #[inline]
    pub fn area(&self) -> i64 {
        if self.is_flipped() {
            0
        } else {
            self.wh().area()
        }
    }

    /// Exclusive right edge.
    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    /// Exclusive bottom edge.
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Smallest rectangle containing both. A flipped operand contributes
    /// nothing.
    pub fn union(&self, other: &Rect) -> Rect {
        if self.is_flipped() {
            return *other;
        }
        if other.is_flipped() {
            return *self;
        }
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect::new(x, y, right - x, bottom - y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_grows_to_cover_both() {
        let a = Rect::new(1, 2, 3, 4);
        let b = Rect::new(5, 0, 2, 2);
        assert_eq!(a.union(&b), Rect::new(1, 0, 6, 6));
        assert_eq!(b.union(&a), Rect::new(1, 0, 6, 6));
    }

    #[test]
    fn test_union_ignores_flipped() {
        let a = Rect::new(8, 12, 2, 3);
        assert_eq!(Rect::EMPTY.union(&a), a);
        assert_eq!(a.union(&Rect::EMPTY), a);
        assert!(Rect::EMPTY.union(&Rect::EMPTY).is_flipped());
    }

    #[test]
    fn test_area() {
        assert_eq!(Rect::new(0, 0, 16, 16).area(), 256);
        assert_eq!(Rect::EMPTY.area(), 0);
        assert_eq!(Wh::new(3, 4).area(), 12);
    }
}
