//! Main/cross axis vocabulary.
//!
//! [`Orientation`] maps "main axis" and "cross axis" onto width and height.
//! The flex container goes through these methods for every axis-dependent
//! read or write, so it never branches on orientation itself.

use std::fmt;

use super::constraint::{Bounds, BoxConstraint};
use crate::types::{Point, Size};

/// The direction a container lays out its children in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Main axis is width (a row).
    Horizontal,
    /// Main axis is height (a column).
    Vertical,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => f.write_str("horizontal"),
            Self::Vertical => f.write_str("vertical"),
        }
    }
}

impl Orientation {
    /// The (main, cross) components of `size`.
    #[inline]
    pub const fn axes(&self, size: Size) -> (u16, u16) {
        match self {
            Self::Horizontal => (size.width, size.height),
            Self::Vertical => (size.height, size.width),
        }
    }

    #[inline]
    pub const fn main_axis(&self, size: Size) -> u16 {
        self.axes(size).0
    }

    #[inline]
    pub const fn cross_axis(&self, size: Size) -> u16 {
        self.axes(size).1
    }

    /// The larger of `current` and the cross axis of `size`.
    #[inline]
    pub fn cross_max(&self, size: Size, current: u16) -> u16 {
        current.max(self.cross_axis(size))
    }

    /// Build a size from main and cross components. Inverse of [`Self::axes`].
    #[inline]
    pub const fn size(&self, main: u16, cross: u16) -> Size {
        match self {
            Self::Horizontal => Size::new(main, cross),
            Self::Vertical => Size::new(cross, main),
        }
    }

    /// A point at the given main and cross offsets.
    #[inline]
    pub const fn origin(&self, main: i32, cross: i32) -> Point {
        match self {
            Self::Horizontal => Point::new(main, cross),
            Self::Vertical => Point::new(cross, main),
        }
    }

    /// `origin` moved by main and cross offsets.
    pub const fn offset_origin(&self, origin: Point, main: i32, cross: i32) -> Point {
        let delta = self.origin(main, cross);
        Point::new(origin.col + delta.col, origin.row + delta.row)
    }

    /// The main-axis component of `bounds`.
    #[inline]
    pub const fn main_limit(&self, bounds: Bounds) -> Option<u16> {
        match self {
            Self::Horizontal => bounds.width,
            Self::Vertical => bounds.height,
        }
    }

    /// The cross-axis component of `bounds`.
    #[inline]
    pub const fn cross_limit(&self, bounds: Bounds) -> Option<u16> {
        match self {
            Self::Horizontal => bounds.height,
            Self::Vertical => bounds.width,
        }
    }

    /// Copy of `ctx` with the main-axis minimum set to 0.
    pub fn loosen(&self, ctx: BoxConstraint) -> BoxConstraint {
        let mut out = ctx;
        match self {
            Self::Horizontal => out.min.width = 0,
            Self::Vertical => out.min.height = 0,
        }
        out
    }

    /// Copy of `ctx` with the main-axis minimum raised to the main-axis
    /// maximum. An unbounded main axis is left as it is.
    pub fn tighten(&self, ctx: BoxConstraint) -> BoxConstraint {
        let mut out = ctx;
        match (self, ctx.max.width, ctx.max.height) {
            (Self::Horizontal, Some(width), _) => out.min.width = width,
            (Self::Vertical, _, Some(height)) => out.min.height = height,
            _ => {}
        }
        out
    }

    /// Copy of `ctx` with the main-axis maximum replaced by `max`.
    pub fn with_main_max(&self, ctx: BoxConstraint, max: Option<u16>) -> BoxConstraint {
        let mut out = ctx;
        match self {
            Self::Horizontal => out.max.width = max,
            Self::Vertical => out.max.height = max,
        }
        out.normalized()
    }

    /// Copy of `ctx` with the cross-axis minimum set to 0.
    pub fn loosen_cross(&self, ctx: BoxConstraint) -> BoxConstraint {
        self.flip().loosen(ctx)
    }

    /// Copy of `ctx` with the cross-axis minimum raised to the cross-axis
    /// maximum.
    pub fn stretch_cross(&self, ctx: BoxConstraint) -> BoxConstraint {
        self.flip().tighten(ctx)
    }

    #[inline]
    const fn flip(&self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOTH: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];

    #[test]
    fn test_axes() {
        let size = Size::new(7, 3);
        assert_eq!(Orientation::Horizontal.axes(size), (7, 3));
        assert_eq!(Orientation::Vertical.axes(size), (3, 7));
        assert_eq!(Orientation::Vertical.main_axis(size), 3);
        assert_eq!(Orientation::Vertical.cross_axis(size), 7);
    }

    #[test]
    fn test_size_inverts_axes() {
        let size = Size::new(5, 9);
        for o in BOTH {
            let (main, cross) = o.axes(size);
            assert_eq!(o.size(main, cross), size);
        }
    }

    #[test]
    fn test_cross_max() {
        let o = Orientation::Horizontal;
        assert_eq!(o.cross_max(Size::new(1, 4), 2), 4);
        assert_eq!(o.cross_max(Size::new(9, 1), 2), 2);
        assert_eq!(Orientation::Vertical.cross_max(Size::new(9, 1), 2), 9);
    }

    #[test]
    fn test_origin() {
        assert_eq!(Orientation::Horizontal.origin(4, 1), Point::new(4, 1));
        assert_eq!(Orientation::Vertical.origin(4, 1), Point::new(1, 4));
        assert_eq!(
            Orientation::Vertical.offset_origin(Point::new(2, 2), 3, 1),
            Point::new(3, 5)
        );
    }

    #[test]
    fn test_limits() {
        let bounds = Bounds::new(Some(8), None);
        assert_eq!(Orientation::Horizontal.main_limit(bounds), Some(8));
        assert_eq!(Orientation::Horizontal.cross_limit(bounds), None);
        assert_eq!(Orientation::Vertical.main_limit(bounds), None);
        assert_eq!(Orientation::Vertical.cross_limit(bounds), Some(8));
    }

    #[test]
    fn test_loosen_and_tighten_touch_only_main_axis() {
        let ctx = BoxConstraint::new(Size::new(2, 3), Bounds::new(Some(10), Some(12)));

        let t = Orientation::Horizontal.tighten(ctx);
        assert_eq!(t.min, Size::new(10, 3));
        assert_eq!(t.max, ctx.max);

        let l = Orientation::Vertical.loosen(ctx);
        assert_eq!(l.min, Size::new(2, 0));
        assert_eq!(l.max, ctx.max);
    }

    #[test]
    fn test_tighten_is_idempotent() {
        let ctx = BoxConstraint::loose(Size::new(6, 4));
        for o in BOTH {
            assert_eq!(o.tighten(o.tighten(ctx)), o.tighten(ctx));
        }
    }

    #[test]
    fn test_loosen_undoes_tighten_on_loose_axis() {
        let ctx = BoxConstraint::new(Size::new(0, 2), Bounds::new(Some(6), Some(4)));
        let o = Orientation::Horizontal;
        assert_eq!(o.loosen(o.tighten(ctx)), ctx);
    }

    #[test]
    fn test_tighten_ignores_unbounded_main() {
        let ctx = BoxConstraint::unbounded();
        for o in BOTH {
            assert_eq!(o.tighten(ctx), ctx);
        }
    }

    #[test]
    fn test_with_main_max_and_cross_helpers() {
        let ctx = BoxConstraint::new(Size::new(4, 1), Bounds::new(Some(10), Some(5)));
        let o = Orientation::Horizontal;

        let c = o.with_main_max(ctx, Some(3));
        assert_eq!(c.max, Bounds::new(Some(3), Some(5)));
        assert_eq!(c.min, Size::new(3, 1));

        let c = o.with_main_max(ctx, None);
        assert!(c.has_unbounded_width());

        assert_eq!(o.stretch_cross(ctx).min, Size::new(4, 5));
        assert_eq!(o.loosen_cross(ctx).min, Size::new(4, 0));
    }
}
