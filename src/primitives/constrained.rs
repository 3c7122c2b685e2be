//! Constraint wrappers.
//!
//! Widgets that adjust the constraint handed to an inner widget and then get
//! out of the way: the inner widget's surface (or error) is returned as is.

use crate::error::DrawResult;
use crate::layout::{Bounds, BoxConstraint};
use crate::types::Size;
use crate::widget::Widget;

// =============================================================================
// Bounded / Fixed
// =============================================================================

/// Raises the incoming minimum to `min` and lowers the incoming maximum to
/// `max` before drawing `widget`. See [`BoxConstraint::enforce`].
///
/// Useful for laying out a row where you want to cap the height, or for
/// giving a child of an unbounded axis a finite box.
pub struct Bounded<W> {
    widget: W,
    min: Bounds,
    max: Bounds,
}

impl<W: Widget> Bounded<W> {
    pub fn new(widget: W, min: Bounds, max: Bounds) -> Self {
        Self { widget, min, max }
    }
}

impl<W: Widget> Widget for Bounded<W> {
    fn draw(&self, ctx: BoxConstraint) -> DrawResult {
        self.widget.draw(ctx.enforce(self.min, self.max))
    }
}

/// Bound `widget` by `min` and `max`.
pub fn bounded<W: Widget>(widget: W, min: Bounds, max: Bounds) -> Bounded<W> {
    Bounded::new(widget, min, max)
}

/// Force `widget` to exactly `size`, as far as the incoming box allows.
///
/// Shortcut for `bounded(widget, size, size)`.
pub fn fixed<W: Widget>(widget: W, size: impl Into<Bounds>) -> Bounded<W> {
    let size = size.into();
    Bounded::new(widget, size, size)
}

// =============================================================================
// LazyBounded
// =============================================================================

/// Limits `widget` by `size` only on axes that arrive unbounded.
///
/// Gives widgets that cannot handle an unbounded axis (a [`Fill`], an
/// endless list) a default size inside a row or column.
///
/// [`Fill`]: super::Fill
pub struct LazyBounded<W> {
    widget: W,
    size: Bounds,
}

impl<W: Widget> LazyBounded<W> {
    pub fn new(widget: W, size: Bounds) -> Self {
        Self { widget, size }
    }
}

impl<W: Widget> Widget for LazyBounded<W> {
    fn draw(&self, ctx: BoxConstraint) -> DrawResult {
        let max = Bounds::new(
            ctx.max.width.or(self.size.width),
            ctx.max.height.or(self.size.height),
        );
        self.widget.draw(BoxConstraint::new(ctx.min, max))
    }
}

/// Limit `widget` by `size` on unbounded axes.
pub fn lazy_bounded<W: Widget>(widget: W, size: impl Into<Bounds>) -> LazyBounded<W> {
    LazyBounded::new(widget, size.into())
}

/// Shortcut for a [`LazyBounded`] that only limits the given size on both axes.
pub fn limited<W: Widget>(widget: W, width: u16, height: u16) -> LazyBounded<W> {
    LazyBounded::new(widget, Bounds::exact(Size::new(width, height)))
}
