//! The widget contract.
//!
//! A [`Widget`] turns a [`BoxConstraint`] into a [`Surface`]. Containers hold
//! children as `Box<dyn Widget>` and are widgets themselves, so they nest
//! freely.
//!
//! Flexibility is a capability, not a subtype: a widget that wants a share of
//! a container's leftover space implements [`Flexible`] and returns itself
//! from [`Widget::as_flexible`]. Everything else keeps the default `None`.

use crate::error::DrawResult;
use crate::layout::BoxConstraint;

/// Anything that can draw itself under a box constraint.
pub trait Widget {
    /// Draw under `ctx` and return the resulting surface.
    fn draw(&self, ctx: BoxConstraint) -> DrawResult;

    /// The flexible capability, if this widget has one.
    fn as_flexible(&self) -> Option<&dyn Flexible> {
        None
    }
}

/// A widget that takes a proportional share of leftover main-axis space.
pub trait Flexible {
    /// Weight of this widget's share. Zero means "not flexible".
    fn flex_factor(&self) -> u16;

    /// When true the widget may end up smaller than its share.
    fn flex_loose(&self) -> bool {
        false
    }

    /// When true and the factor is zero, the widget takes whatever main-axis
    /// space is still free after every other child has been drawn.
    fn fills_remaining(&self) -> bool {
        false
    }
}

/// A [`Widget`] that calls a closure during draw.
pub struct WidgetFn<F>(F);

/// Turn a closure into a widget.
pub fn widget_fn<F>(f: F) -> WidgetFn<F>
where
    F: Fn(BoxConstraint) -> DrawResult,
{
    WidgetFn(f)
}

impl<F> Widget for WidgetFn<F>
where
    F: Fn(BoxConstraint) -> DrawResult,
{
    fn draw(&self, ctx: BoxConstraint) -> DrawResult {
        (self.0)(ctx)
    }
}

/// Conveniences available on every sized widget.
pub trait WidgetExt: Widget + Sized + 'static {
    /// Erase the concrete type for use as a container child.
    fn boxed(self) -> Box<dyn Widget> {
        Box::new(self)
    }
}

impl<W: Widget + 'static> WidgetExt for W {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Surface;
    use crate::types::Size;

    #[test]
    fn test_widget_fn_draws_with_ctx() {
        let w = widget_fn(|ctx: BoxConstraint| Ok(Surface::new(ctx.min)));
        let surface = w.draw(BoxConstraint::tight(Size::new(2, 3))).unwrap();
        assert_eq!(surface.size, Size::new(2, 3));
        assert!(w.as_flexible().is_none());
    }

    #[test]
    fn test_boxed_widget_keeps_behavior() {
        let w = widget_fn(|_| Ok(Surface::new(Size::new(1, 1)))).boxed();
        assert_eq!(w.draw(BoxConstraint::unbounded()).unwrap().size, Size::new(1, 1));
    }
}
