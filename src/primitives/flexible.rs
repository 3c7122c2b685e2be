//! Flexible children.
//!
//! [`FlexBox`] wraps a widget and gives it the [`Flexible`] capability, so a
//! row or column hands it a share of the leftover main-axis space instead of
//! asking for its natural size.

use super::fill::Spacer;
use crate::error::DrawResult;
use crate::layout::BoxConstraint;
use crate::widget::{Flexible, Widget};

/// A widget with a flex factor and a fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlexBox<W> {
    widget: W,
    flex: u16,
    loose: bool,
    fill_remaining: bool,
}

impl<W: Widget> FlexBox<W> {
    pub fn new(widget: W, flex: u16, loose: bool) -> Self {
        Self {
            widget,
            flex,
            loose,
            fill_remaining: false,
        }
    }
}

impl<W: Widget> Widget for FlexBox<W> {
    fn draw(&self, ctx: BoxConstraint) -> DrawResult {
        self.widget.draw(ctx)
    }

    fn as_flexible(&self) -> Option<&dyn Flexible> {
        Some(self)
    }
}

impl<W> Flexible for FlexBox<W> {
    fn flex_factor(&self) -> u16 {
        self.flex
    }

    fn flex_loose(&self) -> bool {
        self.loose
    }

    fn fills_remaining(&self) -> bool {
        self.fill_remaining
    }
}

/// Expand `widget` to exactly its share of the leftover space.
///
/// A flex of 0 makes the widget not flexible at all, which is usually a
/// layout bug.
pub fn expanded<W: Widget>(widget: W, flex: u16) -> FlexBox<W> {
    FlexBox::new(widget, flex, false)
}

/// Let `widget` take up to its share of the leftover space.
///
/// A flex of 0 makes the widget not flexible at all, which is usually a
/// layout bug.
pub fn flexible<W: Widget>(widget: W, flex: u16) -> FlexBox<W> {
    FlexBox::new(widget, flex, true)
}

/// Empty space that shares the leftover space with weight `flex`.
///
/// `space(0)` takes no share of its own. Once every other child is drawn it
/// absorbs whatever main-axis space is still free, split evenly between
/// all such spacers. On an unbounded main axis it takes nothing.
pub fn space(flex: u16) -> FlexBox<Spacer> {
    FlexBox {
        fill_remaining: true,
        ..FlexBox::new(Spacer, flex, false)
    }
}
