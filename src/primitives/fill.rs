//! Fill leaves.
//!
//! Leaves that always take their whole box. [`Fill`] paints it; [`Spacer`]
//! leaves it transparent and backs the `space` flexible wrapper.

use crate::error::{DrawError, DrawResult};
use crate::layout::{BoxConstraint, Orientation};
use crate::surface::Surface;
use crate::types::{Cell, Size};
use crate::widget::Widget;

/// Paints its entire maximum box with one cell.
///
/// Mostly useful for diagnosing layouts. It has no size of its own, so it
/// belongs inside a bounding or flexible wrapper; an unbounded axis is an
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fill {
    cell: Cell,
}

impl Fill {
    pub fn new(cell: Cell) -> Self {
        Self { cell }
    }
}

/// Fill all available space with `cell`.
pub fn fill(cell: Cell) -> Fill {
    Fill::new(cell)
}

impl Widget for Fill {
    fn draw(&self, ctx: BoxConstraint) -> DrawResult {
        let width = ctx
            .max
            .width
            .ok_or_else(|| DrawError::unbounded("fill", Orientation::Horizontal))?;
        let height = ctx
            .max
            .height
            .ok_or_else(|| DrawError::unbounded("fill", Orientation::Vertical))?;
        Ok(Surface::filled(Size::new(width, height), self.cell))
    }
}

/// Takes the maximum on bounded axes and the minimum on unbounded ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Spacer;

impl Widget for Spacer {
    fn draw(&self, ctx: BoxConstraint) -> DrawResult {
        Ok(Surface::new(Size::new(
            ctx.max.width.unwrap_or(ctx.min.width),
            ctx.max.height.unwrap_or(ctx.min.height),
        )))
    }
}
