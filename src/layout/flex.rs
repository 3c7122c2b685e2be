//! Row and Column.
//!
//! # Algorithm
//!
//! Each draw is a single pass with no state kept between calls:
//!
//! 1. **Intrinsic pass**: children that are not flexible (or have a flex
//!    factor of 0) are drawn with an unbounded main axis so they report their
//!    natural size. Gaps are reserved up front.
//! 2. **Flex pass**: the space left after pass 1 is split between flexible
//!    children in proportion to their factors. Every share is computed from
//!    the same `remaining` value, except the last child's, which takes
//!    whatever is left at that point. Rounding remainders therefore land on
//!    the last child.
//! 3. **Leftover fill**: children built with `space(0)` are drawn again with
//!    an even split of whatever main-axis space is still free. The last of
//!    them takes the rounding remainder.
//! 4. **Placement**: children are positioned in order according to the main
//!    and cross axis alignment options.
//!
//! The container always reports the full main-axis maximum as its main size.
//! The only exception is an unbounded main axis, where flexible children are
//! drawn like intrinsic ones and the container shrinks to its content.

use tracing::{debug, trace};

use super::constraint::BoxConstraint;
use super::orientation::Orientation;
use crate::error::DrawResult;
use crate::surface::Surface;
use crate::widget::Widget;

// =============================================================================
// Options
// =============================================================================

/// How children of a [`Flex`] are laid out on the main axis.
///
/// Only has a visible effect when there is space left over, which is never
/// the case once a tight flexible child is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MainAxisAlignment {
    /// Pack children at the left of a row or top of a column.
    Start,
    /// Pack children at the far end.
    End,
    /// Pack children in the middle.
    Center,
    /// All leftover space between children, none at the ends.
    SpaceBetween,
    /// Leftover space between children, half a share at each end.
    SpaceAround,
    /// Equal leftover space between children and at both ends.
    SpaceEvenly,
}

/// How children of a [`Flex`] are positioned on the cross axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CrossAxisAlignment {
    /// Center each child in the cross space.
    Center,
    /// Top of a row, left of a column.
    Start,
    /// Bottom of a row, right of a column.
    End,
    /// Force every child to the full cross-axis maximum.
    Stretch,
}

/// Layout options for a [`Flex`] container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Options {
    pub main_axis: MainAxisAlignment,
    pub cross_axis: CrossAxisAlignment,
    /// Cells between adjacent children, reserved before any child is sized.
    pub gap: u16,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            main_axis: MainAxisAlignment::Start,
            cross_axis: CrossAxisAlignment::Center,
            gap: 0,
        }
    }
}

impl Options {
    pub fn with_main_axis(mut self, main_axis: MainAxisAlignment) -> Self {
        self.main_axis = main_axis;
        self
    }

    pub fn with_cross_axis(mut self, cross_axis: CrossAxisAlignment) -> Self {
        self.cross_axis = cross_axis;
        self
    }

    pub fn with_gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }
}

// =============================================================================
// Flex
// =============================================================================

/// A container that lays out its children along one axis.
pub struct Flex {
    children: Vec<Box<dyn Widget>>,
    options: Options,
    orientation: Orientation,
}

/// Lay out `children` left to right.
pub fn row(children: Vec<Box<dyn Widget>>, options: Options) -> Flex {
    Flex::new(Orientation::Horizontal, children, options)
}

/// Lay out `children` top to bottom.
pub fn column(children: Vec<Box<dyn Widget>>, options: Options) -> Flex {
    Flex::new(Orientation::Vertical, children, options)
}

impl Flex {
    pub fn new(
        orientation: Orientation,
        children: Vec<Box<dyn Widget>>,
        options: Options,
    ) -> Self {
        Self {
            children,
            options,
            orientation,
        }
    }

    /// Constraint for the intrinsic pass: main axis unbounded with no
    /// minimum, cross axis bounded by the container.
    fn intrinsic_constraint(&self, ctx: BoxConstraint) -> BoxConstraint {
        self.flexible_constraint(ctx, None)
    }

    /// Like [`Self::intrinsic_constraint`] but with the main axis limited to
    /// `share`.
    fn flexible_constraint(&self, ctx: BoxConstraint, share: Option<u16>) -> BoxConstraint {
        let o = self.orientation;
        let out = o.loosen(o.with_main_max(ctx, share));
        match self.options.cross_axis {
            CrossAxisAlignment::Stretch => o.stretch_cross(out),
            _ => o.loosen_cross(out),
        }
    }
}

impl Widget for Flex {
    #[tracing::instrument(
        level = "trace",
        name = "flex_draw",
        skip_all,
        fields(orientation = %self.orientation, children = self.children.len())
    )]
    fn draw(&self, ctx: BoxConstraint) -> DrawResult {
        let o = self.orientation;
        let count = self.children.len();
        let max_main = o.main_limit(ctx.max);

        let mut surfaces: Vec<Option<Surface>> = Vec::with_capacity(count);
        surfaces.resize_with(count, || None);

        let gaps = u16::try_from(count.saturating_sub(1)).unwrap_or(u16::MAX);
        let mut used = self.options.gap.saturating_mul(gaps);
        let mut max_cross = 0u16;
        let mut total_flex = 0u32;

        // Pass 1: intrinsic sizes of non-flexible children. Flexible children
        // only get a share when there is a bounded main axis to share.
        for (i, child) in self.children.iter().enumerate() {
            let factor = child.as_flexible().map_or(0, |f| f.flex_factor());
            if factor > 0 && max_main.is_some() {
                total_flex += u32::from(factor);
                continue;
            }

            let surface = child.draw(self.intrinsic_constraint(ctx))?;
            used = used.saturating_add(o.main_axis(surface.size));
            max_cross = o.cross_max(surface.size, max_cross);
            surfaces[i] = Some(surface);
        }

        // Pass 2: split what is left between flexible children.
        if let Some(max_main) = max_main.filter(|_| total_flex > 0) {
            let remaining = max_main.saturating_sub(used);
            trace!(used, remaining, total_flex, "intrinsic pass done");

            for (i, child) in self.children.iter().enumerate() {
                let Some(flexible) = child.as_flexible() else {
                    continue;
                };
                let factor = flexible.flex_factor();
                if factor == 0 {
                    continue;
                }

                let share = if i == count - 1 {
                    // The last child absorbs everything not yet used,
                    // including rounding left over by earlier shares.
                    max_main.saturating_sub(used)
                } else {
                    // At most `remaining`, since factor <= total_flex.
                    (u32::from(remaining) * u32::from(factor) / total_flex) as u16
                };

                let cons = self.flexible_constraint(ctx, Some(share));
                let cons = if flexible.flex_loose() {
                    o.loosen(cons)
                } else {
                    o.tighten(cons)
                };

                let surface = child.draw(cons)?;
                used = used.saturating_add(o.main_axis(surface.size));
                max_cross = o.cross_max(surface.size, max_cross);
                surfaces[i] = Some(surface);
            }
        }

        // Zero-factor spacers soak up whatever the other children left free.
        if let Some(max_main) = max_main {
            let fillers: Vec<usize> = self
                .children
                .iter()
                .enumerate()
                .filter(|(_, child)| {
                    child
                        .as_flexible()
                        .is_some_and(|f| f.flex_factor() == 0 && f.fills_remaining())
                })
                .map(|(i, _)| i)
                .collect();
            let remaining = max_main.saturating_sub(used);

            if !fillers.is_empty() && remaining > 0 {
                trace!(remaining, fillers = fillers.len(), "filling leftover space");
                let each = remaining / u16::try_from(fillers.len()).unwrap_or(u16::MAX);

                for (n, &i) in fillers.iter().enumerate() {
                    let previous = surfaces[i]
                        .as_ref()
                        .map_or(0, |surface| o.main_axis(surface.size));
                    let share = if n == fillers.len() - 1 {
                        max_main.saturating_sub(used).saturating_add(previous)
                    } else {
                        previous.saturating_add(each)
                    };

                    let cons = o.tighten(self.flexible_constraint(ctx, Some(share)));
                    let surface = self.children[i].draw(cons)?;
                    used = used
                        .saturating_sub(previous)
                        .saturating_add(o.main_axis(surface.size));
                    max_cross = o.cross_max(surface.size, max_cross);
                    surfaces[i] = Some(surface);
                }
            }
        }

        // Placement.
        let main_size = max_main.unwrap_or(used);
        let cross_min = o.cross_axis(ctx.min);
        let cross_size = match o.cross_limit(ctx.max) {
            Some(limit) => max_cross.max(cross_min).min(limit),
            None => max_cross.max(cross_min),
        };
        let remaining = main_size.saturating_sub(used);
        if used > main_size {
            debug!(used, main_size, "children overflow the main axis");
        }
        trace!(used, remaining, main_size, cross_size, "flex pass done");

        let mut surface = Surface::new(o.size(main_size, cross_size));
        if count == 0 {
            return Ok(surface);
        }

        let n = u16::try_from(count).unwrap_or(u16::MAX);
        let mut gap = self.options.gap;
        let mut offset = 0u16;
        match self.options.main_axis {
            MainAxisAlignment::Start => {}
            MainAxisAlignment::End => offset = remaining,
            MainAxisAlignment::Center => offset = remaining / 2,
            MainAxisAlignment::SpaceBetween => {
                // A single child has nothing to space out, so it stays at
                // the start.
                if n > 1 {
                    gap = gap.saturating_add(remaining / (n - 1));
                }
            }
            MainAxisAlignment::SpaceAround => {
                let chunk = remaining / n;
                gap = gap.saturating_add(chunk);
                offset = chunk / 2;
            }
            MainAxisAlignment::SpaceEvenly => {
                let chunk = remaining / n.saturating_add(1);
                gap = gap.saturating_add(chunk);
                offset = chunk;
            }
        }

        debug_assert!(surfaces.iter().all(Option::is_some));
        for (i, child) in surfaces.into_iter().flatten().enumerate() {
            if i > 0 {
                offset = offset.saturating_add(gap);
            }

            let free = cross_size.saturating_sub(o.cross_axis(child.size));
            let cross = match self.options.cross_axis {
                CrossAxisAlignment::Start | CrossAxisAlignment::Stretch => 0,
                CrossAxisAlignment::End => free,
                CrossAxisAlignment::Center => free / 2,
            };

            let child_main = o.main_axis(child.size);
            surface.add_child(o.origin(i32::from(offset), i32::from(cross)), child);
            offset = offset.saturating_add(child_main);
        }

        Ok(surface)
    }
}
