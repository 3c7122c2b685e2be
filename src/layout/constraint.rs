//! Box constraints.
//!
//! A [`BoxConstraint`] is the min/max pair a parent hands to a child before
//! the child reports its size. Maximums are per-axis optional: `None` means
//! the axis is unbounded. Constraints are never mutated in place by the
//! layout code, only replaced by derived copies.

use crate::types::Size;

// =============================================================================
// Bounds
// =============================================================================

/// An optional limit on each axis.
///
/// Used both as the maximum of a [`BoxConstraint`] (`None` = unbounded) and as
/// the arguments of the bounding wrappers (`None` = leave this axis alone).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub width: Option<u16>,
    pub height: Option<u16>,
}

impl Bounds {
    /// No limit on either axis.
    pub const NONE: Self = Self {
        width: None,
        height: None,
    };

    pub const fn new(width: Option<u16>, height: Option<u16>) -> Self {
        Self { width, height }
    }

    /// Limit both axes to `size`.
    pub const fn exact(size: Size) -> Self {
        Self::new(Some(size.width), Some(size.height))
    }

    /// Limit only the width.
    pub const fn width(width: u16) -> Self {
        Self::new(Some(width), None)
    }

    /// Limit only the height.
    pub const fn height(height: u16) -> Self {
        Self::new(None, Some(height))
    }
}

impl From<Size> for Bounds {
    fn from(size: Size) -> Self {
        Self::exact(size)
    }
}

/// The smaller of two limits, where `None` is the larger.
#[inline]
fn min_limit(a: Option<u16>, b: Option<u16>) -> Option<u16> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, None) => a,
        (None, b) => b,
    }
}

/// Lower `min` to `max` when `max` is bounded and smaller.
#[inline]
fn fit_min(min: u16, max: Option<u16>) -> u16 {
    max.map_or(min, |max| min.min(max))
}

/// Clamp `value` into `[min, max]`, treating `None` as no upper bound.
#[inline]
fn clamp_axis(value: u16, min: u16, max: Option<u16>) -> u16 {
    let value = value.max(min);
    max.map_or(value, |max| value.min(max))
}

// =============================================================================
// BoxConstraint
// =============================================================================

/// Min/max size bounds for a draw call.
///
/// Invariant: `min <= max` on every bounded axis. Every constructor and
/// derivation lowers a minimum that would exceed its maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BoxConstraint {
    pub min: Size,
    pub max: Bounds,
}

impl BoxConstraint {
    /// Create a constraint, lowering `min` where it exceeds `max`.
    pub fn new(min: Size, max: Bounds) -> Self {
        Self { min, max }.normalized()
    }

    /// Exactly `size`.
    pub const fn tight(size: Size) -> Self {
        Self {
            min: size,
            max: Bounds::exact(size),
        }
    }

    /// Anything from zero up to `size`.
    pub const fn loose(size: Size) -> Self {
        Self {
            min: Size::ZERO,
            max: Bounds::exact(size),
        }
    }

    /// No bounds at all.
    pub const fn unbounded() -> Self {
        Self {
            min: Size::ZERO,
            max: Bounds::NONE,
        }
    }

    #[inline]
    pub const fn has_unbounded_width(&self) -> bool {
        self.max.width.is_none()
    }

    #[inline]
    pub const fn has_unbounded_height(&self) -> bool {
        self.max.height.is_none()
    }

    /// True when both axes admit exactly one size.
    pub fn is_tight(&self) -> bool {
        self.max.width == Some(self.min.width) && self.max.height == Some(self.min.height)
    }

    /// Clamp `size` into this box.
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            clamp_axis(size.width, self.min.width, self.max.width),
            clamp_axis(size.height, self.min.height, self.max.height),
        )
    }

    /// Copy with both minimums set to zero.
    pub fn loosen(&self) -> Self {
        Self {
            min: Size::ZERO,
            max: self.max,
        }
    }

    /// Copy whose min and max are as close to `size` as this box allows.
    ///
    /// Axes where `size` is `None` are left untouched.
    pub fn tighten_to(&self, size: Bounds) -> Self {
        let mut out = *self;
        if let Some(width) = size.width {
            let width = clamp_axis(width, self.min.width, self.max.width);
            out.min.width = width;
            out.max.width = Some(width);
        }
        if let Some(height) = size.height {
            let height = clamp_axis(height, self.min.height, self.max.height);
            out.min.height = height;
            out.max.height = Some(height);
        }
        out
    }

    /// Raise the minimum to at least `min` and lower the maximum to at most
    /// `max`, per axis. `None` components impose nothing.
    ///
    /// If the result would have a minimum above its maximum, the maximum wins.
    /// This keeps repeated enforcement equivalent to a single enforcement
    /// with the combined bounds.
    pub fn enforce(&self, min: Bounds, max: Bounds) -> Self {
        let raised = Size::new(
            self.min.width.max(min.width.unwrap_or(0)),
            self.min.height.max(min.height.unwrap_or(0)),
        );
        let lowered = Bounds::new(
            min_limit(self.max.width, max.width),
            min_limit(self.max.height, max.height),
        );
        Self::new(raised, lowered)
    }

    /// The largest box satisfying both constraints.
    pub fn intersect(&self, other: &BoxConstraint) -> Self {
        self.enforce(Bounds::exact(other.min), other.max)
    }

    pub(crate) fn normalized(mut self) -> Self {
        self.min.width = fit_min(self.min.width, self.max.width);
        self.min.height = fit_min(self.min.height, self.max.height);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BoxConstraint {
        BoxConstraint::new(Size::new(2, 1), Bounds::new(Some(20), None))
    }

    #[test]
    fn test_new_lowers_min_to_max() {
        let c = BoxConstraint::new(Size::new(30, 5), Bounds::new(Some(10), None));
        assert_eq!(c.min, Size::new(10, 5));
        assert_eq!(c.max, Bounds::new(Some(10), None));
    }

    #[test]
    fn test_constrain_clamps_both_ways() {
        let c = sample();
        assert_eq!(c.constrain(Size::new(0, 0)), Size::new(2, 1));
        assert_eq!(c.constrain(Size::new(50, 900)), Size::new(20, 900));
        assert_eq!(BoxConstraint::tight(Size::new(4, 4)).constrain(Size::ZERO), Size::new(4, 4));
    }

    #[test]
    fn test_tight_and_loose() {
        let tight = BoxConstraint::tight(Size::new(3, 7));
        assert!(tight.is_tight());
        let loose = BoxConstraint::loose(Size::new(3, 7));
        assert!(!loose.is_tight());
        assert_eq!(loose.min, Size::ZERO);
        assert!(!BoxConstraint::unbounded().is_tight());
        assert!(BoxConstraint::unbounded().has_unbounded_width());
        assert!(BoxConstraint::unbounded().has_unbounded_height());
    }

    #[test]
    fn test_loosen_drops_minimums() {
        let c = sample().loosen();
        assert_eq!(c.min, Size::ZERO);
        assert_eq!(c.max, sample().max);
    }

    #[test]
    fn test_tighten_to_stays_in_bounds() {
        let c = BoxConstraint::new(Size::new(2, 0), Bounds::new(Some(10), Some(10)));

        let t = c.tighten_to(Bounds::new(Some(40), None));
        assert_eq!(t.min.width, 10);
        assert_eq!(t.max.width, Some(10));
        assert_eq!(t.min.height, 0);
        assert_eq!(t.max.height, Some(10));

        let t = c.tighten_to(Bounds::exact(Size::new(1, 4)));
        assert_eq!(t, BoxConstraint::tight(Size::new(2, 4)));
    }

    #[test]
    fn test_enforce_none_imposes_nothing() {
        let c = sample();
        assert_eq!(c.enforce(Bounds::NONE, Bounds::NONE), c);
    }

    #[test]
    fn test_enforce_raises_min_and_lowers_max() {
        let c = BoxConstraint::loose(Size::new(16, 16));
        let e = c.enforce(Bounds::height(2), Bounds::width(3));
        assert_eq!(e.min, Size::new(0, 2));
        assert_eq!(e.max, Bounds::new(Some(3), Some(16)));
    }

    #[test]
    fn test_enforce_bounds_unbounded_axis() {
        let e = BoxConstraint::unbounded().enforce(Bounds::NONE, Bounds::height(5));
        assert_eq!(e.max, Bounds::new(None, Some(5)));
    }

    #[test]
    fn test_enforce_max_wins_over_min() {
        let c = BoxConstraint::loose(Size::new(5, 5));
        let e = c.enforce(Bounds::exact(Size::new(8, 8)), Bounds::NONE);
        assert_eq!(e, BoxConstraint::tight(Size::new(5, 5)));
    }

    #[test]
    fn test_enforce_composes() {
        let base = BoxConstraint::new(Size::new(1, 0), Bounds::new(Some(12), None));
        let bounds = [
            (Bounds::NONE, Bounds::NONE),
            (Bounds::width(4), Bounds::height(9)),
            (Bounds::exact(Size::new(20, 3)), Bounds::width(6)),
            (Bounds::height(7), Bounds::exact(Size::new(2, 2))),
        ];

        for (min_a, max_a) in bounds {
            for (min_b, max_b) in bounds {
                let nested = base.enforce(min_b, max_b).enforce(min_a, max_a);
                let combined = base.enforce(
                    Bounds::new(
                        Some(min_a.width.unwrap_or(0).max(min_b.width.unwrap_or(0))),
                        Some(min_a.height.unwrap_or(0).max(min_b.height.unwrap_or(0))),
                    ),
                    Bounds::new(
                        min_limit(max_a.width, max_b.width),
                        min_limit(max_a.height, max_b.height),
                    ),
                );
                assert_eq!(nested, combined, "a=({min_a:?}, {max_a:?}) b=({min_b:?}, {max_b:?})");
            }
        }
    }

    #[test]
    fn test_intersect() {
        let a = BoxConstraint::new(Size::new(2, 0), Bounds::new(Some(10), None));
        let b = BoxConstraint::new(Size::new(0, 3), Bounds::new(Some(8), Some(6)));
        let i = a.intersect(&b);
        assert_eq!(i.min, Size::new(2, 3));
        assert_eq!(i.max, Bounds::new(Some(8), Some(6)));
        assert_eq!(i, b.intersect(&a));
    }
}
