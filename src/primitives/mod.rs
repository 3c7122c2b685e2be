//! Layout Primitives - Building blocks for rows and columns.
//!
//! - [`constrained`] - `Bounded`, `fixed`, `LazyBounded`: adjust the
//!   constraint passed to an inner widget
//! - [`fill`] - `Fill` and `Spacer` leaves that take their whole box
//! - [`flexible`] - `expanded`, `flexible`, `space`: children that share
//!   leftover space in a row or column
//!
//! # Example
//!
//! ```
//! use spark_flex::{
//!     column, expanded, fill, fixed, space, BoxConstraint, Cell, Options, Size, Widget,
//!     WidgetExt,
//! };
//!
//! let layout = column(
//!     vec![
//!         fixed(fill(Cell::new('=')), Size::new(10, 1)).boxed(),
//!         expanded(fill(Cell::new('.')), 1).boxed(),
//!         space(1).boxed(),
//!     ],
//!     Options::default(),
//! );
//!
//! let surface = layout.draw(BoxConstraint::loose(Size::new(10, 9))).unwrap();
//! assert_eq!(surface.size, Size::new(10, 9));
//! assert_eq!(surface.children[1].surface.size, Size::new(10, 4));
//! ```

pub mod constrained;
pub mod fill;
pub mod flexible;

pub use constrained::{bounded, fixed, lazy_bounded, limited, Bounded, LazyBounded};
pub use fill::{fill, Fill, Spacer};
pub use flexible::{expanded, flexible, space, FlexBox};
