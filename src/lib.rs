//! # spark-flex
//!
//! Constraint-based flex layout for terminal cell grids.
//!
//! ## Architecture
//!
//! Every widget implements one contract: given a [`BoxConstraint`], draw a
//! [`Surface`]. Rows and columns are widgets too, so layouts nest freely.
//!
//! ```text
//! root constraint → Flex::draw → child.draw(derived constraint) → Surface tree
//! ```
//!
//! A flex container sizes its children in two passes (natural sizes first,
//! then proportional shares of what is left for flexible children) and then
//! places them according to its [`Options`]. Nothing is cached between
//! passes: the result depends only on the root constraint and the tree.
//!
//! ## Modules
//!
//! - [`types`] - Geometry and cell types (Size, Point, Cell, Attr, Rgba)
//! - [`layout`] - Constraints, orientation, and the Row/Column container
//! - [`primitives`] - Constraint wrappers, fill leaves, flexible children
//! - [`widget`] - The widget contract and the flexible capability
//! - [`surface`] - Draw output
//! - [`error`] - Draw errors

pub mod error;
pub mod layout;
pub mod primitives;
pub mod surface;
pub mod types;
pub mod widget;

// Re-export commonly used items
pub use types::*;

pub use error::{DrawError, DrawResult};

pub use layout::{
    column, row, Bounds, BoxConstraint, CrossAxisAlignment, Flex, MainAxisAlignment, Options,
    Orientation,
};

pub use primitives::{
    bounded, expanded, fill, fixed, flexible, lazy_bounded, limited, space, Bounded, Fill,
    FlexBox, LazyBounded, Spacer,
};

pub use surface::{SubSurface, Surface};

pub use widget::{widget_fn, Flexible, Widget, WidgetExt, WidgetFn};
