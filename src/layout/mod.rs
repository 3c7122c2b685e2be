//! Layout Module
//!
//! Constraint-based flex layout for terminal cell grids.
//!
//! # Architecture
//!
//! Layout is a recursive draw: a parent hands each child a [`BoxConstraint`],
//! the child returns a sized [`Surface`](crate::Surface), and the parent
//! positions the results. There is no layout tree kept between frames; every
//! pass is a pure function of the root constraint and the widget tree.
//!
//! - [`constraint`] - `Bounds` and `BoxConstraint` and their algebra
//! - [`orientation`] - main/cross axis mapping used by the flex container
//! - [`flex`] - the Row/Column container

pub mod constraint;
pub mod flex;
pub mod orientation;

pub use constraint::{Bounds, BoxConstraint};
pub use flex::{column, row, CrossAxisAlignment, Flex, MainAxisAlignment, Options};
pub use orientation::Orientation;
