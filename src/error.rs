//! Draw errors.
//!
//! The layout engine never produces errors of its own. Every error originates
//! in some widget's `draw` and is handed back to the caller unchanged.

use crate::layout::Orientation;
use crate::surface::Surface;

/// Result of a draw call.
pub type DrawResult<T = Surface> = Result<T, DrawError>;

/// Failure reported by a widget's `draw`.
#[derive(thiserror::Error, Debug)]
pub enum DrawError {
    /// The widget could not draw itself.
    #[error("widget draw failed: {0}")]
    Widget(String),

    /// A widget that always fills its box was given an unbounded axis.
    #[error("{widget} cannot be drawn with an unbounded {axis} axis")]
    Unbounded {
        widget: &'static str,
        axis: Orientation,
    },

    /// Wrapped error from host code.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DrawError {
    /// Build a [`DrawError::Widget`] value.
    pub fn widget(msg: impl Into<String>) -> Self {
        Self::Widget(msg.into())
    }

    /// Build a [`DrawError::Unbounded`] value.
    pub fn unbounded(widget: &'static str, axis: Orientation) -> Self {
        Self::Unbounded { widget, axis }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            DrawError::widget("boom").to_string(),
            "widget draw failed: boom"
        );
        assert_eq!(
            DrawError::unbounded("fill", Orientation::Horizontal).to_string(),
            "fill cannot be drawn with an unbounded horizontal axis"
        );
    }

    #[test]
    fn test_anyhow_is_transparent() {
        let err: DrawError = anyhow::anyhow!("terminal went away").into();
        assert!(matches!(err, DrawError::Other(_)));
        assert_eq!(err.to_string(), "terminal went away");
    }
}
