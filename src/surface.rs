//! Surfaces: the output of a draw call.
//!
//! A [`Surface`] is a sized snapshot. It may carry its own cells (row-major,
//! one per grid position) and owns an ordered list of positioned child
//! surfaces. An empty buffer means the surface paints nothing itself.

use crate::types::{Cell, Point, Size};

/// A child surface placed at an offset inside its parent.
#[derive(Debug, Clone, PartialEq)]
pub struct SubSurface {
    pub origin: Point,
    pub surface: Surface,
}

/// Sized, positioned output of a single widget's draw.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Surface {
    pub size: Size,
    pub buffer: Vec<Cell>,
    pub children: Vec<SubSurface>,
}

impl Surface {
    /// Create a transparent surface of the given size.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            buffer: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create a surface painted uniformly with `cell`.
    pub fn filled(size: Size, cell: Cell) -> Self {
        let mut surface = Self::new(size);
        surface.fill(cell);
        surface
    }

    /// Paint every cell of this surface with `cell`.
    pub fn fill(&mut self, cell: Cell) {
        self.buffer.clear();
        self.buffer.resize(self.size.area(), cell);
    }

    /// Get the cell this surface paints at (col, row), if any.
    pub fn cell(&self, col: u16, row: u16) -> Option<Cell> {
        self.index(col, row)
            .and_then(|idx| self.buffer.get(idx).copied())
    }

    /// Write a single cell. Writes outside the surface are ignored.
    ///
    /// The first write into a transparent surface allocates a blank buffer.
    pub fn set_cell(&mut self, col: u16, row: u16, cell: Cell) {
        let Some(idx) = self.index(col, row) else {
            return;
        };
        if self.buffer.is_empty() {
            self.buffer.resize(self.size.area(), Cell::default());
        }
        self.buffer[idx] = cell;
    }

    /// Append a child surface at `origin`.
    pub fn add_child(&mut self, origin: Point, surface: Surface) {
        self.children.push(SubSurface { origin, surface });
    }

    #[inline]
    fn index(&self, col: u16, row: u16) -> Option<usize> {
        if col >= self.size.width || row >= self.size.height {
            return None;
        }
        Some(row as usize * self.size.width as usize + col as usize)
    }
}
