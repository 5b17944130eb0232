//! Row emission across a bounded table region
//!
//! The cursor carries the running row index and y-coordinate for one table
//! region. Rows past the bottom bound are skippable, not an error: the
//! caller keeps iterating its data and simply draws nothing. A marker row
//! (section divider between two row blocks sharing the region) consumes a
//! slot like any other row and is dropped the same way once it no longer
//! fits; earlier rows are never reflowed to make room for it.

use crate::layout::TableLayout;

/// Cursor over the row slots of a table region
#[derive(Debug, Clone)]
pub struct RowCursor {
    layout: TableLayout,
    index: usize,
}

impl RowCursor {
    pub fn new(layout: TableLayout) -> Self {
        Self { layout, index: 0 }
    }

    /// Claim the next row slot. Returns the row's baseline y, or `None`
    /// once the slot falls below the region's bottom bound. The slot is
    /// consumed either way.
    pub fn next_row(&mut self) -> Option<f64> {
        let y = self.layout.row_y(self.index);
        self.index += 1;
        if y < self.layout.bottom_y {
            None
        } else {
            Some(y)
        }
    }

    /// Rows claimed so far, including skipped ones
    pub fn rows_consumed(&self) -> usize {
        self.index
    }
}
