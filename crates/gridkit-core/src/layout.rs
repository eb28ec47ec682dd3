//! Column layout manager: width, order, and visibility, independent of
//! row data.

use crate::column::{ColumnSpec, FixedSide, MIN_COLUMN_WIDTH};
use crate::events::ColumnsChanged;

/// Resize gesture state machine.
///
/// `Idle → Capturing{start_x, start_width} → Idle`; every capture has a
/// guaranteed exit through [`ColumnLayout::end_resize`] or
/// [`ColumnLayout::cancel_resize`], so no gesture outlives its release.
#[derive(Debug, Clone, PartialEq, Default)]
enum ResizeGesture {
    #[default]
    Idle,
    Capturing {
        column_id: String,
        start_x: f32,
        start_width: f32,
    },
}

/// Tracks per-column width, order, and visibility.
///
/// Hidden columns keep their descriptor and position in the ordered list;
/// re-showing restores them where they were. Fixed columns form stable
/// left and right edges while unfixed columns reorder freely between them.
#[derive(Debug, Clone, Default)]
pub struct ColumnLayout {
    columns: Vec<ColumnSpec>,
    gesture: ResizeGesture,
}

impl ColumnLayout {
    /// Create a layout over the given column set.
    #[must_use]
    pub fn new(columns: Vec<ColumnSpec>) -> Self {
        Self {
            columns,
            gesture: ResizeGesture::Idle,
        }
    }

    /// All descriptors in storage order, hidden included.
    #[must_use]
    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    /// Visible descriptors in display order: left-fixed block, unfixed
    /// block, right-fixed block. The partition is stable, so relative
    /// order within each block is preserved.
    #[must_use]
    pub fn display_columns(&self) -> Vec<ColumnSpec> {
        let visible = self.columns.iter().filter(|c| !c.hidden);
        let mut left = Vec::new();
        let mut middle = Vec::new();
        let mut right = Vec::new();
        for col in visible {
            match col.fixed {
                Some(FixedSide::Left) => left.push(col.clone()),
                Some(FixedSide::Right) => right.push(col.clone()),
                None => middle.push(col.clone()),
            }
        }
        left.extend(middle);
        left.extend(right);
        left
    }

    fn find(&self, column_id: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.id == column_id)
    }

    fn changed(&self) -> ColumnsChanged {
        ColumnsChanged {
            columns: self.columns.clone(),
        }
    }

    /// Flip a column's visibility. Returns the columns-changed
    /// notification, or `None` for unknown ids.
    pub fn toggle_visibility(&mut self, column_id: &str) -> Option<ColumnsChanged> {
        let idx = self.find(column_id)?;
        self.columns[idx].hidden = !self.columns[idx].hidden;
        tracing::debug!(column = column_id, hidden = self.columns[idx].hidden, "visibility toggled");
        Some(self.changed())
    }

    /// Move a column to a new position in the ordered list.
    ///
    /// Indices address the storage order. Fixed columns are stable edges:
    /// a move involving a fixed source or target is rejected.
    pub fn reorder(&mut self, from: usize, to: usize) -> Option<ColumnsChanged> {
        if from >= self.columns.len() || to >= self.columns.len() || from == to {
            return None;
        }
        if self.columns[from].fixed.is_some() || self.columns[to].fixed.is_some() {
            return None;
        }
        let col = self.columns.remove(from);
        self.columns.insert(to, col);
        tracing::debug!(from, to, "columns reordered");
        Some(self.changed())
    }

    /// Set a column's width directly, clamped to the minimum floor.
    pub fn set_width(&mut self, column_id: &str, width: f32) {
        if let Some(idx) = self.find(column_id) {
            if self.columns[idx].resizable {
                self.columns[idx].width = width.max(MIN_COLUMN_WIDTH);
            }
        }
    }

    /// Start a resize gesture, capturing the pointer position and the
    /// column's starting width. Ignored for unknown or non-resizable
    /// columns; a capture already in progress is cancelled first.
    pub fn begin_resize(&mut self, column_id: &str, pointer_x: f32) {
        self.cancel_resize();
        let Some(idx) = self.find(column_id) else {
            return;
        };
        if !self.columns[idx].resizable {
            return;
        }
        tracing::debug!(column = column_id, pointer_x, "resize capture");
        self.gesture = ResizeGesture::Capturing {
            column_id: column_id.to_string(),
            start_x: pointer_x,
            start_width: self.columns[idx].width,
        };
    }

    /// Propose a new width from the current pointer position. Widths are
    /// incremental from the captured starting width, never from the last
    /// proposal.
    pub fn resize_to(&mut self, pointer_x: f32) {
        let ResizeGesture::Capturing {
            column_id,
            start_x,
            start_width,
        } = self.gesture.clone()
        else {
            return;
        };
        if let Some(idx) = self.find(&column_id) {
            self.columns[idx].width = (start_width + (pointer_x - start_x)).max(MIN_COLUMN_WIDTH);
        }
    }

    /// Finish the gesture, leaving the column at its final width.
    pub fn end_resize(&mut self) {
        if self.gesture != ResizeGesture::Idle {
            tracing::debug!("resize released");
        }
        self.gesture = ResizeGesture::Idle;
    }

    /// Abort the gesture and restore the captured starting width.
    pub fn cancel_resize(&mut self) {
        if let ResizeGesture::Capturing {
            column_id,
            start_width,
            ..
        } = std::mem::take(&mut self.gesture)
        {
            if let Some(idx) = self.find(&column_id) {
                self.columns[idx].width = start_width;
            }
        }
    }

    /// Whether a resize capture is in progress.
    #[must_use]
    pub const fn is_resizing(&self) -> bool {
        matches!(self.gesture, ResizeGesture::Capturing { .. })
    }

    /// Current width of a column.
    #[must_use]
    pub fn width_of(&self, column_id: &str) -> Option<f32> {
        self.find(column_id).map(|idx| self.columns[idx].width)
    }
}
