use std::collections::VecDeque;

use super::Grid;

/// Undo/redo timeline of board snapshots.
///
/// Every snapshot stored here is an independent copy of the board, so
/// later edits to the live grid can never corrupt recorded states.
/// Recording a new snapshot discards any pending redo branch.
pub struct History {
    undo_stack: VecDeque<Grid>,
    redo_stack: Vec<Grid>,
    /// Maximum number of undoable snapshots; `None` keeps everything
    max_depth: Option<usize>,
}

impl History {
    /// History that keeps every snapshot for the lifetime of the session
    pub fn unbounded() -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            max_depth: None,
        }
    }

    /// History that keeps at most `max_depth` snapshots, evicting the
    /// oldest one when the limit is reached
    pub fn bounded(max_depth: usize) -> Self {
        Self {
            undo_stack: VecDeque::with_capacity(max_depth),
            redo_stack: Vec::new(),
            max_depth: Some(max_depth),
        }
    }

    /// Record a snapshot taken around a new edit. Any redo branch is
    /// discarded: once the timeline diverges it cannot be replayed.
    pub fn record(&mut self, snapshot: Grid) {
        if let Some(limit) = self.max_depth {
            while self.undo_stack.len() >= limit.max(1) {
                self.undo_stack.pop_front();
            }
        }
        self.undo_stack.push_back(snapshot);
        self.redo_stack.clear();
    }

    /// Step back one snapshot. The caller passes the live grid, which is
    /// parked on the redo stack; returns the grid to restore, or `None`
    /// when there is nothing to undo.
    pub fn undo(&mut self, current: &Grid) -> Option<Grid> {
        let restored = self.undo_stack.pop_back()?;
        self.redo_stack.push(current.clone());
        Some(restored)
    }

    /// Step forward again after an undo. The live grid is parked back on
    /// the undo stack; returns the grid to restore, or `None` when there
    /// is nothing to redo.
    pub fn redo(&mut self, current: &Grid) -> Option<Grid> {
        let restored = self.redo_stack.pop()?;
        self.undo_stack.push_back(current.clone());
        Some(restored)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of snapshots currently available to undo
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }
}
