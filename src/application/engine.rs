use thiserror::Error;

use crate::domain::{Cell, EdgeRule, Grid, History};

/// Returned by [`Engine::place_cell`] for coordinates outside the board.
/// The driver pre-validates pointer input, so this is a defensive
/// backstop rather than the primary guard.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
#[error("cell ({row}, {col}) is outside the {rows}x{cols} board")]
pub struct InvalidCoordinate {
    pub row: usize,
    pub col: usize,
    pub rows: usize,
    pub cols: usize,
}

/// Engine owns the live board, the saved initial board, and the
/// undo/redo timeline. All operations are synchronous and run on the
/// caller's thread; there is no internal locking.
pub struct Engine {
    grid: Grid,
    initial_grid: Grid,
    history: History,
    edges: EdgeRule,
}

impl Engine {
    /// Create an engine with a zero-filled board of the given dimensions,
    /// clamped edges, and an unbounded undo timeline
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::with_edge_rule(rows, cols, EdgeRule::default())
    }

    /// Create an engine with an explicit edge policy
    pub fn with_edge_rule(rows: usize, cols: usize, edges: EdgeRule) -> Self {
        Self {
            grid: Grid::new(rows, cols),
            initial_grid: Grid::new(rows, cols),
            history: History::unbounded(),
            edges,
        }
    }

    /// Cap the undo timeline at `max_depth` snapshots (builder pattern)
    pub fn with_history_limit(mut self, max_depth: usize) -> Self {
        self.history = History::bounded(max_depth);
        self
    }

    /// Read-only view of the live board (for rendering)
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Board dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    /// The edge policy this engine steps with
    pub fn edge_rule(&self) -> EdgeRule {
        self.edges
    }

    /// Advance the board one generation. The new board replaces the old
    /// one wholesale; callers never observe a partially updated state.
    /// Stepping is not an edit and records nothing in the timeline.
    pub fn step(&mut self) {
        self.grid = self.grid.step(self.edges);
    }

    /// Turn the cell at (row, col) alive, snapshotting the previous
    /// board first. A snapshot is recorded even when the cell was
    /// already alive, so every placement is one undo step.
    pub fn place_cell(&mut self, row: usize, col: usize) -> Result<(), InvalidCoordinate> {
        let (rows, cols) = self.grid.dimensions();
        if row >= rows || col >= cols {
            return Err(InvalidCoordinate { row, col, rows, cols });
        }
        self.history.record(self.grid.clone());
        self.grid.set(row, col, Cell::Alive);
        Ok(())
    }

    /// Zero the board. The snapshot is taken after zeroing, so an undo
    /// following a clear restores the empty board rather than the
    /// pattern that was wiped.
    pub fn clear(&mut self) {
        let (rows, cols) = self.grid.dimensions();
        self.grid = Grid::new(rows, cols);
        self.history.record(self.grid.clone());
    }

    /// Remember the current board as the point to reset to
    pub fn save_initial_state(&mut self) {
        self.initial_grid = self.grid.clone();
    }

    /// Bring back the remembered board. Not an edit: the undo/redo
    /// timeline is untouched, so a reset cannot itself be undone.
    pub fn restore_initial_state(&mut self) {
        self.grid = self.initial_grid.clone();
    }

    /// Step back to the previous recorded board; no-op when the
    /// timeline is empty
    pub fn undo(&mut self) {
        if let Some(restored) = self.history.undo(&self.grid) {
            self.grid = restored;
        }
    }

    /// Replay the most recently undone board; no-op when there is
    /// nothing to redo
    pub fn redo(&mut self) {
        if let Some(restored) = self.history.redo(&self.grid) {
            self.grid = restored;
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Number of snapshots currently available to undo
    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_then_undo_then_redo() {
        let mut engine = Engine::new(5, 5);
        engine.place_cell(2, 3).unwrap();
        assert_eq!(engine.grid().get(2, 3), Some(Cell::Alive));

        engine.undo();
        assert_eq!(engine.grid().live_cells(), 0);

        engine.redo();
        assert_eq!(engine.grid().get(2, 3), Some(Cell::Alive));
        assert_eq!(engine.grid().live_cells(), 1);
    }

    #[test]
    fn test_undo_with_empty_history_is_noop() {
        let mut engine = Engine::new(5, 5);
        engine.undo();
        assert_eq!(engine.grid().live_cells(), 0);
        assert!(!engine.can_redo());
    }

    #[test]
    fn test_new_placement_discards_redo_branch() {
        let mut engine = Engine::new(5, 5);
        engine.place_cell(0, 0).unwrap();
        engine.undo();
        assert!(engine.can_redo());

        engine.place_cell(1, 1).unwrap();
        assert!(!engine.can_redo());
    }

    #[test]
    fn test_placing_an_alive_cell_still_records_a_snapshot() {
        let mut engine = Engine::new(5, 5);
        engine.place_cell(2, 2).unwrap();
        engine.place_cell(2, 2).unwrap();
        assert_eq!(engine.undo_depth(), 2);

        // both undo steps land on boards with the placement history
        engine.undo();
        assert_eq!(engine.grid().get(2, 2), Some(Cell::Alive));
        engine.undo();
        assert_eq!(engine.grid().live_cells(), 0);
    }

    #[test]
    fn test_place_out_of_range_fails_and_mutates_nothing() {
        let mut engine = Engine::new(5, 5);
        let err = engine.place_cell(5, 0).unwrap_err();
        assert_eq!(
            err,
            InvalidCoordinate {
                row: 5,
                col: 0,
                rows: 5,
                cols: 5
            }
        );
        assert_eq!(engine.grid().live_cells(), 0);
        assert!(!engine.can_undo());
    }

    #[test]
    fn test_undo_after_clear_restores_the_cleared_board() {
        let mut engine = Engine::new(5, 5);
        engine.place_cell(1, 1).unwrap();
        engine.clear();
        assert_eq!(engine.grid().live_cells(), 0);

        // the snapshot recorded by clear is the post-clear board
        engine.undo();
        assert_eq!(engine.grid().live_cells(), 0);

        // one more undo walks back to before the placement
        engine.undo();
        assert_eq!(engine.grid().live_cells(), 0);
    }

    #[test]
    fn test_restore_initial_state_after_stepping() {
        let mut engine = Engine::new(5, 5);
        // horizontal blinker
        engine.place_cell(2, 1).unwrap();
        engine.place_cell(2, 2).unwrap();
        engine.place_cell(2, 3).unwrap();
        engine.save_initial_state();
        let saved = engine.grid().clone();

        engine.step();
        engine.step();
        engine.step();
        assert_ne!(engine.grid(), &saved);

        engine.restore_initial_state();
        assert_eq!(engine.grid(), &saved);
    }

    #[test]
    fn test_restore_initial_state_is_not_undoable() {
        let mut engine = Engine::new(5, 5);
        engine.save_initial_state();
        engine.restore_initial_state();
        assert!(!engine.can_undo());
        assert!(!engine.can_redo());
    }

    #[test]
    fn test_blinker_oscillates_through_the_engine() {
        let mut engine = Engine::new(5, 5);
        engine.place_cell(2, 1).unwrap();
        engine.place_cell(2, 2).unwrap();
        engine.place_cell(2, 3).unwrap();
        let horizontal = engine.grid().clone();

        engine.step();
        assert_eq!(engine.grid().get(1, 2), Some(Cell::Alive));
        assert_eq!(engine.grid().get(2, 2), Some(Cell::Alive));
        assert_eq!(engine.grid().get(3, 2), Some(Cell::Alive));
        assert_eq!(engine.grid().live_cells(), 3);

        engine.step();
        assert_eq!(engine.grid(), &horizontal);
    }

    #[test]
    fn test_history_limit_caps_undo_depth() {
        let mut engine = Engine::new(5, 5).with_history_limit(3);
        for col in 0..5 {
            engine.place_cell(0, col).unwrap();
        }
        assert_eq!(engine.undo_depth(), 3);
    }
}
