use macroquad::prelude::*;

use crate::application::Session;
use crate::ui::{self, Button, CELL_SIZE};

/// Tracks the cell painted by the current drag so holding the button
/// over one cell does not flood the undo timeline
#[derive(Default)]
pub struct PaintState {
    last_cell: Option<(usize, usize)>,
}

/// Grid cell under the cursor, or `None` when the cursor is over the
/// panel or past the board
fn cell_under_cursor(session: &Session, mouse_pos: (f32, f32)) -> Option<(usize, usize)> {
    if mouse_pos.0 < 0.0 || mouse_pos.1 < 0.0 || mouse_pos.0 >= ui::canvas_width() {
        return None;
    }

    let row = (mouse_pos.1 / CELL_SIZE) as usize;
    let col = (mouse_pos.0 / CELL_SIZE) as usize;
    let (rows, cols) = session.engine.dimensions();
    (row < rows && col < cols).then_some((row, col))
}

/// Handle mouse painting on the board. Dragging places one cell per
/// board position crossed; each placement is its own undo step.
pub fn handle_mouse_paint(session: &mut Session, paint: &mut PaintState, mouse_pos: (f32, f32)) {
    if !is_mouse_button_down(MouseButton::Left) {
        paint.last_cell = None;
        return;
    }

    let Some((row, col)) = cell_under_cursor(session, mouse_pos) else {
        return;
    };
    if paint.last_cell == Some((row, col)) {
        return;
    }

    // coordinates are pre-validated above, so placement cannot fail
    if session.place_cell(row, col).is_ok() {
        paint.last_cell = Some((row, col));
    }
}

/// Process keyboard shortcuts functionally
pub fn process_keyboard_input(session: Session) -> Session {
    type KeyAction = (KeyCode, fn(Session) -> Session);

    let actions: [KeyAction; 5] = [
        (KeyCode::Space, Session::toggle_running),
        (KeyCode::C, Session::clear),
        (KeyCode::R, Session::reset_to_initial),
        (KeyCode::Z, Session::undo),
        (KeyCode::Y, Session::redo),
    ];

    actions.iter().fold(session, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    })
}

/// Process button clicks functionally
pub fn process_button_clicks(
    session: Session,
    buttons: &[Button],
    mouse_pos: (f32, f32),
) -> Session {
    buttons.iter().enumerate().fold(session, |s, (idx, btn)| {
        if !btn.is_clicked(mouse_pos) {
            return s;
        }
        match idx {
            ui::BTN_START => s.start(),
            ui::BTN_STOP => s.stop(),
            ui::BTN_RESET => s.reset_to_initial(),
            ui::BTN_CLEAR => s.clear(),
            ui::BTN_UNDO => s.undo(),
            ui::BTN_REDO => s.redo(),
            _ => s,
        }
    })
}
