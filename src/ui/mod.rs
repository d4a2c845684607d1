mod button;
mod slider;

pub use button::Button;
pub use slider::Slider;

use macroquad::prelude::{screen_height, screen_width};

use crate::application::Session;

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
pub const CELL_SIZE: f32 = 10.0;
/// Y position of the speed slider in the panel
pub const SLIDER_Y: f32 = 340.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the canvas area
pub fn canvas_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the height of the canvas area
pub fn canvas_height() -> f32 {
    screen_height()
}

/// Button slots in panel order; `process_button_clicks` matches on
/// these indices
pub const BTN_START: usize = 0;
pub const BTN_STOP: usize = 1;
pub const BTN_RESET: usize = 2;
pub const BTN_CLEAR: usize = 3;
pub const BTN_UNDO: usize = 4;
pub const BTN_REDO: usize = 5;

/// Create the control buttons for the current frame. Buttons that
/// cannot act in the session's current state are disabled.
pub fn create_buttons(session: &Session) -> Vec<Button> {
    let px = panel_x();
    let labels = ["Start", "Stop", "Reset", "Clear", "Undo", "Redo"];
    let enabled = [
        !session.running,
        session.running,
        true,
        true,
        session.engine.can_undo(),
        session.engine.can_redo(),
    ];

    labels
        .iter()
        .zip(enabled)
        .enumerate()
        .map(|(i, (label, enabled))| {
            Button::new(px, 20.0 + i as f32 * 50.0, PANEL_WIDTH, BUTTON_HEIGHT, *label)
                .with_enabled(enabled)
        })
        .collect()
}
