use macroquad::prelude::*;

use crate::application::Session;
use crate::domain::Grid;
use crate::ui::{Button, CELL_SIZE, PANEL_WIDTH, Slider, panel_x};

/// Draw the board: live cells, faint dead-cell background, grid lines
pub fn draw_grid(grid: &Grid) {
    let alive_color = Color::from_rgba(0, 255, 150, 255);
    let grid_line_color = Color::from_rgba(40, 40, 40, 255);
    let dead_cell_color = Color::from_rgba(15, 15, 15, 255);

    for (row, col, cell) in grid.iter_cells() {
        let x = col as f32 * CELL_SIZE;
        let y = row as f32 * CELL_SIZE;

        let fill = if cell.is_alive() { alive_color } else { dead_cell_color };
        draw_rectangle(x, y, CELL_SIZE, CELL_SIZE, fill);
        draw_rectangle_lines(x, y, CELL_SIZE, CELL_SIZE, 1.0, grid_line_color);
    }
}

/// Draw control panel background
fn draw_panel_background() {
    draw_rectangle(
        panel_x(),
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255),
    );
}

/// Helper to draw text labels
fn draw_text_label(text: &str, x: f32, y: f32, size: f32, color: Color) {
    draw_text(text, x, y, size, color);
}

/// Draw the control panel with buttons, the speed slider, and status
pub fn draw_controls(
    session: &Session,
    buttons: &[Button],
    speed_slider: &Slider,
    mouse_pos: (f32, f32),
) {
    draw_panel_background();

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));
    speed_slider.draw(mouse_pos);

    let px = panel_x();

    // Controls help - below the slider
    let controls = [
        ("Controls:", px, 390.0, 14.0, WHITE),
        ("LMB drag: Draw", px, 405.0, 12.0, GRAY),
        ("Space: Start/Stop", px, 418.0, 12.0, GRAY),
        ("C: Clear  R: Reset", px, 431.0, 12.0, GRAY),
        ("Z: Undo  Y: Redo", px, 444.0, 12.0, GRAY),
    ];

    controls.iter().for_each(|(text, x, y, size, color)| {
        draw_text_label(text, *x, *y, *size, *color);
    });

    // Define all status labels declaratively
    let (rows, cols) = session.engine.dimensions();
    let labels = [
        (format!("Speed: {:.0} steps/s", session.speed), px, 470.0, 14.0, WHITE),
        (format!("Board: {}x{}", rows, cols), px, 488.0, 12.0, GRAY),
        (format!("Alive: {}", session.engine.grid().live_cells()), px, 503.0, 12.0, GRAY),
        (format!("Undo depth: {}", session.engine.undo_depth()), px, 518.0, 12.0, GRAY),
        ("Generation:".to_string(), px, 545.0, 16.0, WHITE),
        (
            format!("{}", session.generation),
            px,
            565.0,
            20.0,
            Color::from_rgba(0, 255, 150, 255),
        ),
    ];

    labels.iter().for_each(|(text, x, y, size, color)| {
        draw_text_label(text, *x, *y, *size, *color);
    });

    // Status line
    draw_text_label("Status:", px, 595.0, 16.0, WHITE);
    let (status, status_color) = if session.running {
        ("Running", Color::from_rgba(0, 255, 0, 255))
    } else {
        ("Paused", Color::from_rgba(255, 165, 0, 255))
    };
    draw_text_label(status, px, 615.0, 16.0, status_color);
}
