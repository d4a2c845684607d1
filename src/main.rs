use conway_sketch::{
    application::{MAX_SPEED, MIN_SPEED, Session},
    input::{self, PaintState},
    rendering,
    ui::{self, Slider},
};
use macroquad::prelude::*;

/// Default board dimensions
const GRID_ROWS: usize = 50;
const GRID_COLS: usize = 100;

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: (GRID_COLS as f32 * ui::CELL_SIZE + ui::PANEL_WIDTH) as i32,
        window_height: 640,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let mut session = Session::new(GRID_ROWS, GRID_COLS);
    let mut paint = PaintState::default();
    let mut speed_slider = Slider::new(
        ui::panel_x(),
        ui::SLIDER_Y,
        ui::PANEL_WIDTH,
        "Speed",
        MIN_SPEED,
        MAX_SPEED,
        session.speed,
    );

    loop {
        let mouse_pos = mouse_position();
        speed_slider.set_position(ui::panel_x(), ui::SLIDER_Y);

        // Buttons reflect the session state, so rebuild them each frame
        let buttons = ui::create_buttons(&session);

        session = input::process_button_clicks(session, &buttons, mouse_pos);
        if speed_slider.update(mouse_pos) {
            session = session.set_speed(speed_slider.value());
        }
        // A drag that started on the slider must not paint the board
        if !speed_slider.is_dragging() {
            input::handle_mouse_paint(&mut session, &mut paint, mouse_pos);
        }
        session = input::process_keyboard_input(session);

        session = session.tick(get_frame_time());

        clear_background(BLACK);
        rendering::draw_grid(session.engine.grid());
        rendering::draw_controls(&session, &buttons, &speed_slider, mouse_pos);

        next_frame().await;
    }
}
