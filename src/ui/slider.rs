use macroquad::prelude::*;

/// Horizontal slider UI component with a draggable knob
pub struct Slider {
    x: f32,
    y: f32,
    width: f32,
    min: f32,
    max: f32,
    value: f32,
    label: String,
    dragging: bool,
}

const TRACK_HEIGHT: f32 = 6.0;
const KNOB_RADIUS: f32 = 9.0;

impl Slider {
    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>, min: f32, max: f32, value: f32) -> Self {
        Self {
            x,
            y,
            width,
            min,
            max,
            value: value.clamp(min, max),
            label: label.into(),
            dragging: false,
        }
    }

    /// Get the current value
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Whether a drag started on this slider is still in progress
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Update position for responsive layout
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Knob center X for the current value
    fn knob_x(&self) -> f32 {
        let t = (self.value - self.min) / (self.max - self.min);
        self.x + t * self.width
    }

    /// Whether the mouse is over the track or knob
    fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x - KNOB_RADIUS
            && mouse_pos.0 <= self.x + self.width + KNOB_RADIUS
            && mouse_pos.1 >= self.y - KNOB_RADIUS
            && mouse_pos.1 <= self.y + TRACK_HEIGHT + KNOB_RADIUS
    }

    /// Handle dragging; returns true when the value changed this frame
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> bool {
        if is_mouse_button_pressed(MouseButton::Left) && self.is_hovered(mouse_pos) {
            self.dragging = true;
        }
        if !is_mouse_button_down(MouseButton::Left) {
            self.dragging = false;
        }
        if !self.dragging {
            return false;
        }

        let t = ((mouse_pos.0 - self.x) / self.width).clamp(0.0, 1.0);
        let new_value = self.min + t * (self.max - self.min);
        let changed = new_value != self.value;
        self.value = new_value;
        changed
    }

    /// Draw track, filled portion, knob, and label
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        draw_text(&self.label, self.x, self.y - 10.0, 14.0, GRAY);

        // track with the filled portion up to the knob
        draw_rectangle(
            self.x,
            self.y,
            self.width,
            TRACK_HEIGHT,
            Color::from_rgba(45, 45, 45, 255),
        );
        draw_rectangle(
            self.x,
            self.y,
            self.knob_x() - self.x,
            TRACK_HEIGHT,
            Color::from_rgba(70, 130, 180, 255),
        );

        let knob_color = if self.dragging || self.is_hovered(mouse_pos) {
            Color::from_rgba(100, 149, 237, 255)
        } else {
            WHITE
        };
        draw_circle(self.knob_x(), self.y + TRACK_HEIGHT / 2.0, KNOB_RADIUS, knob_color);
    }
}
