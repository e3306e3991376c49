use macroquad::prelude::*;

/// Panel button with hover, selected and disabled looks
#[derive(Clone)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    text: String,
    color: Color,
    hover_color: Color,
    active: bool,
    enabled: bool,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            width,
            height,
            text: text.into(),
            color: Color::from_rgba(70, 70, 80, 255),
            hover_color: Color::from_rgba(95, 95, 110, 255),
            active: false,
            enabled: true,
        }
    }

    /// Highlight as the current selection, in `color`
    pub fn active(mut self, active: bool, color: Color) -> Self {
        self.active = active;
        if active {
            self.color = color;
            self.hover_color = color;
        }
        self
    }

    /// Use a custom base color
    pub fn fill(mut self, color: Color) -> Self {
        self.color = color;
        self.hover_color = Color::new(
            (color.r + 0.1).min(1.0),
            (color.g + 0.1).min(1.0),
            (color.b + 0.1).min(1.0),
            color.a,
        );
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Check if mouse is hovering over button
    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + self.height
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let (fill, text_color) = if !self.enabled {
            (Color::from_rgba(45, 45, 50, 255), Color::from_rgba(110, 110, 110, 255))
        } else if self.is_hovered(mouse_pos) && !self.active {
            (self.hover_color, WHITE)
        } else {
            (self.color, WHITE)
        };

        draw_rectangle(self.x, self.y, self.width, self.height, fill);
        let border = if self.active { 3.0 } else { 1.0 };
        draw_rectangle_lines(self.x, self.y, self.width, self.height, border, Color::from_rgba(200, 200, 210, 255));

        let text_size = measure_text(&self.text, None, 16, 1.0);
        draw_text(
            &self.text,
            self.x + (self.width - text_size.width) / 2.0,
            self.y + (self.height + text_size.height) / 2.0,
            16.0,
            text_color,
        );
    }

    /// Check if button was clicked this frame; disabled buttons never are
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.enabled && self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}
