use macroquad::prelude::*;

const ROW_HEIGHT: f32 = 28.0;
const FONT_SIZE: f32 = 16.0;

/// Dropdown selector for the paint mode
#[derive(Clone)]
pub struct Dropdown {
    x: f32,
    y: f32,
    width: f32,
    items: Vec<String>,
    selected: usize,
    is_open: bool,
    label: String,
}

/// Where the pointer is relative to an open or closed dropdown
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Hit {
    Header,
    Item(usize),
    Outside,
}

impl Dropdown {
    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            x,
            y,
            width,
            items,
            selected: 0,
            is_open: false,
            label: label.into(),
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Select an index; out-of-range indexes are ignored
    pub fn set_selected(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected = index;
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Update position for responsive layout
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    fn hit(&self, mouse_pos: (f32, f32)) -> Hit {
        let (mx, my) = mouse_pos;
        if mx < self.x || mx > self.x + self.width || my < self.y {
            return Hit::Outside;
        }
        let row = ((my - self.y) / ROW_HEIGHT) as usize;
        match row {
            0 => Hit::Header,
            n if self.is_open && n <= self.items.len() => Hit::Item(n - 1),
            _ => Hit::Outside,
        }
    }

    /// Handle a click. Returns true if the selection changed.
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> bool {
        if !is_mouse_button_pressed(MouseButton::Left) {
            return false;
        }
        match self.hit(mouse_pos) {
            Hit::Header => {
                self.is_open = !self.is_open;
                false
            }
            Hit::Item(i) => {
                self.is_open = false;
                let changed = self.selected != i;
                self.selected = i;
                changed
            }
            Hit::Outside => {
                self.is_open = false;
                false
            }
        }
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        draw_text(&self.label, self.x, self.y - 5.0, 14.0, GRAY);

        let hit = self.hit(mouse_pos);
        let header_color = if hit == Hit::Header {
            Color::from_rgba(95, 95, 110, 255)
        } else {
            Color::from_rgba(70, 70, 80, 255)
        };
        draw_rectangle(self.x, self.y, self.width, ROW_HEIGHT, header_color);
        draw_rectangle_lines(self.x, self.y, self.width, ROW_HEIGHT, 1.0, WHITE);
        let text = fit_text(&self.items[self.selected], self.width - 30.0);
        draw_text(&text, self.x + 5.0, self.y + 19.0, FONT_SIZE, WHITE);
        draw_text(if self.is_open { "^" } else { "v" }, self.x + self.width - 16.0, self.y + 19.0, FONT_SIZE, WHITE);

        if !self.is_open {
            return;
        }
        let menu_y = self.y + ROW_HEIGHT;
        let menu_height = self.items.len() as f32 * ROW_HEIGHT;
        draw_rectangle(self.x, menu_y, self.width, menu_height, Color::from_rgba(30, 30, 30, 255));

        for (i, item) in self.items.iter().enumerate() {
            let item_y = menu_y + i as f32 * ROW_HEIGHT;
            let item_color = if hit == Hit::Item(i) {
                Color::from_rgba(100, 149, 237, 255)
            } else if i == self.selected {
                Color::from_rgba(50, 100, 150, 255)
            } else {
                Color::from_rgba(45, 45, 45, 255)
            };
            draw_rectangle(self.x, item_y, self.width, ROW_HEIGHT, item_color);
            draw_text(&fit_text(item, self.width - 10.0), self.x + 5.0, item_y + 19.0, FONT_SIZE, WHITE);
        }
        draw_rectangle_lines(self.x, menu_y, self.width, menu_height, 2.0, WHITE);
    }
}

/// Truncate with an ellipsis so the text fits in `max_width` pixels
fn fit_text(text: &str, max_width: f32) -> String {
    let width = |s: &str| measure_text(s, None, FONT_SIZE as u16, 1.0).width;
    if width(text) <= max_width {
        return text.to_string();
    }
    let mut truncated = text.to_string();
    while !truncated.is_empty() && width(&format!("{truncated}...")) > max_width {
        truncated.pop();
    }
    format!("{truncated}...")
}
