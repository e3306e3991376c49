use macroquad::prelude::*;

use crate::application::{Gesture, RoomEditor, Viewport};
use crate::domain::{Coverage, Layer, Spot, SpotKind};
use crate::ui::{
    grid_area_height, grid_area_width, layer_color, panel_x, spot_color, Button, Dropdown, UiAction,
    PANEL_PADDING, PANEL_WIDTH,
};

const CANVAS_BACKGROUND: Color = Color::new(0.953, 0.957, 0.965, 1.0);
const GRID_LINE: Color = Color::new(0.898, 0.906, 0.922, 1.0);
const PREVIEW_OUTLINE: Color = Color::new(0.15, 0.15, 0.2, 0.9);

/// Secondary panel text
const TEXT_DIM: Color = Color::new(0.65, 0.65, 0.7, 1.0);

fn with_alpha(color: Color, alpha: f32) -> Color {
    Color { a: alpha, ..color }
}

/// Draw both layers: the active one solid, the other faint underneath
pub fn draw_room(editor: &RoomEditor, viewport: &Viewport) {
    let grid = editor.grid();
    let (cols, rows) = grid.dimensions();
    let (canvas_w, canvas_h) = viewport.canvas_size(cols, rows);
    let cell = viewport.cell_px;
    let area_w = grid_area_width();
    let area_h = grid_area_height();
    let active = editor.active_layer();
    let inactive = active.other();

    draw_rectangle(viewport.origin_x, viewport.origin_y, canvas_w, canvas_h, CANVAS_BACKGROUND);

    let (vis_cols, vis_rows) = viewport.visible_cells(cols, rows, (area_w, area_h));
    for y in vis_rows.clone() {
        for x in vis_cols.clone() {
            let Some(c) = grid.get(x, y) else { continue };
            let (sx, sy) = viewport.cell_to_screen(x, y);
            if c.get(active) {
                draw_rectangle(sx, sy, cell, cell, layer_color(active));
            } else if c.get(inactive) {
                draw_rectangle(sx, sy, cell, cell, with_alpha(layer_color(inactive), 0.2));
            }
        }
    }

    // Grid lines bounding the visible cells only
    let (left, top) = viewport.cell_to_screen(vis_cols.start, vis_rows.start);
    let (right, bottom) = viewport.cell_to_screen(vis_cols.end, vis_rows.end);
    for x in vis_cols.start..=vis_cols.end {
        let sx = viewport.origin_x + x as f32 * cell;
        draw_line(sx, top, sx, bottom, 1.0, GRID_LINE);
    }
    for y in vis_rows.start..=vis_rows.end {
        let sy = viewport.origin_y + y as f32 * cell;
        draw_line(left, sy, right, sy, 1.0, GRID_LINE);
    }

    draw_gesture_preview(editor.gesture(), viewport);
    for spot in editor.spots() {
        draw_spot(spot, active, viewport);
    }
}

/// Show what the drag in progress will do once released
fn draw_gesture_preview(gesture: &Gesture, viewport: &Viewport) {
    let cell = viewport.cell_px;
    match gesture {
        Gesture::Idle => {}
        Gesture::Stroke { layer, target, cells } => {
            let color = if *target {
                with_alpha(layer_color(*layer), 0.7)
            } else {
                with_alpha(CANVAS_BACKGROUND, 0.85)
            };
            for &(x, y) in cells {
                let (sx, sy) = viewport.cell_to_screen(x, y);
                draw_rectangle(sx, sy, cell, cell, color);
            }
        }
        Gesture::Rectangle { start, end, .. } => {
            let (x0, y0) = (start.0.min(end.0), start.1.min(end.1));
            let (x1, y1) = (start.0.max(end.0), start.1.max(end.1));
            let (sx, sy) = viewport.cell_to_screen(x0, y0);
            let w = (x1 - x0 + 1) as f32 * cell;
            let h = (y1 - y0 + 1) as f32 * cell;
            draw_dashed_rectangle(sx, sy, w, h, 2.0, PREVIEW_OUTLINE);
        }
    }
}

/// Rectangle outline drawn as 6px dashes with 4px gaps
fn draw_dashed_rectangle(x: f32, y: f32, w: f32, h: f32, thickness: f32, color: Color) {
    const DASH: f32 = 6.0;
    const GAP: f32 = 4.0;

    let dashed = |x0: f32, y0: f32, dx: f32, dy: f32, length: f32| {
        let mut t = 0.0;
        while t < length {
            let end = (t + DASH).min(length);
            draw_line(x0 + dx * t, y0 + dy * t, x0 + dx * end, y0 + dy * end, thickness, color);
            t += DASH + GAP;
        }
    };
    dashed(x, y, 1.0, 0.0, w);
    dashed(x, y + h, 1.0, 0.0, w);
    dashed(x, y, 0.0, 1.0, h);
    dashed(x + w, y, 0.0, 1.0, h);
}

/// Spots on the inactive layer are drawn faded
fn draw_spot(spot: &Spot, active: Layer, viewport: &Viewport) {
    let cell = viewport.cell_px;
    let (sx, sy) = viewport.cell_to_screen(spot.x, spot.y);
    let alpha = if spot.layer == active { 1.0 } else { 0.4 };
    let (cx, cy) = (sx + cell / 2.0, sy + cell / 2.0);

    draw_circle(cx, cy, cell * 0.45, with_alpha(spot_color(spot.kind), alpha));
    let glyph = match spot.kind {
        SpotKind::Food => "F",
        SpotKind::Toilet => "T",
        SpotKind::Favorite => "*",
    };
    let font_size = (cell * 0.8).max(8.0);
    let size = measure_text(glyph, None, font_size as u16, 1.0);
    draw_text(
        glyph,
        cx - size.width / 2.0,
        cy + size.height / 2.0,
        font_size,
        with_alpha(WHITE, alpha),
    );
}

/// Draw control panel background
fn draw_panel_background() {
    draw_rectangle(panel_x(), 0.0, PANEL_WIDTH, screen_height(), Color::from_rgba(30, 30, 34, 255));
}

/// Draw the side panel: room info, buttons, help and the mode dropdown
pub fn draw_panel(editor: &RoomEditor, buttons: &[(UiAction, Button)], dropdown: &Dropdown, mouse_pos: (f32, f32)) {
    draw_panel_background();
    let x = panel_x() + PANEL_PADDING;
    let (width_m, height_m) = editor.dimensions_m();
    let (cols, rows) = editor.grid().dimensions();

    let labels = [
        ("1 cell = 10cm".to_string(), 54.0, 13.0, TEXT_DIM),
        (format!("Width  {:.1} m", width_m), 88.0, 16.0, WHITE),
        (format!("Depth  {:.1} m", height_m), 118.0, 16.0, WHITE),
        (format!("{}x{} cells", cols, rows), 142.0, 13.0, TEXT_DIM),
        ("Layer".to_string(), 164.0, 14.0, TEXT_DIM),
        (format!("Painting: {}", editor.active_layer().name()), 218.0, 13.0, TEXT_DIM),
        ("Spots".to_string(), 324.0, 14.0, TEXT_DIM),
    ];
    for (text, y, size, color) in &labels {
        draw_text(text, x, *y, *size, *color);
    }

    if let Some(kind) = editor.pending_spot() {
        let (text, color) = if kind.allowed_on(editor.active_layer()) {
            (format!("Click a reachable cell for {}", kind.name()), TEXT_DIM)
        } else {
            ("Food and toilet go on the floor only".to_string(), Color::from_rgba(239, 68, 68, 255))
        };
        draw_text(&text, x, 380.0, 12.0, color);
    }

    buttons.iter().for_each(|(_, btn)| btn.draw(mouse_pos));

    draw_coverage(editor.grid().coverage(), x, 470.0);

    let help = [
        "Click name: rename",
        "Drag: paint / rectangle",
        "1/2: layer  P/R/Q/L: mode",
        "F/T/V: spot  Esc: cancel",
        "Ctrl+Z: undo  Ctrl+S: save",
        "Wheel: scroll",
    ];
    for (i, line) in help.iter().enumerate() {
        draw_text(line, x, 580.0 + i as f32 * 15.0, 12.0, TEXT_DIM);
    }

    draw_text(&format!("Undo steps: {}", editor.history_len()), x, screen_height() - 12.0, 12.0, TEXT_DIM);

    // Last, so an open menu sits on top of the buttons
    dropdown.draw(mouse_pos);
}

fn draw_coverage(coverage: Coverage, x: f32, y: f32) {
    let rows = [
        ("Floor", coverage.floor, layer_color(Layer::Floor)),
        ("Elevated", coverage.elevated, layer_color(Layer::Elevated)),
        ("Both", coverage.both, TEXT_DIM),
    ];
    draw_text("Reachable area", x, y, 14.0, TEXT_DIM);
    for (i, (label, cells, color)) in rows.iter().enumerate() {
        let text = format!("{:<9}{:.2} m2 ({})", label, Coverage::area_m2(*cells), cells);
        draw_text(&text, x, y + 18.0 + i as f32 * 16.0, 14.0, *color);
    }
}
