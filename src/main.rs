use macroquad::prelude::*;
use room_setup::{
    application::save_room,
    input, rendering,
    ui::{self, CANVAS_MARGIN},
    EditorConfig, PaintMode, RoomEditor, Viewport,
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Room Setup - Cat Reachability".to_owned(),
        window_width: 1100,
        window_height: 720,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let config = EditorConfig::load_or_default();
    log::info!(
        "editing '{}' ({:.1} m x {:.1} m)",
        config.room_name,
        config.room_width_m,
        config.room_height_m
    );

    let mut editor = RoomEditor::new(
        config.room_name.clone(),
        config.room_width_m,
        config.room_height_m,
        config.history_limit,
    );
    let mut viewport = Viewport::new(CANVAS_MARGIN, CANVAS_MARGIN, config.cell_pixels);
    let mut mode_dropdown = ui::create_mode_dropdown(&editor);

    loop {
        let mouse_pos = mouse_position();

        mode_dropdown.set_position(ui::panel_x() + ui::PANEL_PADDING, ui::MODE_DROPDOWN_Y);
        mode_dropdown.set_selected(ui::mode_index(editor.paint_mode()));

        // An open menu swallows the click that closes it
        let menu_was_open = mode_dropdown.is_open();
        if mode_dropdown.update(mouse_pos) {
            let modes = PaintMode::all();
            if let Some(&mode) = modes.get(mode_dropdown.selected()) {
                editor.select_paint_mode(mode);
            }
        }
        let blocked = menu_was_open || mode_dropdown.is_open();

        let buttons = ui::create_buttons(&editor);
        input::finish_name_on_click_away(&mut editor, &buttons, mouse_pos);
        let mut save_requested = false;
        if !blocked {
            save_requested |= input::process_button_clicks(&mut editor, &config, &buttons, mouse_pos);
        }
        save_requested |= input::process_keyboard_input(&mut editor, &config);
        input::handle_scroll(&mut viewport, &editor);
        input::handle_canvas_pointer(&mut editor, &viewport, mouse_pos, blocked);

        if save_requested {
            if let Err(e) = save_room(&editor, config.export_path.as_deref()) {
                log::error!("{}", e);
            }
        }

        clear_background(Color::from_rgba(22, 22, 26, 255));
        rendering::draw_room(&editor, &viewport);
        let buttons = ui::create_buttons(&editor);
        rendering::draw_panel(&editor, &buttons, &mode_dropdown, mouse_pos);

        next_frame().await;
    }
}
