use std::path::Path;

use crate::domain::RoomLayout;
use crate::error::SaveError;
use super::RoomEditor;

/// Save the room: log the JSON payload and, when `export_path` is given,
/// write it there too. Handing the payload to a backend is left to the caller.
pub fn save_room(editor: &RoomEditor, export_path: Option<&Path>) -> Result<RoomLayout, SaveError> {
    let layout = editor.save();
    let json = layout.to_json()?;
    log::info!("saving room setup '{}':\n{}", layout.name, json);

    if let Some(path) = export_path {
        layout.export(path)?;
        log::info!("room setup written to {:?}", path);
    }
    Ok(layout)
}
