use crate::domain::{
    cells_for_meters, room_meters, CellPos, Grid, Layer, RoomLayout, Spot, SpotKind,
};
use super::gesture::{Gesture, PaintMode};
use super::history::{History, Snapshot};

/// RoomEditor owns one room's editing session.
/// Every operation is synchronous and infallible: input that cannot apply
/// (no cell under the pointer, a disallowed spot, undo with nothing to undo)
/// is ignored.
pub struct RoomEditor {
    name: String,
    width_m: f64,
    height_m: f64,
    grid: Grid,
    spots: Vec<Spot>,
    history: History,
    layer: Layer,
    mode: PaintMode,
    /// Spot kind armed for the next click (None = painting)
    pending_spot: Option<SpotKind>,
    gesture: Gesture,
    /// Name being typed, while the name field is open
    name_draft: Option<String>,
}

impl RoomEditor {
    /// Create an empty room of the given size in meters.
    /// Unusable sizes (negative, NaN, infinite) become 0 m.
    pub fn new(name: impl Into<String>, width_m: f64, height_m: f64, history_limit: usize) -> Self {
        let width_m = room_meters(width_m).unwrap_or(0.0);
        let height_m = room_meters(height_m).unwrap_or(0.0);
        Self {
            name: name.into(),
            width_m,
            height_m,
            grid: Grid::new(cells_for_meters(width_m), cells_for_meters(height_m)),
            spots: Vec::new(),
            history: History::new(history_limit),
            layer: Layer::default(),
            mode: PaintMode::default(),
            pending_spot: None,
            gesture: Gesture::Idle,
            name_draft: None,
        }
    }

    /// Rebuild an editor from a saved payload.
    /// Grid size follows the stored dimensions; missing cells are unset and
    /// spots outside the grid are dropped.
    pub fn from_layout(layout: &RoomLayout, history_limit: usize) -> Self {
        let mut editor = Self::new(layout.name.clone(), layout.width, layout.height, history_limit);
        let (cols, rows) = editor.grid.dimensions();
        editor.grid = Grid::from_rows(&layout.grid, cols, rows);
        editor.spots = layout.spots.iter().copied().filter(|spot| spot.fits(cols, rows)).collect();
        editor
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Room size in meters as (width, height)
    pub fn dimensions_m(&self) -> (f64, f64) {
        (self.width_m, self.height_m)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn spots(&self) -> &[Spot] {
        &self.spots
    }

    pub fn active_layer(&self) -> Layer {
        self.layer
    }

    pub fn paint_mode(&self) -> PaintMode {
        self.mode
    }

    pub fn pending_spot(&self) -> Option<SpotKind> {
        self.pending_spot
    }

    /// Drag in progress, for previews
    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Text in the open name field, if it is open
    pub fn name_draft(&self) -> Option<&str> {
        self.name_draft.as_deref()
    }

    pub fn is_renaming(&self) -> bool {
        self.name_draft.is_some()
    }

    /// Open the name field, prefilled with the current name
    pub fn begin_rename(&mut self) {
        if self.name_draft.is_none() {
            self.name_draft = Some(self.name.clone());
        }
    }

    /// Type one character into the open name field
    pub fn push_name_char(&mut self, c: char) {
        if let Some(draft) = self.name_draft.as_mut().filter(|_| !c.is_control()) {
            draft.push(c);
        }
    }

    pub fn pop_name_char(&mut self) {
        if let Some(draft) = self.name_draft.as_mut() {
            draft.pop();
        }
    }

    /// Close the name field and apply it. A blank name keeps the old one.
    pub fn finish_rename(&mut self) {
        let Some(draft) = self.name_draft.take() else {
            return;
        };
        let trimmed = draft.trim();
        if trimmed.is_empty() {
            log::trace!("blank name ignored");
            return;
        }
        log::debug!("renamed '{}' to '{}'", self.name, trimmed);
        self.rename(trimmed);
    }

    /// Rebuild the grid for a new room size.
    /// Cells in the overlap keep their flags and spots now outside are dropped.
    /// Negative, NaN and infinite sizes are ignored; sizes past
    /// `MAX_ROOM_METERS` are capped.
    /// This is a structural reset, so it is not recorded in the undo history.
    pub fn set_room_dimensions(&mut self, width_m: f64, height_m: f64) {
        let (Some(width_m), Some(height_m)) = (room_meters(width_m), room_meters(height_m)) else {
            log::trace!("unusable room size {} x {} ignored", width_m, height_m);
            return;
        };
        let cols = cells_for_meters(width_m);
        let rows = cells_for_meters(height_m);
        self.width_m = width_m;
        self.height_m = height_m;
        self.gesture = Gesture::Idle;

        if self.grid.dimensions() == (cols, rows) {
            return;
        }
        self.grid = self.grid.resized(cols, rows);
        let before = self.spots.len();
        self.spots.retain(|spot| spot.fits(cols, rows));
        log::debug!(
            "resized '{}' to {}x{} cells, dropped {} spot(s)",
            self.name,
            cols,
            rows,
            before - self.spots.len()
        );
    }

    pub fn select_layer(&mut self, layer: Layer) {
        self.layer = layer;
    }

    pub fn select_paint_mode(&mut self, mode: PaintMode) {
        self.mode = mode;
    }

    /// Arm spot placement: the next pointer press on a cell tries to place `kind`
    pub fn place_spot(&mut self, kind: SpotKind) {
        self.pending_spot = Some(kind);
    }

    /// Arm `kind`, or disarm it if it is already armed
    pub fn toggle_spot(&mut self, kind: SpotKind) {
        self.pending_spot = if self.pending_spot == Some(kind) { None } else { Some(kind) };
    }

    pub fn cancel_spot(&mut self) {
        self.pending_spot = None;
    }

    /// Pointer pressed over `cell` (None when the pointer is off the grid)
    pub fn pointer_down(&mut self, cell: Option<CellPos>) {
        let Some((x, y)) = cell.filter(|&(x, y)| self.grid.contains(x, y)) else {
            log::trace!("pointer down outside the grid");
            return;
        };

        // A press without a release in between; finish the stale drag first
        self.commit_gesture();

        if let Some(kind) = self.pending_spot.take() {
            self.try_place_spot(kind, x, y);
            return;
        }

        let layer = self.layer;
        match self.mode {
            PaintMode::Paint => {
                let target = !self.grid.is_set(x, y, layer);
                self.gesture = Gesture::Stroke { layer, target, cells: vec![(x, y)] };
            }
            PaintMode::Rectangle => {
                let target = !self.grid.is_set(x, y, layer);
                self.gesture = Gesture::Rectangle { layer, target, start: (x, y), end: (x, y) };
            }
            PaintMode::Stamp(shape) => {
                let (cols, rows) = self.grid.dimensions();
                self.snapshot();
                for (sx, sy) in shape.cells_at((x, y), cols, rows) {
                    self.grid.set(sx, sy, layer, true);
                }
                log::debug!("stamped {} at ({}, {}) on {:?}", shape.name(), x, y, layer);
            }
        }
    }

    /// Pointer moved; off-grid positions keep the last known cell
    pub fn pointer_move(&mut self, cell: Option<CellPos>) {
        if let Some((x, y)) = cell.filter(|&(x, y)| self.grid.contains(x, y)) {
            self.gesture.extend((x, y));
        }
    }

    /// Pointer released: commit the drag in progress
    pub fn pointer_up(&mut self) {
        self.commit_gesture();
    }

    /// Pointer left the canvas mid-drag; handled like a release at the last cell
    pub fn pointer_leave(&mut self) {
        self.commit_gesture();
    }

    /// Restore the state before the most recent committed change
    pub fn undo(&mut self) {
        match self.history.pop() {
            Some(snapshot) => {
                self.gesture = Gesture::Idle;
                // A resize after the snapshot must not bring back out-of-room state
                let (cols, rows) = self.grid.dimensions();
                self.grid = if snapshot.grid.dimensions() == (cols, rows) {
                    snapshot.grid
                } else {
                    snapshot.grid.resized(cols, rows)
                };
                self.spots = snapshot.spots;
                self.spots.retain(|spot| spot.fits(cols, rows));
                log::debug!("undo, {} step(s) left", self.history.len());
            }
            None => log::trace!("undo with empty history"),
        }
    }

    /// Payload for the persistence boundary
    pub fn save(&self) -> RoomLayout {
        RoomLayout {
            name: self.name.clone(),
            width: self.width_m,
            height: self.height_m,
            grid: self.grid.to_rows(),
            spots: self.spots.clone(),
        }
    }

    fn snapshot(&mut self) {
        self.history.push(Snapshot {
            grid: self.grid.clone(),
            spots: self.spots.clone(),
        });
    }

    fn commit_gesture(&mut self) {
        match std::mem::take(&mut self.gesture) {
            Gesture::Idle => {}
            Gesture::Stroke { layer, target, cells } => {
                self.snapshot();
                for &(x, y) in &cells {
                    self.grid.set(x, y, layer, target);
                }
                log::debug!("stroke of {} cell(s) on {:?} -> {}", cells.len(), layer, target);
            }
            Gesture::Rectangle { layer, target, start, end } => {
                self.snapshot();
                self.grid.fill_rect(start, end, layer, target);
                log::debug!("rectangle {:?}..{:?} on {:?} -> {}", start, end, layer, target);
            }
        }
    }

    fn try_place_spot(&mut self, kind: SpotKind, x: usize, y: usize) {
        let layer = self.layer;
        if !kind.allowed_on(layer) {
            log::trace!("{} not allowed on {:?}", kind.name(), layer);
            return;
        }
        if !self.grid.is_set(x, y, layer) {
            log::trace!("({}, {}) is not reachable on {:?}", x, y, layer);
            return;
        }
        self.snapshot();
        self.spots.retain(|spot| !spot.occupies(x, y, layer));
        self.spots.push(Spot { x, y, kind, layer });
        log::debug!("placed {} at ({}, {}) on {:?}", kind.name(), x, y, layer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Cell, StampShape, MAX_ROOM_METERS, MAX_SIDE_CELLS};

    fn editor(cols: usize, rows: usize) -> RoomEditor {
        RoomEditor::new("Test", cols as f64 / 10.0, rows as f64 / 10.0, 100)
    }

    fn drag(editor: &mut RoomEditor, from: CellPos, to: CellPos) {
        editor.pointer_down(Some(from));
        editor.pointer_move(Some(to));
        editor.pointer_up();
    }

    fn set_cells(editor: &RoomEditor, layer: Layer) -> Vec<CellPos> {
        editor
            .grid()
            .iter_cells()
            .filter(|(_, _, cell)| cell.get(layer))
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    fn reachable_floor(cols: usize, rows: usize) -> RoomEditor {
        let mut editor = editor(cols, rows);
        editor.select_paint_mode(PaintMode::Rectangle);
        drag(&mut editor, (0, 0), (cols - 1, rows - 1));
        editor.select_paint_mode(PaintMode::Paint);
        editor
    }

    #[test]
    fn test_new_grid_matches_meters() {
        let editor = RoomEditor::new("Bedroom", 4.0, 3.0, 10);
        assert_eq!(editor.grid().dimensions(), (40, 30));
        assert_eq!(editor.name(), "Bedroom");
        assert!(!editor.can_undo());
    }

    #[test]
    fn test_resize_dimensions_follow_meters() {
        let mut editor = RoomEditor::new("Room", 4.0, 3.0, 10);
        for (w, h) in [(2.55, 1.0), (10.0, 9.99), (1.1, 7.3), (0.0, 0.0), (3.0, 3.0)] {
            editor.set_room_dimensions(w, h);
            assert_eq!(editor.grid().dimensions(), (cells_for_meters(w), cells_for_meters(h)));
            assert_eq!(editor.dimensions_m(), (w, h));
        }
    }

    #[test]
    fn test_resize_ignores_unusable_sizes() {
        let mut editor = RoomEditor::new("Room", 4.0, 3.0, 10);
        editor.pointer_down(Some((1, 1)));
        editor.pointer_up();
        let grid = editor.grid().clone();

        for (w, h) in [(f64::INFINITY, 1.0), (f64::NAN, 2.0), (2.0, f64::NEG_INFINITY), (-1.0, 2.0)] {
            editor.set_room_dimensions(w, h);
            assert_eq!(editor.grid(), &grid);
            assert_eq!(editor.dimensions_m(), (4.0, 3.0));
        }
        assert_eq!(editor.save().width, 4.0);
    }

    #[test]
    fn test_huge_sizes_are_capped() {
        let mut editor = editor(4, 4);
        editor.set_room_dimensions(1e12, 0.5);
        assert_eq!(editor.grid().dimensions(), (MAX_SIDE_CELLS, 5));
        assert_eq!(editor.dimensions_m(), (MAX_ROOM_METERS, 0.5));

        let restored = RoomEditor::new("Odd", f64::NAN, f64::INFINITY, 10);
        assert_eq!(restored.grid().dimensions(), (0, 0));
        assert_eq!(restored.dimensions_m(), (0.0, 0.0));
    }

    #[test]
    fn test_rename_through_name_field() {
        let mut editor = editor(4, 4);
        editor.push_name_char('x');
        assert_eq!(editor.name_draft(), None);

        editor.begin_rename();
        assert_eq!(editor.name_draft(), Some("Test"));
        for _ in 0..4 {
            editor.pop_name_char();
        }
        "Study\n".chars().for_each(|c| editor.push_name_char(c));
        assert_eq!(editor.name(), "Test");
        editor.finish_rename();
        assert_eq!(editor.name(), "Study");
        assert!(!editor.is_renaming());

        editor.begin_rename();
        (0..5).for_each(|_| editor.pop_name_char());
        editor.push_name_char(' ');
        editor.finish_rename();
        assert_eq!(editor.name(), "Study");
    }

    #[test]
    fn test_resize_keeps_overlapping_cells() {
        let mut editor = editor(8, 8);
        editor.select_paint_mode(PaintMode::Rectangle);
        drag(&mut editor, (1, 1), (6, 6));
        editor.select_layer(Layer::Elevated);
        drag(&mut editor, (2, 2), (3, 3));
        let before = editor.grid().clone();

        editor.set_room_dimensions(0.5, 1.2);
        let (cols, rows) = editor.grid().dimensions();
        assert_eq!((cols, rows), (5, 12));
        for y in 0..8.min(rows) {
            for x in 0..8.min(cols) {
                assert_eq!(editor.grid().get(x, y), before.get(x, y), "cell ({}, {})", x, y);
            }
        }
        assert_eq!(editor.grid().get(4, 10), Some(Cell::EMPTY));
    }

    #[test]
    fn test_resize_drops_spots_outside() {
        let mut editor = reachable_floor(10, 10);
        for (x, y) in [(2, 2), (8, 2), (2, 8), (9, 9)] {
            editor.place_spot(SpotKind::Favorite);
            editor.pointer_down(Some((x, y)));
        }
        assert_eq!(editor.spots().len(), 4);

        editor.set_room_dimensions(0.8, 0.8);
        let (cols, rows) = editor.grid().dimensions();
        assert!(editor.spots().iter().all(|s| s.x < cols && s.y < rows));
        assert_eq!(editor.spots().len(), 1);
    }

    #[test]
    fn test_resize_is_not_undoable() {
        let mut editor = editor(10, 10);
        editor.set_room_dimensions(2.0, 2.0);
        assert!(!editor.can_undo());
    }

    #[test]
    fn test_food_and_toilet_never_on_elevated() {
        let mut editor = editor(10, 10);
        editor.select_layer(Layer::Elevated);
        editor.select_paint_mode(PaintMode::Rectangle);
        drag(&mut editor, (0, 0), (9, 9));
        let grid = editor.grid().clone();
        let history = editor.history_len();

        for kind in [SpotKind::Food, SpotKind::Toilet] {
            editor.place_spot(kind);
            editor.pointer_down(Some((4, 4)));
            editor.pointer_up();
            assert!(editor.spots().is_empty());
            assert_eq!(editor.pending_spot(), None);
        }
        assert_eq!(editor.grid(), &grid);
        assert_eq!(editor.history_len(), history);
    }

    #[test]
    fn test_spot_needs_reachable_cell() {
        let mut editor = editor(10, 10);
        for kind in SpotKind::all() {
            editor.place_spot(kind);
            editor.pointer_down(Some((3, 3)));
            assert!(editor.spots().is_empty());
            assert_eq!(editor.pending_spot(), None);
        }

        // Reachable on floor only; elevated placement still refused
        editor.pointer_down(Some((3, 3)));
        editor.pointer_up();
        editor.select_layer(Layer::Elevated);
        editor.place_spot(SpotKind::Favorite);
        editor.pointer_down(Some((3, 3)));
        assert!(editor.spots().is_empty());
        assert!(!editor.grid().is_set(3, 3, Layer::Elevated));
    }

    #[test]
    fn test_favorite_on_elevated() {
        let mut editor = editor(10, 10);
        editor.select_layer(Layer::Elevated);
        editor.pointer_down(Some((5, 5)));
        editor.pointer_up();
        editor.place_spot(SpotKind::Favorite);
        editor.pointer_down(Some((5, 5)));
        assert_eq!(editor.spots(), &[Spot { x: 5, y: 5, kind: SpotKind::Favorite, layer: Layer::Elevated }]);
    }

    #[test]
    fn test_spot_replaces_same_cell_and_layer() {
        let mut editor = reachable_floor(6, 6);
        editor.select_layer(Layer::Elevated);
        editor.pointer_down(Some((2, 2)));
        editor.pointer_up();
        editor.place_spot(SpotKind::Favorite);
        editor.pointer_down(Some((2, 2)));

        editor.select_layer(Layer::Floor);
        editor.place_spot(SpotKind::Food);
        editor.pointer_down(Some((2, 2)));
        editor.place_spot(SpotKind::Toilet);
        editor.pointer_down(Some((2, 2)));

        assert_eq!(editor.spots().len(), 2);
        assert!(editor.spots().contains(&Spot { x: 2, y: 2, kind: SpotKind::Toilet, layer: Layer::Floor }));
        assert!(editor.spots().contains(&Spot { x: 2, y: 2, kind: SpotKind::Favorite, layer: Layer::Elevated }));
    }

    #[test]
    fn test_spot_press_does_not_paint() {
        let mut editor = reachable_floor(5, 5);
        editor.place_spot(SpotKind::Food);
        editor.pointer_down(Some((1, 1)));
        editor.pointer_move(Some((3, 3)));
        editor.pointer_up();
        assert_eq!(set_cells(&editor, Layer::Floor).len(), 25);
        assert_eq!(editor.spots().len(), 1);
    }

    #[test]
    fn test_spot_press_off_grid_keeps_armed() {
        let mut editor = editor(5, 5);
        editor.place_spot(SpotKind::Food);
        editor.pointer_down(None);
        editor.pointer_down(Some((7, 0)));
        assert_eq!(editor.pending_spot(), Some(SpotKind::Food));
    }

    #[test]
    fn test_toggle_spot() {
        let mut editor = editor(5, 5);
        editor.toggle_spot(SpotKind::Food);
        assert_eq!(editor.pending_spot(), Some(SpotKind::Food));
        editor.toggle_spot(SpotKind::Toilet);
        assert_eq!(editor.pending_spot(), Some(SpotKind::Toilet));
        editor.toggle_spot(SpotKind::Toilet);
        assert_eq!(editor.pending_spot(), None);
    }

    #[test]
    fn test_rectangle_sets_then_clears() {
        let mut editor = editor(6, 6);
        editor.select_paint_mode(PaintMode::Rectangle);

        drag(&mut editor, (1, 1), (3, 3));
        let cells = set_cells(&editor, Layer::Floor);
        assert_eq!(cells.len(), 9);
        assert!(cells.iter().all(|&(x, y)| (1..=3).contains(&x) && (1..=3).contains(&y)));

        drag(&mut editor, (1, 1), (3, 3));
        assert!(set_cells(&editor, Layer::Floor).is_empty());
    }

    #[test]
    fn test_rectangle_waits_for_release() {
        let mut editor = editor(6, 6);
        editor.select_paint_mode(PaintMode::Rectangle);
        editor.pointer_down(Some((4, 4)));
        editor.pointer_move(Some((1, 2)));
        assert!(set_cells(&editor, Layer::Floor).is_empty());
        assert!(editor.gesture().covers(2, 3));

        editor.pointer_up();
        assert_eq!(set_cells(&editor, Layer::Floor).len(), 12);
        assert!(editor.gesture().is_idle());
    }

    #[test]
    fn test_rectangle_only_touches_active_layer() {
        let mut editor = editor(6, 6);
        editor.select_layer(Layer::Elevated);
        editor.select_paint_mode(PaintMode::Rectangle);
        drag(&mut editor, (0, 0), (2, 2));
        assert_eq!(set_cells(&editor, Layer::Elevated).len(), 9);
        assert!(set_cells(&editor, Layer::Floor).is_empty());
    }

    #[test]
    fn test_square_stamp() {
        let mut editor = editor(11, 11);
        editor.select_paint_mode(PaintMode::Stamp(StampShape::Square));
        editor.pointer_down(Some((5, 5)));
        editor.pointer_up();
        let cells = set_cells(&editor, Layer::Floor);
        assert_eq!(cells.len(), 9);
        assert!(cells.iter().all(|&(x, y)| (4..=6).contains(&x) && (4..=6).contains(&y)));
    }

    #[test]
    fn test_line_stamp() {
        let mut editor = editor(11, 11);
        editor.select_paint_mode(PaintMode::Stamp(StampShape::Line));
        editor.pointer_down(Some((5, 5)));
        editor.pointer_up();
        assert_eq!(set_cells(&editor, Layer::Floor), vec![(3, 5), (4, 5), (5, 5), (6, 5), (7, 5)]);
    }

    #[test]
    fn test_stamp_never_clears() {
        let mut editor = editor(11, 11);
        editor.select_paint_mode(PaintMode::Stamp(StampShape::Square));
        editor.pointer_down(Some((5, 5)));
        editor.pointer_down(Some((5, 5)));
        assert_eq!(set_cells(&editor, Layer::Floor).len(), 9);
        assert_eq!(editor.history_len(), 2);
    }

    #[test]
    fn test_stamp_at_edge_skips_outside() {
        let mut editor = editor(4, 4);
        editor.select_paint_mode(PaintMode::Stamp(StampShape::Line));
        editor.pointer_down(Some((0, 3)));
        assert_eq!(set_cells(&editor, Layer::Floor), vec![(0, 3), (1, 3), (2, 3)]);
    }

    #[test]
    fn test_click_toggles_cell() {
        let mut editor = editor(5, 5);
        editor.pointer_down(Some((2, 2)));
        editor.pointer_up();
        assert_eq!(set_cells(&editor, Layer::Floor), vec![(2, 2)]);

        editor.pointer_down(Some((2, 2)));
        editor.pointer_up();
        assert!(set_cells(&editor, Layer::Floor).is_empty());
    }

    #[test]
    fn test_stroke_forces_opposite_of_start() {
        let mut editor = editor(6, 3);
        editor.pointer_down(Some((3, 1)));
        editor.pointer_up();

        // Starts on unset: everything touched becomes set, including (3, 1)
        editor.pointer_down(Some((0, 1)));
        for x in 1..6 {
            editor.pointer_move(Some((x, 1)));
        }
        editor.pointer_up();
        assert_eq!(set_cells(&editor, Layer::Floor).len(), 6);

        // Starts on set: everything touched becomes unset
        editor.pointer_down(Some((5, 1)));
        editor.pointer_move(Some((4, 1)));
        editor.pointer_move(Some((5, 1)));
        editor.pointer_up();
        assert_eq!(set_cells(&editor, Layer::Floor), vec![(0, 1), (1, 1), (2, 1), (3, 1)]);
    }

    #[test]
    fn test_stroke_commits_as_one_step() {
        let mut editor = editor(6, 6);
        editor.pointer_down(Some((0, 0)));
        editor.pointer_move(Some((1, 0)));
        assert!(set_cells(&editor, Layer::Floor).is_empty());
        editor.pointer_move(Some((2, 0)));
        editor.pointer_up();
        assert_eq!(editor.history_len(), 1);

        editor.undo();
        assert!(set_cells(&editor, Layer::Floor).is_empty());
    }

    #[test]
    fn test_leave_commits_at_last_cell() {
        let mut editor = editor(6, 6);
        editor.select_paint_mode(PaintMode::Rectangle);
        editor.pointer_down(Some((0, 0)));
        editor.pointer_move(Some((1, 1)));
        editor.pointer_move(None);
        editor.pointer_leave();
        assert_eq!(set_cells(&editor, Layer::Floor).len(), 4);
        assert!(editor.gesture().is_idle());
    }

    #[test]
    fn test_out_of_bounds_ignored() {
        let mut editor = editor(4, 4);
        editor.pointer_down(None);
        editor.pointer_down(Some((4, 0)));
        editor.pointer_up();
        assert!(set_cells(&editor, Layer::Floor).is_empty());
        assert!(!editor.can_undo());
    }

    #[test]
    fn test_layer_switch_mid_drag_keeps_start_layer() {
        let mut editor = editor(4, 4);
        editor.pointer_down(Some((1, 1)));
        editor.select_layer(Layer::Elevated);
        editor.pointer_up();
        assert_eq!(set_cells(&editor, Layer::Floor), vec![(1, 1)]);
        assert!(set_cells(&editor, Layer::Elevated).is_empty());
    }

    #[test]
    fn test_undo_round_trips_every_operation() {
        let mut editor = editor(12, 12);
        editor.pointer_down(Some((1, 1)));
        editor.pointer_up();
        editor.place_spot(SpotKind::Food);
        editor.pointer_down(Some((1, 1)));

        let modes = [
            PaintMode::Paint,
            PaintMode::Rectangle,
            PaintMode::Stamp(StampShape::Square),
            PaintMode::Stamp(StampShape::Line),
        ];
        for mode in modes {
            editor.select_paint_mode(mode);
            let grid = editor.grid().clone();
            let spots = editor.spots().to_vec();
            drag(&mut editor, (5, 5), (7, 8));
            assert_ne!(editor.grid(), &grid, "{:?} changed nothing", mode);
            editor.undo();
            assert_eq!(editor.grid(), &grid, "{:?}", mode);
            assert_eq!(editor.spots(), spots.as_slice());
        }

        let grid = editor.grid().clone();
        let spots = editor.spots().to_vec();
        editor.place_spot(SpotKind::Favorite);
        editor.pointer_down(Some((1, 1)));
        editor.undo();
        assert_eq!(editor.grid(), &grid);
        assert_eq!(editor.spots(), spots.as_slice());
    }

    #[test]
    fn test_undo_on_empty_history() {
        let mut editor = editor(5, 5);
        let grid = editor.grid().clone();
        editor.undo();
        assert_eq!(editor.grid(), &grid);
        assert!(editor.spots().is_empty());
    }

    #[test]
    fn test_undo_after_shrink_stays_in_bounds() {
        let mut editor = reachable_floor(10, 10);
        editor.place_spot(SpotKind::Food);
        editor.pointer_down(Some((9, 9)));
        editor.pointer_down(Some((0, 0)));
        editor.pointer_up();

        editor.set_room_dimensions(0.5, 0.5);
        editor.undo();
        assert_eq!(editor.grid().dimensions(), (5, 5));
        assert!(editor.grid().is_set(0, 0, Layer::Floor));
        assert!(editor.spots().iter().all(|s| s.fits(5, 5)));
    }

    #[test]
    fn test_save_payload() {
        let mut editor = RoomEditor::new("Bedroom", 0.4, 0.3, 10);
        editor.pointer_down(Some((3, 2)));
        editor.pointer_up();
        editor.place_spot(SpotKind::Toilet);
        editor.pointer_down(Some((3, 2)));

        let layout = editor.save();
        assert_eq!(layout.name, "Bedroom");
        assert_eq!((layout.width, layout.height), (0.4, 0.3));
        assert_eq!(layout.grid.len(), 3);
        assert_eq!(layout.grid[0].len(), 4);
        assert!(layout.grid[2][3].floor);
        assert_eq!(layout.spots, editor.spots());
    }

    #[test]
    fn test_from_layout_restores() {
        let mut editor = reachable_floor(6, 4);
        editor.place_spot(SpotKind::Food);
        editor.pointer_down(Some((5, 3)));
        editor.rename("Living room");

        let restored = RoomEditor::from_layout(&editor.save(), 10);
        assert_eq!(restored.name(), "Living room");
        assert_eq!(restored.grid(), editor.grid());
        assert_eq!(restored.spots(), editor.spots());
        assert!(!restored.can_undo());
    }

    #[test]
    fn test_from_layout_drops_out_of_range_spots() {
        let mut layout = editor(3, 3).save();
        layout.spots.push(Spot { x: 5, y: 0, kind: SpotKind::Food, layer: Layer::Floor });
        let restored = RoomEditor::from_layout(&layout, 10);
        assert!(restored.spots().is_empty());
    }
}
