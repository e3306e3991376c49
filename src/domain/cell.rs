use serde::{Deserialize, Serialize};

/// Which reachability plane an operation targets.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    /// Ground level
    #[default]
    Floor,
    /// Furniture tops, shelves, cat walks
    Elevated,
}

impl Layer {
    pub const fn other(self) -> Self {
        match self {
            Layer::Floor => Layer::Elevated,
            Layer::Elevated => Layer::Floor,
        }
    }

    /// Display name for UI
    pub const fn name(self) -> &'static str {
        match self {
            Layer::Floor => "Floor (1F)",
            Layer::Elevated => "Elevated (1.5F)",
        }
    }
}

/// Cell is one 10cm x 10cm unit of a room.
/// The two layers are independent: both may be set (a shelf above open floor)
/// or neither (a wall, a closed cupboard).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Cell {
    pub floor: bool,
    pub elevated: bool,
}

impl Cell {
    pub const EMPTY: Cell = Cell { floor: false, elevated: false };

    /// Reachability flag for the given layer
    pub const fn get(self, layer: Layer) -> bool {
        match layer {
            Layer::Floor => self.floor,
            Layer::Elevated => self.elevated,
        }
    }

    pub fn set(&mut self, layer: Layer, reachable: bool) {
        match layer {
            Layer::Floor => self.floor = reachable,
            Layer::Elevated => self.elevated = reachable,
        }
    }
}
