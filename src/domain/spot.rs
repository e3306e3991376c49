use serde::{Deserialize, Serialize};
use super::Layer;

/// Kind of point of interest a spot marks
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpotKind {
    Food,
    Toilet,
    Favorite,
}

impl SpotKind {
    pub fn all() -> Vec<SpotKind> {
        vec![SpotKind::Food, SpotKind::Toilet, SpotKind::Favorite]
    }

    /// Food bowls and litter boxes stay on the ground
    pub const fn allowed_on(self, layer: Layer) -> bool {
        matches!((self, layer), (SpotKind::Favorite, _) | (_, Layer::Floor))
    }

    pub const fn name(self) -> &'static str {
        match self {
            SpotKind::Food => "Food",
            SpotKind::Toilet => "Toilet",
            SpotKind::Favorite => "Favorite",
        }
    }
}

/// A marker anchored to one cell on one layer
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Spot {
    pub x: usize,
    pub y: usize,
    #[serde(rename = "type")]
    pub kind: SpotKind,
    pub layer: Layer,
}

impl Spot {
    pub fn occupies(&self, x: usize, y: usize, layer: Layer) -> bool {
        self.x == x && self.y == y && self.layer == layer
    }

    pub const fn fits(&self, width: usize, height: usize) -> bool {
        self.x < width && self.y < height
    }
}
