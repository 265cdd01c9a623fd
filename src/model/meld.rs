use super::*;

// Exposed group. Calls are not implemented, so every meld list stays empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meld {
    pub tiles: Vec<Tile>,
}
