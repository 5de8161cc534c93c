use serde::{Deserialize, Serialize};

use super::GameStatus;

/// What the presentation layer is allowed to see for a single cell.
///
/// Renderers typically map these to glyphs: `Exploded` = 💥, `Mine` = 💣,
/// `Flagged` = 🚩, `Question` = ❔, `Revealed` = its adjacency numeral
/// when non-zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state")]
pub enum CellView {
    #[serde(rename = "hidden")]
    Hidden,
    #[serde(rename = "flagged")]
    Flagged,
    #[serde(rename = "question")]
    Question,
    #[serde(rename = "revealed")]
    Revealed { adjacent: u8 },
    /// The mine the player stepped on.
    #[serde(rename = "exploded")]
    Exploded,
    /// Any other mine, only disclosed after a loss.
    #[serde(rename = "mine")]
    Mine,
}

/// A single cell that changed, addressed by its row-major index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellUpdate {
    pub index: usize,
    pub value: CellView,
}

/// Emitted to the presentation layer after every applied action. An empty
/// `updates` list means the action was a no-op.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BoardUpdate {
    pub updates: Vec<CellUpdate>,
    pub status: GameStatus,
}

/// Full row-chunked snapshot of the board, for (re)initializing a renderer.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BoardView {
    pub width: usize,
    pub height: usize,
    pub mines: usize,
    pub status: GameStatus,
    pub cells: Vec<Vec<CellView>>,
}
