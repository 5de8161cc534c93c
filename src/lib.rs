//! Minesweeper Board Engine
//!
//! This library implements the full game logic for single-player
//! minesweeper: lazy board generation that keeps the first click safe,
//! adjacency counting, iterative flood reveal of zero-adjacency regions,
//! flag cycling, and win/loss detection. It carries no rendering or input
//! handling of its own; a host feeds it [`Action`]s and renders the
//! [`BoardUpdate`]s and [`BoardView`] snapshots it emits.
//!
//! ## Usage
//!
//! ```rust
//! use minesweeper_engine::{Action, ConfigError, Game, GameParams, GameStatus};
//!
//! fn main() -> Result<(), ConfigError> {
//!     // 9x9 with 10 mines, the classic beginner preset.
//!     let mut game = Game::new(GameParams::default())?;
//!
//!     // The board is generated on the first reveal, seeded by the clicked
//!     // index, so this click can never hit a mine.
//!     let update = game.apply(Action::Reveal { index: 40 })?;
//!     assert_ne!(update.status, GameStatus::Loss);
//!
//!     // Mark a suspected mine; three toggles cycle back to unmarked.
//!     game.apply(Action::ToggleFlag { index: 0 })?;
//!
//!     // Hand the renderer a full snapshot at any point.
//!     let view = game.view();
//!     assert_eq!(view.cells.len(), view.height);
//!     Ok(())
//! }
//! ```
//!
//! Logging goes through [`tracing`]; install a subscriber in the host to
//! see per-action diagnostics.

mod data;
pub mod error;
pub mod logic;
pub mod model;

pub use error::ConfigError;
pub use logic::{Game, neighbors};
pub use model::action::Action;
pub use model::view::{BoardUpdate, BoardView, CellUpdate, CellView};
pub use model::{FlagState, GameParams, GameStatus};
