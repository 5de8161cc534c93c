use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub mod action;
pub mod view;

pub use view::CellView;

/// Marker a player can cycle through on a hidden cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlagState {
    #[default]
    #[serde(rename = "none")]
    None,
    #[serde(rename = "flag")]
    Flag,
    #[serde(rename = "question")]
    Question,
}

impl FlagState {
    /// The 3-cycle `None -> Flag -> Question -> None`.
    pub fn cycle(self) -> Self {
        match self {
            FlagState::None => FlagState::Flag,
            FlagState::Flag => FlagState::Question,
            FlagState::Question => FlagState::None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[serde(rename = "notStarted")]
    NotStarted,
    #[serde(rename = "inProgress")]
    InProgress,
    #[serde(rename = "win")]
    Win,
    #[serde(rename = "loss")]
    Loss,
}

impl GameStatus {
    /// Terminal states reject further reveal and flag actions.
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Win | GameStatus::Loss)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameParams {
    pub width: usize,
    pub height: usize,
    pub mines: usize,
}

impl Default for GameParams {
    fn default() -> Self {
        // Classic beginner preset.
        Self {
            width: 9,
            height: 9,
            mines: 10,
        }
    }
}

impl GameParams {
    /// Largest mine count that still leaves room for a safe first click
    /// anywhere on the grid. The safe zone around the first clicked cell
    /// covers at most `min(width, 3) * min(height, 3)` cells.
    pub fn max_mines(&self) -> usize {
        let total = self.width * self.height;
        let safe_zone = self.width.min(3) * self.height.min(3);
        total.saturating_sub(safe_zone)
    }

    /// Rejects configurations the mine placement loop could never satisfy.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.width,
                height: self.height,
            });
        }

        // A mineless board needs no placement at all, so any grid is fine.
        let max = self.max_mines();
        if self.mines > 0 && self.mines > max {
            return Err(ConfigError::TooManyMines {
                width: self.width,
                height: self.height,
                mines: self.mines,
                max,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_state_is_a_three_cycle() {
        let start = FlagState::None;
        assert_eq!(start.cycle().cycle().cycle(), start);
    }

    #[test]
    fn default_params_are_beginner_preset() {
        let params = GameParams::default();
        assert_eq!(params.width, 9);
        assert_eq!(params.height, 9);
        assert_eq!(params.mines, 10);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn beginner_grid_caps_mines_at_total_minus_safe_zone() {
        assert_eq!(GameParams::default().max_mines(), 72);
    }

    #[test]
    fn oversized_mine_count_is_rejected() {
        let params = GameParams {
            width: 9,
            height: 9,
            mines: 73,
        };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::TooManyMines { max: 72, .. })
        ));
    }

    #[test]
    fn zero_dimension_is_rejected() {
        let params = GameParams {
            width: 0,
            height: 9,
            mines: 0,
        };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::EmptyGrid { .. })
        ));
    }

    #[test]
    fn tiny_mineless_grid_is_valid() {
        let params = GameParams {
            width: 1,
            height: 1,
            mines: 0,
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn only_win_and_loss_are_terminal() {
        assert!(GameStatus::Win.is_terminal());
        assert!(GameStatus::Loss.is_terminal());
        assert!(!GameStatus::NotStarted.is_terminal());
        assert!(!GameStatus::InProgress.is_terminal());
    }

    #[test]
    fn status_serializes_camel_case() {
        let json = serde_json::to_string(&GameStatus::NotStarted).unwrap();
        assert_eq!(json, r#""notStarted""#);
        let json = serde_json::to_string(&GameStatus::InProgress).unwrap();
        assert_eq!(json, r#""inProgress""#);
    }

    #[test]
    fn partial_params_json_fills_in_defaults() {
        let params: GameParams = serde_json::from_str(r#"{"mines": 20}"#).unwrap();
        assert_eq!(params.width, 9);
        assert_eq!(params.height, 9);
        assert_eq!(params.mines, 20);
    }
}
