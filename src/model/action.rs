use serde::{Deserialize, Serialize};

use super::GameParams;

/// A single player input. Each action is applied atomically: the board is
/// fully mutated before the next action is accepted.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(tag = "action")]
pub enum Action {
    #[serde(rename = "reveal")]
    Reveal { index: usize },
    #[serde(rename = "flag")]
    ToggleFlag { index: usize },
    #[serde(rename = "newGame")]
    NewGame { params: GameParams },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_deserialize_from_tagged_json() {
        let action: Action = serde_json::from_str(r#"{"action":"reveal","index":40}"#).unwrap();
        assert!(matches!(action, Action::Reveal { index: 40 }));

        let action: Action = serde_json::from_str(r#"{"action":"flag","index":3}"#).unwrap();
        assert!(matches!(action, Action::ToggleFlag { index: 3 }));

        let action: Action = serde_json::from_str(r#"{"action":"newGame","params":{}}"#).unwrap();
        assert!(matches!(
            action,
            Action::NewGame {
                params: GameParams {
                    width: 9,
                    height: 9,
                    mines: 10,
                }
            }
        ));
    }
}
