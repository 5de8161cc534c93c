use thiserror::Error;

/// Invalid game configuration, rejected before any board is generated.
///
/// Mine placement keeps the first clicked cell and all of its neighbors
/// mine-free, so a board must have room for the mines *outside* that safe
/// zone. Without this check the placement loop would never terminate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid dimensions must be at least 1x1, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },
    #[error(
        "{mines} mines do not fit a {width}x{height} grid with a safe first click (max {max})"
    )]
    TooManyMines {
        width: usize,
        height: usize,
        mines: usize,
        max: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_configuration() {
        let err = ConfigError::TooManyMines {
            width: 9,
            height: 9,
            mines: 80,
            max: 72,
        };
        assert_eq!(
            err.to_string(),
            "80 mines do not fit a 9x9 grid with a safe first click (max 72)"
        );

        let err = ConfigError::EmptyGrid {
            width: 0,
            height: 5,
        };
        assert_eq!(
            err.to_string(),
            "grid dimensions must be at least 1x1, got 0x5"
        );
    }
}
