use crate::model::{CellView, FlagState, GameParams, GameStatus};

/// Internal cell storage. Presentation code only ever sees [`CellView`].
#[derive(Clone, Debug, Default)]
pub struct Cell {
    pub mine: bool,
    pub adjacent: u8,
    pub revealed: bool,
    pub flag: FlagState,
}

impl Cell {
    /// Projects this cell for the renderer. A revealed mine is the one the
    /// player struck; other mines are disclosed only once the game is lost,
    /// and take precedence over any flag on them.
    pub fn view(&self, status: GameStatus) -> CellView {
        if self.revealed && self.mine {
            CellView::Exploded
        } else if self.revealed {
            CellView::Revealed {
                adjacent: self.adjacent,
            }
        } else if self.mine && status == GameStatus::Loss {
            CellView::Mine
        } else {
            match self.flag {
                FlagState::None => CellView::Hidden,
                FlagState::Flag => CellView::Flagged,
                FlagState::Question => CellView::Question,
            }
        }
    }
}

/// Row-major grid of cells. The shape is fixed once built; cells mutate in
/// place until the game reaches a terminal state.
#[derive(Clone, Debug)]
pub struct Board {
    pub width: usize,
    pub height: usize,
    pub mines: usize,
    pub revealed: usize,
    pub cells: Vec<Cell>,
}

impl Board {
    /// All-default board shown before the first reveal generates the real one.
    pub fn placeholder(params: &GameParams) -> Self {
        Self {
            width: params.width,
            height: params.height,
            mines: params.mines,
            revealed: 0,
            cells: vec![Cell::default(); params.width * params.height],
        }
    }

    pub fn params(&self) -> GameParams {
        GameParams {
            width: self.width,
            height: self.height,
            mines: self.mines,
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        index < self.cells.len()
    }
}
