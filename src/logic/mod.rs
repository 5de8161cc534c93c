use std::collections::HashSet;

use rand::Rng;
use tracing::{debug, info, instrument, warn};

use crate::data::{Board, Cell};
use crate::error::ConfigError;
use crate::model::{
    CellView, FlagState, GameParams, GameStatus,
    action::Action,
    view::{BoardUpdate, BoardView, CellUpdate},
};

/// Indices of the up-to-8 cells surrounding `index` on a `width` x `height`
/// grid. Offsetting row and column separately and bounds-clipping both axes
/// keeps cells on a row edge from picking up false "neighbors" wrapped onto
/// the opposite edge of the adjacent row.
pub fn neighbors(index: usize, width: usize, height: usize) -> Vec<usize> {
    let x = (index % width) as isize;
    let y = (index / width) as isize;
    let mut result = Vec::with_capacity(8);

    for dy in -1..=1 {
        for dx in -1..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }

            let new_x = x + dx;
            let new_y = y + dy;

            if new_x >= 0 && new_x < width as isize && new_y >= 0 && new_y < height as isize {
                result.push(new_x as usize + new_y as usize * width);
            }
        }
    }

    result
}

/// Samples `params.mines` uniform mine locations, rejecting the safe zone
/// around `safe_index`. Termination requires a validated mine count.
fn place_mines(params: &GameParams, safe_index: usize) -> HashSet<usize> {
    let mut rng = rand::rng();

    let mut safe_zone: HashSet<usize> = neighbors(safe_index, params.width, params.height)
        .into_iter()
        .collect();
    safe_zone.insert(safe_index);

    let length = params.width * params.height;
    let mut locations = HashSet::with_capacity(params.mines);
    while locations.len() < params.mines {
        let location = rng.random_range(0..length);
        if !safe_zone.contains(&location) {
            locations.insert(location);
        }
    }

    locations
}

fn count_adjacent_mines(mines: &HashSet<usize>, index: usize, params: &GameParams) -> u8 {
    neighbors(index, params.width, params.height)
        .iter()
        .filter(|neighbor| mines.contains(neighbor))
        .count() as u8
}

/// Builds a fully populated board with `safe_index` and all of its neighbors
/// guaranteed mine-free and every cell unrevealed.
fn generate(params: &GameParams, safe_index: usize) -> Board {
    let mines = place_mines(params, safe_index);
    let cells = (0..params.width * params.height)
        .map(|index| Cell {
            mine: mines.contains(&index),
            adjacent: count_adjacent_mines(&mines, index, params),
            revealed: false,
            flag: FlagState::None,
        })
        .collect();

    Board {
        width: params.width,
        height: params.height,
        mines: params.mines,
        revealed: 0,
        cells,
    }
}

/// A single minesweeper session: the board plus the win/loss state machine.
///
/// The real board is generated lazily on the first reveal, seeded by the
/// clicked index, so the first click can never hit a mine. Until then a
/// placeholder board of hidden cells stands in.
#[derive(Debug)]
pub struct Game {
    board: Board,
    status: GameStatus,
}

impl Game {
    #[instrument(level = "trace")]
    pub fn new(params: GameParams) -> Result<Self, ConfigError> {
        params.validate()?;
        info!(
            "Creating new game: {}x{} with {} mines",
            params.width, params.height, params.mines
        );
        Ok(Self {
            board: Board::placeholder(&params),
            status: GameStatus::NotStarted,
        })
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn width(&self) -> usize {
        self.board.width
    }

    pub fn height(&self) -> usize {
        self.board.height
    }

    pub fn mines(&self) -> usize {
        self.board.mines
    }

    /// Number of cells currently carrying a flag marker (question marks do
    /// not count). Hosts use this to drive the remaining-mines counter.
    pub fn flags_placed(&self) -> usize {
        self.board
            .cells
            .iter()
            .filter(|cell| cell.flag == FlagState::Flag)
            .count()
    }

    pub fn cell(&self, index: usize) -> Option<CellView> {
        self.board
            .cells
            .get(index)
            .map(|cell| cell.view(self.status))
    }

    /// Full row-chunked snapshot for (re)initializing a renderer.
    pub fn view(&self) -> BoardView {
        BoardView {
            width: self.board.width,
            height: self.board.height,
            mines: self.board.mines,
            status: self.status,
            cells: self
                .board
                .cells
                .iter()
                .map(|cell| cell.view(self.status))
                .collect::<Vec<CellView>>()
                .chunks(self.board.width)
                .map(|chunk| chunk.to_vec())
                .collect(),
        }
    }

    /// Applies one player action and returns the resulting cell updates plus
    /// game status. Only [`Action::NewGame`] can fail; illegal reveal and
    /// flag actions degrade to empty updates.
    #[instrument(level = "trace", skip(self))]
    pub fn apply(&mut self, action: Action) -> Result<BoardUpdate, ConfigError> {
        match action {
            Action::Reveal { index } => Ok(self.reveal(index)),
            Action::ToggleFlag { index } => Ok(self.toggle_flag(index)),
            Action::NewGame { params } => self.restart(params),
        }
    }

    /// Reveals a cell. On the first reveal this generates the board seeded
    /// at `index` and moves the game to `InProgress` before revealing.
    /// Revealing a mine loses the game and the returned update discloses
    /// every mine; revealing the last safe cell wins it.
    #[instrument(level = "trace", skip(self))]
    pub fn reveal(&mut self, index: usize) -> BoardUpdate {
        let mut updates = Vec::new();

        if !self.board.contains(index) {
            warn!("Invalid reveal index: {}", index);
            return self.update(updates);
        }

        if self.status.is_terminal() {
            debug!("Ignoring reveal on finished game at index {}", index);
            return self.update(updates);
        }

        if self.status == GameStatus::NotStarted {
            info!("First reveal at index {}, generating board", index);
            self.board = generate(&self.board.params(), index);
            self.status = GameStatus::InProgress;
            self.flood_reveal(index, &mut updates);
            self.check_win();
            return self.update(updates);
        }

        let cell = &self.board.cells[index];
        if cell.revealed {
            debug!("Ignoring reveal on already revealed cell {}", index);
        } else if cell.flag != FlagState::None {
            debug!("Ignoring reveal on flagged cell {}", index);
        } else if cell.mine {
            warn!("Player hit mine at index {} - game over", index);
            self.board.cells[index].revealed = true;
            self.status = GameStatus::Loss;
            self.disclose_mines(&mut updates);
        } else {
            self.flood_reveal(index, &mut updates);
            debug!("Revealed {} cells from index {}", updates.len(), index);
            self.check_win();
        }

        self.update(updates)
    }

    /// Cycles a hidden cell's flag marker, only while the game is running.
    #[instrument(level = "trace", skip(self))]
    pub fn toggle_flag(&mut self, index: usize) -> BoardUpdate {
        let mut updates = Vec::new();

        if !self.board.contains(index) {
            warn!("Invalid flag index: {}", index);
            return self.update(updates);
        }

        if self.status != GameStatus::InProgress {
            debug!("Ignoring flag action outside a running game at index {}", index);
            return self.update(updates);
        }

        let cell = &mut self.board.cells[index];
        if cell.revealed {
            debug!("Ignoring flag action on revealed cell {}", index);
            return self.update(updates);
        }

        cell.flag = cell.flag.cycle();
        debug!("Cell {} flag cycled to {:?}", index, cell.flag);
        let value = cell.view(self.status);
        updates.push(CellUpdate { index, value });

        self.update(updates)
    }

    /// Discards the current board and returns to `NotStarted` with a fresh
    /// placeholder. Callers should re-read [`Game::view`] afterwards.
    #[instrument(level = "trace", skip(self))]
    pub fn restart(&mut self, params: GameParams) -> Result<BoardUpdate, ConfigError> {
        params.validate()?;
        info!(
            "Restarting game: {}x{} with {} mines",
            params.width, params.height, params.mines
        );
        self.board = Board::placeholder(&params);
        self.status = GameStatus::NotStarted;
        Ok(self.update(Vec::new()))
    }

    /// Iterative flood reveal: reveals `start`, and wherever a revealed cell
    /// has zero adjacent mines, spreads to its neighbors. The revealed check
    /// on pop is the visited guard on the cyclic neighbor graph.
    fn flood_reveal(&mut self, start: usize, updates: &mut Vec<CellUpdate>) {
        let (width, height) = (self.board.width, self.board.height);
        let mut stack = vec![start];

        while let Some(index) = stack.pop() {
            let cell = &mut self.board.cells[index];
            if cell.revealed {
                continue;
            }

            cell.revealed = true;
            let adjacent = cell.adjacent;
            self.board.revealed += 1;
            updates.push(CellUpdate {
                index,
                value: CellView::Revealed { adjacent },
            });

            if adjacent == 0 {
                for neighbor in neighbors(index, width, height) {
                    if !self.board.cells[neighbor].revealed {
                        stack.push(neighbor);
                    }
                }
            }
        }
    }

    fn has_won(&self) -> bool {
        self.board.revealed + self.board.mines == self.board.width * self.board.height
    }

    fn check_win(&mut self) {
        if self.has_won() {
            self.status = GameStatus::Win;
            info!("All safe cells revealed, game won");
        }
    }

    /// Pushes an update for every mine so the renderer can show the full
    /// minefield after a loss. The struck mine is the revealed one.
    fn disclose_mines(&self, updates: &mut Vec<CellUpdate>) {
        for (index, cell) in self.board.cells.iter().enumerate() {
            if cell.mine {
                updates.push(CellUpdate {
                    index,
                    value: cell.view(self.status),
                });
            }
        }
    }

    fn update(&self, updates: Vec<CellUpdate>) -> BoardUpdate {
        BoardUpdate {
            updates,
            status: self.status,
        }
    }
}
