use super::{Board, Cell, GameError, Player};

/// The four board coordinates of a detected run, in scan order.
pub type WinningLine = [(usize, usize); 4];

/// Lifecycle state of a game. Terminal phases exit only via
/// [`GameEngine::reset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GamePhase {
    InProgress,
    Won { winner: Player, line: WinningLine },
    Tied,
}

/// Outcome of a successfully applied move, handed back to the UI shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveResult {
    /// Game continues; it is now this player's turn.
    Continue(Player),
    /// The mover completed a four-in-a-row.
    Win { winner: Player, line: WinningLine },
    /// The board filled with no winner.
    Tie,
}

/// Turn order, drop resolution, win/tie detection, and game lifecycle.
/// The engine owns all game state; the UI consumes [`MoveResult`] values
/// and read-only queries, never the other way around.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    current_player: Player,
    phase: GamePhase,
}

impl GameEngine {
    /// Create an engine for an empty `rows` x `columns` board with Player 1
    /// to move. Both dimensions must be at least 4.
    pub fn new(rows: usize, columns: usize) -> Result<Self, GameError> {
        Ok(GameEngine {
            board: Board::new(rows, columns)?,
            current_player: Player::One,
            phase: GamePhase::InProgress,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn phase(&self) -> &GamePhase {
        &self.phase
    }

    /// Pure read of a single cell.
    pub fn occupant_at(&self, row: usize, col: usize) -> Cell {
        self.board.get(row, col)
    }

    pub fn is_over(&self) -> bool {
        self.phase != GamePhase::InProgress
    }

    /// Columns that can still accept a drop. Empty once the game is over,
    /// so the UI can disable its inputs the way the original disables
    /// exhausted column buttons.
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_over() {
            return Vec::new();
        }
        (0..self.board.columns())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Drop the current player's piece into `column`.
    ///
    /// Validation happens before any mutation: a rejected move leaves the
    /// board and phase untouched. On success the piece lands on the lowest
    /// empty row, the whole board is re-scanned for a four-in-a-row, and
    /// the phase transitions to `Won` or `Tied` if the game ended.
    pub fn apply_move(&mut self, column: usize) -> Result<MoveResult, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }

        let row = self.board.landing_row(column)?;
        self.board.place(row, column, self.current_player);

        if let Some(line) = find_winning_line(&self.board) {
            let winner = self.current_player;
            self.phase = GamePhase::Won { winner, line };
            return Ok(MoveResult::Win { winner, line });
        }

        if self.board.is_full() {
            self.phase = GamePhase::Tied;
            return Ok(MoveResult::Tie);
        }

        self.current_player = self.current_player.other();
        Ok(MoveResult::Continue(self.current_player))
    }

    /// Start over: empty board, `InProgress`, Player 1 to move.
    pub fn reset(&mut self) {
        self.board.reset();
        self.current_player = Player::One;
        self.phase = GamePhase::InProgress;
    }
}

/// Scan the whole board for any four-in-a-row and return the first line
/// found. Scan order is fixed for determinism: horizontal runs per row
/// (top row first), vertical runs per column (left column first), then
/// down-right diagonals, then down-left diagonals.
///
/// A single move can only create one new line, but re-scanning everything
/// is the simplest policy that detects any existing run regardless of
/// where the last piece landed.
fn find_winning_line(board: &Board) -> Option<WinningLine> {
    find_horizontal(board)
        .or_else(|| find_vertical(board))
        .or_else(|| find_diagonal_down_right(board))
        .or_else(|| find_diagonal_down_left(board))
}

fn find_horizontal(board: &Board) -> Option<WinningLine> {
    for row in 0..board.rows() {
        let mut run = 0;
        for col in 1..board.columns() {
            let cell = board.get(row, col);
            if cell != Cell::Empty && cell == board.get(row, col - 1) {
                run += 1;
            } else {
                run = 0;
            }
            if run == 3 {
                return Some([
                    (row, col - 3),
                    (row, col - 2),
                    (row, col - 1),
                    (row, col),
                ]);
            }
        }
    }
    None
}

fn find_vertical(board: &Board) -> Option<WinningLine> {
    for col in 0..board.columns() {
        let mut run = 0;
        for row in 1..board.rows() {
            let cell = board.get(row, col);
            if cell != Cell::Empty && cell == board.get(row - 1, col) {
                run += 1;
            } else {
                run = 0;
            }
            if run == 3 {
                return Some([
                    (row - 3, col),
                    (row - 2, col),
                    (row - 1, col),
                    (row, col),
                ]);
            }
        }
    }
    None
}

fn find_diagonal_down_right(board: &Board) -> Option<WinningLine> {
    for row in 0..board.rows() - 3 {
        for col in 0..board.columns() - 3 {
            let cell = board.get(row, col);
            if cell != Cell::Empty
                && (1..4).all(|i| board.get(row + i, col + i) == cell)
            {
                return Some([
                    (row, col),
                    (row + 1, col + 1),
                    (row + 2, col + 2),
                    (row + 3, col + 3),
                ]);
            }
        }
    }
    None
}

fn find_diagonal_down_left(board: &Board) -> Option<WinningLine> {
    for row in 0..board.rows() - 3 {
        for col in 3..board.columns() {
            let cell = board.get(row, col);
            if cell != Cell::Empty
                && (1..4).all(|i| board.get(row + i, col - i) == cell)
            {
                return Some([
                    (row, col),
                    (row + 1, col - 1),
                    (row + 2, col - 2),
                    (row + 3, col - 3),
                ]);
            }
        }
    }
    None
}
