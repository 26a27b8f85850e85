use super::Player;

/// Smallest board dimension that still allows a four-in-a-row.
pub const MIN_DIMENSION: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    One,
    Two,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("column is full")]
    ColumnFull,

    #[error("column index out of range")]
    InvalidColumn,

    #[error("game is over")]
    GameOver,

    #[error("board must be at least {MIN_DIMENSION}x{MIN_DIMENSION}, got {rows}x{columns}")]
    InvalidConfiguration { rows: usize, columns: usize },
}

/// The playing grid. Row 0 is the top, row `rows - 1` is the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board with the given dimensions.
    pub fn new(rows: usize, columns: usize) -> Result<Self, GameError> {
        if rows < MIN_DIMENSION || columns < MIN_DIMENSION {
            return Err(GameError::InvalidConfiguration { rows, columns });
        }
        Ok(Board {
            rows,
            columns,
            cells: vec![Cell::Empty; rows * columns],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.columns + col]
    }

    /// Resolve where a piece dropped in this column would land: the lowest
    /// empty row, scanning from the bottom up.
    pub fn landing_row(&self, col: usize) -> Result<usize, GameError> {
        if col >= self.columns {
            return Err(GameError::InvalidColumn);
        }
        (0..self.rows)
            .rev()
            .find(|&row| self.get(row, col) == Cell::Empty)
            .ok_or(GameError::ColumnFull)
    }

    /// Set a cell to a player's marker. The caller resolves the row via
    /// [`Board::landing_row`] first, so the cell is known to be empty.
    pub fn place(&mut self, row: usize, col: usize, player: Player) {
        self.cells[row * self.columns + col] = player.to_cell();
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.columns {
            return true;
        }
        self.get(0, col) != Cell::Empty
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.columns).all(|col| self.is_column_full(col))
    }

    /// Clear every cell back to empty.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drop_piece(board: &mut Board, col: usize, player: Player) -> Result<usize, GameError> {
        let row = board.landing_row(col)?;
        board.place(row, col, player);
        Ok(row)
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(6, 7).unwrap();
        for row in 0..6 {
            for col in 0..7 {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
    }

    #[test]
    fn test_rejects_small_dimensions() {
        assert_eq!(
            Board::new(3, 7),
            Err(GameError::InvalidConfiguration { rows: 3, columns: 7 })
        );
        assert_eq!(
            Board::new(6, 3),
            Err(GameError::InvalidConfiguration { rows: 6, columns: 3 })
        );
    }

    #[test]
    fn test_drop_lands_at_bottom() {
        let mut board = Board::new(6, 7).unwrap();

        let row = drop_piece(&mut board, 3, Player::One).unwrap();
        assert_eq!(row, 5);
        assert_eq!(board.get(5, 3), Cell::One);

        let row = drop_piece(&mut board, 3, Player::Two).unwrap();
        assert_eq!(row, 4);
        assert_eq!(board.get(4, 3), Cell::Two);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new(6, 7).unwrap();

        for _ in 0..6 {
            drop_piece(&mut board, 0, Player::One).unwrap();
        }

        assert!(board.is_column_full(0));
        assert_eq!(board.landing_row(0), Err(GameError::ColumnFull));
    }

    #[test]
    fn test_invalid_column() {
        let board = Board::new(6, 7).unwrap();
        assert_eq!(board.landing_row(7), Err(GameError::InvalidColumn));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(6, 7).unwrap();
        for col in 0..7 {
            for _ in 0..6 {
                drop_piece(&mut board, col, Player::One).unwrap();
            }
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut board = Board::new(6, 7).unwrap();
        for col in 0..7 {
            drop_piece(&mut board, col, Player::One).unwrap();
        }

        board.reset();
        for row in 0..6 {
            for col in 0..7 {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
    }

    #[test]
    fn test_column_accepts_exactly_rows_drops() {
        let mut board = Board::new(4, 5).unwrap();
        for _ in 0..4 {
            drop_piece(&mut board, 2, Player::Two).unwrap();
        }
        assert_eq!(board.landing_row(2), Err(GameError::ColumnFull));
    }
}
