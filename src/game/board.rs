use std::ops::{Deref, DerefMut};

use super::state::MoveError;

/// Capacity of the cell array: large enough for every [`GridShape`].
pub const MAX_ROWS: usize = 6;
pub const MAX_COLS: usize = 7;

/// The two supported grids. Dimensions and win-run length are fixed per shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridShape {
    /// 3 rows × 3 columns, three in a row wins.
    Small,
    /// 6 rows × 7 columns, four in a row wins.
    #[default]
    Standard,
}

impl GridShape {
    pub fn rows(self) -> usize {
        match self {
            GridShape::Small => 3,
            GridShape::Standard => 6,
        }
    }

    pub fn cols(self) -> usize {
        match self {
            GridShape::Small => 3,
            GridShape::Standard => 7,
        }
    }

    pub fn win_length(self) -> usize {
        match self {
            GridShape::Small => 3,
            GridShape::Standard => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Human,
    Ai,
}

/// Row, column steps for the four line directions: →, ↓, ↘, ↙.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    shape: GridShape,
    cells: [[Cell; MAX_COLS]; MAX_ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new(shape: GridShape) -> Self {
        Board {
            shape,
            cells: [[Cell::Empty; MAX_COLS]; MAX_ROWS],
        }
    }

    pub fn shape(&self) -> GridShape {
        self.shape
    }

    pub fn num_rows(&self) -> usize {
        self.shape.rows()
    }

    pub fn num_cols(&self) -> usize {
        self.shape.cols()
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, the last row is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Raw grid, top row first, for display.
    pub fn grid(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        let cols = self.num_cols();
        self.cells[..self.num_rows()].iter().map(move |row| &row[..cols])
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.num_cols() {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Row a piece dropped in `col` would land on, or `None` if the column is full.
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= self.num_cols() {
            return None;
        }
        (0..self.num_rows())
            .rev()
            .find(|&row| self.cells[row][col] == Cell::Empty)
    }

    /// One slot per column, left to right: the landing row, or `None` when full.
    pub fn playable_columns(&self) -> PlayableColumns {
        let mut slots = [None; MAX_COLS];
        for (col, slot) in slots.iter_mut().enumerate().take(self.num_cols()) {
            *slot = self.landing_row(col);
        }
        PlayableColumns {
            slots,
            len: self.num_cols(),
        }
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= self.num_cols() {
            return Err(MoveError::InvalidColumn {
                column: col,
                cols: self.num_cols(),
            });
        }
        let row = self.landing_row(col).ok_or(MoveError::ColumnFull(col))?;
        self.cells[row][col] = cell;
        Ok(row)
    }

    /// Remove the piece at (row, col), reverting a [`Board::drop_piece`].
    pub fn undo_drop(&mut self, row: usize, col: usize) {
        self.cells[row][col] = Cell::Empty;
    }

    /// Write `cell` at (row, col) and hand back a guard that clears it again
    /// when dropped. The caller must pass a landing row from
    /// [`Board::landing_row`] to keep pieces stacked from the bottom.
    pub fn place(&mut self, row: usize, col: usize, cell: Cell) -> Placement<'_> {
        debug_assert_eq!(self.landing_row(col), Some(row));
        self.cells[row][col] = cell;
        Placement {
            board: self,
            row,
            col,
        }
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.num_cols()).all(|col| self.is_column_full(col))
    }

    /// True if any run of `win_length` identical non-empty cells exists in a
    /// row, a column or either diagonal.
    pub fn is_win(&self) -> bool {
        let rows = self.num_rows() as isize;
        let cols = self.num_cols() as isize;
        let span = self.shape.win_length() as isize - 1;

        for row in 0..rows {
            for col in 0..cols {
                let cell = self.cells[row as usize][col as usize];
                if cell == Cell::Empty {
                    continue;
                }
                for &(dr, dc) in &DIRECTIONS {
                    let end_row = row + dr * span;
                    let end_col = col + dc * span;
                    if end_row >= rows || end_col < 0 || end_col >= cols {
                        continue;
                    }
                    let run = (1..=span).all(|i| {
                        self.cells[(row + dr * i) as usize][(col + dc * i) as usize] == cell
                    });
                    if run {
                        return true;
                    }
                }
            }
        }

        false
    }

    /// Full board with no winning run.
    pub fn is_draw(&self) -> bool {
        self.is_full() && !self.is_win()
    }
}

/// Landing rows for every column of a board, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayableColumns {
    slots: [Option<usize>; MAX_COLS],
    len: usize,
}

impl PlayableColumns {
    /// Landing row of `col`; `None` if the column is full or out of range.
    pub fn get(&self, col: usize) -> Option<usize> {
        self.slots[..self.len].get(col).copied().flatten()
    }

    /// `(column, landing row)` for every column, full ones included.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Option<usize>)> + '_ {
        self.slots[..self.len].iter().copied().enumerate()
    }

    /// `(column, landing row)` for the non-full columns only.
    pub fn legal(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.iter().filter_map(|(col, row)| row.map(|row| (col, row)))
    }
}

/// A single piece placed on a borrowed board. Dereferences to the board and
/// empties the cell again when it goes out of scope.
pub struct Placement<'a> {
    board: &'a mut Board,
    row: usize,
    col: usize,
}

impl Deref for Placement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.undo_drop(self.row, self.col);
    }
}

#[cfg(test)]
impl Board {
    /// Build a board from text rows, top first: `X` human, `O` AI, anything
    /// else empty. Whitespace is ignored. Gravity is not enforced.
    pub(crate) fn from_rows(shape: GridShape, rows: &[&str]) -> Self {
        let mut board = Board::new(shape);
        for (row, line) in rows.iter().enumerate() {
            let marks = line.chars().filter(|ch| !ch.is_whitespace());
            for (col, ch) in marks.enumerate() {
                board.cells[row][col] = match ch {
                    'X' => Cell::Human,
                    'O' => Cell::Ai,
                    _ => Cell::Empty,
                };
            }
        }
        board
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row][col] = cell;
    }
}
