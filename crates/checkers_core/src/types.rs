use serde::{Deserialize, Serialize};

/// Number of rows and columns on the board.
pub const ROWS: usize = 8;
pub const COLS: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    White,
}

impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::Red => Color::White,
            Color::White => Color::Red,
        }
    }

    pub fn idx(self) -> usize {
        match self {
            Color::Red => 0,
            Color::White => 1,
        }
    }

    /// Row delta of a forward step. Red starts at the bottom and moves up.
    pub fn forward(self) -> i8 {
        match self {
            Color::Red => -1,
            Color::White => 1,
        }
    }

    /// Row on which a man of this color is crowned.
    pub fn king_row(self) -> usize {
        match self {
            Color::Red => 0,
            Color::White => ROWS - 1,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Red => write!(f, "RED"),
            Color::White => write!(f, "WHITE"),
        }
    }
}

/// One checker. Pieces are plain values: cloning a board copies them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub row: usize,
    pub col: usize,
    pub king: bool,
}

impl Piece {
    pub fn new(color: Color, row: usize, col: usize) -> Self {
        assert_on_board(row, col);
        Self {
            color,
            row,
            col,
            king: false,
        }
    }

    pub fn new_king(color: Color, row: usize, col: usize) -> Self {
        Self {
            king: true,
            ..Self::new(color, row, col)
        }
    }

    pub fn make_king(&mut self) {
        self.king = true;
    }

    /// Diagonal deltas this piece may travel along, in generation order:
    /// up-left, up-right, then down-left, down-right.
    pub fn directions(&self) -> impl Iterator<Item = (i8, i8)> {
        static UP: [(i8, i8); 2] = [(-1, -1), (-1, 1)];
        static DOWN: [(i8, i8); 2] = [(1, -1), (1, 1)];

        let up = self.color == Color::Red || self.king;
        let down = self.color == Color::White || self.king;
        UP.iter()
            .filter(move |_| up)
            .chain(DOWN.iter().filter(move |_| down))
            .copied()
    }
}

/// Offset a square by a delta, returning `None` when it leaves the board.
pub fn offset(row: usize, col: usize, dr: i8, dc: i8) -> Option<(usize, usize)> {
    let r = row as i8 + dr;
    let c = col as i8 + dc;
    if (0..ROWS as i8).contains(&r) && (0..COLS as i8).contains(&c) {
        Some((r as usize, c as usize))
    } else {
        None
    }
}

/// Coordinates outside 0..8 are a contract violation, never clamped.
#[inline]
pub fn assert_on_board(row: usize, col: usize) {
    assert!(
        row < ROWS && col < COLS,
        "square ({row}, {col}) is off the board"
    );
}
