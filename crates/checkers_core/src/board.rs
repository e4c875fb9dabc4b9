use crate::movegen::{self, ValidMoves};
use crate::types::*;

/// One checkers position: the 8x8 grid plus material counters.
///
/// A `Board` is a value. `clone()` yields a fully independent position, which
/// is what lets the search explore sibling branches without sharing state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; COLS]; ROWS],
    red_left: u8,
    white_left: u8,
    red_kings: u8,
    white_kings: u8,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard opening: WHITE on rows 0-2, RED on rows 5-7, dark squares only.
    pub fn new() -> Self {
        let mut b = Board::empty();
        for row in 0..ROWS {
            for col in 0..COLS {
                if (row + col) % 2 == 0 {
                    continue;
                }
                if row < 3 {
                    b.place(Piece::new(Color::White, row, col));
                } else if row > 4 {
                    b.place(Piece::new(Color::Red, row, col));
                }
            }
        }
        b
    }

    pub fn empty() -> Self {
        Board {
            squares: [[None; COLS]; ROWS],
            red_left: 0,
            white_left: 0,
            red_kings: 0,
            white_kings: 0,
        }
    }

    /// Parses an 8x8 diagram: `.` empty, `r`/`w` men, `R`/`W` kings.
    /// Whitespace is ignored, so rows may be written one per line.
    pub fn from_layout(layout: &str) -> Self {
        let cells: Vec<char> = layout.chars().filter(|c| !c.is_whitespace()).collect();
        assert!(
            cells.len() == ROWS * COLS,
            "Invalid layout: expected {} squares, got {}",
            ROWS * COLS,
            cells.len()
        );

        let mut b = Board::empty();
        for (i, ch) in cells.into_iter().enumerate() {
            let (row, col) = (i / COLS, i % COLS);
            let piece = match ch {
                '.' => continue,
                'r' => Piece::new(Color::Red, row, col),
                'R' => Piece::new_king(Color::Red, row, col),
                'w' => Piece::new(Color::White, row, col),
                'W' => Piece::new_king(Color::White, row, col),
                _ => panic!("Invalid square char in layout: {}", ch),
            };
            b.place(piece);
        }
        b
    }

    /// Puts a piece on its own square, keeping the counters in step.
    pub fn place(&mut self, piece: Piece) {
        assert_on_board(piece.row, piece.col);
        assert!(
            self.squares[piece.row][piece.col].is_none(),
            "square ({}, {}) is already occupied",
            piece.row,
            piece.col
        );
        self.squares[piece.row][piece.col] = Some(piece);
        self.adjust_counts(piece, 1);
    }

    pub fn get_piece(&self, row: usize, col: usize) -> Option<Piece> {
        assert_on_board(row, col);
        self.squares[row][col]
    }

    /// All live pieces of `color` in row-major order.
    pub fn get_all_pieces(&self, color: Color) -> Vec<Piece> {
        self.squares
            .iter()
            .flatten()
            .flatten()
            .filter(|p| p.color == color)
            .copied()
            .collect()
    }

    /// Destinations reachable by `piece`, each with the pieces it would capture.
    pub fn get_valid_moves(&self, piece: Piece) -> ValidMoves {
        assert!(
            self.get_piece(piece.row, piece.col) == Some(piece),
            "piece {:?} is not on the board",
            piece
        );
        movegen::valid_moves(self, piece)
    }

    /// Relocates `piece` and crowns it on its far row. Captures are removed
    /// separately with [`Board::remove`]. Returns the piece as it now stands.
    pub fn move_piece(&mut self, piece: Piece, row: usize, col: usize) -> Piece {
        assert_on_board(row, col);
        assert!(
            self.get_piece(piece.row, piece.col) == Some(piece),
            "piece {:?} is not on the board",
            piece
        );
        assert!(
            self.squares[row][col].is_none(),
            "destination ({row}, {col}) is occupied"
        );

        self.squares[piece.row][piece.col] = None;
        let mut moved = Piece { row, col, ..piece };
        if row == piece.color.king_row() && !moved.king {
            moved.make_king();
            match moved.color {
                Color::Red => self.red_kings += 1,
                Color::White => self.white_kings += 1,
            }
        }
        self.squares[row][col] = Some(moved);
        moved
    }

    /// Removes captured pieces. A piece no longer on its square is skipped,
    /// even if another piece has since moved there.
    pub fn remove(&mut self, pieces: &[Piece]) {
        for piece in pieces {
            assert_on_board(piece.row, piece.col);
            match self.squares[piece.row][piece.col] {
                Some(p) if p == *piece => {
                    self.squares[piece.row][piece.col] = None;
                    self.adjust_counts(p, -1);
                }
                _ => {}
            }
        }
    }

    /// Material score, positive favoring WHITE. See [`crate::eval::evaluate`].
    pub fn evaluate(&self) -> i32 {
        crate::eval::evaluate(self)
    }

    /// A side with no pieces or no legal moves has lost.
    pub fn winner(&self) -> Option<Color> {
        if let Some(c) = self.elimination_winner() {
            return Some(c);
        }
        if !self.has_moves(Color::White) {
            return Some(Color::Red);
        }
        if !self.has_moves(Color::Red) {
            return Some(Color::White);
        }
        None
    }

    /// Like [`Board::winner`], but only the side to move can lose by being
    /// blocked.
    pub fn winner_to_move(&self, to_move: Color) -> Option<Color> {
        if let Some(c) = self.elimination_winner() {
            return Some(c);
        }
        if !self.has_moves(to_move) {
            return Some(to_move.other());
        }
        None
    }

    pub fn has_moves(&self, color: Color) -> bool {
        self.get_all_pieces(color)
            .into_iter()
            .any(|p| !movegen::valid_moves(self, p).is_empty())
    }

    pub fn red_left(&self) -> u8 {
        self.red_left
    }

    pub fn white_left(&self) -> u8 {
        self.white_left
    }

    pub fn red_kings(&self) -> u8 {
        self.red_kings
    }

    pub fn white_kings(&self) -> u8 {
        self.white_kings
    }

    pub fn pieces_left(&self, color: Color) -> u8 {
        match color {
            Color::Red => self.red_left,
            Color::White => self.white_left,
        }
    }

    pub fn kings(&self, color: Color) -> u8 {
        match color {
            Color::Red => self.red_kings,
            Color::White => self.white_kings,
        }
    }

    fn elimination_winner(&self) -> Option<Color> {
        if self.white_left == 0 {
            Some(Color::Red)
        } else if self.red_left == 0 {
            Some(Color::White)
        } else {
            None
        }
    }

    fn adjust_counts(&mut self, piece: Piece, delta: i8) {
        let apply = |n: &mut u8| {
            *n = n
                .checked_add_signed(delta)
                .expect("piece counters out of step with the grid");
        };
        match piece.color {
            Color::Red => {
                apply(&mut self.red_left);
                if piece.king {
                    apply(&mut self.red_kings);
                }
            }
            Color::White => {
                apply(&mut self.white_left);
                if piece.king {
                    apply(&mut self.white_kings);
                }
            }
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.squares {
            for sq in row {
                let ch = match sq {
                    None => '.',
                    Some(p) => match (p.color, p.king) {
                        (Color::Red, false) => 'r',
                        (Color::Red, true) => 'R',
                        (Color::White, false) => 'w',
                        (Color::White, true) => 'W',
                    },
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
