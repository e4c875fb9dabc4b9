use crate::{board::Board, types::*};

/// Destination square paired with the pieces captured on the way there.
pub type MoveEntry = ((usize, usize), Vec<Piece>);

/// Insertion-ordered mapping from destination to captured pieces.
///
/// Order is the discovery order of the generator, which the search relies on
/// for reproducible tie-breaks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidMoves {
    entries: Vec<MoveEntry>,
}

impl ValidMoves {
    pub fn get(&self, row: usize, col: usize) -> Option<&[Piece]> {
        self.entries
            .iter()
            .find(|(dest, _)| *dest == (row, col))
            .map(|(_, captured)| captured.as_slice())
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MoveEntry> {
        self.entries.iter()
    }

    pub fn destinations(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.entries.iter().map(|(dest, _)| *dest)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// A destination reached twice keeps the chain with more captures,
    /// the earlier one on ties, at its original position.
    fn record(&mut self, dest: (usize, usize), captured: Vec<Piece>) {
        match self.entries.iter_mut().find(|(d, _)| *d == dest) {
            Some((_, existing)) => {
                if captured.len() > existing.len() {
                    *existing = captured;
                }
            }
            None => self.entries.push((dest, captured)),
        }
    }
}

impl IntoIterator for ValidMoves {
    type Item = MoveEntry;
    type IntoIter = std::vec::IntoIter<MoveEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Generate every destination for `piece`, simple steps and jump chains alike.
///
/// Directions are visited in the piece's fixed order. A landing square is
/// recorded before the chains that continue from it.
pub fn valid_moves(board: &Board, piece: Piece) -> ValidMoves {
    let mut moves = ValidMoves::default();
    let mut captured = Vec::new();

    for (dr, dc) in piece.directions() {
        let Some((r, c)) = offset(piece.row, piece.col, dr, dc) else {
            continue;
        };
        if board.get_piece(r, c).is_none() {
            moves.record((r, c), Vec::new());
        } else {
            let from = (piece.row, piece.col);
            jump(board, piece, from, (dr, dc), &mut captured, &mut moves);
        }
    }
    moves
}

/// Try one jump from `from` along `dir`, then keep chaining from the landing.
fn jump(
    board: &Board,
    piece: Piece,
    from: (usize, usize),
    (dr, dc): (i8, i8),
    captured: &mut Vec<Piece>,
    moves: &mut ValidMoves,
) {
    let Some((mr, mc)) = offset(from.0, from.1, dr, dc) else {
        return;
    };
    let Some(victim) = board.get_piece(mr, mc) else {
        return;
    };
    if victim.color == piece.color || captured.contains(&victim) {
        return;
    }
    let Some(landing) = offset(from.0, from.1, 2 * dr, 2 * dc) else {
        return;
    };
    if !is_vacant(board, piece, landing) {
        return;
    }

    captured.push(victim);
    if landing != (piece.row, piece.col) {
        moves.record(landing, captured.clone());
    }
    for dir in piece.directions() {
        jump(board, piece, landing, dir, captured, moves);
    }
    captured.pop();
}

/// The moving piece's own start square counts as empty mid-chain. A king
/// may pass back over it, but it is never recorded as a destination.
fn is_vacant(board: &Board, piece: Piece, (row, col): (usize, usize)) -> bool {
    (row, col) == (piece.row, piece.col) || board.get_piece(row, col).is_none()
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
