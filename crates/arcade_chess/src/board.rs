use crate::log::MoveRecord;
use crate::types::*;
use thiserror::Error;

/// Cached king locations, refreshed whenever a king moves or is placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KingPositions {
    pub white: Option<Square>,
    pub black: Option<Square>,
}

impl KingPositions {
    fn get(&self, c: Color) -> Option<Square> {
        match c {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    fn set(&mut self, c: Color, sq: Option<Square>) {
        match c {
            Color::White => self.white = sq,
            Color::Black => self.black = sq,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlacementError {
    #[error("expected 8 ranks, found {0}")]
    RankCount(usize),
    #[error("invalid piece char '{0}'")]
    BadPiece(char),
    #[error("rank {rank} describes {files} files")]
    FileCount { rank: usize, files: usize },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
    kings: KingPositions,
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard starting layout.
    pub fn new() -> Self {
        let mut b = Board::empty();

        // Back ranks
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            b.place(Square::new(0, col as u8), Some(Piece::new(Color::Black, kind)));
            b.place(Square::new(7, col as u8), Some(Piece::new(Color::White, kind)));
        }
        // Pawns
        for col in 0..8 {
            b.place(Square::new(1, col), Some(Piece::new(Color::Black, PieceKind::Pawn)));
            b.place(Square::new(6, col), Some(Piece::new(Color::White, PieceKind::Pawn)));
        }
        b
    }

    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
            kings: KingPositions {
                white: None,
                black: None,
            },
        }
    }

    /// Rebuild the standard starting layout in place.
    pub fn reset(&mut self) {
        *self = Board::new();
    }

    /// Parse the piece-placement field of a FEN string. The first rank listed
    /// lands on row 0.
    pub fn from_placement(placement: &str) -> Result<Self, PlacementError> {
        let ranks: Vec<&str> = placement.trim().split('/').collect();
        if ranks.len() != 8 {
            return Err(PlacementError::RankCount(ranks.len()));
        }

        let mut board = Board::empty();
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut col: usize = 0;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    col += d as usize;
                } else {
                    let color = if ch.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let kind = match ch.to_ascii_lowercase() {
                        'p' => PieceKind::Pawn,
                        'n' => PieceKind::Knight,
                        'b' => PieceKind::Bishop,
                        'r' => PieceKind::Rook,
                        'q' => PieceKind::Queen,
                        'k' => PieceKind::King,
                        _ => return Err(PlacementError::BadPiece(ch)),
                    };
                    if col >= 8 {
                        return Err(PlacementError::FileCount {
                            rank: row,
                            files: col + 1,
                        });
                    }
                    board.place(Square::new(row as u8, col as u8), Some(Piece { color, kind }));
                    col += 1;
                }
            }
            if col != 8 {
                return Err(PlacementError::FileCount {
                    rank: row,
                    files: col,
                });
            }
        }
        Ok(board)
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.row as usize][sq.col as usize]
    }

    /// Raw setter. Keeps the king cache in step with what was written.
    pub fn place(&mut self, sq: Square, pc: Option<Piece>) {
        if let Some(old) = self.piece_at(sq)
            && old.kind == PieceKind::King
            && self.kings.get(old.color) == Some(sq)
        {
            self.kings.set(old.color, None);
        }
        if let Some(p) = pc
            && p.kind == PieceKind::King
        {
            self.kings.set(p.color, Some(sq));
        }
        self.squares[sq.row as usize][sq.col as usize] = pc;
    }

    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    pub fn king_square(&self, c: Color) -> Option<Square> {
        self.kings.get(c)
    }

    pub fn kings(&self) -> KingPositions {
        self.kings
    }

    /// Every occupied square holding a piece of `c`, row by row.
    pub fn pieces(&self, c: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Some(pc) if pc.color == c => Some((sq, pc)),
            _ => None,
        })
    }

    /// Move whatever stands on `from` to `to`, capturing anything there.
    /// No legality is checked; callers validate first.
    ///
    /// # Panics
    /// Panics if `from` is empty.
    pub fn commit_move(&mut self, from: Square, to: Square) -> MoveRecord {
        let moved = self.piece_at(from).expect("no piece on from-square");
        let captured = self.piece_at(to).map(|pc| pc.kind);

        self.place(from, None);
        self.place(to, Some(moved));

        MoveRecord {
            color: moved.color,
            kind: moved.kind,
            from,
            to,
            captured,
        }
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
