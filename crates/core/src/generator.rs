//! Generator module - random pieces with one piece of lookahead
//!
//! Each generated piece picks a kind uniformly from the catalog and turns its
//! catalog shape by a uniformly chosen number of quarter turns. The generator
//! always holds the upcoming piece so it can be previewed before it spawns.

use rand::Rng;

use crate::shapes::{get_shape, rotate, Shape};
use crate::types::{PieceKind, PIECE_KIND_COUNT};

/// A piece kind together with the orientation it was generated in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    /// Quarter turns applied to the catalog shape
    pub turns: u8,
}

impl Piece {
    /// Catalog piece of `kind` turned `turns` quarter turns clockwise
    pub fn new(kind: PieceKind, turns: u8) -> Self {
        let turns = turns % 4;
        Self {
            kind,
            shape: rotate(&get_shape(kind), turns as u32),
            turns,
        }
    }
}

/// Draw a random piece from `rng`
pub fn random_piece<R: Rng + ?Sized>(rng: &mut R) -> Piece {
    let kind = PieceKind::ALL[rng.gen_range(0..PIECE_KIND_COUNT)];
    let turns = rng.gen_range(0..4u8);
    Piece::new(kind, turns)
}

/// One-piece lookahead generator
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    upcoming: Piece,
}

impl PieceGenerator {
    /// Create a generator holding a freshly drawn upcoming piece
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            upcoming: random_piece(rng),
        }
    }

    /// Peek at the piece that the next call to [`PieceGenerator::next`] returns
    pub fn upcoming(&self) -> &Piece {
        &self.upcoming
    }

    /// Hand out the upcoming piece and draw a new one in its place
    pub fn next<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Piece {
        std::mem::replace(&mut self.upcoming, random_piece(rng))
    }
}
