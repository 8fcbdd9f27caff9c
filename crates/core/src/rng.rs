//! RNG module - where new pieces come from
//!
//! The engine asks a [`PieceSource`] for every spawned piece. [`SimpleRng`]
//! draws uniformly from the seven kinds; [`FixedSequence`] replays a given
//! list, which makes whole games reproducible in tests.

use crate::types::{PieceKind, PIECE_COUNT};

/// Supplier of the next piece kind
pub trait PieceSource {
    fn next_piece(&mut self) -> PieceKind;
}

impl<S: PieceSource + ?Sized> PieceSource for Box<S> {
    fn next_piece(&mut self) -> PieceKind {
        (**self).next_piece()
    }
}

impl<S: PieceSource + ?Sized> PieceSource for &mut S {
    fn next_piece(&mut self) -> PieceKind {
        (**self).next_piece()
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // Low LCG bits have short periods
        (self.next_u32() >> 16) % max
    }
}

impl PieceSource for SimpleRng {
    fn next_piece(&mut self) -> PieceKind {
        PieceKind::ALL[self.next_range(PIECE_COUNT as u32) as usize]
    }
}

/// Replays a fixed list of pieces, cycling when it runs out
///
/// An empty list yields `PieceKind::I` forever.
#[derive(Debug, Clone)]
pub struct FixedSequence {
    pieces: Vec<PieceKind>,
    cursor: usize,
}

impl FixedSequence {
    pub fn new(pieces: impl IntoIterator<Item = PieceKind>) -> Self {
        Self {
            pieces: pieces.into_iter().collect(),
            cursor: 0,
        }
    }

    /// Same piece every time
    pub fn repeat(kind: PieceKind) -> Self {
        Self::new([kind])
    }
}

impl PieceSource for FixedSequence {
    fn next_piece(&mut self) -> PieceKind {
        let Some(&kind) = self.pieces.get(self.cursor) else {
            return PieceKind::I;
        };
        self.cursor = (self.cursor + 1) % self.pieces.len();
        kind
    }
}
