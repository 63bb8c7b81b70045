//! RNG module - uniform shape and color selection
//!
//! Each spawn draws a shape uniformly from the configured shape set and,
//! independently, a color uniformly from the fixed palette.
//!
//! Uses a simple LCG so that a seed fully determines the piece sequence.

use crate::types::{PieceColor, Shape};

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
    ///
    /// Uses the high bits; the low bits of a power-of-two LCG cycle with a
    /// short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0);
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Pick one element uniformly
    pub fn choose<T: Copy>(&mut self, items: &[T]) -> T {
        items[self.next_range(items.len() as u32) as usize]
    }
}

/// Draws the shape and color of each spawned piece
#[derive(Debug, Clone)]
pub struct Randomizer {
    shapes: Vec<Shape>,
    rng: SimpleRng,
}

impl Randomizer {
    /// Create a randomizer over the given shape set
    ///
    /// # Panics
    ///
    /// Panics if `shapes` is empty.
    pub fn new(seed: u32, shapes: &[Shape]) -> Self {
        assert!(!shapes.is_empty(), "randomizer needs at least one shape");
        Self {
            shapes: shapes.to_vec(),
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw the next `(shape, color)` pair
    pub fn draw(&mut self) -> (Shape, PieceColor) {
        let shape = self.rng.choose(&self.shapes);
        let color = self.rng.choose(&PieceColor::PALETTE);
        (shape, color)
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }
}

impl Default for Randomizer {
    fn default() -> Self {
        Self::new(1, &Shape::TETROMINOES)
    }
}
