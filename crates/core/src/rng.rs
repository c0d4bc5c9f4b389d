//! RNG module - piece generation
//!
//! Each generated piece gets a symbol sampled uniformly from the four-piece
//! alphabet and the next id of a monotonically increasing counter.
//!
//! Uses a simple LCG so that a seed fully determines the piece sequence.

use crate::types::{Piece, PieceKind};

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
    /// Uses the high bits; the low bits of a power-of-two LCG cycle with a short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

/// Piece factory: uniform symbol, unique increasing id.
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    rng: SimpleRng,
    next_id: u32,
}

impl PieceGenerator {
    /// Create a generator whose ids start at 0
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            next_id: 0,
        }
    }

    /// Produce the next piece, advancing the id counter
    pub fn generate(&mut self) -> Piece {
        let kind = PieceKind::ALL[self.rng.next_range(PieceKind::ALL.len() as u32) as usize];
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        Piece::new(kind, id)
    }

    /// Id the next generated piece will carry
    pub fn next_id(&self) -> u32 {
        self.next_id
    }
}

impl Default for PieceGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_zero_seed_is_usable() {
        let mut rng = SimpleRng::new(0);
        assert_ne!(rng.next_u32(), rng.next_u32());
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(99);
        for _ in 0..1000 {
            assert!(rng.next_range(4) < 4);
        }
    }

    #[test]
    fn test_ids_start_at_zero_and_increase() {
        let mut generator = PieceGenerator::new(7);
        assert_eq!(generator.next_id(), 0);

        let ids: Vec<u32> = (0..10).map(|_| generator.generate().id).collect();
        assert_eq!(ids, (0..10).collect::<Vec<_>>());
        assert_eq!(generator.next_id(), 10);
    }

    #[test]
    fn test_every_symbol_is_generated() {
        let mut generator = PieceGenerator::new(12345);
        let mut seen = [false; 4];
        for _ in 0..200 {
            let piece = generator.generate();
            let slot = PieceKind::ALL.iter().position(|k| *k == piece.kind).unwrap();
            seen[slot] = true;
        }
        assert!(seen.iter().all(|s| *s), "Missing symbols: {:?}", seen);
    }

    #[test]
    fn test_same_seed_same_pieces() {
        let mut a = PieceGenerator::new(42);
        let mut b = PieceGenerator::new(42);
        for _ in 0..50 {
            assert_eq!(a.generate(), b.generate());
        }
    }
}
