//! RNG module - uniform next-piece draws
//!
//! Every draw picks one of the 7 kinds uniformly at random, independent of
//! history. Long droughts and repeats of a single kind are possible; that
//! matches the game's original feel and is deliberately not a 7-bag.
//!
//! The generator is a small seedable LCG so tests replay a fixed sequence.

use blockfall_types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // A zero state would stick at zero under multiplication alone.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Draws the next piece kind, uniformly from the full catalog.
#[derive(Debug, Clone)]
pub struct PieceRng {
    rng: SimpleRng,
}

impl PieceRng {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw one kind. Each of the 7 is equally likely on every call.
    pub fn draw(&mut self) -> PieceKind {
        let idx = self.rng.next_range(PieceKind::ALL.len() as u32);
        PieceKind::ALL[idx as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_replays_the_sequence() {
        let mut a = SimpleRng::new(12345);
        let mut b = SimpleRng::new(12345);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = SimpleRng::new(12345);
        let mut b = SimpleRng::new(54321);
        assert_ne!(a.next_u32(), b.next_u32());
    }

    #[test]
    fn zero_seed_is_usable() {
        let mut rng = SimpleRng::new(0);
        let first = rng.next_u32();
        assert_ne!(first, rng.next_u32());
    }

    #[test]
    fn draws_cover_the_whole_catalog() {
        let mut pieces = PieceRng::new(7);
        let mut seen = [false; 7];
        for _ in 0..1000 {
            let kind = pieces.draw();
            let idx = PieceKind::ALL.iter().position(|&k| k == kind).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s), "a kind never appeared: {:?}", seen);
    }

    #[test]
    fn draws_replay_for_a_fixed_seed() {
        let mut a = PieceRng::new(99);
        let mut b = PieceRng::new(99);
        for _ in 0..50 {
            assert_eq!(a.draw(), b.draw());
        }
    }
}
