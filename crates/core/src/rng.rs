//! RNG module - seeded shuffling for the board deal
//!
//! A small LCG keeps the core crate dependency-free and makes every deal
//! reproducible from its seed, which the tests rely on. The binary derives
//! the seed from wall-clock entropy so layouts differ run to run.

/// Linear congruential generator (Numerical Recipes constants).
#[derive(Debug, Clone)]
pub struct SessionRng {
    state: u32,
}

impl SessionRng {
    /// Create a new RNG with the given seed.
    ///
    /// A zero seed is remapped to 1 so the generator never degenerates.
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    /// Generate the next random u32.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        self.state
    }

    /// Generate a random value in `[0, max)`.
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Shuffle a slice in place (Fisher-Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Current generator state, usable as a seed for a follow-up session.
    pub fn state(&self) -> u32 {
        self.state
    }
}
