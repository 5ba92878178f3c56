//! RNG module - bag randomizer over catalog indices
//!
//! Each bag holds every catalog index exactly once, shuffled. Pieces are
//! drawn from the bag until it is empty, then a new bag is shuffled. With
//! the standard catalog this is the familiar 7-bag.
//!
//! A small LCG keeps the sequence deterministic for a given seed.

use crate::types::ShapeIndex;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce a degenerate first step
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Random value in `[0, max)`
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Fisher-Yates shuffle
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// Bag piece generator
#[derive(Debug, Clone)]
pub struct PieceQueue {
    bag: Vec<ShapeIndex>,
    bag_index: usize,
    rng: SimpleRng,
    seed: u32,
}

impl PieceQueue {
    /// Queue over catalog indices `0..kinds`
    ///
    /// # Panics
    ///
    /// Panics if `kinds` is zero.
    pub fn new(kinds: usize, seed: u32) -> Self {
        assert!(kinds > 0, "piece queue needs at least one kind");
        let mut queue = Self {
            bag: (0..kinds).collect(),
            bag_index: 0,
            rng: SimpleRng::new(seed),
            seed,
        };
        queue.refill_bag();
        queue
    }

    fn refill_bag(&mut self) {
        for (slot, index) in self.bag.iter_mut().zip(0..) {
            *slot = index;
        }
        self.rng.shuffle(&mut self.bag);
        self.bag_index = 0;
    }

    /// Next index without consuming it
    pub fn peek(&self) -> ShapeIndex {
        if self.bag_index < self.bag.len() {
            return self.bag[self.bag_index];
        }
        // Preview the next bag on a cloned RNG so `draw()` stays consistent.
        let mut preview = self.clone();
        preview.refill_bag();
        preview.bag[0]
    }

    /// Draw the next index
    pub fn draw(&mut self) -> ShapeIndex {
        if self.bag_index >= self.bag.len() {
            self.refill_bag();
        }
        let index = self.bag[self.bag_index];
        self.bag_index += 1;
        index
    }

    /// Number of distinct kinds per bag
    pub fn kinds(&self) -> usize {
        self.bag.len()
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Restart the sequence from the original seed
    pub fn reset(&mut self) {
        *self = Self::new(self.bag.len(), self.seed);
    }
}
