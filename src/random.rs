//! Injectable randomness for the simulation.
//!
//! Every random decision the game makes (motivation rolls, direction picks,
//! spawn cells, sprite fallbacks, the autopilot) goes through [`RandomSource`],
//! so a session is reproducible from its seed and tests can script outcomes.

use bevy_ecs::resource::Resource;
use glam::IVec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::constants::GRID_SIZE;

/// A source of uniformly distributed random values.
pub trait RandomSource: Send + Sync {
    /// Returns a value in `[0, 1)`.
    fn unit(&mut self) -> f32;

    /// Returns an index in `0..bound`. `bound` is never zero.
    fn below(&mut self, bound: usize) -> usize;

    /// Returns true with probability `p`.
    fn chance(&mut self, p: f32) -> bool {
        self.unit() < p
    }
}

/// Picks one element uniformly, or `None` for an empty slice.
pub fn choose<T: Copy>(rng: &mut dyn RandomSource, items: &[T]) -> Option<T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.below(items.len())).copied()
}

/// Picks a cell uniformly over the whole grid.
pub fn random_cell(rng: &mut dyn RandomSource) -> IVec2 {
    let x = rng.below(GRID_SIZE.x as usize) as i32;
    let y = rng.below(GRID_SIZE.y as usize) as i32;
    IVec2::new(x, y)
}

/// A fast, seedable generator backed by [`SmallRng`].
pub struct SeededRandom {
    rng: SmallRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn unit(&mut self) -> f32 {
        self.rng.random::<f32>()
    }

    fn below(&mut self, bound: usize) -> usize {
        if bound <= 1 {
            return 0;
        }
        self.rng.random_range(0..bound)
    }
}

/// The random source shared by all systems in a [`Game`](crate::game::Game).
#[derive(Resource)]
pub struct GameRng(Box<dyn RandomSource>);

impl GameRng {
    pub fn new(source: impl RandomSource + 'static) -> Self {
        Self(Box::new(source))
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(SeededRandom::new(seed))
    }

    /// Draws a seed from the operating system. Returns the seed so it can be logged for replays.
    pub fn from_entropy() -> (Self, u64) {
        let seed = SmallRng::from_os_rng().random::<u64>();
        (Self::seeded(seed), seed)
    }
}

impl RandomSource for GameRng {
    fn unit(&mut self) -> f32 {
        self.0.unit()
    }

    fn below(&mut self, bound: usize) -> usize {
        self.0.below(bound)
    }
}
