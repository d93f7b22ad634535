//! Stand-in for a human at the keyboard when the game runs headless.

use tracing::trace;

use crate::direction::Direction;
use crate::game::Game;
use crate::random::{choose, GameRng, RandomSource};
use crate::systems::{Bindings, Key};

/// Shortest time the autopilot keeps a decision, in milliseconds.
pub const MIN_SPAN_MS: f32 = 250.0;
/// Longest time the autopilot keeps a decision, in milliseconds.
pub const MAX_SPAN_MS: f32 = 1500.0;
/// Chance that a span is spent with no key held.
pub const IDLE_CHANCE: f32 = 0.25;

/// Decides what to hold next and for how long.
pub fn plan_span(rng: &mut dyn RandomSource) -> (Option<Direction>, f32) {
    let span = MIN_SPAN_MS + rng.unit() * (MAX_SPAN_MS - MIN_SPAN_MS);
    if rng.chance(IDLE_CHANCE) {
        (None, span)
    } else {
        (choose(rng, &Direction::DIRECTIONS), span)
    }
}

/// Presses and releases movement keys on a [`Game`] for random spans of time.
#[derive(Debug, Default)]
pub struct Autopilot {
    held: Option<Key>,
    remaining_ms: f32,
}

impl Autopilot {
    pub fn held(&self) -> Option<Key> {
        self.held
    }

    /// Updates the held key for a frame lasting `delta_ms`.
    pub fn drive(&mut self, game: &mut Game, delta_ms: f32) {
        self.remaining_ms -= delta_ms;
        if self.remaining_ms > 0.0 {
            return;
        }

        if let Some(key) = self.held.take() {
            game.key_up(key);
        }

        let (direction, span) = plan_span(&mut *game.world.resource_mut::<GameRng>());
        self.remaining_ms = span;

        let key = direction.and_then(|direction| game.world.resource::<Bindings>().key_for(direction));
        trace!(key = ?key, span_ms = span, "Autopilot planned span");
        if let Some(key) = key {
            game.key_down(key);
            self.held = Some(key);
        }
    }
}
