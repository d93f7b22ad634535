//! The wandering cycle every muli runs while alive.
//!
//! ```text
//! prepare_idle -> idle --(cooldown over)--> motivation --(70%)--> direction -> moving
//!      ^                                        |                               |
//!      +------------------(30%)-----------------+<--------(arrived)-------------+
//! ```

use bevy_ecs::system::{Query, Res, ResMut};
use smallvec::SmallVec;
use tracing::{trace, warn};

use crate::{
    constants::{ARRIVAL_EPSILON, IDLE_COOLDOWN_MS, MOTIVATION_SKIP_CHANCE, MULI_SPEED, TILE_SIZE},
    direction::Direction,
    grid::{contains_cell, nearest_cell},
    random::{choose, GameRng, RandomSource},
    systems::components::{DeltaTime, Muli, WanderState},
};

/// Directions a muli standing at `position` can step in without leaving the grid.
pub fn open_directions(position: glam::Vec2) -> SmallVec<[Direction; 4]> {
    let cell = nearest_cell(position);
    Direction::DIRECTIONS
        .into_iter()
        .filter(|direction| contains_cell(cell + direction.as_ivec2()))
        .collect()
}

/// Moves `current` toward `target` by at most `step`, never past it.
fn approach(current: f32, target: f32, step: f32) -> f32 {
    if current < target {
        (current + step).min(target)
    } else if current > target {
        (current - step).max(target)
    } else {
        current
    }
}

/// Advances one muli's wandering cycle by one frame.
///
/// Dying mulis are returned untouched; the death timer belongs to the respawn system.
pub fn advance_muli(muli: &Muli, delta_ms: f32, rng: &mut dyn RandomSource) -> Muli {
    if muli.is_dying() {
        return *muli;
    }

    match muli.state {
        WanderState::PrepareIdle => Muli {
            state: WanderState::Idle,
            cooldown_ms: IDLE_COOLDOWN_MS,
            ..*muli
        },
        WanderState::Idle => {
            let cooldown_ms = muli.cooldown_ms - delta_ms;
            if cooldown_ms <= 0.0 {
                Muli {
                    state: WanderState::Motivation,
                    cooldown_ms: 0.0,
                    ..*muli
                }
            } else {
                Muli { cooldown_ms, ..*muli }
            }
        }
        WanderState::Motivation => {
            let state = if rng.chance(MOTIVATION_SKIP_CHANCE) {
                WanderState::PrepareIdle
            } else {
                WanderState::Direction
            };
            Muli { state, ..*muli }
        }
        WanderState::Direction => {
            let options = open_directions(muli.position);
            // A 1x1 grid is the only way to have no options.
            let Some(direction) = choose(rng, &options) else {
                return Muli {
                    state: WanderState::PrepareIdle,
                    ..*muli
                };
            };
            let target = (nearest_cell(muli.position) + direction.as_ivec2()).as_vec2();
            Muli {
                state: WanderState::Moving,
                facing: direction,
                target: Some(target),
                ..*muli
            }
        }
        WanderState::Moving => {
            let Some(target) = muli.target else {
                warn!(muli = ?muli.id, "Muli moving without a target, recovering");
                return Muli {
                    state: WanderState::Motivation,
                    ..*muli
                };
            };

            let step = MULI_SPEED * TILE_SIZE * delta_ms;
            let mut position = glam::Vec2::new(
                approach(muli.position.x, target.x, step),
                approach(muli.position.y, target.y, step),
            );

            if (position - target).abs().cmplt(glam::Vec2::splat(ARRIVAL_EPSILON)).all() {
                position = target;
                Muli {
                    position,
                    state: WanderState::Motivation,
                    target: None,
                    ..*muli
                }
            } else {
                Muli { position, ..*muli }
            }
        }
    }
}

/// Runs the wandering cycle for every muli.
pub fn muli_wander_system(delta_time: Res<DeltaTime>, mut rng: ResMut<GameRng>, mut mulis: Query<&mut Muli>) {
    for mut muli in mulis.iter_mut() {
        let next = advance_muli(&muli, delta_time.millis, &mut *rng);
        if next.state != muli.state {
            trace!(muli = ?muli.id, from = %muli.state, to = %next.state, "Muli state changed");
        }
        if *muli != next {
            *muli = next;
        }
    }
}
