//! The muli pool: spawning the initial mulis and recycling the ones that die.

use bevy_ecs::{
    event::EventWriter,
    system::{Query, Res, ResMut},
    world::World,
};
use tracing::debug;

use crate::{
    constants::MULI_COUNT,
    events::GameEvent,
    grid::nearest_cell,
    random::{random_cell, GameRng, RandomSource},
    systems::components::{DeltaTime, Lifecycle, Muli, MuliId, MuliIds, SpriteSide},
};

/// Outcome of advancing a dying muli's death timer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeathTick {
    /// The muli is alive; nothing to do.
    Alive,
    /// Still dying, with the timer decremented.
    Dying(Muli),
    /// The timer ran out; the muli should be replaced.
    Expired,
}

/// Advances the death timer of `muli` by `delta_ms`.
pub fn tick_death(muli: &Muli, delta_ms: f32) -> DeathTick {
    match muli.lifecycle {
        Lifecycle::Alive => DeathTick::Alive,
        Lifecycle::Dying { remaining_ms } if remaining_ms <= delta_ms => DeathTick::Expired,
        Lifecycle::Dying { remaining_ms } => DeathTick::Dying(Muli {
            lifecycle: Lifecycle::Dying {
                remaining_ms: remaining_ms - delta_ms,
            },
            ..*muli
        }),
    }
}

/// Builds a brand new muli on a random cell.
pub fn fresh_muli(id: MuliId, rng: &mut dyn RandomSource) -> Muli {
    Muli::spawn(id, random_cell(rng))
}

/// Fills the world with the starting pool of [`MULI_COUNT`] mulis.
///
/// Requires the [`GameRng`] and [`MuliIds`] resources.
pub fn spawn_pool(world: &mut World) {
    for _ in 0..MULI_COUNT {
        let id = world.resource_mut::<MuliIds>().allocate();
        let muli = fresh_muli(id, &mut *world.resource_mut::<GameRng>());
        debug!(muli = ?muli.id, position = ?muli.position, "Spawned muli");
        world.spawn((muli, SpriteSide::default()));
    }
}

/// Counts down dying mulis and replaces expired ones in place.
///
/// The replacement keeps the entity slot but gets a new id, a random cell and
/// a reset wandering cycle.
pub fn respawn_system(
    delta_time: Res<DeltaTime>,
    mut rng: ResMut<GameRng>,
    mut ids: ResMut<MuliIds>,
    mut mulis: Query<(&mut Muli, &mut SpriteSide)>,
    mut events: EventWriter<GameEvent>,
) {
    for (mut muli, mut side) in mulis.iter_mut() {
        match tick_death(&muli, delta_time.millis) {
            DeathTick::Alive => {}
            DeathTick::Dying(next) => *muli = next,
            DeathTick::Expired => {
                let previous = muli.id;
                let replacement = fresh_muli(ids.allocate(), &mut *rng);
                let cell = nearest_cell(replacement.position);
                debug!(previous = ?previous, muli = ?replacement.id, cell = ?cell, "Muli respawned");

                *muli = replacement;
                *side = SpriteSide::default();
                events.write(GameEvent::MuliRespawned {
                    previous,
                    muli: replacement.id,
                    cell,
                });
            }
        }
    }
}
