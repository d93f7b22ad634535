#![allow(dead_code)]

use std::collections::VecDeque;

use bevy_ecs::{entity::Entity, event::Events, world::World};
use glam::Vec2;
use mmc::{
    error::GameError,
    events::GameEvent,
    random::{GameRng, RandomSource},
    systems::{Bindings, DeltaTime, InputState, Lifecycle, Muli, MuliId, MuliIds, Player, SpriteSide, WanderState},
};

/// A random source that replays scripted values.
///
/// Once a script runs dry, `unit` returns 0.99 (so `chance` rolls fail) and
/// `below` returns 0.
#[derive(Debug, Default, Clone)]
pub struct ScriptedRandom {
    units: VecDeque<f32>,
    indices: VecDeque<usize>,
}

impl ScriptedRandom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_units(mut self, units: &[f32]) -> Self {
        self.units.extend(units.iter().copied());
        self
    }

    pub fn with_indices(mut self, indices: &[usize]) -> Self {
        self.indices.extend(indices.iter().copied());
        self
    }
}

impl RandomSource for ScriptedRandom {
    fn unit(&mut self) -> f32 {
        self.units.pop_front().unwrap_or(0.99)
    }

    fn below(&mut self, bound: usize) -> usize {
        self.indices.pop_front().unwrap_or(0).min(bound - 1)
    }
}

/// Creates a basic test world with required resources for ECS systems
pub fn create_test_world() -> World {
    create_test_world_with(ScriptedRandom::new())
}

pub fn create_test_world_with(rng: ScriptedRandom) -> World {
    let mut world = World::new();

    world.insert_resource(Events::<GameEvent>::default());
    world.insert_resource(Events::<GameError>::default());
    world.insert_resource(GameRng::new(rng));
    world.insert_resource(MuliIds::default());
    world.insert_resource(Bindings::default());
    world.insert_resource(InputState::default());
    world.insert_resource(DeltaTime::from_millis(16.0));

    world
}

pub fn set_delta(world: &mut World, millis: f32) {
    world.insert_resource(DeltaTime::from_millis(millis));
}

pub fn spawn_test_player(world: &mut World, position: Vec2) -> Entity {
    world
        .spawn(Player {
            position,
            ..Player::default()
        })
        .id()
}

/// A living muli at `position` in the given state.
pub fn test_muli(id: u64, position: Vec2, state: WanderState) -> Muli {
    Muli {
        id: MuliId(id),
        position,
        facing: mmc::direction::Direction::Down,
        state,
        cooldown_ms: 0.0,
        target: None,
        lifecycle: Lifecycle::Alive,
    }
}

pub fn spawn_test_muli(world: &mut World, muli: Muli) -> Entity {
    world.spawn((muli, SpriteSide::default())).id()
}

pub fn muli(world: &World, entity: Entity) -> Muli {
    *world.get::<Muli>(entity).expect("Muli should exist")
}

pub fn drain_game_events(world: &mut World) -> Vec<GameEvent> {
    world.resource_mut::<Events<GameEvent>>().drain().collect()
}

pub fn drain_errors(world: &mut World) -> Vec<GameError> {
    world.resource_mut::<Events<GameError>>().drain().collect()
}
