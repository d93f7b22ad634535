//! This module contains the main game logic and state.

use bevy_ecs::event::Events;
use bevy_ecs::schedule::{ExecutorKind, IntoScheduleConfigs, Schedule};
use bevy_ecs::world::World;
use tracing::{debug, error};

use crate::error::GameError;
use crate::events::GameEvent;
use crate::formatter;
use crate::random::GameRng;
use crate::systems::{
    collision_system, muli_wander_system, player_movement_system, respawn_system, spawn_pool, sprite_side_system,
    Bindings, DeltaTime, FrameSnapshot, InputState, Key, Muli, MuliIds, MuliView, Player, PlayerView, SpriteSide,
};

/// The `Game` struct is the main entry point for the simulation.
///
/// It owns the ECS world (the player, the muli pool and the shared resources)
/// and the schedule that advances it one frame at a time. Input is fed in
/// through [`Game::key_down`] and [`Game::key_up`]; rendering reads
/// [`Game::snapshot`].
pub struct Game {
    pub world: World,
    pub schedule: Schedule,
    frame: u64,
}

impl Game {
    pub fn new(rng: GameRng) -> Game {
        let mut world = World::default();
        let mut schedule = Schedule::default();

        world.init_resource::<Events<GameEvent>>();
        world.init_resource::<Events<GameError>>();

        world.insert_resource(rng);
        world.insert_resource(MuliIds::default());
        world.insert_resource(Bindings::default());
        world.insert_resource(InputState::default());
        world.insert_resource(DeltaTime::default());

        world.spawn(Player::default());
        spawn_pool(&mut world);

        schedule.set_executor_kind(ExecutorKind::SingleThreaded);
        schedule.add_systems(
            (
                player_movement_system,
                muli_wander_system,
                respawn_system,
                collision_system,
                sprite_side_system,
            )
                .chain(),
        );

        Game {
            world,
            schedule,
            frame: 0,
        }
    }

    /// Advances the simulation by one frame.
    ///
    /// # Arguments
    ///
    /// * `delta_ms` - Time since the previous frame, in milliseconds. Negative values are treated as zero.
    ///
    /// # Returns
    ///
    /// The events produced during the frame, in the order they happened.
    pub fn tick(&mut self, delta_ms: f32) -> Vec<GameEvent> {
        self.world.insert_resource(DeltaTime::from_millis(delta_ms));
        self.schedule.run(&mut self.world);
        self.frame += 1;
        formatter::increment_tick();

        for e in self.world.resource_mut::<Events<GameError>>().drain() {
            error!(frame = self.frame, "{e}");
        }

        self.world.resource_mut::<Events<GameEvent>>().drain().collect()
    }

    /// Number of frames simulated so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Registers a key press. Pressing a movement key also wakes the player up.
    pub fn key_down(&mut self, key: Key) {
        if self.world.resource::<Bindings>().direction(key).is_none() {
            return;
        }

        if self.world.resource_mut::<InputState>().press(key) {
            debug!(key = key.as_ref(), "Key down");
        }

        let mut players = self.world.query::<&mut Player>();
        for mut player in players.iter_mut(&mut self.world) {
            player.idle_ms = 0.0;
        }
    }

    pub fn key_up(&mut self, key: Key) {
        self.world.resource_mut::<InputState>().release(key);
    }

    pub fn player(&mut self) -> Option<Player> {
        let mut players = self.world.query::<&Player>();
        players.single(&self.world).ok().copied()
    }

    /// All mulis, ordered by entity so the order is stable across frames.
    pub fn mulis(&mut self) -> Vec<Muli> {
        let mut mulis = self.world.query::<(bevy_ecs::entity::Entity, &Muli)>();
        let mut all: Vec<_> = mulis.iter(&self.world).map(|(entity, muli)| (entity, *muli)).collect();
        all.sort_by_key(|(entity, _)| *entity);
        all.into_iter().map(|(_, muli)| muli).collect()
    }

    /// Captures what the render layer should draw for the current frame.
    pub fn snapshot(&mut self) -> Option<FrameSnapshot> {
        let player = self.player()?;

        let mut query = self.world.query::<(bevy_ecs::entity::Entity, &Muli, &SpriteSide)>();
        let mut mulis: Vec<_> = query
            .iter(&self.world)
            .map(|(entity, muli, side)| (entity, MuliView::new(muli, *side)))
            .collect();
        mulis.sort_by_key(|(entity, _)| *entity);

        Some(FrameSnapshot {
            frame: self.frame,
            player: PlayerView::from(&player),
            mulis: mulis.into_iter().map(|(_, view)| view).collect(),
        })
    }
}
