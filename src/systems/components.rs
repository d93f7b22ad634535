use bevy_ecs::{component::Component, resource::Resource};
use glam::{IVec2, Vec2};
use strum_macros::{AsRefStr, Display};

use crate::{constants::PLAYER_START, direction::Direction};

/// The player character and everything the controller tracks about it.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Player {
    /// Real-valued grid coordinates, always inside the playfield.
    pub position: Vec2,
    pub facing: Direction,
    pub moving: bool,
    /// How long the player has gone without moving, in milliseconds.
    pub idle_ms: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            position: PLAYER_START,
            facing: Direction::Down,
            moving: false,
            idle_ms: 0.0,
        }
    }
}

/// Opaque identity of one muli incarnation. A respawned muli gets a new id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MuliId(pub u64);

/// Hands out [`MuliId`]s that are unique for the lifetime of a world.
#[derive(Resource, Debug, Default)]
pub struct MuliIds {
    next: u64,
}

impl MuliIds {
    pub fn allocate(&mut self) -> MuliId {
        let id = MuliId(self.next);
        self.next += 1;
        id
    }
}

/// The states of a muli's wandering cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum WanderState {
    /// About to start idling; resets the cooldown.
    PrepareIdle,
    /// Waiting out the cooldown.
    Idle,
    /// Deciding whether to move at all.
    Motivation,
    /// Picking which neighbouring cell to walk to.
    Direction,
    /// Walking toward the target cell.
    Moving,
}

/// Whether a muli is roaming or playing its death animation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Lifecycle {
    #[default]
    Alive,
    Dying {
        /// Death animation time left, in milliseconds.
        remaining_ms: f32,
    },
}

impl Lifecycle {
    pub fn is_dying(self) -> bool {
        matches!(self, Lifecycle::Dying { .. })
    }
}

/// A wandering non-player entity.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Muli {
    pub id: MuliId,
    pub position: Vec2,
    pub facing: Direction,
    pub state: WanderState,
    /// Idle time left before the next decision, in milliseconds.
    pub cooldown_ms: f32,
    /// Cell being walked to; only set while [`WanderState::Moving`].
    pub target: Option<Vec2>,
    pub lifecycle: Lifecycle,
}

impl Muli {
    /// A fresh muli standing on `cell`, about to start idling.
    pub fn spawn(id: MuliId, cell: IVec2) -> Self {
        Self {
            id,
            position: cell.as_vec2(),
            facing: Direction::Down,
            state: WanderState::PrepareIdle,
            cooldown_ms: 0.0,
            target: None,
            lifecycle: Lifecycle::Alive,
        }
    }

    pub fn is_dying(&self) -> bool {
        self.lifecycle.is_dying()
    }
}

/// Remembers which side a muli sprite last faced, so vertical movement keeps a stable look.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpriteSide(pub Option<Direction>);

/// Milliseconds elapsed since the previous frame.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub struct DeltaTime {
    pub millis: f32,
}

impl DeltaTime {
    pub fn from_millis(millis: f32) -> Self {
        Self { millis: millis.max(0.0) }
    }
}
