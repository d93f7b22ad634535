//! What the render layer needs from the simulation: sprite choices and stage coordinates.
//!
//! Nothing here draws. A [`FrameSnapshot`] is handed to whatever composites the
//! frame (the headless app just logs it).

use std::fmt;

use bevy_ecs::system::{Query, ResMut};
use glam::Vec2;

use crate::{
    constants::{SPRITE_CELL_OFFSET, STAGE_ORIGIN_X, STAGE_SIZE, STAND_IDLE_THRESHOLD_MS, TILE_SIZE},
    direction::Direction,
    random::{choose, GameRng},
    systems::components::{Muli, MuliId, Player, SpriteSide, WanderState},
};

/// Directory sprites are served from.
pub const SPRITE_ROOT: &str = "/elements/chara_move";

/// An animated sprite the render layer can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    PlayerGo(Direction),
    PlayerFace(Direction),
    PlayerStandFront,
    MuliGo(Direction),
    MuliDie(Direction),
}

impl Sprite {
    /// Asset path of the sprite, relative to the public root.
    pub fn path(&self) -> String {
        format!("{SPRITE_ROOT}/{self}.gif")
    }
}

impl fmt::Display for Sprite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sprite::PlayerGo(direction) => write!(f, "mmc_go_{direction}"),
            Sprite::PlayerFace(direction) => write!(f, "mmc_face_{direction}"),
            Sprite::PlayerStandFront => f.write_str("mmc_stand_front"),
            Sprite::MuliGo(side) => write!(f, "muli_go_{side}"),
            Sprite::MuliDie(side) => write!(f, "muli_die_{side}"),
        }
    }
}

/// Chooses the player's sprite: walking, facing, or standing after a long idle.
pub fn player_sprite(player: &Player) -> Sprite {
    if player.moving {
        Sprite::PlayerGo(player.facing)
    } else if player.idle_ms < STAND_IDLE_THRESHOLD_MS {
        Sprite::PlayerFace(player.facing)
    } else {
        Sprite::PlayerStandFront
    }
}

/// Chooses a muli's sprite. Muli art only exists for left and right, so
/// vertical facings reuse the remembered side.
pub fn muli_sprite(muli: &Muli, side: SpriteSide) -> Sprite {
    let side = if muli.facing.is_horizontal() {
        muli.facing
    } else {
        side.0.unwrap_or(Direction::Left)
    };

    if muli.is_dying() {
        Sprite::MuliDie(side)
    } else {
        Sprite::MuliGo(side)
    }
}

/// Maps a grid position to the top-left corner of its sprite on the stage.
pub fn stage_position(position: Vec2) -> Vec2 {
    let offset = (position + SPRITE_CELL_OFFSET) * TILE_SIZE;
    Vec2::new(STAGE_ORIGIN_X + offset.x, STAGE_SIZE.y / 2.0 + offset.y)
}

/// Keeps each muli's remembered sprite side in step with its facing.
///
/// A muli that has only ever walked vertically gets a random side the first
/// time one is needed.
pub fn sprite_side_system(mut rng: ResMut<GameRng>, mut mulis: Query<(&Muli, &mut SpriteSide)>) {
    for (muli, mut side) in mulis.iter_mut() {
        if muli.facing.is_horizontal() {
            if side.0 != Some(muli.facing) {
                side.0 = Some(muli.facing);
            }
        } else if side.0.is_none() {
            side.0 = choose(&mut *rng, &[Direction::Left, Direction::Right]);
        }
    }
}

/// Render-facing view of the player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerView {
    pub position: Vec2,
    pub stage_position: Vec2,
    pub facing: Direction,
    pub moving: bool,
    pub idle_ms: f32,
    pub sprite: Sprite,
}

impl From<&Player> for PlayerView {
    fn from(player: &Player) -> Self {
        Self {
            position: player.position,
            stage_position: stage_position(player.position),
            facing: player.facing,
            moving: player.moving,
            idle_ms: player.idle_ms,
            sprite: player_sprite(player),
        }
    }
}

/// Render-facing view of one muli.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MuliView {
    pub id: MuliId,
    pub position: Vec2,
    pub stage_position: Vec2,
    pub facing: Direction,
    pub state: WanderState,
    pub dying: bool,
    pub sprite: Sprite,
}

impl MuliView {
    pub fn new(muli: &Muli, side: SpriteSide) -> Self {
        Self {
            id: muli.id,
            position: muli.position,
            stage_position: stage_position(muli.position),
            facing: muli.facing,
            state: muli.state,
            dying: muli.is_dying(),
            sprite: muli_sprite(muli, side),
        }
    }
}

/// Everything drawn in one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSnapshot {
    pub frame: u64,
    pub player: PlayerView,
    pub mulis: Vec<MuliView>,
}

impl fmt::Display for FrameSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "player ({:.2}, {:.2}) {}",
            self.player.position.x, self.player.position.y, self.player.sprite
        )?;
        for muli in &self.mulis {
            write!(
                f,
                "; muli#{} ({:.2}, {:.2}) {} {}",
                muli.id.0, muli.position.x, muli.position.y, muli.state, muli.sprite
            )?;
        }
        Ok(())
    }
}
