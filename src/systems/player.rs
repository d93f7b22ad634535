use bevy_ecs::{
    event::EventWriter,
    system::{Query, Res},
};

use crate::{
    constants::PLAYER_SPEED_PER_MS,
    direction::Direction,
    error::GameError,
    grid::clamp_to_grid,
    systems::{
        components::{DeltaTime, Player},
        input::{Bindings, InputState},
    },
};

/// Advances the player by one frame.
///
/// With a held direction the player turns to face it and slides along that
/// single axis by [`PLAYER_SPEED_PER_MS`] per millisecond, clamped to the
/// playfield. Without one the player stands still and accumulates idle time.
pub fn step_player(player: &Player, held: Option<Direction>, delta_ms: f32) -> Player {
    match held {
        Some(direction) => Player {
            position: clamp_to_grid(player.position + direction.as_vec2() * PLAYER_SPEED_PER_MS * delta_ms),
            facing: direction,
            moving: true,
            idle_ms: 0.0,
        },
        None => Player {
            moving: false,
            idle_ms: player.idle_ms + delta_ms,
            ..*player
        },
    }
}

/// Applies the held input to the single player entity.
pub fn player_movement_system(
    input: Res<InputState>,
    bindings: Res<Bindings>,
    delta_time: Res<DeltaTime>,
    mut players: Query<&mut Player>,
    mut errors: EventWriter<GameError>,
) {
    let mut player = match players.single_mut() {
        Ok(player) => player,
        Err(e) => {
            errors.write(GameError::InvalidState(format!(
                "No/multiple entities queried for player system: {}",
                e
            )));
            return;
        }
    };

    let held = input.held_direction(&bindings);
    let next = step_player(&player, held, delta_time.millis);

    if next.facing != player.facing {
        tracing::trace!(from = %player.facing, to = %next.facing, "Player turned");
    }
    *player = next;
}
