use bevy_ecs::{
    event::EventWriter,
    system::Query,
};
use glam::Vec2;
use tracing::debug;

use crate::{
    constants::DYING_TIME_MS,
    error::GameError,
    events::GameEvent,
    grid::nearest_cell,
    systems::components::{Lifecycle, Muli, Player},
};

/// Returns whether two positions round to the same grid cell.
pub fn same_cell(a: Vec2, b: Vec2) -> bool {
    nearest_cell(a) == nearest_cell(b)
}

/// Starts the death animation of a living muli that shares the player's cell.
///
/// Returns `None` when nothing changes: the muli is elsewhere or already dying.
pub fn catch_muli(muli: &Muli, player_position: Vec2) -> Option<Muli> {
    if muli.is_dying() || !same_cell(muli.position, player_position) {
        return None;
    }

    Some(Muli {
        lifecycle: Lifecycle::Dying {
            remaining_ms: DYING_TIME_MS,
        },
        ..*muli
    })
}

/// Marks every muli standing on the player's cell as dying.
///
/// Runs after the player and the mulis have moved, so a catch is decided on
/// this frame's positions. Any number of mulis may be caught in one frame.
pub fn collision_system(
    players: Query<&Player>,
    mut mulis: Query<&mut Muli>,
    mut events: EventWriter<GameEvent>,
    mut errors: EventWriter<GameError>,
) {
    let player_position = match players.single() {
        Ok(player) => player.position,
        Err(e) => {
            errors.write(GameError::InvalidState(format!(
                "No/multiple entities queried for collision system: {}",
                e
            )));
            return;
        }
    };

    for mut muli in mulis.iter_mut() {
        if let Some(caught) = catch_muli(&muli, player_position) {
            let cell = nearest_cell(caught.position);
            debug!(muli = ?caught.id, state = %caught.state, cell = ?cell, "Muli caught");
            *muli = caught;
            events.write(GameEvent::MuliCaught { muli: caught.id, cell });
        }
    }
}
