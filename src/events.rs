use bevy_ecs::prelude::*;
use glam::IVec2;

use crate::systems::components::MuliId;

/// Things that happened during a frame, for consumers outside the simulation.
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// The player stepped onto a muli's cell.
    MuliCaught { muli: MuliId, cell: IVec2 },
    /// A muli finished dying and was replaced by a new one.
    MuliRespawned { previous: MuliId, muli: MuliId, cell: IVec2 },
}
