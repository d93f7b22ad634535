//! Game core for mmc: a player catching wandering mulis on a 16x16 grid.

pub mod app;
pub mod clock;
pub mod config;
pub mod constants;
pub mod direction;
pub mod error;
pub mod events;
pub mod formatter;
pub mod game;
pub mod grid;
pub mod logging;
pub mod pilot;
pub mod random;
pub mod systems;
