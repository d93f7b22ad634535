//! Centralized error types for the game.
//!
//! The simulation itself never fails; these cover ECS consistency problems
//! reported by systems and the application shell around the simulation.

use bevy_ecs::event::Event;

/// Main error type for the game.
///
/// Systems that find the world in an unexpected shape write this as an event
/// instead of panicking; [`Game::tick`](crate::game::Game::tick) drains and logs them.
#[derive(thiserror::Error, Debug, Event)]
pub enum GameError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Errors raised while loading session settings.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read settings: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("fps must be between 1 and {max}, got {value}")]
    FrameRate { value: u32, max: u32 },

    #[error("report_every must be greater than zero")]
    ReportInterval,
}

impl From<figment::Error> for ConfigError {
    fn from(error: figment::Error) -> Self {
        ConfigError::Load(Box::new(error))
    }
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
