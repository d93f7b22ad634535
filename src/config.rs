use figment::{providers::Env, Figment};
use serde::Deserialize;

use crate::error::ConfigError;

/// Highest frame rate the headless loop accepts.
pub const MAX_FPS: u32 = 240;

/// Session settings, read from `MMC_*` environment variables.
///
/// Game rules are fixed in [`constants`](crate::constants); only how a session
/// is run can be changed here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Seed for the game's random source. Drawn from the OS when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Stop after this many frames. Runs until interrupted when absent.
    #[serde(default)]
    pub frames: Option<u64>,
    /// Target frame rate of the loop.
    #[serde(default = "default_fps")]
    pub fps: u32,
    /// Frames between two frame-snapshot reports.
    #[serde(default = "default_report_every")]
    pub report_every: u64,
}

fn default_fps() -> u32 {
    60
}

fn default_report_every() -> u64 {
    60
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            frames: None,
            fps: default_fps(),
            report_every: default_report_every(),
        }
    }
}

impl Config {
    /// Loads the configuration from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(Figment::new().merge(Env::prefixed("MMC_")))
    }

    /// Extracts and validates a configuration from any figment.
    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fps == 0 || self.fps > MAX_FPS {
            return Err(ConfigError::FrameRate {
                value: self.fps,
                max: MAX_FPS,
            });
        }
        if self.report_every == 0 {
            return Err(ConfigError::ReportInterval);
        }
        Ok(())
    }
}
