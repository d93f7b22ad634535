use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::clock::FrameClock;
use crate::config::Config;
use crate::error::GameResult;
use crate::events::GameEvent;
use crate::game::Game;
use crate::pilot::Autopilot;
use crate::random::GameRng;

/// Headless front end: paces frames, drives input, and reports what would be drawn.
pub struct App {
    pub game: Game,
    clock: FrameClock,
    pilot: Autopilot,
    config: Config,
    loop_time: Duration,
    caught: u64,
}

impl App {
    pub fn new(config: Config) -> GameResult<Self> {
        config.validate()?;

        let (rng, seed) = match config.seed {
            Some(seed) => (GameRng::seeded(seed), seed),
            None => GameRng::from_entropy(),
        };
        info!(seed, fps = config.fps, frames = ?config.frames, "Starting session");

        Ok(Self {
            game: Game::new(rng),
            clock: FrameClock::new(),
            pilot: Autopilot::default(),
            loop_time: Duration::from_secs(1) / config.fps,
            config,
            caught: 0,
        })
    }

    /// Runs a single frame. Returns `false` once the session is over.
    pub fn run(&mut self) -> bool {
        if self.config.frames.is_some_and(|limit| self.game.frame() >= limit) {
            info!(frames = self.game.frame(), caught = self.caught, "Session finished");
            return false;
        }

        let start = Instant::now();
        let delta_ms = self.clock.tick();

        self.pilot.drive(&mut self.game, delta_ms);
        for event in self.game.tick(delta_ms) {
            match event {
                GameEvent::MuliCaught { muli, cell } => {
                    self.caught += 1;
                    info!(muli = muli.0, x = cell.x, y = cell.y, total = self.caught, "Caught a muli");
                }
                GameEvent::MuliRespawned { muli, cell, .. } => {
                    debug!(muli = muli.0, x = cell.x, y = cell.y, "A muli appeared");
                }
            }
        }

        if self.game.frame() % self.config.report_every == 0 {
            if let Some(snapshot) = self.game.snapshot() {
                info!(frame = snapshot.frame, "{snapshot}");
            }
        }

        let elapsed = start.elapsed();
        if elapsed < self.loop_time {
            spin_sleep::sleep(self.loop_time - elapsed);
        } else {
            warn!("Game loop behind schedule by: {:?}", elapsed - self.loop_time);
        }

        true
    }
}
