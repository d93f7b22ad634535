#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(coverage_nightly, coverage(off))]

use anyhow::Result;
use mmc::{app::App, config::Config, logging::setup_logging};

/// The main entry point of the application.
///
/// Sets up logging, reads the session settings from the environment, and runs
/// frames until the configured frame limit is reached.
pub fn main() -> Result<()> {
    setup_logging();

    let config = Config::load()?;
    let mut app = App::new(config)?;

    while app.run() {}

    Ok(())
}
