use mmc::{
    app::App,
    config::Config,
    error::{ConfigError, GameError},
    formatter::get_tick_count,
};
use speculoos::prelude::*;

#[test]
fn test_session_stops_at_frame_limit() {
    let config = Config {
        seed: Some(3),
        frames: Some(5),
        fps: 240,
        report_every: 2,
    };
    let mut app = App::new(config).expect("Config is valid");
    let ticks_before = get_tick_count();

    let mut frames = 0;
    while app.run() {
        frames += 1;
        assert!(frames <= 5, "Session ran past its frame limit");
    }

    assert_that(&frames).is_equal_to(5);
    assert_that(&app.game.frame()).is_equal_to(5);
    assert!(get_tick_count() >= ticks_before + 5);
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = Config {
        fps: 0,
        ..Config::default()
    };
    assert!(matches!(
        App::new(config),
        Err(GameError::Config(ConfigError::FrameRate { value: 0, .. }))
    ));
}
