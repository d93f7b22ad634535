use bevy_ecs::system::RunSystemOnce;
use glam::{IVec2, Vec2};
use mmc::{
    constants::DYING_TIME_MS,
    events::GameEvent,
    systems::{catch_muli, collision_system, same_cell, Lifecycle, Muli, MuliId, WanderState},
};
use speculoos::prelude::*;

mod common;

use common::test_muli;

#[test]
fn test_same_cell_rounds_both_positions() {
    assert_that(&same_cell(Vec2::new(3.4, 3.0), Vec2::new(2.6, 3.2))).is_true();
    assert_that(&same_cell(Vec2::new(3.5, 3.0), Vec2::new(3.4, 3.0))).is_false();
    assert_that(&same_cell(Vec2::new(0.0, 0.0), Vec2::new(0.49, 0.49))).is_true();
}

#[test]
fn test_catch_on_shared_cell() {
    let muli = test_muli(7, Vec2::new(3.0, 3.0), WanderState::Idle);
    let caught = catch_muli(&muli, Vec2::new(3.0, 3.0)).expect("Muli should be caught");

    assert_that(&caught.lifecycle).is_equal_to(Lifecycle::Dying {
        remaining_ms: DYING_TIME_MS,
    });
    assert_that(&caught.id).is_equal_to(MuliId(7));
}

#[test]
fn test_catch_ignores_other_cells() {
    let muli = test_muli(0, Vec2::new(3.0, 3.0), WanderState::Idle);
    assert_that(&catch_muli(&muli, Vec2::new(4.0, 3.0))).is_none();
}

#[test]
fn test_catch_ignores_dying_mulis() {
    let muli = Muli {
        lifecycle: Lifecycle::Dying { remaining_ms: 300.0 },
        ..test_muli(0, Vec2::new(3.0, 3.0), WanderState::Idle)
    };
    assert_that(&catch_muli(&muli, Vec2::new(3.0, 3.0))).is_none();
}

#[test]
fn test_catch_overrides_any_state() {
    let muli = Muli {
        target: Some(Vec2::new(3.0, 4.0)),
        ..test_muli(0, Vec2::new(3.0, 3.3), WanderState::Moving)
    };
    let caught = catch_muli(&muli, Vec2::new(2.8, 3.0)).expect("Muli should be caught");
    assert_that(&caught.is_dying()).is_true();
}

#[test]
fn test_collision_system_marks_every_muli_on_the_cell() {
    let mut world = common::create_test_world();
    common::spawn_test_player(&mut world, Vec2::new(3.0, 3.0));
    let a = common::spawn_test_muli(&mut world, test_muli(0, Vec2::new(3.0, 3.0), WanderState::Idle));
    let b = common::spawn_test_muli(&mut world, test_muli(1, Vec2::new(3.2, 2.7), WanderState::Motivation));
    let c = common::spawn_test_muli(&mut world, test_muli(2, Vec2::new(5.0, 3.0), WanderState::Idle));

    world
        .run_system_once(collision_system)
        .expect("System should run successfully");

    assert_that(&common::muli(&world, a).is_dying()).is_true();
    assert_that(&common::muli(&world, b).is_dying()).is_true();
    assert_that(&common::muli(&world, c).is_dying()).is_false();

    let events = common::drain_game_events(&mut world);
    assert_that(&events).has_length(2);
    assert_that(&events).contains(GameEvent::MuliCaught {
        muli: MuliId(0),
        cell: IVec2::new(3, 3),
    });
}

#[test]
fn test_collision_system_does_not_restart_death_timer() {
    let mut world = common::create_test_world();
    common::spawn_test_player(&mut world, Vec2::new(3.0, 3.0));
    let dying = common::spawn_test_muli(
        &mut world,
        Muli {
            lifecycle: Lifecycle::Dying { remaining_ms: 120.0 },
            ..test_muli(0, Vec2::new(3.0, 3.0), WanderState::Idle)
        },
    );

    world
        .run_system_once(collision_system)
        .expect("System should run successfully");

    assert_that(&common::muli(&world, dying).lifecycle).is_equal_to(Lifecycle::Dying { remaining_ms: 120.0 });
    assert_that(&common::drain_game_events(&mut world)).is_empty();
}
