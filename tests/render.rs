use bevy_ecs::system::RunSystemOnce;
use glam::Vec2;
use mmc::{
    direction::Direction,
    systems::{
        muli_sprite, player_sprite, sprite_side_system, stage_position, Lifecycle, Muli, Player, Sprite, SpriteSide,
        WanderState,
    },
};
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

mod common;

use common::{test_muli, ScriptedRandom};

#[test]
fn test_player_sprite_walking() {
    let player = Player {
        moving: true,
        facing: Direction::Left,
        ..Player::default()
    };
    assert_eq!(player_sprite(&player), Sprite::PlayerGo(Direction::Left));
    assert_eq!(player_sprite(&player).path(), "/elements/chara_move/mmc_go_left.gif");
}

#[test]
fn test_player_sprite_idle_faces_then_stands() {
    let player = Player {
        facing: Direction::Up,
        idle_ms: 1999.0,
        ..Player::default()
    };
    assert_eq!(player_sprite(&player), Sprite::PlayerFace(Direction::Up));

    let player = Player {
        idle_ms: 2000.0,
        ..player
    };
    assert_eq!(player_sprite(&player), Sprite::PlayerStandFront);
    assert_eq!(player_sprite(&player).to_string(), "mmc_stand_front");
}

#[test]
fn test_muli_sprite_uses_horizontal_facing() {
    let muli = Muli {
        facing: Direction::Right,
        ..test_muli(0, Vec2::ZERO, WanderState::Moving)
    };
    assert_eq!(muli_sprite(&muli, SpriteSide(Some(Direction::Left))), Sprite::MuliGo(Direction::Right));
}

#[test]
fn test_muli_sprite_remaps_vertical_facing() {
    let muli = Muli {
        facing: Direction::Up,
        ..test_muli(0, Vec2::ZERO, WanderState::Moving)
    };
    assert_eq!(muli_sprite(&muli, SpriteSide(Some(Direction::Right))), Sprite::MuliGo(Direction::Right));
}

#[test]
fn test_muli_sprite_dying() {
    let muli = Muli {
        facing: Direction::Left,
        lifecycle: Lifecycle::Dying { remaining_ms: 400.0 },
        ..test_muli(0, Vec2::ZERO, WanderState::Idle)
    };
    assert_eq!(muli_sprite(&muli, SpriteSide(None)).to_string(), "muli_die_left");
}

#[test]
fn test_stage_position() {
    assert_eq!(stage_position(Vec2::ZERO), Vec2::new(1620.0 + 70.0, 1620.0 + 250.0));
    assert_eq!(stage_position(Vec2::new(1.0, 2.0)), Vec2::new(1620.0 + 230.0, 1620.0 + 570.0));
}

#[test]
fn test_sprite_side_system_remembers_and_picks() {
    // Index 1 of [left, right] for the vertical muli's first pick.
    let mut world = common::create_test_world_with(ScriptedRandom::new().with_indices(&[1]));
    let horizontal = common::spawn_test_muli(
        &mut world,
        Muli {
            facing: Direction::Left,
            ..test_muli(0, Vec2::ZERO, WanderState::Moving)
        },
    );
    let vertical = common::spawn_test_muli(
        &mut world,
        Muli {
            facing: Direction::Down,
            ..test_muli(1, Vec2::ONE, WanderState::Moving)
        },
    );

    world
        .run_system_once(sprite_side_system)
        .expect("System should run successfully");

    assert_that(world.get::<SpriteSide>(horizontal).expect("side")).is_equal_to(&SpriteSide(Some(Direction::Left)));
    assert_that(world.get::<SpriteSide>(vertical).expect("side")).is_equal_to(&SpriteSide(Some(Direction::Right)));

    // A remembered side survives further vertical movement.
    world
        .run_system_once(sprite_side_system)
        .expect("System should run successfully");
    assert_that(world.get::<SpriteSide>(vertical).expect("side")).is_equal_to(&SpriteSide(Some(Direction::Right)));
}
