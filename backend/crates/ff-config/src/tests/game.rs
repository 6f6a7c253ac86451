use crate::{GameConfig, WallConfig};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err, ok};

#[test]
fn given_default_game_when_validate_then_ok() {
    assert_that!(GameConfig::default().validate(), ok(anything()));
}

#[test]
fn given_zero_duration_when_validate_then_error() {
    let game = GameConfig {
        duration_secs: 0,
        ..GameConfig::default()
    };

    assert_that!(game.validate(), err(anything()));
}

#[test]
fn given_no_collectibles_when_validate_then_error() {
    let game = GameConfig {
        collectibles: 0,
        ..GameConfig::default()
    };

    assert_that!(game.validate(), err(anything()));
}

#[test]
fn given_tiny_arena_when_validate_then_error_mentions_size() {
    let game = GameConfig {
        arena_width: 50,
        ..GameConfig::default()
    };

    let result = game.validate();

    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("50x400"));
}

#[test]
fn given_nan_pickup_radius_when_validate_then_error() {
    let game = GameConfig {
        pickup_radius: f64::NAN,
        ..GameConfig::default()
    };

    assert_that!(game.validate(), err(anything()));
}

#[test]
fn given_flat_wall_when_validate_then_error_names_index() {
    let game = GameConfig {
        walls: vec![
            WallConfig {
                x: 0.0,
                y: 0.0,
                width: 10.0,
                height: 10.0,
            },
            WallConfig {
                x: 100.0,
                y: 40.0,
                width: 0.0,
                height: 200.0,
            },
        ],
        ..GameConfig::default()
    };

    let result = game.validate();

    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("game.walls[1]"));
}
