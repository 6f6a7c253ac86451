use crate::tests::{far_coins, settings};
use crate::{Direction, GameSession, GameSettings, GameStatus, Point, Rect};

use googletest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn given_seeded_rng_when_new_game_then_coins_placed_inside_arena() {
    // Given
    let mut rng = StdRng::seed_from_u64(7);

    // When
    let game = GameSession::new(settings(), Vec::new(), &mut rng);

    // Then
    assert_that!(game.collectibles().len(), eq(5));
    assert_that!(game.target(), eq(5));
    for coin in game.collectibles() {
        assert_that!(coin.x, ge(0.0));
        assert_that!(coin.x, lt(370.0));
        assert_that!(coin.y, ge(0.0));
        assert_that!(coin.y, lt(370.0));
    }
}

#[test]
fn given_new_game_when_inspected_then_player_at_start_with_full_clock() {
    let game = GameSession::with_collectibles(settings(), Vec::new(), far_coins(5));

    assert_that!(game.player(), eq(Point::new(180.0, 180.0)));
    assert_that!(game.status(), eq(GameStatus::Playing));
    assert_that!(game.clock(), eq("1:00"));
    assert_that!(game.score(), eq(0));
}

#[test]
fn given_player_when_moving_right_then_position_advances_by_step() {
    let mut game = GameSession::with_collectibles(settings(), Vec::new(), far_coins(5));

    game.move_player(Direction::Right);

    assert_that!(game.player(), eq(Point::new(190.0, 180.0)));
}

#[test]
fn given_player_at_edge_when_moving_out_then_position_is_clamped() {
    // Given
    let mut game = GameSession::with_collectibles(settings(), Vec::new(), far_coins(1));

    // When
    for _ in 0..40 {
        game.move_player(Direction::Down);
        game.move_player(Direction::Right);
    }

    // Then
    assert_that!(game.player(), eq(Point::new(360.0, 360.0)));
}

#[test]
fn given_coin_next_to_player_when_moving_onto_it_then_score_increments() {
    // Given
    let coins = vec![Point::new(200.0, 180.0), Point::new(10.0, 10.0)];
    let mut game = GameSession::with_collectibles(settings(), Vec::new(), coins);

    // When
    let picked = game.move_player(Direction::Right);

    // Then
    assert_that!(picked, eq(1));
    assert_that!(game.score(), eq(1));
    assert_that!(game.collectibles().len(), eq(1));
    assert_that!(game.status(), eq(GameStatus::Playing));
}

#[test]
fn given_coin_exactly_at_radius_when_moving_then_not_collected() {
    let coins = vec![Point::new(220.0, 180.0)];
    let mut game = GameSession::with_collectibles(settings(), Vec::new(), coins);

    let picked = game.move_player(Direction::Right);

    assert_that!(picked, eq(0));
    assert_that!(game.score(), eq(0));
}

#[test]
fn given_last_coin_when_collected_then_game_is_won() {
    // Given
    let coins = vec![Point::new(190.0, 180.0), Point::new(200.0, 180.0)];
    let mut game = GameSession::with_collectibles(settings(), Vec::new(), coins);

    // When
    game.move_player(Direction::Right);

    // Then
    assert_that!(game.score(), eq(2));
    assert_that!(game.status(), eq(GameStatus::Won));
}

#[test]
fn given_won_game_when_ticking_or_moving_then_nothing_changes() {
    let mut game =
        GameSession::with_collectibles(settings(), Vec::new(), vec![Point::new(190.0, 180.0)]);
    game.move_player(Direction::Right);
    let position = game.player();

    assert_that!(game.tick(), eq(GameStatus::Won));
    assert_that!(game.move_player(Direction::Left), eq(0));
    assert_that!(game.player(), eq(position));
    assert_that!(game.remaining_secs(), eq(60));
}

#[test]
fn given_running_clock_when_it_reaches_zero_then_game_is_lost() {
    // Given
    let short = GameSettings {
        duration_secs: 3,
        ..settings()
    };
    let mut game = GameSession::with_collectibles(short, Vec::new(), far_coins(5));

    // When
    let statuses: Vec<_> = (0..3).map(|_| game.tick()).collect();

    // Then
    assert_eq!(
        statuses,
        vec![GameStatus::Playing, GameStatus::Playing, GameStatus::Lost]
    );
    assert_that!(game.clock(), eq("0:00"));
    assert_that!(game.move_player(Direction::Up), eq(0));
}

#[test]
fn given_long_duration_when_formatting_clock_then_renders_minutes_and_seconds() {
    let maze = GameSettings {
        duration_secs: 180,
        ..settings()
    };
    let mut game = GameSession::with_collectibles(maze, Vec::new(), far_coins(5));

    assert_that!(game.clock(), eq("3:00"));
    game.tick();
    assert_that!(game.clock(), eq("2:59"));
}

#[test]
fn given_wall_ahead_when_moving_into_it_then_move_is_rejected() {
    // Given
    let wall = Rect::new(215.0, 0.0, 10.0, 400.0);
    let mut game = GameSession::with_collectibles(settings(), vec![wall], far_coins(5));

    // When
    game.move_player(Direction::Right);
    let blocked = game.player();
    game.move_player(Direction::Right);

    // Then
    assert_that!(blocked, eq(Point::new(180.0, 180.0)));
    assert_that!(game.player(), eq(Point::new(180.0, 180.0)));
}

#[test]
fn given_wall_elsewhere_when_moving_away_then_move_is_allowed() {
    let wall = Rect::new(215.0, 0.0, 10.0, 400.0);
    let mut game = GameSession::with_collectibles(settings(), vec![wall], far_coins(5));

    game.move_player(Direction::Left);

    assert_that!(game.player(), eq(Point::new(170.0, 180.0)));
}

#[test]
fn given_key_names_when_parsing_direction_then_arrows_and_wasd_map() {
    assert_that!(Direction::from_key("ArrowUp"), some(eq(Direction::Up)));
    assert_that!(Direction::from_key("a"), some(eq(Direction::Left)));
    assert_that!(Direction::from_key("x"), none());
}

#[test]
fn given_touching_rectangles_when_checking_overlap_then_not_overlapping() {
    let left = Rect::new(0.0, 0.0, 10.0, 10.0);
    let right = Rect::new(10.0, 0.0, 10.0, 10.0);
    let inside = Rect::new(5.0, 5.0, 10.0, 10.0);

    assert_that!(left.overlaps(&right), eq(false));
    assert_that!(left.overlaps(&inside), eq(true));
}
