use crate::{DailyPlayLock, GameError};

use ff_core::Roster;
use ff_store::SessionStore;

use chrono::NaiveDate;
use googletest::prelude::*;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
}

#[test]
fn given_fresh_store_when_claiming_then_date_is_recorded() {
    // Given
    let mut store = SessionStore::in_memory(Roster::household());

    // When
    let result = DailyPlayLock::claim(&mut store, day(1));

    // Then
    assert_that!(result.is_ok(), eq(true));
    assert_that!(store.played_on(), some(eq(day(1))));
}

#[test]
fn given_played_today_when_claiming_again_then_rejected() {
    // Given
    let mut store = SessionStore::in_memory(Roster::household());
    DailyPlayLock::claim(&mut store, day(1)).unwrap();

    // When
    let result = DailyPlayLock::claim(&mut store, day(1));

    // Then
    assert!(matches!(result, Err(GameError::AlreadyPlayed { date, .. }) if date == day(1)));
    assert_that!(DailyPlayLock::can_play(&store, day(1)), eq(false));
}

#[test]
fn given_played_yesterday_when_checking_today_then_allowed() {
    let mut store = SessionStore::in_memory(Roster::household());
    DailyPlayLock::claim(&mut store, day(1)).unwrap();

    assert_that!(DailyPlayLock::can_play(&store, day(2)), eq(true));
    assert_that!(DailyPlayLock::claim(&mut store, day(2)).is_ok(), eq(true));
    assert_that!(store.played_on(), some(eq(day(2))));
}
