use crate::app::edit_fields;
use crate::tests::{fresh_store, ordinary_day, run_script};

use ff_core::{ProfileFields, ShopMode, UserProfile};

use chrono::NaiveDate;
use googletest::prelude::*;

fn logged_in_store() -> ff_store::SessionStore {
    let mut store = fresh_store();
    store.set_current_user("Mum");
    store
}

#[test]
fn given_correct_code_when_logging_in_then_hub_welcomes_user() {
    // When
    let (store, output) = run_script(fresh_store(), ordinary_day(), "2\n2206\nenter\nquit\n");

    // Then
    assert_that!(output, contains_substring("Enter code for Mum"));
    assert_that!(output, contains_substring("✅ Logged in"));
    assert_that!(output, contains_substring("Welcome, Mum"));
    assert_that!(store.current_user(), some(eq("Mum")));
}

#[test]
fn given_wrong_code_when_submitting_then_inline_error_and_warning() {
    let (store, output) = run_script(fresh_store(), ordinary_day(), "Mum\n1111\nenter\nquit\n");

    assert_that!(output, contains_substring("Wrong code"));
    assert_that!(output, contains_substring("⚠️ Incorrect"));
    assert_that!(store.current_user(), none());
}

#[test]
fn given_unknown_profile_when_selecting_then_reports_and_stays_on_grid() {
    let (_, output) = run_script(fresh_store(), ordinary_day(), "Nobody\nquit\n");

    assert_that!(output, contains_substring("No profile called Nobody"));
}

#[test]
fn given_existing_session_when_starting_then_login_is_skipped() {
    let (_, output) = run_script(logged_in_store(), ordinary_day(), "quit\n");

    assert_that!(output, not(contains_substring("Who are you?")));
    assert_that!(output, contains_substring("Welcome, Mum"));
}

#[test]
fn given_hub_when_logging_out_then_session_cleared_and_login_shown() {
    // When
    let (store, output) = run_script(logged_in_store(), ordinary_day(), "logout\nquit\n");

    // Then
    assert_that!(output, contains_substring("✅ Logged out"));
    assert_that!(output, contains_substring("Who are you?"));
    assert_that!(store.current_user(), none());
}

#[test]
fn given_locked_admin_when_switching_shop_then_admin_only() {
    let (store, output) = run_script(logged_in_store(), ordinary_day(), "shop plus\nquit\n");

    assert_that!(output, contains_substring("⚠️ Admin only"));
    assert_that!(store.shop_mode(), eq(ShopMode::Normal));
}

#[test]
fn given_admin_code_when_switching_shop_then_plus_mode_persisted() {
    // When
    let (store, output) = run_script(
        logged_in_store(),
        ordinary_day(),
        "admin  1112 \nshop plus\nquit\n",
    );

    // Then
    assert_that!(output, contains_substring("✅ Admin unlocked"));
    assert_that!(output, contains_substring("Admin: unlocked"));
    assert_that!(output, contains_substring("✅ Shop+ mode enabled"));
    assert_that!(output, contains_substring("Shop+ is closed right now"));
    assert_that!(store.shop_mode(), eq(ShopMode::Plus));
}

#[test]
fn given_hub_when_listing_leaderboard_then_rows_are_ranked() {
    let (_, output) = run_script(logged_in_store(), ordinary_day(), "leaderboard\nquit\n");

    assert_that!(output, contains_substring("1. Uncle Paul 500 pts"));
}

#[test]
fn given_hub_when_editing_profile_then_welcome_uses_new_name() {
    // When
    let (mut store, output) = run_script(
        logged_in_store(),
        ordinary_day(),
        "edit Mummy | mum@example.com | 07700\nprofile\nquit\n",
    );

    // Then
    assert_that!(output, contains_substring("Saved. Welcome, Mummy"));
    assert_that!(output, contains_substring("email: mum@example.com"));
    let profile = store.profile_or_init("Mum");
    assert_that!(profile.phone, eq("07700"));
}

#[test]
fn given_saved_contact_details_when_editing_name_only_then_details_kept() {
    // Given
    let mut store = logged_in_store();
    store.save_profile("Mum", &ProfileFields::new("Mum", "mum@example.com", "07700"));

    // When
    let (mut store, output) = run_script(store, ordinary_day(), "edit Mummy
quit
");

    // Then
    assert_that!(output, contains_substring("Saved. Welcome, Mummy"));
    let profile = store.profile_or_init("Mum");
    assert_that!(profile.email, eq("mum@example.com"));
    assert_that!(profile.phone, eq("07700"));
}

#[test]
fn given_empty_part_when_parsing_edit_then_that_field_cleared() {
    let current = UserProfile {
        display_name: String::from("Mummy"),
        email: String::from("mum@example.com"),
        phone: String::from("07700"),
        avatar: String::new(),
    };

    let fields = edit_fields("Mum||", &current);

    assert_that!(fields, eq(&ProfileFields::new("Mum", "", "")));
}

#[test]
fn given_two_parts_when_parsing_edit_then_phone_kept() {
    let mut stored = UserProfile::for_account("Dad");
    stored.phone = String::from("0123");

    let fields = edit_fields("Daddy|dad@example.com", &stored);

    assert_that!(fields, eq(&ProfileFields::new("Daddy", "dad@example.com", "0123")));
}

#[test]
fn given_game_left_early_when_returning_then_played_date_recorded() {
    let (store, output) = run_script(logged_in_store(), ordinary_day(), "game\nleave\nquit\n");

    assert_that!(output, contains_substring("Collect them all!"));
    assert_that!(output, contains_substring("Game abandoned."));
    assert_that!(store.played_on(), some(eq(ordinary_day())));
}

#[test]
fn given_game_played_today_when_starting_again_then_locked_out() {
    let (_, output) = run_script(
        logged_in_store(),
        ordinary_day(),
        "game\nleave\ngame\nquit\n",
    );

    assert_that!(output, contains_substring("already played today"));
}

#[test]
fn given_christmas_day_when_running_then_banner_is_festive() {
    let christmas = NaiveDate::from_ymd_opt(2026, 12, 25).unwrap();

    let (_, output) = run_script(fresh_store(), christmas, "quit\n");

    assert_that!(output, contains_substring("🎄 FundsFlow 🎄"));
}

#[test]
fn given_end_of_input_when_running_then_exits_cleanly() {
    let (_, output) = run_script(fresh_store(), ordinary_day(), "");

    assert_that!(output, ends_with("Bye!\n"));
}
