use crossterm::event::KeyCode;
use pickem_ui::theme::Theme;
use pickem_ui::ui::pickem::{JoinState, LeagueCard};
use pickem_ui::ui::{Action, Component};
use pretty_assertions::assert_eq;

use crate::helpers::{click, contains, fixtures, key, render};

#[test]
fn test_public_league_details() {
    let league = fixtures().leagues[0].clone();
    let mut card = LeagueCard::new(league);
    let rows = render(&mut card, 90, 5);
    assert!(contains(&rows, "Office Champions"));
    assert!(contains(&rows, "Public"));
    assert!(contains(&rows, "$25.00"));
    assert!(contains(&rows, "Bragging rights for the whole floor."));
    assert!(contains(&rows, "Participants: 12 / 20"));
    assert!(contains(&rows, "Commissioner: @jdoe"));
}

#[test]
fn test_join_button_emits_join() {
    let league = fixtures().leagues[0].clone();
    let mut card = LeagueCard::new(league.clone()).show_join_button(true);
    assert_eq!(card.join_state(), JoinState::CanJoin);
    let height = card.height(&Theme::default());
    let rows = render(&mut card, 90, height);
    assert!(contains(&rows, "Join League"));

    card.handle_key_events(key(KeyCode::Tab));
    assert_eq!(card.handle_key_events(key(KeyCode::Enter)), Action::JoinLeague(Box::new(league)));
}

#[test]
fn test_full_league_cannot_be_joined() {
    let league = fixtures().leagues[1].clone();
    let mut card = LeagueCard::new(league).show_join_button(true);
    assert_eq!(card.join_state(), JoinState::Full);
    let rows = render(&mut card, 90, 5);
    assert!(contains(&rows, "Private"));
    assert!(contains(&rows, "Full"));
    assert!(!contains(&rows, "Join League"));
}

#[test]
fn test_membership_wins_over_capacity() {
    let league = fixtures().leagues[1].clone();
    let card = LeagueCard::new(league).is_member(true);
    assert_eq!(card.join_state(), JoinState::Member);
}

#[test]
fn test_clickable_league_selects_on_click() {
    let league = fixtures().leagues[1].clone();
    let mut card = LeagueCard::new(league.clone()).clickable(true);
    render(&mut card, 90, 4);
    assert_eq!(card.handle_mouse_events(click(5, 1)), Action::LeagueSelected(Box::new(league)));
}
