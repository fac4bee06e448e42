use crossterm::event::KeyCode;
use pickem_ui::ui::pickem::{GameCard, PickArea};
use pickem_ui::ui::{Action, Component};
use pretty_assertions::assert_eq;

use crate::helpers::{click, contains, fixtures, key, render};

#[test]
fn test_scheduled_game_offers_pick() {
    let game = fixtures().game(101).cloned().unwrap();
    let mut card = GameCard::new(game.clone()).show_pick_actions(true);
    assert_eq!(card.pick_area(), PickArea::MakePick);

    let rows = render(&mut card, 80, 8);
    assert!(contains(&rows, "Week 19"));
    assert!(contains(&rows, "Scheduled"));
    assert!(contains(&rows, "Kansas City Chiefs"));
    assert!(contains(&rows, "Buffalo Bills"));
    assert!(contains(&rows, "Spread: -2.5  O/U: 45.5"));
    assert!(contains(&rows, "Make Pick"));

    assert_eq!(card.handle_key_events(key(KeyCode::Char('p'))), Action::PickGame(Box::new(game)));
}

#[test]
fn test_picked_game_shows_pick_summary() {
    let fixtures = fixtures();
    let game = fixtures.game(102).cloned().unwrap();
    let mut card = GameCard::new(game)
        .show_pick_actions(true)
        .user_pick(fixtures.pick_for(102));
    let rows = render(&mut card, 80, 8);
    assert!(contains(&rows, "Live"));
    assert!(contains(&rows, "Picked: PHI"));
    assert!(contains(&rows, "Spread (12 pts)"));
    assert!(!contains(&rows, "Make Pick"));
    assert_eq!(card.handle_key_events(key(KeyCode::Char('p'))), Action::None);
}

#[test]
fn test_started_game_without_pick() {
    let game = fixtures().game(103).cloned().unwrap();
    let mut card = GameCard::new(game).show_pick_actions(true);
    assert_eq!(card.pick_area(), PickArea::Started);
    let rows = render(&mut card, 80, 8);
    assert!(contains(&rows, "Game Started"));
    assert!(contains(&rows, "33"));
    // A zero spread and missing total leave no odds
    assert!(card.odds().is_none());
}

#[test]
fn test_clickable_card_selects_game() {
    let game = fixtures().game(101).cloned().unwrap();
    let mut card = GameCard::new(game.clone()).clickable(true);
    assert!(card.classes().contains("game-card--clickable"));
    render(&mut card, 80, 7);
    assert_eq!(card.handle_mouse_events(click(10, 2)), Action::GameSelected(Box::new(game)));
    assert_eq!(card.handle_mouse_events(click(10, 20)), Action::None);
}

#[test]
fn test_plain_card_ignores_activation() {
    let game = fixtures().game(101).cloned().unwrap();
    let mut card = GameCard::new(game);
    assert_eq!(card.handle_key_events(key(KeyCode::Enter)), Action::None);
}
