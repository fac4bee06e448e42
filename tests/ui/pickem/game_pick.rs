use crossterm::event::KeyCode;
use pickem_ui::ui::pickem::{GamePick, Side};
use pickem_ui::ui::{Action, Component};
use pretty_assertions::assert_eq;

use crate::helpers::{click, contains, fixtures, key, render};

#[test]
fn test_clicking_a_tile_picks_that_team() {
    let game = fixtures().game(101).cloned().unwrap();
    let mut pick = GamePick::new(game);
    let rows = render(&mut pick, 40, 5);
    assert!(contains(&rows, "Kansas City"));
    assert!(contains(&rows, "Buffalo"));
    assert!(contains(&rows, "@"));

    assert_eq!(pick.handle_mouse_events(click(3, 1)), Action::PickTeam { game_id: 101, team_id: 1 });
    assert_eq!(pick.focused(), Some(Side::Away));
    assert_eq!(pick.handle_mouse_events(click(30, 1)), Action::PickTeam { game_id: 101, team_id: 2 });
    assert_eq!(pick.handle_mouse_events(click(20, 4)), Action::None);
}

#[test]
fn test_keyboard_pick_follows_focus() {
    let game = fixtures().game(101).cloned().unwrap();
    let mut pick = GamePick::new(game);
    assert_eq!(pick.handle_key_events(key(KeyCode::Enter)), Action::None);
    pick.on_focus();
    pick.handle_key_events(key(KeyCode::Right));
    assert_eq!(pick.handle_key_events(key(KeyCode::Enter)), Action::PickTeam { game_id: 101, team_id: 2 });
}

#[test]
fn test_locked_game_rejects_picks() {
    let game = fixtures().game(101).cloned().unwrap();
    let mut pick = GamePick::new(game).locked(true);
    let rows = render(&mut pick, 40, 6);
    assert!(contains(&rows, "Locked"));
    assert!(!pick.team_classes(Side::Away).contains("game-pick__team--clickable"));
    assert_eq!(pick.handle_mouse_events(click(3, 2)), Action::None);
}

#[test]
fn test_results_mark_winner_and_outcome() {
    let fixtures = fixtures();
    let game = fixtures.game(103).cloned().unwrap();
    let mut pick = GamePick::new(game).user_pick(fixtures.pick_for(103)).show_results(true);
    let rows = render(&mut pick, 40, 6);
    assert!(contains(&rows, "Correct"));
    assert!(contains(&rows, "33"));
    assert!(contains(&rows, "19"));

    let away = pick.team_classes(Side::Away);
    assert!(away.contains("game-pick__team--picked"));
    assert!(away.contains("game-pick__team--winner"));
    assert!(pick.team_classes(Side::Home).contains("game-pick__team--loser"));
    assert_eq!(pick.pick(Side::Home), Action::None);
}
