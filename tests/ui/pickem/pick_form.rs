use crossterm::event::KeyCode;
use pickem_ui::entities::{PickFormData, PickType};
use pickem_ui::ui::pickem::{PickForm, PickValidationError};
use pickem_ui::ui::{Action, Component};
use pretty_assertions::assert_eq;

use crate::helpers::{click, contains, fixtures, key, position_of, render};

fn form() -> PickForm {
    let fixtures = fixtures();
    let game = fixtures.game(101).cloned().unwrap();
    PickForm::new(game, &fixtures.teams)
}

#[test]
fn test_form_renders_fields() {
    let mut form = form();
    let rows = render(&mut form, 60, 24);
    assert!(contains(&rows, "Make Your Pick"));
    assert!(contains(&rows, "Week 19: KC @ BUF"));
    assert!(contains(&rows, "Pick Team *"));
    assert!(contains(&rows, "Select a team"));
    assert!(contains(&rows, "Straight Up"));
    assert!(contains(&rows, "1 point"));
    assert!(contains(&rows, "Submit Pick"));
    assert!(!contains(&rows, "Cancel"));
}

#[test]
fn test_submit_click_without_team_shows_error() {
    let mut form = form();
    let rows = render(&mut form, 60, 24);
    let (x, y) = position_of(&rows, "Submit Pick");
    let action = form.handle_mouse_events(click(x, y));
    assert!(!action.into_vec().iter().any(|a| matches!(a, Action::SubmitPick(_))));
    assert_eq!(form.errors(), &[PickValidationError::SelectTeam]);

    let rows = render(&mut form, 60, 24);
    assert!(contains(&rows, "Please select a team"));
}

#[test]
fn test_keyboard_pick_then_submit_click() {
    let mut form = form();
    form.handle_key_events(key(KeyCode::Tab));
    form.handle_key_events(key(KeyCode::Down));
    let rows = render(&mut form, 60, 24);
    assert!(contains(&rows, "Kansas City Chiefs (KC)"));

    let (x, y) = position_of(&rows, "Submit Pick");
    let actions = form.handle_mouse_events(click(x, y)).into_vec();
    assert!(actions.contains(&Action::SubmitPick(PickFormData {
        team_id: 1,
        pick_type: PickType::Straight,
        confidence_points: Some(1),
    })));
}

#[test]
fn test_cancel_button_emits_cancel() {
    let mut form = form().cancel_enabled(true);
    let rows = render(&mut form, 60, 24);
    let (x, y) = position_of(&rows, "Cancel");
    assert!(form.handle_mouse_events(click(x, y)).into_vec().contains(&Action::CancelPick));
}

#[test]
fn test_disabled_form_blocks_everything() {
    let mut form = form().disabled(true);
    form.handle_key_events(key(KeyCode::Tab));
    assert_eq!(form.handle_key_events(key(KeyCode::Down)), Action::None);
    assert_eq!(form.submit(), Action::None);
    assert!(form.errors().is_empty());
}
