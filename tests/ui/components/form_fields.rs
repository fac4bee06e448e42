use crossterm::event::KeyCode;
use pickem_ui::theme::AlertVariant;
use pickem_ui::ui::components::{Alert, Avatar, Button, Input, Select, SelectOption, SelectValue};
use pickem_ui::ui::{Action, Component};
use pretty_assertions::assert_eq;

use crate::helpers::{click, contains, key, render};

#[test]
fn test_input_renders_label_and_placeholder() {
    let mut input = Input::new("username")
        .label("Username")
        .placeholder("Enter your username")
        .required(true);
    let rows = render(&mut input, 40, 4);
    assert!(rows[0].starts_with("Username *"));
    assert!(contains(&rows, "Enter your username"));
}

#[test]
fn test_input_shows_error_instead_of_helper() {
    let mut input = Input::new("email")
        .helper_text("We never share it")
        .error_message("Email is required");
    let rows = render(&mut input, 40, 4);
    assert!(contains(&rows, "Email is required"));
    assert!(!contains(&rows, "We never share it"));
    assert!(input.classes().contains("input--error"));
}

#[test]
fn test_input_focus_and_typing() {
    let mut input = Input::new("league");
    render(&mut input, 30, 3);
    assert_eq!(input.handle_mouse_events(click(3, 1)), Action::InputFocused("league".to_string()));

    input.handle_key_events(key(KeyCode::Char('N')));
    let action = input.handle_key_events(key(KeyCode::Char('E')));
    assert_eq!(
        action,
        Action::InputChanged {
            name: "league".to_string(),
            value: "NE".to_string(),
        }
    );
    assert_eq!(input.handle_mouse_events(click(3, 10)), Action::InputBlurred("league".to_string()));
}

#[test]
fn test_controlled_input_keeps_host_value() {
    let mut input = Input::new("name");
    input.control_value(Some("Fixed".to_string()));
    let action = input.handle_key_events(key(KeyCode::Char('x')));
    assert!(matches!(action, Action::InputChanged { ref value, .. } if value.len() == 6));
    assert_eq!(input.value(), "Fixed");
}

#[test]
fn test_select_skips_disabled_options() {
    let mut select = Select::new(
        "week",
        vec![
            SelectOption::new(1u32, "Week 1"),
            SelectOption::new(2u32, "Week 2").disabled(true),
            SelectOption::new(3u32, "Week 3"),
        ],
    )
    .placeholder("Choose a week");
    let rows = render(&mut select, 30, 3);
    assert!(contains(&rows, "Choose a week"));

    select.handle_key_events(key(KeyCode::Down));
    let action = select.handle_key_events(key(KeyCode::Down));
    assert_eq!(
        action,
        Action::SelectChanged {
            name: "week".to_string(),
            value: SelectValue::from(3u32),
        }
    );
    let rows = render(&mut select, 30, 3);
    assert!(contains(&rows, "Week 3"));
}

#[test]
fn test_button_click_inside_rendered_area() {
    let mut button = Button::new("Save");
    render(&mut button, 20, 1);
    assert_eq!(button.handle_mouse_events(click(1, 0)), Action::Pressed("Save".to_string()));
    assert_eq!(button.handle_mouse_events(click(19, 0)), Action::None);
}

#[test]
fn test_disabled_button_ignores_activation() {
    let mut button = Button::new("Save").disabled(true);
    assert_eq!(button.handle_key_events(key(KeyCode::Enter)), Action::None);
}

#[test]
fn test_alert_renders_title_and_messages() {
    let mut alert = Alert::new(AlertVariant::Error)
        .title("Could not save pick")
        .messages(vec!["Please select a team".to_string()])
        .dismissible(true)
        .on_dismiss(Action::AlertDismissed);
    let height = alert.height();
    let rows = render(&mut alert, 50, height);
    assert!(contains(&rows, "Could not save pick"));
    assert!(contains(&rows, "Please select a team"));
    assert_eq!(alert.handle_key_events(key(KeyCode::Esc)), Action::AlertDismissed);
}

#[test]
fn test_avatar_falls_back_to_initials_after_failure() {
    let mut avatar = Avatar::new()
        .src(Some("https://example.com/a.png".to_string()))
        .fallback("Mary Smith");
    assert!(avatar.shows_image());
    avatar.image_failed();
    assert!(!avatar.shows_image());
    let rows = render(&mut avatar, 10, 1);
    assert!(rows[0].contains("MS"));
}
