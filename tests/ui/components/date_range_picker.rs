use chrono::NaiveDate;
use crossterm::event::KeyCode;
use pickem_ui::date_range::{DateRange, PickerEvent, RangePosition};
use pickem_ui::ui::components::DateRangePicker;
use pickem_ui::ui::{Action, Component};
use pretty_assertions::assert_eq;

use crate::helpers::{click, contains, key, position_below, position_of, render};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn picker() -> DateRangePicker {
    DateRangePicker::new(date(2024, 1, 12)).label("Season window")
}

#[test]
fn test_closed_picker_shows_placeholder() {
    let mut picker = picker();
    let rows = render(&mut picker, 100, 30);
    assert!(contains(&rows, "Season window"));
    assert!(contains(&rows, "Select date range"));
    assert!(!contains(&rows, "January 2024"));
}

#[test]
fn test_desktop_popover_shows_consecutive_months() {
    let mut picker = picker();
    assert_eq!(picker.handle_key_events(key(KeyCode::Enter)), Action::DateRange(PickerEvent::Open));
    let rows = render(&mut picker, 100, 30);
    assert!(!picker.is_mobile_layout());
    assert!(contains(&rows, "January 2024"));
    assert!(contains(&rows, "February 2024"));
    assert_eq!(picker.grids().len(), 2);
}

#[test]
fn test_narrow_screen_uses_single_month() {
    let mut picker = picker();
    picker.handle_key_events(key(KeyCode::Enter));
    let rows = render(&mut picker, 40, 30);
    assert!(picker.is_mobile_layout());
    assert!(contains(&rows, "January 2024"));
    assert!(!contains(&rows, "February 2024"));
    assert!(picker.classes().contains("date-range-picker--mobile"));
}

#[test]
fn test_keyboard_selection_completes_range() {
    let mut picker = picker();
    picker.handle_key_events(key(KeyCode::Enter));
    render(&mut picker, 100, 30);

    let first = picker.handle_key_events(key(KeyCode::Enter));
    assert_eq!(
        first.into_vec(),
        vec![
            Action::DateRange(PickerEvent::Change(DateRange::new(Some(date(2024, 1, 12)), None))),
            Action::DateRange(PickerEvent::RangePositionChange(RangePosition::End)),
        ]
    );

    for _ in 0..3 {
        picker.handle_key_events(key(KeyCode::Right));
    }
    let second = picker.handle_key_events(key(KeyCode::Enter)).into_vec();
    let range = DateRange::new(Some(date(2024, 1, 12)), Some(date(2024, 1, 15)));
    assert!(second.contains(&Action::DateRange(PickerEvent::Accept(range))));
    assert!(!picker.is_open());

    let rows = render(&mut picker, 100, 30);
    assert!(contains(&rows, "01/12/2024 - 01/15/2024"));
}

#[test]
fn test_typed_range_is_committed() {
    let mut picker = picker();
    for c in "01/10/2024 - 01/20/2024".chars() {
        picker.handle_key_events(key(KeyCode::Char(c)));
    }
    let action = picker.handle_key_events(key(KeyCode::Enter));
    let range = DateRange::new(Some(date(2024, 1, 10)), Some(date(2024, 1, 20)));
    assert_eq!(
        action.into_vec(),
        vec![Action::DateRange(PickerEvent::Change(range)), Action::DateRange(PickerEvent::Accept(range))]
    );
    assert_eq!(picker.value(), range);
    assert!(!picker.is_open());
}

#[test]
fn test_disabled_picker_ignores_input() {
    let mut picker = picker().disabled(true);
    assert_eq!(picker.handle_key_events(key(KeyCode::Enter)), Action::None);
    assert!(!picker.is_open());
}

/// Open `picker`, draw it at 100x30 and return the rows plus the first calendar's title row
fn open_and_render(picker: &mut DateRangePicker) -> (Vec<String>, usize) {
    picker.handle_key_events(key(KeyCode::Enter));
    let rows = render(picker, 100, 30);
    let (_, title) = position_of(&rows, "January 2024");
    (rows, title as usize)
}

fn click_text(picker: &mut DateRangePicker, rows: &[String], from: usize, text: &str) -> Action {
    let (x, y) = position_below(rows, from, text);
    picker.handle_mouse_events(click(x, y))
}

#[test]
fn test_clicking_day_sets_start() {
    let mut picker = picker();
    let (rows, title) = open_and_render(&mut picker);
    let action = click_text(&mut picker, &rows, title, "15");
    assert_eq!(
        action.into_vec(),
        vec![
            Action::DateRange(PickerEvent::Change(DateRange::new(Some(date(2024, 1, 15)), None))),
            Action::DateRange(PickerEvent::RangePositionChange(RangePosition::End)),
        ]
    );
    assert!(picker.is_open());
}

#[test]
fn test_clicking_disabled_day_changes_nothing() {
    let mut picker = picker().max_date(date(2024, 1, 25));
    let (rows, title) = open_and_render(&mut picker);
    assert_eq!(click_text(&mut picker, &rows, title, "26"), Action::None);
    assert_eq!(picker.value(), DateRange::EMPTY);
    assert_eq!(picker.range_position(), RangePosition::Start);
}

#[test]
fn test_chevrons_shift_both_calendars() {
    let mut picker = picker();
    let (rows, title) = open_and_render(&mut picker);
    assert_eq!(click_text(&mut picker, &rows, title, "<"), Action::None);
    let rows = render(&mut picker, 100, 30);
    assert!(contains(&rows, "December 2023"));
    assert!(contains(&rows, "January 2024"));
    assert!(!contains(&rows, "February 2024"));

    // The next chevron sits on the right-most calendar
    assert_eq!(click_text(&mut picker, &rows, title, ">"), Action::None);
    let rows = render(&mut picker, 100, 30);
    assert_eq!(click_text(&mut picker, &rows, title, ">"), Action::None);
    let rows = render(&mut picker, 100, 30);
    assert!(contains(&rows, "February 2024"));
    assert!(contains(&rows, "March 2024"));
    assert!(!contains(&rows, "January 2024"));
}

#[test]
fn test_backdrop_click_closes() {
    let mut picker = picker();
    open_and_render(&mut picker);
    assert_eq!(picker.handle_mouse_events(click(99, 29)), Action::DateRange(PickerEvent::Close));
    assert!(!picker.is_open());
}

#[test]
fn test_action_buttons() {
    let mut picker = picker().close_on_select(false);
    let (rows, title) = open_and_render(&mut picker);
    assert!(!contains(&rows[title..], "Clear"));

    click_text(&mut picker, &rows, title, "10");
    let rows = render(&mut picker, 100, 30);
    // OK stays disabled until both ends are set
    assert_eq!(click_text(&mut picker, &rows, title, "OK"), Action::None);
    assert_eq!(
        click_text(&mut picker, &rows, title, "Clear"),
        Action::DateRange(PickerEvent::Change(DateRange::EMPTY))
    );
    assert!(picker.is_open());

    picker.handle_key_events(key(KeyCode::Tab));
    let rows = render(&mut picker, 100, 30);
    click_text(&mut picker, &rows, title, "10");
    click_text(&mut picker, &rows, title, "18");
    let range = DateRange::new(Some(date(2024, 1, 10)), Some(date(2024, 1, 18)));
    assert_eq!(picker.value(), range);
    assert!(picker.is_open());

    let rows = render(&mut picker, 100, 30);
    assert_eq!(
        click_text(&mut picker, &rows, title, "OK").into_vec(),
        vec![Action::DateRange(PickerEvent::Accept(range)), Action::DateRange(PickerEvent::Close)]
    );
    assert!(!picker.is_open());

    let (rows, title) = open_and_render(&mut picker);
    assert_eq!(click_text(&mut picker, &rows, title, "Cancel"), Action::DateRange(PickerEvent::Close));
    assert_eq!(picker.value(), range);
}
