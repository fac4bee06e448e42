use crossterm::event::KeyCode;
use pickem_ui::ui::pickem::StandingsTable;
use pickem_ui::ui::{Action, Component};
use pretty_assertions::assert_eq;

use crate::helpers::{click, contains, fixtures, key, render};

#[test]
fn test_table_renders_columns_and_rows() {
    let mut table = StandingsTable::new(fixtures().standings);
    let rows = render(&mut table, 100, 14);
    assert!(contains(&rows, "League Standings"));
    assert!(contains(&rows, "4 participants"));
    for header in ["Rank", "User", "Record", "Win %", "Points"] {
        assert!(contains(&rows, header), "missing {header}");
    }
    assert!(contains(&rows, "1st"));
    assert!(contains(&rows, "Mary Smith"));
    assert!(contains(&rows, "@msmith"));
    assert!(contains(&rows, "142-48"));
    assert!(contains(&rows, "(190 total)"));
    assert!(contains(&rows, "74.7%"));
    assert!(contains(&rows, "1,284"));
    assert!(contains(&rows, "gridiron_guru"));
}

#[test]
fn test_row_click_emits_entry() {
    let standings = fixtures().standings;
    let mut table = StandingsTable::new(standings.clone()).row_click(true);
    render(&mut table, 100, 14);
    // Border and header sit above the first two-line row
    let action = table.handle_mouse_events(click(20, 4));
    assert_eq!(action, Action::StandingsRowSelected(Box::new(standings[1].clone())));
    assert_eq!(table.handle_mouse_events(click(20, 13)), Action::None);
}

#[test]
fn test_rows_are_not_clickable_by_default() {
    let mut table = StandingsTable::new(fixtures().standings);
    render(&mut table, 100, 14);
    table.handle_key_events(key(KeyCode::Down));
    assert_eq!(table.handle_key_events(key(KeyCode::Enter)), Action::None);
    assert_eq!(table.selected().map(|entry| entry.rank), Some(1));
}

#[test]
fn test_empty_standings_message() {
    let mut table = StandingsTable::new(Vec::new());
    let rows = render(&mut table, 60, 6);
    assert!(contains(&rows, "No standings data available"));
    assert!(!contains(&rows, "Rank"));
}

#[test]
fn test_loading_hides_rows() {
    let mut table = StandingsTable::new(fixtures().standings).loading(true);
    let rows = render(&mut table, 60, 6);
    assert!(!contains(&rows, "Mary Smith"));
    assert_eq!(table.handle_mouse_events(click(10, 3)), Action::None);
}
