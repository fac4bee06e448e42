use pickem_ui::ui::components::{Header, NavItem};
use pickem_ui::ui::{Action, Component};
use pretty_assertions::assert_eq;

use crate::helpers::{click, contains, fixtures, position_of, render};

#[test]
fn test_signed_out_header_shows_login() {
    let mut header = Header::new().nav_items(vec![NavItem::new("Leagues", "/leagues")]);
    let rows = render(&mut header, 80, 3);
    assert!(contains(&rows, "Football Pickem"));
    assert!(contains(&rows, "Leagues"));
    assert!(contains(&rows, "Login"));

    let (x, y) = position_of(&rows, "Login");
    assert_eq!(header.handle_mouse_events(click(x, y)), Action::Login);
}

#[test]
fn test_signed_in_header_shows_user() {
    let user = fixtures().users[0].clone();
    let mut header = Header::new()
        .title("Pick'em")
        .nav_items(vec![NavItem::new("Games", "/games").active(true), NavItem::new("Standings", "/standings")])
        .user(Some(user))
        .logout_enabled(true);
    let rows = render(&mut header, 100, 3);
    assert!(contains(&rows, "John Doe"));
    assert!(contains(&rows, "Logout"));
    assert!(!contains(&rows, "Login"));

    let (x, y) = position_of(&rows, "Standings");
    assert_eq!(header.handle_mouse_events(click(x, y)), Action::Navigate("/standings".to_string()));

    let (x, y) = position_of(&rows, "John Doe");
    assert_eq!(header.handle_mouse_events(click(x, y)), Action::UserMenuToggled(true));
    assert!(header.is_menu_open());
    assert_eq!(header.menu_anchor().y, y);
}
