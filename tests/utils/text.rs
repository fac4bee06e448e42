use pickem_ui::utils::text::*;

#[test]
fn test_get_initials_two_words() {
    assert_eq!(get_initials("John Doe"), "JD");
}

#[test]
fn test_get_initials_single_word() {
    assert_eq!(get_initials("John"), "J");
    assert_eq!(get_initials("Cher"), "C");
}

#[test]
fn test_get_initials_takes_first_two() {
    assert_eq!(get_initials("John Michael Doe"), "JM");
}

#[test]
fn test_get_initials_empty_name() {
    assert_eq!(get_initials(""), "?");
}

#[test]
fn test_get_initials_uppercases() {
    assert_eq!(get_initials("ada lovelace"), "AL");
}

#[test]
fn test_pluralize() {
    assert_eq!(pluralize(1, "participant", "participants"), "1 participant");
    assert_eq!(pluralize(0, "participant", "participants"), "0 participants");
    assert_eq!(pluralize(12, "member", "members"), "12 members");
}

#[test]
fn test_truncate_edges() {
    assert_eq!(truncate("Eagles", 6), "Eagles");
    assert_eq!(truncate("Eagles", 0), "");
    assert_eq!(truncate("Philadelphia", 1), "…");
}
