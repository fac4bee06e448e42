use pickem_ui::theme::{BadgeVariant, Size, Theme};
use pickem_ui::ui::components::badge::{badge_span, Badge};

#[test]
fn test_badge_label_padding_follows_size() {
    assert_eq!(Badge::new("Final").size(Size::Sm).label(), " Final ");
    assert_eq!(Badge::new("Final").size(Size::Md).label(), "  Final  ");
    assert_eq!(Badge::new("Final").size(Size::Lg).label(), "   Final   ");
}

#[test]
fn test_badge_width_matches_label() {
    let badge = Badge::new("Live").variant(BadgeVariant::Warning).rounded(true);
    assert_eq!(badge.label(), "( Live )");
    assert_eq!(badge.width(), 8);
}

#[test]
fn test_badge_classes() {
    let badge = Badge::new("1st").variant(BadgeVariant::Success);
    assert_eq!(badge.classes().to_string(), "badge badge--success badge--md");
}

#[test]
fn test_badge_span_is_small() {
    let theme = Theme::default();
    let span = badge_span("Public", BadgeVariant::Info, &theme);
    assert_eq!(span.content, " Public ");
}
