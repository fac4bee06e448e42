use pickem_ui::config::Config;
use pickem_ui::icons::IconTheme;
use pickem_ui::theme::Skin;
use pretty_assertions::assert_eq;
use std::io::Write;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.ui.skin, Skin::Classic);
    assert_eq!(config.ui.icon_theme, IconTheme::Ascii);
    assert!(config.ui.mouse_enabled);
    assert_eq!(config.date_picker.format, "MM/dd/yyyy");
    assert_eq!(config.date_picker.calendars, 2);
    assert!(config.date_picker.close_on_select);
    assert_eq!(config.pick_form.max_confidence, 16);
    assert!(!config.logging.enabled);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    config.date_picker.calendars = 4;
    assert!(config.validate().is_err());
    config.date_picker.calendars = 1;
    assert!(config.validate().is_ok());

    config.date_picker.format = "YYYY".to_string();
    assert!(config.validate().is_err());
    config.date_picker.format = "d.M.yy".to_string();
    assert!(config.validate().is_ok());

    config.date_picker.mobile_breakpoint = 10;
    assert!(config.validate().is_err());
    config.date_picker.mobile_breakpoint = 80;

    config.pick_form.max_confidence = 0;
    assert!(config.validate().is_err());
    config.pick_form.max_confidence = 8;

    config.logging.level = "loud".to_string();
    assert!(config.validate().is_err());
    config.logging.level = "debug".to_string();
    assert!(config.validate().is_ok());
    assert_eq!(config.logging.level_filter(), log::LevelFilter::Debug);
}

#[test]
fn test_partial_config_deserialization() {
    let partial_toml = r#"
[ui]
skin = "material"
icon_theme = "unicode"

[date_picker]
calendars = 3
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    assert_eq!(config.ui.skin, Skin::Material);
    assert_eq!(config.ui.icon_theme, IconTheme::Unicode);
    assert_eq!(config.date_picker.calendars, 3);

    // Unspecified values keep their defaults
    assert!(config.ui.mouse_enabled);
    assert_eq!(config.date_picker.format, "MM/dd/yyyy");
    assert!(config.standings.show_avatars);
}

#[test]
fn test_empty_config_deserialization() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[pick_form]\nmax_confidence = 10\nshow_confidence = false").unwrap();

    let config = Config::load_from_file(file.path()).unwrap();
    assert_eq!(config.pick_form.max_confidence, 10);
    assert!(!config.pick_form.show_confidence);
}

#[test]
fn test_load_from_file_rejects_invalid_values() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[date_picker]\ncalendars = 0").unwrap();

    let err = Config::load_from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("calendars"));
}

#[test]
fn test_generate_default_config_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    Config::generate_default_config(&path).unwrap();
    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded, Config::default());
}

#[test]
fn test_theme_follows_ui_section() {
    let mut config = Config::default();
    config.ui.skin = Skin::Material;
    let theme = config.theme();
    assert_eq!(theme.styles().name(), "material");
}
