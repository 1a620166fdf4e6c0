//! Unit tests for theme presets and overrides

use ghdash::config::{ThemeColors, ThemeConfig};
use ghdash::{Theme, ThemeError};
use ratatui::style::Color;

#[test]
fn presets_by_name() {
    assert_eq!(Theme::preset("default").unwrap(), Theme::dash());
    assert_eq!(Theme::preset("classic").unwrap(), Theme::classic());
    assert_eq!(Theme::preset("ocean").unwrap(), Theme::ocean());
    assert_eq!(
        Theme::preset("neon"),
        Err(ThemeError::UnknownPreset("neon".to_string()))
    );
}

#[test]
fn overrides_apply_on_top_of_preset() {
    let config = ThemeConfig {
        preset: "classic".to_string(),
        colors: ThemeColors {
            footer_background: Some("#112233".to_string()),
            inactive_view: Some("red".to_string()),
            ..ThemeColors::default()
        },
    };
    let theme = Theme::from_config(&config).unwrap();
    assert_eq!(theme.footer_background, Color::Rgb(0x11, 0x22, 0x33));
    assert_eq!(theme.primary_text, Theme::classic().primary_text);
    assert_eq!(theme.gray(), Color::Red);
}

#[test]
fn gray_falls_back_to_faint_text() {
    let theme = Theme::dash();
    assert_eq!(theme.inactive_view, None);
    assert_eq!(theme.gray(), theme.faint_text);
}
