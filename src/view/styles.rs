//! Colors and text styles.

use crate::config::PaletteOverrides;
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Whether color output is enabled.
///
/// Determined by:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Explicitly enabled or disabled colors.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Palette =====

/// Resolved styles for every part of the screen.
///
/// Without colors, only modifiers remain and [`selection`](Self::selection)
/// has no background; the list falls back to reverse video for the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Change ids.
    pub change_id: Style,
    /// Pane titles.
    pub title: Style,
    /// Cursor row background.
    pub selection: Style,
    /// Borders and the idle divider.
    pub border: Style,
    /// Divider while being dragged.
    pub divider_active: Style,
    /// Body text and hints.
    pub muted: Style,
    /// Marked revision indicator.
    pub marked: Style,
    /// Context menu body.
    pub menu: Style,
    /// Status bar.
    pub status: Style,
    /// Clickable buttons.
    pub button: Style,
}

impl Palette {
    /// Built-in colors with `overrides` applied.
    pub fn new(colors: ColorConfig, overrides: &PaletteOverrides) -> Self {
        if !colors.colors_enabled() {
            return Self::monochrome();
        }

        let accent = overrides.accent.unwrap_or(Color::Cyan);
        let selection = overrides.selection.unwrap_or(Color::Rgb(0x30, 0x34, 0x46));
        let border = overrides.border.unwrap_or(Color::DarkGray);
        let muted = overrides.muted.unwrap_or(Color::Gray);
        let menu = overrides.menu.unwrap_or(Color::Rgb(0x23, 0x26, 0x34));

        Self {
            change_id: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            title: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            selection: Style::default().bg(selection),
            border: Style::default().fg(border),
            divider_active: Style::default().fg(accent),
            muted: Style::default().fg(muted),
            marked: Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            menu: Style::default().fg(Color::White).bg(menu),
            status: Style::default().fg(Color::Black).bg(accent),
            button: Style::default().fg(accent).add_modifier(Modifier::UNDERLINED),
        }
    }

    /// Styles that use modifiers only.
    pub fn monochrome() -> Self {
        let plain = Style::default();
        Self {
            change_id: plain.add_modifier(Modifier::BOLD),
            title: plain.add_modifier(Modifier::BOLD),
            selection: plain,
            border: plain,
            divider_active: plain.add_modifier(Modifier::BOLD),
            muted: plain,
            marked: plain.add_modifier(Modifier::BOLD),
            menu: plain,
            status: plain.add_modifier(Modifier::REVERSED),
            button: plain.add_modifier(Modifier::UNDERLINED),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(ColorConfig::new(true), &PaletteOverrides::default())
    }
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial(no_color_env)]
    fn color_config_respects_no_color_flag() {
        let config = ColorConfig::from_env_and_args(true);
        assert!(!config.colors_enabled(), "--no-color flag should disable colors");
    }

    #[test]
    #[serial(no_color_env)]
    fn color_config_respects_no_color_env_var() {
        std::env::set_var("NO_COLOR", "1");
        let config = ColorConfig::from_env_and_args(false);
        std::env::remove_var("NO_COLOR");
        assert!(!config.colors_enabled(), "NO_COLOR env var should disable colors");
    }

    #[test]
    #[serial(no_color_env)]
    fn color_config_enabled_by_default() {
        std::env::remove_var("NO_COLOR");
        assert!(ColorConfig::from_env_and_args(false).colors_enabled());
    }

    #[test]
    fn overrides_replace_builtin_colors() {
        let overrides = PaletteOverrides {
            accent: Some(Color::Magenta),
            selection: Some(Color::Blue),
            ..PaletteOverrides::default()
        };
        let palette = Palette::new(ColorConfig::new(true), &overrides);

        assert_eq!(palette.change_id.fg, Some(Color::Magenta));
        assert_eq!(palette.status.bg, Some(Color::Magenta));
        assert_eq!(palette.selection.bg, Some(Color::Blue));
        assert_eq!(palette.border.fg, Some(Color::DarkGray));
    }

    #[test]
    fn disabled_colors_ignore_overrides() {
        let overrides = PaletteOverrides {
            accent: Some(Color::Magenta),
            ..PaletteOverrides::default()
        };
        let palette = Palette::new(ColorConfig::new(false), &overrides);

        assert_eq!(palette, Palette::monochrome());
        assert_eq!(palette.selection.bg, None);
        assert_eq!(palette.change_id.fg, None);
    }
}
