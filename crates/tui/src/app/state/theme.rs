use serde::Serialize;
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    System,
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::System => &["auto", "os"],
            Self::Light => &["day"],
            Self::Dark => &["night"],
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::System => Self::Light,
            Self::Light => Self::Dark,
            Self::Dark => Self::System,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const THEME_MODES: &[ThemeMode] = &[ThemeMode::System, ThemeMode::Light, ThemeMode::Dark];

pub fn parse_theme_mode(value: &str) -> Option<ThemeMode> {
    let trimmed = value.trim().to_ascii_lowercase();
    if trimmed.is_empty() {
        return Some(ThemeMode::System);
    }
    THEME_MODES.iter().copied().find(|mode| {
        trimmed == mode.as_str() || mode.aliases().iter().any(|alias| *alias == trimmed)
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    Light,
    Dark,
}

/// Resolves the terminal background from `COLORFGBG` ("fg;bg" or
/// "fg;default;bg"). ANSI 7 and 15 are light backgrounds.
pub fn appearance_from_colorfgbg(value: Option<&str>) -> Appearance {
    let background = value
        .and_then(|value| value.rsplit(';').next())
        .and_then(|bg| bg.trim().parse::<u8>().ok());
    match background {
        Some(7) | Some(15) => Appearance::Light,
        _ => Appearance::Dark,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeState {
    pub mode: ThemeMode,
    system: Appearance,
}

impl ThemeState {
    pub fn new(mode: ThemeMode, system: Appearance) -> Self {
        Self { mode, system }
    }

    pub fn from_env(mode: ThemeMode) -> Self {
        let colorfgbg = std::env::var("COLORFGBG").ok();
        Self::new(mode, appearance_from_colorfgbg(colorfgbg.as_deref()))
    }

    pub fn appearance(&self) -> Appearance {
        match self.mode {
            ThemeMode::System => self.system,
            ThemeMode::Light => Appearance::Light,
            ThemeMode::Dark => Appearance::Dark,
        }
    }

    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.next();
        tracing::debug!(mode = %self.mode, "theme toggled");
        self.mode
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new(ThemeMode::System, Appearance::Dark)
    }
}

#[cfg(test)]
mod tests {
    use super::{appearance_from_colorfgbg, parse_theme_mode, Appearance, ThemeMode, ThemeState};

    #[test]
    fn parses_names_and_aliases() {
        assert_eq!(parse_theme_mode("Dark"), Some(ThemeMode::Dark));
        assert_eq!(parse_theme_mode(" day "), Some(ThemeMode::Light));
        assert_eq!(parse_theme_mode(""), Some(ThemeMode::System));
        assert_eq!(parse_theme_mode("sepia"), None);
    }

    #[test]
    fn colorfgbg_picks_light_backgrounds() {
        assert_eq!(appearance_from_colorfgbg(Some("0;15")), Appearance::Light);
        assert_eq!(
            appearance_from_colorfgbg(Some("0;default;7")),
            Appearance::Light
        );
        assert_eq!(appearance_from_colorfgbg(Some("15;0")), Appearance::Dark);
        assert_eq!(appearance_from_colorfgbg(None), Appearance::Dark);
    }

    #[test]
    fn toggle_cycles_and_system_follows_terminal() {
        let mut theme = ThemeState::new(ThemeMode::System, Appearance::Light);
        assert_eq!(theme.appearance(), Appearance::Light);
        assert_eq!(theme.toggle(), ThemeMode::Light);
        assert_eq!(theme.toggle(), ThemeMode::Dark);
        assert_eq!(theme.appearance(), Appearance::Dark);
        assert_eq!(theme.toggle(), ThemeMode::System);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ThemeMode::Dark).unwrap(),
            "\"dark\""
        );
    }
}
