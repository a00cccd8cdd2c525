use crate::app::routes::Route;
use crate::app::state::{parse_theme_mode, ThemeMode};
use crate::logger::LOG_FILE_NAME;
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

pub const ENV_THEME: &str = "TEMPLATE_TUI_THEME";
pub const ENV_DEV_MENU: &str = "TEMPLATE_TUI_DEV_MENU";
pub const ENV_DEBUG: &str = "TEMPLATE_TUI_DEBUG";
pub const ENV_LOG_FILE: &str = "TEMPLATE_TUI_LOG_FILE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub theme: ThemeMode,
    pub route: Route,
    pub dev_menu: bool,
    pub debug: bool,
    pub log_file: PathBuf,
    /// Problems found while parsing; logged once the logger is up.
    pub warnings: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: ThemeMode::System,
            route: Route::Home,
            dev_menu: false,
            debug: false,
            log_file: std::env::temp_dir().join(LOG_FILE_NAME),
            warnings: Vec::new(),
        }
    }
}

fn truthy(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

impl AppConfig {
    pub fn from_env_and_args() -> Self {
        Self::from_sources(std::env::args().skip(1), |key| std::env::var(key).ok())
    }

    /// Environment first, then command-line flags on top.
    pub fn from_sources(
        args: impl IntoIterator<Item = impl AsRef<str>>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let mut config = Self::default();

        if let Some(value) = env(ENV_THEME) {
            config.apply_theme(&value);
        }
        if let Some(value) = env(ENV_DEV_MENU) {
            config.dev_menu = truthy(&value);
        }
        if let Some(value) = env(ENV_DEBUG) {
            config.debug = truthy(&value);
        }
        if let Some(value) = env(ENV_LOG_FILE).filter(|value| !value.trim().is_empty()) {
            config.log_file = PathBuf::from(value);
        }

        let mut args = args
            .into_iter()
            .map(|arg| arg.as_ref().to_string())
            .peekable();
        while let Some(arg) = args.next() {
            let (flag, inline) = match arg.split_once('=') {
                Some((flag, value)) => (flag.to_string(), Some(value.to_string())),
                None => (arg.clone(), None),
            };
            match flag.as_str() {
                "--dev" => config.dev_menu = true,
                "--debug" => config.debug = true,
                "--theme" | "--route" | "--log-file" => {
                    let value = match inline {
                        Some(value) => Some(value),
                        None => match args.peek() {
                            Some(next) if !next.starts_with('-') => args.next(),
                            _ => None,
                        },
                    };
                    let Some(value) = value else {
                        config.warnings.push(format!("{flag} expects a value"));
                        continue;
                    };
                    match flag.as_str() {
                        "--theme" => config.apply_theme(&value),
                        "--route" => config.apply_route(&value),
                        _ => config.log_file = PathBuf::from(value),
                    }
                }
                _ => config.warnings.push(format!("unknown argument: {arg}")),
            }
        }
        config
    }

    fn apply_theme(&mut self, value: &str) {
        match parse_theme_mode(value) {
            Some(mode) => self.theme = mode,
            None => self.warnings.push(format!("unknown theme: {value}")),
        }
    }

    fn apply_route(&mut self, value: &str) {
        match Route::from_path(value) {
            Some(route) => self.route = route,
            None => self.warnings.push(format!("unknown route: {value}")),
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.debug {
            LevelFilter::DEBUG
        } else {
            LevelFilter::INFO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, ENV_DEBUG, ENV_LOG_FILE, ENV_THEME};
    use crate::app::routes::Route;
    use crate::app::state::ThemeMode;
    use std::path::PathBuf;
    use tracing_subscriber::filter::LevelFilter;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn defaults_without_args_or_env() {
        let config = AppConfig::from_sources(Vec::<String>::new(), no_env);
        assert_eq!(config.theme, ThemeMode::System);
        assert_eq!(config.route, Route::Home);
        assert!(!config.dev_menu);
        assert_eq!(config.log_level(), LevelFilter::INFO);
        assert!(config.warnings.is_empty());
    }

    #[test]
    fn parses_flags_with_separate_and_inline_values() {
        let config = AppConfig::from_sources(
            ["--theme", "dark", "--route=/hooks", "--dev", "--log-file", "/tmp/t.log"],
            no_env,
        );
        assert_eq!(config.theme, ThemeMode::Dark);
        assert_eq!(config.route, Route::Hooks);
        assert!(config.dev_menu);
        assert_eq!(config.log_file, PathBuf::from("/tmp/t.log"));
    }

    #[test]
    fn flags_override_environment() {
        let env = |key: &str| match key {
            ENV_THEME => Some("light".to_string()),
            ENV_DEBUG => Some("true".to_string()),
            ENV_LOG_FILE => Some("/var/log/app.log".to_string()),
            _ => None,
        };
        let config = AppConfig::from_sources(["--theme=dark"], env);
        assert_eq!(config.theme, ThemeMode::Dark);
        assert!(config.debug);
        assert_eq!(config.log_level(), LevelFilter::DEBUG);
        assert_eq!(config.log_file, PathBuf::from("/var/log/app.log"));
    }

    #[test]
    fn bad_values_become_warnings() {
        let config = AppConfig::from_sources(["--theme", "sepia", "--route", "--bogus"], no_env);
        assert_eq!(config.theme, ThemeMode::System);
        assert_eq!(
            config.warnings,
            vec![
                "unknown theme: sepia".to_string(),
                "--route expects a value".to_string(),
                "unknown argument: --bogus".to_string(),
            ]
        );
    }
}
