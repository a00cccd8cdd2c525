pub(crate) mod config;
pub(crate) mod handlers;
pub(crate) mod modal;
pub(crate) mod providers;
pub(crate) mod routes;
pub(crate) mod state;
pub(crate) mod util;
pub(crate) mod view;

use crate::app::config::AppConfig;
use crate::app::providers::Providers;
use crate::app::routes::Route;
use crate::app::state::{DevMenuState, DialogLayout, SessionSnapshot};
use crate::error::AppError;
use std::time::Instant;

pub struct AppState {
    pub providers: Providers,
    pub route: Route,
    pub dev_menu: DevMenuState,
    pub dialog_layout: Option<DialogLayout>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            providers: Providers::mount(config),
            route: config.route,
            dev_menu: DevMenuState::new(config.dev_menu),
            dialog_layout: None,
            should_quit: false,
        }
    }

    pub fn navigate(&mut self, route: Route) {
        if self.route != route {
            tracing::debug!(from = self.route.path(), to = route.path(), "navigate");
            self.route = route;
        }
    }

    pub fn dialog_visible(&self) -> Result<bool, AppError> {
        Ok(self.providers.use_modal()?.current_request().is_some())
    }

    /// Expires toasts; returns whether anything changed on screen.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.providers.toaster.prune(now)
    }

    pub fn session_snapshot(&self) -> Result<SessionSnapshot, AppError> {
        let modal = self.providers.use_modal()?;
        Ok(SessionSnapshot {
            route: self.route.path(),
            theme: self.providers.theme.mode,
            appearance: self.providers.theme.appearance(),
            modal: modal.snapshot(),
            toasts: self.providers.toaster.len(),
        })
    }

    pub fn report_error(&self, context: &str, error: &AppError) {
        tracing::error!(%error, "{context}");
        self.providers
            .toaster
            .push_error(format!("{context}: {error}"));
    }
}

#[cfg(test)]
mod tests {
    use super::AppState;
    use crate::app::config::AppConfig;
    use crate::app::modal::DialogRequest;
    use crate::app::routes::Route;
    use crate::app::state::ToastKind;
    use crate::error::{AppError, CallbackError};

    #[test]
    fn starts_on_configured_route_with_mounted_providers() {
        let config = AppConfig {
            route: Route::Hooks,
            dev_menu: true,
            ..AppConfig::default()
        };
        let app = AppState::new(&config);
        assert_eq!(app.route, Route::Hooks);
        assert!(app.dev_menu.expanded);
        assert!(app.providers.use_modal().is_ok());
        assert!(!app.dialog_visible().unwrap());
    }

    #[test]
    fn snapshot_reflects_open_dialog() {
        let app = AppState::new(&AppConfig::default());
        app.providers
            .use_modal()
            .unwrap()
            .modal(DialogRequest::new("Create organization"))
            .unwrap();

        let snapshot = app.session_snapshot().unwrap();
        assert_eq!(snapshot.route, "/");
        assert!(snapshot.modal.is_open);
        assert_eq!(snapshot.modal.title.as_deref(), Some("Create organization"));
        assert!(app.dialog_visible().unwrap());
    }

    #[test]
    fn dialog_visibility_fails_fast_after_unmount() {
        let mut app = AppState::new(&AppConfig::default());
        app.providers.unmount().unwrap();

        assert!(matches!(
            app.dialog_visible(),
            Err(AppError::ContextUnavailable { .. })
        ));
    }

    #[test]
    fn report_error_pushes_error_toast() {
        let app = AppState::new(&AppConfig::default());
        app.report_error(
            "dialog action failed",
            &AppError::from(CallbackError::new("disk full")),
        );
        let toasts = app.providers.toaster.visible();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].kind, ToastKind::Error);
        assert_eq!(
            toasts[0].message,
            "dialog action failed: callback failed: disk full"
        );
    }
}
