//! Application-wide services, constructed once when the app mounts and handed
//! to whatever needs them.

use crate::app::config::AppConfig;
use crate::app::modal::{Confirmation, ModalController};
use crate::app::state::{ThemeState, Toaster};
use crate::error::AppError;

const MODAL_PROVIDER: &str = "ModalProvider";

#[derive(Default)]
pub struct Providers {
    pub theme: ThemeState,
    pub toaster: Toaster,
    modal: Option<ModalController>,
}

impl Providers {
    pub fn mount(config: &AppConfig) -> Self {
        tracing::debug!(theme = %config.theme, "mounting providers");
        Self {
            theme: ThemeState::from_env(config.theme),
            toaster: Toaster::default(),
            modal: Some(ModalController::new()),
        }
    }

    /// Tears the modal provider down, closing any dialog still on screen.
    pub fn unmount(&mut self) -> Result<(), AppError> {
        if let Some(modal) = self.modal.take() {
            modal.close()?;
            tracing::debug!("modal provider unmounted");
        }
        Ok(())
    }

    pub fn use_modal(&self) -> Result<ModalController, AppError> {
        self.modal
            .clone()
            .ok_or(AppError::ContextUnavailable {
                accessor: "use_modal",
                provider: MODAL_PROVIDER,
            })
    }

    pub fn use_confirmation(&self) -> Result<Confirmation, AppError> {
        self.modal
            .clone()
            .map(Confirmation::new)
            .ok_or(AppError::ContextUnavailable {
                accessor: "use_confirmation",
                provider: MODAL_PROVIDER,
            })
    }
}
