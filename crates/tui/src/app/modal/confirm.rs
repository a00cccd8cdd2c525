use super::{
    fire, Callback, DialogAction, DialogRequest, ModalController, Renderable, WeakModalController,
};
use crate::error::CallbackResult;
use std::rc::Rc;

pub const DEFAULT_TITLE: &str = "Are you sure?";
pub const DEFAULT_CONFIRM_LABEL: &str = "Confirm";
pub const DEFAULT_CANCEL_LABEL: &str = "Cancel";

/// Input for [`confirm_action`]. Built once, consumed when the dialog is shown.
pub struct ConfirmationSpec {
    action: Callback,
    title: Option<String>,
    description: Option<String>,
    body: Option<Box<dyn Renderable>>,
    on_confirm: Option<Callback>,
    on_cancel: Option<Callback>,
    confirm_label: String,
    cancel_label: String,
    close_on_confirm: bool,
}

impl ConfirmationSpec {
    pub fn new(action: impl Fn() -> CallbackResult + 'static) -> Self {
        Self {
            action: Rc::new(action),
            title: None,
            description: None,
            body: None,
            on_confirm: None,
            on_cancel: None,
            confirm_label: DEFAULT_CONFIRM_LABEL.to_string(),
            cancel_label: DEFAULT_CANCEL_LABEL.to_string(),
            close_on_confirm: true,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn body(mut self, body: impl Renderable + 'static) -> Self {
        self.body = Some(Box::new(body));
        self
    }

    pub fn on_confirm(mut self, hook: impl Fn() -> CallbackResult + 'static) -> Self {
        self.on_confirm = Some(Rc::new(hook));
        self
    }

    pub fn on_cancel(mut self, hook: impl Fn() -> CallbackResult + 'static) -> Self {
        self.on_cancel = Some(Rc::new(hook));
        self
    }

    pub fn confirm_label(mut self, label: impl Into<String>) -> Self {
        self.confirm_label = label.into();
        self
    }

    pub fn cancel_label(mut self, label: impl Into<String>) -> Self {
        self.cancel_label = label.into();
        self
    }

    pub fn close_on_confirm(mut self, close_on_confirm: bool) -> Self {
        self.close_on_confirm = close_on_confirm;
        self
    }
}

/// Confirmation helper bound to a modal controller.
#[derive(Clone)]
pub struct Confirmation {
    modal: ModalController,
}

impl Confirmation {
    pub fn new(modal: ModalController) -> Self {
        Self { modal }
    }

    pub fn confirm_action(&self, spec: ConfirmationSpec) -> CallbackResult {
        confirm_action(&self.modal, spec)
    }
}

fn close_through(modal: &WeakModalController) -> CallbackResult {
    modal.upgrade().map_or(Ok(()), |modal| modal.close())
}

/// Shows a strict `[Cancel, Confirm]` dialog.
///
/// Cancel closes first and then runs `on_cancel`. Confirm runs `action`,
/// then `on_confirm` when `action` succeeded, then closes when
/// `close_on_confirm` is set, whether or not `action` succeeded. The first
/// failure is handed back to whoever activated the button.
pub fn confirm_action(modal: &ModalController, spec: ConfirmationSpec) -> CallbackResult {
    let ConfirmationSpec {
        action,
        title,
        description,
        body,
        on_confirm,
        on_cancel,
        confirm_label,
        cancel_label,
        close_on_confirm,
    } = spec;

    let cancel_modal = modal.downgrade();
    let handle_cancel = move || {
        close_through(&cancel_modal)?;
        fire(on_cancel.as_ref())
    };

    let confirm_modal = modal.downgrade();
    let handle_confirm = move || {
        let outcome = action().and_then(|()| fire(on_confirm.as_ref()));
        if let Err(error) = &outcome {
            tracing::warn!(%error, close_on_confirm, "confirmed action failed");
        }
        let closed = if close_on_confirm {
            close_through(&confirm_modal)
        } else {
            Ok(())
        };
        outcome.and(closed)
    };

    let mut request = DialogRequest::new(title.unwrap_or_else(|| DEFAULT_TITLE.to_string()))
        .strict(true)
        .actions(vec![
            DialogAction::new(cancel_label, handle_cancel),
            DialogAction::new(confirm_label, handle_confirm),
        ]);
    request.description = description;
    request.body = body;

    modal.modal(request)
}
