//! Modal controller: owns the single active dialog and its open/closed state.
//!
//! A [`ModalController`] is a cheap handle onto shared state living on the UI
//! thread. `modal()` replaces whatever request was active (no queueing),
//! `open()` re-shows the last request and `close()` hides it. Lifecycle hooks
//! run after the state change with no borrow held, so a hook may call back
//! into the controller.

mod confirm;

pub use confirm::{confirm_action, Confirmation, ConfirmationSpec};

use crate::app::util::text::wrap_text;
use crate::error::CallbackResult;
use ratatui::text::Line;
use serde::Serialize;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

pub type Callback = Rc<dyn Fn() -> CallbackResult>;

/// Opaque dialog content. The controller never inspects it; the view asks
/// for lines once it knows the available width.
pub trait Renderable {
    fn lines(&self, width: usize) -> Vec<Line<'static>>;
}

impl Renderable for String {
    fn lines(&self, width: usize) -> Vec<Line<'static>> {
        wrap_text(self, width).into_iter().map(Line::from).collect()
    }
}

impl Renderable for &'static str {
    fn lines(&self, width: usize) -> Vec<Line<'static>> {
        wrap_text(self, width).into_iter().map(Line::from).collect()
    }
}

impl Renderable for Vec<Line<'static>> {
    fn lines(&self, _width: usize) -> Vec<Line<'static>> {
        self.clone()
    }
}

pub struct DialogAction {
    pub label: String,
    pub handler: Callback,
}

impl DialogAction {
    pub fn new(label: impl Into<String>, handler: impl Fn() -> CallbackResult + 'static) -> Self {
        Self {
            label: label.into(),
            handler: Rc::new(handler),
        }
    }
}

pub enum Footer {
    Content(Box<dyn Renderable>),
    Actions(Vec<DialogAction>),
}

pub struct DialogRequest {
    pub title: String,
    pub description: Option<String>,
    pub header: Option<Box<dyn Renderable>>,
    pub body: Option<Box<dyn Renderable>>,
    pub footer: Option<Footer>,
    /// Strict dialogs can only be left through an explicit action.
    pub strict: bool,
    /// Hides the title visually; it is still exposed as the dialog label.
    pub hide_title: bool,
    pub on_open: Option<Callback>,
    pub on_close: Option<Callback>,
}

impl DialogRequest {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            header: None,
            body: None,
            footer: None,
            strict: false,
            hide_title: false,
            on_open: None,
            on_close: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn header(mut self, header: impl Renderable + 'static) -> Self {
        self.header = Some(Box::new(header));
        self
    }

    pub fn body(mut self, body: impl Renderable + 'static) -> Self {
        self.body = Some(Box::new(body));
        self
    }

    pub fn footer(mut self, footer: impl Renderable + 'static) -> Self {
        self.footer = Some(Footer::Content(Box::new(footer)));
        self
    }

    pub fn actions(mut self, actions: Vec<DialogAction>) -> Self {
        self.footer = Some(Footer::Actions(actions));
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn hide_title(mut self, hide_title: bool) -> Self {
        self.hide_title = hide_title;
        self
    }

    pub fn on_open(mut self, hook: impl Fn() -> CallbackResult + 'static) -> Self {
        self.on_open = Some(Rc::new(hook));
        self
    }

    pub fn on_close(mut self, hook: impl Fn() -> CallbackResult + 'static) -> Self {
        self.on_close = Some(Rc::new(hook));
        self
    }

    pub fn action(&self, index: usize) -> Option<&DialogAction> {
        match &self.footer {
            Some(Footer::Actions(actions)) => actions.get(index),
            _ => None,
        }
    }

    pub fn action_count(&self) -> usize {
        match &self.footer {
            Some(Footer::Actions(actions)) => actions.len(),
            _ => 0,
        }
    }

    pub fn action_labels(&self) -> Vec<String> {
        match &self.footer {
            Some(Footer::Actions(actions)) => {
                actions.iter().map(|action| action.label.clone()).collect()
            }
            _ => Vec::new(),
        }
    }
}

impl fmt::Debug for DialogRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialogRequest")
            .field("title", &self.title)
            .field("description", &self.description)
            .field("strict", &self.strict)
            .field("hide_title", &self.hide_title)
            .field("actions", &self.action_labels())
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModalSnapshot {
    pub is_open: bool,
    pub title: Option<String>,
    pub strict: bool,
    pub actions: Vec<String>,
}

#[derive(Default)]
struct ModalState {
    is_open: bool,
    // Kept after close so `open()` can show it again; only observable while open.
    request: Option<Rc<DialogRequest>>,
    selected_action: usize,
}

impl ModalState {
    fn visible_request(&self) -> Option<&Rc<DialogRequest>> {
        self.request.as_ref().filter(|_| self.is_open)
    }
}

#[derive(Clone, Default)]
pub struct ModalController {
    state: Rc<RefCell<ModalState>>,
}

#[derive(Clone)]
pub struct WeakModalController {
    state: Weak<RefCell<ModalState>>,
}

impl WeakModalController {
    pub fn upgrade(&self) -> Option<ModalController> {
        self.state.upgrade().map(|state| ModalController { state })
    }
}

fn fire(hook: Option<&Callback>) -> CallbackResult {
    hook.map_or(Ok(()), |hook| hook())
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn downgrade(&self) -> WeakModalController {
        WeakModalController {
            state: Rc::downgrade(&self.state),
        }
    }

    /// Shows `request`, discarding any previous one without running its
    /// `on_close`.
    pub fn modal(&self, request: DialogRequest) -> CallbackResult {
        let request = Rc::new(request);
        {
            let mut state = self.state.borrow_mut();
            if let Some(previous) = state.visible_request() {
                tracing::debug!(previous = %previous.title, "replacing active dialog");
            }
            state.request = Some(Rc::clone(&request));
            state.is_open = true;
            state.selected_action = 0;
        }
        tracing::debug!(title = %request.title, strict = request.strict, "dialog opened");
        fire(request.on_open.as_ref())
    }

    pub fn open(&self) -> CallbackResult {
        let request = {
            let mut state = self.state.borrow_mut();
            if state.is_open {
                return Ok(());
            }
            state.is_open = true;
            state.selected_action = 0;
            state.request.clone()
        };
        let Some(request) = request else {
            tracing::debug!("dialog opened without a request; nothing to render");
            return Ok(());
        };
        tracing::debug!(title = %request.title, "dialog reopened");
        fire(request.on_open.as_ref())
    }

    pub fn close(&self) -> CallbackResult {
        let request = {
            let mut state = self.state.borrow_mut();
            if !state.is_open {
                return Ok(());
            }
            state.is_open = false;
            state.request.clone()
        };
        let Some(request) = request else {
            return Ok(());
        };
        tracing::debug!(title = %request.title, "dialog closed");
        fire(request.on_close.as_ref())
    }

    /// Click-outside / Escape. Closes casual dialogs, ignored for strict ones.
    pub fn dismiss(&self) -> CallbackResult {
        match self.current_request().map(|request| request.strict) {
            Some(false) => self.close(),
            Some(true) => {
                tracing::trace!("ignoring dismissal of strict dialog");
                Ok(())
            }
            None => Ok(()),
        }
    }

    pub fn is_open(&self) -> bool {
        self.state.borrow().is_open
    }

    /// The active request, present only while the dialog is open.
    pub fn current_request(&self) -> Option<Rc<DialogRequest>> {
        self.state.borrow().visible_request().cloned()
    }

    pub fn selected_action(&self) -> usize {
        self.state.borrow().selected_action
    }

    pub fn select_next_action(&self) {
        self.move_selection(true);
    }

    pub fn select_prev_action(&self) {
        self.move_selection(false);
    }

    fn move_selection(&self, forward: bool) {
        let mut state = self.state.borrow_mut();
        let count = state
            .visible_request()
            .map(|request| request.action_count())
            .unwrap_or(0);
        if count == 0 {
            return;
        }
        let current = state.selected_action.min(count - 1);
        state.selected_action = if forward {
            (current + 1) % count
        } else {
            (current + count - 1) % count
        };
    }

    pub fn activate_action(&self, index: usize) -> CallbackResult {
        let handler = {
            let mut state = self.state.borrow_mut();
            let Some(handler) = state
                .visible_request()
                .and_then(|request| request.action(index))
                .map(|action| Rc::clone(&action.handler))
            else {
                return Ok(());
            };
            state.selected_action = index;
            handler
        };
        tracing::debug!(index, "dialog action activated");
        handler()
    }

    pub fn activate_selected(&self) -> CallbackResult {
        self.activate_action(self.selected_action())
    }

    pub fn snapshot(&self) -> ModalSnapshot {
        let state = self.state.borrow();
        let request = state.visible_request();
        ModalSnapshot {
            is_open: state.is_open,
            title: request.map(|request| request.title.clone()),
            strict: request.map(|request| request.strict).unwrap_or(false),
            actions: request
                .map(|request| request.action_labels())
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::{DialogAction, DialogRequest, ModalController};
    use crate::error::{CallbackError, CallbackResult};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    pub(crate) struct Recorder {
        events: Rc<RefCell<Vec<String>>>,
    }

    impl Recorder {
        pub(crate) fn hook(&self, name: &str) -> impl Fn() -> CallbackResult + 'static {
            let events = Rc::clone(&self.events);
            let name = name.to_string();
            move || {
                events.borrow_mut().push(name.clone());
                Ok(())
            }
        }

        pub(crate) fn push(&self, event: impl Into<String>) {
            self.events.borrow_mut().push(event.into());
        }

        pub(crate) fn events(&self) -> Vec<String> {
            self.events.borrow().clone()
        }
    }

    fn request_with_hooks(title: &str, recorder: &Recorder) -> DialogRequest {
        DialogRequest::new(title)
            .on_open(recorder.hook(&format!("{title}:open")))
            .on_close(recorder.hook(&format!("{title}:close")))
    }

    #[test]
    fn starts_closed_with_nothing_rendered() {
        let modal = ModalController::new();
        assert!(!modal.is_open());
        assert!(modal.current_request().is_none());
    }

    #[test]
    fn modal_opens_and_fires_on_open() {
        let recorder = Recorder::default();
        let modal = ModalController::new();

        modal.modal(request_with_hooks("r1", &recorder)).unwrap();

        assert!(modal.is_open());
        assert_eq!(modal.current_request().unwrap().title, "r1");
        assert_eq!(recorder.events(), vec!["r1:open"]);
    }

    #[test]
    fn replacing_a_request_never_closes_the_previous_one() {
        let recorder = Recorder::default();
        let modal = ModalController::new();

        modal.modal(request_with_hooks("r1", &recorder)).unwrap();
        modal.modal(request_with_hooks("r2", &recorder)).unwrap();

        assert_eq!(modal.current_request().unwrap().title, "r2");
        assert_eq!(recorder.events(), vec!["r1:open", "r2:open"]);

        modal.close().unwrap();
        assert_eq!(recorder.events(), vec!["r1:open", "r2:open", "r2:close"]);
    }

    #[test]
    fn close_hides_and_fires_on_close_once() {
        let recorder = Recorder::default();
        let modal = ModalController::new();
        modal.modal(request_with_hooks("r1", &recorder)).unwrap();

        modal.close().unwrap();
        modal.close().unwrap();

        assert!(!modal.is_open());
        assert!(modal.current_request().is_none());
        assert_eq!(recorder.events(), vec!["r1:open", "r1:close"]);
    }

    #[test]
    fn close_when_never_opened_is_a_no_op() {
        let modal = ModalController::new();
        assert!(modal.close().is_ok());
        assert!(!modal.is_open());
    }

    #[test]
    fn open_without_request_renders_nothing() {
        let modal = ModalController::new();
        modal.open().unwrap();
        assert!(modal.is_open());
        assert!(modal.current_request().is_none());
    }

    #[test]
    fn open_reshows_last_request_and_fires_on_open_again() {
        let recorder = Recorder::default();
        let modal = ModalController::new();
        modal.modal(request_with_hooks("r1", &recorder)).unwrap();
        modal.close().unwrap();

        modal.open().unwrap();
        modal.open().unwrap();

        assert_eq!(modal.current_request().unwrap().title, "r1");
        assert_eq!(recorder.events(), vec!["r1:open", "r1:close", "r1:open"]);
    }

    #[test]
    fn dismiss_closes_only_casual_dialogs() {
        let modal = ModalController::new();

        modal.modal(DialogRequest::new("strict").strict(true)).unwrap();
        modal.dismiss().unwrap();
        assert!(modal.is_open());

        modal.modal(DialogRequest::new("casual")).unwrap();
        modal.dismiss().unwrap();
        assert!(!modal.is_open());
    }

    #[test]
    fn hooks_may_reenter_the_controller() {
        let modal = ModalController::new();
        let reopen = modal.clone();
        modal
            .modal(DialogRequest::new("first").on_close(move || {
                reopen.modal(DialogRequest::new("second"))
            }))
            .unwrap();

        modal.close().unwrap();

        assert!(modal.is_open());
        assert_eq!(modal.current_request().unwrap().title, "second");
    }

    #[test]
    fn hook_failures_propagate_after_the_transition() {
        let modal = ModalController::new();
        let result = modal.modal(
            DialogRequest::new("broken").on_open(|| Err(CallbackError::new("on_open failed"))),
        );

        assert_eq!(result, Err(CallbackError::new("on_open failed")));
        assert!(modal.is_open());
    }

    #[test]
    fn action_selection_wraps_and_activation_runs_handler() {
        let recorder = Recorder::default();
        let modal = ModalController::new();
        modal
            .modal(DialogRequest::new("pick").actions(vec![
                DialogAction::new("One", recorder.hook("one")),
                DialogAction::new("Two", recorder.hook("two")),
            ]))
            .unwrap();

        assert_eq!(modal.selected_action(), 0);
        modal.select_prev_action();
        assert_eq!(modal.selected_action(), 1);
        modal.select_next_action();
        assert_eq!(modal.selected_action(), 0);

        modal.activate_action(1).unwrap();
        modal.activate_selected().unwrap();
        modal.activate_action(7).unwrap();

        assert_eq!(recorder.events(), vec!["two", "two"]);
    }

    #[test]
    fn actions_are_inert_while_closed() {
        let recorder = Recorder::default();
        let modal = ModalController::new();
        modal
            .modal(
                DialogRequest::new("pick")
                    .actions(vec![DialogAction::new("One", recorder.hook("one"))]),
            )
            .unwrap();
        modal.close().unwrap();

        modal.activate_action(0).unwrap();

        assert!(recorder.events().is_empty());
    }

    #[test]
    fn snapshot_reports_visible_request_only() {
        let modal = ModalController::new();
        modal
            .modal(
                DialogRequest::new("Delete?")
                    .strict(true)
                    .actions(vec![DialogAction::new("Ok", || Ok(()))]),
            )
            .unwrap();

        let open = modal.snapshot();
        assert_eq!(open.title.as_deref(), Some("Delete?"));
        assert!(open.strict);
        assert_eq!(open.actions, vec!["Ok"]);

        modal.close().unwrap();
        let closed = modal.snapshot();
        assert!(!closed.is_open);
        assert_eq!(closed.title, None);
    }

    #[test]
    fn weak_handle_does_not_keep_controller_alive() {
        let modal = ModalController::new();
        let weak = modal.downgrade();
        assert!(weak.upgrade().is_some());
        drop(modal);
        assert!(weak.upgrade().is_none());
    }
}
