use crate::app::modal::{confirm_action, ConfirmationSpec, DialogAction, DialogRequest};
use crate::app::providers::Providers;
use crate::app::routes::Route;
use crate::app::AppState;
use crate::error::{AppError, CallbackError};
use crossterm::event::KeyCode;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use std::cell::Cell;
use std::rc::Rc;

pub fn handle_page_key(app: &mut AppState, key: KeyCode) -> Result<(), AppError> {
    match key {
        KeyCode::F(2) => app.dev_menu.toggle(),
        KeyCode::Char('[') if app.dev_menu.expanded => app.dev_menu.fold_json(),
        KeyCode::Char(']') if app.dev_menu.expanded => app.dev_menu.expand_json(),
        KeyCode::Char('t') => {
            let mode = app.providers.theme.toggle();
            app.providers.toaster.push(format!("Theme: {mode}"));
        }
        KeyCode::Tab => app.navigate(app.route.next()),
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char(ch @ '1'..='9') => {
            let index = ch as usize - '1' as usize;
            if let Some(route) = Route::from_index(index) {
                app.navigate(route);
            }
        }
        KeyCode::Char(ch) => run_page_action(app.route, &app.providers, ch)?,
        _ => {}
    }
    Ok(())
}

fn run_page_action(route: Route, providers: &Providers, key: char) -> Result<(), AppError> {
    match (route, key) {
        (Route::Hooks, 'm') => show_casual_modal(providers),
        (Route::Hooks, 's') => show_strict_modal(providers),
        (Route::Hooks, 'd') => confirm_delete_account(providers),
        (Route::Hooks, 'k') => confirm_keep_open(providers),
        (Route::Hooks, 'o') => reopen_last_dialog(providers),
        (Route::Components, 'h') => show_hidden_title_modal(providers),
        _ => Ok(()),
    }
}

fn show_casual_modal(providers: &Providers) -> Result<(), AppError> {
    let modal = providers.use_modal()?;
    let opened = providers.toaster.clone();
    let closed = providers.toaster.clone();
    modal.modal(
        DialogRequest::new("Create organization")
            .description("Organizations group projects and members.")
            .body("Content")
            .footer("Esc or a click outside closes this dialog.")
            .on_open(move || {
                opened.push("Modal opened");
                Ok(())
            })
            .on_close(move || {
                closed.push("Modal closed");
                Ok(())
            }),
    )?;
    Ok(())
}

fn show_strict_modal(providers: &Providers) -> Result<(), AppError> {
    let modal = providers.use_modal()?;
    let handle = modal.downgrade();
    modal.modal(
        DialogRequest::new("Terms updated")
            .description("Read before continuing.")
            .body("This dialog ignores Esc and clicks outside. Use the button below.")
            .strict(true)
            .actions(vec![DialogAction::new("Close", move || {
                handle.upgrade().map_or(Ok(()), |modal| modal.close())
            })]),
    )?;
    Ok(())
}

fn confirm_delete_account(providers: &Providers) -> Result<(), AppError> {
    let removed = providers.toaster.clone();
    let confirmed = providers.toaster.clone();
    let cancelled = providers.toaster.clone();
    providers.use_confirmation()?.confirm_action(
        ConfirmationSpec::new(move || {
            removed.push("REMOVE");
            Ok(())
        })
        .title("Are you sure?")
        .description("This will delete your account and remove your data from our servers.")
        .body("Projects, API keys and billing history are removed with it.")
        .on_confirm(move || {
            confirmed.push("CONFIRM");
            Ok(())
        })
        .on_cancel(move || {
            cancelled.push("CANCEL");
            Ok(())
        }),
    )?;
    Ok(())
}

const MAX_DRAFTS: u32 = 3;

fn confirm_keep_open(providers: &Providers) -> Result<(), AppError> {
    let toaster = providers.toaster.clone();
    let saved = Rc::new(Cell::new(0_u32));
    confirm_action(
        &providers.use_modal()?,
        ConfirmationSpec::new(move || {
            if saved.get() >= MAX_DRAFTS {
                return Err(CallbackError::new(format!(
                    "draft limit of {MAX_DRAFTS} reached"
                )));
            }
            saved.set(saved.get() + 1);
            toaster.push(format!("Saved draft #{}", saved.get()));
            Ok(())
        })
        .title("Save draft?")
        .description("Confirm saves and keeps this dialog open.")
        .confirm_label("Save")
        .cancel_label("Done")
        .close_on_confirm(false),
    )?;
    Ok(())
}

fn reopen_last_dialog(providers: &Providers) -> Result<(), AppError> {
    let modal = providers.use_modal()?;
    if !modal.is_open() {
        modal.open()?;
    }
    Ok(())
}

fn show_hidden_title_modal(providers: &Providers) -> Result<(), AppError> {
    providers.use_modal()?.modal(
        DialogRequest::new("Image preview")
            .description("Preview of the selected image")
            .header(vec![Line::from(vec![
                Span::styled("photo.png", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw("  1920x1080"),
            ])])
            .hide_title(true)
            .body("[ image ]"),
    )?;
    Ok(())
}
