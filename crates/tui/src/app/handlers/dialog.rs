use crate::app::AppState;
use crate::error::AppError;
use crossterm::event::KeyCode;

/// Routes a key to the visible dialog. Returns `false` when no dialog is on
/// screen; otherwise the dialog swallows the key.
pub fn handle_dialog_key(app: &AppState, key: KeyCode) -> Result<bool, AppError> {
    let modal = app.providers.use_modal()?;
    let Some(request) = modal.current_request() else {
        return Ok(false);
    };

    match key {
        KeyCode::Left | KeyCode::Up | KeyCode::BackTab => modal.select_prev_action(),
        KeyCode::Right | KeyCode::Down | KeyCode::Tab => modal.select_next_action(),
        KeyCode::Enter | KeyCode::Char(' ') => modal.activate_selected()?,
        KeyCode::Esc => modal.dismiss()?,
        KeyCode::Char(ch) => {
            // 1-based shortcuts for footer actions.
            if let Some(index) = ch
                .to_digit(10)
                .and_then(|digit| (digit as usize).checked_sub(1))
                .filter(|index| *index < request.action_count())
            {
                modal.activate_action(index)?;
            }
        }
        _ => {}
    }
    Ok(true)
}

/// Left click while a dialog is visible: actions activate, clicks outside
/// the panel dismiss casual dialogs.
pub fn handle_dialog_click(app: &AppState, column: u16, row: u16) -> Result<bool, AppError> {
    let modal = app.providers.use_modal()?;
    if modal.current_request().is_none() {
        return Ok(false);
    }
    let Some(layout) = app.dialog_layout.as_ref() else {
        return Ok(true);
    };
    if let Some(index) = layout.action_at(column, row) {
        modal.activate_action(index)?;
    } else if !layout.contains(column, row) {
        modal.dismiss()?;
    }
    Ok(true)
}
