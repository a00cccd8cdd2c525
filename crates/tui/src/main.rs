mod app;
mod error;
mod logger;

use crate::app::config::AppConfig;
use crate::app::handlers::{handle_dialog_click, handle_dialog_key, handle_page_key};
use crate::app::view::ui::{accessible_label, draw_ui};
use crate::app::AppState;
use crate::error::AppError;
use crate::logger::setup_logger;
use crossterm::cursor::Show;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEventKind,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::fmt;
use std::time::{Duration, Instant};

const APP_TITLE: &str = "Template App";
const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Clone, Copy, Debug)]
struct KeyDebugLog {
    code: KeyCode,
    modifiers: KeyModifiers,
    kind: KeyEventKind,
}

impl KeyDebugLog {
    fn from_event(event: &KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
            kind: event.kind,
        }
    }
}

impl fmt::Display for KeyDebugLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "code={:?} mods={:?} kind={:?}",
            self.code, self.modifiers, self.kind
        )
    }
}

struct TerminalRestoreGuard;

impl Drop for TerminalRestoreGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = std::io::stdout();
        let _ = stdout.execute(DisableMouseCapture);
        let _ = stdout.execute(LeaveAlternateScreen);
        let _ = stdout.execute(Show);
    }
}

/// Dialog first, then the page. Callback failures are surfaced as toasts;
/// anything else aborts the app.
fn dispatch_key(app: &mut AppState, key: KeyEvent) -> Result<(), AppError> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return Ok(());
    }
    let result = match handle_dialog_key(app, key.code) {
        Ok(true) => Ok(()),
        Ok(false) => handle_page_key(app, key.code),
        Err(error) => Err(error),
    };
    recover(app, "key handler failed", result)
}

fn dispatch_click(app: &mut AppState, column: u16, row: u16) -> Result<(), AppError> {
    let result = handle_dialog_click(app, column, row).map(|_| ());
    recover(app, "dialog action failed", result)
}

fn recover(app: &AppState, context: &str, result: Result<(), AppError>) -> Result<(), AppError> {
    match result {
        Err(error) if !error.is_fatal() => {
            app.report_error(context, &error);
            Ok(())
        }
        other => other,
    }
}

fn window_title(app: &AppState) -> Result<String, AppError> {
    let label = match app.providers.use_modal()?.current_request() {
        Some(request) => accessible_label(&request),
        None => app.route.metadata().title.to_string(),
    };
    Ok(format!("{APP_TITLE} - {label}"))
}

fn run(app: &mut AppState) -> Result<(), AppError> {
    let mut stdout = std::io::stdout();
    let _restore_guard = TerminalRestoreGuard;
    stdout.execute(EnterAlternateScreen)?;
    enable_raw_mode()?;
    let _ = stdout.execute(EnableMouseCapture);
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.clear()?;

    let mut needs_redraw = true;
    let mut title = String::new();

    while !app.should_quit {
        if app.tick(Instant::now()) {
            needs_redraw = true;
        }

        if needs_redraw {
            let mut drawn = Ok(());
            terminal.draw(|f| drawn = draw_ui(f, app))?;
            drawn?;
            needs_redraw = false;

            let next_title = window_title(app)?;
            if next_title != title {
                let _ = terminal.backend_mut().execute(SetTitle(&next_title));
                title = next_title;
            }
        }

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                tracing::trace!(key = %KeyDebugLog::from_event(&key), "key");
                dispatch_key(app, key)?;
                needs_redraw = true;
            }
            Event::Mouse(mouse) => {
                let left_click = mouse.kind == MouseEventKind::Down(MouseButton::Left);
                if left_click && app.dialog_visible()? {
                    dispatch_click(app, mouse.column, mouse.row)?;
                    needs_redraw = true;
                }
            }
            Event::Resize(_, _) => needs_redraw = true,
            _ => {}
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env_and_args();
    if let Err(error) = setup_logger(config.log_level(), &config.log_file) {
        eprintln!("{error}; continuing without a log file");
    }
    for warning in &config.warnings {
        tracing::warn!("{warning}");
    }
    tracing::info!(
        route = config.route.path(),
        theme = %config.theme,
        dev_menu = config.dev_menu,
        "starting"
    );

    let mut app = AppState::new(&config);
    let outcome = run(&mut app);
    shutdown(&mut app, outcome).map_err(Into::into)
}

/// Unmounts the providers without letting a teardown failure replace the
/// error that ended the loop. A failing `on_close` at this point is only
/// logged.
fn shutdown(app: &mut AppState, outcome: Result<(), AppError>) -> Result<(), AppError> {
    if let Err(error) = &outcome {
        tracing::error!(%error, "exiting with error");
    }
    match app.providers.unmount() {
        Err(error) if outcome.is_ok() && error.is_fatal() => return Err(error),
        Err(error) => tracing::warn!(%error, "unmount failed"),
        Ok(()) => {}
    }
    outcome
}
