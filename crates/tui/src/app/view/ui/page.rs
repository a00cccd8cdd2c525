use crate::app::routes::Route;
use crate::app::AppState;
use crate::app::view::theme::Palette;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

const APP_NAME: &str = "Template App";

pub(super) fn build_nav_line(active: Route, palette: &Palette) -> Line<'static> {
    let mut spans = vec![
        Span::styled(
            format!(" {APP_NAME} "),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("│", Style::default().fg(palette.border)),
    ];
    for (index, route) in Route::all().iter().enumerate() {
        let style = if *route == active {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(palette.muted)
        };
        spans.push(Span::raw(" "));
        spans.push(Span::styled(format!("{} {}", index + 1, route.label()), style));
    }
    Line::from(spans)
}

fn page_content(route: Route) -> &'static [&'static str] {
    match route {
        Route::Home => &[
            "Content",
            "",
            "Pages live behind the numbered tabs above.",
            "The Hooks page shows the modal controller and the confirmation helper.",
        ],
        Route::Components => &[
            "Components Page Main Content",
            "",
            "h  dialog with a visually hidden title",
        ],
        Route::Hooks => &[
            "Hooks Page Main Content",
            "",
            "m  dismissible modal (Esc or click outside closes it)",
            "s  strict modal with a single Close action",
            "d  confirm account deletion",
            "k  confirmation that stays open after confirming",
            "o  reopen the last dialog",
        ],
    }
}

pub(super) fn build_page_lines(route: Route, palette: &Palette) -> Vec<Line<'static>> {
    let metadata = route.metadata();
    let mut lines = vec![
        Line::from(Span::styled(
            metadata.title,
            Style::default()
                .fg(palette.foreground)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            metadata.description,
            Style::default().fg(palette.muted),
        )),
        Line::default(),
    ];
    lines.extend(
        page_content(route)
            .iter()
            .map(|line| Line::styled(*line, Style::default().fg(palette.foreground))),
    );
    lines
}

pub(super) fn build_status_line(app: &AppState, palette: &Palette) -> Line<'static> {
    let hint = match app
        .providers
        .use_modal()
        .ok()
        .and_then(|modal| modal.current_request())
    {
        Some(request) if request.strict => "←/→ choose · Enter select",
        Some(_) => "←/→ choose · Enter select · Esc close",
        None => "q quit · Tab next page · t theme · F2 dev menu",
    };
    let theme = app.providers.theme;
    Line::from(vec![
        Span::styled(format!(" {hint}"), Style::default().fg(palette.muted)),
        Span::styled(
            format!("  theme: {} ({:?})", theme.mode, theme.appearance()).to_lowercase(),
            Style::default().fg(palette.muted),
        ),
    ])
}
