use crate::app::routes::Route;
use crate::app::state::json_box_lines;
use crate::app::util::text::truncate_to_width;
use crate::app::view::theme::Palette;
use crate::app::AppState;
use crate::error::AppError;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

pub(super) fn build_dev_menu_lines(
    app: &AppState,
    width: usize,
    palette: &Palette,
) -> Result<Vec<Line<'static>>, AppError> {
    let muted = Style::default().fg(palette.muted);
    let mut lines = Vec::new();

    for (index, route) in Route::all().iter().enumerate() {
        let active = *route == app.route;
        let marker = if active { ">" } else { " " };
        let style = if active {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(palette.foreground)
        };
        lines.push(Line::from(vec![
            Span::raw(format!("{marker} {} ", index + 1)),
            Span::styled(route.label(), style),
            Span::styled(format!("  {}", route.path()), muted),
        ]));
    }
    let theme = app.providers.theme;
    lines.push(Line::styled(
        format!("  t  theme: {}", theme.mode),
        Style::default().fg(palette.foreground),
    ));
    lines.push(Line::default());

    let snapshot = serde_json::to_value(app.session_snapshot()?)?;
    lines.extend(
        json_box_lines(&snapshot, app.dev_menu.collapse)
            .into_iter()
            .map(|line| Line::raw(truncate_to_width(&line, width))),
    );
    lines.push(Line::default());
    lines.push(Line::styled(
        format!("[ ] fold depth {}  F2 collapse", app.dev_menu.collapse),
        muted,
    ));
    Ok(lines)
}
