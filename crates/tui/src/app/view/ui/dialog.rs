use crate::app::modal::{DialogRequest, Footer};
use crate::app::state::DialogLayout;
use crate::app::util::text::{truncate_to_width, visual_width, wrap_text};
use crate::app::view::theme::Palette;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use ratatui::Frame;

use super::constants::{
    BUTTON_GAP, DIALOG_MARGIN, DIALOG_MAX_WIDTH, DIALOG_MIN_WIDTH, DIALOG_PADDING_X,
};

pub(super) enum FooterView {
    Empty,
    Content(Vec<Line<'static>>),
    Actions { labels: Vec<String>, selected: usize },
}

pub(super) struct DialogView {
    /// Always carried, even when the title is not drawn.
    pub(super) label: String,
    pub(super) accessible_description: Option<String>,
    pub(super) show_title: bool,
    pub(super) show_description: bool,
    pub(super) strict: bool,
    pub(super) header: Vec<Line<'static>>,
    pub(super) body: Vec<Line<'static>>,
    pub(super) footer: FooterView,
}

/// Text announced for the dialog (window title), independent of `hide_title`.
pub(crate) fn accessible_label(request: &DialogRequest) -> String {
    match request.description.as_deref() {
        Some(description) if !description.is_empty() => {
            format!("{}: {description}", request.title)
        }
        _ => request.title.clone(),
    }
}

pub(super) fn dialog_width(screen: Rect) -> u16 {
    let available = screen.width.saturating_sub(DIALOG_MARGIN * 2);
    available
        .min(DIALOG_MAX_WIDTH)
        .max(DIALOG_MIN_WIDTH.min(screen.width))
}

pub(super) fn content_width(dialog_width: u16) -> usize {
    dialog_width
        .saturating_sub(2 + DIALOG_PADDING_X * 2)
        .max(1) as usize
}

pub(super) fn build_dialog_view(
    request: &DialogRequest,
    selected: usize,
    width: usize,
) -> DialogView {
    // With no custom header, a hidden title takes the description with it.
    let hide_heading = request.header.is_none() && request.hide_title;
    let footer = match &request.footer {
        None => FooterView::Empty,
        Some(Footer::Content(content)) => FooterView::Content(content.lines(width)),
        Some(Footer::Actions(actions)) => FooterView::Actions {
            labels: actions.iter().map(|action| action.label.clone()).collect(),
            selected: selected.min(actions.len().saturating_sub(1)),
        },
    };
    DialogView {
        label: request.title.clone(),
        accessible_description: request.description.clone(),
        show_title: !request.hide_title,
        show_description: !hide_heading && request.description.is_some(),
        strict: request.strict,
        header: request
            .header
            .as_ref()
            .map(|header| header.lines(width))
            .unwrap_or_default(),
        body: request
            .body
            .as_ref()
            .map(|body| body.lines(width))
            .unwrap_or_default(),
        footer,
    }
}

pub(super) fn layout_buttons(content: Rect, row: u16, labels: &[String]) -> Vec<Rect> {
    let widths: Vec<u16> = labels
        .iter()
        .map(|label| u16::try_from(visual_width(label) + 4).unwrap_or(u16::MAX))
        .collect();
    let total = widths
        .iter()
        .enumerate()
        .fold(0_u16, |total, (index, width)| {
            let gap = if index == 0 { 0 } else { BUTTON_GAP };
            total.saturating_add(gap).saturating_add(*width)
        });
    let right = content.x.saturating_add(content.width);
    let mut x = right.saturating_sub(total).max(content.x);
    widths
        .into_iter()
        .map(|width| {
            let rect = Rect {
                x,
                y: row,
                width: width.min(right.saturating_sub(x)),
                height: 1,
            };
            x = x.saturating_add(width.saturating_add(BUTTON_GAP)).min(right);
            rect
        })
        .collect()
}

pub(super) fn render_dialog(
    f: &mut Frame,
    screen: Rect,
    view: &DialogView,
    palette: &Palette,
) -> DialogLayout {
    let width = dialog_width(screen);
    let inner_width = content_width(width);
    let muted = Style::default().fg(palette.muted);

    let mut lines: Vec<Line<'static>> = Vec::new();
    if view.show_description {
        if let Some(description) = view.accessible_description.as_deref() {
            lines.extend(
                wrap_text(description, inner_width)
                    .into_iter()
                    .map(|line| Line::styled(line, muted)),
            );
        }
    }
    lines.extend(view.header.iter().cloned());

    let footer_height = match &view.footer {
        FooterView::Empty => 0,
        FooterView::Content(footer) => footer.len() + 1,
        FooterView::Actions { .. } => 2,
    };
    let gap = usize::from(!lines.is_empty() && !view.body.is_empty());
    let max_inner = screen.height.saturating_sub(2) as usize;
    let body_room = max_inner.saturating_sub(lines.len() + gap + footer_height);
    let mut body = view.body.clone();
    if body.len() > body_room {
        body.truncate(body_room);
        if let Some(last) = body.last_mut() {
            *last = Line::styled("…", muted);
        }
    }
    if gap > 0 && !body.is_empty() {
        lines.push(Line::default());
    }
    lines.extend(body);

    let content_height = (lines.len() + footer_height).max(1) as u16;
    let height = content_height.saturating_add(2).min(screen.height);
    let width = width.min(screen.width);
    let area = Rect {
        x: screen.x + screen.width.saturating_sub(width) / 2,
        y: screen.y + screen.height.saturating_sub(height) / 2,
        width,
        height,
    };

    f.render_widget(Clear, area);
    let (border_type, border_color) = if view.strict {
        (BorderType::Thick, palette.strict_border)
    } else {
        (BorderType::Rounded, palette.border)
    };
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(palette.panel_bg).fg(palette.foreground));
    if view.show_title {
        let title = truncate_to_width(&view.label, inner_width.saturating_sub(4));
        block = block.title(Line::from(Span::styled(
            format!(" {title} "),
            Style::default().add_modifier(Modifier::BOLD),
        )));
    }
    if !view.strict {
        block = block
            .title(Line::from(" × ").right_aligned())
            .title_bottom(Line::from(Span::styled(" Esc to close ", muted)).right_aligned());
    }
    let inner = block.inner(area);
    f.render_widget(block, area);

    let content = Rect {
        x: inner.x + DIALOG_PADDING_X.min(inner.width),
        width: inner.width.saturating_sub(DIALOG_PADDING_X * 2),
        ..inner
    };
    if content.width == 0 || content.height == 0 {
        return DialogLayout {
            area,
            actions: Vec::new(),
        };
    }
    // The footer keeps its rows; description and header give way first.
    let text_room = content.height.saturating_sub(footer_height as u16) as usize;
    lines.truncate(text_room);
    let text_height = lines.len() as u16;
    f.render_widget(
        Paragraph::new(Text::from(lines)),
        Rect {
            height: text_height,
            ..content
        },
    );

    let mut actions = Vec::new();
    match &view.footer {
        FooterView::Empty => {}
        FooterView::Content(footer) => {
            let y = content.y + text_height + 1;
            if y < content.bottom() {
                let height = (content.bottom() - y).min(footer.len() as u16);
                f.render_widget(
                    Paragraph::new(Text::from(footer.clone())),
                    Rect { y, height, ..content },
                );
            }
        }
        FooterView::Actions { labels, selected } => {
            let row = content.bottom() - 1;
            actions = layout_buttons(content, row, labels);
            for (index, (rect, label)) in actions.iter().zip(labels).enumerate() {
                let style = if index == *selected {
                    Style::default()
                        .fg(palette.button_selected_fg)
                        .bg(palette.button_selected_bg)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(palette.button_fg).bg(palette.button_bg)
                };
                f.render_widget(
                    Paragraph::new(Line::from(Span::styled(format!("[ {label} ]"), style))),
                    *rect,
                );
            }
        }
    }

    DialogLayout { area, actions }
}

#[cfg(test)]
mod tests {
    use super::{
        accessible_label, build_dialog_view, content_width, dialog_width, layout_buttons,
        render_dialog, FooterView,
    };
    use crate::app::modal::{DialogAction, DialogRequest};
    use crate::app::state::Appearance;
    use crate::app::view::theme::palette_for;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;
    use ratatui::Terminal;

    #[test]
    fn hidden_title_without_header_hides_description_but_keeps_label() {
        let request = DialogRequest::new("Image preview")
            .description("Preview of the selected image")
            .hide_title(true);
        let view = build_dialog_view(&request, 0, 40);

        assert!(!view.show_title);
        assert!(!view.show_description);
        assert_eq!(view.label, "Image preview");
        assert_eq!(
            accessible_label(&request),
            "Image preview: Preview of the selected image"
        );
    }

    #[test]
    fn hidden_title_with_header_keeps_description() {
        let request = DialogRequest::new("Settings")
            .description("Adjust preferences")
            .header("Custom header")
            .hide_title(true);
        let view = build_dialog_view(&request, 0, 40);

        assert!(!view.show_title);
        assert!(view.show_description);
        assert_eq!(view.header.len(), 1);
    }

    #[test]
    fn footer_selection_is_clamped() {
        let request = DialogRequest::new("Pick").actions(vec![
            DialogAction::new("A", || Ok(())),
            DialogAction::new("B", || Ok(())),
        ]);
        let view = build_dialog_view(&request, 5, 40);

        match view.footer {
            FooterView::Actions { labels, selected } => {
                assert_eq!(labels, vec!["A", "B"]);
                assert_eq!(selected, 1);
            }
            _ => panic!("expected action footer"),
        }
    }

    #[test]
    fn buttons_are_right_aligned() {
        let content = Rect::new(10, 2, 40, 5);
        let rects = layout_buttons(content, 6, &["Cancel".to_string(), "Confirm".to_string()]);

        assert_eq!(rects[1].x + rects[1].width, 50);
        assert_eq!(rects[0], Rect::new(27, 6, 10, 1));
        assert_eq!(rects[1], Rect::new(39, 6, 11, 1));
    }

    #[test]
    fn oversized_labels_stay_inside_content() {
        let content = Rect::new(2, 1, 30, 3);
        let labels = vec!["x".repeat(70_000), "Confirm".to_string()];
        let rects = layout_buttons(content, 3, &labels);

        assert_eq!(rects.len(), 2);
        assert!(rects.iter().all(|rect| rect.x + rect.width <= 32));
    }

    fn render_text(request: &DialogRequest, width: u16, height: u16) -> Vec<String> {
        let screen = Rect::new(0, 0, width, height);
        let view = build_dialog_view(request, 0, content_width(dialog_width(screen)));
        let palette = palette_for(Appearance::Dark);
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| {
                render_dialog(f, screen, &view, &palette);
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect()
    }

    #[test]
    fn short_screen_truncates_text_before_buttons() {
        let description = (1..=9)
            .map(|n| format!("line {n}"))
            .collect::<Vec<_>>()
            .join("\n");
        let request = DialogRequest::new("Tall")
            .description(description)
            .actions(vec![
                DialogAction::new("Cancel", || Ok(())),
                DialogAction::new("Confirm", || Ok(())),
            ]);

        let rows = render_text(&request, 60, 8);

        assert!(rows[1].contains("line 1"));
        assert!(rows[4].contains("line 4"));
        assert!(!rows.iter().any(|row| row.contains("line 5")));
        assert!(!rows[5].contains("line"));
        assert!(rows[6].contains("[ Cancel ]"));
        assert!(rows[6].contains("[ Confirm ]"));
    }

    #[test]
    fn short_screen_keeps_content_footer() {
        let description = (1..=9)
            .map(|n| format!("line {n}"))
            .collect::<Vec<_>>()
            .join("\n");
        let request = DialogRequest::new("Tall")
            .description(description)
            .footer("footer text");

        let rows = render_text(&request, 60, 8);

        assert!(rows[6].contains("footer text"));
        assert!(!rows.iter().any(|row| row.contains("line 5")));
    }

    #[test]
    fn width_respects_margins_and_caps() {
        assert_eq!(dialog_width(Rect::new(0, 0, 200, 40)), 64);
        assert_eq!(dialog_width(Rect::new(0, 0, 50, 40)), 46);
        assert_eq!(dialog_width(Rect::new(0, 0, 10, 40)), 10);
    }
}
