use crate::app::state::{Toast, ToastKind};
use crate::app::util::text::{truncate_to_width, visual_width};
use crate::app::view::theme::Palette;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::constants::TOAST_MAX_WIDTH;

/// Stacks toasts bottom-right inside `area`, newest at the bottom.
pub(super) fn render_toasts(f: &mut Frame, area: Rect, toasts: &[Toast], palette: &Palette) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let max_width = TOAST_MAX_WIDTH.min(area.width) as usize;
    let visible = toasts.len().min(area.height as usize);
    let bottom = area.y + area.height;
    for (offset, toast) in toasts[toasts.len() - visible..].iter().rev().enumerate() {
        let text = truncate_to_width(&toast.message, max_width.saturating_sub(2));
        let width = ((visual_width(&text) + 2) as u16).min(area.width);
        let fg = match toast.kind {
            ToastKind::Info => palette.toast_fg,
            ToastKind::Error => palette.error_fg,
        };
        let rect = Rect {
            x: area.x + area.width - width,
            y: bottom - 1 - offset as u16,
            width,
            height: 1,
        };
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!(" {text} "),
                Style::default().fg(fg).bg(palette.toast_bg),
            ))),
            rect,
        );
    }
}
