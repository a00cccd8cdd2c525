mod constants;
mod dev_menu;
mod dialog;
mod page;
mod toasts;

use crate::app::view::theme::palette_for;
use crate::app::AppState;
use crate::error::AppError;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Text;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use self::constants::DEV_MENU_WIDTH;
use self::dev_menu::build_dev_menu_lines;
use self::dialog::{build_dialog_view, content_width, dialog_width, render_dialog};
use self::page::{build_nav_line, build_page_lines, build_status_line};
use self::toasts::render_toasts;

pub(crate) use dialog::accessible_label;

const PAGE_PADDING_X: u16 = 2;
const MIN_PAGE_WIDTH: u16 = 20;

pub fn draw_ui(f: &mut Frame, app: &mut AppState) -> Result<(), AppError> {
    let screen = f.area();
    if screen.width == 0 || screen.height == 0 {
        app.dialog_layout = None;
        return Ok(());
    }
    let palette = palette_for(app.providers.theme.appearance());

    f.render_widget(Clear, screen);
    f.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.foreground)),
        screen,
    );

    let [nav_area, main_area, status_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(screen);

    f.render_widget(Paragraph::new(build_nav_line(app.route, &palette)), nav_area);

    let show_menu = app.dev_menu.expanded && main_area.width >= DEV_MENU_WIDTH + MIN_PAGE_WIDTH;
    let (page_area, menu_area) = if show_menu {
        let [page, menu] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(DEV_MENU_WIDTH)])
                .areas(main_area);
        (page, Some(menu))
    } else {
        (main_area, None)
    };

    let page_inner = Rect {
        x: page_area.x + PAGE_PADDING_X.min(page_area.width),
        y: page_area.y + 1.min(page_area.height),
        width: page_area.width.saturating_sub(PAGE_PADDING_X * 2),
        height: page_area.height.saturating_sub(1),
    };
    f.render_widget(
        Paragraph::new(Text::from(build_page_lines(app.route, &palette)))
            .wrap(Wrap { trim: false }),
        page_inner,
    );

    if let Some(menu) = menu_area {
        let block = Block::default()
            .borders(Borders::LEFT)
            .border_style(Style::default().fg(palette.border))
            .title(" Dev ");
        let inner = block.inner(menu);
        f.render_widget(block, menu);
        let content = Rect {
            x: inner.x + 1.min(inner.width),
            width: inner.width.saturating_sub(1),
            ..inner
        };
        let lines = build_dev_menu_lines(app, content.width as usize, &palette)?;
        f.render_widget(Paragraph::new(Text::from(lines)), content);
    }

    f.render_widget(Paragraph::new(build_status_line(app, &palette)), status_area);

    let modal = app.providers.use_modal()?;
    app.dialog_layout = match modal.current_request() {
        Some(request) => {
            // Backdrop.
            f.buffer_mut()
                .set_style(screen, Style::default().add_modifier(Modifier::DIM));
            let view = build_dialog_view(
                &request,
                modal.selected_action(),
                content_width(dialog_width(screen)),
            );
            Some(render_dialog(f, screen, &view, &palette))
        }
        None => None,
    };

    if !app.providers.toaster.is_empty() {
        render_toasts(f, main_area, &app.providers.toaster.visible(), &palette);
    }
    Ok(())
}
