use ratatui::layout::Rect;

fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Where the dialog landed on the last frame; used for mouse hit-testing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DialogLayout {
    pub area: Rect,
    pub actions: Vec<Rect>,
}

impl DialogLayout {
    pub fn contains(&self, column: u16, row: u16) -> bool {
        rect_contains(self.area, column, row)
    }

    pub fn action_at(&self, column: u16, row: u16) -> Option<usize> {
        self.actions
            .iter()
            .position(|rect| rect_contains(*rect, column, row))
    }
}
