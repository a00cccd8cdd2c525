pub(crate) mod dev_menu;
pub(crate) mod layout;
pub(crate) mod theme;
pub(crate) mod toaster;

pub(crate) use dev_menu::{json_box_lines, DevMenuState, SessionSnapshot};
pub(crate) use layout::DialogLayout;
pub(crate) use theme::{parse_theme_mode, Appearance, ThemeMode, ThemeState};
pub(crate) use toaster::{Toast, ToastKind, Toaster};
