pub(super) const DIALOG_MAX_WIDTH: u16 = 64;
pub(super) const DIALOG_MIN_WIDTH: u16 = 24;
pub(super) const DIALOG_MARGIN: u16 = 2;
pub(super) const DIALOG_PADDING_X: u16 = 1;
pub(super) const BUTTON_GAP: u16 = 2;
pub(super) const DEV_MENU_WIDTH: u16 = 44;
pub(super) const TOAST_MAX_WIDTH: u16 = 40;
