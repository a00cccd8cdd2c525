mod dialog;
mod page;

pub use dialog::{handle_dialog_click, handle_dialog_key};
pub use page::handle_page_key;
