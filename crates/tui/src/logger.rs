use crate::error::AppError;
use std::{fs::File, path::Path, sync::Arc};
use tracing_subscriber::{
    filter::{self, LevelFilter},
    fmt::writer::BoxMakeWriter,
    prelude::*,
};

pub const LOG_FILE_NAME: &str = "template-tui.log";

// The terminal belongs to the UI, so events only ever go to the log file.
pub fn setup_logger(log_level: LevelFilter, log_path: &Path) -> Result<(), AppError> {
    let file = File::create(log_path)?;
    let writer = BoxMakeWriter::new(Arc::new(file));

    let file_log = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_file(false);

    tracing_subscriber::registry()
        .with(
            file_log
                .with_filter(log_level)
                .with_filter(filter::filter_fn(|metadata| {
                    !metadata.target().starts_with("crossterm")
                        && !metadata.target().starts_with("mio")
                })),
        )
        .try_init()
        .map_err(|error| AppError::Logger(error.to_string()))
}
