use std::path::PathBuf;

use tracing_error::ErrorLayer;
use tracing_subscriber::{
    EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt,
};

pub const LOG_ENV: &str = "SONGDROP_LOG";
pub const LOG_FILE: &str = "songdrop.log";

fn log_directory() -> PathBuf {
    directories::ProjectDirs::from("", "", "songdrop")
        .map(|dirs| dirs.data_local_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Logs go to a file; stdout belongs to the terminal UI.
pub fn initialize_logging() -> color_eyre::Result<()> {
    let directory = log_directory();
    std::fs::create_dir_all(&directory)?;
    let log_file = std::fs::File::create(directory.join(LOG_FILE))?;

    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(log_file)
        .with_file(true)
        .with_line_number(true)
        .with_target(false)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(file_layer.with_filter(env_filter))
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
