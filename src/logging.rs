use anyhow::{Context, Result};
use std::{fs::OpenOptions, path::Path};

/// Routes `log` output to `path`; the terminal belongs to the UI.
///
/// The level comes from `RUST_LOG`, defaulting to `info`.
pub fn init(path: Option<&Path>) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

    match path {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;

            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        // No writable location: drop records rather than draw over the UI
        None => {
            builder.filter_level(log::LevelFilter::Off);
        }
    }

    builder.try_init()?;
    Ok(())
}
