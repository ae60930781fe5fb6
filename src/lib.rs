use anyhow::{Result, anyhow};
use std::{
    path::{Path, PathBuf},
    time::Duration,
};

pub mod api;
pub mod app_core;
pub mod cli;
pub mod config;
pub mod domain;
pub mod key_handler;
pub mod logging;
pub mod playback;
pub mod player;
pub mod tui;
pub mod ui_state;

pub use app_core::Odeon;
pub use config::Config;

// ~30fps
pub const REFRESH_RATE: Duration = Duration::from_millis(33);

pub const CONFIG_DIRECTORY: &str = "odeon";

/// `m:ss`; an unknown or zero length reads `0:00`.
pub fn format_time(time: Option<Duration>) -> String {
    let secs = time.map(|t| t.as_secs()).unwrap_or(0);
    format!("{}:{:02}", secs / 60, secs % 60)
}

pub(crate) fn truncate_at_last_space(s: &str, limit: usize) -> String {
    if s.chars().count() <= limit {
        return s.to_string();
    }

    let byte_limit = s
        .char_indices()
        .map(|(i, _)| i)
        .nth(limit.saturating_sub(1))
        .unwrap_or(s.len());

    let cut = match s[..byte_limit].rfind(' ') {
        Some(last_space) if last_space > 0 => last_space,
        _ => byte_limit,
    };

    let mut truncated = s[..cut].trim_end().to_string();
    truncated.push('…');
    truncated
}

pub fn expand_tilde<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    let path_str = path.to_string_lossy();

    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory!"))?;

    match path_str.as_ref() {
        "~" => Ok(home),
        s if s.starts_with("~/") || s.starts_with("~\\") => Ok(home.join(&s[2..])),
        _ => Err(anyhow!("Unsupported tilde path: {path_str}")),
    }
}
