mod backend_rodio;
mod core;
mod error;
mod handle;
mod metrics;
mod source;

use anyhow::Result;
use std::{fmt::Display, time::Duration};

pub use error::SourceError;
pub use handle::PlayerHandle;
pub use metrics::PlaybackMetrics;

/// Identifies one asynchronous start so its settlement can be matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StartTicket(pub u64);

impl Display for StartTicket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartSource {
    /// Fetch and bind a new source, replacing whatever was loaded.
    Load(String),
    /// Continue the bound source from its current position.
    Resume,
}

pub enum PlayerCommand {
    Start {
        ticket: StartTicket,
        source: StartSource,
    },
    Pause,
    Stop,
    Seek(Duration),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerEvent {
    StartSettled {
        ticket: StartTicket,
        outcome: Result<(), String>,
    },
    TrackEnded,
    Error(String),
}

/// The single audio output the playback engine drives.
///
/// `start` only issues the request; its outcome arrives later as a
/// [`PlayerEvent::StartSettled`] carrying the same ticket.
pub trait MediaHandle {
    fn start(&mut self, ticket: StartTicket, source: StartSource) -> Result<()>;
    fn pause(&mut self) -> Result<()>;
    /// Pause and rewind to the beginning.
    fn stop(&mut self) -> Result<()>;
    fn seek(&mut self, position: Duration) -> Result<()>;
    /// `None` until a source with a known length is loaded.
    fn duration(&self) -> Option<Duration>;
    fn elapsed(&self) -> Duration;
}
