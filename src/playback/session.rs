use crate::{
    domain::{TrackId, TrackRequest},
    player::{StartSource, StartTicket},
    ui_state::PlaybackFact,
};

/// The track bound to the media handle. It stays bound while paused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundTrack {
    pub id: TrackId,
    pub url: String,
    pub title: String,
    pub site: String,
    pub playing: bool,
    /// The handle holds this track's source and can resume it.
    pub(crate) loaded: bool,
}

impl From<TrackRequest> for BoundTrack {
    fn from(request: TrackRequest) -> Self {
        BoundTrack {
            id: request.id,
            url: request.url,
            title: request.title,
            site: request.site,
            playing: false,
            loaded: false,
        }
    }
}

impl BoundTrack {
    pub fn fact(&self) -> PlaybackFact {
        PlaybackFact {
            track_id: self.id.clone(),
            playing: self.playing,
            title: Some(self.title.clone()),
            site: Some(self.site.clone()),
        }
    }
}

pub(crate) struct PendingStart {
    pub ticket: StartTicket,
    pub track_id: TrackId,
    /// A later pause or play owns the outcome now.
    pub superseded: bool,
}

pub(crate) struct QueuedStart {
    pub track_id: TrackId,
    pub source: StartSource,
}

#[derive(Default)]
pub(crate) struct Session {
    pub current: Option<BoundTrack>,
    pub current_index: Option<usize>,
    pub pending: Option<PendingStart>,
    pub queued: Option<QueuedStart>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

impl Direction {
    /// Neighbouring index with wraparound. `len` must be non-zero.
    pub fn step(self, from: Option<usize>, len: usize) -> usize {
        match (self, from) {
            (Direction::Next, None) => 0,
            (Direction::Previous, None) => len - 1,
            (Direction::Next, Some(i)) => (i + 1) % len,
            (Direction::Previous, Some(0)) => len - 1,
            (Direction::Previous, Some(i)) => (i - 1).min(len - 1),
        }
    }
}
