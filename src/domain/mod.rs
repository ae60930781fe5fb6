mod display_name;
mod media;
mod playlist;
mod track;

pub use display_name::{UNKNOWN_TRACK, extract_display_name};
pub use media::{audio_extension, locator_extension};
pub use playlist::{Playlist, TrackRequest};
pub use track::{TrackId, TrackRecord, download_url, extract_track_id};
