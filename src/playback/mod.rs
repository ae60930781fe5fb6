mod engine;
mod session;

pub use engine::PlaybackEngine;
pub use session::{BoundTrack, Direction};
