use std::{
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::Duration,
};

/// Position and length of the loaded source, published by the player thread.
pub struct PlaybackMetrics {
    elapsed_ms: AtomicU64,
    // 0 = unknown
    duration_ms: AtomicU64,
}

impl PlaybackMetrics {
    pub fn new() -> Arc<Self> {
        Arc::new(PlaybackMetrics {
            elapsed_ms: AtomicU64::new(0),
            duration_ms: AtomicU64::new(0),
        })
    }

    pub fn get_elapsed(&self) -> Duration {
        Duration::from_millis(self.elapsed_ms.load(Ordering::Relaxed))
    }

    pub fn get_duration(&self) -> Option<Duration> {
        match self.duration_ms.load(Ordering::Relaxed) {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        }
    }

    /// Elapsed share of the duration in `[0, 1]`, `0` when the length is unknown.
    pub fn progress(&self) -> f64 {
        match self.get_duration() {
            Some(total) => (self.get_elapsed().as_secs_f64() / total.as_secs_f64()).clamp(0.0, 1.0),
            None => 0.0,
        }
    }

    pub fn set_elapsed(&self, d: Duration) {
        self.elapsed_ms
            .store(d.as_millis() as u64, Ordering::Relaxed)
    }

    pub fn set_duration(&self, d: Option<Duration>) {
        let ms = d.map(|d| d.as_millis() as u64).unwrap_or(0);
        self.duration_ms.store(ms, Ordering::Relaxed)
    }

    pub fn reset(&self) {
        self.set_elapsed(Duration::ZERO);
        self.set_duration(None);
    }
}
