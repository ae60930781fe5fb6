//! The two playback surfaces: the card of each visible track and the
//! transport bar. Both are written only through [`Projector::project`].

use super::UiState;
use crate::domain::TrackId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackFact {
    pub track_id: TrackId,
    pub playing: bool,
    pub title: Option<String>,
    pub site: Option<String>,
}

pub trait Projector {
    fn project(&mut self, fact: &PlaybackFact);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardState {
    pub playing: bool,
}

impl CardState {
    pub fn icon(&self) -> &'static str {
        match self.playing {
            true => "⏸",
            false => "▶",
        }
    }

    pub fn label(&self) -> &'static str {
        match self.playing {
            true => "Pause",
            false => "Play",
        }
    }
}

const WAVE_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

#[derive(Debug, Default)]
pub struct TransportBar {
    pub visible: bool,
    pub playing: bool,
    pub title: String,
    pub site: String,
    frame: usize,
}

impl TransportBar {
    pub fn apply(&mut self, fact: &PlaybackFact) {
        self.visible = true;
        self.playing = fact.playing;

        if let Some(title) = &fact.title {
            self.title.clone_from(title);
        }
        if let Some(site) = &fact.site {
            self.site.clone_from(site);
        }
    }

    pub fn icon(&self) -> &'static str {
        match self.playing {
            true => "⏸",
            false => "▶",
        }
    }

    /// Advances the animation. A paused bar keeps its last frame.
    pub fn tick(&mut self) {
        if self.playing {
            self.frame = self.frame.wrapping_add(1);
        }
    }

    pub fn wave(&self, width: usize) -> String {
        (0..width)
            .map(|i| {
                let phase = (i * 3 + self.frame) % 14;
                let level = match phase < 7 {
                    true => phase,
                    false => 14 - phase,
                };
                WAVE_LEVELS[level.min(WAVE_LEVELS.len() - 1)]
            })
            .collect()
    }
}

impl Projector for UiState {
    fn project(&mut self, fact: &PlaybackFact) {
        if let Some(card) = self.cards.get_mut(&fact.track_id) {
            card.playing = fact.playing;
        }
        self.transport.apply(fact);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        api::{Listing, ListingQuery},
        domain::TrackRecord,
        player::PlaybackMetrics,
        ui_state::testing::ui_state,
    };

    fn fact(id: &str, playing: bool, title: Option<&str>) -> PlaybackFact {
        PlaybackFact {
            track_id: TrackId::new(id),
            playing,
            title: title.map(str::to_owned),
            site: title.map(|_| "odiadj".to_string()),
        }
    }

    fn page(ids: &[&str]) -> Listing {
        Listing {
            success: true,
            data: ids
                .iter()
                .map(|id| TrackRecord::new(format!("https://a.tld/download/{id}/t.html"), ""))
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_project_updates_card_and_transport() {
        let mut ui = ui_state(PlaybackMetrics::new());
        let listing = page(&["5", "7"]);
        let playlist = listing.to_playlist("odiadj");
        ui.show_listing(listing, ListingQuery::browse("odiadj", 1, 20), &playlist, None);

        ui.project(&fact("7", true, Some("Song Seven")));

        assert!(ui.card(&TrackId::new("7")).unwrap().playing);
        assert!(!ui.card(&TrackId::new("5")).unwrap().playing);
        assert!(ui.transport().visible);
        assert_eq!(ui.transport().title, "Song Seven");
    }

    #[test]
    fn test_absent_card_is_skipped() {
        let mut ui = ui_state(PlaybackMetrics::new());
        let listing = page(&["5"]);
        let playlist = listing.to_playlist("odiadj");
        ui.show_listing(listing, ListingQuery::browse("odiadj", 1, 20), &playlist, None);

        ui.project(&fact("9", true, Some("Elsewhere")));

        assert!(ui.card(&TrackId::new("9")).is_none());
        assert_eq!(ui.transport().title, "Elsewhere");
    }

    #[test]
    fn test_transport_keeps_title_when_fact_has_none() {
        let mut bar = TransportBar::default();
        bar.apply(&fact("5", true, Some("Kept")));
        bar.apply(&fact("5", false, None));

        assert_eq!(bar.title, "Kept");
        assert_eq!(bar.site, "odiadj");
        assert!(!bar.playing);
    }

    #[test]
    fn test_wave_freezes_when_paused() {
        let mut bar = TransportBar::default();
        bar.apply(&fact("5", true, Some("x")));
        let first = bar.wave(12);
        bar.tick();
        assert_ne!(bar.wave(12), first);

        bar.apply(&fact("5", false, None));
        let frozen = bar.wave(12);
        bar.tick();
        assert_eq!(bar.wave(12), frozen);
    }

    #[test]
    fn test_card_labels() {
        let card = CardState { playing: true };
        assert_eq!((card.icon(), card.label()), ("⏸", "Pause"));
        assert_eq!(CardState::default().label(), "Play");
    }
}
