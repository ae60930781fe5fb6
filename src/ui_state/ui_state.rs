use super::{
    CardState, ListingView, Mode, Pane, PageView, SettingsState, TransportBar,
    search_state::SearchState, theme::Theme,
};
use crate::{
    api::{Listing, ListingQuery},
    domain::{Playlist, TrackId, TrackRecord, TrackRequest},
    playback::BoundTrack,
    player::PlaybackMetrics,
};
use anyhow::Error;
use indexmap::IndexMap;
use ratatui::widgets::TableState;
use std::sync::Arc;

pub struct StatusLine {
    pub message: String,
    pub is_error: bool,
}

pub struct UiState {
    // Backend Modules
    metrics: Arc<PlaybackMetrics>,

    // Visual Elements
    pub(crate) theme: Theme,
    pub(super) search: SearchState,
    pub(crate) settings: SettingsState,
    pub(crate) table_pos: TableState,
    mode: Mode,
    pane: Pane,

    // View models
    pub(super) listing: ListingView,
    page: Playlist,
    pub(super) cards: IndexMap<TrackId, CardState>,
    pub(super) transport: TransportBar,
    status: Option<StatusLine>,
}

impl UiState {
    pub fn new(settings: SettingsState, metrics: Arc<PlaybackMetrics>) -> Self {
        UiState {
            metrics,
            theme: Theme::night(),
            search: SearchState::new(),
            settings,
            table_pos: TableState::default(),
            mode: Mode::default(),
            pane: Pane::default(),
            listing: ListingView::Idle,
            page: Playlist::default(),
            cards: IndexMap::new(),
            transport: TransportBar::default(),
            status: None,
        }
    }
}

// ===========
//    STATE
// ===========
impl UiState {
    pub fn get_mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode
    }

    pub fn get_pane(&self) -> &Pane {
        &self.pane
    }

    pub fn set_pane(&mut self, pane: Pane) {
        self.pane = pane
    }

    pub fn metrics(&self) -> &PlaybackMetrics {
        &self.metrics
    }

    pub fn set_error(&mut self, e: Error) {
        log::warn!("{e:#}");
        self.status = Some(StatusLine {
            message: format!("{e}"),
            is_error: true,
        });
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(StatusLine {
            message: message.into(),
            is_error: false,
        });
    }

    pub fn get_status(&self) -> Option<&StatusLine> {
        self.status.as_ref()
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// Back to plain browsing with an empty search box.
    pub fn soft_reset(&mut self) {
        self.clear_search();
        self.clear_status();
        self.set_pane(Pane::TrackList);
        self.set_mode(Mode::Browse);
    }

    pub fn tick(&mut self) {
        self.transport.tick();
    }
}

// =============
//    LISTING
// =============
impl UiState {
    pub fn get_listing(&self) -> &ListingView {
        &self.listing
    }

    pub fn set_loading(&mut self) {
        self.listing = ListingView::Loading;
    }

    pub fn show_failure(&mut self, message: impl Into<String>) {
        self.listing = ListingView::Failed(message.into());
        self.page = Playlist::default();
        self.cards.clear();
        self.table_pos.select(None);
    }

    /// Replaces the visible page with the engine's `playlist`. Cards start
    /// from the bound track's state so the playing track keeps its pause
    /// control across navigation.
    pub fn show_listing(
        &mut self,
        listing: Listing,
        query: ListingQuery,
        playlist: &Playlist,
        bound: Option<&BoundTrack>,
    ) {
        self.show_page(listing, Some(query), playlist, bound);
    }

    /// A random pick has no pagination.
    pub fn show_random(&mut self, listing: Listing, playlist: &Playlist, bound: Option<&BoundTrack>) {
        self.show_page(listing, None, playlist, bound);
    }

    fn show_page(
        &mut self,
        listing: Listing,
        query: Option<ListingQuery>,
        playlist: &Playlist,
        bound: Option<&BoundTrack>,
    ) {
        self.page = playlist.clone();
        self.cards = playlist
            .tracks()
            .iter()
            .filter_map(TrackRecord::track_id)
            .map(|id| {
                let playing = bound.is_some_and(|b| b.id == id && b.playing);
                (id, CardState { playing })
            })
            .collect();

        self.table_pos.select(match playlist.is_empty() {
            true => None,
            false => Some(0),
        });
        self.listing = ListingView::Page(PageView { listing, query });
    }

    /// Tracks of the visible page: the engine's playlist, or nothing after a
    /// failed load.
    pub fn page_playlist(&self) -> &Playlist {
        &self.page
    }

    pub fn current_page(&self) -> Option<&PageView> {
        match &self.listing {
            ListingView::Page(page) => Some(page),
            _ => None,
        }
    }

    pub fn card(&self, id: &TrackId) -> Option<&CardState> {
        self.cards.get(id)
    }

    pub fn transport(&self) -> &TransportBar {
        &self.transport
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.table_pos
            .selected()
            .filter(|&i| i < self.page.len())
    }

    /// `None` when nothing is selected or the record has no track id.
    pub fn selected_request(&self) -> Option<TrackRequest> {
        self.selected_index().and_then(|i| self.page.request_for(i))
    }

    pub fn scroll(&mut self, delta: isize) {
        let len = self.page.len();
        if len == 0 {
            return;
        }

        let current = self.table_pos.selected().unwrap_or(0) as isize;
        let next = (current + delta).rem_euclid(len as isize) as usize;
        self.table_pos.select(Some(next));
    }

    pub fn scroll_edge(&mut self, bottom: bool) {
        let len = self.page.len();
        if len > 0 {
            self.table_pos.select(Some(match bottom {
                true => len - 1,
                false => 0,
            }));
        }
    }
}
