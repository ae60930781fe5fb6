use super::Odeon;
use crate::{
    api::{FetchEvent, Listing, ListingQuery},
    ui_state::{Mode, Pane},
};
use anyhow::{Result, anyhow};
use log::{debug, info, warn};

const LOAD_FAILED: &str = "Failed to load data. Make sure the API is running.";
const SEARCH_FAILED: &str = "Failed to search. Make sure the API is running.";
const RANDOM_FAILED: &str = "Failed to load random track. Make sure the API is running.";

impl Odeon {
    pub(super) fn load_page(&mut self, query: ListingQuery) {
        let base = self.ui.settings.server().to_string();
        info!("Loading page {} of {} from {base}", query.page(), query.site());

        match self.fetcher.load(&base, query) {
            Ok(_) => self.ui.set_loading(),
            Err(e) => self.ui.set_error(e),
        }
    }

    /// Page one of a search when searching with text, otherwise of browse.
    pub(super) fn reload_first_page(&mut self) {
        let settings = &self.ui.settings;
        let query = match (self.ui.get_mode(), self.ui.read_search()) {
            (Mode::Search, text) if !text.is_empty() => {
                ListingQuery::search(text, settings.site(), 1, settings.limit, settings.min_score)
            }
            _ => ListingQuery::browse(settings.site(), 1, settings.limit),
        };

        self.ui.set_mode(match query.is_search() {
            true => Mode::Search,
            false => Mode::Browse,
        });
        self.load_page(query);
    }

    pub(super) fn send_search(&mut self) {
        self.ui.set_pane(Pane::TrackList);
        self.ui.set_mode(match self.ui.read_search().is_empty() {
            true => Mode::Browse,
            false => Mode::Search,
        });
        self.reload_first_page();
    }

    pub(super) fn load_random(&mut self) {
        let base = self.ui.settings.server().to_string();
        let site = self.ui.settings.site().to_string();
        info!("Picking a random track of {site}");

        self.ui.set_mode(Mode::Random);
        match self.fetcher.random(&base, &site) {
            Ok(_) => self.ui.set_loading(),
            Err(e) => self.ui.set_error(e),
        }
    }

    /// Moves relative to the visible page, within what its pagination allows.
    pub(super) fn step_page(&mut self, delta: i32) {
        let Some(page) = self.ui.current_page() else {
            return;
        };
        let Some(query) = &page.query else {
            return;
        };

        let pagination = &page.listing.pagination;
        let allowed = match delta < 0 {
            true => pagination.has_prev,
            false => pagination.has_next,
        };
        if !allowed {
            return;
        }

        let target = query.page().saturating_add_signed(delta);
        let next = query.with_page(target);
        self.load_page(next);
    }

    pub(super) fn jump_page(&mut self, last: bool) {
        let Some(page) = self.ui.current_page() else {
            return;
        };
        let Some(query) = &page.query else {
            return;
        };

        let target = match last {
            true => page.listing.pagination.pages.max(1),
            false => 1,
        };
        if target != query.page() {
            let next = query.with_page(target);
            self.load_page(next);
        }
    }

    pub(super) fn download_selected(&mut self) -> Result<()> {
        let track = self
            .ui
            .selected_request()
            .ok_or_else(|| anyhow!("This track has no download link"))?;
        let dir = self.config.download_dir()?;

        info!("Downloading {} to {}", track.title, dir.display());
        self.ui.set_status(format!("Downloading {}", track.title));
        self.fetcher.download(self.ui.settings.server(), track, dir)
    }

    pub(super) fn handle_fetch_event(&mut self, event: FetchEvent) {
        if let Some(generation) = event.generation() {
            if !self.fetcher.is_current(generation) {
                debug!("Dropping stale fetch result #{generation}");
                return;
            }
        }

        match event {
            FetchEvent::Listing { query, result, .. } => match result {
                Ok(listing) => self.show_listing(listing, query),
                Err(e) => {
                    warn!("Fetching {query:?} failed: {e}");
                    self.ui.show_failure(match query.is_search() {
                        true => SEARCH_FAILED,
                        false => LOAD_FAILED,
                    });
                }
            },
            FetchEvent::Random { site, result, .. } => match result {
                Ok(Some(listing)) => {
                    if let Err(e) = self.play_random(listing, &site) {
                        self.ui.set_error(e);
                    }
                }
                Ok(None) => {
                    let empty = Listing::default();
                    self.engine.set_playlist(empty.to_playlist(&site));
                    self.ui.show_random(empty, self.engine.playlist(), self.engine.bound());
                }
                Err(e) => {
                    warn!("Random pick for {site} failed: {e}");
                    self.ui.show_failure(RANDOM_FAILED);
                }
            },
            FetchEvent::Downloaded { title, result } => match result {
                Ok(path) => self.ui.set_status(format!("Saved {}", path.display())),
                Err(e) => self.ui.set_error(anyhow!("Download of {title} failed: {e}")),
            },
        }
    }

    fn show_listing(&mut self, listing: Listing, query: ListingQuery) {
        debug!(
            "Page {} of {} ({} tracks)",
            listing.pagination.page,
            listing.pagination.pages,
            listing.data.len()
        );

        self.engine.set_playlist(listing.to_playlist(query.site()));
        self.ui.show_listing(listing, query, self.engine.playlist(), self.engine.bound());
    }

    /// The pick becomes the whole playlist and starts right away.
    fn play_random(&mut self, listing: Listing, site: &str) -> Result<()> {
        self.engine.set_playlist(listing.to_playlist(site));
        self.ui.show_random(listing, self.engine.playlist(), self.engine.bound());

        let request = self
            .engine
            .playlist()
            .request_for(0)
            .ok_or_else(|| anyhow!("The random pick has no playable link"))?;
        self.engine.play(request, &mut self.ui)
    }
}
