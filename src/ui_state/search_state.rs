use super::{Pane, UiState, new_textarea};
use ratatui::crossterm::event::KeyEvent;
use tui_textarea::TextArea;

pub(super) struct SearchState {
    pub input: TextArea<'static>,
}

impl SearchState {
    pub fn new() -> Self {
        SearchState {
            input: new_textarea("Search tracks"),
        }
    }
}

impl UiState {
    pub fn get_search_widget(&mut self) -> &mut TextArea<'static> {
        &mut self.search.input
    }

    pub fn process_search(&mut self, k: KeyEvent) {
        self.search.input.input(k);
    }

    /// Search text with surrounding whitespace removed.
    pub fn read_search(&self) -> &str {
        self.search
            .input
            .lines()
            .first()
            .map(|l| l.trim())
            .unwrap_or_default()
    }

    pub fn clear_search(&mut self) {
        self.search.input.select_all();
        self.search.input.cut();
    }

    pub fn focus_search(&mut self) {
        self.set_pane(Pane::Search);
    }
}
