mod listing;
mod mode;
mod pane;
mod presentation;
mod search_state;
mod settings;
mod theme;
mod ui_state;

pub use listing::{ListingView, PAGE_BUTTONS, PageView, page_window};
pub use mode::Mode;
pub use pane::Pane;
pub use presentation::{CardState, PlaybackFact, Projector, TransportBar};
pub use settings::SettingsState;
pub use theme::DisplayTheme;
pub use ui_state::{StatusLine, UiState};

fn new_textarea(placeholder: &str) -> tui_textarea::TextArea<'static> {
    let mut search = tui_textarea::TextArea::default();
    search.set_cursor_line_style(ratatui::style::Style::default());
    search.set_placeholder_text(format!(" {placeholder}: "));

    search
}
