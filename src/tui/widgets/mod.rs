mod error;
mod pagination;
mod search;
mod settings;
mod song_window;
mod status_line;
mod tracklist;
mod transport;

pub use pagination::Pagination;
pub use search::SearchBar;
pub use settings::SettingsLine;
pub use song_window::TrackWindow;
pub use status_line::StatusLine;
pub use transport::Transport;

const DECORATOR: &str = " ✧ ";
const DOWNLOAD_ICON: &str = "⤓";

static PANEL_PADDING: ratatui::widgets::Padding = ratatui::widgets::Padding {
    left: 2,
    right: 2,
    top: 1,
    bottom: 1,
};
