use super::{AppLayout, Pagination, SearchBar, SettingsLine, StatusLine, TrackWindow, Transport};
use crate::ui_state::UiState;
use ratatui::{
    Frame,
    style::Stylize,
    widgets::{Block, StatefulWidget, Widget},
};

pub fn render(f: &mut Frame, state: &mut UiState) {
    let layout = AppLayout::new(f.area(), state);

    Block::new()
        .bg(state.get_theme(state.get_pane()).bg_global)
        .render(f.area(), f.buffer_mut());

    SettingsLine.render(layout.settings_line, f.buffer_mut(), state);
    SearchBar.render(layout.search_bar, f.buffer_mut(), state);
    TrackWindow.render(layout.track_window, f.buffer_mut(), state);
    Pagination.render(layout.pagination, f.buffer_mut(), state);
    Transport.render(layout.transport, f.buffer_mut(), state);
    StatusLine.render(layout.status_line, f.buffer_mut(), state);
}
