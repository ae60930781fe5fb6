use crate::ui_state::{Pane, UiState};
use ratatui::{
    style::Stylize,
    widgets::{Block, Padding, StatefulWidget, Widget},
};

pub struct SearchBar;

impl StatefulWidget for SearchBar {
    type State = UiState;
    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let theme = state.get_theme(&Pane::Search);
        let title = match state.get_pane() {
            Pane::Search => " [⏎] search / [Esc] back ",
            Pane::TrackList => " [/] search ",
        };

        let search = state.get_search_widget();
        search.set_block(
            Block::bordered()
                .border_type(theme.border_type)
                .border_style(theme.border)
                .title_bottom(title)
                .padding(Padding::horizontal(1))
                .bg(theme.bg_panel),
        );
        search.set_style(ratatui::style::Style::new().fg(theme.text_focused));

        search.render(area, buf);
    }
}
