use crate::ui_state::UiState;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Stylize,
    text::Line,
    widgets::{StatefulWidget, Widget},
};

pub struct StatusLine;

impl StatefulWidget for StatusLine {
    type State = UiState;

    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let theme = state.get_theme(state.get_pane());

        let message = match state.get_status() {
            Some(status) => {
                let color = match status.is_error {
                    true => theme.error,
                    false => theme.text_focused,
                };
                Line::from(format!(" {}", status.message)).fg(color)
            }
            None => Line::default(),
        };

        let [left, right] = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(75), Constraint::Percentage(25)])
            .areas(area);

        message.render(left, buf);
        Line::from(format!("{} ✧ [q]uit ", state.get_mode()))
            .fg(theme.text_faded)
            .right_aligned()
            .render(right, buf);
    }
}
