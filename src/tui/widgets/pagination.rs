use crate::ui_state::{Pane, UiState, page_window};
use ratatui::{
    style::Stylize,
    text::{Line, Span},
    widgets::{StatefulWidget, Widget},
};

pub struct Pagination;
impl StatefulWidget for Pagination {
    type State = UiState;

    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let Some(page) = state.current_page().filter(|p| p.shows_pagination()) else {
            return;
        };
        let theme = state.get_theme(&Pane::TrackList);
        let pagination = &page.listing.pagination;

        let enabled = |on: bool| match on {
            true => theme.text_focused,
            false => theme.text_faded,
        };

        let mut spans = vec![Span::from("‹ prev  ").fg(enabled(pagination.has_prev))];
        for n in page_window(pagination.page, pagination.pages) {
            spans.push(match n == pagination.page {
                true => Span::from(format!("[{n}]")).fg(theme.accent).bold(),
                false => Span::from(format!(" {n} ")).fg(theme.text_faded),
            });
        }
        spans.push(Span::from("  next ›").fg(enabled(pagination.has_next)));

        Line::from(spans).centered().render(area, buf);
    }
}
