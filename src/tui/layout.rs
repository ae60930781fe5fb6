use crate::ui_state::{PageView, UiState};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

const SEARCH_HEIGHT: u16 = 3;
const TRANSPORT_HEIGHT: u16 = 4;

pub struct AppLayout {
    pub settings_line: Rect,
    pub search_bar: Rect,
    pub track_window: Rect,
    pub pagination: Rect,
    pub transport: Rect,
    pub status_line: Rect,
}

impl AppLayout {
    pub fn new(area: Rect, state: &UiState) -> Self {
        let pagination_height = match state.current_page().is_some_and(PageView::shows_pagination) {
            true => 1,
            false => 0,
        };

        let transport_height = match state.transport().visible {
            true => TRANSPORT_HEIGHT,
            false => 0,
        };

        let [settings_line, search_bar, track_window, pagination, transport, status_line] =
            Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1),
                    Constraint::Length(SEARCH_HEIGHT),
                    Constraint::Min(8),
                    Constraint::Length(pagination_height),
                    Constraint::Length(transport_height),
                    Constraint::Length(1),
                ])
                .areas(area);

        AppLayout {
            settings_line,
            search_bar,
            track_window,
            pagination,
            transport,
            status_line,
        }
    }
}
