use super::{
    error::{EmptyPanel, ErrorPanel},
    tracklist::{SkeletonTable, TrackTable},
};
use crate::ui_state::{ListingView, Pane, UiState};
use ratatui::widgets::{StatefulWidget, Widget};

/// Whatever currently stands in for the listing.
pub struct TrackWindow;
impl StatefulWidget for TrackWindow {
    type State = UiState;

    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        if matches!(state.get_listing(), ListingView::Page(p) if !p.is_empty()) {
            TrackTable.render(area, buf, state);
            return;
        }

        let theme = state.get_theme(&Pane::TrackList);
        match state.get_listing() {
            ListingView::Failed(message) => ErrorPanel::new(&theme, message).render(area, buf),
            ListingView::Page(_) => EmptyPanel::new(&theme).render(area, buf),
            ListingView::Idle | ListingView::Loading => SkeletonTable::new(&theme).render(area, buf),
        }
    }
}
