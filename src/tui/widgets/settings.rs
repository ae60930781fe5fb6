use super::DECORATOR;
use crate::ui_state::UiState;
use ratatui::{
    style::Stylize,
    text::{Line, Span},
    widgets::{StatefulWidget, Widget},
};
use url::Url;

pub struct SettingsLine;
impl StatefulWidget for SettingsLine {
    type State = UiState;

    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let theme = state.get_theme(state.get_pane());
        let settings = &state.settings;

        let server = Url::parse(settings.server())
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
            .unwrap_or_else(|| settings.server().to_string());

        let field = |key: &'static str, value: String| {
            [
                Span::from(key).fg(theme.text_faded),
                Span::from(value).fg(theme.text_focused),
            ]
        };

        let mut spans = vec![Span::from(" ")];
        spans.extend(field("[S]erver ", server));
        spans.push(Span::from(DECORATOR).fg(theme.text_faded));
        spans.extend(field("[s]ite ", settings.site().to_string()));
        spans.push(Span::from(DECORATOR).fg(theme.text_faded));
        spans.extend(field("[l]imit ", settings.limit.to_string()));
        spans.push(Span::from(DECORATOR).fg(theme.text_faded));
        spans.extend(field("[-/+] min score ", format!("{:.1}", settings.min_score)));

        Line::from(spans).render(area, buf);
    }
}
