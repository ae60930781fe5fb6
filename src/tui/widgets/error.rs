use super::PANEL_PADDING;
use crate::ui_state::DisplayTheme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Stylize,
    text::{Line, Text},
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};

const EMPTY_TITLE: &str = "No tracks found";
const EMPTY_HINT: &str = "Try adjusting your search criteria or browse a different site";

/// Replaces the listing after a failed fetch.
pub struct ErrorPanel<'a> {
    theme: &'a DisplayTheme,
    message: &'a str,
}

impl<'a> ErrorPanel<'a> {
    pub fn new(theme: &'a DisplayTheme, message: &'a str) -> Self {
        ErrorPanel { theme, message }
    }
}

impl Widget for ErrorPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = Text::from_iter([
            Line::from(""),
            Line::from(self.message.to_string()).fg(self.theme.error).bold(),
            Line::from(""),
            Line::from("Press [Esc] to reset, or pick another server with [S]").fg(self.theme.text_faded),
        ]);

        Paragraph::new(text)
            .wrap(Wrap { trim: true })
            .centered()
            .block(
                Block::bordered()
                    .border_type(BorderType::Double)
                    .border_style(self.theme.error)
                    .title_top(" Error ")
                    .title_alignment(Alignment::Center)
                    .padding(PANEL_PADDING),
            )
            .bg(self.theme.bg_panel)
            .render(area, buf);
    }
}

pub struct EmptyPanel<'a> {
    theme: &'a DisplayTheme,
}

impl<'a> EmptyPanel<'a> {
    pub fn new(theme: &'a DisplayTheme) -> Self {
        EmptyPanel { theme }
    }
}

impl Widget for EmptyPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = Text::from_iter([
            Line::from(""),
            Line::from("♪").fg(self.theme.text_faded),
            Line::from(EMPTY_TITLE).fg(self.theme.text_focused).bold(),
            Line::from(EMPTY_HINT).fg(self.theme.text_faded),
        ]);

        Paragraph::new(text)
            .wrap(Wrap { trim: true })
            .centered()
            .block(
                Block::bordered()
                    .borders(self.theme.border_display)
                    .border_type(self.theme.border_type)
                    .border_style(self.theme.border)
                    .padding(PANEL_PADDING),
            )
            .bg(self.theme.bg_panel)
            .render(area, buf);
    }
}
