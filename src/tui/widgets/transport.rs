use super::DECORATOR;
use crate::{format_time, ui_state::UiState};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Stylize,
    text::{Line, Span, Text},
    widgets::{Block, Borders, LineGauge, Padding, StatefulWidget, Widget},
};

const TIME_WIDTH: u16 = 7;

/// Play/pause state, title, wave and seek gauge of the bound track.
pub struct Transport;
impl StatefulWidget for Transport {
    type State = UiState;

    fn render(self, area: Rect, buf: &mut ratatui::prelude::Buffer, state: &mut Self::State) {
        if !state.transport().visible {
            return;
        }

        let theme = state.get_theme(state.get_pane());
        let bar = state.transport();
        let metrics = state.metrics();

        let block = Block::new()
            .borders(Borders::TOP)
            .border_style(theme.border)
            .padding(Padding::horizontal(1))
            .bg(theme.bg_global);
        let inner = block.inner(area);
        block.render(area, buf);

        let [now_playing, progress] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(inner);

        let [info, wave] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Percentage(30)]).areas(now_playing);

        let icon_color = match bar.playing {
            true => theme.playing,
            false => theme.text_faded,
        };
        Line::from_iter([
            Span::from(format!("{} ", bar.icon())).fg(icon_color),
            Span::from(bar.title.clone()).fg(theme.text_focused).bold(),
            Span::from(DECORATOR).fg(theme.text_faded),
            Span::from(bar.site.clone()).fg(theme.text_faded),
        ])
        .render(info, buf);

        Line::from(bar.wave(wave.width as usize))
            .fg(icon_color)
            .right_aligned()
            .render(wave, buf);

        let [elapsed, gauge, duration] = Layout::horizontal([
            Constraint::Length(TIME_WIDTH),
            Constraint::Fill(1),
            Constraint::Length(TIME_WIDTH),
        ])
        .areas(progress);

        let ratio = metrics.progress().clamp(0.0, 1.0);

        Text::from(format_time(Some(metrics.get_elapsed())))
            .fg(theme.text_faded)
            .left_aligned()
            .render(elapsed, buf);

        LineGauge::default()
            .filled_style(theme.accent)
            .unfilled_style(theme.text_faded)
            .label(format!("{:>3}%", (ratio * 100.0).round() as u8))
            .ratio(ratio)
            .render(gauge, buf);

        Text::from(format_time(metrics.get_duration()))
            .fg(theme.text_faded)
            .right_aligned()
            .render(duration, buf);
    }
}
