use super::{DECORATOR, DOWNLOAD_ICON};
use crate::{
    api::ListingQuery,
    truncate_at_last_space,
    ui_state::{CardState, DisplayTheme, Pane, UiState},
};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Rect},
    style::{Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, Cell, Padding, Row, StatefulWidget, Table, Widget},
};

const COLUMN_SPACING: u16 = 2;
const SKELETON_ROWS: usize = 6;
const KEYMAPS: &str = " [⏎] play/pause ✧ [d]ownload ✧ [r]andom ✧ [ ] pages ";

const PADDING: Padding = Padding {
    left: 2,
    right: 2,
    top: 1,
    bottom: 0,
};

fn widths() -> [Constraint; 7] {
    [
        Constraint::Length(5),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(12),
        Constraint::Max(20),
        Constraint::Length(5),
        Constraint::Length(1),
    ]
}

fn table_block(theme: &DisplayTheme, title: Line<'static>, keymaps: &'static str) -> Block<'static> {
    Block::bordered()
        .borders(theme.border_display)
        .border_type(theme.border_type)
        .border_style(theme.border)
        .title_top(title.alignment(Alignment::Center))
        .title_bottom(Line::from(keymaps.fg(theme.text_faded)).alignment(Alignment::Center))
        .padding(PADDING)
        .bg(theme.bg_panel)
}

fn header(theme: &DisplayTheme) -> Row<'static> {
    Row::new(["#", "", "Title", "Uploaded", "Source", "", ""])
        .fg(theme.text_faded)
        .bottom_margin(1)
}

pub struct TrackTable;
impl StatefulWidget for TrackTable {
    type State = UiState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let Some(page) = state.current_page() else {
            return;
        };
        let theme = state.get_theme(&Pane::TrackList);
        let listing = &page.listing;
        let title_width = (area.width / 2) as usize;

        let rows = listing
            .data
            .iter()
            .enumerate()
            .map(|(idx, record)| {
                let card = record.track_id().and_then(|id| state.card(&id).copied());
                let text_color = match card {
                    Some(CardState { playing: true }) => theme.playing,
                    Some(_) => theme.text_focused,
                    None => theme.text_faded,
                };

                let title = truncate_at_last_space(&record.display_name(), title_width);

                Row::new([
                    Cell::from(Text::from(format!("{}", listing.rank(idx))).right_aligned())
                        .fg(theme.accent),
                    Cell::from(card.map(|c| c.icon()).unwrap_or("")),
                    Cell::from(title),
                    Cell::from(record.upload_date()).fg(theme.text_faded),
                    Cell::from(listing.metadata.domain.clone()).fg(theme.text_faded),
                    Cell::from(card.map(|c| c.label()).unwrap_or("")),
                    Cell::from(match card.is_some() {
                        true => DOWNLOAD_ICON,
                        false => "",
                    }),
                ])
                .fg(text_color)
            })
            .collect::<Vec<Row>>();

        let table = Table::new(rows, widths())
            .header(header(&theme))
            .block(table_block(&theme, title_line(state, &theme), KEYMAPS))
            .column_spacing(COLUMN_SPACING)
            .flex(Flex::Start)
            .row_highlight_style(match state.get_pane() {
                Pane::TrackList => Style::new().bg(theme.border).fg(theme.bg_global),
                Pane::Search => Style::new(),
            });

        StatefulWidget::render(table, area, buf, &mut state.table_pos);
    }
}

fn title_line(state: &UiState, theme: &DisplayTheme) -> Line<'static> {
    let Some(page) = state.current_page() else {
        return Line::default();
    };
    let (start, end, total) = page.listing.showing();

    let heading = match &page.query {
        Some(ListingQuery::Search { text, .. }) => format!("Search \"{text}\""),
        Some(query) => format!("Browse {}", query.site()),
        None => format!("Random pick from {}", state.settings.site()),
    };

    let count = match page.query {
        Some(_) => format!("[{start}-{end} of {total}] "),
        None => String::new(),
    };

    Line::from_iter([
        Span::from(DECORATOR).fg(theme.text_faded),
        Span::from(heading).fg(theme.accent),
        Span::from(DECORATOR).fg(theme.text_faded),
        Span::from(count).fg(theme.text_faded),
    ])
}

/// Placeholder rows while a fetch is outstanding.
pub struct SkeletonTable<'a> {
    theme: &'a DisplayTheme,
}

impl<'a> SkeletonTable<'a> {
    pub fn new(theme: &'a DisplayTheme) -> Self {
        SkeletonTable { theme }
    }
}

impl Widget for SkeletonTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = (0..SKELETON_ROWS).map(|i| {
            let bar = "░".repeat(18 + (i * 7) % 13);
            Row::new([
                Cell::from("░░"),
                Cell::from(""),
                Cell::from(bar),
                Cell::from("░░░░░░░░"),
                Cell::from("░░░░░░"),
                Cell::from("░░░"),
                Cell::from(""),
            ])
            .fg(self.theme.text_faded)
        });

        let title = Line::from(" Loading… ".fg(self.theme.text_faded));

        Widget::render(
            Table::new(rows, widths())
                .block(table_block(self.theme, title, ""))
                .column_spacing(COLUMN_SPACING),
            area,
            buf,
        );
    }
}
