use super::{Action, C, Director, S, SCROLL_MID, SEEK_STEP, X};
use crate::ui_state::{Pane, UiState};
use ratatui::crossterm::event::{KeyCode, KeyEvent};

use KeyCode::*;

pub fn handle_key_event(key_event: KeyEvent, state: &UiState) -> Option<Action> {
    if let (C, Char('c')) = (key_event.modifiers, key_event.code) {
        return Some(Action::Quit);
    }

    match state.get_pane() {
        Pane::Search => handle_search_pane(&key_event),
        Pane::TrackList => handle_tracklist(&key_event),
    }
}

fn handle_tracklist(key: &KeyEvent) -> Option<Action> {
    match (key.modifiers, key.code) {
        (X, Char('q')) => Some(Action::Quit),
        (X, Esc) => Some(Action::SoftReset),

        // PLAYBACK COMMANDS
        (X, Enter) => Some(Action::ToggleCard),
        (X, Char(' ')) => Some(Action::TogglePause),
        (X, Char('n')) => Some(Action::PlayNext),
        (X, Char('p')) => Some(Action::PlayPrev),

        (X, Right) => Some(Action::SeekForward(SEEK_STEP)),
        (X, Left) => Some(Action::SeekBack(SEEK_STEP)),
        (X, Char(c)) if c.is_ascii_digit() => c.to_digit(10).map(|d| Action::SeekTo(d as u8)),

        // PAGES
        (X, Char('[')) => Some(Action::PrevPage),
        (X, Char(']')) => Some(Action::NextPage),
        (S, Char('{')) => Some(Action::FirstPage),
        (S, Char('}')) => Some(Action::LastPage),

        (X, Char('/')) => Some(Action::FocusSearch),
        (X, Char('r')) => Some(Action::Random),
        (X, Char('d')) => Some(Action::Download),

        // SETTINGS
        (X, Char('s')) => Some(Action::CycleSite),
        (S, Char('S')) => Some(Action::CycleServer),
        (X, Char('l')) => Some(Action::CyclePageSize),
        (X, Char('-')) => Some(Action::AdjustMinScore(-1)),
        (_, Char('+')) | (X, Char('=')) => Some(Action::AdjustMinScore(1)),

        // SCROLLING
        (X, Char('j')) | (X, Down) => Some(Action::Scroll(Director::Down(1))),
        (X, Char('k')) | (X, Up) => Some(Action::Scroll(Director::Up(1))),
        (X, PageDown) => Some(Action::Scroll(Director::Down(SCROLL_MID))),
        (X, PageUp) => Some(Action::Scroll(Director::Up(SCROLL_MID))),
        (X, Char('g')) | (X, Home) => Some(Action::Scroll(Director::Top)),
        (S, Char('G')) | (X, End) => Some(Action::Scroll(Director::Bottom)),

        _ => None,
    }
}

fn handle_search_pane(key: &KeyEvent) -> Option<Action> {
    match (key.modifiers, key.code) {
        (X, Enter) => Some(Action::SendSearch),
        (X, Esc) | (X, Tab) => Some(Action::LeaveSearch),
        _ => Some(Action::UpdateSearch(*key)),
    }
}
