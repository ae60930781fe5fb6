mod action;

pub use action::handle_key_event;

use ratatui::crossterm::event::{KeyEvent, KeyModifiers};

const X: KeyModifiers = KeyModifiers::NONE;
const S: KeyModifiers = KeyModifiers::SHIFT;
const C: KeyModifiers = KeyModifiers::CONTROL;

/// Percent of the track skipped by the arrow keys.
const SEEK_STEP: u8 = 5;
const SCROLL_MID: usize = 5;

#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    // Player Controls
    ToggleCard,
    TogglePause,
    PlayNext,
    PlayPrev,
    SeekForward(u8),
    SeekBack(u8),
    SeekTo(u8),

    // Fetching
    PrevPage,
    NextPage,
    FirstPage,
    LastPage,
    SendSearch,
    Random,
    Download,

    // Updating App State
    UpdateSearch(KeyEvent),
    FocusSearch,
    LeaveSearch,
    Scroll(Director),
    CycleSite,
    CycleServer,
    CyclePageSize,
    AdjustMinScore(i32),

    SoftReset,
    Quit,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Director {
    Up(usize),
    Down(usize),
    Top,
    Bottom,
}
