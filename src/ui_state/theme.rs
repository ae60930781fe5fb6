use crate::ui_state::{Pane, UiState};
use ratatui::{
    style::Color,
    widgets::{BorderType, Borders},
};

const SOFT_WHITE: Color = Color::Rgb(225, 225, 232);
const SLATE: Color = Color::Rgb(110, 114, 130);
const NIGHT: Color = Color::Rgb(18, 18, 28);
const NIGHT_FADED: Color = Color::Rgb(12, 12, 18);
const INDIGO: Color = Color::Rgb(99, 102, 241);
const INDIGO_FADED: Color = Color::Rgb(60, 62, 140);
pub const ROSE: Color = Color::Rgb(244, 63, 94);
pub const EMERALD: Color = Color::Rgb(52, 211, 153);

pub struct DisplayTheme {
    pub bg_panel: Color,
    pub bg_global: Color,
    pub border: Color,
    pub text_focused: Color,
    pub text_faded: Color,
    pub accent: Color,
    pub error: Color,
    pub playing: Color,

    pub border_display: Borders,
    pub border_type: BorderType,
}

pub(crate) struct Theme {
    pub bg_focused: Color,
    pub bg_unfocused: Color,
    pub bg_global: Color,
    pub border_focused: Color,
    pub border_unfocused: Color,
    pub text_focused: Color,
    pub text_unfocused: Color,
    pub accent: Color,
    pub accent_unfocused: Color,
}

impl Theme {
    pub fn night() -> Theme {
        Theme {
            bg_focused: NIGHT,
            bg_unfocused: NIGHT_FADED,
            bg_global: NIGHT,
            border_focused: INDIGO,
            border_unfocused: Color::Rgb(45, 45, 60),
            text_focused: SOFT_WHITE,
            text_unfocused: SLATE,
            accent: INDIGO,
            accent_unfocused: INDIGO_FADED,
        }
    }
}

impl UiState {
    pub fn get_theme(&self, pane: &Pane) -> DisplayTheme {
        let focused = pane == self.get_pane();

        DisplayTheme {
            bg_panel: match focused {
                true => self.theme.bg_focused,
                false => self.theme.bg_unfocused,
            },
            bg_global: self.theme.bg_global,
            border: match focused {
                true => self.theme.border_focused,
                false => self.theme.border_unfocused,
            },
            text_focused: match focused {
                true => self.theme.text_focused,
                false => self.theme.text_unfocused,
            },
            text_faded: self.theme.text_unfocused,
            accent: match focused {
                true => self.theme.accent,
                false => self.theme.accent_unfocused,
            },
            error: ROSE,
            playing: EMERALD,

            border_display: Borders::ALL,
            border_type: BorderType::Rounded,
        }
    }
}
