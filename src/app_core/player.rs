use super::Odeon;
use crate::{playback::Direction, player::PlayerEvent};
use anyhow::{Result, anyhow};

impl Odeon {
    pub(super) fn toggle_selected(&mut self) -> Result<()> {
        let request = self
            .ui
            .selected_request()
            .ok_or_else(|| anyhow!("This track cannot be played"))?;

        self.engine.toggle(request, &mut self.ui)
    }

    pub(super) fn play_next(&mut self) -> Result<()> {
        self.engine.advance(Direction::Next, &mut self.ui)
    }

    pub(super) fn play_prev(&mut self) -> Result<()> {
        self.engine.advance(Direction::Previous, &mut self.ui)
    }

    pub(super) fn handle_player_event(&mut self, event: PlayerEvent) {
        if let Err(e) = self.engine.on_player_event(event, &mut self.ui) {
            self.ui.set_error(e);
        }
    }
}
