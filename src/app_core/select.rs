use crate::{REFRESH_RATE, app_core::Odeon, key_handler};
use crossbeam_channel::{Receiver, select};
use ratatui::crossterm::event::KeyEvent;

impl Odeon {
    /// Waits for the next player event, fetch result or key press, or for
    /// one frame to pass.
    #[inline]
    pub fn select_shortcut(&mut self, key_rx: &Receiver<KeyEvent>) {
        let player_rx = self.engine.handle().events().clone();
        let fetch_rx = self.fetcher.events().clone();

        select! {
            recv(player_rx) -> event => {
                if let Ok(event) = event {
                    self.handle_player_event(event);
                }
            }

            recv(fetch_rx) -> event => {
                if let Ok(event) = event {
                    self.handle_fetch_event(event);
                }
            }

            recv(key_rx) -> key => {
                if let Ok(key) = key {
                    if let Some(action) = key_handler::handle_key_event(key, &self.ui) {
                        if let Err(e) = self.handle_action(action) {
                            self.ui.set_error(e);
                        }
                    }
                }
            }

            default(REFRESH_RATE) => {}
        }
    }
}
