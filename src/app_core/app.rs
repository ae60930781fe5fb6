use crate::{
    Config,
    api::FetchWorker,
    key_handler::{Action, Director},
    playback::PlaybackEngine,
    player::PlayerHandle,
    tui,
    ui_state::{Mode, Pane, SettingsState, UiState},
};
use anyhow::Result;
use crossbeam_channel::{Receiver, unbounded};
use ratatui::{
    DefaultTerminal,
    crossterm::event::{self, Event, KeyEvent, KeyEventKind},
};
use std::thread;

pub struct Odeon {
    pub(super) config: Config,
    pub(super) ui: UiState,
    pub(super) engine: PlaybackEngine<PlayerHandle>,
    pub(super) fetcher: FetchWorker,
}

impl Odeon {
    pub fn new(config: Config) -> Result<Self> {
        let handle = PlayerHandle::spawn()?;
        let settings = SettingsState::from_config(&config);

        Ok(Odeon {
            ui: UiState::new(settings, handle.metrics()),
            engine: PlaybackEngine::new(handle),
            fetcher: FetchWorker::spawn(),
            config,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ratatui::init();
        terminal.clear()?;

        let result = self.main_loop(&mut terminal);

        ratatui::restore();
        log::info!("Shutting down");

        result
    }

    fn main_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        let key_rx = spawn_input_listener();
        self.reload_first_page();

        // MAIN ROUTINE
        loop {
            self.select_shortcut(&key_rx);
            self.ui.tick();

            terminal.draw(|f| tui::render(f, &mut self.ui))?;

            if self.ui.get_mode() == Mode::Quit {
                break;
            }
        }

        Ok(())
    }
}

fn spawn_input_listener() -> Receiver<KeyEvent> {
    let (tx, rx) = unbounded();

    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if tx.send(key).is_err() {
                        break;
                    }
                }
                Ok(_) => (),
                Err(e) => {
                    log::error!("Input listener stopped: {e}");
                    break;
                }
            }
        }
    });

    rx
}

impl Odeon {
    #[rustfmt::skip]
    pub(super) fn handle_action(&mut self, action: Action) -> Result<()> {
        match action {
            // Player
            Action::ToggleCard      => self.toggle_selected()?,
            Action::TogglePause     => self.engine.toggle_transport(&mut self.ui)?,
            Action::PlayNext        => self.play_next()?,
            Action::PlayPrev        => self.play_prev()?,
            Action::SeekForward(p)  => self.engine.seek_by(f64::from(p) / 100.0)?,
            Action::SeekBack(p)     => self.engine.seek_by(-f64::from(p) / 100.0)?,
            Action::SeekTo(n)       => self.engine.seek(f64::from(n) / 10.0)?,

            // Fetching
            Action::PrevPage        => self.step_page(-1),
            Action::NextPage        => self.step_page(1),
            Action::FirstPage       => self.jump_page(false),
            Action::LastPage        => self.jump_page(true),
            Action::SendSearch      => self.send_search(),
            Action::Random          => self.load_random(),
            Action::Download        => self.download_selected()?,

            // UI
            Action::UpdateSearch(k) => self.ui.process_search(k),
            Action::FocusSearch     => self.ui.focus_search(),
            Action::LeaveSearch     => self.ui.set_pane(Pane::TrackList),
            Action::Scroll(d)       => self.scroll(d),

            // Settings
            Action::CycleSite       => {
                self.ui.settings.cycle_site();
                self.reload_first_page();
            }
            Action::CycleServer     => {
                self.ui.settings.cycle_server();
                self.reload_first_page();
            }
            Action::CyclePageSize   => self.ui.settings.cycle_limit(),
            Action::AdjustMinScore(s) => self.ui.settings.adjust_min_score(s),

            // Ops
            Action::SoftReset       => self.ui.soft_reset(),
            Action::Quit            => self.ui.set_mode(Mode::Quit),
        }
        Ok(())
    }

    fn scroll(&mut self, director: Director) {
        match director {
            Director::Up(n) => self.ui.scroll(-(n as isize)),
            Director::Down(n) => self.ui.scroll(n as isize),
            Director::Top => self.ui.scroll_edge(false),
            Director::Bottom => self.ui.scroll_edge(true),
        }
    }
}
