use super::{
    PlaybackMetrics, PlayerCommand, PlayerEvent, SourceError, StartSource, StartTicket,
    backend_rodio::RodioBackend,
    source::{HttpLoader, SourceLoader, decode_hint},
};
use crate::REFRESH_RATE;
use anyhow::Result;
use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};
use log::{debug, warn};
use std::{
    sync::Arc,
    thread::{self, JoinHandle},
    time::Duration,
};

pub(crate) trait AudioBackend {
    /// Replaces the queued source and reports its length if known. Leaves
    /// the output paused.
    fn load(&mut self, bytes: Vec<u8>, hint: Option<&str>) -> Result<Option<Duration>, SourceError>;
    fn play(&mut self);
    fn pause(&mut self);
    /// Drops the loaded source.
    fn stop(&mut self);
    fn seek(&mut self, position: Duration) -> Result<(), SourceError>;
    fn position(&self) -> Duration;
    fn is_drained(&self) -> bool;
}

pub(crate) struct PlayerCore {
    backend: Box<dyn AudioBackend>,
    loader: Box<dyn SourceLoader>,
    commands: Receiver<PlayerCommand>,
    events: Sender<PlayerEvent>,
    metrics: Arc<PlaybackMetrics>,

    has_source: bool,
}

impl PlayerCore {
    /// The output stream is opened on the player thread itself; `ready`
    /// reports whether that succeeded.
    pub fn spawn(
        commands: Receiver<PlayerCommand>,
        events: Sender<PlayerEvent>,
        metrics: Arc<PlaybackMetrics>,
        ready: Sender<Result<(), String>>,
    ) -> JoinHandle<()> {
        thread::spawn(move || {
            let parts = RodioBackend::new().and_then(|backend| Ok((backend, HttpLoader::new()?)));

            let (backend, loader) = match parts {
                Ok(parts) => parts,
                Err(e) => {
                    let _ = ready.send(Err(e.to_string()));
                    return;
                }
            };
            let _ = ready.send(Ok(()));

            let mut core = PlayerCore::new(
                Box::new(backend),
                Box::new(loader),
                commands,
                events,
                metrics,
            );

            core.run();
        })
    }

    pub fn new(
        backend: Box<dyn AudioBackend>,
        loader: Box<dyn SourceLoader>,
        commands: Receiver<PlayerCommand>,
        events: Sender<PlayerEvent>,
        metrics: Arc<PlaybackMetrics>,
    ) -> Self {
        PlayerCore {
            backend,
            loader,
            commands,
            events,
            metrics,
            has_source: false,
        }
    }

    fn run(&mut self) {
        loop {
            match self.commands.recv_timeout(REFRESH_RATE) {
                Ok(cmd) => self.handle_command(cmd),
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }
            self.tick();
        }
        debug!("Player thread exiting");
    }

    pub fn tick(&mut self) {
        self.check_track_end();
        self.update_metrics();
    }

    pub fn handle_command(&mut self, cmd: PlayerCommand) {
        match cmd {
            PlayerCommand::Start { ticket, source } => self.start(ticket, source),
            PlayerCommand::Pause => self.backend.pause(),
            PlayerCommand::Stop => self.stop(),
            PlayerCommand::Seek(pos) => self.seek(pos),
        }
    }

    fn check_track_end(&mut self) {
        // Clearing `has_source` ensures the event is sent once
        if self.has_source && self.backend.is_drained() {
            self.has_source = false;
            self.metrics.reset();
            let _ = self.events.send(PlayerEvent::TrackEnded);
        }
    }

    fn update_metrics(&mut self) {
        if self.has_source {
            self.metrics.set_elapsed(self.backend.position());
        }
    }
}

impl PlayerCore {
    fn start(&mut self, ticket: StartTicket, source: StartSource) {
        let outcome = match source {
            StartSource::Load(url) => self.load(&url),
            StartSource::Resume => self.resume(),
        };

        if let Err(e) = &outcome {
            warn!("Start {ticket} failed: {e}");
        }

        let _ = self.events.send(PlayerEvent::StartSettled {
            ticket,
            outcome: outcome.map_err(|e| e.to_string()),
        });
    }

    fn load(&mut self, url: &str) -> Result<(), SourceError> {
        self.stop();

        let fetched = self.loader.fetch(url)?;
        let hint = decode_hint(fetched.content_type.as_deref(), url);
        let duration = self.backend.load(fetched.bytes, hint)?;

        self.metrics.set_duration(duration);
        self.metrics.set_elapsed(Duration::ZERO);
        self.has_source = true;
        self.backend.play();

        Ok(())
    }

    fn resume(&mut self) -> Result<(), SourceError> {
        if !self.has_source {
            return Err(SourceError::NothingLoaded);
        }
        self.backend.play();
        Ok(())
    }

    fn stop(&mut self) {
        self.backend.stop();
        self.has_source = false;
        self.metrics.reset();
    }

    fn seek(&mut self, position: Duration) {
        if !self.has_source {
            return;
        }
        match self.backend.seek(position) {
            Ok(()) => self.metrics.set_elapsed(position),
            Err(e) => {
                let _ = self.events.send(PlayerEvent::Error(e.to_string()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::source::FetchedSource;
    use crossbeam_channel::unbounded;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Output {
        loaded: bool,
        playing: bool,
        drained: bool,
        position: Duration,
    }

    struct FakeBackend(Arc<Mutex<Output>>);

    impl AudioBackend for FakeBackend {
        fn load(&mut self, bytes: Vec<u8>, _: Option<&str>) -> Result<Option<Duration>, SourceError> {
            if bytes.is_empty() {
                return Err(SourceError::Decode("empty".into()));
            }
            let mut out = self.0.lock().unwrap();
            out.loaded = true;
            out.playing = false;
            out.drained = false;
            Ok(Some(Duration::from_secs(180)))
        }

        fn play(&mut self) {
            self.0.lock().unwrap().playing = true;
        }

        fn pause(&mut self) {
            self.0.lock().unwrap().playing = false;
        }

        fn stop(&mut self) {
            let mut out = self.0.lock().unwrap();
            out.loaded = false;
            out.playing = false;
        }

        fn seek(&mut self, position: Duration) -> Result<(), SourceError> {
            self.0.lock().unwrap().position = position;
            Ok(())
        }

        fn position(&self) -> Duration {
            self.0.lock().unwrap().position
        }

        fn is_drained(&self) -> bool {
            self.0.lock().unwrap().drained
        }
    }

    struct FakeLoader;

    impl SourceLoader for FakeLoader {
        fn fetch(&mut self, url: &str) -> Result<FetchedSource, SourceError> {
            match url {
                "bad" => Err(SourceError::Status(404)),
                "silent" => Ok(FetchedSource {
                    bytes: Vec::new(),
                    content_type: None,
                }),
                _ => Ok(FetchedSource {
                    bytes: vec![1, 2, 3],
                    content_type: Some("audio/mpeg".into()),
                }),
            }
        }
    }

    struct Rig {
        core: PlayerCore,
        output: Arc<Mutex<Output>>,
        events: Receiver<PlayerEvent>,
        metrics: Arc<PlaybackMetrics>,
        _commands: Sender<PlayerCommand>,
    }

    fn rig() -> Rig {
        let output = Arc::new(Mutex::new(Output::default()));
        let (cmd_tx, cmd_rx) = unbounded();
        let (evt_tx, evt_rx) = unbounded();
        let metrics = PlaybackMetrics::new();

        let core = PlayerCore::new(
            Box::new(FakeBackend(Arc::clone(&output))),
            Box::new(FakeLoader),
            cmd_rx,
            evt_tx,
            Arc::clone(&metrics),
        );

        Rig {
            core,
            output,
            events: evt_rx,
            metrics,
            _commands: cmd_tx,
        }
    }

    fn start(rig: &mut Rig, n: u64, source: StartSource) {
        rig.core.handle_command(PlayerCommand::Start {
            ticket: StartTicket(n),
            source,
        });
    }

    #[test]
    fn test_load_settles_ok_and_plays() {
        let mut rig = rig();
        start(&mut rig, 1, StartSource::Load("good".into()));

        assert_eq!(
            rig.events.try_recv(),
            Ok(PlayerEvent::StartSettled {
                ticket: StartTicket(1),
                outcome: Ok(())
            })
        );
        assert!(rig.output.lock().unwrap().playing);
        assert_eq!(rig.metrics.get_duration(), Some(Duration::from_secs(180)));
    }

    #[test]
    fn test_failed_fetch_and_decode_settle_with_error() {
        let mut rig = rig();
        start(&mut rig, 1, StartSource::Load("bad".into()));
        start(&mut rig, 2, StartSource::Load("silent".into()));

        for expected in [1, 2] {
            match rig.events.try_recv() {
                Ok(PlayerEvent::StartSettled { ticket, outcome }) => {
                    assert_eq!(ticket, StartTicket(expected));
                    assert!(outcome.is_err());
                }
                other => panic!("unexpected event {other:?}"),
            }
        }
        assert!(!rig.output.lock().unwrap().playing);
    }

    #[test]
    fn test_resume_requires_a_loaded_source() {
        let mut rig = rig();
        start(&mut rig, 1, StartSource::Resume);
        assert!(matches!(
            rig.events.try_recv(),
            Ok(PlayerEvent::StartSettled { outcome: Err(_), .. })
        ));

        start(&mut rig, 2, StartSource::Load("good".into()));
        rig.core.handle_command(PlayerCommand::Pause);
        assert!(!rig.output.lock().unwrap().playing);

        start(&mut rig, 3, StartSource::Resume);
        assert!(rig.output.lock().unwrap().playing);
    }

    #[test]
    fn test_track_end_is_reported_once() {
        let mut rig = rig();
        start(&mut rig, 1, StartSource::Load("good".into()));
        let _ = rig.events.try_recv();

        rig.output.lock().unwrap().drained = true;
        rig.core.tick();
        rig.core.tick();

        assert_eq!(rig.events.try_recv(), Ok(PlayerEvent::TrackEnded));
        assert!(rig.events.try_recv().is_err());
    }

    #[test]
    fn test_stop_unloads_and_ignores_later_seek() {
        let mut rig = rig();
        start(&mut rig, 1, StartSource::Load("good".into()));
        rig.core.handle_command(PlayerCommand::Seek(Duration::from_secs(30)));
        assert_eq!(rig.metrics.get_elapsed(), Duration::from_secs(30));

        rig.core.handle_command(PlayerCommand::Stop);
        rig.core.handle_command(PlayerCommand::Seek(Duration::from_secs(90)));

        assert_eq!(rig.output.lock().unwrap().position, Duration::from_secs(30));
        assert_eq!(rig.metrics.get_elapsed(), Duration::ZERO);
        assert!(!rig.output.lock().unwrap().loaded);
    }
}
