use super::{
    MediaHandle, PlaybackMetrics, PlayerCommand, PlayerEvent, StartSource, StartTicket,
    core::PlayerCore,
};
use anyhow::{Result, anyhow};
use crossbeam_channel::{Receiver, Sender, bounded, unbounded};
use log::debug;
use std::{sync::Arc, time::Duration};

pub struct PlayerHandle {
    commands: Sender<PlayerCommand>,
    events: Receiver<PlayerEvent>,
    metrics: Arc<PlaybackMetrics>,
}

impl PlayerHandle {
    /// Starts the player thread and waits until its audio output is open.
    pub fn spawn() -> Result<Self> {
        let (cmd_tx, cmd_rx) = unbounded();
        let (evt_tx, evt_rx) = unbounded();
        let (ready_tx, ready_rx) = bounded(1);
        let metrics = PlaybackMetrics::new();

        PlayerCore::spawn(cmd_rx, evt_tx, Arc::clone(&metrics), ready_tx);

        ready_rx
            .recv()?
            .map_err(|e| anyhow!("Failed to open audio output: {e}"))?;

        Ok(Self {
            commands: cmd_tx,
            events: evt_rx,
            metrics,
        })
    }

    pub fn metrics(&self) -> Arc<PlaybackMetrics> {
        Arc::clone(&self.metrics)
    }

    pub fn events(&self) -> &Receiver<PlayerEvent> {
        &self.events
    }

    fn send(&self, cmd: PlayerCommand) -> Result<()> {
        self.commands.send(cmd)?;
        Ok(())
    }
}

impl MediaHandle for PlayerHandle {
    fn start(&mut self, ticket: StartTicket, source: StartSource) -> Result<()> {
        debug!("Issuing start {ticket}: {source:?}");
        self.send(PlayerCommand::Start { ticket, source })
    }

    fn pause(&mut self) -> Result<()> {
        self.send(PlayerCommand::Pause)
    }

    fn stop(&mut self) -> Result<()> {
        self.send(PlayerCommand::Stop)
    }

    fn seek(&mut self, position: Duration) -> Result<()> {
        self.send(PlayerCommand::Seek(position))
    }

    fn duration(&self) -> Option<Duration> {
        self.metrics.get_duration()
    }

    fn elapsed(&self) -> Duration {
        self.metrics.get_elapsed()
    }
}
