use super::session::{BoundTrack, Direction, PendingStart, QueuedStart, Session};
use crate::{
    domain::{Playlist, TrackId, TrackRequest},
    player::{MediaHandle, PlayerEvent, StartSource, StartTicket},
    ui_state::Projector,
};
use anyhow::{Result, anyhow};
use log::{debug, info, warn};

/// Owns the playlist, the playback session and the one media handle.
///
/// Starts are serialized: while one is pending, a new request waits in a
/// single slot (the latest request replaces an older waiting one) and the
/// pending outcome is discarded once it settles. Every transition is pushed
/// to the UI through a [`Projector`].
pub struct PlaybackEngine<H: MediaHandle> {
    handle: H,
    playlist: Playlist,
    session: Session,
    next_ticket: u64,
}

impl<H: MediaHandle> PlaybackEngine<H> {
    pub fn new(handle: H) -> Self {
        PlaybackEngine {
            handle,
            playlist: Playlist::default(),
            session: Session::default(),
            next_ticket: 0,
        }
    }

    pub fn bound(&self) -> Option<&BoundTrack> {
        self.session.current.as_ref()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.session.current_index
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn is_playing(&self) -> bool {
        self.bound().is_some_and(|b| b.playing)
    }

    pub fn has_pending_start(&self) -> bool {
        self.session.pending.is_some()
    }

    pub fn handle(&self) -> &H {
        &self.handle
    }

    /// The bound track stays bound; the index is not searched for again.
    pub fn set_playlist(&mut self, playlist: Playlist) {
        debug!("Playlist replaced ({} tracks)", playlist.len());
        self.playlist = playlist;
        self.session.current_index = None;
    }

    /// Per-card play/pause. A track that is still starting counts as playing.
    pub fn toggle(&mut self, request: TrackRequest, ui: &mut impl Projector) -> Result<()> {
        match self.bound().filter(|b| b.id == request.id) {
            Some(bound) if bound.playing || self.is_starting(&bound.id) => self.pause(ui),
            Some(_) => self.resume(),
            None => self.play(request, ui),
        }
    }

    /// Transport bar play/pause.
    pub fn toggle_transport(&mut self, ui: &mut impl Projector) -> Result<()> {
        match self.bound() {
            None => Ok(()),
            Some(bound) if bound.playing || self.is_starting(&bound.id) => self.pause(ui),
            Some(_) => self.resume(),
        }
    }

    pub fn play(&mut self, request: TrackRequest, ui: &mut impl Projector) -> Result<()> {
        if let Some(previous) = self.session.current.as_mut().filter(|b| b.id != request.id) {
            self.handle.stop()?;
            previous.playing = false;
            previous.loaded = false;
            ui.project(&previous.fact());
        }

        info!("Playing \"{}\" ({})", request.title, request.id);

        let bound = BoundTrack::from(request);
        let (id, url) = (bound.id.clone(), bound.url.clone());
        ui.project(&bound.fact());
        self.session.current = Some(bound);

        self.request_start(id, StartSource::Load(url))
    }

    pub fn pause(&mut self, ui: &mut impl Projector) -> Result<()> {
        self.handle.pause()?;

        if let Some(pending) = self.session.pending.as_mut() {
            pending.superseded = true;
        }
        if let Some(dropped) = self.session.queued.take() {
            debug!("Dropping queued start for {}", dropped.track_id);
        }

        if let Some(bound) = self.session.current.as_mut() {
            bound.playing = false;
            ui.project(&bound.fact());
        }
        Ok(())
    }

    /// Plays the neighbour of the current index, wrapping at both ends.
    pub fn advance(&mut self, direction: Direction, ui: &mut impl Projector) -> Result<()> {
        let len = self.playlist.len();
        if len == 0 {
            return Ok(());
        }

        let mut index = direction.step(self.session.current_index, len);
        for _ in 0..len {
            self.session.current_index = Some(index);

            match self.playlist.request_for(index) {
                Some(request) => return self.play(request, ui),
                None => {
                    debug!("Skipping record {index}: no track id");
                    index = direction.step(Some(index), len);
                }
            }
        }

        warn!("No playable record in the playlist");
        Ok(())
    }

    /// Seeks to `fraction` of the track. Ignored until the length is known.
    pub fn seek(&mut self, fraction: f64) -> Result<()> {
        if self.session.current.is_none() {
            return Ok(());
        }

        match self.handle.duration().filter(|d| !d.is_zero()) {
            Some(total) => self.handle.seek(total.mul_f64(fraction.clamp(0.0, 1.0))),
            None => Ok(()),
        }
    }

    /// Seeks relative to the current position by `delta` of the track length.
    pub fn seek_by(&mut self, delta: f64) -> Result<()> {
        let Some(total) = self.handle.duration().filter(|d| !d.is_zero()) else {
            return Ok(());
        };

        let position = self.handle.elapsed().as_secs_f64() / total.as_secs_f64();
        self.seek(position + delta)
    }

    pub fn on_player_event(&mut self, event: PlayerEvent, ui: &mut impl Projector) -> Result<()> {
        match event {
            PlayerEvent::StartSettled { ticket, outcome } => self.on_start_settled(ticket, outcome, ui),
            PlayerEvent::TrackEnded => self.on_track_ended(ui),
            PlayerEvent::Error(e) => {
                warn!("Player error: {e}");
                match self.has_pending_start() {
                    true => Ok(()),
                    false => Err(anyhow!(e)),
                }
            }
        }
    }
}

impl<H: MediaHandle> PlaybackEngine<H> {
    /// A start for `id` is in flight and has not been paused or replaced.
    fn is_starting(&self, id: &TrackId) -> bool {
        self.session
            .pending
            .as_ref()
            .is_some_and(|p| !p.superseded && p.track_id == *id)
    }

    fn resume(&mut self) -> Result<()> {
        let Some(bound) = self.session.current.as_ref() else {
            return Ok(());
        };

        let source = match bound.loaded {
            true => StartSource::Resume,
            false => StartSource::Load(bound.url.clone()),
        };
        let id = bound.id.clone();

        self.request_start(id, source)
    }

    fn request_start(&mut self, track_id: TrackId, source: StartSource) -> Result<()> {
        match self.session.pending.as_mut() {
            Some(pending) => {
                debug!("Start {} pending, queueing {track_id}", pending.ticket);
                pending.superseded = true;
                self.session.queued = Some(QueuedStart { track_id, source });
                Ok(())
            }
            None => self.issue(track_id, source),
        }
    }

    fn issue(&mut self, track_id: TrackId, source: StartSource) -> Result<()> {
        self.next_ticket += 1;
        let ticket = StartTicket(self.next_ticket);

        self.handle.start(ticket, source)?;
        self.session.pending = Some(PendingStart {
            ticket,
            track_id,
            superseded: false,
        });
        Ok(())
    }

    fn on_start_settled(
        &mut self,
        ticket: StartTicket,
        outcome: Result<(), String>,
        ui: &mut impl Projector,
    ) -> Result<()> {
        let Some(pending) = self.session.pending.take_if(|p| p.ticket == ticket) else {
            debug!("Ignoring stale settlement {ticket}");
            return Ok(());
        };

        if let Some(queued) = self.session.queued.take() {
            debug!("Discarding outcome of {ticket}, issuing start for {}", queued.track_id);
            if outcome.is_ok() {
                self.handle.stop()?;
            }

            // Nothing is loaded any more, so a resume has to fetch again
            let source = match (queued.source, self.session.current.as_mut()) {
                (StartSource::Resume, Some(bound)) if bound.id == queued.track_id => {
                    bound.loaded = false;
                    StartSource::Load(bound.url.clone())
                }
                (source, _) => source,
            };
            return self.issue(queued.track_id, source);
        }

        let Some(bound) = self
            .session
            .current
            .as_mut()
            .filter(|b| b.id == pending.track_id)
        else {
            return Ok(());
        };

        if pending.superseded {
            // Paused while starting: the source is loaded but stays paused
            bound.loaded = outcome.is_ok();
            return Ok(());
        }

        match outcome {
            Ok(()) => {
                debug!("Start {ticket} settled, {} is playing", bound.id);
                bound.playing = true;
                bound.loaded = true;
                ui.project(&bound.fact());
                self.session.current_index = self.playlist.position(&bound.id);
                Ok(())
            }
            Err(e) => {
                warn!("Could not start {}: {e}", bound.id);
                bound.playing = false;
                bound.loaded = false;
                ui.project(&bound.fact());
                Err(anyhow!("Could not play \"{}\": {e}", bound.title))
            }
        }
    }

    fn on_track_ended(&mut self, ui: &mut impl Projector) -> Result<()> {
        if self.has_pending_start() {
            debug!("Ignoring end of a replaced source");
            return Ok(());
        }

        if let Some(bound) = self.session.current.as_mut() {
            info!("Finished \"{}\"", bound.title);
            bound.playing = false;
            bound.loaded = false;
            ui.project(&bound.fact());
        }

        self.advance(Direction::Next, ui)
    }
}
