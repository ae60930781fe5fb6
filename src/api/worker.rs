use super::{ApiClient, ApiError, Listing, ListingQuery};
use crate::domain::TrackRequest;
use anyhow::Result;
use crossbeam_channel::{Receiver, Sender, unbounded};
use std::{collections::HashMap, path::PathBuf, thread};

pub enum FetchKind {
    Listing(ListingQuery),
    Random { site: String },
    Download { track: TrackRequest, dir: PathBuf },
}

pub struct FetchRequest {
    pub generation: u64,
    pub base: String,
    pub kind: FetchKind,
}

pub enum FetchEvent {
    Listing {
        generation: u64,
        query: ListingQuery,
        result: Result<Listing, ApiError>,
    },
    Random {
        generation: u64,
        site: String,
        result: Result<Option<Listing>, ApiError>,
    },
    Downloaded {
        title: String,
        result: Result<PathBuf, ApiError>,
    },
}

impl FetchEvent {
    /// Downloads are not tied to the visible listing and carry no generation.
    pub fn generation(&self) -> Option<u64> {
        match self {
            FetchEvent::Listing { generation, .. } | FetchEvent::Random { generation, .. } => {
                Some(*generation)
            }
            FetchEvent::Downloaded { .. } => None,
        }
    }
}

/// Runs API requests off the UI thread.
///
/// Every listing or random request bumps the generation; the owner keeps
/// only events whose generation is still current.
pub struct FetchWorker {
    requests: Sender<FetchRequest>,
    events: Receiver<FetchEvent>,
    generation: u64,
}

impl FetchWorker {
    pub fn spawn() -> Self {
        let (req_tx, req_rx) = unbounded();
        let (evt_tx, evt_rx) = unbounded();

        thread::spawn(move || dispatch(req_rx, evt_tx));

        FetchWorker {
            requests: req_tx,
            events: evt_rx,
            generation: 0,
        }
    }

    pub fn events(&self) -> &Receiver<FetchEvent> {
        &self.events
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    pub fn load(&mut self, base: &str, query: ListingQuery) -> Result<u64> {
        self.submit(base, FetchKind::Listing(query))
    }

    pub fn random(&mut self, base: &str, site: &str) -> Result<u64> {
        self.submit(base, FetchKind::Random { site: site.into() })
    }

    pub fn download(&self, base: &str, track: TrackRequest, dir: PathBuf) -> Result<()> {
        self.requests.send(FetchRequest {
            generation: self.generation,
            base: base.into(),
            kind: FetchKind::Download { track, dir },
        })?;
        Ok(())
    }

    fn submit(&mut self, base: &str, kind: FetchKind) -> Result<u64> {
        self.generation += 1;
        self.requests.send(FetchRequest {
            generation: self.generation,
            base: base.into(),
            kind,
        })?;
        Ok(self.generation)
    }
}

fn dispatch(requests: Receiver<FetchRequest>, events: Sender<FetchEvent>) {
    let mut clients: HashMap<String, ApiClient> = HashMap::new();

    for request in requests.iter() {
        let client = match clients.get(&request.base).cloned() {
            Some(client) => Ok(client),
            None => ApiClient::new(&request.base).inspect(|client| {
                clients.insert(request.base.clone(), client.clone());
            }),
        };

        let events = events.clone();
        let generation = request.generation;

        // One thread per request; the generation restores ordering for the owner
        thread::spawn(move || {
            let event = match request.kind {
                FetchKind::Listing(query) => FetchEvent::Listing {
                    generation,
                    result: client.and_then(|c| c.fetch(&query)),
                    query,
                },
                FetchKind::Random { site } => FetchEvent::Random {
                    generation,
                    result: client.and_then(|c| c.random(&site)),
                    site,
                },
                FetchKind::Download { track, dir } => FetchEvent::Downloaded {
                    result: client.and_then(|c| c.download(&track.url, &dir, &track.title)),
                    title: track.title,
                },
            };
            let _ = events.send(event);
        });
    }
}
