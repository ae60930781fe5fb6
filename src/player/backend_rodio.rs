use super::{SourceError, core::AudioBackend};
use anyhow::Result;
use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};
use std::{io::Cursor, time::Duration};

pub(crate) struct RodioBackend {
    sink: Sink,
    _stream: OutputStream,
}

impl RodioBackend {
    pub fn new() -> Result<Self> {
        let stream = OutputStreamBuilder::open_default_stream()?;
        let sink = Sink::connect_new(stream.mixer());

        Ok(Self {
            sink,
            _stream: stream,
        })
    }
}

impl AudioBackend for RodioBackend {
    fn load(&mut self, bytes: Vec<u8>, hint: Option<&str>) -> Result<Option<Duration>, SourceError> {
        let source = decode(bytes, hint)?;
        let duration = source.total_duration();

        // `clear` also pauses the sink, `play` is issued by the caller
        self.sink.clear();
        self.sink.append(source);

        Ok(duration)
    }

    fn play(&mut self) {
        self.sink.play();
    }

    fn pause(&mut self) {
        self.sink.pause();
    }

    fn stop(&mut self) {
        self.sink.clear();
    }

    fn seek(&mut self, position: Duration) -> Result<(), SourceError> {
        self.sink
            .try_seek(position)
            .map_err(|e| SourceError::Seek(e.to_string()))
    }

    fn position(&self) -> Duration {
        self.sink.get_pos()
    }

    fn is_drained(&self) -> bool {
        self.sink.empty()
    }
}

fn decode(bytes: Vec<u8>, hint: Option<&str>) -> Result<Decoder<Cursor<Vec<u8>>>, SourceError> {
    let len = bytes.len() as u64;

    let mut builder = Decoder::builder()
        .with_data(Cursor::new(bytes))
        .with_byte_len(len)
        .with_coarse_seek(true)
        .with_seekable(true);

    if let Some(hint) = hint {
        builder = builder.with_hint(hint);
    }

    builder.build().map_err(|e| SourceError::Decode(e.to_string()))
}
