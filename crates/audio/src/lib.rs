//! Background music.
//!
//! The game starts music once at startup and stops it on exit. Audio is
//! optional: a missing file or audio device is logged and the game carries on
//! without sound.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};
use tracing::{info, warn};

/// Default music volume (0.0 - 1.0)
pub const DEFAULT_VOLUME: f32 = 0.5;

pub trait AudioPlayer {
    fn start(&mut self) -> Result<()>;
    fn stop(&mut self);
    fn is_playing(&self) -> bool;
}

/// Start `player`, logging instead of failing when audio is unavailable.
pub fn start_or_warn(player: &mut dyn AudioPlayer) -> bool {
    match player.start() {
        Ok(()) => true,
        Err(err) => {
            warn!("music disabled: {err:#}");
            false
        }
    }
}

/// Loops one music file through the default output device.
pub struct MusicPlayer {
    path: PathBuf,
    volume: f32,
    // The stream must outlive the sink or playback stops.
    output: Option<(OutputStream, OutputStreamHandle)>,
    sink: Option<Sink>,
}

impl MusicPlayer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            volume: DEFAULT_VOLUME,
            output: None,
            sink: None,
        }
    }

    pub fn with_volume(mut self, volume: f32) -> Self {
        self.volume = volume.clamp(0.0, 1.0);
        self
    }
}

impl AudioPlayer for MusicPlayer {
    fn start(&mut self) -> Result<()> {
        if self.is_playing() {
            return Ok(());
        }

        let file = File::open(&self.path)
            .with_context(|| format!("opening music file {}", self.path.display()))?;
        let source = Decoder::new(BufReader::new(file))
            .with_context(|| format!("decoding music file {}", self.path.display()))?
            .repeat_infinite();

        let (stream, handle) = OutputStream::try_default().context("opening audio output")?;
        let sink = Sink::try_new(&handle).context("creating audio sink")?;
        sink.set_volume(self.volume);
        sink.append(source);
        sink.play();

        info!(path = %self.path.display(), "music started");
        self.output = Some((stream, handle));
        self.sink = Some(sink);
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
        self.output = None;
    }

    fn is_playing(&self) -> bool {
        self.sink.is_some()
    }
}

/// Plays nothing. Used when music is muted or not configured.
#[derive(Debug, Default)]
pub struct SilentPlayer {
    started: bool,
}

impl SilentPlayer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AudioPlayer for SilentPlayer {
    fn start(&mut self) -> Result<()> {
        self.started = true;
        Ok(())
    }

    fn stop(&mut self) {
        self.started = false;
    }

    fn is_playing(&self) -> bool {
        self.started
    }
}
