//! Audio playback: named cue sounds plus looping background music.
//!
//! `SoundBank` preloads every cue WAV at startup so a missing or broken
//! asset aborts the launch instead of failing mid-game. Playback is
//! fire-and-forget: each cue decodes a fresh source into a detached sink,
//! so a retriggered cue always restarts from the beginning.
//!
//! The [`CuePlayer`] trait is the seam the game loop talks through;
//! [`NullCues`] keeps tests and headless runs off the audio device.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};

use tui_pairs_types::{Cue, BACKGROUND_MUSIC_FILE};

/// Background track volume relative to cue volume.
const MUSIC_VOLUME: f32 = 0.4;

/// Playback port for feedback cues.
pub trait CuePlayer {
    fn play(&mut self, cue: Cue);
}

/// Cue player that does nothing. For tests and headless runs.
#[derive(Debug, Default)]
pub struct NullCues;

impl CuePlayer for NullCues {
    fn play(&mut self, _cue: Cue) {}
}

/// Preloaded cue sounds bound to the default output device.
pub struct SoundBank {
    // The stream must outlive every sink attached to its handle.
    _stream: OutputStream,
    handle: OutputStreamHandle,
    _music: Sink,
    clips: Vec<Vec<u8>>,
}

impl SoundBank {
    /// Open the default output device and load every asset from `dir`.
    ///
    /// Fails on a missing device, a missing file, or an undecodable file.
    pub fn load(dir: &Path) -> Result<Self> {
        let (stream, handle) =
            OutputStream::try_default().context("no audio output device available")?;

        let mut clips = Vec::with_capacity(Cue::ALL.len());
        for cue in Cue::ALL {
            let path = dir.join(cue.file_name());
            let bytes = fs::read(&path)
                .with_context(|| format!("missing audio asset {}", path.display()))?;
            Decoder::new(Cursor::new(bytes.clone()))
                .with_context(|| format!("unreadable audio asset {}", path.display()))?;
            clips.push(bytes);
        }

        let music_path = dir.join(BACKGROUND_MUSIC_FILE);
        let music_bytes = fs::read(&music_path)
            .with_context(|| format!("missing audio asset {}", music_path.display()))?;
        let music_source = Decoder::new(Cursor::new(music_bytes))
            .with_context(|| format!("unreadable audio asset {}", music_path.display()))?;

        let music = Sink::try_new(&handle).context("opening background music sink")?;
        music.set_volume(MUSIC_VOLUME);
        music.append(music_source.repeat_infinite());

        Ok(Self {
            _stream: stream,
            handle,
            _music: music,
            clips,
        })
    }
}

impl CuePlayer for SoundBank {
    fn play(&mut self, cue: Cue) {
        // Best-effort: a cue that cannot be mixed is dropped, never an error.
        let Ok(sink) = Sink::try_new(&self.handle) else {
            return;
        };
        let Ok(source) = Decoder::new(Cursor::new(self.clips[cue.index()].clone())) else {
            return;
        };
        sink.append(source);
        sink.detach();
    }
}
