/// Sound output.  The simulation only emits `SoundCue`s; whatever implements
/// `AudioPlayer` decides what they sound like.

use std::io::Write;

use crate::entities::SoundCue;

/// Fire-and-forget sound sink.  Nothing it does can affect the simulation.
pub trait AudioPlayer {
    /// Start the looping background track.  Called once per session.
    fn start_music(&mut self);
    fn play(&mut self, cue: SoundCue);
}

/// Terminal "audio": rings the bell on explosions.  Shots are only logged.
pub struct BellAudio<W: Write> {
    out: W,
    muted: bool,
}

impl<W: Write> BellAudio<W> {
    pub fn new(out: W, muted: bool) -> Self {
        BellAudio { out, muted }
    }
}

impl<W: Write> AudioPlayer for BellAudio<W> {
    fn start_music(&mut self) {
        log::debug!("background track started (terminal has no music)");
    }

    fn play(&mut self, cue: SoundCue) {
        log::debug!("sound cue: {:?}", cue);
        if self.muted || cue != SoundCue::Explosion {
            return;
        }
        if let Err(err) = self.out.write_all(b"\x07").and_then(|_| self.out.flush()) {
            log::warn!("terminal bell failed: {}", err);
        }
    }
}

/// Collects cues instead of playing them.
#[derive(Debug, Default)]
pub struct RecordingAudio {
    pub music_started: bool,
    pub played: Vec<SoundCue>,
}

impl AudioPlayer for RecordingAudio {
    fn start_music(&mut self) {
        self.music_started = true;
    }

    fn play(&mut self, cue: SoundCue) {
        self.played.push(cue);
    }
}
