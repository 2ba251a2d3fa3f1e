//! Sound effects for gameplay events.
//!
//! Short synthesized beeps, one per session event kind. The output device is
//! optional: construction can fail (headless boxes, missing ALSA), and the
//! game runs silently in that case.

use std::time::Duration;

use rodio::source::{SineWave, Source};
use rodio::{OutputStream, OutputStreamHandle, Sink};

/// Which sound to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// The player flapped.
    Jump,
    /// An obstacle was cleared.
    Score,
    /// The run ended.
    Hit,
}

impl Cue {
    /// Frequency in Hz and duration in ms of the beep.
    fn params(self) -> (f32, u64) {
        match self {
            Cue::Jump => (660.0, 60),
            Cue::Score => (880.0, 90),
            Cue::Hit => (180.0, 250),
        }
    }
}

pub struct Audio {
    // Dropping the stream kills all playback, so it rides along.
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

impl Audio {
    /// Open the default output device. Returns an error when no device is
    /// available; callers typically downgrade that to silence with `.ok()`.
    pub fn new() -> Result<Self, rodio::StreamError> {
        let (stream, handle) = OutputStream::try_default()?;
        Ok(Self {
            _stream: stream,
            handle,
        })
    }

    /// Fire-and-forget playback; any device error just drops the cue.
    pub fn play(&self, cue: Cue) {
        let (freq, millis) = cue.params();
        let source = SineWave::new(freq)
            .take_duration(Duration::from_millis(millis))
            .amplify(0.20);
        if let Ok(sink) = Sink::try_new(&self.handle) {
            sink.append(source);
            sink.detach();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cue_params_are_distinct() {
        let cues = [Cue::Jump, Cue::Score, Cue::Hit];
        for (i, a) in cues.iter().enumerate() {
            for b in &cues[i + 1..] {
                assert_ne!(a.params(), b.params());
            }
        }
    }

    #[test]
    fn test_hit_is_the_longest_cue() {
        let (_, jump) = Cue::Jump.params();
        let (_, score) = Cue::Score.params();
        let (_, hit) = Cue::Hit.params();
        assert!(hit > jump);
        assert!(hit > score);
    }
}
