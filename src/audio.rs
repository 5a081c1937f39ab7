//! Audio cue dispatcher
//!
//! Procedurally generated square-wave tones - no external files needed.
//! Each cue is synthesized once at startup and played fire-and-forget on a
//! fresh detached sink, so overlapping triggers mix naturally. A missing
//! output device degrades to silence; the simulation never depends on
//! audio availability.

use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, OutputStreamHandle, Sink};

/// Mixer sample rate (Hz, mono)
pub const SAMPLE_RATE: u32 = 22_050;

/// Food consumed
const TONE_EAT_HZ: f32 = 880.0;
const TONE_EAT_SECS: f32 = 0.08;
/// Wall or self collision
const TONE_DEATH_HZ: f32 = 110.0;
const TONE_DEATH_SECS: f32 = 0.20;

const AMPLITUDE: f32 = 0.4;

/// Audio cue types, emitted by the rule step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Snake consumed the food cell
    Eat,
    /// Snake hit a wall or itself
    Death,
}

/// Audio manager owning the output stream and the precomputed waveforms
pub struct AudioManager {
    // The stream must stay alive for the handle to keep playing
    output: Option<(OutputStream, OutputStreamHandle)>,
    eat: Vec<f32>,
    death: Vec<f32>,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        let output = match OutputStream::try_default() {
            Ok(pair) => Some(pair),
            Err(err) => {
                log::warn!("no audio output device, cues disabled: {err}");
                None
            }
        };
        Self {
            output,
            eat: synth_square(TONE_EAT_HZ, TONE_EAT_SECS),
            death: synth_square(TONE_DEATH_HZ, TONE_DEATH_SECS),
        }
    }

    /// Play a cue; returns immediately, overlapping cues play concurrently.
    pub fn play(&self, cue: Cue) {
        let Some((_, handle)) = &self.output else {
            return;
        };
        let samples = match cue {
            Cue::Eat => &self.eat,
            Cue::Death => &self.death,
        };
        if let Ok(sink) = Sink::try_new(handle) {
            sink.append(SamplesBuffer::new(1, SAMPLE_RATE, samples.clone()));
            sink.detach();
        }
    }
}

/// Synthesize a full-duty square wave at the given frequency
fn synth_square(freq_hz: f32, dur_secs: f32) -> Vec<f32> {
    use std::f32::consts::TAU;
    let len = (SAMPLE_RATE as f32 * dur_secs) as usize;
    (0..len)
        .map(|i| {
            let t = i as f32 / SAMPLE_RATE as f32;
            (TAU * freq_hz * t).sin().signum() * AMPLITUDE
        })
        .collect()
}
