//! Synthetic amplitude source for the live view.
//!
//! Produces byte time-domain blocks (128 is silence) from a carrier tone shaped
//! by a slow, speech-like envelope so the waveform has something to show
//! without an input device.

use std::f32::consts::TAU;

/// Midpoint of a byte amplitude reading.
pub const SILENCE: u8 = 128;

/// Deterministic tone generator delivering fixed-size blocks.
#[derive(Debug, Clone)]
pub struct SignalSource {
    sample_rate: f32,
    frequency: f32,
    block_size: usize,
    /// Samples produced so far
    position: u64,
}

impl SignalSource {
    pub fn new(sample_rate: u32, frequency: f32, block_size: usize) -> Self {
        Self {
            sample_rate: sample_rate.max(1) as f32,
            frequency,
            block_size,
            position: 0,
        }
    }

    /// Generates the next block and advances the source.
    pub fn next_block(&mut self) -> Vec<u8> {
        let block = (0..self.block_size as u64)
            .map(|offset| {
                let t = (self.position + offset) as f32 / self.sample_rate;
                let value = envelope(t) * (TAU * self.frequency * t).sin();
                to_byte(value)
            })
            .collect();
        self.position += self.block_size as u64;
        block
    }

    /// A block of silence, used while the source is paused.
    pub fn silent_block(&self) -> Vec<u8> {
        vec![SILENCE; self.block_size]
    }

    /// Rewinds to the start of the signal.
    pub fn rewind(&mut self) {
        self.position = 0;
    }
}

/// Loudness in 0..=1: syllable-rate bursts inside slower phrases.
fn envelope(t: f32) -> f32 {
    let phrase = 0.5 * (1.0 - (TAU * 0.25 * t).cos());
    let syllable = (TAU * 2.7 * t).sin().abs();
    (phrase * (0.35 + 0.65 * syllable)).clamp(0.0, 1.0)
}

fn to_byte(value: f32) -> u8 {
    (SILENCE as f32 + value * 127.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocks_have_configured_size() {
        let mut source = SignalSource::new(16000, 220.0, 256);
        assert_eq!(source.next_block().len(), 256);
        assert_eq!(source.silent_block(), vec![SILENCE; 256]);
    }

    #[test]
    fn test_signal_starts_silent_and_swells() {
        let mut source = SignalSource::new(16000, 220.0, 512);
        let first = source.next_block();
        let first_peak = first.iter().copied().max().unwrap();
        assert!(first_peak <= SILENCE + 2);

        // Two seconds in, the phrase envelope is at its loudest
        let mut loudest = 0;
        for _ in 0..(16000 * 2 / 512) {
            loudest = loudest.max(source.next_block().into_iter().max().unwrap());
        }
        assert!(loudest > 200);
    }

    #[test]
    fn test_rewind_repeats_signal() {
        let mut source = SignalSource::new(8000, 330.0, 128);
        let first = source.next_block();
        source.next_block();
        source.rewind();
        assert_eq!(source.next_block(), first);
    }
}
