//! Per-instance host state for a live waveform session.
//!
//! Owns everything the renderer borrows on each tick (counters, the visible
//! pick buffer, the recording flags) plus the signal feeding it.

use std::time::{Duration, Instant};

use crate::config::WavetrailConfig;
use crate::waveform::{
    BarStyle, FrameInput, Pick, PositionCounters, RecordingState, Surface,
    WaveformStreamRenderer,
};

use super::source::SignalSource;

/// Live session driving a [`WaveformStreamRenderer`] once per tick.
pub struct LiveSession {
    renderer: WaveformStreamRenderer,
    source: SignalSource,
    counters: PositionCounters,
    picks: Vec<Pick>,
    style: BarStyle,
    bar_width: u32,
    unit: u32,
    is_recording: bool,
    is_paused: bool,
    /// Scroll across the whole canvas instead of the left half
    pub fullscreen: bool,
    /// Draw the transient bar for the current peak
    pub animate_current_pick: bool,
    recording_start_time: Instant,
    /// Total time paused in the current recording
    pause_duration: Duration,
    /// When the current pause started
    pause_start_time: Option<Instant>,
}

impl LiveSession {
    /// Creates a session that starts recording immediately.
    pub fn new(config: &WavetrailConfig) -> Self {
        let render = &config.render;
        let live = &config.live;
        Self {
            renderer: WaveformStreamRenderer::new(),
            source: SignalSource::new(live.sample_rate, live.signal_frequency_hz, live.block_size),
            counters: PositionCounters::default(),
            picks: Vec::new(),
            style: render.style(),
            bar_width: render.bar_width,
            unit: render.unit,
            is_recording: true,
            is_paused: false,
            fullscreen: render.fullscreen,
            animate_current_pick: render.animate_current_pick,
            recording_start_time: Instant::now(),
            pause_duration: Duration::ZERO,
            pause_start_time: None,
        }
    }

    pub fn state(&self) -> RecordingState {
        RecordingState::from_flags(self.is_recording, self.is_paused)
    }

    /// Bars committed since recording started, newest first.
    pub fn picks(&self) -> &[Pick] {
        &self.picks
    }

    /// Bars currently on screen.
    pub fn visible_bars(&self) -> usize {
        self.renderer.shadow_history().len()
    }

    /// Pauses or resumes; ignored while stopped.
    pub fn toggle_pause(&mut self) {
        if !self.is_recording {
            return;
        }
        if self.is_paused {
            if let Some(pause_start) = self.pause_start_time.take() {
                self.pause_duration += pause_start.elapsed();
            }
            self.is_paused = false;
            tracing::debug!("Recording resumed");
        } else {
            self.pause_start_time = Some(Instant::now());
            self.is_paused = true;
            tracing::debug!("Recording paused with {} picks", self.picks.len());
        }
    }

    /// Stops a running recording or starts a fresh one.
    ///
    /// Stopping leaves the pick buffer for the next tick to clear; starting
    /// rewinds the signal and scroll position.
    pub fn toggle_recording(&mut self) {
        if self.is_recording {
            tracing::info!(
                "Recording stopped after {:.1}s with {} picks",
                self.recording_duration().as_secs_f32(),
                self.picks.len()
            );
            self.is_recording = false;
            self.is_paused = false;
            self.pause_start_time = None;
        } else {
            self.renderer.reset();
            self.source.rewind();
            self.counters = PositionCounters::default();
            self.picks.clear();
            self.is_recording = true;
            self.recording_start_time = Instant::now();
            self.pause_duration = Duration::ZERO;
            tracing::info!("Recording started");
        }
    }

    pub fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
        tracing::debug!("Fullscreen: {}", self.fullscreen);
    }

    pub fn toggle_animation(&mut self) {
        self.animate_current_pick = !self.animate_current_pick;
        tracing::debug!("Live bar animation: {}", self.animate_current_pick);
    }

    /// Feeds one block to the renderer and draws onto `surface`.
    ///
    /// Paused sessions feed silence so the frozen history stays on screen;
    /// stopped sessions feed nothing.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        let samples = match self.state() {
            RecordingState::Recording => self.source.next_block(),
            RecordingState::Paused => self.source.silent_block(),
            RecordingState::Stopped => Vec::new(),
        };

        self.renderer.render(
            surface,
            FrameInput {
                samples: &samples,
                bar_width: self.bar_width,
                unit: self.unit,
                counters: &mut self.counters,
                picks: &mut self.picks,
                is_recording: self.is_recording,
                is_paused: self.is_paused,
                animate_current_pick: self.animate_current_pick,
                fullscreen: self.fullscreen,
                style: &self.style,
            },
        );
    }

    /// Elapsed recording time, excluding pauses.
    pub fn recording_duration(&self) -> Duration {
        if !self.is_recording {
            return Duration::ZERO;
        }
        let mut pause_time = self.pause_duration;
        if let Some(pause_start) = self.pause_start_time {
            pause_time += pause_start.elapsed();
        }
        self.recording_start_time.elapsed().saturating_sub(pause_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::waveform::PixelCanvas;

    fn session() -> LiveSession {
        let mut config = WavetrailConfig::default();
        config.render.bar_width = 2;
        config.render.fullscreen = true;
        config.live.block_size = 64;
        LiveSession::new(&config)
    }

    #[test]
    fn test_recording_accumulates_picks() {
        let mut session = session();
        let mut canvas = PixelCanvas::new(40, 20);
        for _ in 0..9 {
            session.tick(&mut canvas);
        }
        assert_eq!(session.state(), RecordingState::Recording);
        assert_eq!(session.picks().len(), 4);
        assert_eq!(session.visible_bars(), 4);
    }

    #[test]
    fn test_pause_keeps_history_on_screen() {
        let mut session = session();
        let mut canvas = PixelCanvas::new(40, 20);
        for _ in 0..9 {
            session.tick(&mut canvas);
        }

        session.toggle_pause();
        session.tick(&mut canvas);
        session.tick(&mut canvas);

        assert_eq!(session.state(), RecordingState::Paused);
        assert_eq!(session.picks().len(), 4);
        // Capped at 40 / 2 visible bars
        assert_eq!(session.visible_bars(), 8);
    }

    #[test]
    fn test_stop_clears_on_next_tick() {
        let mut session = session();
        let mut canvas = PixelCanvas::new(40, 20);
        for _ in 0..9 {
            session.tick(&mut canvas);
        }

        session.toggle_recording();
        assert_eq!(session.state(), RecordingState::Stopped);
        session.tick(&mut canvas);

        assert!(session.picks().is_empty());
        assert_eq!(session.visible_bars(), 0);
        assert_eq!(session.recording_duration(), Duration::ZERO);
    }

    #[test]
    fn test_pause_ignored_while_stopped() {
        let mut session = session();
        session.toggle_recording();
        session.toggle_pause();
        assert_eq!(session.state(), RecordingState::Stopped);
    }

    #[test]
    fn test_restart_begins_fresh() {
        let mut session = session();
        let mut canvas = PixelCanvas::new(40, 20);
        for _ in 0..9 {
            session.tick(&mut canvas);
        }
        session.toggle_recording();
        session.toggle_recording();

        assert_eq!(session.state(), RecordingState::Recording);
        assert!(session.picks().is_empty());
        assert_eq!(session.visible_bars(), 0);

        session.tick(&mut canvas);
        assert!(session.picks().is_empty());
    }
}
