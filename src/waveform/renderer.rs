//! Scrolling waveform renderer driven once per animation tick.
//!
//! The renderer owns the width-bounded history it draws from and a one-shot
//! snapshot of the host's picks taken when a pause begins. The host owns the
//! positional counters and its own pick buffer and lends them for each call.

use std::collections::VecDeque;

use ratatui::style::Color;

use super::paint::{paint_bar, paint_center_line, MID_HEIGHT_MARGIN, MIN_BAR_THICKNESS};
use super::pick::{normalized_level, peak_of, Pick};
use super::state::RecordingState;
use super::surface::{CanvasGeometry, Surface};

/// Colors and shape of the rendered bars.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarStyle {
    pub background: Color,
    /// Bar color while recording, also used for the live bar
    pub main_bar_color: Color,
    /// Bar color while paused, also used for the baseline
    pub secondary_bar_color: Color,
    pub rounded: bool,
}

/// Scroll position shared across ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PositionCounters {
    /// Sub-bar pixel offset; wraps to 0 each time a bar is emitted
    pub column: u32,
    /// Scroll-unit position; advances by one bar width per emitted bar
    pub unit: u32,
}

/// Everything one tick needs.
pub struct FrameInput<'a> {
    /// Byte amplitude readings for this tick (128 is silence)
    pub samples: &'a [u8],
    pub bar_width: u32,
    /// Threshold at which the unit counter wraps
    pub unit: u32,
    pub counters: &'a mut PositionCounters,
    /// Host-visible history, newest first
    pub picks: &'a mut Vec<Pick>,
    pub is_recording: bool,
    pub is_paused: bool,
    pub animate_current_pick: bool,
    pub fullscreen: bool,
    pub style: &'a BarStyle,
}

/// Stateful renderer for a live, left-scrolling bar waveform.
#[derive(Debug, Default)]
pub struct WaveformStreamRenderer {
    /// Everything currently drawn, newest first, including picks carried
    /// across pauses
    all_picks: VecDeque<Pick>,
    /// Host picks captured at pause onset
    paused_snapshot: Vec<Pick>,
    warned_zero_bar_width: bool,
}

impl WaveformStreamRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// History drawn on the next tick, newest first.
    pub fn shadow_history(&self) -> &VecDeque<Pick> {
        &self.all_picks
    }

    /// Picks captured when the current pause began; empty outside a pause.
    pub fn paused_snapshot(&self) -> &[Pick] {
        &self.paused_snapshot
    }

    /// Drops all internal history without drawing.
    pub fn reset(&mut self) {
        self.all_picks.clear();
        self.paused_snapshot.clear();
    }

    /// Advances history for one tick and draws it onto `surface`.
    ///
    /// Never fails: an unavailable surface, an empty sample block or a
    /// degenerate bar width each skip the remaining work for this tick.
    pub fn render<S: Surface + ?Sized>(&mut self, surface: &mut S, input: FrameInput<'_>) {
        let FrameInput {
            samples,
            bar_width,
            unit,
            counters,
            picks,
            is_recording,
            is_paused,
            animate_current_pick,
            fullscreen,
            style,
        } = input;

        let Some(geometry) = surface.prepare(style.background) else {
            return;
        };
        let max_picks = geometry.visible_bar_count(fullscreen, bar_width);
        let state = RecordingState::from_flags(is_recording, is_paused);

        match state {
            RecordingState::Stopped => {
                if !picks.is_empty() || !self.all_picks.is_empty() {
                    tracing::debug!(
                        "Recording stopped: clearing {} picks and {} drawn bars",
                        picks.len(),
                        self.all_picks.len()
                    );
                }
                self.reset();
                picks.clear();
                return;
            }
            RecordingState::Paused => self.capture_pause_snapshot(picks),
            RecordingState::Recording => self.paused_snapshot.clear(),
        }
        // The visible width can shrink between ticks (resize, leaving fullscreen)
        self.all_picks.truncate(max_picks);

        if bar_width == 0 {
            if !self.warned_zero_bar_width {
                tracing::warn!("Bar width is zero; waveform will not be drawn");
                self.warned_zero_bar_width = true;
            }
            return;
        }

        let Some(peak) = peak_of(samples) else {
            return;
        };

        if state == RecordingState::Recording {
            self.advance(peak, bar_width, unit, counters, picks, max_picks);
        }

        if !fullscreen {
            paint_center_line(
                surface,
                style.secondary_bar_color,
                style.rounded,
                geometry.width,
                geometry.height,
                bar_width,
            );
        }

        let color = if state.is_paused() {
            style.secondary_bar_color
        } else {
            style.main_bar_color
        };
        self.draw_history(
            surface,
            &geometry,
            fullscreen,
            bar_width,
            counters.column,
            color,
            style.rounded,
        );

        if animate_current_pick && state == RecordingState::Recording {
            let height = geometry.height;
            let level = normalized_level(peak);
            paint_bar(
                surface,
                style.main_bar_color,
                style.rounded,
                geometry.visible_width(fullscreen),
                height - level * height,
                -height + level * height * 2.0,
                bar_width as f32,
            );
        }
    }

    /// Seeds the drawn history with the host's picks once per pause episode.
    fn capture_pause_snapshot(&mut self, picks: &[Pick]) {
        if picks.is_empty() || !self.paused_snapshot.is_empty() {
            return;
        }
        self.paused_snapshot = picks.to_vec();
        for pick in picks.iter().rev() {
            self.all_picks.push_front(*pick);
        }
        tracing::debug!(
            "Pause captured {} picks; {} bars queued",
            self.paused_snapshot.len(),
            self.all_picks.len()
        );
    }

    /// Moves the scroll position one pixel, emitting a bar every `bar_width` pixels.
    fn advance(
        &mut self,
        peak: u8,
        bar_width: u32,
        unit: u32,
        counters: &mut PositionCounters,
        picks: &mut Vec<Pick>,
        max_picks: usize,
    ) {
        if counters.column >= bar_width {
            counters.column = 0;

            let pick = Pick::from_peak(peak);
            counters.unit = if counters.unit >= unit {
                bar_width
            } else {
                counters.unit.saturating_add(bar_width)
            };

            picks.insert(0, pick);
            self.all_picks.push_front(pick);
            self.all_picks.truncate(max_picks);
        }

        counters.column = counters.column.saturating_add(1);
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_history<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        geometry: &CanvasGeometry,
        fullscreen: bool,
        bar_width: u32,
        column: u32,
        color: Color,
        rounded: bool,
    ) {
        if self.all_picks.is_empty() {
            return;
        }

        let height = geometry.height;
        let width = bar_width as f32;
        let origin_x = geometry.visible_width(fullscreen) - (column % bar_width) as f32;
        let ceiling = height / 2.0 - MID_HEIGHT_MARGIN;

        for (index, pick) in self.all_picks.iter().enumerate() {
            let x = origin_x - index as f32 * width;
            let y = (pick.start_y * height / 100.0).min(ceiling);
            let h = (pick.bar_height * height / 100.0).max(MIN_BAR_THICKNESS);
            paint_bar(surface, color, rounded, x, y, h, width);
        }
    }
}
