//! Live scrolling waveform rendering.
//!
//! [`WaveformStreamRenderer`] turns a stream of per-tick amplitude blocks into a
//! left-scrolling bar chart on any [`Surface`]. [`PixelCanvas`] is the terminal
//! surface used by the live view.

pub mod canvas;
pub mod paint;
pub mod pick;
pub mod renderer;
pub mod state;
pub mod surface;

pub use canvas::PixelCanvas;
pub use pick::Pick;
pub use renderer::{BarStyle, FrameInput, PositionCounters, WaveformStreamRenderer};
pub use state::RecordingState;
pub use surface::{BarRect, CanvasGeometry, Surface};

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::style::Color;

    use super::surface::{BarRect, CanvasGeometry, Surface};

    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Fill {
        pub rect: BarRect,
        pub color: Color,
        pub corner_radius: f32,
    }

    /// Surface that records fills made since the last `prepare`.
    pub struct RecordingSurface {
        width: f32,
        height: f32,
        pub prepared: usize,
        pub fills: Vec<Fill>,
    }

    impl RecordingSurface {
        pub fn new(width: f32, height: f32) -> Self {
            Self {
                width,
                height,
                prepared: 0,
                fills: Vec::new(),
            }
        }
    }

    impl Surface for RecordingSurface {
        fn prepare(&mut self, _background: Color) -> Option<CanvasGeometry> {
            let geometry = CanvasGeometry::new(self.width, self.height)?;
            self.prepared += 1;
            self.fills.clear();
            Some(geometry)
        }

        fn fill_rect(&mut self, rect: BarRect, color: Color, corner_radius: f32) {
            self.fills.push(Fill {
                rect,
                color,
                corner_radius,
            });
        }
    }
}
