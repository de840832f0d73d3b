//! Drawing surface abstraction used by the waveform renderer.

use ratatui::style::Color;

/// Pixel dimensions of a prepared surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasGeometry {
    pub width: f32,
    pub height: f32,
    pub half_width: f32,
}

impl CanvasGeometry {
    /// Returns `None` for a zero-sized or non-finite surface.
    pub fn new(width: f32, height: f32) -> Option<Self> {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return None;
        }
        Some(Self {
            width,
            height,
            half_width: width / 2.0,
        })
    }

    /// Width the history scrolls across: the whole canvas in fullscreen,
    /// the left half otherwise.
    pub fn visible_width(&self, fullscreen: bool) -> f32 {
        if fullscreen {
            self.width
        } else {
            self.half_width
        }
    }

    /// Number of whole bars that fit the visible width. Zero when `bar_width` is zero.
    pub fn visible_bar_count(&self, fullscreen: bool, bar_width: u32) -> usize {
        if bar_width == 0 {
            return 0;
        }
        (self.visible_width(fullscreen) / bar_width as f32).floor().max(0.0) as usize
    }
}

/// Axis-aligned rectangle with non-negative extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl BarRect {
    /// Builds a rectangle from a possibly negative width or height, flipping it
    /// so the extent grows right and down. Returns `None` for empty or
    /// non-finite rectangles.
    pub fn normalized(x: f32, y: f32, width: f32, height: f32) -> Option<Self> {
        if ![x, y, width, height].iter().all(|v| v.is_finite()) {
            return None;
        }
        let (x, width) = if width < 0.0 { (x + width, -width) } else { (x, width) };
        let (y, height) = if height < 0.0 { (y + height, -height) } else { (y, height) };
        if width == 0.0 || height == 0.0 {
            return None;
        }
        Some(Self { x, y, width, height })
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// A target the renderer can clear and fill.
///
/// Implementations clip anything that falls outside their bounds; callers are
/// free to pass rectangles with negative or oversized coordinates.
pub trait Surface {
    /// Fills the whole surface with `background` and reports its geometry.
    ///
    /// Returns `None` when there is nothing to draw on (e.g. zero-sized canvas).
    fn prepare(&mut self, background: Color) -> Option<CanvasGeometry>;

    /// Fills `rect` with `color`, trimming corners to quarter circles of
    /// `corner_radius` when it is positive.
    fn fill_rect(&mut self, rect: BarRect, color: Color, corner_radius: f32);
}
