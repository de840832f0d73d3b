//! In-memory pixel surface rendered into a terminal buffer.
//!
//! Each terminal cell holds two vertically stacked pixels drawn with the upper
//! half block: the foreground colors the top pixel and the background colors
//! the bottom one.

use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

use super::surface::{BarRect, CanvasGeometry, Surface};

const HALF_BLOCK: char = '▀';

/// Pixel grid implementing [`Surface`].
#[derive(Debug, Clone)]
pub struct PixelCanvas {
    width: u16,
    height: u16,
    pixels: Vec<Color>,
}

impl PixelCanvas {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::Reset; width as usize * height as usize],
        }
    }

    /// Canvas covering a terminal area at two pixels per row.
    pub fn for_area(area: Rect) -> Self {
        Self::new(area.width, area.height.saturating_mul(2))
    }

    /// Resizes the grid, discarding its contents when the size changes.
    pub fn resize(&mut self, width: u16, height: u16) {
        if width == self.width && height == self.height {
            return;
        }
        self.width = width;
        self.height = height;
        self.pixels = vec![Color::Reset; width as usize * height as usize];
    }

    /// Resizes the grid to cover a terminal area.
    pub fn fit_area(&mut self, area: Rect) {
        self.resize(area.width, area.height.saturating_mul(2));
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Color of a single pixel, or `None` outside the grid.
    pub fn pixel(&self, x: u16, y: u16) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(self.index(x, y)).copied()
    }

    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Pixel span `[start, end)` covered by `[from, to)` after clipping to `limit`.
    fn span(from: f32, to: f32, limit: u16) -> (u16, u16) {
        let clamp = |v: f32| v.round().clamp(0.0, limit as f32) as u16;
        (clamp(from), clamp(to))
    }
}

/// Whether the pixel centered at (`cx`, `cy`) falls outside a rounded corner.
fn outside_corner(rect: &BarRect, radius: f32, cx: f32, cy: f32) -> bool {
    let dx = if cx < rect.x + radius {
        rect.x + radius - cx
    } else if cx > rect.right() - radius {
        cx - (rect.right() - radius)
    } else {
        return false;
    };
    let dy = if cy < rect.y + radius {
        rect.y + radius - cy
    } else if cy > rect.bottom() - radius {
        cy - (rect.bottom() - radius)
    } else {
        return false;
    };
    dx * dx + dy * dy > radius * radius
}

impl Surface for PixelCanvas {
    fn prepare(&mut self, background: Color) -> Option<CanvasGeometry> {
        self.pixels.fill(background);
        CanvasGeometry::new(self.width as f32, self.height as f32)
    }

    fn fill_rect(&mut self, rect: BarRect, color: Color, corner_radius: f32) {
        let (x0, x1) = Self::span(rect.x, rect.right(), self.width);
        let (y0, y1) = Self::span(rect.y, rect.bottom(), self.height);

        for y in y0..y1 {
            for x in x0..x1 {
                if corner_radius > 0.0
                    && outside_corner(&rect, corner_radius, x as f32 + 0.5, y as f32 + 0.5)
                {
                    continue;
                }
                let index = self.index(x, y);
                self.pixels[index] = color;
            }
        }
    }
}

impl Widget for &PixelCanvas {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = area.height.min(self.height.div_ceil(2));
        let cols = area.width.min(self.width);

        for row in 0..rows {
            for col in 0..cols {
                let Some(top) = self.pixel(col, row * 2) else {
                    continue;
                };
                let bottom = self.pixel(col, row * 2 + 1).unwrap_or(top);
                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    cell.set_char(HALF_BLOCK).set_fg(top).set_bg(bottom);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_fills_background() {
        let mut canvas = PixelCanvas::new(4, 4);
        let geometry = canvas.prepare(Color::Black).unwrap();

        assert_eq!(geometry.width, 4.0);
        assert_eq!(geometry.half_width, 2.0);
        assert_eq!(canvas.pixel(3, 3), Some(Color::Black));
        assert_eq!(canvas.pixel(4, 0), None);
    }

    #[test]
    fn test_zero_sized_canvas_is_unavailable() {
        let mut canvas = PixelCanvas::new(0, 10);
        assert!(canvas.prepare(Color::Black).is_none());
    }

    #[test]
    fn test_fill_clips_out_of_bounds() {
        let mut canvas = PixelCanvas::new(10, 6);
        canvas.prepare(Color::Black);
        canvas.fill_rect(
            BarRect { x: -3.0, y: 2.0, width: 5.0, height: 20.0 },
            Color::Red,
            0.0,
        );

        assert_eq!(canvas.pixel(0, 2), Some(Color::Red));
        assert_eq!(canvas.pixel(1, 5), Some(Color::Red));
        assert_eq!(canvas.pixel(2, 2), Some(Color::Black));
        assert_eq!(canvas.pixel(0, 1), Some(Color::Black));
    }

    #[test]
    fn test_rounded_fill_trims_corners() {
        let mut canvas = PixelCanvas::new(10, 10);
        canvas.prepare(Color::Black);
        canvas.fill_rect(
            BarRect { x: 0.0, y: 0.0, width: 8.0, height: 8.0 },
            Color::Red,
            4.0,
        );

        assert_eq!(canvas.pixel(0, 0), Some(Color::Black));
        assert_eq!(canvas.pixel(7, 7), Some(Color::Black));
        assert_eq!(canvas.pixel(4, 4), Some(Color::Red));
        assert_eq!(canvas.pixel(4, 0), Some(Color::Red));
    }

    #[test]
    fn test_widget_packs_two_pixels_per_cell() {
        let mut canvas = PixelCanvas::new(2, 4);
        canvas.prepare(Color::Black);
        canvas.fill_rect(
            BarRect { x: 0.0, y: 1.0, width: 1.0, height: 2.0 },
            Color::Red,
            0.0,
        );

        let area = Rect::new(0, 0, 2, 2);
        let mut buf = Buffer::empty(area);
        (&canvas).render(area, &mut buf);

        let cell = &buf[(0, 0)];
        assert_eq!(cell.symbol(), "▀");
        assert_eq!(cell.fg, Color::Black);
        assert_eq!(cell.bg, Color::Red);

        let cell = &buf[(0, 1)];
        assert_eq!(cell.fg, Color::Red);
        assert_eq!(cell.bg, Color::Black);

        assert_eq!(buf[(1, 0)].bg, Color::Black);
    }
}
