//! Stateless bar and baseline painters.

use ratatui::style::Color;

use super::surface::{BarRect, Surface};

/// Thinnest bar the renderer will draw, in pixels.
pub const MIN_BAR_THICKNESS: f32 = 2.0;

/// Distance kept between a bar's top edge and the mid-height baseline.
pub const MID_HEIGHT_MARGIN: f32 = 1.0;

/// Upper bound for rounded corners so tall bars keep flat sides.
pub const MAX_CORNER_RADIUS: f32 = 4.0;

/// Corner radius for a rounded bar of the given extent.
pub fn corner_radius(width: f32, height: f32) -> f32 {
    (width.min(height) / 2.0).min(MAX_CORNER_RADIUS)
}

/// Draws one bar with its top-left corner at (`x`, `y`).
///
/// A negative `h` draws upward from `y`. Bars partly or fully outside the
/// surface are clipped by the surface itself.
pub fn paint_bar<S: Surface + ?Sized>(
    surface: &mut S,
    color: Color,
    rounded: bool,
    x: f32,
    y: f32,
    h: f32,
    w: f32,
) {
    let Some(rect) = BarRect::normalized(x, y, w, h) else {
        return;
    };
    let radius = if rounded {
        corner_radius(rect.width, rect.height)
    } else {
        0.0
    };
    surface.fill_rect(rect, color, radius);
}

/// Draws the idle baseline from the horizontal center to the right edge.
pub fn paint_center_line<S: Surface + ?Sized>(
    surface: &mut S,
    color: Color,
    rounded: bool,
    width: f32,
    height: f32,
    bar_width: u32,
) {
    let x = width / 2.0;
    let Some(rect) = BarRect::normalized(
        x,
        height / 2.0 - MID_HEIGHT_MARGIN,
        width - x,
        MIN_BAR_THICKNESS,
    ) else {
        return;
    };
    let radius = if rounded {
        corner_radius(rect.width, rect.height).min(bar_width as f32 / 2.0)
    } else {
        0.0
    };
    surface.fill_rect(rect, color, radius);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::waveform::test_support::RecordingSurface;

    #[test]
    fn test_negative_height_is_normalized() {
        let mut surface = RecordingSurface::new(100.0, 40.0);
        paint_bar(&mut surface, Color::White, false, 10.0, 30.0, -8.0, 2.0);

        let fill = &surface.fills[0];
        assert_eq!(fill.rect, BarRect { x: 10.0, y: 22.0, width: 2.0, height: 8.0 });
        assert_eq!(fill.corner_radius, 0.0);
    }

    #[test]
    fn test_rounding_keeps_bounding_box() {
        let mut surface = RecordingSurface::new(100.0, 40.0);
        paint_bar(&mut surface, Color::White, true, 5.0, 4.0, 20.0, 6.0);

        let fill = &surface.fills[0];
        assert_eq!(fill.rect, BarRect { x: 5.0, y: 4.0, width: 6.0, height: 20.0 });
        assert_eq!(fill.corner_radius, 3.0);
    }

    #[test]
    fn test_zero_width_bar_draws_nothing() {
        let mut surface = RecordingSurface::new(100.0, 40.0);
        paint_bar(&mut surface, Color::White, true, 5.0, 4.0, 20.0, 0.0);
        assert!(surface.fills.is_empty());
    }

    #[test]
    fn test_center_line_spans_right_half() {
        let mut surface = RecordingSurface::new(100.0, 40.0);
        paint_center_line(&mut surface, Color::Gray, true, 100.0, 40.0, 1);

        let fill = &surface.fills[0];
        assert_eq!(fill.rect, BarRect { x: 50.0, y: 19.0, width: 50.0, height: 2.0 });
        assert_eq!(fill.corner_radius, 0.5);
        assert_eq!(fill.color, Color::Gray);
    }
}
