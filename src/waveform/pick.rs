//! Bar geometry derived from a block's peak amplitude.

/// Full-scale value of a byte amplitude reading. Slightly above `u8::MAX` so a
/// clipped peak never reaches the canvas edge exactly.
pub const AMPLITUDE_SCALE: f32 = 258.0;

/// One rendered waveform bar, stored as percentages of the canvas height so
/// history survives canvas resizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pick {
    /// Offset of the bar's top edge from the top of the canvas (0-100)
    pub start_y: f32,
    /// Bar height as a percentage of canvas height; negative for peaks below
    /// the silence level until the painter clamps it
    pub bar_height: f32,
}

impl Pick {
    /// Maps a peak amplitude into a band centered on mid-height.
    pub fn from_peak(peak: u8) -> Self {
        let level = normalized_level(peak);
        Self {
            start_y: (1.0 - level) * 100.0,
            bar_height: (2.0 * level - 1.0) * 100.0,
        }
    }
}

/// Peak as a fraction of [`AMPLITUDE_SCALE`].
pub fn normalized_level(peak: u8) -> f32 {
    peak as f32 / AMPLITUDE_SCALE
}

/// Largest reading in a sample block, or `None` for an empty block.
pub fn peak_of(samples: &[u8]) -> Option<u8> {
    samples.iter().copied().max()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_silence_maps_to_mid_height() {
        let pick = Pick::from_peak(129);
        assert_relative_eq!(pick.start_y, 50.0, epsilon = 1e-4);
        assert_relative_eq!(pick.bar_height, 0.0, epsilon = 1e-4);
    }

    #[test]
    fn test_loud_peak_spans_band() {
        let pick = Pick::from_peak(255);
        assert!(pick.start_y < 2.0);
        assert!(pick.bar_height > 96.0);
        // Top and bottom stay symmetric around the middle
        assert_relative_eq!(pick.start_y * 2.0 + pick.bar_height, 100.0, epsilon = 1e-3);
    }

    #[test]
    fn test_quiet_peak_has_negative_height() {
        let pick = Pick::from_peak(100);
        assert!(pick.bar_height < 0.0);
        assert!(pick.start_y > 50.0);
    }

    #[test]
    fn test_peak_of() {
        assert_eq!(peak_of(&[]), None);
        assert_eq!(peak_of(&[3, 200, 17]), Some(200));
    }
}
