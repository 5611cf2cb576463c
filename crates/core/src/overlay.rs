//! Vertical placement of mistake markers over a rendered code block.
//!
//! The math assumes every rendered line is exactly `line_height` tall. The
//! code block stylesheet must use the same leading and padding as
//! [`LineMetrics::CODE_BLOCK`], otherwise markers drift off their lines.

use thiserror::Error;

use crate::model::{LineNumber, Mistake};

#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum LineMetricsError {
    #[error("line height must be a positive, finite number (got {0})")]
    InvalidLineHeight(f32),

    #[error("top padding must be a non-negative, finite number (got {0})")]
    InvalidTopPadding(f32),
}

/// Fixed geometry of a code block, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineMetrics {
    line_height: f32,
    top_padding: f32,
}

impl LineMetrics {
    /// `leading-6` (1.5rem) lines inside `p-4` (1rem) padding at a 16px root.
    pub const CODE_BLOCK: Self = Self {
        line_height: 24.0,
        top_padding: 16.0,
    };

    /// # Errors
    ///
    /// Returns `LineMetricsError` for non-finite values, a line height that
    /// is not positive, or a negative padding.
    pub fn new(line_height: f32, top_padding: f32) -> Result<Self, LineMetricsError> {
        if !line_height.is_finite() || line_height <= 0.0 {
            return Err(LineMetricsError::InvalidLineHeight(line_height));
        }
        if !top_padding.is_finite() || top_padding < 0.0 {
            return Err(LineMetricsError::InvalidTopPadding(top_padding));
        }
        Ok(Self {
            line_height,
            top_padding,
        })
    }

    #[must_use]
    pub fn line_height(&self) -> f32 {
        self.line_height
    }

    #[must_use]
    pub fn top_padding(&self) -> f32 {
        self.top_padding
    }
}

impl Default for LineMetrics {
    fn default() -> Self {
        Self::CODE_BLOCK
    }
}

/// The screen band one marker occupies, measured from the top of the block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayBand {
    pub top: f32,
    pub height: f32,
}

impl OverlayBand {
    /// Inline style for an absolutely positioned marker.
    #[must_use]
    pub fn css(&self) -> String {
        format!("top: {}px; height: {}px;", self.top, self.height)
    }
}

/// `top = (line - 1) * line_height + top_padding`, `height = line_height`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn position(line: LineNumber, metrics: LineMetrics) -> OverlayBand {
    OverlayBand {
        top: line.index() as f32 * metrics.line_height + metrics.top_padding,
        height: metrics.line_height,
    }
}

/// A mistake paired with its band.
#[derive(Debug, Clone, PartialEq)]
pub struct MistakeMarker<'a> {
    pub mistake: &'a Mistake,
    pub band: OverlayBand,
    /// False when the mistake points past the last line; the band is still
    /// computed and lands below the visible code.
    pub within_code: bool,
}

#[must_use]
pub fn layout_markers(
    mistakes: &[Mistake],
    line_count: usize,
    metrics: LineMetrics,
) -> Vec<MistakeMarker<'_>> {
    mistakes
        .iter()
        .map(|mistake| MistakeMarker {
            mistake,
            band: position(mistake.line(), metrics),
            within_code: mistake.line().get() as usize <= line_count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MistakeId, Severity};

    fn line(n: u32) -> LineNumber {
        LineNumber::new(n).unwrap()
    }

    #[test]
    fn first_line_sits_below_padding() {
        let metrics = LineMetrics::new(24.0, 16.0).unwrap();
        assert_eq!(position(line(1), metrics), OverlayBand { top: 16.0, height: 24.0 });
    }

    #[test]
    fn fifth_line_is_four_lines_down() {
        let band = position(line(5), LineMetrics::CODE_BLOCK);
        assert_eq!(band.top, 16.0 + 4.0 * 24.0);
        assert_eq!(band.top, 112.0);
        assert_eq!(band.height, 24.0);
    }

    #[test]
    fn metrics_reject_degenerate_values() {
        assert_eq!(
            LineMetrics::new(0.0, 16.0),
            Err(LineMetricsError::InvalidLineHeight(0.0))
        );
        assert!(LineMetrics::new(f32::NAN, 16.0).is_err());
        assert_eq!(
            LineMetrics::new(24.0, -1.0),
            Err(LineMetricsError::InvalidTopPadding(-1.0))
        );
    }

    #[test]
    fn markers_past_the_end_are_positioned_but_flagged() {
        let mistakes = vec![
            Mistake::new(MistakeId::new("a"), line(2), "inside", Severity::Info),
            Mistake::new(MistakeId::new("b"), line(7), "outside", Severity::Error),
        ];
        let markers = layout_markers(&mistakes, 3, LineMetrics::CODE_BLOCK);
        assert_eq!(markers.len(), 2);
        assert!(markers[0].within_code);
        assert_eq!(markers[0].band.top, 40.0);
        assert!(!markers[1].within_code);
        assert_eq!(markers[1].band.top, 160.0);
    }

    #[test]
    fn band_css_uses_pixels() {
        let band = position(line(2), LineMetrics::CODE_BLOCK);
        assert_eq!(band.css(), "top: 40px; height: 24px;");
    }
}
