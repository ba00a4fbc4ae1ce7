//! Aspect-ratio classification.

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Tolerance around the canonical ratios. Generous on purpose so integer
/// rounding in common resolutions (e.g. 1920x1080) still matches.
const RATIO_TOLERANCE: f64 = 0.01;

const LANDSCAPE_RATIO: f64 = 16.0 / 9.0;
const PORTRAIT_RATIO: f64 = 9.0 / 16.0;

/// Coarse aspect-ratio bucket for a video stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Geometry {
    Landscape,
    Portrait,
    Other,
}

impl Geometry {
    /// Key prefix used in durable storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Geometry::Landscape => "landscape",
            Geometry::Portrait => "portrait",
            Geometry::Other => "other",
        }
    }
}

impl Display for Geometry {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// Classify probed stream dimensions into a geometry bucket.
pub fn classify(width: u32, height: u32) -> Geometry {
    if height == 0 {
        return Geometry::Other;
    }
    classify_ratio(width as f64 / height as f64)
}

pub fn classify_ratio(ratio: f64) -> Geometry {
    if (ratio - LANDSCAPE_RATIO).abs() < RATIO_TOLERANCE {
        Geometry::Landscape
    } else if (ratio - PORTRAIT_RATIO).abs() < RATIO_TOLERANCE {
        Geometry::Portrait
    } else {
        Geometry::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_resolutions() {
        assert_eq!(classify(1920, 1080), Geometry::Landscape);
        assert_eq!(classify(1280, 720), Geometry::Landscape);
        assert_eq!(classify(1080, 1920), Geometry::Portrait);
        assert_eq!(classify(720, 1280), Geometry::Portrait);
        assert_eq!(classify(640, 480), Geometry::Other);
        assert_eq!(classify(1000, 1000), Geometry::Other);
    }

    #[test]
    fn zero_height_is_other() {
        assert_eq!(classify(1920, 0), Geometry::Other);
    }

    #[test]
    fn landscape_boundary() {
        let base = 16.0 / 9.0;
        assert_eq!(classify_ratio(base + 0.0099), Geometry::Landscape);
        assert_eq!(classify_ratio(base - 0.0099), Geometry::Landscape);
        assert_eq!(classify_ratio(base + 0.0101), Geometry::Other);
        assert_eq!(classify_ratio(base - 0.0101), Geometry::Other);
    }

    #[test]
    fn portrait_boundary() {
        let base = 9.0 / 16.0;
        assert_eq!(classify_ratio(base + 0.0099), Geometry::Portrait);
        assert_eq!(classify_ratio(base - 0.0099), Geometry::Portrait);
        assert_eq!(classify_ratio(base + 0.0101), Geometry::Other);
        assert_eq!(classify_ratio(base - 0.0101), Geometry::Other);
    }
}
