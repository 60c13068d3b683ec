use serde::{Deserialize, Serialize};

/// Detector speed/quality trade-off.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PerformanceMode {
    Fast,
    Accurate,
}

impl std::fmt::Display for PerformanceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PerformanceMode::Fast => write!(f, "fast"),
            PerformanceMode::Accurate => write!(f, "accurate"),
        }
    }
}

/// Whether the detector classifies facial attributes (eyes open, smiling).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassificationMode {
    None,
    All,
}

impl std::fmt::Display for ClassificationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClassificationMode::None => write!(f, "none"),
            ClassificationMode::All => write!(f, "all"),
        }
    }
}

/// Options handed to the external detector at mount time.
///
/// The tracking core never reads these back; with `auto_scale` enabled the
/// detector uses the window dimensions to report bounds already scaled to
/// overlay coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectorConfig {
    pub performance_mode: PerformanceMode,
    pub classification_mode: ClassificationMode,
    pub window_width: f64,
    pub window_height: f64,
    pub auto_scale: bool,
}

impl DetectorConfig {
    /// Default options for a window of the given size: fast detection,
    /// full classification, detector-side scaling.
    pub fn for_window(width: f64, height: f64) -> Self {
        Self {
            performance_mode: PerformanceMode::Fast,
            classification_mode: ClassificationMode::All,
            window_width: width,
            window_height: height,
            auto_scale: true,
        }
    }
}
