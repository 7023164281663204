use serde::{Deserialize, Serialize};

/// Fixed download filename offered for every generated image.
pub const DOWNLOAD_FILENAME: &str = "qrcode.png";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCorrection {
    Low,
    Medium,
    Quartile,
    High,
}

impl From<ErrorCorrection> for qrcode::EcLevel {
    fn from(level: ErrorCorrection) -> Self {
        match level {
            ErrorCorrection::Low => qrcode::EcLevel::L,
            ErrorCorrection::Medium => qrcode::EcLevel::M,
            ErrorCorrection::Quartile => qrcode::EcLevel::Q,
            ErrorCorrection::High => qrcode::EcLevel::H,
        }
    }
}

/// Rendering parameters passed to the encoder.
///
/// These are constructed once at startup and never change for the lifetime
/// of the process; the web UI exposes no knobs for them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderOptions {
    pub error_correction: ErrorCorrection,
    /// Final image width and height in pixels.
    pub width: u32,
    /// Quiet-zone width in modules around the symbol.
    pub margin: u32,
    /// Only meaningful for lossy output formats; PNG ignores it.
    pub quality: f32,
    /// Foreground color as a #rrggbb hex string.
    pub dark: String,
    /// Background color as a #rrggbb hex string.
    pub light: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            error_correction: ErrorCorrection::High,
            width: 320,
            margin: 1,
            quality: 0.98,
            dark: "#020617".to_string(),
            light: "#ffffff".to_string(),
        }
    }
}

/// A successfully generated QR image, ready for display and download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrArtifact {
    /// PNG image inlined as a `data:image/png;base64,...` URI.
    pub data_uri: String,
    pub filename: String,
}

impl QrArtifact {
    pub fn new(data_uri: String) -> Self {
        Self {
            data_uri,
            filename: DOWNLOAD_FILENAME.to_string(),
        }
    }
}

/// Lifecycle of the generator controller. Exactly one variant is active at
/// a time: entering `Loading` discards any prior artifact or error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratorState {
    Idle,
    Loading,
    Error(String),
    Ready(QrArtifact),
}

impl GeneratorState {
    pub fn is_loading(&self) -> bool {
        matches!(self, GeneratorState::Loading)
    }
}
