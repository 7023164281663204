use std::sync::Arc;
use tracing::{debug, error, warn};

use crate::core::error::AppResult;
use crate::core::models::{GeneratorState, QrArtifact, RenderOptions};
use crate::utils::validate::is_valid_url;

/// Shown when the form is submitted with no input at all.
pub const MSG_EMPTY_INPUT: &str = "Please enter a URL.";
/// Shown when the input is present but not an absolute URL.
pub const MSG_INVALID_URL: &str = "Please enter a valid URL (e.g., https://example.com).";
/// Shown when the encoder fails; the underlying error is only logged.
pub const MSG_GENERATION_FAILED: &str = "Failed to generate QR code. Please try again.";

/// The encoding capability behind the generator. Implementations must be
/// deterministic for a given (text, options) pair.
#[cfg_attr(test, mockall::automock)]
pub trait QrEncoder: Send + Sync {
    /// Encode `text` as a QR symbol and return it as a PNG data URI.
    fn encode(&self, text: &str, options: &RenderOptions) -> AppResult<String>;
}

/// Drives the validate-then-encode flow and owns the lifecycle state.
///
/// The controller moves through Idle -> Loading -> Ready/Error; Ready and
/// Error never coexist, and every path out of Loading is covered.
pub struct Generator {
    encoder: Arc<dyn QrEncoder>,
    options: RenderOptions,
    state: GeneratorState,
}

impl Generator {
    pub fn new(encoder: Arc<dyn QrEncoder>, options: RenderOptions) -> Self {
        Self {
            encoder,
            options,
            state: GeneratorState::Idle,
        }
    }

    pub fn state(&self) -> &GeneratorState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Validate `raw_input` and, if it passes, encode it with the fixed
    /// render options. Returns the settled state.
    ///
    /// A call arriving while a previous one is still loading is a no-op;
    /// failures are terminal for the submission (no retry).
    pub async fn generate(&mut self, raw_input: &str) -> &GeneratorState {
        if self.is_loading() {
            warn!("Generation already in progress, ignoring submission");
            return &self.state;
        }

        if raw_input.is_empty() {
            self.state = GeneratorState::Error(MSG_EMPTY_INPUT.to_string());
            return &self.state;
        }

        if !is_valid_url(raw_input) {
            debug!("Rejected malformed URL input");
            self.state = GeneratorState::Error(MSG_INVALID_URL.to_string());
            return &self.state;
        }

        // Clears any prior artifact or error before the encoder runs.
        self.state = GeneratorState::Loading;

        let encoder = Arc::clone(&self.encoder);
        let text = raw_input.to_string();
        let options = self.options.clone();

        // Rasterization is CPU-bound; keep it off the async runtime.
        let outcome =
            tokio::task::spawn_blocking(move || encoder.encode(&text, &options)).await;

        self.state = match outcome {
            Ok(Ok(data_uri)) => GeneratorState::Ready(QrArtifact::new(data_uri)),
            Ok(Err(e)) => {
                error!("QR encoding failed: {}", e);
                GeneratorState::Error(MSG_GENERATION_FAILED.to_string())
            }
            Err(e) => {
                error!("QR encoding task panicked: {}", e);
                GeneratorState::Error(MSG_GENERATION_FAILED.to_string())
            }
        };

        &self.state
    }
}
