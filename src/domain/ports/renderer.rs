use thiserror::Error;

#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("screenshot capture unsupported: {0}")]
    Unsupported(String),
    #[error("renderer failed: {0}")]
    RendererFailed(String),
}

/// Optional page-rendering collaborator for the screenshot action.
///
/// When no rendering capability is present in the environment, the action
/// reports unsupported rather than failing.
pub trait ScreenCapture: Send + Sync {
    /// Renders the page at `url` and returns the encoded image payload.
    ///
    /// # Errors
    ///
    /// Returns `CaptureError::Unsupported` when no renderer is available,
    /// `CaptureError::RendererFailed` when the renderer itself errors.
    fn capture(&self, url: &str) -> Result<Vec<u8>, CaptureError>;
}
