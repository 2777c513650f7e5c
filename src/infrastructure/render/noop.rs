use crate::domain::ports::renderer::{CaptureError, ScreenCapture};

/// Screen capture used when no renderer is configured: always reports
/// unsupported rather than failing.
pub struct NoopCapture;

impl NoopCapture {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for NoopCapture {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenCapture for NoopCapture {
    fn capture(&self, _url: &str) -> Result<Vec<u8>, CaptureError> {
        Err(CaptureError::Unsupported(
            "no renderer configured; use your browser's screenshot tools".into(),
        ))
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn always_reports_unsupported() {
        let capture = NoopCapture::new();
        let result = capture.capture("https://app.example.com");
        assert!(matches!(result, Err(CaptureError::Unsupported(_))));
    }
}
