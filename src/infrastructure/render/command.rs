use std::process::Command;

use crate::domain::ports::renderer::{CaptureError, ScreenCapture};

/// Screen capture that delegates to an external renderer command.
///
/// The command is invoked as `<command> <url>` and must write the encoded
/// image to stdout.
pub struct CommandCapture {
    command: String,
}

impl CommandCapture {
    #[must_use]
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl ScreenCapture for CommandCapture {
    fn capture(&self, url: &str) -> Result<Vec<u8>, CaptureError> {
        let output = Command::new(&self.command)
            .arg(url)
            .output()
            .map_err(|e| CaptureError::RendererFailed(format!("failed to spawn renderer: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CaptureError::RendererFailed(format!(
                "renderer exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }
        if output.stdout.is_empty() {
            return Err(CaptureError::RendererFailed(
                "renderer produced no image data".into(),
            ));
        }
        Ok(output.stdout)
    }
}
