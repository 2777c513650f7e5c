use std::path::Path;

use colored::Colorize;

use crate::domain::ports::renderer::{CaptureError, ScreenCapture};

/// Takes a screenshot of the page through the configured renderer and
/// writes it to `output`. An absent renderer is reported as unsupported,
/// not as a failure.
pub fn run_capture(
    renderer: &dyn ScreenCapture,
    url: &str,
    output: &Path,
) -> anyhow::Result<()> {
    match renderer.capture(url) {
        Ok(bytes) => {
            std::fs::write(output, bytes)?;
            println!(
                "{}",
                format!("Screenshot saved to {}", output.display()).green()
            );
            Ok(())
        }
        Err(CaptureError::Unsupported(reason)) => {
            println!("{}", format!("Screenshot unsupported: {reason}").yellow());
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
