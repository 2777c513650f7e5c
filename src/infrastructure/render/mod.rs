pub mod command;
pub mod noop;

use crate::application::config::RendererConfig;
use crate::domain::ports::renderer::ScreenCapture;

use self::command::CommandCapture;
use self::noop::NoopCapture;

/// Create the screen-capture implementation for the configured renderer.
///
/// Returns [`NoopCapture`] when no renderer command is set, so the
/// screenshot action reports unsupported instead of failing.
#[must_use]
pub fn create_screen_capture(config: &RendererConfig) -> Box<dyn ScreenCapture> {
    match &config.command {
        Some(command) if !command.trim().is_empty() => {
            Box::new(CommandCapture::new(command.clone()))
        }
        _ => Box::new(NoopCapture::new()),
    }
}
