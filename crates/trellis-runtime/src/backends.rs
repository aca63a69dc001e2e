// crates/trellis-runtime/src/backends.rs

use glam::Vec4;
use tracing::trace;
use trellis_render::{DrawCommand, RenderBackend, RenderError, RenderResult};

/// Headless backend: counts frames and commands, logs them at trace level.
///
/// Stands in for a real presentation backend in tests and headless drivers;
/// frame bracketing is still enforced so misuse surfaces the same way it
/// would against a real surface.
#[derive(Debug, Default)]
pub struct TraceBackend {
    frames: u64,
    commands_executed: u64,
    in_frame: bool,
}

impl TraceBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Completed frames.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Commands executed across all frames.
    pub fn commands_executed(&self) -> u64 {
        self.commands_executed
    }
}

impl RenderBackend for TraceBackend {
    fn begin_frame(&mut self, clear_color: Vec4) -> RenderResult<()> {
        if self.in_frame {
            return Err(RenderError::PresentFailed(
                "frame already in progress".into(),
            ));
        }
        self.in_frame = true;
        trace!("frame {} begin, clear={:?}", self.frames, clear_color);
        Ok(())
    }

    fn execute(&mut self, commands: &[DrawCommand]) -> RenderResult<()> {
        if !self.in_frame {
            return Err(RenderError::PresentFailed("execute outside frame".into()));
        }
        for command in commands {
            trace!("execute {:?}", command);
        }
        self.commands_executed += commands.len() as u64;
        Ok(())
    }

    fn end_frame(&mut self) -> RenderResult<()> {
        if !self.in_frame {
            return Err(RenderError::PresentFailed("end without begin".into()));
        }
        self.in_frame = false;
        self.frames += 1;
        Ok(())
    }
}
