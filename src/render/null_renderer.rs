use crate::error::ViewerResult;
use crate::render::{FrameStatus, RenderFrame, Renderer};

/// Headless renderer for tests and hosts that only need the command list.
///
/// It still validates every frame so invalid geometry surfaces in tests.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_command_count: usize,
    pub last_status: Option<FrameStatus>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ViewerResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_command_count = frame.commands.len();
        self.last_status = Some(frame.status);
        Ok(())
    }
}
