use crate::core::grid::Grid;

/// What a renderer gets after every visible change.
pub struct FrameView<'a> {
    pub grid: &'a Grid,
    pub generation: u64,
    pub running: bool,
}

/// Render collaborator. Called once per state change, never concurrently.
pub trait RenderSink {
    fn render(&mut self, frame: &FrameView<'_>);
}

/// Headless sink.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRenderer;

impl RenderSink for NullRenderer {
    fn render(&mut self, _frame: &FrameView<'_>) {}
}
