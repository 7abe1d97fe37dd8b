mod echarts_script;
mod null_renderer;
mod preview_page;

pub use echarts_script::{EchartsScriptRenderer, render_script};
pub use null_renderer::NullRenderer;
pub use preview_page::render_preview_page;

use crate::api::ChartDefinition;
use crate::error::ChartResult;

/// Contract implemented by every rendering hand-off.
///
/// Implementations receive a complete chart definition; the external
/// charting library owns layout, projection and drawing.
pub trait Renderer {
    fn render(&mut self, chart: &ChartDefinition) -> ChartResult<()>;
}
