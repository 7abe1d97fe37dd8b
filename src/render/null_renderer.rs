use crate::api::ChartDefinition;
use crate::error::ChartResult;
use crate::render::Renderer;

/// No-op renderer used by tests and headless checks.
///
/// It still validates each definition so tests catch malformed charts
/// without a browser.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub rendered: usize,
    pub last_element_id: Option<String>,
    pub last_series_count: usize,
    pub last_point_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, chart: &ChartDefinition) -> ChartResult<()> {
        chart.validate()?;
        self.rendered += 1;
        self.last_element_id = Some(chart.element_id.clone());
        self.last_series_count = chart.series_count();
        self.last_point_count = chart.data_point_count();
        Ok(())
    }
}
