use std::fmt::Write as _;

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::api::{BlogChartsConfig, ChartDefinition};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

/// Renders each chart into a self-contained JavaScript block.
///
/// Blocks are keyed by element id in render order; rendering the same id
/// twice replaces the earlier block.
#[derive(Debug, Clone)]
pub struct EchartsScriptRenderer {
    echarts_global: String,
    scripts: IndexMap<String, String>,
    uses_3d: bool,
}

impl EchartsScriptRenderer {
    #[must_use]
    pub fn new(config: &BlogChartsConfig) -> Self {
        Self {
            echarts_global: config.echarts_global.clone(),
            scripts: IndexMap::new(),
            uses_3d: false,
        }
    }

    #[must_use]
    pub fn script(&self, element_id: &str) -> Option<&str> {
        self.scripts.get(element_id).map(String::as_str)
    }

    pub fn scripts(&self) -> impl Iterator<Item = (&str, &str)> {
        self.scripts.iter().map(|(id, js)| (id.as_str(), js.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scripts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
    }

    /// Whether any rendered chart needs the ECharts-GL extension.
    #[must_use]
    pub fn uses_3d(&self) -> bool {
        self.uses_3d
    }
}

impl Renderer for EchartsScriptRenderer {
    fn render(&mut self, chart: &ChartDefinition) -> ChartResult<()> {
        chart.validate()?;
        for finding in chart.audit_axis_bounds() {
            warn!(
                element_id = %chart.element_id,
                axis = ?finding.axis,
                declared_min = ?finding.declared_min,
                declared_max = ?finding.declared_max,
                observed_min = finding.observed.min,
                observed_max = finding.observed.max,
                "data outside declared axis range"
            );
        }

        let script = render_script(chart, &self.echarts_global)?;
        self.uses_3d |= chart.option.is_3d();
        if self.scripts.insert(chart.element_id.clone(), script).is_some() {
            debug!(element_id = %chart.element_id, "replaced previously rendered chart");
        }
        Ok(())
    }
}

/// Builds the script binding `chart` to its element through `echarts_global`.
///
/// The block is wrapped in braces so several charts can share one page
/// scope. The element is assumed to exist when the script runs.
pub fn render_script(chart: &ChartDefinition, echarts_global: &str) -> ChartResult<String> {
    let element_id = serde_json::to_string(&chart.element_id).map_err(|e| {
        ChartError::InvalidData(format!("failed to encode element id: {e}"))
    })?;
    let option = chart.option_json_pretty()?.replace("</", "<\\/");

    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{{");
    let _ = writeln!(out, "  const element = document.getElementById({element_id});");
    match chart.size {
        Some(size) => {
            let _ = writeln!(
                out,
                "  const chart = {echarts_global}.init(element, null, {{ width: {}, height: {} }});",
                size.width, size.height
            );
        }
        None => {
            let _ = writeln!(out, "  const chart = {echarts_global}.init(element);");
        }
    }
    let _ = writeln!(out, "  const option = {};", indent_continuation(&option, "  "));
    if let Some(formatter) = chart.value_formatter {
        let function = formatter.to_js_function();
        if chart.option.tooltip.is_some() {
            let _ = writeln!(out, "  option.tooltip.valueFormatter = {function};");
        } else {
            let _ = writeln!(out, "  option.tooltip = {{ valueFormatter: {function} }};");
        }
    }
    let _ = writeln!(out, "  chart.setOption(option);");
    let _ = writeln!(out, "}}");

    debug!(
        element_id = %chart.element_id,
        bytes = out.len(),
        "rendered echarts script"
    );
    Ok(out)
}

fn indent_continuation(text: &str, indent: &str) -> String {
    text.lines()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                line.to_owned()
            } else {
                format!("{indent}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
