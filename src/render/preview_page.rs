use std::fmt::Write as _;

use crate::api::{BlogChartsConfig, ChartDefinition};
use crate::error::ChartResult;
use crate::render::{EchartsScriptRenderer, Renderer};

const DEFAULT_HEIGHT_PX: u32 = 400;

/// Standalone HTML page hosting `charts`, for previewing figures locally.
///
/// The GL extension script is only referenced when a 3-D chart is present.
pub fn render_preview_page<'a>(
    title: &str,
    charts: impl IntoIterator<Item = &'a ChartDefinition>,
    config: &BlogChartsConfig,
) -> ChartResult<String> {
    config.validate()?;

    let mut renderer = EchartsScriptRenderer::new(config);
    let mut surfaces = String::new();
    for chart in charts {
        renderer.render(chart)?;
        let style = match chart.size {
            Some(size) => format!("width: {}px; height: {}px;", size.width, size.height),
            None => format!("width: 100%; height: {DEFAULT_HEIGHT_PX}px;"),
        };
        let _ = writeln!(
            surfaces,
            "    <div id=\"{}\" style=\"{style}\"></div>",
            escape_html(&chart.element_id)
        );
    }

    let mut out = String::new();
    let _ = writeln!(out, "<!DOCTYPE html>");
    let _ = writeln!(out, "<html lang=\"en\">");
    let _ = writeln!(out, "  <head>");
    let _ = writeln!(out, "    <meta charset=\"utf-8\">");
    let _ = writeln!(out, "    <title>{}</title>", escape_html(title));
    let _ = writeln!(out, "    <script src=\"{}\"></script>", config.echarts_script_url);
    if renderer.uses_3d() {
        let _ = writeln!(
            out,
            "    <script src=\"{}\"></script>",
            config.echarts_gl_script_url
        );
    }
    let _ = writeln!(out, "  </head>");
    let _ = writeln!(out, "  <body>");
    out.push_str(&surfaces);
    let _ = writeln!(out, "    <script>");
    for (_, script) in renderer.scripts() {
        out.push_str(script);
    }
    let _ = writeln!(out, "    </script>");
    let _ = writeln!(out, "  </body>");
    let _ = writeln!(out, "</html>");
    Ok(out)
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::escape_html;

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_html("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
    }
}
