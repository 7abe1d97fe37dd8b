use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::TextStyle;

/// Shared presentation and export settings.
///
/// Serializable so the export tool can load overrides from a JSON file; every
/// field has a default matching the published figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogChartsConfig {
    #[serde(default = "default_font_family")]
    pub font_family: String,
    #[serde(default = "default_font_size")]
    pub font_size: u32,
    /// Global name the charting library is reachable under in the page.
    #[serde(default = "default_echarts_global")]
    pub echarts_global: String,
    #[serde(default = "default_echarts_script_url")]
    pub echarts_script_url: String,
    #[serde(default = "default_echarts_gl_script_url")]
    pub echarts_gl_script_url: String,
    #[serde(default)]
    pub include_drafts: bool,
}

impl Default for BlogChartsConfig {
    fn default() -> Self {
        Self {
            font_family: default_font_family(),
            font_size: default_font_size(),
            echarts_global: default_echarts_global(),
            echarts_script_url: default_echarts_script_url(),
            echarts_gl_script_url: default_echarts_gl_script_url(),
            include_drafts: false,
        }
    }
}

impl BlogChartsConfig {
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::Config(format!("failed to parse config json: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.font_family.trim().is_empty() {
            return Err(ChartError::Config("font_family must not be empty".to_owned()));
        }
        if self.font_size == 0 || self.font_size > 96 {
            return Err(ChartError::Config(
                "font_size must be between 1 and 96".to_owned(),
            ));
        }
        if !is_js_identifier(&self.echarts_global) {
            return Err(ChartError::Config(format!(
                "echarts_global `{}` is not a JavaScript identifier",
                self.echarts_global
            )));
        }
        for url in [&self.echarts_script_url, &self.echarts_gl_script_url] {
            if url.is_empty() || url.contains('"') || url.contains('<') {
                return Err(ChartError::Config(format!("invalid script url `{url}`")));
            }
        }
        Ok(())
    }

    /// Text style shared by titles, labels and tooltips.
    #[must_use]
    pub fn text_style(&self) -> TextStyle {
        TextStyle::new(self.font_family.clone(), self.font_size)
    }
}

fn is_js_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_' || first == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

fn default_font_family() -> String {
    "Roboto".to_owned()
}

fn default_font_size() -> u32 {
    16
}

fn default_echarts_global() -> String {
    "echarts".to_owned()
}

fn default_echarts_script_url() -> String {
    "https://cdn.jsdelivr.net/npm/echarts@5/dist/echarts.min.js".to_owned()
}

fn default_echarts_gl_script_url() -> String {
    "https://cdn.jsdelivr.net/npm/echarts-gl@2/dist/echarts-gl.min.js".to_owned()
}

#[cfg(test)]
mod tests {
    use super::is_js_identifier;

    #[test]
    fn js_identifier_rules() {
        assert!(is_js_identifier("echarts"));
        assert!(is_js_identifier("$lib_2"));
        assert!(!is_js_identifier("2lib"));
        assert!(!is_js_identifier("window.echarts"));
        assert!(!is_js_identifier(""));
    }
}
