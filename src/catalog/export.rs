use tracing::debug;

use crate::api::BlogChartsConfig;
use crate::error::{ChartError, ChartResult};
use crate::render::{EchartsScriptRenderer, Renderer, render_preview_page};

use super::{CatalogEntry, ChartCatalog, PostStatus};

const PREVIEW_FILE_NAME: &str = "index.html";
const DEFAULT_PREVIEW_TITLE: &str = "Blog charts";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// One `<element-id>.js` hand-off script per chart.
    Script,
    /// One `<element-id>.json` v1 contract per chart, formatter included.
    Json,
    /// A single `index.html` preview hosting every selected chart.
    Html,
}

impl ExportFormat {
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "js" => Some(Self::Script),
            "json" => Some(Self::Json),
            "html" => Some(Self::Html),
            _ => None,
        }
    }
}

/// File produced by an export, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedAsset {
    pub file_name: String,
    pub contents: String,
}

impl ChartCatalog {
    /// Charts to export: published ones, plus drafts when asked, optionally
    /// limited to one post. An empty selection is an error.
    pub fn select(
        &self,
        include_drafts: bool,
        post: Option<&str>,
    ) -> ChartResult<Vec<&CatalogEntry>> {
        let selected: Vec<&CatalogEntry> = match post {
            Some(slug) => self
                .for_post(slug)
                .filter(|entry| include_drafts || entry.post.status == PostStatus::Published)
                .collect(),
            None if include_drafts => self.iter().collect(),
            None => self.published().collect(),
        };

        if selected.is_empty() {
            return Err(ChartError::InvalidData(format!(
                "no charts match the selection (post: {}, drafts: {include_drafts})",
                post.unwrap_or("any")
            )));
        }
        Ok(selected)
    }

    /// Renders the selected charts into files named after their element ids.
    pub fn export(
        &self,
        format: ExportFormat,
        config: &BlogChartsConfig,
        post: Option<&str>,
    ) -> ChartResult<Vec<ExportedAsset>> {
        let selected = self.select(config.include_drafts, post)?;

        let assets = match format {
            ExportFormat::Script => {
                let mut renderer = EchartsScriptRenderer::new(config);
                for entry in &selected {
                    renderer.render(&entry.definition)?;
                }
                renderer
                    .scripts()
                    .map(|(element_id, script)| ExportedAsset {
                        file_name: format!("{element_id}.js"),
                        contents: script.to_owned(),
                    })
                    .collect()
            }
            ExportFormat::Json => selected
                .iter()
                .map(|entry| -> ChartResult<ExportedAsset> {
                    Ok(ExportedAsset {
                        file_name: format!("{}.json", entry.definition.element_id),
                        contents: entry.definition.to_json_contract_v1_pretty()?,
                    })
                })
                .collect::<ChartResult<Vec<_>>>()?,
            ExportFormat::Html => {
                let page = render_preview_page(
                    post.unwrap_or(DEFAULT_PREVIEW_TITLE),
                    selected.iter().map(|entry| &entry.definition),
                    config,
                )?;
                vec![ExportedAsset {
                    file_name: PREVIEW_FILE_NAME.to_owned(),
                    contents: page,
                }]
            }
        };

        debug!(?format, charts = selected.len(), files = assets.len(), "catalog exported");
        Ok(assets)
    }
}
