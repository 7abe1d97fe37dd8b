//! Every figure published on (or drafted for) the blog.

mod elevator;
mod export;
mod flight;
mod flight_path_data;

pub use export::{ExportFormat, ExportedAsset};
pub use flight::flight_path;

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::{BlogChartsConfig, ChartDefinition};
use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostStatus {
    Published,
    Draft,
}

/// Post a figure belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRef {
    pub slug: String,
    pub date: NaiveDate,
    pub status: PostStatus,
}

impl PostRef {
    fn new(slug: &str, (year, month, day): (i32, u32, u32), status: PostStatus) -> ChartResult<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            ChartError::InvalidData(format!("invalid post date {year}-{month}-{day}"))
        })?;
        Ok(Self {
            slug: slug.to_owned(),
            date,
            status,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub post: PostRef,
    pub definition: ChartDefinition,
}

type FigureFn = fn(&BlogChartsConfig) -> ChartResult<ChartDefinition>;

/// Figures keyed by element id, in publication order.
#[derive(Debug, Clone, Default)]
pub struct ChartCatalog {
    entries: IndexMap<String, CatalogEntry>,
}

impl ChartCatalog {
    /// Builds every blog figure with the given presentation settings.
    pub fn blog(config: &BlogChartsConfig) -> ChartResult<Self> {
        config.validate()?;

        let elevator = PostRef::new("the-elevator-is-slow", (2024, 4, 24), PostStatus::Published)?;
        let flight_reference =
            PostRef::new("flying-with-the-wind", (2024, 10, 12), PostStatus::Draft)?;
        let flight_horizontal =
            PostRef::new("flying-with-the-wind", (2024, 11, 17), PostStatus::Draft)?;

        let figures: [(&PostRef, FigureFn); 7] = [
            (&elevator, elevator::elevator_count),
            (&elevator, elevator::floor_latency_histogram),
            (&elevator, elevator::floor_latency_mean_max),
            (&elevator, elevator::system_parameter),
            (&elevator, elevator::system_throughput),
            (&flight_reference, flight::reference_path),
            (&flight_horizontal, flight::horizontal_distance),
        ];

        let mut catalog = Self::default();
        for (post, figure) in figures {
            catalog.insert(post.clone(), figure(config)?)?;
        }
        debug!(charts = catalog.len(), "blog chart catalog built");
        Ok(catalog)
    }

    /// Adds a figure; element ids must be unique across the catalog.
    pub fn insert(&mut self, post: PostRef, definition: ChartDefinition) -> ChartResult<()> {
        definition.validate()?;
        if self.entries.contains_key(&definition.element_id) {
            return Err(ChartError::InvalidData(format!(
                "duplicate chart element id `{}`",
                definition.element_id
            )));
        }
        self.entries
            .insert(definition.element_id.clone(), CatalogEntry { post, definition });
        Ok(())
    }

    pub fn get(&self, element_id: &str) -> ChartResult<&CatalogEntry> {
        self.entries
            .get(element_id)
            .ok_or_else(|| ChartError::UnknownChart(element_id.to_owned()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.values()
    }

    pub fn for_post<'a>(&'a self, slug: &str) -> impl Iterator<Item = &'a CatalogEntry> {
        self.iter().filter(move |entry| entry.post.slug == slug)
    }

    pub fn published(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.iter()
            .filter(|entry| entry.post.status == PostStatus::Published)
    }

    #[must_use]
    pub fn element_ids(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
