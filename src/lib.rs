//! blog-charts: typed chart definitions for blog figures.
//!
//! Each figure is a literal data table plus a declarative option object that
//! is handed to ECharts in the browser. The crate keeps the data and the
//! configuration typed, validated and serializable; the charting library
//! owns layout, projection and drawing.

pub mod api;
pub mod catalog;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{BlogChartsConfig, ChartBuilder, ChartDefinition, ChartOption};
pub use catalog::ChartCatalog;
pub use error::{ChartError, ChartResult};
