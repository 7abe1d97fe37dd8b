mod bounds_audit;
mod chart_builder;
mod chart_definition;
mod chart_option;
mod config;
mod json_contract;
mod validation;

pub use bounds_audit::{AuditedAxis, AxisBoundsFinding};
pub use chart_builder::ChartBuilder;
pub use chart_definition::{ChartDefinition, MAX_FORMATTER_DECIMALS, ValueFormatter};
pub use chart_option::{
    Axis3D, AxisKind, AxisLabel, AxisPointer, AxisPointerKind, AxisTick, CartesianAxis,
    ChartOption, Grid, Grid3D, Legend, LineStyle, NameLocation, Projection, Series, SeriesKind,
    TextStyle, Tooltip, TooltipTrigger, ViewControl,
};
pub use config::BlogChartsConfig;
pub use json_contract::{CHART_DEFINITION_JSON_SCHEMA_V1, ChartDefinitionJsonContractV1};
