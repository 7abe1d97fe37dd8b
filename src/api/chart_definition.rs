use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::ChartResult;

use super::ChartOption;

/// Highest `toFixed` precision accepted for tooltip values.
pub const MAX_FORMATTER_DECIMALS: u8 = 20;

/// Tooltip value formatting applied by the charting library.
///
/// The library takes a callback here, which JSON cannot carry, so the
/// formatter travels as data and renderers emit the callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueFormatter {
    FixedDecimals { decimals: u8 },
}

impl ValueFormatter {
    #[must_use]
    pub fn fixed(decimals: u8) -> Self {
        Self::FixedDecimals { decimals }
    }

    /// JavaScript arrow function equivalent to this formatter.
    #[must_use]
    pub fn to_js_function(self) -> String {
        match self {
            Self::FixedDecimals { decimals } => format!("(value) => value.toFixed({decimals})"),
        }
    }
}

/// A chart option bound to the display surface it is drawn into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDefinition {
    /// DOM id of the element hosting the chart.
    pub element_id: String,
    /// Fixed pixel size; `None` lets the library size from the element.
    #[serde(default)]
    pub size: Option<Viewport>,
    #[serde(default)]
    pub value_formatter: Option<ValueFormatter>,
    pub option: ChartOption,
}

impl ChartDefinition {
    /// Validates structure and data of the definition.
    pub fn validate(&self) -> ChartResult<()> {
        super::validation::validate_definition(self)
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.option.series.len()
    }

    #[must_use]
    pub fn data_point_count(&self) -> usize {
        self.option.series.iter().map(|s| s.data.len()).sum()
    }
}
