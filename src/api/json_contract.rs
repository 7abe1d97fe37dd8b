use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::ChartDefinition;

pub const CHART_DEFINITION_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDefinitionJsonContractV1 {
    pub schema_version: u32,
    pub definition: ChartDefinition,
}

impl ChartDefinition {
    /// Option object only, exactly as passed to the library's `setOption`.
    pub fn option_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.option).map_err(|e| {
            ChartError::InvalidData(format!(
                "failed to serialize option for `{}`: {e}",
                self.element_id
            ))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartDefinitionJsonContractV1 {
            schema_version: CHART_DEFINITION_JSON_SCHEMA_V1,
            definition: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize definition contract v1: {e}"))
        })
    }

    /// Accepts a bare definition or a versioned envelope.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        let definition = if let Ok(definition) = serde_json::from_str::<ChartDefinition>(input) {
            definition
        } else {
            let payload: ChartDefinitionJsonContractV1 =
                serde_json::from_str(input).map_err(|e| {
                    ChartError::InvalidData(format!("failed to parse definition json payload: {e}"))
                })?;
            if payload.schema_version != CHART_DEFINITION_JSON_SCHEMA_V1 {
                return Err(ChartError::InvalidData(format!(
                    "unsupported definition schema version: {}",
                    payload.schema_version
                )));
            }
            payload.definition
        };
        definition.validate()?;
        Ok(definition)
    }
}
