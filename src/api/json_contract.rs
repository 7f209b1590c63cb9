use serde::{Deserialize, Serialize};

use crate::error::{HistogramError, HistogramResult};

use super::ChartData;

pub const CHART_DATA_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataJsonContractV1 {
    pub schema_version: u32,
    pub chart: ChartData,
}

impl ChartData {
    pub fn to_json_pretty(&self) -> HistogramResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            HistogramError::InvalidData(format!("failed to serialize chart data json: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> HistogramResult<String> {
        let payload = ChartDataJsonContractV1 {
            schema_version: CHART_DATA_JSON_SCHEMA_V1,
            chart: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            HistogramError::InvalidData(format!("failed to serialize chart data contract v1: {e}"))
        })
    }

    /// Parses either a bare payload or a versioned envelope.
    ///
    /// Input carrying a `schemaVersion` key is treated as an envelope, so parse
    /// errors point at the form that was actually supplied.
    pub fn from_json_compat_str(input: &str) -> HistogramResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input).map_err(|e| {
            HistogramError::InvalidData(format!("failed to parse chart data json: {e}"))
        })?;
        if value.get("schemaVersion").is_none() {
            return serde_json::from_value(value).map_err(|e| {
                HistogramError::InvalidData(format!("failed to parse chart data json payload: {e}"))
            });
        }
        let payload: ChartDataJsonContractV1 = serde_json::from_value(value).map_err(|e| {
            HistogramError::InvalidData(format!("failed to parse chart data contract v1: {e}"))
        })?;
        if payload.schema_version != CHART_DATA_JSON_SCHEMA_V1 {
            return Err(HistogramError::InvalidData(format!(
                "unsupported chart data schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.chart)
    }
}
