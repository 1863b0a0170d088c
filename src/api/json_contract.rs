use serde::Serialize;

use crate::core::DataPoint;
use crate::error::{ChartError, ChartResult};

use super::{ChartSpec, RenderOptions};

pub const CHART_SPEC_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpecJsonContractV1<'s, 'a> {
    pub schema_version: u32,
    pub spec: &'s ChartSpec<'a>,
}

impl ChartSpec<'_> {
    /// Serializes the spec, series included, for hosts that draw it
    /// themselves.
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartSpecJsonContractV1 {
            schema_version: CHART_SPEC_JSON_SCHEMA_V1,
            spec: self,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart spec contract v1: {e}"))
        })
    }
}

impl RenderOptions {
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse render options: {e}")))
    }
}

/// Parses a series as produced by the statistics stage: a JSON array of
/// points whose derived fields may be absent or `null`.
pub fn parse_series_json(input: &str) -> ChartResult<Vec<DataPoint>> {
    serde_json::from_str(input)
        .map_err(|e| ChartError::InvalidData(format!("failed to parse series json: {e}")))
}
