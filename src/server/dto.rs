// ============================================================================
// Transport Types
// Form and query inputs, JSON responses
// ============================================================================

use crate::domain::{CalculationRequest, Operation};
use serde::{Deserialize, Serialize};

fn default_operation() -> String {
    Operation::default().as_str().to_string()
}

/// Query string of `GET /api/calc`
#[derive(Debug, Clone, Deserialize)]
pub struct CalcQuery {
    pub num1: Option<String>,
    pub num2: Option<String>,
    #[serde(default = "default_operation")]
    pub op: String,
}

impl From<CalcQuery> for CalculationRequest {
    fn from(query: CalcQuery) -> Self {
        Self {
            num1: query.num1,
            num2: query.num2,
            operation: query.op,
        }
    }
}

/// Body of `POST /`
#[derive(Debug, Clone, Deserialize)]
pub struct CalcForm {
    #[serde(default)]
    pub num1: String,
    #[serde(default)]
    pub num2: String,
    #[serde(default = "default_operation")]
    pub operation: String,
}

/// Successful API response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalcSuccess {
    pub ok: bool,
    pub result: String,
    pub operation: String,
}

impl CalcSuccess {
    pub fn new(result: String, operation: Operation) -> Self {
        Self {
            ok: true,
            result,
            operation: operation.as_str().to_string(),
        }
    }
}

/// Failed API response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalcFailure {
    pub ok: bool,
    pub error: String,
}

impl CalcFailure {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: error.into(),
        }
    }
}

/// Liveness response of `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
}
