//! API 类型定义

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::collections::BTreeMap;

use crate::dashboard::{ControlId, ControlState, Figure, OutputId};
use crate::errors::DashboardError;

/// JSON envelope for every API response
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// API 错误码
///
/// 按千位分域：
/// - 0: 成功
/// - 1000-1099: 通用错误
/// - 2000-2099: 看板请求错误
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    BadRequest = 1000,
    NotFound = 1004,
    InternalServerError = 1005,
    ServiceUnavailable = 1030,

    UnknownOutput = 2000,
    InvalidPayloadRange = 2001,
    InvalidCallbackBody = 2002,
}

impl From<&DashboardError> for ErrorCode {
    fn from(err: &DashboardError) -> Self {
        match err {
            DashboardError::Validation(_) => ErrorCode::BadRequest,
            DashboardError::NotFound(_) => ErrorCode::NotFound,
            _ => ErrorCode::InternalServerError,
        }
    }
}

/// Query string for `GET /api/figures/{output}`
///
/// Missing values fall back to the dashboard's initial control state.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct FigureQuery {
    pub site: Option<String>,
    pub low: Option<f64>,
    pub high: Option<f64>,
}

/// Body of `POST /api/callback`
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct CallbackRequest {
    pub changed: ControlId,
    pub state: ControlState,
}

/// Figures keyed by output id
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct CallbackResponse {
    pub outputs: BTreeMap<String, Figure>,
}

impl From<Vec<(OutputId, Figure)>> for CallbackResponse {
    fn from(rendered: Vec<(OutputId, Figure)>) -> Self {
        Self {
            outputs: rendered
                .into_iter()
                .map(|(id, figure)| (id.as_ref().to_string(), figure))
                .collect(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct HealthDatasetCheck {
    pub status: String,
    pub records: usize,
    pub payload_min: Option<f64>,
    pub payload_max: Option<f64>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub uptime: u32,
    pub dataset: HealthDatasetCheck,
    pub callbacks: usize,
    pub response_time_ms: u32,
}
