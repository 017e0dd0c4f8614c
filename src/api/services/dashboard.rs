use actix_web::http::StatusCode;
use actix_web::{Responder, error, web};
use serde::Serialize;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, trace};

use crate::dashboard::{
    Component, ControlId, ControlState, Dashboard, OutputId, PayloadRange, SiteSelection,
};
use crate::errors::DashboardError;

use super::helpers::{error_from_dashboard, error_response, success_response};
use super::types::{CallbackRequest, CallbackResponse, ErrorCode, FigureQuery};

#[derive(Serialize)]
struct LayoutResponse<'a> {
    layout: &'a Component,
    initial_state: &'a ControlState,
    outputs: Vec<OutputId>,
    /// Every output rendered for `initial_state`, so the page needs no
    /// second round trip on load
    figures: CallbackResponse,
}

/// Dashboard Service
///
/// Handlers are thin: they turn request data into a [`ControlState`] and
/// hand it to the callback registry.
pub struct DashboardService;

impl DashboardService {
    /// View tree, initial control values and the initial figures
    pub async fn get_layout(dashboard: web::Data<Arc<Dashboard>>) -> impl Responder {
        trace!("Serving dashboard layout");
        let initial_state = dashboard.initial_state();
        success_response(LayoutResponse {
            layout: dashboard.layout(),
            initial_state,
            outputs: dashboard.registry().outputs(),
            figures: CallbackResponse::from(dashboard.render_all(initial_state)),
        })
    }

    /// Render one output from query parameters
    pub async fn get_figure(
        dashboard: web::Data<Arc<Dashboard>>,
        path: web::Path<String>,
        query: web::Query<FigureQuery>,
    ) -> impl Responder {
        let output_name = path.into_inner();
        let Ok(output) = OutputId::from_str(&output_name) else {
            debug!("Unknown figure requested: {}", output_name);
            return error_response(
                StatusCode::NOT_FOUND,
                ErrorCode::UnknownOutput,
                &format!("Unknown output: {}", output_name),
            );
        };

        let reads_payload = dashboard
            .registry()
            .subscribers(ControlId::PayloadSlider)
            .contains(&output);
        let state = match Self::state_from_query(&dashboard, &query, reads_payload) {
            Ok(state) => state,
            Err(message) => {
                return error_response(
                    StatusCode::BAD_REQUEST,
                    ErrorCode::InvalidPayloadRange,
                    &message,
                );
            }
        };

        match dashboard.render(output, &state) {
            Some(figure) => success_response(figure),
            None => error_from_dashboard(&DashboardError::not_found(format!(
                "No callback registered for {}",
                output_name
            ))),
        }
    }

    /// Dispatch a control change to every subscribed output
    pub async fn post_callback(
        dashboard: web::Data<Arc<Dashboard>>,
        body: web::Json<CallbackRequest>,
    ) -> impl Responder {
        let request = body.into_inner();
        let rendered = dashboard.dispatch(request.changed, &request.state);
        success_response(CallbackResponse::from(rendered))
    }

    /// Build the control state for a figure query
    ///
    /// `low`/`high` are only read (and validated) for outputs that listen to
    /// the payload slider; other outputs keep the initial range.
    fn state_from_query(
        dashboard: &Dashboard,
        query: &FigureQuery,
        reads_payload: bool,
    ) -> Result<ControlState, String> {
        let initial = dashboard.initial_state();
        let site = query
            .site
            .as_deref()
            .map(SiteSelection::parse)
            .unwrap_or_else(|| initial.site.clone());
        if !reads_payload {
            return Ok(ControlState::new(site, initial.payload));
        }

        let low = query.low.unwrap_or(initial.payload.low());
        let high = query.high.unwrap_or(initial.payload.high());
        let payload = PayloadRange::new(low, high).map_err(|e| e.message().to_string())?;
        Ok(ControlState::new(site, payload))
    }
}

fn json_error_handler(err: error::JsonPayloadError, _req: &actix_web::HttpRequest) -> error::Error {
    let message = format!("Invalid callback body: {}", err);
    let response = error_response(
        StatusCode::BAD_REQUEST,
        ErrorCode::InvalidCallbackBody,
        &message,
    );
    error::InternalError::from_response(err, response).into()
}

fn query_error_handler(
    err: error::QueryPayloadError,
    _req: &actix_web::HttpRequest,
) -> error::Error {
    let message = format!("Invalid query: {}", err);
    let response = error_response(StatusCode::BAD_REQUEST, ErrorCode::BadRequest, &message);
    error::InternalError::from_response(err, response).into()
}

/// Dashboard API 路由配置
pub fn dashboard_routes() -> actix_web::Scope {
    web::scope("/api")
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .route("/layout", web::get().to(DashboardService::get_layout))
        .route("/figures/{output}", web::get().to(DashboardService::get_figure))
        .route("/callback", web::post().to(DashboardService::post_callback))
}
