use actix_web::{HttpResponse, Responder, web};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, trace};

use crate::dashboard::Dashboard;
use crate::utils::format_duration_human;

use super::helpers::json_response;
use super::types::{ErrorCode, HealthDatasetCheck, HealthResponse};

// 应用启动时间结构体
#[derive(Clone, Debug)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

/// Health Service
///
/// The dataset is loaded before the server binds, so the only thing that can
/// make the service unhealthy is an empty dataset.
pub struct HealthService;

impl HealthService {
    pub async fn health_check(
        dashboard: web::Data<Arc<Dashboard>>,
        app_start_time: web::Data<AppStartTime>,
    ) -> impl Responder {
        let start_time = Instant::now();
        trace!("Received health check request");

        let dataset = dashboard.dataset();
        let bounds = dataset.payload_bounds();
        let is_healthy = !dataset.is_empty();

        let dataset_check = HealthDatasetCheck {
            status: if is_healthy { "healthy" } else { "empty" }.to_string(),
            records: dataset.len(),
            payload_min: bounds.map(|b| b.min),
            payload_max: bounds.map(|b| b.max),
        };

        let now = chrono::Utc::now();
        let uptime_human = format_duration_human(app_start_time.start_datetime, now);
        let uptime_seconds = (now - app_start_time.start_datetime).num_seconds().max(0) as u32;

        let health_data = HealthResponse {
            status: if is_healthy { "healthy" } else { "unhealthy" }.to_string(),
            timestamp: now.to_rfc3339(),
            uptime: uptime_seconds,
            dataset: dataset_check,
            callbacks: dashboard.registry().len(),
            response_time_ms: start_time.elapsed().as_millis() as u32,
        };

        info!(
            "Health check completed in {:?}, status: {}, uptime: {}",
            start_time.elapsed(),
            health_data.status,
            uptime_human
        );

        if is_healthy {
            json_response(
                actix_web::http::StatusCode::OK,
                ErrorCode::Success,
                "OK",
                Some(health_data),
            )
        } else {
            json_response(
                actix_web::http::StatusCode::SERVICE_UNAVAILABLE,
                ErrorCode::ServiceUnavailable,
                "Service Unavailable",
                Some(health_data),
            )
        }
    }

    // 简单的就绪检查，只返回 200 状态码
    pub async fn readiness_check() -> impl Responder {
        trace!("Received readiness check request");

        HttpResponse::Ok()
            .append_header(("Content-Type", "text/plain"))
            .body("OK")
    }

    pub async fn liveness_check() -> impl Responder {
        trace!("Received liveness check request");

        HttpResponse::NoContent().finish()
    }
}

/// Health 路由配置
pub fn health_routes() -> actix_web::Scope {
    web::scope("/health")
        .route("", web::get().to(HealthService::health_check))
        .route("", web::head().to(HealthService::health_check))
        .route("/ready", web::get().to(HealthService::readiness_check))
        .route("/ready", web::head().to(HealthService::readiness_check))
        .route("/live", web::get().to(HealthService::liveness_check))
        .route("/live", web::head().to(HealthService::liveness_check))
}
