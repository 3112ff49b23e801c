use std::net::IpAddr;
use std::sync::Arc;

use actix_web::{error::InternalError, web, HttpRequest, HttpResponse, ResponseError};
use chrono::Utc;
use sqlx::PgPool;
use tracing::warn;

use crate::api::dtos::{HealthResponse, HealthStatus};
use crate::application::AddressService;
use crate::config::SecurityConfig;
use crate::error::{AppError, AppResult};
use crate::observability::AppMetrics;

pub mod addresses;

#[derive(Clone)]
pub struct AppState {
    pub address_service: Arc<AddressService>,
    pub security: SecurityConfig,
    pub metrics: Arc<AppMetrics>,
    pub db_pool: PgPool,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .app_data(path_config())
        .service(web::scope("/api/v1").configure(addresses::configure))
        .route("/health", web::get().to(health))
        .route("/ready", web::get().to(ready))
        .route("/metrics", web::get().to(metrics));
}

// Extractor failures use the same JSON error body as handler errors.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _| {
        let app_error = AppError::BadRequest(format!("Invalid JSON body: {err}"));
        InternalError::from_response(err, app_error.error_response()).into()
    })
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _| {
        let app_error = AppError::BadRequest(format!("Invalid query parameters: {err}"));
        InternalError::from_response(err, app_error.error_response()).into()
    })
}

fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _| {
        let app_error = AppError::BadRequest(format!("Invalid path parameter: {err}"));
        InternalError::from_response(err, app_error.error_response()).into()
    })
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service and store are reachable", body = HealthResponse),
        (status = 503, description = "Store is unreachable", body = HealthResponse),
    ),
    tag = "health"
)]
pub async fn health(state: web::Data<AppState>) -> HttpResponse {
    let (status, database) = match state.address_service.ping().await {
        Ok(()) => (HealthStatus::Healthy, "connected"),
        Err(error) => {
            warn!(error = %error, "health check could not reach the store");
            (HealthStatus::Unhealthy, "disconnected")
        }
    };

    let body = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
        database: database.to_string(),
    };

    match status {
        HealthStatus::Healthy => HttpResponse::Ok().json(body),
        HealthStatus::Unhealthy => HttpResponse::ServiceUnavailable().json(body),
    }
}

#[utoipa::path(
    get,
    path = "/ready",
    responses(
        (status = 200, description = "Readiness check passed"),
        (status = 503, description = "Service not ready"),
    ),
    tag = "health"
)]
pub async fn ready(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    state
        .address_service
        .ping()
        .await
        .map_err(|e| AppError::ServiceUnavailable {
            service: "database".to_string(),
            message: format!("Service not ready: {}", e.error_code()),
        })?;
    Ok(HttpResponse::Ok().body("ready"))
}

async fn metrics(state: web::Data<AppState>, request: HttpRequest) -> AppResult<HttpResponse> {
    if let Some(token) = state.security.metrics_admin_token() {
        let admin_header = request
            .headers()
            .get("x-admin-token")
            .and_then(|value| value.to_str().ok());
        if admin_header == Some(token.as_str()) {
            return Ok(render_metrics(&state));
        }
    }

    if state.security.metrics_allow_private_only {
        let ip = request
            .peer_addr()
            .map(|addr| addr.ip())
            .ok_or(AppError::Unauthorized)?;

        if !is_private_or_loopback(ip) {
            return Err(AppError::Unauthorized);
        }
    }

    Ok(render_metrics(&state))
}

fn render_metrics(state: &AppState) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(
            state
                .metrics
                .render_prometheus(state.db_pool.size(), state.db_pool.num_idle()),
        )
}

fn is_private_or_loopback(ip: IpAddr) -> bool {
    match ip {
        IpAddr::V4(v4) => v4.is_private() || v4.is_loopback(),
        // fc00::/7
        IpAddr::V6(v6) => v6.is_loopback() || (v6.segments()[0] & 0xfe00) == 0xfc00,
    }
}
