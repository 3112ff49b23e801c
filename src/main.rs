use std::sync::Arc;
use std::time::Instant;

use actix_governor::Governor;
use actix_web::dev::Service as _;
use actix_web::http::header::HeaderName;
use actix_web::{web, App, HttpServer};
use address_book::api::openapi::configure_swagger_ui;
use address_book::api::routes::{self, AppState};
use address_book::application::AddressService;
use address_book::config::{AppConfig, LoggingConfig};
use address_book::infrastructure::db::{create_pool, run_migrations};
use address_book::infrastructure::repositories::AddressRepositoryImpl;
use address_book::middleware::request_logging::{
    create_request_span, get_client_ip, get_status_class, get_user_agent, request_id,
    request_id_header_value, REQUEST_ID_HEADER,
};
use address_book::observability::error_tracking::{capture_unexpected_5xx, FailedRequest};
use address_book::observability::AppMetrics;
use address_book::security::{cors_middleware, global_rate_limiting, security_headers};
use anyhow::Context;
use tracing::{info, Instrument};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.level.clone()));

    if logging.json_format {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(true),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer())
            .init();
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().context("failed to load application configuration")?;
    config
        .validate()
        .context("invalid application configuration")?;

    init_tracing(&config.logging);

    let pool = create_pool(&config.database)
        .await
        .context("failed to create database pool")?;

    run_migrations(&pool)
        .await
        .context("database migrations failed")?;

    let address_repo = Arc::new(AddressRepositoryImpl::new(pool.clone()));
    let state = AppState {
        address_service: Arc::new(AddressService::new(address_repo, config.search.clone())),
        security: config.security.clone(),
        metrics: Arc::new(AppMetrics::default()),
        db_pool: pool.clone(),
    };

    let governor_config = global_rate_limiting(&config.security)?;
    let security_config = config.security.clone();
    let metrics = state.metrics.clone();

    info!(
        host = %config.host,
        port = config.port,
        environment = %config.environment,
        "starting address book service"
    );

    HttpServer::new(move || {
        let metrics = metrics.clone();
        App::new()
            .wrap_fn(move |req, srv| {
                let request_id = request_id(&req);
                let path = req.path().to_string();
                let method = req.method().to_string();
                let span = create_request_span(
                    &request_id,
                    &method,
                    &path,
                    &get_client_ip(&req),
                    &get_user_agent(&req),
                );
                let metrics = metrics.clone();
                let start = Instant::now();

                let fut = srv.call(req);
                async move {
                    let mut response = fut.await?;
                    response.headers_mut().insert(
                        HeaderName::from_static(REQUEST_ID_HEADER),
                        request_id_header_value(&request_id),
                    );

                    let status = response.status().as_u16();
                    let latency_ms = start.elapsed().as_millis() as u64;
                    metrics.record_request(status, latency_ms);

                    info!(
                        status = status,
                        status_class = get_status_class(status),
                        latency_ms = latency_ms,
                        "request completed"
                    );

                    capture_unexpected_5xx(FailedRequest {
                        request_id: &request_id,
                        method: &method,
                        path: &path,
                        status,
                    });
                    Ok::<_, actix_web::Error>(response)
                }
                .instrument(span)
            })
            .wrap(Governor::new(&governor_config))
            .wrap(cors_middleware(&security_config))
            .wrap(security_headers())
            .app_data(web::Data::new(state.clone()))
            .configure(routes::configure)
            .configure(configure_swagger_ui)
    })
    .bind((config.host.clone(), config.port))?
    .run()
    .await?;

    Ok(())
}
