use crate::config::SecurityConfig;
use actix_cors::Cors;
use actix_web::http::header;

pub fn cors_middleware(config: &SecurityConfig) -> Cors {
    let allowlist = config.cors_allowed_origins.clone();

    Cors::default()
        .allowed_methods(vec!["GET", "POST", "PATCH", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers(vec![header::HeaderName::from_static("x-request-id")])
        .allowed_origin_fn(move |origin, _| {
            origin
                .to_str()
                .is_ok_and(|value| allowlist.iter().any(|allowed| allowed == value))
        })
        .max_age(3600)
}
