use actix_web::{test as actix_test, web, App, HttpResponse};
use address_book::security::security_headers;

#[actix_rt::test]
async fn test_security_headers_are_added() {
    let app = actix_test::init_service(
        App::new()
            .wrap(security_headers())
            .route("/", web::get().to(HttpResponse::Ok)),
    )
    .await;

    let req = actix_test::TestRequest::get().uri("/").to_request();
    let resp = actix_test::call_service(&app, req).await;

    for (name, value) in [
        ("X-Content-Type-Options", "nosniff"),
        ("X-Frame-Options", "DENY"),
        ("Referrer-Policy", "no-referrer"),
        ("Cache-Control", "no-store"),
    ] {
        assert_eq!(
            resp.headers().get(name).map(|v| v.to_str().unwrap()),
            Some(value),
            "{name} header mismatch"
        );
    }
}

#[actix_rt::test]
async fn test_security_headers_do_not_override_handler_headers() {
    let app = actix_test::init_service(
        App::new().wrap(security_headers()).route(
            "/",
            web::get().to(|| async {
                HttpResponse::Ok()
                    .insert_header(("Cache-Control", "max-age=60"))
                    .finish()
            }),
        ),
    )
    .await;

    let req = actix_test::TestRequest::get().uri("/").to_request();
    let resp = actix_test::call_service(&app, req).await;

    assert_eq!(resp.headers().get("Cache-Control").unwrap(), "max-age=60");
}
