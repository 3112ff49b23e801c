use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::dtos::{
    AddressResponse, CreateAddressRequest, DistanceResponse, ErrorDetail, ErrorResponse,
    HealthResponse, HealthStatus, NearbyAddressResponse, PaginatedResponse, UpdateAddressRequest,
};
use crate::application::SearchStrategy;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::routes::addresses::create_address,
        crate::api::routes::addresses::list_addresses,
        crate::api::routes::addresses::get_address,
        crate::api::routes::addresses::get_address_by_uuid,
        crate::api::routes::addresses::update_address,
        crate::api::routes::addresses::delete_address,
        crate::api::routes::addresses::nearby_addresses,
        crate::api::routes::addresses::address_distance,
        crate::api::routes::health,
        crate::api::routes::ready,
    ),
    components(
        schemas(
            CreateAddressRequest,
            UpdateAddressRequest,
            AddressResponse,
            NearbyAddressResponse,
            DistanceResponse,
            PaginatedResponse<AddressResponse>,
            SearchStrategy,
            HealthResponse,
            HealthStatus,
            ErrorResponse,
            ErrorDetail,
        )
    ),
    tags(
        (name = "addresses", description = "Address storage and proximity search"),
        (name = "health", description = "Health check endpoints"),
    ),
    info(
        title = "Address Book API",
        description = "Store postal addresses with coordinates and find the ones near a point",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

pub fn configure_swagger_ui(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );
}
