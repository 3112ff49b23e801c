use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::api::dtos::{
    AddressResponse, CreateAddressRequest, DistanceQueryParams, DistanceResponse, ErrorResponse,
    NearbyAddressResponse, NearbyQueryParams, PaginatedResponse, PaginationParams,
    UpdateAddressRequest,
};
use crate::api::routes::AppState;
use crate::error::AppResult;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/addresses")
            .route("", web::get().to(list_addresses))
            .route("", web::post().to(create_address))
            // Literal segments must be registered ahead of "/{id}".
            .route("/nearby", web::get().to(nearby_addresses))
            .route("/uuid/{uuid}", web::get().to(get_address_by_uuid))
            .route("/{id}", web::get().to(get_address))
            .route("/{id}", web::patch().to(update_address))
            .route("/{id}", web::delete().to(delete_address))
            .route("/{id}/distance", web::get().to(address_distance)),
    );
}

#[utoipa::path(
    post,
    path = "/api/v1/addresses",
    request_body = CreateAddressRequest,
    responses(
        (status = 201, description = "Address created", body = AddressResponse),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
    ),
    tag = "addresses"
)]
pub async fn create_address(
    state: web::Data<AppState>,
    payload: web::Json<CreateAddressRequest>,
) -> AppResult<HttpResponse> {
    let result = state.address_service.create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(result))
}

#[utoipa::path(
    get,
    path = "/api/v1/addresses",
    params(PaginationParams),
    responses(
        (status = 200, description = "One page of addresses in id order", body = PaginatedResponse<AddressResponse>),
    ),
    tag = "addresses"
)]
pub async fn list_addresses(
    state: web::Data<AppState>,
    query: web::Query<PaginationParams>,
) -> AppResult<HttpResponse> {
    let PaginationParams { page, limit } = query.into_inner();
    let result = state.address_service.list(page, limit).await?;
    Ok(HttpResponse::Ok().json(result))
}

#[utoipa::path(
    get,
    path = "/api/v1/addresses/{id}",
    params(("id" = i64, Path, description = "Address id")),
    responses(
        (status = 200, description = "Address found", body = AddressResponse),
        (status = 404, description = "Address not found", body = ErrorResponse),
    ),
    tag = "addresses"
)]
pub async fn get_address(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let result = state.address_service.get_by_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(result))
}

#[utoipa::path(
    get,
    path = "/api/v1/addresses/uuid/{uuid}",
    params(("uuid" = Uuid, Path, description = "Public address identifier")),
    responses(
        (status = 200, description = "Address found", body = AddressResponse),
        (status = 404, description = "Address not found", body = ErrorResponse),
    ),
    tag = "addresses"
)]
pub async fn get_address_by_uuid(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let result = state.address_service.get_by_uuid(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(result))
}

#[utoipa::path(
    patch,
    path = "/api/v1/addresses/{id}",
    params(("id" = i64, Path, description = "Address id")),
    request_body = UpdateAddressRequest,
    responses(
        (status = 200, description = "Address updated", body = AddressResponse),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 404, description = "Address not found", body = ErrorResponse),
    ),
    tag = "addresses"
)]
pub async fn update_address(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    payload: web::Json<UpdateAddressRequest>,
) -> AppResult<HttpResponse> {
    let result = state
        .address_service
        .update(path.into_inner(), payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(result))
}

#[utoipa::path(
    delete,
    path = "/api/v1/addresses/{id}",
    params(("id" = i64, Path, description = "Address id")),
    responses(
        (status = 204, description = "Address deleted"),
        (status = 404, description = "Address not found", body = ErrorResponse),
    ),
    tag = "addresses"
)]
pub async fn delete_address(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    state.address_service.delete(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[utoipa::path(
    get,
    path = "/api/v1/addresses/nearby",
    params(NearbyQueryParams),
    responses(
        (status = 200, description = "Addresses within the radius, nearest first", body = [NearbyAddressResponse]),
        (status = 400, description = "Invalid search parameters", body = ErrorResponse),
    ),
    tag = "addresses"
)]
pub async fn nearby_addresses(
    state: web::Data<AppState>,
    query: web::Query<NearbyQueryParams>,
) -> AppResult<HttpResponse> {
    let params = query.into_inner();
    let strategy = params.strategy.unwrap_or_default();
    let result = state.address_service.search_nearby(params).await?;
    state.metrics.record_search(strategy, result.len());
    Ok(HttpResponse::Ok().json(result))
}

#[utoipa::path(
    get,
    path = "/api/v1/addresses/{id}/distance",
    params(("id" = i64, Path, description = "Address id"), DistanceQueryParams),
    responses(
        (status = 200, description = "Distance from the address to the point", body = DistanceResponse),
        (status = 400, description = "Invalid coordinates", body = ErrorResponse),
        (status = 404, description = "Address not found", body = ErrorResponse),
    ),
    tag = "addresses"
)]
pub async fn address_distance(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    query: web::Query<DistanceQueryParams>,
) -> AppResult<HttpResponse> {
    let result = state
        .address_service
        .distance_to(path.into_inner(), query.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(result))
}
