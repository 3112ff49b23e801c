use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::application::SearchStrategy;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateAddressRequest {
    #[validate(length(min = 1, max = 150))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 200))]
    pub street: String,

    #[validate(length(min = 1, max = 100))]
    pub city: String,

    #[validate(length(min = 1, max = 100))]
    pub state: String,

    #[validate(length(min = 1, max = 100))]
    pub country: String,

    #[validate(length(min = 1, max = 20))]
    pub postal_code: Option<String>,

    #[validate(length(min = 1, max = 20))]
    pub building_number: Option<String>,

    #[validate(length(min = 1, max = 20))]
    pub apartment: Option<String>,

    #[validate(range(
        exclusive_min = -90.0,
        exclusive_max = 90.0,
        message = "latitude must be between -90 and 90"
    ))]
    pub latitude: f64,

    #[validate(range(
        exclusive_min = -180.0,
        exclusive_max = 180.0,
        message = "longitude must be between -180 and 180"
    ))]
    pub longitude: f64,
}

/// Partial update; omitted fields keep their stored value.
///
/// `name`, `postal_code`, `building_number` and `apartment` accept an
/// explicit `null`, which clears the stored value.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
pub struct UpdateAddressRequest {
    #[serde(
        default,
        deserialize_with = "deserialize_nullable",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>)]
    #[validate(length(min = 1, max = 150))]
    pub name: Option<Option<String>>,
    #[validate(length(min = 1, max = 200))]
    pub street: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub city: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub state: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub country: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_nullable",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>)]
    #[validate(length(min = 1, max = 20))]
    pub postal_code: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "deserialize_nullable",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>)]
    #[validate(length(min = 1, max = 20))]
    pub building_number: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "deserialize_nullable",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>)]
    #[validate(length(min = 1, max = 20))]
    pub apartment: Option<Option<String>>,
    #[validate(range(
        exclusive_min = -90.0,
        exclusive_max = 90.0,
        message = "latitude must be between -90 and 90"
    ))]
    pub latitude: Option<f64>,
    #[validate(range(
        exclusive_min = -180.0,
        exclusive_max = 180.0,
        message = "longitude must be between -180 and 180"
    ))]
    pub longitude: Option<f64>,
}

/// Absent stays `None` (via `default`); present maps to `Some`, so `null`
/// becomes `Some(None)`.
fn deserialize_nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AddressResponse {
    pub id: i64,
    pub uuid: Uuid,
    pub name: Option<String>,
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_code: Option<String>,
    pub building_number: Option<String>,
    pub apartment: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NearbyQueryParams {
    /// Latitude of the search center
    #[validate(range(
        exclusive_min = -90.0,
        exclusive_max = 90.0,
        message = "latitude must be between -90 and 90"
    ))]
    pub latitude: f64,
    /// Longitude of the search center
    #[validate(range(
        exclusive_min = -180.0,
        exclusive_max = 180.0,
        message = "longitude must be between -180 and 180"
    ))]
    pub longitude: f64,
    /// Search radius in kilometers, defaults to 5
    #[validate(range(exclusive_min = 0.0, message = "radius_km must be greater than 0"))]
    pub radius_km: Option<f64>,
    /// Maximum number of results, defaults to 20
    #[validate(range(min = 1, message = "limit must be at least 1"))]
    pub limit: Option<i64>,
    /// Number of stored candidates to skip before ranking
    #[validate(range(min = 0, message = "offset must not be negative"))]
    pub offset: Option<i64>,
    pub strategy: Option<SearchStrategy>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NearbyAddressResponse {
    pub address: AddressResponse,
    pub distance_km: f64,
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DistanceQueryParams {
    #[validate(range(
        exclusive_min = -90.0,
        exclusive_max = 90.0,
        message = "latitude must be between -90 and 90"
    ))]
    pub latitude: f64,
    #[validate(range(
        exclusive_min = -180.0,
        exclusive_max = 180.0,
        message = "longitude must be between -180 and 180"
    ))]
    pub longitude: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DistanceResponse {
    pub address_id: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub distance_km: f64,
}
