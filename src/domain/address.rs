use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::{geo, DomainError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Address {
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

/// An address that has not been stored yet; the store assigns `id`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAddress {
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
}

/// Field-level changes for a partial update. `None` leaves a field untouched;
/// `Some(None)` clears an optional field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressPatch {
    pub name: Option<Option<String>>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<Option<String>>,
    pub building_number: Option<Option<String>>,
    pub apartment: Option<Option<String>>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl AddressPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Address {
    pub fn coordinates(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }

    pub fn distance_to(&self, latitude: f64, longitude: f64) -> Result<f64, DomainError> {
        let (own_latitude, own_longitude) = self.coordinates();
        geo::calculate_distance(own_latitude, own_longitude, latitude, longitude)
    }

    /// Applies every set field of `patch` and stamps `updated_at`.
    ///
    /// Fails without modifying `self` when the resulting coordinates would be
    /// out of range.
    pub fn apply_patch(&mut self, patch: AddressPatch, now: DateTime<Utc>) -> Result<(), DomainError> {
        let AddressPatch {
            name,
            street,
            city,
            state,
            country,
            postal_code,
            building_number,
            apartment,
            latitude,
            longitude,
        } = patch;

        let next_latitude = latitude.unwrap_or(self.latitude);
        let next_longitude = longitude.unwrap_or(self.longitude);
        if !geo::validate_coordinates(next_latitude, next_longitude) {
            return Err(DomainError::ValidationError(
                "coordinates must be within (-90, 90) latitude and (-180, 180) longitude"
                    .to_string(),
            ));
        }

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(street) = street {
            self.street = street;
        }
        if let Some(city) = city {
            self.city = city;
        }
        if let Some(state) = state {
            self.state = state;
        }
        if let Some(country) = country {
            self.country = country;
        }
        if let Some(postal_code) = postal_code {
            self.postal_code = postal_code;
        }
        if let Some(building_number) = building_number {
            self.building_number = building_number;
        }
        if let Some(apartment) = apartment {
            self.apartment = apartment;
        }
        self.latitude = next_latitude;
        self.longitude = next_longitude;

        self.touch(now);
        Ok(())
    }

    /// Sets `updated_at`, never earlier than `created_at`.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = Some(now.max(self.created_at));
    }
}

impl NewAddress {
    /// The stored form of this address once the store has assigned `id`.
    pub fn with_id(self, id: i64) -> Address {
        Address {
            id,
            uuid: self.uuid,
            name: self.name,
            street: self.street,
            city: self.city,
            state: self.state,
            country: self.country,
            postal_code: self.postal_code,
            building_number: self.building_number,
            apartment: self.apartment,
            latitude: self.latitude,
            longitude: self.longitude,
            created_at: self.created_at,
            updated_at: None,
        }
    }
}
