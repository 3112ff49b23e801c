use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::api::dtos::{
    AddressResponse, CreateAddressRequest, NearbyAddressResponse, UpdateAddressRequest,
};
use crate::application::proximity::NearbyMatch;
use crate::domain::{Address, AddressPatch, NewAddress};

pub fn map_create_request(request: CreateAddressRequest, now: DateTime<Utc>) -> NewAddress {
    NewAddress {
        uuid: Uuid::new_v4(),
        name: request.name,
        street: request.street,
        city: request.city,
        state: request.state,
        country: request.country,
        postal_code: request.postal_code,
        building_number: request.building_number,
        apartment: request.apartment,
        latitude: request.latitude,
        longitude: request.longitude,
        created_at: now,
    }
}

pub fn map_update_request(request: UpdateAddressRequest) -> AddressPatch {
    AddressPatch {
        name: request.name,
        street: request.street,
        city: request.city,
        state: request.state,
        country: request.country,
        postal_code: request.postal_code,
        building_number: request.building_number,
        apartment: request.apartment,
        latitude: request.latitude,
        longitude: request.longitude,
    }
}

pub fn map_address_to_response(address: Address) -> AddressResponse {
    AddressResponse {
        id: address.id,
        uuid: address.uuid,
        name: address.name,
        street: address.street,
        city: address.city,
        state: address.state,
        country: address.country,
        postal_code: address.postal_code,
        building_number: address.building_number,
        apartment: address.apartment,
        latitude: address.latitude,
        longitude: address.longitude,
        created_at: address.created_at,
        updated_at: address.updated_at,
    }
}

pub fn map_match_to_response(matched: NearbyMatch) -> NearbyAddressResponse {
    NearbyAddressResponse {
        address: map_address_to_response(matched.address),
        distance_km: matched.distance_km,
    }
}
