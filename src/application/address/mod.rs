use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;
use validator::Validate;

use crate::api::dtos::{
    AddressResponse, CreateAddressRequest, DistanceQueryParams, DistanceResponse,
    NearbyAddressResponse, NearbyQueryParams, PaginatedResponse, UpdateAddressRequest,
};
use crate::application::proximity::{NearbyQuery, ProximitySearch};
use crate::config::SearchConfig;
use crate::domain::Address;
use crate::error::{AppError, AppResult};
use crate::infrastructure::repositories::{AddressRepository, ScanFilter};

pub mod mapper;

const MAX_PAGE_SIZE: i64 = 100;

#[derive(Clone)]
pub struct AddressService {
    address_repo: Arc<dyn AddressRepository>,
    proximity: ProximitySearch,
    search_config: SearchConfig,
}

impl AddressService {
    pub fn new(address_repo: Arc<dyn AddressRepository>, search_config: SearchConfig) -> Self {
        Self {
            proximity: ProximitySearch::new(address_repo.clone(), search_config.clone()),
            address_repo,
            search_config,
        }
    }

    pub async fn create(&self, request: CreateAddressRequest) -> AppResult<AddressResponse> {
        request.validate()?;

        let new_address = mapper::map_create_request(request, Utc::now());
        let created = self.address_repo.insert(&new_address).await?;

        info!(address_id = created.id, uuid = %created.uuid, "address created");
        Ok(mapper::map_address_to_response(created))
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<AddressResponse> {
        let address = self.load(id).await?;
        Ok(mapper::map_address_to_response(address))
    }

    pub async fn get_by_uuid(&self, uuid: Uuid) -> AppResult<AddressResponse> {
        let address = self
            .address_repo
            .find_by_uuid(uuid)
            .await?
            .ok_or_else(AppError::address_not_found)?;
        Ok(mapper::map_address_to_response(address))
    }

    pub async fn list(&self, page: i64, limit: i64) -> AppResult<PaginatedResponse<AddressResponse>> {
        let page = page.max(1);
        let limit = limit.clamp(1, MAX_PAGE_SIZE);
        let offset = (page - 1).saturating_mul(limit);

        let rows = self.address_repo.scan(&ScanFilter::None, limit, offset).await?;
        let total = self.address_repo.count().await?;
        let items = rows
            .into_iter()
            .map(mapper::map_address_to_response)
            .collect::<Vec<_>>();

        Ok(PaginatedResponse::new(items, total, page, limit))
    }

    pub async fn update(&self, id: i64, request: UpdateAddressRequest) -> AppResult<AddressResponse> {
        request.validate()?;

        let patch = mapper::map_update_request(request);
        if patch.is_empty() {
            debug!(address_id = id, "empty patch only refreshes updated_at");
        }

        let mut address = self.load(id).await?;
        address.apply_patch(patch, Utc::now())?;

        let updated = self
            .address_repo
            .update(&address)
            .await?
            .ok_or_else(AppError::address_not_found)?;

        info!(address_id = updated.id, "address updated");
        Ok(mapper::map_address_to_response(updated))
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        if !self.address_repo.delete(id).await? {
            return Err(AppError::address_not_found());
        }

        info!(address_id = id, "address deleted");
        Ok(())
    }

    pub async fn search_nearby(
        &self,
        params: NearbyQueryParams,
    ) -> AppResult<Vec<NearbyAddressResponse>> {
        params.validate()?;

        let limit = params.limit.unwrap_or(self.search_config.default_limit);
        if limit > self.search_config.max_limit {
            return Err(AppError::validation_error(format!(
                "limit must be at most {}",
                self.search_config.max_limit
            )));
        }

        let query = NearbyQuery {
            latitude: params.latitude,
            longitude: params.longitude,
            radius_km: params.radius_km.unwrap_or(self.search_config.default_radius_km),
            limit,
            offset: params.offset.unwrap_or(0),
        };
        let strategy = params.strategy.unwrap_or_default();

        let matches = self.proximity.search(&query, strategy).await?;

        info!(
            latitude = query.latitude,
            longitude = query.longitude,
            radius_km = query.radius_km,
            limit = query.limit,
            strategy = ?strategy,
            results = matches.len(),
            "nearby search completed"
        );
        Ok(matches
            .into_iter()
            .map(mapper::map_match_to_response)
            .collect())
    }

    pub async fn distance_to(
        &self,
        id: i64,
        params: DistanceQueryParams,
    ) -> AppResult<DistanceResponse> {
        params.validate()?;

        let address = self.load(id).await?;
        let distance_km = address.distance_to(params.latitude, params.longitude)?;

        Ok(DistanceResponse {
            address_id: address.id,
            latitude: params.latitude,
            longitude: params.longitude,
            distance_km,
        })
    }

    /// Round trip to the store, for health checks.
    pub async fn ping(&self) -> AppResult<()> {
        self.address_repo.ping().await
    }

    async fn load(&self, id: i64) -> AppResult<Address> {
        self.address_repo
            .find_by_id(id)
            .await?
            .ok_or_else(AppError::address_not_found)
    }
}
