//! Radius search over stored addresses.
//!
//! The store is asked for a bounded window of candidates, then every candidate
//! is measured exactly with the haversine distance, filtered by radius, sorted
//! and truncated. The window is `oversample × limit` rows, so when more than
//! that many stored addresses fall inside the pre-filter an address within the
//! radius can be missed. [`SearchConfig`] controls the factors.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::config::SearchConfig;
use crate::domain::geo::get_bounding_box;
use crate::domain::Address;
use crate::error::AppResult;
use crate::infrastructure::repositories::{AddressRepository, ScanFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    /// Pre-filter candidates with a bounding box around the center.
    #[default]
    BoundingBox,
    /// Visit stored addresses in store order without a spatial pre-filter.
    FullScan,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearbyQuery {
    pub latitude: f64,
    pub longitude: f64,
    pub radius_km: f64,
    pub limit: i64,
    pub offset: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NearbyMatch {
    pub address: Address,
    pub distance_km: f64,
}

#[derive(Clone)]
pub struct ProximitySearch {
    repo: Arc<dyn AddressRepository>,
    config: SearchConfig,
}

impl ProximitySearch {
    pub fn new(repo: Arc<dyn AddressRepository>, config: SearchConfig) -> Self {
        Self { repo, config }
    }

    pub async fn search(
        &self,
        query: &NearbyQuery,
        strategy: SearchStrategy,
    ) -> AppResult<Vec<NearbyMatch>> {
        let (filter, oversample) = match strategy {
            SearchStrategy::BoundingBox => {
                let bbox = get_bounding_box(query.latitude, query.longitude, query.radius_km);
                debug!(
                    width_deg = bbox.width_degrees(),
                    height_deg = bbox.height_degrees(),
                    "bounding box pre-filter"
                );
                (ScanFilter::BoundingBox(bbox), self.config.bounded_oversample)
            }
            SearchStrategy::FullScan => (ScanFilter::None, self.config.scan_oversample),
        };

        let window = query.limit.saturating_mul(oversample);
        let candidates = self.repo.scan(&filter, window, query.offset).await?;
        debug!(
            strategy = ?strategy,
            candidates = candidates.len(),
            window,
            "proximity candidates loaded"
        );

        rank_candidates(candidates, query)
    }
}

/// Measures, filters, stable-sorts and truncates `candidates` for `query`.
pub fn rank_candidates(
    candidates: Vec<Address>,
    query: &NearbyQuery,
) -> AppResult<Vec<NearbyMatch>> {
    let mut matches = Vec::with_capacity(candidates.len());
    for address in candidates {
        let distance_km = address.distance_to(query.latitude, query.longitude)?;
        if distance_km <= query.radius_km {
            matches.push(NearbyMatch {
                address,
                distance_km,
            });
        }
    }

    matches.sort_by(|left, right| left.distance_km.total_cmp(&right.distance_km));
    matches.truncate(usize::try_from(query.limit).unwrap_or(0));
    Ok(matches)
}
