use crate::domain::{Address, BoundingBox, NewAddress};
use crate::error::AppResult;
use async_trait::async_trait;
use uuid::Uuid;

/// Restricts which stored addresses a [`AddressRepository::scan`] visits.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ScanFilter {
    #[default]
    None,
    BoundingBox(BoundingBox),
}

impl ScanFilter {
    pub fn matches(&self, address: &Address) -> bool {
        match self {
            ScanFilter::None => true,
            ScanFilter::BoundingBox(bbox) => bbox.contains(address.latitude, address.longitude),
        }
    }
}

#[async_trait]
pub trait AddressRepository: Send + Sync {
    async fn insert(&self, address: &NewAddress) -> AppResult<Address>;
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Address>>;
    async fn find_by_uuid(&self, uuid: Uuid) -> AppResult<Option<Address>>;

    /// Overwrites every mutable column of the row with `address.id`.
    /// Returns `None` when no such row exists.
    async fn update(&self, address: &Address) -> AppResult<Option<Address>>;

    /// Returns whether a row was removed.
    async fn delete(&self, id: i64) -> AppResult<bool>;

    /// Addresses matching `filter` in store order (`id` ascending).
    async fn scan(&self, filter: &ScanFilter, limit: i64, offset: i64) -> AppResult<Vec<Address>>;

    async fn count(&self) -> AppResult<i64> {
        const PAGE_SIZE: i64 = 1_000;

        let mut total = 0_i64;
        let mut offset = 0_i64;
        loop {
            let items = self.scan(&ScanFilter::None, PAGE_SIZE, offset).await?;
            let count = items.len() as i64;
            total = total.saturating_add(count);

            if count < PAGE_SIZE || offset > i64::MAX - PAGE_SIZE {
                break;
            }
            offset += PAGE_SIZE;
        }

        Ok(total)
    }

    /// Cheap round trip used by the health check.
    async fn ping(&self) -> AppResult<()> {
        self.scan(&ScanFilter::None, 1, 0).await.map(|_| ())
    }
}
