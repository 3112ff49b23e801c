use crate::domain::{Address, NewAddress};
use crate::error::AppResult;
use crate::infrastructure::repositories::traits::{AddressRepository, ScanFilter};
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

pub mod scan;

pub(crate) const ADDRESS_COLUMNS: &str = "id, uuid, name, street, city, state, country, \
     postal_code, building_number, apartment, latitude, longitude, created_at, updated_at";

pub struct AddressRepositoryImpl {
    pool: PgPool,
}

impl AddressRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AddressRepository for AddressRepositoryImpl {
    async fn insert(&self, address: &NewAddress) -> AppResult<Address> {
        let created = sqlx::query_as::<_, Address>(&format!(
            r#"
            INSERT INTO addresses (uuid, name, street, city, state, country, postal_code,
                                   building_number, apartment, latitude, longitude, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING {ADDRESS_COLUMNS}
            "#
        ))
        .bind(address.uuid)
        .bind(&address.name)
        .bind(&address.street)
        .bind(&address.city)
        .bind(&address.state)
        .bind(&address.country)
        .bind(&address.postal_code)
        .bind(&address.building_number)
        .bind(&address.apartment)
        .bind(address.latitude)
        .bind(address.longitude)
        .bind(address.created_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Address>> {
        let address = sqlx::query_as::<_, Address>(&format!(
            "SELECT {ADDRESS_COLUMNS} FROM addresses WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(address)
    }

    async fn find_by_uuid(&self, uuid: Uuid) -> AppResult<Option<Address>> {
        let address = sqlx::query_as::<_, Address>(&format!(
            "SELECT {ADDRESS_COLUMNS} FROM addresses WHERE uuid = $1"
        ))
        .bind(uuid)
        .fetch_optional(&self.pool)
        .await?;
        Ok(address)
    }

    async fn update(&self, address: &Address) -> AppResult<Option<Address>> {
        let updated = sqlx::query_as::<_, Address>(&format!(
            r#"
            UPDATE addresses
            SET name = $2, street = $3, city = $4, state = $5, country = $6,
                postal_code = $7, building_number = $8, apartment = $9,
                latitude = $10, longitude = $11, updated_at = $12
            WHERE id = $1
            RETURNING {ADDRESS_COLUMNS}
            "#
        ))
        .bind(address.id)
        .bind(&address.name)
        .bind(&address.street)
        .bind(&address.city)
        .bind(&address.state)
        .bind(&address.country)
        .bind(&address.postal_code)
        .bind(&address.building_number)
        .bind(&address.apartment)
        .bind(address.latitude)
        .bind(address.longitude)
        .bind(address.updated_at)
        .fetch_optional(&self.pool)
        .await?;
        Ok(updated)
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM addresses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn scan(&self, filter: &ScanFilter, limit: i64, offset: i64) -> AppResult<Vec<Address>> {
        scan::scan(&self.pool, filter, limit, offset).await
    }

    async fn count(&self) -> AppResult<i64> {
        scan::count(&self.pool).await
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
