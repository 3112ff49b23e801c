use crate::domain::Address;
use crate::error::AppResult;
use crate::infrastructure::repositories::traits::ScanFilter;
use sqlx::{PgPool, Postgres, QueryBuilder};

use super::ADDRESS_COLUMNS;

fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &ScanFilter) {
    if let ScanFilter::BoundingBox(bbox) = filter {
        builder.push(" WHERE latitude BETWEEN ");
        builder.push_bind(bbox.min_lat);
        builder.push(" AND ");
        builder.push_bind(bbox.max_lat);
        builder.push(" AND longitude BETWEEN ");
        builder.push_bind(bbox.min_lon);
        builder.push(" AND ");
        builder.push_bind(bbox.max_lon);
    }
}

pub async fn scan(
    pool: &PgPool,
    filter: &ScanFilter,
    limit: i64,
    offset: i64,
) -> AppResult<Vec<Address>> {
    let mut builder = QueryBuilder::<Postgres>::new("SELECT ");
    builder.push(ADDRESS_COLUMNS);
    builder.push(" FROM addresses");
    push_filter(&mut builder, filter);

    builder.push(" ORDER BY id ASC LIMIT ");
    builder.push_bind(limit);
    builder.push(" OFFSET ");
    builder.push_bind(offset);

    let addresses = builder.build_query_as::<Address>().fetch_all(pool).await?;
    Ok(addresses)
}

pub async fn count(pool: &PgPool) -> AppResult<i64> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) AS count FROM addresses")
        .fetch_one(pool)
        .await?;
    Ok(count)
}
