use std::sync::Arc;

use actix_rt::test;
use address_book::application::{NearbyQuery, ProximitySearch, SearchStrategy};
use address_book::config::SearchConfig;
use address_book::infrastructure::repositories::ScanFilter;

use crate::common::fixtures::address_at;
use crate::common::mocks::MockAddressRepo;

fn query(limit: i64, offset: i64) -> NearbyQuery {
    NearbyQuery {
        latitude: 0.0,
        longitude: 0.0,
        radius_km: 1000.0,
        limit,
        offset,
    }
}

#[test]
async fn bounding_box_excludes_rows_outside_the_box_before_ranking() {
    let repo = Arc::new(MockAddressRepo::default());
    repo.push(address_at(1, 30.0, 30.0));
    repo.push(address_at(2, 0.5, 0.5));
    let search = ProximitySearch::new(repo.clone(), SearchConfig::default());

    let results = search
        .search(&query(1, 0), SearchStrategy::BoundingBox)
        .await
        .unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].address.id, 2);
}

#[test]
async fn full_scan_reads_rows_in_store_order() {
    let repo = Arc::new(MockAddressRepo::default());
    repo.push(address_at(1, 30.0, 30.0));
    repo.push(address_at(2, 0.5, 0.5));
    let search = ProximitySearch::new(
        repo.clone(),
        SearchConfig {
            scan_oversample: 1,
            ..SearchConfig::default()
        },
    );

    let results = search
        .search(&query(1, 0), SearchStrategy::FullScan)
        .await
        .unwrap();

    // Only row 1 fits in the window and it is out of range.
    assert!(results.is_empty());
    assert_eq!(repo.scan_windows(), vec![(ScanFilter::None, 1, 0)]);
}

#[test]
async fn offset_skips_stored_candidates() {
    let repo = Arc::new(MockAddressRepo::default());
    repo.push(address_at(1, 0.0, 0.0));
    repo.push(address_at(2, 1.0, 0.0));
    repo.push(address_at(3, 2.0, 0.0));
    let search = ProximitySearch::new(repo, SearchConfig::default());

    let results = search
        .search(&query(10, 1), SearchStrategy::BoundingBox)
        .await
        .unwrap();

    let ids: Vec<i64> = results.iter().map(|m| m.address.id).collect();
    assert_eq!(ids, vec![2, 3]);
}
