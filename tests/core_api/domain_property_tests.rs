// Property-based tests for the distance calculator and proximity ranking

use address_book::application::proximity::{rank_candidates, NearbyQuery};
use address_book::domain::geo::{calculate_distance, get_bounding_box, validate_coordinates};
use address_book::domain::{Address, AddressPatch};
use chrono::Utc;
use proptest::prelude::*;
use uuid::Uuid;

fn latitude() -> impl Strategy<Value = f64> {
    -89.999f64..89.999
}

fn longitude() -> impl Strategy<Value = f64> {
    -179.999f64..179.999
}

fn address(id: i64, latitude: f64, longitude: f64) -> Address {
    Address {
        id,
        uuid: Uuid::new_v4(),
        name: None,
        street: "1 Property Lane".to_string(),
        city: "Proptown".to_string(),
        state: "PT".to_string(),
        country: "Propland".to_string(),
        postal_code: None,
        building_number: None,
        apartment: None,
        latitude,
        longitude,
        created_at: Utc::now(),
        updated_at: None,
    }
}

proptest! {
    #[test]
    fn distance_to_self_is_zero(lat in latitude(), lon in longitude()) {
        prop_assert_eq!(calculate_distance(lat, lon, lat, lon).unwrap(), 0.0);
    }

    #[test]
    fn distance_is_symmetric(
        lat1 in latitude(), lon1 in longitude(),
        lat2 in latitude(), lon2 in longitude(),
    ) {
        let forward = calculate_distance(lat1, lon1, lat2, lon2).unwrap();
        let backward = calculate_distance(lat2, lon2, lat1, lon1).unwrap();
        prop_assert!((forward - backward).abs() <= 1e-4);
    }

    #[test]
    fn distance_is_bounded_by_half_circumference(
        lat1 in latitude(), lon1 in longitude(),
        lat2 in latitude(), lon2 in longitude(),
    ) {
        let distance = calculate_distance(lat1, lon1, lat2, lon2).unwrap();
        prop_assert!(distance >= 0.0);
        prop_assert!(distance <= std::f64::consts::PI * 6371.0 + 1e-3);
    }

    /// Rounding to four decimals can break the inequality by at most 1.5e-4 km.
    #[test]
    fn triangle_inequality_holds_approximately(
        lat1 in latitude(), lon1 in longitude(),
        lat2 in latitude(), lon2 in longitude(),
        lat3 in latitude(), lon3 in longitude(),
    ) {
        let ac = calculate_distance(lat1, lon1, lat3, lon3).unwrap();
        let ab = calculate_distance(lat1, lon1, lat2, lon2).unwrap();
        let bc = calculate_distance(lat2, lon2, lat3, lon3).unwrap();
        prop_assert!(ac <= ab + bc + 1e-3);
    }

    #[test]
    fn bounding_box_contains_center(
        lat in latitude(), lon in longitude(), radius in 0.001f64..5000.0,
    ) {
        let bbox = get_bounding_box(lat, lon, radius);
        prop_assert!(bbox.contains(lat, lon));
        prop_assert!(bbox.min_lat >= -90.0 && bbox.max_lat <= 90.0);
        prop_assert!(bbox.min_lon >= -180.0 && bbox.max_lon <= 180.0);
    }

    #[test]
    fn bounding_box_is_wider_nearer_the_poles(
        lat in 1.0f64..80.0, radius in 0.1f64..100.0,
    ) {
        let equator = get_bounding_box(0.0, 0.0, radius);
        let north = get_bounding_box(lat, 0.0, radius);
        prop_assert!(north.width_degrees() > equator.width_degrees());
    }

    #[test]
    fn validated_coordinates_are_strictly_inside_ranges(
        lat in -200.0f64..200.0, lon in -400.0f64..400.0,
    ) {
        let inside = lat > -90.0 && lat < 90.0 && lon > -180.0 && lon < 180.0;
        prop_assert_eq!(validate_coordinates(lat, lon), inside);
    }

    #[test]
    fn ranked_results_are_sorted_within_radius_and_limited(
        points in prop::collection::vec((-5.0f64..5.0, -5.0f64..5.0), 0..40),
        radius in 1.0f64..800.0,
        limit in 1i64..20,
    ) {
        let candidates = points
            .iter()
            .enumerate()
            .map(|(i, (lat, lon))| address(i as i64 + 1, *lat, *lon))
            .collect();
        let query = NearbyQuery { latitude: 0.0, longitude: 0.0, radius_km: radius, limit, offset: 0 };

        let ranked = rank_candidates(candidates, &query).unwrap();

        prop_assert!(ranked.len() as i64 <= limit);
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].distance_km <= pair[1].distance_km);
            if pair[0].distance_km == pair[1].distance_km {
                prop_assert!(pair[0].address.id < pair[1].address.id);
            }
        }
        for matched in &ranked {
            prop_assert!(matched.distance_km <= radius);
        }
    }

    #[test]
    fn patched_updated_at_never_precedes_created_at(offset_secs in -86_400i64..86_400) {
        let mut stored = address(1, 0.0, 0.0);
        let now = stored.created_at + chrono::Duration::seconds(offset_secs);

        stored.apply_patch(AddressPatch::default(), now).unwrap();

        prop_assert!(stored.updated_at.unwrap() >= stored.created_at);
    }
}
