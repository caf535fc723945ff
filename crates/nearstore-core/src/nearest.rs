//! Nearest-store selection over the validated dataset.

use crate::geo::{distance_miles, Coordinate};
use crate::stores::StoreLocation;

/// A selected store together with its great-circle distance from the query.
#[derive(Debug, Clone, Copy)]
pub struct NearestMatch<'a> {
    pub store: &'a StoreLocation,
    pub distance_miles: f64,
}

/// Find the store closest to `query` by great-circle distance.
///
/// Linear scan; ties keep the first-encountered store, so the result is
/// deterministic for a fixed dataset order. Returns `None` only when
/// `stores` is empty. At this data scale no index is needed; a grid or k-d
/// tree would be a drop-in replacement behind the same signature.
///
/// Callers must pass validated stores (finite coordinates) — the dataset
/// loader filters malformed records before they can reach selection.
#[must_use]
pub fn nearest_store<'a>(
    query: Coordinate,
    stores: &'a [StoreLocation],
) -> Option<NearestMatch<'a>> {
    let mut best: Option<NearestMatch<'a>> = None;
    for store in stores {
        let d = distance_miles(query, store.coordinate);
        let closer = match best {
            Some(ref m) => d < m.distance_miles,
            None => true,
        };
        if closer {
            best = Some(NearestMatch {
                store,
                distance_miles: d,
            });
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(id: u32, name: &str, lat: f64, lng: f64) -> StoreLocation {
        StoreLocation {
            id,
            name: name.to_string(),
            address: None,
            coordinate: Coordinate::new(lat, lng),
            description: None,
            coming_soon: false,
            image: None,
        }
    }

    #[test]
    fn empty_set_returns_none() {
        assert!(nearest_store(Coordinate::new(40.0, -75.0), &[]).is_none());
    }

    #[test]
    fn single_candidate_wins_regardless_of_distance() {
        let stores = vec![store(1, "Philly", 40.0, -75.0)];
        // ~69 miles away; still the only candidate.
        let m = nearest_store(Coordinate::new(41.0, -75.0), &stores).unwrap();
        assert_eq!(m.store.id, 1);
        assert!((m.distance_miles - 69.0).abs() < 0.2);
    }

    #[test]
    fn picks_the_closer_of_two() {
        let stores = vec![
            store(1, "NYC", 40.712_8, -74.006),
            store(2, "Chicago", 41.878_1, -87.629_8),
        ];
        let near_chicago = Coordinate::new(41.9, -87.7);
        assert_eq!(nearest_store(near_chicago, &stores).unwrap().store.id, 2);
    }

    #[test]
    fn ties_keep_the_first_in_dataset_order() {
        // Two stores mirrored east/west of the query: equal distance.
        let stores = vec![
            store(7, "East", 40.0, -74.0),
            store(8, "West", 40.0, -76.0),
        ];
        let midway = Coordinate::new(40.0, -75.0);
        assert_eq!(nearest_store(midway, &stores).unwrap().store.id, 7);
    }

    #[test]
    fn selection_is_deterministic() {
        let stores = vec![
            store(1, "A", 33.0, -97.0),
            store(2, "B", 34.0, -98.0),
            store(3, "C", 35.0, -99.0),
        ];
        let q = Coordinate::new(34.4, -98.3);
        let first = nearest_store(q, &stores).unwrap().store.id;
        for _ in 0..10 {
            assert_eq!(nearest_store(q, &stores).unwrap().store.id, first);
        }
    }

    #[test]
    fn store_coordinate_round_trips_to_itself() {
        let stores = vec![
            store(1, "A", 30.267_2, -97.743_1),
            store(2, "B", 32.776_7, -96.797),
            store(3, "C", 29.760_4, -95.369_8),
        ];
        for s in &stores {
            let m = nearest_store(s.coordinate, &stores).unwrap();
            assert_eq!(m.store.id, s.id);
            assert!(m.distance_miles.abs() < 1e-9);
        }
    }
}
