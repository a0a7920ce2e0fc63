//! End-to-end pipeline through the umbrella crate: raw trainer payloads
//! are canonicalized, recorded, and queried back by exact shape.

use evofit::services::{BestFitnessQuery, FitnessService, InMemoryFitnessStore};
use evofit::structures::{normalize_activities, normalize_flags};

#[tokio::test]
async fn raw_payloads_roundtrip_through_store() {
    let store = InMemoryFitnessStore::new();

    // A trainer submits sloppy payloads: short flags, flat activities.
    let submitted = BestFitnessQuery::from_raw("EURUSD", 60, 3, "1 1", "0.5 0 0 0 0.5");
    store.store_best_fitness(&submitted, 0.0625).await.unwrap();

    // Another client asks with differently-formatted but equivalent text.
    let queried = BestFitnessQuery::from_raw("EURUSD", 60, 3, "1 1 x", "0.5 0 0\r\n0 0.5");
    assert_eq!(
        store.load_best_fitness(&queried).await.unwrap(),
        Some(0.0625)
    );
}

#[test]
fn canonical_payloads_match_their_own_normalization() {
    let flags = normalize_flags("4 -2 0 19", 4);
    let activities = normalize_activities("0.25 0.5 1 2", 2);
    assert_eq!(normalize_flags(&flags, 4), flags);
    assert_eq!(normalize_activities(&activities, 2), activities);
}
