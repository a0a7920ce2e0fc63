// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
In-memory fitness store.

Default implementation of [`FitnessService`]: an exact-match map from
canonical network shapes to their best known fitness, with optional
bincode snapshots on disk so records survive restarts.
*/

use crate::traits::FitnessService;
use crate::types::*;
use ahash::AHashMap;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::path::Path;
use tracing::debug;

/// Default implementation of [`FitnessService`]
#[derive(Debug, Default)]
pub struct InMemoryFitnessStore {
    records: RwLock<AHashMap<BestFitnessQuery, f64>>,
}

impl InMemoryFitnessStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Save all records to a snapshot file
    pub fn save_to_file(&self, path: &Path) -> ServiceResult<()> {
        let records: Vec<FitnessRecord> = self
            .records
            .read()
            .iter()
            .map(|(query, fitness)| FitnessRecord {
                query: query.clone(),
                fitness: *fitness,
            })
            .collect();

        let encoded = bincode::serialize(&records)
            .map_err(|e| ServiceError::Persistence(format!("Serialize failed: {}", e)))?;

        std::fs::write(path, encoded)
            .map_err(|e| ServiceError::Persistence(format!("Write failed: {}", e)))?;

        Ok(())
    }

    /// Load a store from a snapshot file
    pub fn load_from_file(path: &Path) -> ServiceResult<Self> {
        let data = std::fs::read(path)
            .map_err(|e| ServiceError::Persistence(format!("Read failed: {}", e)))?;

        let records: Vec<FitnessRecord> = bincode::deserialize(&data)
            .map_err(|e| ServiceError::Persistence(format!("Deserialize failed: {}", e)))?;

        let map: AHashMap<BestFitnessQuery, f64> = records
            .into_iter()
            .map(|record| (record.query, record.fitness))
            .collect();

        Ok(Self {
            records: RwLock::new(map),
        })
    }
}

#[async_trait]
impl FitnessService for InMemoryFitnessStore {
    async fn load_best_fitness(&self, query: &BestFitnessQuery) -> ServiceResult<Option<f64>> {
        let fitness = self.records.read().get(query).copied();
        debug!(
            target: "evofit-services",
            "Best fitness lookup: symbol={} period={} neurons={} hit={}",
            query.symbol,
            query.period,
            query.number_of_neurons,
            fitness.is_some()
        );
        Ok(fitness)
    }

    async fn store_best_fitness(
        &self,
        query: &BestFitnessQuery,
        fitness: f64,
    ) -> ServiceResult<bool> {
        if fitness.is_nan() {
            return Err(ServiceError::InvalidInput(
                "fitness must be a number".to_string(),
            ));
        }

        let mut records = self.records.write();
        let improved = match records.get_mut(query) {
            // Lower is better; ties keep the existing record.
            Some(existing) if *existing <= fitness => false,
            Some(existing) => {
                *existing = fitness;
                true
            }
            None => {
                records.insert(query.clone(), fitness);
                true
            }
        };

        debug!(
            target: "evofit-services",
            "Recorded fitness {} for symbol={} period={} neurons={} improved={}",
            fitness, query.symbol, query.period, query.number_of_neurons, improved
        );
        Ok(improved)
    }

    async fn record_count(&self) -> ServiceResult<usize> {
        Ok(self.records.read().len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query() -> BestFitnessQuery {
        BestFitnessQuery::from_raw("EURUSD", 60, 2, "1 0", "0.5 0 0 0.5")
    }

    #[tokio::test]
    async fn missing_record_yields_none() {
        let store = InMemoryFitnessStore::new();
        assert_eq!(store.load_best_fitness(&query()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn stored_record_is_found_by_exact_match() {
        let store = InMemoryFitnessStore::new();
        assert!(store.store_best_fitness(&query(), 0.5).await.unwrap());
        assert_eq!(
            store.load_best_fitness(&query()).await.unwrap(),
            Some(0.5)
        );

        // A different shape is a different key.
        let other = BestFitnessQuery::from_raw("EURUSD", 60, 2, "0 0", "0.5 0 0 0.5");
        assert_eq!(store.load_best_fitness(&other).await.unwrap(), None);
    }

    #[tokio::test]
    async fn only_lower_fitness_replaces_the_record() {
        let store = InMemoryFitnessStore::new();
        assert!(store.store_best_fitness(&query(), 0.5).await.unwrap());
        assert!(!store.store_best_fitness(&query(), 0.75).await.unwrap());
        assert!(!store.store_best_fitness(&query(), 0.5).await.unwrap());
        assert!(store.store_best_fitness(&query(), 0.25).await.unwrap());
        assert_eq!(
            store.load_best_fitness(&query()).await.unwrap(),
            Some(0.25)
        );
    }

    #[tokio::test]
    async fn nan_fitness_is_rejected() {
        let store = InMemoryFitnessStore::new();
        let err = store
            .store_best_fitness(&query(), f64::NAN)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)));
        assert_eq!(store.record_count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn record_count_tracks_distinct_keys() {
        let store = InMemoryFitnessStore::new();
        store.store_best_fitness(&query(), 0.5).await.unwrap();
        store.store_best_fitness(&query(), 0.25).await.unwrap();
        let other = BestFitnessQuery::from_raw("GBPUSD", 240, 1, "1", "0.5");
        store.store_best_fitness(&other, 1.0).await.unwrap();
        assert_eq!(store.record_count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn snapshot_roundtrip_preserves_records() {
        let store = InMemoryFitnessStore::new();
        store.store_best_fitness(&query(), 0.125).await.unwrap();
        let other = BestFitnessQuery::from_raw("GBPUSD", 240, 1, "1", "0.5");
        store.store_best_fitness(&other, 2.5).await.unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fitness.bin");
        store.save_to_file(&path).unwrap();

        let loaded = InMemoryFitnessStore::load_from_file(&path).unwrap();
        assert_eq!(loaded.record_count().await.unwrap(), 2);
        assert_eq!(
            loaded.load_best_fitness(&query()).await.unwrap(),
            Some(0.125)
        );
        assert_eq!(loaded.load_best_fitness(&other).await.unwrap(), Some(2.5));
    }

    #[tokio::test]
    async fn loading_a_missing_snapshot_is_a_persistence_error() {
        let err = InMemoryFitnessStore::load_from_file(Path::new("/nonexistent/fitness.bin"))
            .unwrap_err();
        assert!(matches!(err, ServiceError::Persistence(_)));
    }
}
