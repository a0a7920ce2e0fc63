// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Best-fitness service trait.

Defines the stable interface for the persistence collaborator that holds
the best known fitness per network shape.
*/

use crate::types::*;
use async_trait::async_trait;

/// Best-fitness lookup and recording (transport-agnostic)
#[async_trait]
pub trait FitnessService: Send + Sync {
    /// Look up the best known fitness for an exact network shape.
    ///
    /// # Arguments
    /// * `query` - Canonical lookup key
    ///
    /// # Returns
    /// * `Some(fitness)` - Best fitness on record for this key
    /// * `None` - No matching record
    ///
    async fn load_best_fitness(&self, query: &BestFitnessQuery) -> ServiceResult<Option<f64>>;

    /// Record a fitness value for a network shape.
    ///
    /// Lower is better: the record is created or replaced only when
    /// `fitness` beats the stored value.
    ///
    /// # Returns
    /// * `bool` - Whether the record was created or replaced
    ///
    /// # Errors
    /// * `ServiceError::InvalidInput` - `fitness` is not a number
    ///
    async fn store_best_fitness(
        &self,
        query: &BestFitnessQuery,
        fitness: f64,
    ) -> ServiceResult<bool>;

    /// Number of records currently held.
    async fn record_count(&self) -> ServiceResult<usize>;
}
