// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Service layer DTOs.

All parameters and returns crossing the service boundary use these
transport-agnostic types.
*/

use evofit_structures::{normalize_activities, normalize_flags};
use serde::{Deserialize, Serialize};

/// Exact-match key for a best-fitness lookup.
///
/// `flags` and `activities` hold canonical normalizer output; the store
/// compares them byte for byte. Passing the key as typed fields keeps the
/// lookup parameterized end to end: no adapter ever assembles query text
/// by concatenation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BestFitnessQuery {
    /// Market symbol, e.g. `EURUSD`
    pub symbol: String,
    /// Chart period in minutes
    pub period: i64,
    /// Neuron count of the network
    pub number_of_neurons: usize,
    /// Canonical per-neuron flag vector
    pub flags: String,
    /// Canonical neuron-activity matrix
    pub activities: String,
}

impl BestFitnessQuery {
    /// Build a query from raw, untrusted payload text.
    ///
    /// Both payloads are canonicalized against `number_of_neurons`, so
    /// the resulting key always has the exact shape the store expects,
    /// regardless of input quality.
    pub fn from_raw(
        symbol: impl Into<String>,
        period: i64,
        number_of_neurons: usize,
        raw_flags: &str,
        raw_activities: &str,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            period,
            number_of_neurons,
            flags: normalize_flags(raw_flags, number_of_neurons),
            activities: normalize_activities(raw_activities, number_of_neurons),
        }
    }
}

/// A stored best-fitness record, used for snapshots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitnessRecord {
    pub query: BestFitnessQuery,
    pub fitness: f64,
}
