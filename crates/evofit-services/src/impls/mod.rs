// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

// Service implementations

pub mod fitness_store;

pub use fitness_store::InMemoryFitnessStore;
