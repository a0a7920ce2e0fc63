// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

// Service trait definitions

pub mod fitness_service;

pub use fitness_service::FitnessService;
