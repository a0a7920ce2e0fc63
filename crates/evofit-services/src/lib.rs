// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
# Evofit Service Layer

The stable application boundary for evofit - defines transport-agnostic
service interfaces that can be used by any adapter.

## Architecture

```text
┌─────────────────────────────────────────────────┐
│               TRANSPORT ADAPTERS                 │
│  Axum/REST (evofit-api)                          │
└───────────────────────┬─────────────────────────┘
                        ↓
┌─────────────────────────────────────────────────┐
│           SERVICE LAYER (This Crate)             │
│  • FitnessService - best-fitness lookup/record  │
└───────────────────────┬─────────────────────────┘
                        ↓
┌─────────────────────────────────────────────────┐
│                  DATA LAYER                      │
│  evofit-structures (canonical payloads)          │
└─────────────────────────────────────────────────┘
```

## Design Principles

1. **Transport-Agnostic**: Services know nothing about HTTP
2. **Stable Contracts**: Trait interfaces don't change when the backend
   changes
3. **Typed Parameters**: Lookups take a typed query struct; no query text
   is ever assembled from strings
4. **Error Translation**: Backend errors are translated to the
   transport-agnostic `ServiceError`
*/

pub mod impls;
pub mod traits;
pub mod types;

// Re-export main API
pub use traits::FitnessService;

pub use types::{BestFitnessQuery, FitnessRecord, ServiceError, ServiceResult};

pub use impls::InMemoryFitnessStore;
