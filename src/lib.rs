//! # Gearlog
//!
//! A local backpacking gear tracker with pack weight analytics.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (gear items, categories, pack lists, goals)
//! - **calculate**: The pack weight aggregation engine (pure functions)
//! - **storage**: Filesystem catalog operations (JSONL)
//! - **api**: REST API endpoints
//! - **config**: Configuration loading and validation

pub mod api;
pub mod calculate;
pub mod config;
pub mod models;
pub mod storage;

pub use models::*;
