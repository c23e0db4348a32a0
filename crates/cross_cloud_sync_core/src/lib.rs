//! Shared cross-cloud sync domain primitives.
//!
//! This crate owns configuration validation, object locations and the
//! request/response contracts of the sync handler. It intentionally excludes
//! AWS SDK, Google Cloud SDK and Lambda runtime concerns, which live in
//! `cross_cloud_sync_lambda`.

pub mod config;
pub mod contract;
pub mod event;
pub mod locations;
