//! AWS-oriented adapters and handlers for the cross-cloud configuration sync.
//!
//! This crate owns runtime integration details (Lambda handler, S3 and Cloud
//! Storage adapters, structured invocation logging) and exposes a single
//! runtime module boundary for the contract, configuration and location
//! primitives of `cross_cloud_sync_core`.

pub mod adapters;
pub mod handlers;
pub mod runtime;
