pub mod connector;
pub mod gcs;
pub mod invocation_log;
pub mod object_store;
pub mod s3;
