pub use cross_cloud_sync_core::{config, contract, event, locations};
