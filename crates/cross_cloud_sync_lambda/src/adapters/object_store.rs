use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use cross_cloud_sync_core::config::SyncConfig;

pub trait SourceStore {
    fn read_object(&self, key: &str) -> Result<Vec<u8>, String>;
}

pub trait DestinationStore {
    fn write_object(&self, key: &str, body: &[u8]) -> Result<(), String>;
}

pub struct ConnectedStores {
    pub source: Box<dyn SourceStore>,
    pub destination: Box<dyn DestinationStore>,
}

/// Turns a validated configuration into connected source and destination
/// stores.
pub trait StoreConnector {
    fn connect(&self, config: &SyncConfig) -> Result<ConnectedStores, String>;
}

/// Process-local bucket used by the local runner and tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    objects: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_object(&self, key: &str, body: &[u8]) {
        if let Ok(mut objects) = self.objects.lock() {
            objects.insert(key.to_string(), body.to_vec());
        }
    }

    pub fn object(&self, key: &str) -> Option<Vec<u8>> {
        self.objects
            .lock()
            .ok()
            .and_then(|objects| objects.get(key).cloned())
    }

    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .objects
            .lock()
            .map(|objects| objects.keys().cloned().collect())
            .unwrap_or_default();
        keys.sort();
        keys
    }
}

impl SourceStore for InMemoryStore {
    fn read_object(&self, key: &str) -> Result<Vec<u8>, String> {
        let objects = self
            .objects
            .lock()
            .map_err(|_| "in-memory store lock poisoned".to_string())?;
        objects
            .get(key)
            .cloned()
            .ok_or_else(|| format!("NoSuchKey: the object '{key}' does not exist"))
    }
}

impl DestinationStore for InMemoryStore {
    fn write_object(&self, key: &str, body: &[u8]) -> Result<(), String> {
        let mut objects = self
            .objects
            .lock()
            .map_err(|_| "in-memory store lock poisoned".to_string())?;
        objects.insert(key.to_string(), body.to_vec());
        Ok(())
    }
}

/// Connects to a fixed pair of in-memory buckets regardless of configuration.
#[derive(Debug, Clone, Default)]
pub struct InMemoryConnector {
    pub source: InMemoryStore,
    pub destination: InMemoryStore,
}

impl StoreConnector for InMemoryConnector {
    fn connect(&self, _config: &SyncConfig) -> Result<ConnectedStores, String> {
        Ok(ConnectedStores {
            source: Box::new(self.source.clone()),
            destination: Box::new(self.destination.clone()),
        })
    }
}
