use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Raw text key-value container scoped to one session.
///
/// Mirrors the browser's session storage: string keys, string values, and a
/// missing key is distinct from any stored value.
pub trait SessionBackend {
    fn get_item(&self, key: &str) -> anyhow::Result<Option<String>>;

    fn set_item(&mut self, key: &str, value: &str) -> anyhow::Result<()>;

    fn remove_item(&mut self, key: &str) -> anyhow::Result<()>;

    fn contains_key(&self, key: &str) -> anyhow::Result<bool> {
        Ok(self.get_item(key)?.is_some())
    }

    fn get_json<T: DeserializeOwned>(&self, key: &str) -> anyhow::Result<Option<T>>
    where
        Self: Sized,
    {
        match self.get_item(key)? {
            Some(raw) => {
                let value = serde_json::from_str(&raw)
                    .map_err(|e| anyhow::anyhow!("Failed to decode {}: {}", key, e))?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    fn set_json<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> anyhow::Result<()>
    where
        Self: Sized,
    {
        let raw = serde_json::to_string(value)?;
        self.set_item(key, &raw)
    }
}

/// In-memory session container.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    items: HashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl SessionBackend for MemoryBackend {
    fn get_item(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> anyhow::Result<()> {
        self.items.remove(key);
        Ok(())
    }
}
