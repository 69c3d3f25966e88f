use super::KeyValueStore;
use crate::errors::AppResult;
use std::collections::BTreeMap;

/// Map-backed store, nothing persisted.
#[derive(Debug, Clone)]
pub struct MemoryStore<V> {
    map: BTreeMap<String, V>,
}

impl<V> MemoryStore<V> {
    pub fn new() -> Self {
        Self {
            map: BTreeMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<V> Default for MemoryStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, K: Into<String>> FromIterator<(K, V)> for MemoryStore<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            map: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<V: Clone> KeyValueStore for MemoryStore<V> {
    type Value = V;

    fn entries(&self) -> AppResult<Vec<(String, V)>> {
        Ok(self
            .map
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect())
    }

    fn get(&self, key: &str) -> AppResult<Option<V>> {
        Ok(self.map.get(key).cloned())
    }

    fn has(&self, key: &str) -> AppResult<bool> {
        Ok(self.map.contains_key(key))
    }

    fn set(&mut self, key: &str, value: V) -> AppResult<()> {
        self.map.insert(key.to_string(), value);
        Ok(())
    }

    fn set_many(&mut self, entries: BTreeMap<String, V>) -> AppResult<()> {
        self.map.extend(entries);
        Ok(())
    }

    fn delete(&mut self, key: &str) -> AppResult<bool> {
        Ok(self.map.remove(key).is_some())
    }

    fn clear(&mut self) -> AppResult<()> {
        self.map.clear();
        Ok(())
    }
}
