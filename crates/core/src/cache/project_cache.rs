use crate::{
    cache::{
        CacheEntry, CacheStore,
        store::{modification_time, stamp},
    },
    error::{Error, Result},
    types::ProjectId,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// In-memory per-project cache, optionally mirrored to one JSON file per
/// project scope so that separate invocations share results.
#[derive(Debug, Default)]
pub struct ProjectCache {
    entries: HashMap<ProjectId, BTreeMap<String, CacheEntry>>,
    cache_dir: Option<PathBuf>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ScopeFile {
    scope: ProjectId,
    entries: BTreeMap<String, CacheEntry>,
}

impl ProjectCache {
    pub fn new(cache_dir: Option<PathBuf>) -> Self {
        Self {
            entries: HashMap::new(),
            cache_dir,
        }
    }

    /// Build a cache and immediately load whatever was persisted
    pub fn open(cache_dir: PathBuf) -> Result<Self> {
        let mut cache = Self::new(Some(cache_dir));
        cache.load_from_disk()?;
        Ok(cache)
    }

    pub fn cache_dir(&self) -> Option<&Path> {
        self.cache_dir.as_deref()
    }

    pub fn get(&self, scope: &ProjectId, key: &str) -> Option<&CacheEntry> {
        self.entries.get(scope)?.get(key)
    }

    /// Every stored entry, ordered by scope then key
    pub fn entries(&self) -> Vec<(&ProjectId, &str, &CacheEntry)> {
        let mut all: Vec<_> = self
            .entries
            .iter()
            .flat_map(|(scope, keyed)| {
                keyed
                    .iter()
                    .map(move |(key, entry)| (scope, key.as_str(), entry))
            })
            .collect();
        all.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));
        all
    }

    pub fn is_empty(&self) -> bool {
        self.entries.values().all(BTreeMap::is_empty)
    }

    pub fn load_from_disk(&mut self) -> Result<()> {
        let Some(ref cache_dir) = self.cache_dir else {
            return Ok(());
        };
        if !cache_dir.exists() {
            return Ok(());
        }

        for entry in std::fs::read_dir(cache_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let parsed = std::fs::read_to_string(&path)
                .map_err(Error::from)
                .and_then(|contents| Ok(serde_json::from_str::<ScopeFile>(&contents)?));

            match parsed {
                Ok(file) => {
                    debug!(
                        "Loaded {} cache entries for {}",
                        file.entries.len(),
                        file.scope
                    );
                    self.entries.insert(file.scope, file.entries);
                }
                Err(e) => warn!("Skipping unreadable cache file {}: {}", path.display(), e),
            }
        }

        Ok(())
    }

    /// Store `entry` in memory and mirror its scope to disk. A failed write
    /// only costs persistence, so it is logged rather than returned.
    fn insert(&mut self, scope: &ProjectId, key: &str, entry: CacheEntry) {
        self.entries
            .entry(scope.clone())
            .or_default()
            .insert(key.to_string(), entry);
        if let Err(e) = self.save_scope_to_disk(scope) {
            warn!("Failed to persist cache for {}: {}", scope, e);
        }
    }

    fn save_scope_to_disk(&self, scope: &ProjectId) -> Result<()> {
        let Some(ref cache_dir) = self.cache_dir else {
            return Ok(());
        };
        std::fs::create_dir_all(cache_dir)?;

        let path = cache_dir.join(Self::scope_filename(scope));
        match self.entries.get(scope) {
            Some(entries) if !entries.is_empty() => {
                let file = ScopeFile {
                    scope: scope.clone(),
                    entries: entries.clone(),
                };
                let contents = serde_json::to_string_pretty(&file).map_err(|e| {
                    Error::CacheError(format!("Failed to serialize cache entry: {e}"))
                })?;
                std::fs::write(path, contents)?;
            }
            _ => {
                if path.exists() {
                    std::fs::remove_file(path)?;
                }
            }
        }

        Ok(())
    }

    fn scope_filename(scope: &ProjectId) -> String {
        format!("{:x}.json", md5::compute(scope.cache_key().as_bytes()))
    }
}

impl CacheStore for ProjectCache {
    fn get_or_compute_from<T, V, F>(
        &mut self,
        scope: &ProjectId,
        key: &str,
        source: Option<&Path>,
        is_valid: V,
        compute: F,
    ) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        V: FnOnce(&CacheEntry) -> bool,
        F: FnOnce() -> Result<T>,
    {
        if let Some(entry) = self.get(scope, key) {
            if is_valid(entry) {
                match serde_json::from_value::<T>(entry.value.clone()) {
                    Ok(value) => {
                        debug!("Cache hit for '{}' in {}", key, scope);
                        return Ok(value);
                    }
                    Err(e) => warn!("Discarding malformed cache entry '{}': {}", key, e),
                }
            } else {
                debug!("Cache entry '{}' in {} is stale", key, scope);
            }
        } else {
            debug!("Cache miss for '{}' in {}", key, scope);
        }

        let source_modified = source.and_then(modification_time);
        let value = compute()?;
        self.insert(scope, key, stamp(&value, source_modified)?);
        Ok(value)
    }

    fn invalidate(&mut self, scope: &ProjectId, key: &str) -> Result<bool> {
        let removed = self
            .entries
            .get_mut(scope)
            .and_then(|keyed| keyed.remove(key))
            .is_some();
        if removed {
            self.save_scope_to_disk(scope)?;
        }
        Ok(removed)
    }

    fn clear(&mut self) -> Result<()> {
        self.entries.clear();

        if let Some(ref cache_dir) = self.cache_dir {
            if cache_dir.exists() {
                std::fs::remove_dir_all(cache_dir)?;
            }
        }

        Ok(())
    }
}
