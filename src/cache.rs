use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Default lifetime shared by every lookup kind.
pub const DEFAULT_TTL_SECS: i64 = 3600;

/// Which remote lookup a cached value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Profile,
    Ranked,
    MatchIds,
    MatchDetail,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Profile => "profile",
            Stage::Ranked => "ranked",
            Stage::MatchIds => "match-ids",
            Stage::MatchDetail => "match-detail",
        };
        f.write_str(name)
    }
}

/// `(stage, identifier)` pair used to key every remote lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub stage: Stage,
    pub id: String,
}

impl CacheKey {
    pub fn new(stage: Stage, id: impl Into<String>) -> Self {
        CacheKey {
            stage,
            id: id.into(),
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.stage, self.id)
    }
}

#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    pub value: V,
    /// `None` when `now + ttl` is past the representable range; such an
    /// entry never expires.
    pub expires_at: Option<DateTime<Utc>>,
}

impl<V> CacheEntry<V> {
    pub fn is_live(&self) -> bool {
        self.expires_at.map_or(true, |at| Utc::now() < at)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u32,
    pub misses: u32,
    pub entries: usize,
}

/// In-memory key -> (value, expiry) store living for one run.
///
/// Guarantees at most one cached result per key, not at most one producer in
/// flight; callers are single-threaded.
pub struct TtlCache<K, V> {
    entries: HashMap<K, CacheEntry<V>>,
    default_ttl: Duration,
    hits: u32,
    misses: u32,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash + Clone + fmt::Display,
    V: Clone,
{
    pub fn new() -> Self {
        Self::with_default_ttl(Duration::seconds(DEFAULT_TTL_SECS))
    }

    pub fn with_default_ttl(default_ttl: Duration) -> Self {
        TtlCache {
            entries: HashMap::new(),
            default_ttl,
            hits: 0,
            misses: 0,
        }
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    /// Live value for `key`, if any. Does not touch the hit/miss counters.
    pub fn get(&self, key: &K) -> Option<V> {
        self.entries
            .get(key)
            .filter(|entry| entry.is_live())
            .map(|entry| entry.value.clone())
    }

    /// Returns the live value for `key`, or runs `producer` once and stores its
    /// result with expiry `now + ttl`. A failing producer stores nothing and its
    /// error is returned as-is.
    pub fn get_or_compute<E, F>(&mut self, key: K, ttl: Duration, producer: F) -> Result<V, E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        if let Some(value) = self.get(&key) {
            log::debug!("Cache hit for key: {}", key);
            self.hits += 1;
            return Ok(value);
        }

        log::debug!("Cache miss for key: {}", key);
        self.misses += 1;
        let value = producer()?;

        self.entries.insert(
            key.clone(),
            CacheEntry {
                value: value.clone(),
                expires_at: Utc::now().checked_add_signed(ttl),
            },
        );
        log::debug!("Stored in cache with key: {}", key);

        Ok(value)
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            entries: self.entries.len(),
        }
    }
}

impl<K, V> Default for TtlCache<K, V>
where
    K: Eq + Hash + Clone + fmt::Display,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
