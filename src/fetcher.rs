//! Cache-aside course fetching
//!
//! Looks up fresh results in the disk cache before asking the search backend,
//! and stores every successful search back into the cache.

use chrono::{DateTime, Duration, Utc};

use crate::cache::CacheManager;
use crate::data::{search_query, CourseCategory, CourseItem, SearchBackend, SearchError};

/// How long fetched results stay fresh by default (one hour)
pub const DEFAULT_TTL_MINUTES: i64 = 60;

/// Where a set of results came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultSource {
    /// Served from a fresh cache entry written at the given time
    Cache { cached_at: DateTime<Utc> },
    /// Fetched live from the search backend
    Network,
}

/// Results of a fetch along with their provenance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutcome {
    pub items: Vec<CourseItem>,
    pub source: ResultSource,
}

/// Fetches course suggestions through a disk cache
#[derive(Debug, Clone)]
pub struct CourseFetcher<B> {
    backend: B,
    cache: Option<CacheManager>,
    ttl: Duration,
}

impl<B: SearchBackend> CourseFetcher<B> {
    /// Creates a fetcher with the default one hour TTL
    ///
    /// Passing `None` for `cache` disables both cache reads and writes.
    pub fn new(backend: B, cache: Option<CacheManager>) -> Self {
        Self {
            backend,
            cache,
            ttl: Duration::minutes(DEFAULT_TTL_MINUTES),
        }
    }

    /// Overrides how long fetched results stay fresh
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Returns the search backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Returns the configured TTL
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Resolves course suggestions for a topic
    ///
    /// # Returns
    /// * `Ok(None)` - The topic is empty; nothing was looked up
    /// * `Ok(Some(FetchOutcome))` - Results from a fresh cache entry or the backend
    /// * `Err(SearchError)` - The backend failed; the cache is left untouched
    pub async fn fetch(&self, topic: &str) -> Result<Option<FetchOutcome>, SearchError> {
        if topic.is_empty() {
            return Ok(None);
        }

        let key = CourseCategory::for_topic(topic).cache_key();

        if let Some(ref cache) = self.cache {
            match cache.read::<Vec<CourseItem>>(key) {
                Some(cached) if !cached.is_expired => {
                    log::debug!("Cache hit for {} ({} items)", key, cached.data.len());
                    return Ok(Some(FetchOutcome {
                        items: cached.data,
                        source: ResultSource::Cache {
                            cached_at: cached.cached_at,
                        },
                    }));
                }
                Some(_) => log::debug!("Cache entry for {} expired", key),
                None => log::debug!("Cache miss for {}", key),
            }
        }

        let query = search_query(topic);
        log::info!("Searching courses: {:?}", query);
        let items = self.backend.search(&query).await?;

        if let Some(ref cache) = self.cache {
            if let Err(e) = cache.write(key, &items, self.ttl) {
                log::warn!("Failed to write cache entry {}: {}", key, e);
            }
        }

        Ok(Some(FetchOutcome {
            items,
            source: ResultSource::Network,
        }))
    }
}
