//! Cache manager for persisting search results to disk
//!
//! Provides a `CacheManager` that stores serializable data to JSON files
//! wrapped in an envelope carrying its own expiry timestamp.

use chrono::{DateTime, Duration, Utc};
use directories::ProjectDirs;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Wrapper struct for cached data stored on disk
#[derive(Debug, Serialize, Deserialize)]
struct CacheEntry<T> {
    /// The cached data
    data: T,
    /// When the data was cached
    cached_at: DateTime<Utc>,
    /// When the cache entry expires
    expires_at: DateTime<Utc>,
}

/// Result of reading from cache, including metadata about cache freshness
#[derive(Debug)]
pub struct CachedData<T> {
    /// The cached data
    pub data: T,
    /// When the data was originally cached
    pub cached_at: DateTime<Utc>,
    /// Whether the cache entry has expired
    pub is_expired: bool,
}

/// Manages reading and writing cached data to disk
///
/// Entries live as `<key>.json` files in an XDG-compliant cache directory
/// (`~/.cache/coursefinder/` on Linux). An entry is fresh only while the
/// current time is strictly before its `expires_at`. Expired entries are
/// never removed; the next successful write simply overwrites them.
#[derive(Debug, Clone)]
pub struct CacheManager {
    /// Directory where cache files are stored
    cache_dir: PathBuf,
}

impl CacheManager {
    /// Creates a new CacheManager using XDG-compliant cache directory
    ///
    /// Returns `None` if the cache directory cannot be determined (e.g., no home directory).
    pub fn new() -> Option<Self> {
        Some(Self {
            cache_dir: default_cache_dir()?,
        })
    }

    /// Creates a new CacheManager with a custom cache directory
    pub fn with_dir(cache_dir: PathBuf) -> Self {
        Self { cache_dir }
    }

    /// Returns the directory this cache writes to
    pub fn dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Returns the path to a cache file for the given key
    fn cache_path(&self, key: &str) -> PathBuf {
        self.cache_dir.join(format!("{}.json", key))
    }

    /// Ensures the cache directory exists
    fn ensure_dir(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.cache_dir)
    }

    /// Writes data to the cache, valid for `ttl` from now
    pub fn write<T: Serialize>(&self, key: &str, data: &T, ttl: Duration) -> std::io::Result<()> {
        self.write_at(key, data, ttl, Utc::now())
    }

    /// Writes data to the cache as if the current time were `now`
    ///
    /// # Arguments
    /// * `key` - Unique identifier for the cache entry (e.g., "AICourses")
    /// * `data` - The data to cache
    /// * `ttl` - How long the entry stays fresh
    /// * `now` - Timestamp recorded as `cached_at`
    pub fn write_at<T: Serialize>(
        &self,
        key: &str,
        data: &T,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> std::io::Result<()> {
        let expires_at = now.checked_add_signed(ttl).ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("cache TTL {} overflows the expiry time", ttl),
            )
        })?;

        self.ensure_dir()?;

        let entry = CacheEntry {
            data,
            cached_at: now,
            expires_at,
        };

        let json = serde_json::to_string_pretty(&entry)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        fs::write(self.cache_path(key), json)
    }

    /// Reads data from the cache
    ///
    /// Returns `None` if the cache entry doesn't exist or cannot be parsed.
    /// Expired entries are still returned, flagged with `is_expired = true`.
    pub fn read<T: DeserializeOwned>(&self, key: &str) -> Option<CachedData<T>> {
        self.read_at(key, Utc::now())
    }

    /// Reads data from the cache, judging freshness against `now`
    pub fn read_at<T: DeserializeOwned>(
        &self,
        key: &str,
        now: DateTime<Utc>,
    ) -> Option<CachedData<T>> {
        let path = self.cache_path(key);
        let content = fs::read_to_string(path).ok()?;
        let entry: CacheEntry<T> = serde_json::from_str(&content).ok()?;

        Some(CachedData {
            data: entry.data,
            cached_at: entry.cached_at,
            is_expired: now >= entry.expires_at,
        })
    }
}

/// Returns the platform cache directory for the application, if any
pub fn default_cache_dir() -> Option<PathBuf> {
    let project_dirs = ProjectDirs::from("", "", "coursefinder")?;
    Some(project_dirs.cache_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct TestData {
        name: String,
        value: i32,
    }

    fn create_test_cache() -> (CacheManager, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let cache = CacheManager::with_dir(temp_dir.path().to_path_buf());
        (cache, temp_dir)
    }

    fn sample(name: &str, value: i32) -> TestData {
        TestData {
            name: name.to_string(),
            value,
        }
    }

    #[test]
    fn test_write_creates_file_in_cache_directory() {
        let (cache, temp_dir) = create_test_cache();

        cache
            .write("Courses", &sample("test", 42), Duration::hours(1))
            .expect("Write should succeed");

        let expected_path = temp_dir.path().join("Courses.json");
        assert!(expected_path.exists(), "Cache file should exist");

        let content = fs::read_to_string(&expected_path).expect("Should read file");
        assert!(content.contains("\"expires_at\""));
        assert!(content.contains("\"test\""));
    }

    #[test]
    fn test_read_returns_none_for_missing_key() {
        let (cache, _temp_dir) = create_test_cache();

        let result: Option<CachedData<TestData>> = cache.read("AICourses");

        assert!(result.is_none(), "Should return None for missing key");
    }

    #[test]
    fn test_read_returns_none_for_corrupt_file() {
        let (cache, temp_dir) = create_test_cache();
        fs::write(temp_dir.path().join("Courses.json"), "not json").unwrap();

        let result: Option<CachedData<TestData>> = cache.read("Courses");

        assert!(result.is_none());
    }

    #[test]
    fn test_entry_is_fresh_until_just_before_expiry() {
        let (cache, _temp_dir) = create_test_cache();
        let written_at = Utc::now();
        let data = sample("fresh", 100);

        cache
            .write_at("Courses", &data, Duration::hours(1), written_at)
            .unwrap();

        let just_before = written_at + Duration::milliseconds(3_599_999);
        let result: CachedData<TestData> = cache.read_at("Courses", just_before).unwrap();

        assert_eq!(result.data, data);
        assert!(!result.is_expired, "Entry should be fresh inside the TTL");
    }

    #[test]
    fn test_entry_is_expired_at_expiry_instant() {
        let (cache, _temp_dir) = create_test_cache();
        let written_at = Utc::now();

        cache
            .write_at("Courses", &sample("stale", 0), Duration::hours(1), written_at)
            .unwrap();

        let at_expiry = written_at + Duration::hours(1);
        let result: CachedData<TestData> = cache.read_at("Courses", at_expiry).unwrap();

        assert!(result.is_expired, "Entry should expire once now reaches expires_at");
        assert_eq!(result.data.name, "stale", "Expired data is still returned");
    }

    #[test]
    fn test_zero_ttl_expires_immediately() {
        let (cache, _temp_dir) = create_test_cache();

        cache
            .write("AICourses", &sample("instant", 1), Duration::zero())
            .unwrap();

        let result: CachedData<TestData> = cache.read("AICourses").unwrap();
        assert!(result.is_expired);
    }

    #[test]
    fn test_overflowing_ttl_is_rejected() {
        let (cache, temp_dir) = create_test_cache();

        let err = cache
            .write("Courses", &sample("test", 1), Duration::minutes(1_000_000_000_000))
            .unwrap_err();

        assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
        assert!(!temp_dir.path().join("Courses.json").exists());
    }

    #[test]
    fn test_write_creates_directory_if_missing() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let nested_path = temp_dir.path().join("nested").join("cache").join("dir");
        let cache = CacheManager::with_dir(nested_path.clone());

        cache
            .write("Courses", &sample("nested", 1), Duration::hours(1))
            .expect("Write should succeed");

        assert!(nested_path.join("Courses.json").exists(), "Cache file should exist");
        assert_eq!(cache.dir(), nested_path.as_path());
    }

    #[test]
    fn test_cached_at_timestamp_is_recorded() {
        let (cache, _temp_dir) = create_test_cache();

        let before = Utc::now();
        cache
            .write("Courses", &sample("timestamp", 999), Duration::hours(1))
            .unwrap();
        let after = Utc::now();

        let result: CachedData<TestData> = cache.read("Courses").unwrap();

        assert!(result.cached_at >= before);
        assert!(result.cached_at <= after);
    }

    #[test]
    fn test_keys_are_stored_independently() {
        let (cache, _temp_dir) = create_test_cache();

        cache
            .write("Courses", &sample("roadmap", 1), Duration::hours(1))
            .unwrap();
        cache
            .write("AICourses", &sample("ai", 2), Duration::hours(1))
            .unwrap();

        let courses: CachedData<TestData> = cache.read("Courses").unwrap();
        let ai: CachedData<TestData> = cache.read("AICourses").unwrap();
        assert_eq!(courses.data.name, "roadmap");
        assert_eq!(ai.data.name, "ai");
    }

    #[test]
    fn test_overwrite_existing_cache() {
        let (cache, _temp_dir) = create_test_cache();

        cache
            .write("Courses", &sample("first", 1), Duration::hours(1))
            .unwrap();
        cache
            .write("Courses", &sample("second", 2), Duration::hours(1))
            .unwrap();

        let result: CachedData<TestData> = cache.read("Courses").unwrap();

        assert_eq!(result.data, sample("second", 2), "Cache should contain latest data");
    }

    #[test]
    fn test_default_cache_dir_is_xdg_compliant() {
        if let Some(dir) = default_cache_dir() {
            assert!(dir.to_string_lossy().contains("coursefinder"));
        }
        // Passes if no home directory is available (e.g. in CI)
    }
}
