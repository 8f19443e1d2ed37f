//! Cache module for storing search results to disk
//!
//! This module provides a cache manager that persists results to the filesystem
//! in a typed envelope carrying its expiry timestamp. Expired entries are still
//! readable and flagged with `is_expired`, so callers decide what stale means.

mod manager;

pub use manager::{default_cache_dir, CacheManager, CachedData};
