//! Shared helpers for unit tests

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::data::{CourseItem, SearchBackend, SearchError};

/// Builds a course item whose link and snippet derive from its title
pub fn course(title: &str) -> CourseItem {
    CourseItem {
        title: title.to_string(),
        link: format!("http://{}", title.to_lowercase()),
        snippet: format!("{} snippet", title),
    }
}

/// In-memory search backend that records how it was called
#[derive(Debug, Default)]
pub struct FakeBackend {
    items: Vec<CourseItem>,
    fail: bool,
    calls: AtomicUsize,
    last_query: Mutex<Option<String>>,
}

impl FakeBackend {
    /// Backend that answers every query with `items`
    pub fn returning(items: Vec<CourseItem>) -> Self {
        Self {
            items,
            ..Default::default()
        }
    }

    /// Backend whose every search fails
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    /// Number of searches issued so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The most recent query, if any
    pub fn last_query(&self) -> Option<String> {
        self.last_query.lock().unwrap().clone()
    }
}

#[async_trait]
impl SearchBackend for FakeBackend {
    async fn search(&self, query: &str) -> Result<Vec<CourseItem>, SearchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_query.lock().unwrap() = Some(query.to_string());
        if self.fail {
            return Err(SearchError::MissingConfig("search API key"));
        }
        Ok(self.items.clone())
    }
}
