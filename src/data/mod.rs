//! Core data models for Course Finder CLI
//!
//! This module contains the course record shown to the user, the cache
//! category a topic maps to, and the search API client.

pub mod search;

pub use search::{SearchBackend, SearchClient, SearchError};

use serde::{Deserialize, Serialize};

/// A single course suggestion normalized from a search result item
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CourseItem {
    /// Title of the linked page
    #[serde(default)]
    pub title: String,
    /// External URL of the course page
    #[serde(default)]
    pub link: String,
    /// Short description returned by the search engine
    #[serde(default)]
    pub snippet: String,
}

/// Cache category for a topic
///
/// AI results and roadmap results are cached separately so that browsing
/// AI courses never evicts the personalised roadmap suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseCategory {
    /// Suggestions for a roadmap-derived topic
    Courses,
    /// Suggestions for the fixed "AI" topic
    AiCourses,
}

impl CourseCategory {
    /// Determines the category for a topic (case-insensitive match on "ai")
    pub fn for_topic(topic: &str) -> Self {
        if topic.eq_ignore_ascii_case("ai") {
            CourseCategory::AiCourses
        } else {
            CourseCategory::Courses
        }
    }

    /// Returns the cache key used to persist results for this category
    pub fn cache_key(self) -> &'static str {
        match self {
            CourseCategory::Courses => "Courses",
            CourseCategory::AiCourses => "AICourses",
        }
    }
}

/// Builds the free-form search query for a topic
pub fn search_query(topic: &str) -> String {
    format!("free {} courses", topic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_for_ai_topic_is_case_insensitive() {
        assert_eq!(CourseCategory::for_topic("AI"), CourseCategory::AiCourses);
        assert_eq!(CourseCategory::for_topic("ai"), CourseCategory::AiCourses);
        assert_eq!(CourseCategory::for_topic("Ai"), CourseCategory::AiCourses);
    }

    #[test]
    fn test_category_for_other_topics() {
        assert_eq!(CourseCategory::for_topic("Rust"), CourseCategory::Courses);
        assert_eq!(
            CourseCategory::for_topic("AI Engineering"),
            CourseCategory::Courses
        );
    }

    #[test]
    fn test_cache_keys() {
        assert_eq!(CourseCategory::Courses.cache_key(), "Courses");
        assert_eq!(CourseCategory::AiCourses.cache_key(), "AICourses");
    }

    #[test]
    fn test_search_query_template() {
        assert_eq!(search_query("AI"), "free AI courses");
        assert_eq!(search_query("Web Development"), "free Web Development courses");
    }

    #[test]
    fn test_course_item_missing_fields_default_to_empty() {
        let item: CourseItem =
            serde_json::from_str(r#"{"title":"Intro"}"#).expect("Should parse partial item");
        assert_eq!(item.title, "Intro");
        assert!(item.link.is_empty());
        assert!(item.snippet.is_empty());
    }
}
