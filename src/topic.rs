//! Topic resolution
//!
//! Decides which subject to search courses for, based on the current route
//! identifier and the user's roadmap (if one has been created).

use serde::Deserialize;

/// Route identifier for roadmap-driven suggestions
pub const ROUTE_TOPIC: &str = "topic";

/// Route identifier for the fixed AI catalogue
pub const ROUTE_AI: &str = "ai";

/// Topic used for the AI route
pub const AI_TOPIC: &str = "AI";

/// A user's learning roadmap. Only its subject name matters here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Roadmap {
    /// Subject of the roadmap, e.g. "Web Development"
    #[serde(default)]
    pub name: Option<String>,
}

impl Roadmap {
    /// Creates a roadmap with the given subject name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

/// Read-only view of whatever supplies the current roadmap
pub trait RoadmapContext {
    /// Subject name of the current roadmap, if there is one
    fn roadmap_name(&self) -> Option<&str>;
}

impl RoadmapContext for Roadmap {
    fn roadmap_name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl<T: RoadmapContext> RoadmapContext for Option<T> {
    fn roadmap_name(&self) -> Option<&str> {
        self.as_ref().and_then(|r| r.roadmap_name())
    }
}

/// Context with no roadmap at all
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRoadmap;

impl RoadmapContext for NoRoadmap {
    fn roadmap_name(&self) -> Option<&str> {
        None
    }
}

/// Outcome of resolving a route against the roadmap context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Topic to display and search for; empty when there is none
    pub topic: String,
    /// Whether suggestions should be fetched for the topic
    pub should_fetch: bool,
}

impl Resolution {
    fn empty() -> Self {
        Self {
            topic: String::new(),
            should_fetch: false,
        }
    }

    fn fetch(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            should_fetch: true,
        }
    }
}

/// Normalizes a route identifier: lowercase, last path segment only
///
/// `"/course/AI/"` and `"ai"` both normalize to `"ai"`.
pub fn normalize_route(route: &str) -> String {
    route
        .trim()
        .trim_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .to_lowercase()
}

/// Resolves the topic for a route identifier
///
/// # Behavior
/// - `"topic"`: the roadmap name when present and non-empty, otherwise empty
/// - `"ai"`: always `"AI"`, regardless of the roadmap
/// - anything else (or no route): empty
pub fn resolve_topic(route: Option<&str>, roadmap: &dyn RoadmapContext) -> Resolution {
    let Some(route) = route else {
        return Resolution::empty();
    };

    match normalize_route(route).as_str() {
        ROUTE_TOPIC => match roadmap.roadmap_name() {
            Some(name) if !name.is_empty() => Resolution::fetch(name),
            _ => Resolution::empty(),
        },
        ROUTE_AI => Resolution::fetch(AI_TOPIC),
        _ => Resolution::empty(),
    }
}
