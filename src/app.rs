//! Application state management for Course Finder CLI
//!
//! This module contains the main application state: which route and roadmap
//! are active, the resolved topic, the current course suggestions, keyboard
//! handling, and the loading/no-topic/results view transitions.

use crossterm::event::{KeyCode, KeyEvent};

use crate::cli::StartupConfig;
use crate::data::{CourseItem, SearchBackend, SearchClient, SearchError};
use crate::fetcher::{CourseFetcher, FetchOutcome, ResultSource};
use crate::notification::NotificationState;
use crate::topic::{resolve_topic, Roadmap, ROUTE_AI};

/// Message shown when a fetch fails without a usable error message
pub const FETCH_FAILED_FALLBACK: &str = "Failed to fetch courses";

/// The view the renderer should draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// A fetch is in progress; nothing else is shown
    Loading,
    /// No topic is selected; prompt the user to create a roadmap
    NoTopic,
    /// A topic is selected; show its suggestions (possibly none)
    Results,
}

/// Main application struct managing state and data
pub struct App<B = SearchClient> {
    /// Current route identifier ("topic", "ai", ...)
    pub route: Option<String>,
    /// Roadmap supplied by the user, if any
    pub roadmap: Option<Roadmap>,
    /// Resolved topic; empty when no topic is selected
    pub topic: String,
    /// Course suggestions for the topic
    pub courses: Vec<CourseItem>,
    /// Where the current suggestions came from
    pub source: Option<ResultSource>,
    /// Flag indicating a fetch is in progress
    pub loading: bool,
    /// Index of the selected course card
    pub selected_index: usize,
    /// Number of card columns in the last rendered grid
    pub grid_columns: usize,
    /// Flag to show help overlay
    pub show_help: bool,
    /// Flag indicating the application should quit
    pub should_quit: bool,
    /// Transient messages such as fetch errors
    pub notification: NotificationState,
    /// Message of the most recent failed fetch, cleared on success
    pub last_error: Option<String>,
    /// Set when the current topic still needs to be fetched
    fetch_requested: bool,
    fetcher: CourseFetcher<B>,
}

impl<B: SearchBackend> App<B> {
    /// Creates a new App with no route selected
    pub fn new(fetcher: CourseFetcher<B>) -> Self {
        Self {
            route: None,
            roadmap: None,
            topic: String::new(),
            courses: Vec::new(),
            source: None,
            loading: false,
            selected_index: 0,
            grid_columns: 1,
            show_help: false,
            should_quit: false,
            notification: NotificationState::new(),
            last_error: None,
            fetch_requested: false,
            fetcher,
        }
    }

    /// Creates a new App and resolves the route and roadmap from the CLI
    pub fn with_startup_config(fetcher: CourseFetcher<B>, config: StartupConfig) -> Self {
        let mut app = Self::new(fetcher);
        app.route = config.route;
        app.roadmap = config.roadmap;
        app.resolve();
        app
    }

    /// Switches to a new route and re-resolves the topic
    pub fn set_route(&mut self, route: Option<String>) {
        self.route = route;
        self.resolve();
    }

    /// Replaces the roadmap and re-resolves the topic
    pub fn set_roadmap(&mut self, roadmap: Option<Roadmap>) {
        self.roadmap = roadmap;
        self.resolve();
    }

    /// Re-runs topic resolution for the current route and roadmap
    ///
    /// A resolved topic schedules a fetch; no topic clears the suggestions.
    pub fn resolve(&mut self) {
        let resolution = resolve_topic(self.route.as_deref(), &self.roadmap);
        self.topic = resolution.topic;
        self.fetch_requested = resolution.should_fetch;

        if !resolution.should_fetch {
            self.courses.clear();
            self.source = None;
            self.selected_index = 0;
        }
    }

    /// Whether a fetch is waiting to be run
    pub fn fetch_requested(&self) -> bool {
        self.fetch_requested
    }

    /// Returns the view the renderer should draw
    pub fn view(&self) -> View {
        if self.loading {
            View::Loading
        } else if self.topic.is_empty() {
            View::NoTopic
        } else {
            View::Results
        }
    }

    /// Enters the loading state if a fetch is pending
    ///
    /// Returns whether a fetch was started. The caller draws the loading
    /// view and then awaits `finish_fetch`.
    pub fn begin_fetch(&mut self) -> bool {
        if !self.fetch_requested {
            return false;
        }
        self.fetch_requested = false;
        self.loading = true;
        true
    }

    /// Runs the pending fetch and always leaves the loading state
    pub async fn finish_fetch(&mut self) {
        let result = self.fetcher.fetch(&self.topic).await;
        self.loading = false;
        self.apply_fetch_result(result);
    }

    /// Runs a pending fetch, if any, from start to finish
    pub async fn fetch_courses(&mut self) {
        if self.begin_fetch() {
            self.finish_fetch().await;
        }
    }

    /// Applies the result of a fetch for the current topic
    ///
    /// On failure the previous suggestions are kept and an error
    /// notification is shown.
    fn apply_fetch_result(&mut self, result: Result<Option<FetchOutcome>, SearchError>) {
        match result {
            Ok(Some(outcome)) => {
                self.courses = outcome.items;
                self.source = Some(outcome.source);
                self.selected_index = 0;
                self.last_error = None;
            }
            Ok(None) => {}
            Err(e) => {
                log::error!("Failed to fetch courses for {:?}: {}", self.topic, e);
                let message = e.to_string();
                let message = if message.is_empty() {
                    FETCH_FAILED_FALLBACK
                } else {
                    message.as_str()
                };
                self.notification.show_error(message);
                self.last_error = Some(message.to_string());
            }
        }
    }

    /// Returns the currently selected course, if any
    pub fn selected_course(&self) -> Option<&CourseItem> {
        self.courses.get(self.selected_index)
    }

    /// Handles keyboard input and updates state accordingly
    ///
    /// # Key Bindings
    /// - `q` / `Esc`: Quit (Esc closes help first)
    /// - `←/h`, `→/l`, `↑/k`, `↓/j`: Move between course cards
    /// - `Enter`: Show the selected course's link
    /// - `b`: Browse AI courses
    /// - `r`: Reload suggestions for the current route
    /// - `?`: Toggle help overlay
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        // Help overlay intercepts all keys when shown
        if self.show_help {
            if matches!(
                key_event.code,
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
            ) {
                self.show_help = false;
            }
            return;
        }

        if self.view() == View::Loading {
            if key_event.code == KeyCode::Char('q') {
                self.should_quit = true;
            }
            return;
        }

        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('b') => {
                self.set_route(Some(ROUTE_AI.to_string()));
            }
            KeyCode::Char('r') => {
                self.resolve();
            }
            KeyCode::Char('?') => {
                self.show_help = true;
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.selected_index = self.selected_index.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.move_selection(1);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_index = self.selected_index.saturating_sub(self.grid_columns.max(1));
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_selection(self.grid_columns.max(1));
            }
            KeyCode::Enter => {
                if let Some(link) = self.selected_course().map(|c| c.link.clone()) {
                    self.notification.show(&link);
                }
            }
            _ => {}
        }
    }

    /// Moves the selection forward by `step`, stopping at the last card
    fn move_selection(&mut self, step: usize) {
        let Some(last) = self.courses.len().checked_sub(1) else {
            return;
        };
        self.selected_index = (self.selected_index + step).min(last);
    }
}
