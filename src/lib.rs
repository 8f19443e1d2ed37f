//! Course Finder CLI Library
//!
//! Exposes topic resolution, the cache-aside fetcher, and the terminal UI so
//! the binary and integration tests share one implementation.

pub mod app;
pub mod cache;
pub mod cli;
pub mod config;
pub mod data;
pub mod fetcher;
pub mod notification;
pub mod topic;
pub mod ui;

#[cfg(test)]
mod test_utils;
