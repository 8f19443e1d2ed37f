//! Command-line interface parsing for Course Finder CLI
//!
//! This module handles parsing of CLI arguments using clap: the route to open,
//! the roadmap that drives personalised suggestions, and search credentials
//! (which may also come from the environment or a `.env` file).

use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::topic::Roadmap;

/// Error types for CLI argument handling
#[derive(Debug, Error)]
pub enum CliError {
    /// The roadmap file could not be read
    #[error("Failed to read roadmap file {path:?}: {source}")]
    RoadmapFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The roadmap file is not a JSON object
    #[error("Invalid roadmap file: {0}")]
    InvalidRoadmap(#[from] serde_json::Error),
}

/// Course Finder CLI - Browse free online courses for your roadmap
#[derive(Parser, Debug)]
#[command(name = "coursefinder")]
#[command(about = "Free online course suggestions for your learning roadmap")]
#[command(version)]
pub struct Cli {
    /// Route to open: "topic" for roadmap suggestions, "ai" for AI courses
    ///
    /// Examples:
    ///   coursefinder ai                           # Browse AI courses
    ///   coursefinder topic --roadmap "Rust"       # Courses for your roadmap
    pub route: Option<String>,

    /// Name of your learning roadmap
    #[arg(long, value_name = "NAME", conflicts_with = "roadmap_file")]
    pub roadmap: Option<String>,

    /// JSON file describing your roadmap (its "name" field is used)
    #[arg(long, value_name = "PATH")]
    pub roadmap_file: Option<PathBuf>,

    /// Search API key
    #[arg(long, env = "GOOGLE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Search engine context id
    #[arg(long, env = "GOOGLE_CX", hide_env_values = true)]
    pub cx: Option<String>,

    /// Path to the config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Neither read nor write cached results
    #[arg(long)]
    pub no_cache: bool,

    /// Print results to stdout instead of starting the interactive view
    #[arg(long)]
    pub print: bool,
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone, Default)]
pub struct StartupConfig {
    /// Route identifier to resolve first
    pub route: Option<String>,
    /// Roadmap supplied on the command line, if any
    pub roadmap: Option<Roadmap>,
    /// Whether to run non-interactively
    pub print: bool,
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments.
    ///
    /// # Returns
    /// * `Ok(StartupConfig)` with the route and roadmap to start with
    /// * `Err(CliError)` if a roadmap file was given but cannot be loaded
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let roadmap = match (&cli.roadmap, &cli.roadmap_file) {
            (Some(name), _) => Some(Roadmap::named(name.clone())),
            (None, Some(path)) => Some(load_roadmap_file(path)?),
            (None, None) => None,
        };

        Ok(StartupConfig {
            route: cli.route.clone(),
            roadmap,
            print: cli.print,
        })
    }
}

/// Reads a roadmap JSON file
pub fn load_roadmap_file(path: &Path) -> Result<Roadmap, CliError> {
    let content = fs::read_to_string(path).map_err(|source| CliError::RoadmapFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&content)?)
}
