//! Configuration module for kagami
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. All options carry defaults, so a crawl can also run entirely from
//! the built-in configuration.
//!
//! # Example
//!
//! ```no_run
//! use kagami::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("kagami.toml")).unwrap();
//! println!("Mirroring {} into {}", config.origin.base_url, config.output.mirror_root);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlerConfig, OriginConfig, OutputConfig};

// Re-export parser functions
pub use parser::{default_config, load_config};
