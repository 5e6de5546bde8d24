//! Configuration for the cube-sphere generator.
//!
//! Settings persist to disk as RON files, can be overridden from the command
//! line via clap, and tolerate missing or unknown fields so older and newer
//! config files keep loading.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, ExportConfig, ExportFormat, MeshConfig, default_config_dir};
pub use error::ConfigError;
