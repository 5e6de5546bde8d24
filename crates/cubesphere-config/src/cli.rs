//! Command-line argument parsing for the cube-sphere generator.

use std::path::PathBuf;

use clap::Parser;

use crate::{Config, ExportFormat};

/// Cube-sphere generator command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "cubesphere-gen", about = "Generate a warped cube-sphere mesh")]
pub struct CliArgs {
    /// Subdivisions per cube edge.
    #[arg(long, short = 'n')]
    pub resolution: Option<u32>,

    /// Sphere radius.
    #[arg(long, short = 'r')]
    pub radius: Option<f32>,

    /// Write the mesh to this file.
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Export format.
    #[arg(long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Check topology and winding after generating.
    #[arg(long)]
    pub validate: Option<bool>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(n) = args.resolution {
            self.mesh.resolution = n;
        }
        if let Some(r) = args.radius {
            self.mesh.radius = r;
        }
        if let Some(ref path) = args.output {
            self.export.path = Some(path.clone());
        }
        if let Some(format) = args.format {
            self.export.format = format;
        }
        if let Some(validate) = args.validate {
            self.debug.validate = validate;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            resolution: Some(24),
            output: Some(PathBuf::from("sphere.ron")),
            format: Some(ExportFormat::Ron),
            ..Default::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.mesh.resolution, 24);
        assert_eq!(config.export.path, Some(PathBuf::from("sphere.ron")));
        assert_eq!(config.export.format, ExportFormat::Ron);
        // Non-overridden fields retain defaults
        assert_eq!(config.mesh.radius, 1.0);
        assert!(config.debug.validate);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_cli_parses_flags() {
        let args = CliArgs::try_parse_from([
            "cubesphere-gen",
            "-n",
            "16",
            "--radius",
            "2.5",
            "--format",
            "ron",
            "--validate",
            "false",
        ])
        .unwrap();
        assert_eq!(args.resolution, Some(16));
        assert_eq!(args.radius, Some(2.5));
        assert_eq!(args.format, Some(ExportFormat::Ron));
        assert_eq!(args.validate, Some(false));
        assert!(args.output.is_none());
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        let result = CliArgs::try_parse_from(["cubesphere-gen", "--format", "stl"]);
        assert!(result.is_err());
    }
}
