//! Command-line cube-sphere generator.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p cubesphere-gen -- -n 32 -r 6371 -o sphere.obj`.

mod export;

use std::process::ExitCode;

use clap::Parser;
use cubesphere_config::{CliArgs, Config, default_config_dir};
use cubesphere_mesh::{CubeSphereMesh, IndexGroup, MeshError, TopologyReport};
use tracing::{error, info, warn};

use crate::export::ExportError;

/// Errors that abort a generator run.
#[derive(Debug, thiserror::Error)]
enum GenError {
    /// The configured resolution or radius is invalid.
    #[error(transparent)]
    Mesh(#[from] MeshError),

    /// The generated mesh failed its topology check.
    #[error("generated mesh failed validation: {0:?}")]
    Topology(TopologyReport),

    /// Writing the output file failed.
    #[error(transparent)]
    Export(#[from] ExportError),
}

fn run(config: &Config) -> Result<(), GenError> {
    let params = config.mesh.to_params()?;
    info!(
        resolution = params.resolution(),
        radius = params.radius(),
        "Generating cube-sphere"
    );

    let mesh = CubeSphereMesh::generate(params);
    info!(
        "Generated {} vertices and {} triangles (z={}, x={}, y={})",
        mesh.vertex_count(),
        mesh.triangle_count(),
        mesh.indices(IndexGroup::Z).len() / 3,
        mesh.indices(IndexGroup::X).len() / 3,
        mesh.indices(IndexGroup::Y).len() / 3,
    );

    if config.debug.validate {
        let report = TopologyReport::analyze(&mesh);
        if !report.is_closed_manifold() || !report.is_consistently_outward() {
            return Err(GenError::Topology(report));
        }
        info!(
            "Topology OK: {} edges, Euler characteristic {}",
            report.edge_count,
            report.euler_characteristic()
        );
    }

    match &config.export.path {
        Some(path) => {
            export::write_mesh(&mesh, path, config.export.format)?;
            info!("Wrote {:?} mesh to {}", config.export.format, path.display());
        }
        None => info!("No output path configured, skipping export"),
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    // Resolve config directory
    let config_dir = match args.config.clone().map_or_else(default_config_dir, Ok) {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    cubesphere_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    if let Some(path) = &config.export.path
        && path.extension().and_then(|e| e.to_str()) != Some(config.export.format.extension())
    {
        warn!(
            "Output {} does not use the .{} extension",
            path.display(),
            config.export.format.extension()
        );
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
