use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use hair_mesh::{HairConfig, HairError, HairLoader, SourceLocation};
use log::{error, info, warn};

/// Triangulate a hair curve file into tapered ribbons
#[derive(Parser)]
#[command(name = "hair-mesh")]
#[command(version)]
struct Cli {
    /// Binary (BINARY_HAIR) or ascii hair file
    file: PathBuf,

    /// Ribbon half-width at strand roots, overrides the config
    #[arg(long)]
    radius: Option<f32>,

    /// TOML file holding a `HairConfig`
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), HairError> {
    let mut config = match &cli.config {
        Some(path) => HairConfig::load(path)?,
        None => HairConfig::default(),
    };
    if let Some(radius) = cli.radius {
        config.radius = radius;
    }

    let location = SourceLocation::new(cli.file.display().to_string(), 1, 1);
    let mesh = HairLoader::load_with_config(&cli.file, location, &config)?;

    if !mesh.warnings.is_empty() {
        warn!("{} strands were too short to mesh", mesh.warnings.len());
    }
    let non_finite = mesh.triangles.iter().filter(|t| !t.is_finite()).count();
    if non_finite > 0 {
        warn!("{non_finite} triangles have non-finite vertices");
    }
    info!(
        "radius {}: {} strands, {} triangles",
        config.radius,
        mesh.strand_count,
        mesh.triangles.len()
    );
    Ok(())
}
