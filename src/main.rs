use anyhow::Context;
use clap::Parser;
use dicetray::{init_logging, Config, Driver, BUILD_DATE, VERSION};
use std::path::PathBuf;
use tracing::info;

/// Generate OpenSCAD models of the dice tray and its cover inserts.
#[derive(Debug, Parser)]
#[command(name = "dicetray", version)]
struct Cli {
    /// Configuration file (.json or .toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory the models are written to
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Prefix for every generated file name
    #[arg(long, value_name = "NAME")]
    base_name: Option<String>,

    /// Also write STL previews
    #[arg(long)]
    stl: bool,

    /// Also write single-shape check models
    #[arg(long)]
    preview: bool,
}

impl Cli {
    fn into_config(self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => Config::default(),
        };

        if let Some(dir) = self.output_dir {
            config.output.directory = dir;
        }
        if let Some(name) = self.base_name {
            config.output.base_name = Some(name);
        }
        config.output.stl |= self.stl;
        config.output.preview |= self.preview;

        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;

    info!("dicetray {} (built {})", VERSION, BUILD_DATE);

    let config = Cli::parse().into_config()?;
    let report = Driver::new(config)?.run()?;

    for path in &report.written {
        println!("{}", path.display());
    }

    Ok(())
}
