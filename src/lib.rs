//! # Dicetray
//!
//! Generates OpenSCAD models of a 3D-printable dice-storage tray and the
//! cover inserts that close its pockets. Pocket outlines are polyomino
//! patterns drawn in ASCII art.
//!
//! ## Architecture
//!
//! Dicetray is organized as a workspace with multiple crates:
//!
//! 1. **dicetray-core** - CSG tree, OpenSCAD writer, csgrs mesh preview
//! 2. **dicetray-generator** - Pattern parsing, shape building, tray layout
//! 3. **dicetray-settings** - Configuration files and validation
//! 4. **dicetray** - Driver and command line binary

pub mod driver;

pub use dicetray_core::{ScadExporter, Solid};
pub use dicetray_generator::{gencuts, genshape, gentray, PATTERN_GROUPS};
pub use dicetray_settings::{Config, OutputSettings};
pub use driver::{default_base_name, Driver, RunReport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Log filter from `RUST_LOG`-style directives, `info` when unset or invalid.
fn log_filter(directives: Option<&str>) -> tracing_subscriber::EnvFilter {
    use tracing_subscriber::EnvFilter;

    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let env_filter = log_filter(directives.as_deref());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
