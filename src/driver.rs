//! Driver
//!
//! Runs every built-in pattern group through the tray layout and writes the
//! tray and one cover per compartment. Groups are independent: a group that
//! fails is logged and skipped, and the run reports every failed group once
//! the remaining groups have been written.

use anyhow::{bail, Context};
use dicetray_core::{MeshBuilder, ScadExporter, Solid};
use dicetray_generator::{genshape, gentray, PATTERN_GROUPS};
use dicetray_settings::Config;
use std::path::PathBuf;
use tracing::{error, info};

const FALLBACK_BASE_NAME: &str = "dicetray";

/// Files written by a successful run, in write order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub written: Vec<PathBuf>,
}

/// File stem of the running executable, or `dicetray` if it is unknown.
pub fn default_base_name() -> String {
    std::env::current_exe()
        .ok()
        .and_then(|path| path.file_stem().map(|s| s.to_string_lossy().into_owned()))
        .filter(|stem| !stem.is_empty())
        .unwrap_or_else(|| FALLBACK_BASE_NAME.to_string())
}

pub struct Driver {
    config: Config,
    exporter: ScadExporter,
    mesher: Option<MeshBuilder>,
}

impl Driver {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        config.validate().context("invalid configuration")?;

        let base_name = config
            .output
            .base_name
            .clone()
            .unwrap_or_else(default_base_name);
        let exporter = ScadExporter::new(
            config.output.directory.clone(),
            base_name,
            config.output.resolution,
        );
        let mesher = if config.output.stl {
            Some(MeshBuilder::new(config.output.mesh_segments as usize)?)
        } else {
            None
        };

        Ok(Self {
            config,
            exporter,
            mesher,
        })
    }

    /// Generate the built-in pattern groups.
    pub fn run(&self) -> anyhow::Result<RunReport> {
        let builtin = PATTERN_GROUPS;
        let groups: Vec<&[&str]> = builtin.iter().map(|g| g.as_slice()).collect();
        self.run_groups(&groups)
    }

    /// Generate one tray per group, in order, plus its covers.
    pub fn run_groups(&self, groups: &[&[&str]]) -> anyhow::Result<RunReport> {
        let mut report = RunReport::default();
        let mut failed = Vec::new();

        if self.config.output.preview {
            match groups.first().and_then(|g| g.first()) {
                Some(text) => report.written.extend(self.write_preview(text)?),
                None => info!("No patterns to preview"),
            }
        }

        for (index, texts) in groups.iter().enumerate() {
            match self.run_group(index, texts) {
                Ok(paths) => report.written.extend(paths),
                Err(e) => {
                    error!(group = index, "Pattern group failed: {:#}", e);
                    failed.push(index);
                }
            }
        }

        if !failed.is_empty() {
            let list = failed
                .iter()
                .map(|i| i.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            bail!(
                "{} of {} pattern groups failed: {}",
                failed.len(),
                groups.len(),
                list
            );
        }

        info!(files = report.written.len(), "Generation complete");
        Ok(report)
    }

    fn run_group(&self, index: usize, texts: &[&str]) -> anyhow::Result<Vec<PathBuf>> {
        let tray = gentray(texts, &self.config.design)
            .with_context(|| format!("laying out pattern group {}", index))?;

        let mut written = self.export(&tray.solid, &format!("-{}", index))?;
        for insert in &tray.inserts {
            written.extend(self.export(&insert.cover, &format!("-cover-{}", insert.name))?);
        }

        info!(
            group = index,
            shapes = tray.inserts.len(),
            spacing = tray.spacing,
            "Generated tray"
        );
        Ok(written)
    }

    /// Single-shape check models: the pocket alone, and its cover with the
    /// pocket drawn under the `#` debug modifier.
    fn write_preview(&self, text: &str) -> anyhow::Result<Vec<PathBuf>> {
        let shape = genshape(text, &self.config.design).context("building preview shape")?;

        let mut written = self.export(&shape.solid, "-test")?;
        let overlay = shape.info.cover.clone() + shape.solid.clone().highlight();
        written.extend(self.export(&overlay, "-A")?);
        Ok(written)
    }

    fn export(&self, solid: &Solid, suffix: &str) -> anyhow::Result<Vec<PathBuf>> {
        let mut written = vec![self.exporter.save(solid, suffix)?];
        if let Some(mesher) = &self.mesher {
            written.push(self.exporter.save_stl(solid, suffix, mesher)?);
        }
        Ok(written)
    }
}
