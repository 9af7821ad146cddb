//! Error types for the core crate.
//!
//! This module provides structured error types for solid construction,
//! OpenSCAD export and mesh preview generation.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building or exporting solids.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A primitive was given dimensions it cannot be built with.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Writing an output artifact failed.
    #[error("Failed to export {path}: {reason}")]
    Export {
        /// The file that could not be written.
        path: PathBuf,
        /// Why the export failed.
        reason: String,
    },

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
