// File: crates/figure-core/src/error.rs
// Summary: Error types for surface creation/export and for parameter input.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias for rendering and export operations.
pub type Result<T> = std::result::Result<T, FigureError>;

/// Failures coming from the raster backend or from writing its output.
#[derive(Debug, Error)]
pub enum FigureError {
    /// Skia refused to allocate a raster surface of this size.
    #[error("failed to create {width}x{height} raster surface")]
    SurfaceCreation { width: i32, height: i32 },

    /// Encoding the surface snapshot failed.
    #[error("encode PNG failed")]
    Encode,

    /// Reading pixels back from the surface failed.
    #[error("pixel readback failed")]
    Readback,

    /// Writing an exported image to disk failed.
    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Which calculator parameter a value was entered for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Parameter {
    Voltage,
    Resistance,
}

impl Parameter {
    pub fn label(self) -> &'static str {
        match self {
            Parameter::Voltage => "voltage",
            Parameter::Resistance => "resistance",
        }
    }
}

impl std::fmt::Display for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Rejected user input. The only error a selection can surface to the user.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum InputError {
    #[error("invalid {parameter} '{value}': please enter valid numbers for voltage and resistance")]
    InvalidNumber { parameter: Parameter, value: String },
}

impl InputError {
    pub fn invalid_number(parameter: Parameter, value: impl Into<String>) -> Self {
        Self::InvalidNumber { parameter, value: value.into() }
    }

    /// The parameter whose value was rejected.
    pub fn parameter(&self) -> Parameter {
        match self {
            Self::InvalidNumber { parameter, .. } => *parameter,
        }
    }
}
