//! Error types for rendering, color parsing, settings, and the application.

use std::path::PathBuf;

use thiserror::Error;

/// Failures raised by the rendering core.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A render parameter is outside its valid range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Failures while turning a color string into an RGB triple.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    /// Neither a CSS color nor an `R,G,B` tuple.
    #[error("invalid color specification: '{0}'")]
    Invalid(String),
    /// An `R,G,B` tuple with the wrong number of components.
    #[error("RGB tuple must have 3 components, got {count}: '{input}'")]
    ComponentCount {
        /// Components found.
        count: usize,
        /// Offending input.
        input: String,
    },
    /// A tuple component that is not an integer.
    #[error("RGB components must be integers: '{0}'")]
    NotInteger(String),
    /// A tuple component outside `[0, 255]`.
    #[error("RGB values must be in [0, 255], got {value}: '{input}'")]
    OutOfRange {
        /// The offending component.
        value: i64,
        /// Offending input.
        input: String,
    },
}

/// Failures while importing or exporting a settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file does not exist.
    #[error("settings file not found: '{}'", .0.display())]
    NotFound(PathBuf),
    /// The settings file is not valid JSON for the expected schema.
    #[error("malformed JSON in settings file '{}': {source}", .path.display())]
    Malformed {
        /// File being read.
        path: PathBuf,
        /// Underlying parse error.
        source: serde_json::Error,
    },
    /// The settings could not be serialized.
    #[error("cannot encode settings: {0}")]
    Encode(#[from] serde_json::Error),
    /// Reading or writing the file failed.
    #[error("cannot access settings file '{}': {source}", .path.display())]
    Io {
        /// File being accessed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Application-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// See [`RenderError`].
    #[error(transparent)]
    Render(#[from] RenderError),

    /// See [`ColorError`].
    #[error(transparent)]
    Color(#[from] ColorError),

    /// See [`SettingsError`].
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// Encoding or writing the output image failed.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// Logging could not be initialised.
    #[error("logger error: {0}")]
    Logger(String),

    /// Any other I/O failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
