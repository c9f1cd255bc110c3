//! Error type shared by every fallible operation of the crate.

use std::fmt::Display;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T, E = ProgressBarError> = std::result::Result<T, E>;

/// Errors produced while configuring or rendering a progress bar.
#[derive(Debug, Error)]
pub enum ProgressBarError {
    /// A configuration value is outside its accepted domain.
    ///
    /// Raised when a bar is constructed and by the validated setters. The
    /// bar is left untouched when a setter fails.
    #[error("invalid configuration: `{field}` = {value} ({reason})")]
    InvalidConfiguration {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value, formatted for display.
        value: String,
        /// Which rule the value broke.
        reason: &'static str,
    },
    /// The raster surface could not be allocated.
    #[error("cannot allocate a {width}x{height} raster surface")]
    Surface {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },
    /// Tessellating the bar outline into triangles failed.
    #[error("tessellation error: {0}")]
    Tessellation(#[from] lyon_tessellation::TessellationError),
}

impl ProgressBarError {
    pub(crate) fn invalid(field: &'static str, value: impl Display, reason: &'static str) -> Self {
        Self::InvalidConfiguration {
            field,
            value: value.to_string(),
            reason,
        }
    }

    /// Returns the field name when this is an
    /// [`InvalidConfiguration`](Self::InvalidConfiguration) error.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidConfiguration { field, .. } => Some(field),
            _ => None,
        }
    }
}
