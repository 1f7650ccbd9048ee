//! Crate-level error types.

use std::fmt;

use crate::gpu::render_context::RenderContextError;

/// Errors produced by the scrollscape crate.
#[derive(Debug)]
pub enum ScrollscapeError {
    /// GPU context initialization failure.
    Gpu(RenderContextError),
    /// WGSL module registration or composition failure.
    Shader(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML/JSON options parsing, serialization or field update failure.
    OptionsParse(String),
    /// Viewer event-loop or window failure.
    Viewer(String),
    /// Browser environment failure (missing window, canvas, listeners).
    Web(String),
}

impl fmt::Display for ScrollscapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpu(e) => write!(f, "GPU error: {e}"),
            Self::Shader(msg) => write!(f, "shader error: {msg}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
            Self::Web(msg) => write!(f, "web error: {msg}"),
        }
    }
}

impl std::error::Error for ScrollscapeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Gpu(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RenderContextError> for ScrollscapeError {
    fn from(e: RenderContextError) -> Self {
        Self::Gpu(e)
    }
}

impl From<std::io::Error> for ScrollscapeError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn io_errors_keep_their_source() {
        let err = ScrollscapeError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing preset",
        ));
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "I/O error: missing preset");
    }

    #[test]
    fn message_variants_have_no_source() {
        let err = ScrollscapeError::OptionsParse("bad field".into());
        assert!(err.source().is_none());
        assert_eq!(err.to_string(), "options parse error: bad field");
    }
}
