//! Errors raised while tracing a scene.

use thiserror::Error;

/// Errors that abort a render.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("Unsupported geometry type {kind} at object {index}")]
    UnsupportedGeometry { kind: &'static str, index: usize },
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Geometry with no intersection or normal routine, named by kind.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Unsupported geometry type: {0}")]
pub struct UnsupportedGeometry(pub &'static str);

impl UnsupportedGeometry {
    /// Attach the position of the offending object in the scene.
    pub fn at(self, index: usize) -> RenderError {
        RenderError::UnsupportedGeometry {
            kind: self.0,
            index,
        }
    }
}
