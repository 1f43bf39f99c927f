use thiserror::Error;

/// Errors raised while building scene configuration from host input.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SceneError {
    #[error("viewport must be non-empty, got {width}x{height}")]
    DegenerateViewport { width: u32, height: u32 },
    #[error("device pixel ratio must be finite and positive, got {0}")]
    InvalidPixelRatio(f64),
}
