use thiserror::Error;

/// Renderer start-up failures.
///
/// wgpu errors are flattened to strings: on the web backend they can carry
/// JS values that are not `Send`.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("surface creation failed: {0}")]
    CreateSurface(String),
    #[error("no compatible GPU adapter")]
    NoAdapter,
    #[error("request_device failed: {0}")]
    RequestDevice(String),
    #[error("surface is not usable with this adapter: {0}")]
    UnsupportedSurface(&'static str),
}
