use thiserror::Error;

/// Recoverable conditions inside the engine. None of them is fatal: each one
/// degrades to holding the previous (or neutral) visual state.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TiltError {
    #[error("device orientation events are not supported")]
    OrientationUnsupported,
    #[error("device orientation permission was denied")]
    PermissionDenied,
    #[error("device orientation activation was already requested")]
    ActivationInFlight,
    #[error("surface has no size yet")]
    InvalidGeometry,
    #[error("input sample carried no position")]
    MalformedSample,
}
