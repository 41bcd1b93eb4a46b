//! Error types for meteo-core.
//!
//! All errors here are recoverable user-facing conditions: the operation is
//! aborted, no state changes, and the host surfaces a warning. Nothing in
//! this domain can fail transiently, so there is no retry machinery.

use thiserror::Error;

/// Errors raised by the session controller.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Connect was requested without a device selection.
    #[error("no device selected")]
    NoDeviceSelected,

    /// Connect was requested with a device id not present in the registry.
    #[error("unknown device id: {0}")]
    UnknownDevice(u32),

    /// Record was requested while the session is disconnected.
    #[error("not connected to a device")]
    NotConnected,
}

/// Result type for meteo-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(Error::NoDeviceSelected.to_string(), "no device selected");
        assert_eq!(Error::UnknownDevice(7).to_string(), "unknown device id: 7");
        assert_eq!(Error::NotConnected.to_string(), "not connected to a device");
    }
}
