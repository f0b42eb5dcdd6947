//! What can go wrong when loading an environment map,
//! as distinct kinds that callers can match on.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// The result of loading an environment map.
pub type Result<T> = std::result::Result<T, Error>;


/// One distinct kind per failure, so callers can give actionable
/// diagnostics. Loading is one-shot: nothing is retried or recovered
/// locally, every failure propagates as one of these.
#[derive(Debug)]
pub enum Error {

    /// No file exists at the given path.
    NotFound(PathBuf),

    /// The file exists but is not readable by this process.
    PermissionDenied(PathBuf),

    /// The file could not be opened as an OpenEXR container,
    /// or its header describes an empty data window.
    /// Contains the underlying cause.
    DecodeOpenFailed(exr::error::Error),

    /// A required channel (`R`, `G` or `B`) is absent,
    /// or is not stored as 32-bit floats.
    /// The image is never zero-filled to compensate.
    MissingChannel(&'static str),
}

impl Error {

    /// Classify the error from the initial `File::open`,
    /// keeping the offending path.
    pub(crate) fn from_io(error: io::Error, path: &Path) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => Error::NotFound(path.to_owned()),
            io::ErrorKind::PermissionDenied => Error::PermissionDenied(path.to_owned()),
            _ => Error::DecodeOpenFailed(exr::error::Error::Io(error)),
        }
    }
}

/// Enable using the `?` operator on results from the exr crate.
impl From<exr::error::Error> for Error {
    fn from(error: exr::error::Error) -> Self {
        Error::DecodeOpenFailed(error)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotFound(path) =>
                write!(formatter, "file not found: {}", path.display()),

            Error::PermissionDenied(path) =>
                write!(formatter, "file is not readable: {}", path.display()),

            Error::DecodeOpenFailed(source) =>
                write!(formatter, "cannot decode exr image: {}", source),

            Error::MissingChannel(channel) =>
                write!(formatter, "image has no 32-bit float channel named `{}`", channel),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::DecodeOpenFailed(source) => Some(source),
            _ => None,
        }
    }
}
