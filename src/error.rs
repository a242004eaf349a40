use std::path::PathBuf;
use thiserror::Error;

/// Failures while locating or fetching the client jar.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// A local jar (from `.minecraft` or `--jar`) does not exist.
    #[error("client jar not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The home directory could not be determined, so `~` cannot be expanded.
    #[error("could not determine the home directory")]
    NoHomeDir,

    /// The download server answered with a non-success status.
    #[error("HTTP Error {0}")]
    HttpStatus(u16),
}
