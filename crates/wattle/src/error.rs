use std::path::PathBuf;
use thiserror::Error;

/// A result type for everything in wattle that can fail.
pub type WattleResult<T> = Result<T, WattleError>;

/// Failures of the layers around the native calls.
///
/// Forwarded calls themselves never produce one of these, whatever the native library returns is
/// handed back unchanged.
#[derive(Debug, Error)]
pub enum WattleError {
    /// None of the candidate paths held a loadable library.
    #[error("Unable to find the raylib shared library (tried: {})", display_paths(.attempted))]
    LibraryNotFound { attempted: Vec<PathBuf> },
    /// The file exists but the system loader refused it, usually because of a missing dependency.
    #[error("Failed to load raylib from '{}': {source}", .path.display())]
    LibraryLoad {
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },
    /// Another handle loaded from a shared library is still alive in this process.
    ///
    /// Both would resolve to the same copy of raylib and share its static scratch buffers.
    #[error("raylib is already loaded by another live handle")]
    AlreadyLoaded,
    /// The library was loaded, but does not export the named symbol.
    #[error("Unable to locate the symbol '{0}' in the loaded library")]
    MissingSymbol(&'static str),
    #[error("Failed to read config file '{}'", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{}': {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] ron::Error),
    #[error("Failed to write config file '{}'", .path.display())]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Unable to resolve the application data directory: {0}")]
    AppDir(#[from] app_dirs2::AppDirsError),
    #[error("Failed to open log file '{}'", .path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn display_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "nothing".to_string();
    }
    paths
        .iter()
        .map(|path| format!("'{}'", path.display()))
        .collect::<Vec<_>>()
        .join(", ")
}
