//! Error types for session construction and configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised at the API boundary.
///
/// Session coordination itself never fails; these cover caller mistakes and
/// setup problems that should surface immediately.
#[derive(Debug, Error)]
pub enum Error {
	/// A search UI name did not match any known adapter.
	#[error("invalid search UI type: {0} (expected 'basic' or 'preview')")]
	InvalidUiKind(String),

	/// A file search type name did not match any known kind.
	#[error("invalid file search type: {0} (expected 'filePath' or 'alias')")]
	InvalidSearchKind(String),

	/// Settings could not be parsed.
	#[error("settings parse error: {0}")]
	Settings(#[from] toml::de::Error),

	/// A settings file could not be read.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path of the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// The engine thread could not be started.
	#[error("failed to start match engine: {0}")]
	EngineSpawn(std::io::Error),
}

/// Result type for API-boundary operations.
pub type Result<T> = std::result::Result<T, Error>;
