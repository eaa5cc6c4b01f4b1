//! Error handling utilities for the moodlog application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Represents errors that can occur while reading or writing the persisted mood list.
///
/// Read-side problems are normally absorbed by the store (a corrupt blob loads as
/// an empty list), so most of these surface from writes and hand-off decoding.
///
/// # Examples
///
/// ```
/// use moodlog::errors::StorageError;
/// use std::io::{self, ErrorKind};
/// use std::path::PathBuf;
///
/// let error = StorageError::Write {
///     path: PathBuf::from("/data/moods.json"),
///     source: io::Error::new(ErrorKind::PermissionDenied, "permission denied"),
/// };
///
/// assert!(format!("{}", error).contains("Failed to write"));
/// assert!(format!("{}", error).contains("moods.json"));
/// ```
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading a stored value failed.
    #[error("Failed to read stored value from {path}: {source}")]
    Read {
        /// The path that could not be read
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Writing a stored value failed. Nothing was replaced.
    #[error("Failed to write stored value to {path}: {source}. Your previous entries are unchanged.")]
    Write {
        /// The path that could not be written
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A value could not be encoded or decoded as JSON.
    #[error("Malformed mood data: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The storage key cannot be mapped to a file name.
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
}

/// Represents errors that can occur when locking the data directory for a write.
///
/// # Examples
///
/// ```
/// use moodlog::errors::LockError;
/// use std::path::PathBuf;
///
/// let error = LockError::StoreBusy {
///     path: PathBuf::from("/data/.lock"),
/// };
///
/// assert!(format!("{}", error).contains("another moodlog process"));
/// ```
#[derive(Debug, Error)]
pub enum LockError {
    /// Another process holds the lock.
    #[error("Mood data is being written by another moodlog process ({path}). Please try again in a moment.")]
    StoreBusy {
        /// The lock file path
        path: PathBuf,
    },

    /// Acquiring the lock failed for a technical reason.
    #[error("Failed to acquire lock {path}: {source}. Please check that the data directory is accessible.")]
    AcquisitionFailed {
        /// The lock file path
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Represents errors raised while creating a mood entry.
#[derive(Debug, Error)]
pub enum EntryError {
    /// Save was attempted before a mood was picked.
    #[error("Please select a mood")]
    NoMoodSelected,

    /// The description does not name a catalog mood.
    #[error("Unknown mood '{0}'. Run `moodlog moods` to see the available moods.")]
    UnknownMood(String),

    /// A hand-off parameter did not decode into an entry.
    #[error("Invalid mood entry: {0}")]
    InvalidHandoff(#[source] serde_json::Error),
}

/// Represents all possible errors that can occur in the moodlog application.
///
/// This enum is the central error type used across the application, with variants
/// for different error categories. It uses `thiserror` for deriving the `Error` trait
/// implementation and formatted error messages.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use moodlog::errors::AppError;
///
/// let error = AppError::Config("Missing data directory".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Missing data directory");
/// ```
///
/// Converting from an IO error:
/// ```
/// use moodlog::errors::AppError;
/// use std::io::{self, ErrorKind};
///
/// let io_error = io::Error::new(ErrorKind::NotFound, "file not found");
/// let app_error: AppError = io_error.into();
///
/// match app_error {
///     AppError::Io(inner) => assert_eq!(inner.kind(), ErrorKind::NotFound),
///     _ => panic!("Expected Io variant"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors reading or writing persisted mood data.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Errors related to locking the data directory.
    #[error("File locking error: {0}")]
    Lock(#[from] LockError),

    /// Errors creating a mood entry from user input.
    #[error("{0}")]
    Entry(#[from] EntryError),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// # Examples
///
/// ```
/// use moodlog::errors::{AppError, AppResult};
///
/// fn might_fail() -> AppResult<String> {
///     if false {
///         return Err(AppError::Config("Something went wrong".to_string()));
///     }
///     Ok("Operation succeeded".to_string())
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;
