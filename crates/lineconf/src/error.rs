//! Error types for configuration loading and lookup.
//!
//! Loading and lookup fail differently: a malformed file aborts the whole
//! load, while a failed lookup only affects that one call. The two error
//! types keep those outcomes distinct.

use crate::value::ValueKind;
use std::io;
use thiserror::Error;

/// Errors that abort a configuration load.
///
/// Any of these leaves the store unloaded. Entries parsed before the
/// failing line remain in the store.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Load was attempted before any file path was supplied.
    #[error("no config file specified")]
    NoPath,

    /// The config file could not be opened.
    #[error("could not open config file {path}: {source}")]
    Open {
        /// Path that failed to open.
        path: String,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// I/O failure while reading lines from an open file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A line does not match the `KEY,TYPECODE=VALUE` grammar.
    #[error("could not parse line: {line}")]
    Malformed {
        /// The offending line, leading spaces stripped.
        line: String,
    },

    /// A line carries a type code other than `s`, `f`, `i` or `b`.
    #[error("unknown type while parsing line: {line}")]
    UnknownType {
        /// The offending line, leading spaces stripped.
        line: String,
    },
}

/// Lookup failure: no entry has the requested key *and* type.
///
/// Entries whose key matches but whose type differs are skipped during the
/// scan, so this also covers the key-present-with-wrong-type case.
#[derive(Debug, Error)]
#[error("no such key {key:?} with type {kind}")]
pub struct NoSuchKey {
    /// The key that was looked up.
    pub key: String,
    /// The value type the accessor asked for.
    pub kind: ValueKind,
}

/// Result type for load operations.
pub type LoadResult<T> = std::result::Result<T, LoadError>;

/// Result type for typed lookups.
pub type LookupResult<T> = std::result::Result<T, NoSuchKey>;
