//! Lineconf - a minimal key-typed configuration file reader.
//!
//! Parses a line-oriented `KEY,TYPECODE=VALUE` format into an ordered,
//! in-memory collection of typed entries and answers type-checked lookups
//! by key.
//!
//! # Format
//!
//! Lines whose first non-space character is `#` are kept aside as comments;
//! blank lines are skipped. Every other line is `KEY,TYPECODE=VALUE`, with
//! the type code selecting the value type:
//!
//! - `s`: string
//! - `f`: float
//! - `i`: integer
//! - `b`: bool (value `yes`; anything else reads as false)
//!
//! ```text
//! # demo configuration
//! stringkey,s=asdfasdf
//! intkey,i=1232
//! floatkey,f=12312.123
//! boolkey,b=yes
//! ```
//!
//! # Modules
//!
//! - [`error`] - Load and lookup error types using thiserror
//! - [`value`] - The typed value model (`ValueKind`, `Value`, `Entry`)
//! - [`config`] - The [`Config`] store: loading, lookup and reporting
//!
//! # Example
//!
//! ```rust
//! use lineconf::Config;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! # let dir = tempfile::tempdir()?;
//! # let path = dir.path().join("app.conf");
//! # std::fs::write(&path, "greeting,s=hello\nretries,i=3\n")?;
//! let mut config = Config::with_path(&path);
//! config.load()?;
//!
//! assert!(config.is_loaded());
//! assert_eq!(config.get_string("greeting")?, "hello");
//! assert_eq!(config.get_int("retries")?, 3);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod error;
pub mod value;

// Re-export commonly used types
pub use config::Config;
pub use error::{LoadError, LoadResult, LookupResult, NoSuchKey};
pub use value::{Entry, Value, ValueKind};
