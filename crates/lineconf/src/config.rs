//! The configuration store: file loading, typed lookup and reporting.
//!
//! [`Config`] reads a line-oriented `KEY,TYPECODE=VALUE` file into an
//! ordered collection of typed entries and answers type-checked lookups by
//! key. Parsing is strict about the grammar (a bad line aborts the load)
//! but deliberately tolerant about numeric values that fail to scan.

use crate::error::{LoadError, LoadResult, LookupResult, NoSuchKey};
use crate::value::{Entry, Value, ValueKind};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Width of the separator rule in [`Config::format_report`].
const REPORT_RULE_WIDTH: usize = 45;

/// In-memory store of typed configuration entries.
///
/// A store is created empty, optionally with a file path, and populated by
/// [`Config::load`] or [`Config::load_path`]. Entries and comments each
/// preserve file order; duplicate keys are allowed and lookups return the
/// first entry whose key and type both match.
///
/// Repeated loads append to the existing collections rather than replacing
/// them; call [`Config::clear`] first for a fresh read.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Source file path, if one has been supplied.
    path: Option<PathBuf>,
    /// Parsed entries in file order.
    entries: Vec<Entry>,
    /// Comment lines in file order, preserved verbatim.
    comments: Vec<String>,
    /// True once a load has run to end of input without a fatal error.
    loaded: bool,
}

impl Config {
    /// Create an empty store with no file path.
    ///
    /// A path must be supplied via [`Config::load_path`] before the store
    /// can load anything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with a recorded file path.
    ///
    /// The file is not read until [`Config::load`] is called.
    #[must_use]
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::default()
        }
    }

    /// Load the file at the recorded path, appending to the store.
    ///
    /// # Errors
    /// [`LoadError::NoPath`] if no path was ever supplied; otherwise any
    /// fatal condition of [`Config::load_path`].
    pub fn load(&mut self) -> LoadResult<()> {
        let path = self.path.clone().ok_or(LoadError::NoPath)?;
        self.load_file(&path)
    }

    /// Record `path` (replacing any previous one), then load it.
    ///
    /// # Errors
    /// [`LoadError::Open`] if the file cannot be opened (no line is
    /// processed in that case), [`LoadError::Malformed`] or
    /// [`LoadError::UnknownType`] on the first line violating the grammar.
    /// On a fatal parse error the lines already parsed remain in the store
    /// and the loaded flag stays false.
    pub fn load_path(&mut self, path: impl Into<PathBuf>) -> LoadResult<()> {
        let path = path.into();
        self.path = Some(path.clone());
        self.load_file(&path)
    }

    fn load_file(&mut self, path: &Path) -> LoadResult<()> {
        let file = File::open(path).map_err(|source| LoadError::Open {
            path: path.display().to_string(),
            source,
        })?;
        debug!(path = %path.display(), "loading config");

        let reader = BufReader::new(file);
        for line in reader.lines() {
            self.consume_line(line?)?;
        }
        self.loaded = true;

        info!(
            path = %path.display(),
            entries = self.entries.len(),
            comments = self.comments.len(),
            "config loaded"
        );
        Ok(())
    }

    /// Classify one physical line as comment, blank or entry.
    fn consume_line(&mut self, line: String) -> LoadResult<()> {
        // Leading spaces only; tabs are not stripped.
        let stripped = line.trim_start_matches(' ');

        if stripped.starts_with('#') {
            // Comments keep the original line, indentation included.
            self.comments.push(line);
            return Ok(());
        }

        if stripped.is_empty() {
            return Ok(());
        }

        let entry = parse_entry(stripped)?;
        self.entries.push(entry);
        Ok(())
    }

    /// Whether the most recent load ran to end of input without error.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// The recorded source path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// All parsed entries, in file order.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// All comment lines, in file order, preserved verbatim.
    #[must_use]
    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    /// Drop all entries and comments and reset the loaded flag.
    ///
    /// The recorded path is kept, so a following [`Config::load`] re-reads
    /// the same file into an empty store. `load` itself never clears;
    /// repeated loads accumulate entries.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.comments.clear();
        self.loaded = false;
    }

    /// First string value stored under `key`.
    ///
    /// # Errors
    /// [`NoSuchKey`] if no entry has this key with string type.
    pub fn get_string(&self, key: &str) -> LookupResult<&str> {
        for entry in &self.entries {
            if entry.key == key {
                if let Value::String(value) = &entry.value {
                    return Ok(value);
                }
            }
        }
        Err(NoSuchKey {
            key: key.to_string(),
            kind: ValueKind::String,
        })
    }

    /// First float value stored under `key`.
    ///
    /// # Errors
    /// [`NoSuchKey`] if no entry has this key with float type.
    pub fn get_float(&self, key: &str) -> LookupResult<f64> {
        for entry in &self.entries {
            if entry.key == key {
                if let Value::Float(value) = &entry.value {
                    return Ok(*value);
                }
            }
        }
        Err(NoSuchKey {
            key: key.to_string(),
            kind: ValueKind::Float,
        })
    }

    /// First integer value stored under `key`.
    ///
    /// # Errors
    /// [`NoSuchKey`] if no entry has this key with integer type.
    pub fn get_int(&self, key: &str) -> LookupResult<i64> {
        for entry in &self.entries {
            if entry.key == key {
                if let Value::Integer(value) = &entry.value {
                    return Ok(*value);
                }
            }
        }
        Err(NoSuchKey {
            key: key.to_string(),
            kind: ValueKind::Integer,
        })
    }

    /// First bool value stored under `key`.
    ///
    /// # Errors
    /// [`NoSuchKey`] if no entry has this key with bool type.
    pub fn get_bool(&self, key: &str) -> LookupResult<bool> {
        for entry in &self.entries {
            if entry.key == key {
                if let Value::Bool(value) = &entry.value {
                    return Ok(*value);
                }
            }
        }
        Err(NoSuchKey {
            key: key.to_string(),
            kind: ValueKind::Bool,
        })
    }

    /// Render all entries as a human-readable table.
    ///
    /// One row per entry in insertion order, each bracketed by a
    /// fixed-width rule, showing the type name, the key and the value.
    /// Diagnostic aid only: stable for identical input, but not a
    /// parseable contract.
    #[must_use]
    pub fn format_report(&self) -> String {
        let path = self
            .path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        let rule = "-".repeat(REPORT_RULE_WIDTH);

        let mut out = String::new();
        out.push_str(&format!("Configuration ({path}):\n"));
        out.push_str(&rule);
        out.push('\n');
        for entry in &self.entries {
            // Pre-render the value so the column width applies to the text.
            let rendered = entry.value.to_string();
            out.push_str(&format!(
                "{:>10}{:>15}{rendered:>15}\n",
                entry.value.kind().name(),
                entry.key,
            ));
            out.push_str(&rule);
            out.push('\n');
        }
        out
    }
}

/// Parse a leading-space-stripped `KEY,TYPECODE=VALUE` line into an entry.
fn parse_entry(stripped: &str) -> LoadResult<Entry> {
    let comma = match stripped.find(',') {
        None | Some(0) => {
            return Err(LoadError::Malformed {
                line: stripped.to_string(),
            });
        }
        Some(pos) => pos,
    };
    let key = &stripped[..comma];

    let kind = stripped[comma + 1..]
        .chars()
        .next()
        .map_or(ValueKind::Unknown, ValueKind::from_code);
    if kind == ValueKind::Unknown {
        return Err(LoadError::UnknownType {
            line: stripped.to_string(),
        });
    }

    // The '=' is searched over the whole line, not just past the type code.
    let eq = match stripped.find('=') {
        None | Some(0) => {
            return Err(LoadError::Malformed {
                line: stripped.to_string(),
            });
        }
        Some(pos) => pos,
    };
    let raw = &stripped[eq + 1..];

    Ok(Entry {
        key: key.to_string(),
        value: convert_value(kind, raw, stripped)?,
    })
}

/// Convert the raw value text according to the decoded kind.
///
/// Numeric values that fail to scan do not fail the load; they fall back
/// to zero and leave a warning in the log.
fn convert_value(kind: ValueKind, raw: &str, line: &str) -> LoadResult<Value> {
    match kind {
        ValueKind::String => Ok(Value::String(raw.to_string())),
        ValueKind::Float => {
            let value = raw.trim().parse().unwrap_or_else(|_| {
                warn!(line = %line, "unparseable float value, defaulting to 0");
                0.0
            });
            Ok(Value::Float(value))
        }
        ValueKind::Integer => {
            let value = raw.trim().parse().unwrap_or_else(|_| {
                warn!(line = %line, "unparseable integer value, defaulting to 0");
                0
            });
            Ok(Value::Integer(value))
        }
        // Bool strips spaces (only spaces) around the value; only the
        // literal "yes" reads as true.
        ValueKind::Bool => Ok(Value::Bool(raw.trim_matches(' ') == "yes")),
        ValueKind::Unknown => Err(LoadError::UnknownType {
            line: line.to_string(),
        }),
    }
}
