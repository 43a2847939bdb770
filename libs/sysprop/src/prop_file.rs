//! `build.prop` text snapshots
//!
//! The format init reads from `/system/build.prop` and friends:
//!
//! ```text
//! # comment
//! ro.product.device=ks01lte
//! ro.build.description=ks01ltexx-user 5.0.1 LRX22C I9506XXUDRB1 release-keys
//! import /vendor/default.prop
//! ```
//!
//! Blank lines, `#` comments and `import` directives are skipped. Key and
//! value are trimmed; the value is everything after the first `=`. When a key
//! appears twice the later line wins.
//!
//! [`render`] refuses properties that would not read back unchanged: keys
//! with `=`, whitespace or a leading `#`, and values with line breaks or
//! surrounding whitespace.

use std::io;
use std::path::Path;

use thiserror::Error;

use crate::MemoryStore;

/// Error reading or writing a `build.prop` snapshot
#[derive(Debug, Error)]
pub enum PropFileError {
    /// A line that is neither a comment nor `key=value`
    #[error("Malformed property on line {line}: {content:?}")]
    Malformed {
        /// 1-based line number
        line: usize,
        /// The offending line, untrimmed
        content: String,
    },
    /// A property that cannot be written as one `key=value` line
    #[error("Property {key:?} cannot be written to build.prop: {reason}")]
    Unrepresentable {
        /// Property key
        key: String,
        /// Why the line would not read back unchanged
        reason: &'static str,
    },
    /// The snapshot file could not be read
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Parse `build.prop` text into a store.
pub fn parse(text: &str) -> Result<MemoryStore, PropFileError> {
    let mut store = MemoryStore::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with("import ") {
            continue;
        }

        let malformed = || PropFileError::Malformed {
            line: idx + 1,
            content: raw.to_string(),
        };

        let (key, value) = line.split_once('=').ok_or_else(malformed)?;
        let key = key.trim();
        if key.is_empty() {
            return Err(malformed());
        }

        store.set(key, value.trim());
    }

    log::debug!("Parsed {} properties", store.len());
    Ok(store)
}

/// Read and parse a `build.prop` file.
pub fn load(path: &Path) -> Result<MemoryStore, PropFileError> {
    log::debug!("Loading properties from {}", path.display());
    let text = std::fs::read_to_string(path)?;
    parse(&text)
}

fn check_line(key: &str, value: &str) -> Result<(), PropFileError> {
    let reason = if key.is_empty() {
        Some("empty key")
    } else if key.starts_with('#') {
        Some("key starts with '#'")
    } else if key.contains('=') {
        Some("key contains '='")
    } else if key.chars().any(char::is_whitespace) {
        Some("key contains whitespace")
    } else if value.contains(['\n', '\r']) {
        Some("value contains a line break")
    } else if value.trim() != value {
        Some("value has leading or trailing whitespace")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(PropFileError::Unrepresentable {
            key: key.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}

/// Serialise a store back to `build.prop` text, one property per line.
///
/// Fails on the first property [`parse`] would not read back unchanged.
pub fn render(store: &MemoryStore) -> Result<String, PropFileError> {
    let mut out = String::new();
    for (key, value) in store.iter() {
        check_line(key, value)?;
        out.push_str(key);
        out.push('=');
        out.push_str(value);
        out.push('\n');
    }
    Ok(out)
}
