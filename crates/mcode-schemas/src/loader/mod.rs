//! Profile loading
//!
//! Reads one JSON document from disk. The file handle lives only for the
//! duration of [`load_profile`], so it is released on success and on every
//! error path alike.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use mcode_schemas::loader::load_profile;
//! use std::path::Path;
//!
//! let profile = load_profile(Path::new("jordan-avery.json"))?;
//! println!("Loaded persona: {}", profile["persona_id"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Copyright (c) 2025 MCode Team
//! Licensed under the Apache-2.0 license

pub mod error;

pub use error::{LoaderError, LoaderResult};

use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

/// Load and parse a profile document from `path`
pub fn load_profile(path: &Path) -> LoaderResult<Value> {
    debug!(path = %path.display(), "Opening profile");
    let file = File::open(path).map_err(|e| LoaderError::io_error(path, e))?;
    let reader = BufReader::new(file);

    let document: Value =
        serde_json::from_reader(reader).map_err(|e| LoaderError::json_error(path, e))?;
    debug!(path = %path.display(), "Profile parsed");
    Ok(document)
}

/// Parse profile content that was already read; `path` is used for error context
pub fn parse_profile(content: &str, path: &Path) -> LoaderResult<Value> {
    serde_json::from_str(content).map_err(|e| LoaderError::json_error(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_profile() {
        let value = parse_profile(r#"{"schema_version": "1.0"}"#, Path::new("inline.json")).unwrap();
        assert_eq!(value["schema_version"], "1.0");

        let err = parse_profile("{ not json", Path::new("inline.json")).unwrap_err();
        assert!(matches!(err, LoaderError::JsonParseError { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_profile(Path::new("/definitely/not/here/profile.json")).unwrap_err();
        assert!(matches!(err, LoaderError::NotFound { .. }));
    }
}
