//! Validation command handler and related utilities

use crate::error::Result;
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use mcode_schemas::{load_profile, ProfileValidator, SchemaValidator, Verdict};
use std::path::Path;
use tracing::{debug, error, info, instrument, warn};

/// Validate the profile at `path` and report to `output`
///
/// Returns whether the profile is valid together with its error messages.
/// The report is written when the profile is invalid or `verbose` is set;
/// warnings are never part of the return value.
#[instrument(skip(output), fields(file = %path.display()))]
pub fn check_profile_file(
    path: &Path,
    verbose: bool,
    output: &mut OutputWriter,
) -> Result<(bool, Vec<String>)> {
    let source = path.display().to_string();

    let document = {
        let _timer = Timer::with_details("load_profile", &format!("file: {}", source));
        load_profile(path)
    };
    let document = match document {
        Ok(document) => document,
        Err(e) => {
            error!(error = %e, "Failed to load profile");
            let errors = vec![e.to_string()];
            output.validation_report(&source, &errors, &[], verbose)?;
            return Ok((false, errors));
        }
    };

    let timer = Timer::new("validate_profile");
    let verdict = ProfileValidator::new().validate(&document);
    timer.finish();

    if let Verdict::MissingFields { errors } = &verdict {
        warn!(missing = errors.len(), "Profile is missing required fields");
    }

    let is_valid = verdict.is_valid();
    let errors = verdict.error_messages();
    let warnings = verdict.warning_messages();
    debug!(
        errors = errors.len(),
        warnings = warnings.len(),
        "Validation verdict ready"
    );

    if verbose || !is_valid {
        output.validation_report(&source, &errors, &warnings, verbose)?;
    }

    Ok((is_valid, errors))
}

/// Handle a validate-sp invocation; returns whether the profile is valid
pub fn handle_validate(path: &Path, verbose: bool, output: &mut OutputWriter) -> Result<bool> {
    let _timer = Timer::with_details("validate_command", &format!("file: {}", path.display()));
    info!("Starting validation process");

    let (is_valid, errors) = check_profile_file(path, verbose, output)?;
    crate::log_with_run_id!(
        info,
        valid = is_valid,
        errors = errors.len(),
        "Validation finished"
    );
    Ok(is_valid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcode_schemas::sample_profile;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::io::{self, Write};
    use std::rc::Rc;
    use tempfile::NamedTempFile;

    #[derive(Clone, Default)]
    struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture() -> (OutputWriter, SharedBuffer) {
        let buffer = SharedBuffer::default();
        (OutputWriter::with_writer(false, Box::new(buffer.clone())), buffer)
    }

    fn printed(buffer: &SharedBuffer) -> String {
        String::from_utf8(buffer.0.borrow().clone()).unwrap()
    }

    fn write_profile(value: &serde_json::Value) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(serde_json::to_string(value).unwrap().as_bytes())
            .unwrap();
        file
    }

    #[test]
    fn test_compliant_profile_is_silent() {
        let file = write_profile(&sample_profile());
        let (mut output, buffer) = capture();

        let result = check_profile_file(file.path(), false, &mut output).unwrap();
        assert_eq!(result, (true, vec![]));
        assert_eq!(printed(&buffer), "");
    }

    #[test]
    fn test_compliant_profile_verbose_prints_report() {
        let file = write_profile(&sample_profile());
        let (mut output, buffer) = capture();

        let (is_valid, _) = check_profile_file(file.path(), true, &mut output).unwrap();
        assert!(is_valid);
        assert!(printed(&buffer).contains("✅ VALID - Profile passes all required checks"));
    }

    #[test]
    fn test_invalid_profile_prints_errors_not_warnings() {
        let mut profile = sample_profile();
        profile["identity"]["display_name"] = serde_json::json!("");
        profile["persona_id"] = serde_json::json!("nobody");
        let file = write_profile(&profile);
        let (mut output, buffer) = capture();

        let (is_valid, errors) = check_profile_file(file.path(), false, &mut output).unwrap();
        assert!(!is_valid);
        assert_eq!(errors, vec!["identity.display_name is required"]);

        let report = printed(&buffer);
        assert!(report.contains("   • identity.display_name is required"));
        assert!(report.contains("❌ INVALID - 1 error(s) found"));
        assert!(!report.contains("persona_id"));
    }

    #[test]
    fn test_missing_file_is_single_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let (mut output, buffer) = capture();

        let (is_valid, errors) = check_profile_file(&path, false, &mut output).unwrap();
        assert!(!is_valid);
        assert_eq!(errors, vec![format!("File not found: {}", path.display())]);
        assert!(printed(&buffer).contains("❌ INVALID - 1 error(s) found"));
    }

    #[test]
    fn test_malformed_json_is_single_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{ \"schema_version\": ").unwrap();
        let (mut output, _buffer) = capture();

        let (is_valid, errors) = check_profile_file(file.path(), false, &mut output).unwrap();
        assert!(!is_valid);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("Invalid JSON: "));
    }

    #[test]
    fn test_handle_validate_returns_validity() {
        let file = write_profile(&serde_json::json!({"schema_version": "1.0"}));
        let (mut output, buffer) = capture();

        assert!(!handle_validate(file.path(), false, &mut output).unwrap());
        assert!(printed(&buffer).contains("❌ ERRORS (10):"));
    }
}
