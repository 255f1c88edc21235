// Tests for validation report formatting
//
// These tests pin the exact report layout, since scripts and people read it.

use super::*;
use pretty_assertions::assert_eq;
use std::cell::RefCell;
use std::rc::Rc;

/// A cloneable in-memory sink for inspecting what a writer produced
#[derive(Clone, Default)]
struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_invalid_report_layout() {
    let errors = strings(&[
        "Missing required field: identity",
        "Missing required field: dimensions",
    ]);
    let report = format_validation_report("jordan.json", &errors, &[], false, false);

    let expected = "\n\
============================================================\n\
Validation Results: jordan.json\n\
============================================================\n\
\n\
❌ ERRORS (2):\n   \
• Missing required field: identity\n   \
• Missing required field: dimensions\n\
\n\
❌ INVALID - 2 error(s) found\n\
\n";
    assert_eq!(report, expected);
}

#[test]
fn test_valid_verbose_report_lists_warnings() {
    let warnings = strings(&["language_that_resonates should have 10-20 words, found 4"]);
    let report = format_validation_report("jordan.json", &[], &warnings, true, false);

    let expected = "\n\
============================================================\n\
Validation Results: jordan.json\n\
============================================================\n\
\n\
⚠️  WARNINGS (1):\n   \
• language_that_resonates should have 10-20 words, found 4\n\
\n\
✅ VALID - Profile passes all required checks\n   \
(1 warnings)\n\
\n";
    assert_eq!(report, expected);
}

#[test]
fn test_warnings_hidden_without_verbose() {
    let errors = strings(&["identity.source must be 'mcode_assessment'"]);
    let warnings = strings(&["persona_id 'x' may not follow format: firstname-lastname-mcode-001"]);
    let report = format_validation_report("p.json", &errors, &warnings, false, false);

    assert!(report.contains("❌ ERRORS (1):"));
    assert!(!report.contains("WARNINGS"));
    assert!(!report.contains("persona_id"));
    assert!(report.contains("❌ INVALID - 1 error(s) found"));
}

#[test]
fn test_clean_valid_report_has_no_warning_count() {
    let report = format_validation_report("p.json", &[], &[], true, false);
    assert!(report.contains("✅ VALID - Profile passes all required checks\n\n"));
    assert!(!report.contains("warnings)"));
    assert!(!report.contains("ERRORS"));
}

#[test]
fn test_banner_width() {
    let report = format_validation_report("p.json", &[], &[], true, false);
    let banner = report.lines().nth(1).unwrap();
    assert_eq!(banner.len(), 60);
    assert!(banner.chars().all(|c| c == '='));
}

#[test]
fn test_plain_report_has_no_ansi_codes() {
    let errors = strings(&["boom"]);
    let report = format_validation_report("p.json", &errors, &[], false, false);
    assert!(!report.contains('\u{1b}'));
}

#[test]
fn test_writer_targets_custom_sink() {
    let buffer = SharedBuffer::default();
    let mut writer = OutputWriter::with_writer(false, Box::new(buffer.clone()));
    assert!(!writer.use_color());

    writer
        .validation_report("p.json", &strings(&["boom"]), &[], false)
        .unwrap();
    writer.write("done").unwrap();

    let written = buffer.contents();
    assert_eq!(
        written,
        format!("{}done", format_validation_report("p.json", &strings(&["boom"]), &[], false, false))
    );
}
