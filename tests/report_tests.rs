use std::path::PathBuf;

use android_layout_ids::inject::injector::Assignment;
use android_layout_ids::report::console::format_summary;
use android_layout_ids::report::report_model::{FileFailure, FileReport, RunReport};

// ============================================================================
// Helper builders
// ============================================================================

fn file_report(path: &str, ids: &[&str], written: bool) -> FileReport {
    FileReport {
        path: PathBuf::from(path),
        assignments: ids
            .iter()
            .map(|id| Assignment {
                tag: "TextView".to_string(),
                id: id.to_string(),
            })
            .collect(),
        written,
    }
}

fn mixed_report() -> RunReport {
    RunReport {
        files: vec![
            file_report("res/layout/a.xml", &["@+id/TextView_1", "@+id/TextView_2"], true),
            file_report("res/layout/b.xml", &[], true),
        ],
        failures: vec![FileFailure {
            path: Some(PathBuf::from("res/layout/c.xml")),
            message: "Malformed XML".to_string(),
        }],
        duration_ms: None,
    }
}

// ============================================================================
// Report model
// ============================================================================

#[test]
fn counts_are_aggregated() {
    let report = mixed_report();
    assert_eq!(report.file_count(), 2);
    assert_eq!(report.assigned_count(), 2);
    assert_eq!(report.written_count(), 2);
    assert!(!report.succeeded());
}

#[test]
fn empty_report_succeeds() {
    let report = RunReport::default();
    assert_eq!(report.file_count(), 0);
    assert_eq!(report.assigned_count(), 0);
    assert!(report.succeeded());
}

#[test]
fn report_serializes_to_json() {
    let json = serde_json::to_value(mixed_report()).unwrap();
    assert_eq!(json["files"][0]["assignments"][1]["id"], "@+id/TextView_2");
    assert_eq!(json["failures"][0]["path"], "res/layout/c.xml");
    assert!(json.get("duration_ms").is_none());
}

// ============================================================================
// Console summary
// ============================================================================

#[test]
fn summary_for_clean_run() {
    let report = RunReport {
        files: vec![file_report("res/layout/a.xml", &["@+id/TextView_1"], true)],
        ..RunReport::default()
    };
    assert_eq!(format_summary(&report, false), "Processed 1 files, assigned 1 ids\n");
}

#[test]
fn summary_mentions_dry_run_and_duration() {
    let report = RunReport::default().with_duration(1500);
    let out = format_summary(&report, true);
    assert_eq!(out, "Processed 0 files, assigned 0 ids (dry run, nothing written) in 1.5s\n");
}

#[test]
fn summary_lists_failures() {
    let out = format_summary(&mixed_report(), false);
    assert!(out.starts_with("Processed 2 files, assigned 2 ids, 1 failed:\n"));
    assert!(out.contains("  res/layout/c.xml: Malformed XML\n"));
}

#[test]
fn summary_lists_failures_without_path() {
    let report = RunReport {
        failures: vec![FileFailure {
            path: None,
            message: "boom".to_string(),
        }],
        ..RunReport::default()
    };
    assert!(format_summary(&report, false).ends_with("1 failed:\n  boom\n"));
}
