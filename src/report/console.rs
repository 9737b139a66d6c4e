use crate::report::report_model::RunReport;

// ============================================================================
// Console summary
// ============================================================================

/// Format the end-of-run summary.
///
/// ```text
/// Processed 12 files, assigned 31 ids
/// Processed 3 files, assigned 4 ids (dry run, nothing written), 1 failed:
///   res/layout/broken.xml: Malformed XML ...
/// ```
pub fn format_summary(report: &RunReport, dry_run: bool) -> String {
    let mut out = format!(
        "Processed {} files, assigned {} ids",
        report.file_count(),
        report.assigned_count()
    );

    if dry_run {
        out.push_str(" (dry run, nothing written)");
    }

    if let Some(ms) = report.duration_ms {
        out.push_str(&format!(" in {:.1}s", ms as f64 / 1000.0));
    }

    if report.failures.is_empty() {
        out.push('\n');
        return out;
    }

    out.push_str(&format!(", {} failed:\n", report.failures.len()));
    for failure in &report.failures {
        match &failure.path {
            Some(path) => out.push_str(&format!("  {}: {}\n", path.display(), failure.message)),
            None => out.push_str(&format!("  {}\n", failure.message)),
        }
    }
    out
}
