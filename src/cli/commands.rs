use std::io::Write;
use std::path::PathBuf;

use crate::cli::config::AppConfig;
use crate::diff::xml_diff::{XmlDiff, expect_two_files};
use crate::error::ToolError;
use crate::inject::id_gen::IdGenerator;
use crate::inject::runner::{InjectOptions, Injector};
use crate::inject::widgets::WidgetAllowList;
use crate::report::console::format_summary;
use crate::trace::logger::TraceLogger;
use crate::trace::trace::{TraceEvent, TraceKind};

// ============================================================================
// inject subcommand
// ============================================================================

/// Flags given on the command line. They can only switch features on; the
/// config file supplies the rest.
#[derive(Debug, Clone, Copy, Default)]
pub struct InjectFlags {
    pub dry_run: bool,
    pub keep_going: bool,
    pub unique: bool,
}

/// Run injection over the given roots and return whether every file
/// succeeded.
pub fn cmd_inject(
    roots: &[PathBuf],
    flags: InjectFlags,
    config: &AppConfig,
    tracer: &TraceLogger,
    verbose: u8,
) -> Result<bool, ToolError> {
    if roots.is_empty() {
        return Err(ToolError::Arguments("inject needs at least one root directory".into()));
    }
    if config.inject.id_upper_bound == 0 {
        return Err(ToolError::Arguments("inject.id_upper_bound must be greater than 0".into()));
    }

    let options = InjectOptions {
        dry_run: flags.dry_run || config.inject.dry_run,
        keep_going: flags.keep_going || config.inject.keep_going,
        verbose,
    };
    let widgets = WidgetAllowList::with_extra(&config.inject.extra_widgets);
    let ids = IdGenerator::new()
        .with_upper_bound(config.inject.id_upper_bound)
        .with_uniqueness(flags.unique || config.inject.unique_ids);

    if verbose > 1 {
        eprintln!(
            "{} widget types, id bound {}, dry_run={}, keep_going={}, unique={}",
            widgets.len(),
            config.inject.id_upper_bound,
            options.dry_run,
            options.keep_going,
            ids.tracks_uniqueness()
        );
    }

    let dry_run = options.dry_run;
    let start = std::time::Instant::now();
    let mut injector = Injector::new(widgets, ids, options, tracer);
    let report = injector.run(roots)?.with_duration(start.elapsed().as_millis());

    print!("{}", format_summary(&report, dry_run));
    Ok(report.succeeded())
}

// ============================================================================
// diff subcommand
// ============================================================================

/// Diff two XML files and return the diff program's exit code.
pub fn cmd_diff(
    files: &[PathBuf],
    program: Option<&str>,
    config: &AppConfig,
    tracer: &TraceLogger,
    verbose: u8,
) -> Result<i32, ToolError> {
    let differ = XmlDiff {
        program: program.unwrap_or(config.diff.program.as_str()).to_string(),
        args: config.diff.args.clone(),
        first_temp: config.diff.first_temp.clone(),
        second_temp: config.diff.second_temp.clone(),
    };

    if verbose > 0 {
        eprintln!(
            "Running {} on {} and {}",
            differ.program,
            differ.first_temp.display(),
            differ.second_temp.display()
        );
    }

    let (first, second) = expect_two_files(files)?;
    let outcome = differ.run(first, second)?;

    print!("{}", outcome.stdout);
    std::io::stdout()
        .flush()
        .map_err(|e| ToolError::io("<stdout>", e))?;
    if !outcome.stderr.is_empty() {
        eprint!("{}", outcome.stderr);
    }

    tracer.log(
        &TraceEvent::now(TraceKind::DiffCompleted, first)
            .with_exit_code(outcome.exit_code)
            .with_message(format!("{} vs {}", first.display(), second.display())),
    );

    Ok(outcome.exit_code)
}
