use std::path::{Path, PathBuf};

use rand::Rng;

use crate::error::ToolError;
use crate::report::report_model::{FileFailure, FileReport, RunReport};
use crate::resources::discovery::find_resource_files;
use crate::resources::persist::write_atomically;
use crate::trace::logger::TraceLogger;
use crate::trace::trace::{TraceEvent, TraceKind};
use crate::xml::XmlDocument;

use super::id_gen::IdGenerator;
use super::injector::inject;
use super::widgets::WidgetAllowList;

#[derive(Debug, Clone, Default)]
pub struct InjectOptions {
    /// Report what would change without writing files
    pub dry_run: bool,

    /// Record failures and move on instead of stopping at the first one
    pub keep_going: bool,

    /// Verbosity level from `-v`
    pub verbose: u8,
}

/// Drives injection over resource files, one file at a time.
pub struct Injector<'a, R: Rng> {
    widgets: WidgetAllowList,
    ids: IdGenerator<R>,
    options: InjectOptions,
    tracer: &'a TraceLogger,
}

impl<'a, R: Rng> Injector<'a, R> {
    pub fn new(
        widgets: WidgetAllowList,
        ids: IdGenerator<R>,
        options: InjectOptions,
        tracer: &'a TraceLogger,
    ) -> Self {
        Self {
            widgets,
            ids,
            options,
            tracer,
        }
    }

    /// Process every layout/menu file under each root, in argument order.
    ///
    /// Stops at the first error unless `keep_going` is set, in which case
    /// failures are collected in the report.
    pub fn run(&mut self, roots: &[PathBuf]) -> Result<RunReport, ToolError> {
        let mut report = RunReport::default();

        for root in roots {
            if self.options.verbose > 0 {
                eprintln!("Scanning {}", root.display());
            }

            let files = match find_resource_files(root) {
                Ok(files) => files,
                Err(e) => {
                    self.fail(&mut report, e)?;
                    continue;
                }
            };

            if self.options.verbose > 0 {
                eprintln!("  {} resource files", files.len());
            }

            for file in files {
                match self.process_file(&file) {
                    Ok(file_report) => report.files.push(file_report),
                    Err(e) => self.fail(&mut report, e)?,
                }
            }
        }

        Ok(report)
    }

    /// Parse, inject and rewrite one file.
    ///
    /// The file is read and parsed in full and the new content serialized
    /// before anything is written, so a malformed file is never modified.
    pub fn process_file(&mut self, path: &Path) -> Result<FileReport, ToolError> {
        println!("{}", path.display());

        let text = std::fs::read_to_string(path).map_err(|e| ToolError::io(path, e))?;
        let mut doc = XmlDocument::parse(&text).map_err(|source| ToolError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let assignments = inject(&mut doc, &self.widgets, &mut self.ids);
        for assignment in &assignments {
            println!("{}", assignment.id);
            self.tracer
                .log(&TraceEvent::now(TraceKind::IdAssigned, path).with_assignment(assignment));
        }

        let serialized = doc.to_xml().map_err(|source| ToolError::Serialize {
            path: path.to_path_buf(),
            source,
        })?;

        let written = if self.options.dry_run {
            false
        } else {
            write_atomically(path, &serialized)?;
            true
        };

        if self.options.verbose > 1 {
            eprintln!(
                "  {} ids assigned{}",
                assignments.len(),
                if written { "" } else { ", not written" }
            );
        }
        self.tracer.log(
            &TraceEvent::now(TraceKind::FileProcessed, path).with_assigned(assignments.len()),
        );

        Ok(FileReport {
            path: path.to_path_buf(),
            assignments,
            written,
        })
    }

    fn fail(&self, report: &mut RunReport, error: ToolError) -> Result<(), ToolError> {
        let path = error.path().map(Path::to_path_buf);
        if let Some(p) = &path {
            self.tracer
                .log(&TraceEvent::now(TraceKind::FileFailed, p).with_message(&error));
        }

        if !self.options.keep_going {
            return Err(error);
        }

        eprintln!("Error: {}", error);
        report.failures.push(FileFailure {
            path,
            message: error.to_string(),
        });
        Ok(())
    }
}
