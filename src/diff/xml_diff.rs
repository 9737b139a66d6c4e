use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::ToolError;
use crate::xml::XmlDocument;

/// Exit code reported when the diff program was killed by a signal.
pub const SIGNAL_EXIT_CODE: i32 = 2;

/// Textual diff of two XML files after normalizing both through the
/// document writer. No structural comparison is done; the external program
/// sees two serializations and compares them line by line.
#[derive(Debug, Clone)]
pub struct XmlDiff {
    pub program: String,
    /// Extra arguments placed before the two file paths
    pub args: Vec<String>,
    pub first_temp: PathBuf,
    pub second_temp: PathBuf,
}

impl Default for XmlDiff {
    fn default() -> Self {
        Self {
            program: "diff".to_string(),
            args: Vec::new(),
            first_temp: default_first_temp(),
            second_temp: default_second_temp(),
        }
    }
}

pub fn default_first_temp() -> PathBuf {
    std::env::temp_dir().join("f1.xml")
}

pub fn default_second_temp() -> PathBuf {
    std::env::temp_dir().join("f2.xml")
}

/// What the diff program produced.
#[derive(Debug, Clone, PartialEq)]
pub struct DiffOutcome {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl DiffOutcome {
    /// `diff` convention: 0 identical, 1 different, anything else trouble.
    pub fn identical(&self) -> bool {
        self.exit_code == 0
    }
}

/// Require exactly two input paths.
pub fn expect_two_files(paths: &[PathBuf]) -> Result<(&Path, &Path), ToolError> {
    match paths {
        [first, second] => Ok((first.as_path(), second.as_path())),
        _ => Err(ToolError::Arguments(format!(
            "diff needs exactly two XML files, got {}",
            paths.len()
        ))),
    }
}

impl XmlDiff {
    /// Validate the argument list, then diff the two files.
    pub fn run_args(&self, paths: &[PathBuf]) -> Result<DiffOutcome, ToolError> {
        let (first, second) = expect_two_files(paths)?;
        self.run(first, second)
    }

    pub fn run(&self, first: &Path, second: &Path) -> Result<DiffOutcome, ToolError> {
        // Both inputs must parse before either temp file is touched.
        let first_xml = normalize(first)?;
        let second_xml = normalize(second)?;

        std::fs::write(&self.first_temp, first_xml)
            .map_err(|e| ToolError::io(&self.first_temp, e))?;
        std::fs::write(&self.second_temp, second_xml)
            .map_err(|e| ToolError::io(&self.second_temp, e))?;

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(&self.first_temp)
            .arg(&self.second_temp)
            .output()
            .map_err(|e| ToolError::DiffSpawn {
                program: self.program.clone(),
                source: e,
            })?;

        Ok(DiffOutcome {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code().unwrap_or(SIGNAL_EXIT_CODE),
        })
    }
}

/// Load a file and return its serialization.
pub fn normalize(path: &Path) -> Result<String, ToolError> {
    let text = std::fs::read_to_string(path).map_err(|e| ToolError::io(path, e))?;
    let doc = XmlDocument::parse(&text).map_err(|source| ToolError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    doc.to_xml().map_err(|source| ToolError::Serialize {
        path: path.to_path_buf(),
        source,
    })
}
