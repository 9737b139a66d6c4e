use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::diff::xml_diff::{default_first_temp, default_second_temp};
use crate::inject::id_gen::DEFAULT_ID_UPPER_BOUND;

pub const DEFAULT_CONFIG_FILE: &str = "android-layout-ids.yaml";

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "android-layout-ids",
    version,
    about = "Add missing android:id attributes to layout/menu XML and diff XML files"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: android-layout-ids.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Append JSON-lines trace events to this file
    #[arg(long, global = true)]
    pub trace: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inject android:id into widgets under res/layout* and res/menu*
    Inject {
        /// Project directories to scan
        #[arg(required = true)]
        roots: Vec<PathBuf>,

        /// Report assignments without rewriting any file
        #[arg(long)]
        dry_run: bool,

        /// Continue with the next file after an error
        #[arg(long)]
        keep_going: bool,

        /// Never issue the same id twice in one run
        #[arg(long)]
        unique: bool,
    },

    /// Print the textual diff of two XML files after normalizing both
    Diff {
        /// The two XML files to compare
        files: Vec<PathBuf>,

        /// Diff program to run (default: diff)
        #[arg(long)]
        program: Option<String>,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `android-layout-ids.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub inject: InjectConfig,
    #[serde(default)]
    pub diff: DiffConfig,
    #[serde(default)]
    pub trace: TraceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InjectConfig {
    /// Tag names appended to the built-in widget list
    #[serde(default)]
    pub extra_widgets: Vec<String>,

    #[serde(default = "default_upper_bound")]
    pub id_upper_bound: u64,

    #[serde(default)]
    pub unique_ids: bool,

    #[serde(default)]
    pub keep_going: bool,

    #[serde(default)]
    pub dry_run: bool,
}

impl Default for InjectConfig {
    fn default() -> Self {
        Self {
            extra_widgets: Vec::new(),
            id_upper_bound: DEFAULT_ID_UPPER_BOUND,
            unique_ids: false,
            keep_going: false,
            dry_run: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiffConfig {
    #[serde(default = "default_diff_program")]
    pub program: String,

    #[serde(default)]
    pub args: Vec<String>,

    #[serde(default = "default_first_temp")]
    pub first_temp: PathBuf,

    #[serde(default = "default_second_temp")]
    pub second_temp: PathBuf,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            program: default_diff_program(),
            args: Vec::new(),
            first_temp: default_first_temp(),
            second_temp: default_second_temp(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TraceConfig {
    pub path: Option<PathBuf>,
}

// Serde default helpers
fn default_upper_bound() -> u64 { DEFAULT_ID_UPPER_BOUND }
fn default_diff_program() -> String { "diff".to_string() }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if the file is missing;
/// a malformed file also yields defaults, with a warning.
pub fn load_config(path: Option<&std::path::Path>) -> AppConfig {
    let config_path = path.unwrap_or(std::path::Path::new(DEFAULT_CONFIG_FILE));
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|e| {
            eprintln!(
                "Warning: ignoring malformed config '{}': {}",
                config_path.display(),
                e
            );
            AppConfig::default()
        }),
        Err(_) => AppConfig::default(),
    }
}
