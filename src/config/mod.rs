pub mod env;
pub mod settings;
pub mod toml_config;

pub use env::EnvConfig;
pub use settings::{OpenSettings, Settings};
pub use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::{Path, PathBuf};

/// Command line of `drawio-new`.
///
/// The template and target folder come from `TEMPLATE_FILE` and
/// `TARGET_FOLDER`, or from the file given with `--config`.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "drawio-new")]
#[command(about = "Create a new draw.io diagram from a template and open it")]
pub struct NewArgs {
    /// Name of the new diagram; `.drawio` is appended when missing
    pub file_name: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Create the file without opening it
    #[arg(long)]
    pub no_open: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit log lines as JSON
    #[arg(long)]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for NewArgs {
    fn template_file(&self) -> Option<&Path> {
        None
    }

    fn target_folder(&self) -> Option<&Path> {
        None
    }

    fn open_enabled(&self) -> Option<bool> {
        self.no_open.then_some(false)
    }
}
