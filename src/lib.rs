pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::NewArgs;
pub use crate::config::{EnvConfig, OpenSettings, Settings, TomlConfig};

pub use crate::core::creator::{create_and_open, create_from_template, FileCreator};
pub use crate::core::diagram::{parse_diagram, parse_diagram_str};
pub use crate::core::naming::DiagramName;
pub use crate::core::opener::{opener_for, CommandOpener, NoopOpener};
#[cfg(feature = "cli")]
pub use crate::core::opener::SystemOpener;
pub use crate::core::report::render;
pub use crate::domain::model::{DrawioElement, OutputFormat};
pub use crate::domain::ports::{ConfigProvider, Opener};
pub use crate::utils::error::{DrawioError, Result};
