use crate::core::ConfigProvider;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const TEMPLATE_FILE_VAR: &str = "TEMPLATE_FILE";
pub const TARGET_FOLDER_VAR: &str = "TARGET_FOLDER";

/// Settings taken from `TEMPLATE_FILE` and `TARGET_FOLDER`.
///
/// Empty variables are treated as unset.
#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    template_file: Option<PathBuf>,
    target_folder: Option<PathBuf>,
}

impl EnvConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let read = |key: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from)
        };

        Self {
            template_file: read(TEMPLATE_FILE_VAR),
            target_folder: read(TARGET_FOLDER_VAR),
        }
    }
}

impl ConfigProvider for EnvConfig {
    fn template_file(&self) -> Option<&Path> {
        self.template_file.as_deref()
    }

    fn target_folder(&self) -> Option<&Path> {
        self.target_folder.as_deref()
    }
}
