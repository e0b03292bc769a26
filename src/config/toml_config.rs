use crate::core::ConfigProvider;
use crate::utils::error::{DrawioError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static ENV_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("placeholder pattern is valid"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub paths: PathsConfig,
    pub open: Option<OpenConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    pub template_file: Option<PathBuf>,
    pub target_folder: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OpenConfig {
    pub enabled: Option<bool>,
    pub command: Option<String>,
    pub args: Option<Vec<String>>,
}

impl TomlConfig {
    /// Loads a config file. Relative paths inside it are taken relative to
    /// the directory holding the file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| DrawioError::Config {
            message: format!("cannot read '{}': {}", path.display(), e),
        })?;

        let mut config = Self::from_toml_str(&content)?;
        if let Some(base) = path.parent() {
            config.rebase(base);
        }
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| DrawioError::Config {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value. Unknown variables are
    /// left as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_PLACEHOLDER
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    fn rebase(&mut self, base: &Path) {
        for path in [&mut self.paths.template_file, &mut self.paths.target_folder]
            .into_iter()
            .flatten()
        {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}

impl ConfigProvider for TomlConfig {
    fn template_file(&self) -> Option<&Path> {
        self.paths.template_file.as_deref()
    }

    fn target_folder(&self) -> Option<&Path> {
        self.paths.target_folder.as_deref()
    }

    fn open_enabled(&self) -> Option<bool> {
        self.open.as_ref().and_then(|open| open.enabled)
    }

    fn open_command(&self) -> Option<&str> {
        self.open.as_ref().and_then(|open| open.command.as_deref())
    }

    fn open_args(&self) -> Option<&[String]> {
        self.open.as_ref().and_then(|open| open.args.as_deref())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(template_file) = &self.paths.template_file {
            validate_path("paths.template_file", template_file)?;
        }
        if let Some(target_folder) = &self.paths.target_folder {
            validate_path("paths.target_folder", target_folder)?;
        }
        if let Some(command) = self.open_command() {
            validate_non_empty_string("open.command", command)?;
        }
        Ok(())
    }
}
