use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DrawioError {
    #[error("Missing configuration: {field} is not set")]
    ConfigurationMissing { field: String },

    #[error("Template file not found: '{}'", .path.display())]
    TemplateMissing { path: PathBuf },

    #[error("Invalid file name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("File already exists: '{}'", .path.display())]
    AlreadyExists { path: PathBuf },

    #[error("Failed to copy template to '{}': {}", .path.display(), .source)]
    CopyFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML parsing error: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Filesystem,
    Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl DrawioError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DrawioError::ConfigurationMissing { .. }
            | DrawioError::TemplateMissing { .. }
            | DrawioError::InvalidConfigValue { .. }
            | DrawioError::Config { .. } => ErrorCategory::Configuration,
            DrawioError::InvalidName { .. } => ErrorCategory::Input,
            DrawioError::AlreadyExists { .. }
            | DrawioError::CopyFailed { .. }
            | DrawioError::Io(_) => ErrorCategory::Filesystem,
            DrawioError::Xml(_) | DrawioError::Csv(_) | DrawioError::Serialization(_) => {
                ErrorCategory::Format
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            DrawioError::InvalidName { .. } | DrawioError::AlreadyExists { .. } => {
                ErrorSeverity::Medium
            }
            DrawioError::CopyFailed { .. } | DrawioError::Io(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    /// Process exit status for the `drawio-new` binary. Never 0.
    pub fn exit_code(&self) -> i32 {
        match self {
            DrawioError::InvalidName { .. } => 2,
            DrawioError::ConfigurationMissing { .. }
            | DrawioError::InvalidConfigValue { .. }
            | DrawioError::Config { .. } => 3,
            DrawioError::TemplateMissing { .. } => 4,
            DrawioError::AlreadyExists { .. } => 5,
            DrawioError::CopyFailed { .. } => 6,
            _ => 1,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DrawioError::ConfigurationMissing { field } => {
                format!("{} is not configured", field)
            }
            DrawioError::TemplateMissing { path } if path.as_os_str().is_empty() => {
                "No template file is configured".to_string()
            }
            DrawioError::TemplateMissing { path } => {
                format!("Template file '{}' does not exist", path.display())
            }
            DrawioError::InvalidName { name, reason } if name.is_empty() => {
                format!("No file name given: {}", reason)
            }
            DrawioError::InvalidName { name, reason } => {
                format!("'{}' is not a valid file name: {}", name, reason)
            }
            DrawioError::AlreadyExists { path } => {
                format!("'{}' already exists, refusing to overwrite it", path.display())
            }
            DrawioError::CopyFailed { path, source } => {
                format!("Could not create '{}': {}", path.display(), source)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            DrawioError::ConfigurationMissing { field } => format!(
                "Export {} or set it in the file passed with --config",
                field
            ),
            DrawioError::TemplateMissing { .. } => {
                "Point TEMPLATE_FILE (or [paths].template_file) at an existing .drawio file"
                    .to_string()
            }
            DrawioError::InvalidName { .. } => {
                "Use only letters, digits, '_', '.' and '-', e.g. 'my-diagram'".to_string()
            }
            DrawioError::AlreadyExists { .. } => {
                "Pick another name or remove the existing file first".to_string()
            }
            DrawioError::CopyFailed { .. } => {
                "Check that the target folder exists, is writable and has free space".to_string()
            }
            DrawioError::InvalidConfigValue { field, .. } => {
                format!("Fix the value of {} in your configuration", field)
            }
            DrawioError::Config { .. } => {
                "Make sure the config file exists and is valid TOML".to_string()
            }
            DrawioError::Io(_) => "Check the file path and its permissions".to_string(),
            DrawioError::Xml(_) => "Make sure the file is an uncompressed draw.io diagram".to_string(),
            DrawioError::Csv(_) | DrawioError::Serialization(_) => {
                "Try another output format".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DrawioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct_and_non_zero() {
        let errors = [
            DrawioError::InvalidName {
                name: "a b".to_string(),
                reason: "space".to_string(),
            },
            DrawioError::ConfigurationMissing {
                field: "TARGET_FOLDER".to_string(),
            },
            DrawioError::TemplateMissing {
                path: PathBuf::from("/nope"),
            },
            DrawioError::AlreadyExists {
                path: PathBuf::from("/tmp/x.drawio"),
            },
            DrawioError::CopyFailed {
                path: PathBuf::from("/tmp/x.drawio"),
                source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            },
        ];

        let mut codes: Vec<i32> = errors.iter().map(|e| e.exit_code()).collect();
        assert!(codes.iter().all(|code| *code != 0));
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_copy_failed_keeps_source() {
        let err = DrawioError::CopyFailed {
            path: PathBuf::from("out/x.drawio"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };

        assert_eq!(err.category(), ErrorCategory::Filesystem);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_missing_template_message_without_path() {
        let err = DrawioError::TemplateMissing {
            path: PathBuf::new(),
        };
        assert_eq!(err.user_friendly_message(), "No template file is configured");
    }
}
