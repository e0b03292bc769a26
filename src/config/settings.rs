use crate::config::env::{TARGET_FOLDER_VAR, TEMPLATE_FILE_VAR};
use crate::core::ConfigProvider;
use crate::utils::error::{DrawioError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_required_field};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenSettings {
    pub enabled: bool,
    /// Program to open new files with. `None` means the OS default handler.
    pub command: Option<String>,
    pub args: Vec<String>,
}

impl Default for OpenSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            command: None,
            args: Vec::new(),
        }
    }
}

/// Resolved once at startup and passed down explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub template_file: PathBuf,
    pub target_folder: PathBuf,
    pub open: OpenSettings,
}

impl Settings {
    /// Layers `sources`, highest precedence first.
    ///
    /// A missing template, whether unset or pointing at nothing, is reported
    /// before a missing target folder, the same order in which the creator
    /// checks them.
    pub fn resolve(sources: &[&dyn ConfigProvider]) -> Result<Self> {
        let template_file = sources
            .iter()
            .find_map(|source| source.template_file())
            .map(PathBuf::from)
            .ok_or_else(|| DrawioError::TemplateMissing {
                path: PathBuf::new(),
            })?;
        validate_path(TEMPLATE_FILE_VAR, &template_file)?;

        let target_folder = sources
            .iter()
            .find_map(|source| source.target_folder())
            .map(PathBuf::from);
        if target_folder.is_none() && !template_file.is_file() {
            return Err(DrawioError::TemplateMissing {
                path: template_file,
            });
        }
        let target_folder = validate_required_field(TARGET_FOLDER_VAR, &target_folder)?.clone();
        validate_path(TARGET_FOLDER_VAR, &target_folder)?;

        let defaults = OpenSettings::default();
        let command = sources
            .iter()
            .find_map(|source| source.open_command())
            .map(str::to_string);
        if let Some(command) = &command {
            validate_non_empty_string("open.command", command)?;
        }

        let open = OpenSettings {
            enabled: sources
                .iter()
                .find_map(|source| source.open_enabled())
                .unwrap_or(defaults.enabled),
            command,
            args: sources
                .iter()
                .find_map(|source| source.open_args())
                .map(<[String]>::to_vec)
                .unwrap_or(defaults.args),
        };

        tracing::debug!(
            "Resolved settings: template={}, target={}, open={:?}",
            template_file.display(),
            target_folder.display(),
            open
        );

        Ok(Self {
            template_file,
            target_folder,
            open,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::NamedTempFile;

    #[derive(Default)]
    struct Fixed {
        template_file: Option<PathBuf>,
        target_folder: Option<PathBuf>,
        open_enabled: Option<bool>,
        open_command: Option<String>,
    }

    impl ConfigProvider for Fixed {
        fn template_file(&self) -> Option<&Path> {
            self.template_file.as_deref()
        }

        fn target_folder(&self) -> Option<&Path> {
            self.target_folder.as_deref()
        }

        fn open_enabled(&self) -> Option<bool> {
            self.open_enabled
        }

        fn open_command(&self) -> Option<&str> {
            self.open_command.as_deref()
        }
    }

    #[test]
    fn test_first_source_wins() {
        let high = Fixed {
            template_file: Some(PathBuf::from("/env/t.drawio")),
            ..Default::default()
        };
        let low = Fixed {
            template_file: Some(PathBuf::from("/file/t.drawio")),
            target_folder: Some(PathBuf::from("/file/out")),
            open_command: Some("drawio".to_string()),
            ..Default::default()
        };

        let settings = Settings::resolve(&[&high, &low]).unwrap();

        assert_eq!(settings.template_file, PathBuf::from("/env/t.drawio"));
        assert_eq!(settings.target_folder, PathBuf::from("/file/out"));
        assert_eq!(settings.open.command.as_deref(), Some("drawio"));
        assert!(settings.open.enabled);
    }

    #[test]
    fn test_missing_template_reported_first() {
        let empty = Fixed::default();
        assert!(matches!(
            Settings::resolve(&[&empty]),
            Err(DrawioError::TemplateMissing { .. })
        ));
    }

    #[test]
    fn test_missing_target_folder() {
        let template = NamedTempFile::new().unwrap();
        let only_template = Fixed {
            template_file: Some(template.path().to_path_buf()),
            ..Default::default()
        };

        match Settings::resolve(&[&only_template]) {
            Err(DrawioError::ConfigurationMissing { field }) => assert_eq!(field, "TARGET_FOLDER"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_nonexistent_template_wins_over_missing_target_folder() {
        let dir = tempfile::TempDir::new().unwrap();
        let absent = dir.path().join("absent.drawio");
        let only_template = Fixed {
            template_file: Some(absent.clone()),
            ..Default::default()
        };

        match Settings::resolve(&[&only_template]) {
            Err(DrawioError::TemplateMissing { path }) => assert_eq!(path, absent),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_open_can_be_disabled() {
        let flags = Fixed {
            open_enabled: Some(false),
            ..Default::default()
        };
        let paths = Fixed {
            template_file: Some(PathBuf::from("t.drawio")),
            target_folder: Some(PathBuf::from("out")),
            open_enabled: Some(true),
            ..Default::default()
        };

        let settings = Settings::resolve(&[&flags, &paths]).unwrap();
        assert!(!settings.open.enabled);
    }

    #[test]
    fn test_blank_open_command_rejected() {
        let paths = Fixed {
            template_file: Some(PathBuf::from("t.drawio")),
            target_folder: Some(PathBuf::from("out")),
            open_command: Some("  ".to_string()),
            ..Default::default()
        };

        assert!(matches!(
            Settings::resolve(&[&paths]),
            Err(DrawioError::InvalidConfigValue { .. })
        ));
    }
}
