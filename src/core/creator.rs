use crate::config::Settings;
use crate::core::naming::DiagramName;
use crate::domain::ports::Opener;
use crate::utils::error::{DrawioError, Result};
use std::fs::{self, File, OpenOptions};
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

/// Creates new diagram files by copying a template into a target folder.
#[derive(Debug, Clone)]
pub struct FileCreator {
    template_file: PathBuf,
    target_folder: PathBuf,
}

impl FileCreator {
    pub fn new(template_file: impl Into<PathBuf>, target_folder: impl Into<PathBuf>) -> Self {
        Self {
            template_file: template_file.into(),
            target_folder: target_folder.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(&settings.template_file, &settings.target_folder)
    }

    pub fn template_file(&self) -> &Path {
        &self.template_file
    }

    pub fn target_folder(&self) -> &Path {
        &self.target_folder
    }

    /// Runs the whole pipeline for one requested name and returns the path
    /// of the new file. Nothing is written unless every check passes, and an
    /// existing file is never replaced.
    pub fn create_from_template(&self, requested_name: &str) -> Result<PathBuf> {
        ensure_template(&self.template_file)?;

        let name = DiagramName::parse(requested_name)?;
        tracing::debug!("Normalized '{}' to '{}'", requested_name, name);

        let target = self.target_folder.join(&name);
        ensure_vacant(&target)?;

        copy_exclusive(&self.template_file, &target)?;
        tracing::debug!("Created {} from template {}", target.display(), self.template_file.display());

        Ok(target)
    }
}

pub fn create_from_template(
    requested_name: &str,
    template_file: &Path,
    target_folder: &Path,
) -> Result<PathBuf> {
    FileCreator::new(template_file, target_folder).create_from_template(requested_name)
}

/// Creates the diagram, then asks `opener` to open it. The opener is only
/// called once the file exists.
pub fn create_and_open(
    creator: &FileCreator,
    requested_name: &str,
    opener: &dyn Opener,
) -> Result<PathBuf> {
    let path = creator.create_from_template(requested_name)?;
    tracing::info!("✅ Created {}", path.display());
    opener.request_open(&path);
    Ok(path)
}

fn ensure_template(template_file: &Path) -> Result<()> {
    match fs::metadata(template_file) {
        Ok(meta) if meta.is_file() => Ok(()),
        Ok(_) => {
            tracing::debug!("Template {} is not a regular file", template_file.display());
            Err(DrawioError::TemplateMissing {
                path: template_file.to_path_buf(),
            })
        }
        Err(e) => {
            tracing::debug!("Template {} is not accessible: {}", template_file.display(), e);
            Err(DrawioError::TemplateMissing {
                path: template_file.to_path_buf(),
            })
        }
    }
}

fn ensure_vacant(target: &Path) -> Result<()> {
    // symlink_metadata so that a dangling link still counts as occupied
    match fs::symlink_metadata(target) {
        Ok(_) => Err(DrawioError::AlreadyExists {
            path: target.to_path_buf(),
        }),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(DrawioError::CopyFailed {
            path: target.to_path_buf(),
            source: e,
        }),
    }
}

fn copy_exclusive(template_file: &Path, target: &Path) -> Result<()> {
    let mut source = File::open(template_file).map_err(|e| DrawioError::CopyFailed {
        path: target.to_path_buf(),
        source: e,
    })?;

    let mut destination = match OpenOptions::new().write(true).create_new(true).open(target) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            tracing::warn!("{} appeared after the collision check", target.display());
            return Err(DrawioError::AlreadyExists {
                path: target.to_path_buf(),
            });
        }
        Err(e) => {
            return Err(DrawioError::CopyFailed {
                path: target.to_path_buf(),
                source: e,
            })
        }
    };

    let copied = io::copy(&mut source, &mut destination).and_then(|bytes| {
        destination.sync_all()?;
        Ok(bytes)
    });

    match copied {
        Ok(bytes) => {
            tracing::debug!("Copied {} bytes to {}", bytes, target.display());
            Ok(())
        }
        Err(e) => {
            drop(destination);
            // the file is ours since create_new succeeded
            if let Err(cleanup) = fs::remove_file(target) {
                tracing::warn!("Could not remove partial file {}: {}", target.display(), cleanup);
            }
            Err(DrawioError::CopyFailed {
                path: target.to_path_buf(),
                source: e,
            })
        }
    }
}
