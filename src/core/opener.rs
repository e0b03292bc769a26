use crate::config::OpenSettings;
use crate::domain::ports::Opener;
use std::path::Path;
use std::process::{Command, Stdio};

/// Hands the file to the desktop's default application.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

#[cfg(feature = "cli")]
impl Opener for SystemOpener {
    fn request_open(&self, path: &Path) {
        tracing::debug!("Opening {} with the default handler", path.display());
        if let Err(e) = open::that_detached(path) {
            tracing::warn!("Could not open {}: {}", path.display(), e);
        }
    }
}

/// Spawns a configured program with the file path as its last argument.
#[derive(Debug, Clone)]
pub struct CommandOpener {
    program: String,
    args: Vec<String>,
}

impl CommandOpener {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    fn command(&self, path: &Path) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        command
    }
}

impl Opener for CommandOpener {
    fn request_open(&self, path: &Path) {
        tracing::debug!("Opening {} with '{}'", path.display(), self.program);
        // The child is not waited on.
        if let Err(e) = self.command(path).spawn() {
            tracing::warn!("Could not start '{}': {}", self.program, e);
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopOpener;

impl Opener for NoopOpener {
    fn request_open(&self, path: &Path) {
        tracing::debug!("Not opening {}", path.display());
    }
}

/// Picks the opener described by the resolved settings.
pub fn opener_for(settings: &OpenSettings) -> Box<dyn Opener> {
    if !settings.enabled {
        return Box::new(NoopOpener);
    }

    match &settings.command {
        Some(program) => Box::new(CommandOpener::new(program.clone(), settings.args.clone())),
        #[cfg(feature = "cli")]
        None => Box::new(SystemOpener),
        #[cfg(not(feature = "cli"))]
        None => Box::new(NoopOpener),
    }
}
