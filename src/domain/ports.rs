use std::fmt::Debug;
use std::path::Path;

/// A source of creator settings. Every value is optional so that several
/// sources can be layered; the first one that answers wins.
pub trait ConfigProvider {
    fn template_file(&self) -> Option<&Path>;
    fn target_folder(&self) -> Option<&Path>;

    fn open_enabled(&self) -> Option<bool> {
        None
    }

    fn open_command(&self) -> Option<&str> {
        None
    }

    fn open_args(&self) -> Option<&[String]> {
        None
    }
}

/// Asks the host to open a file with whatever handles it.
///
/// Fire-and-forget: implementations must not block on the handler and
/// report nothing back. Failures are at most logged.
pub trait Opener: Debug {
    fn request_open(&self, path: &Path);
}
