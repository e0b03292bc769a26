use crate::utils::error::{DrawioError, Result};
use regex::Regex;
use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

pub const DRAWIO_EXTENSION: &str = ".drawio";

static ALLOWED_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_.-]+$").expect("name pattern is valid"));

/// A file name that passed the whitelist and carries the `.drawio` suffix.
///
/// The whitelist has no path separators, so joining a `DiagramName` onto a
/// directory always yields a direct child of that directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramName(String);

impl DiagramName {
    pub fn parse(requested: &str) -> Result<Self> {
        validate_name(requested)?;
        Ok(Self(normalize_extension(requested)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DiagramName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<Path> for DiagramName {
    fn as_ref(&self) -> &Path {
        Path::new(&self.0)
    }
}

/// Full-match check against `[A-Za-z0-9_.-]+`.
pub fn validate_name(requested: &str) -> Result<()> {
    if requested.is_empty() {
        return Err(DrawioError::InvalidName {
            name: String::new(),
            reason: "a file name is required".to_string(),
        });
    }

    if !ALLOWED_NAME.is_match(requested) {
        let offending = requested
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')))
            .map(|c| format!("{:?}", c))
            .unwrap_or_default();

        return Err(DrawioError::InvalidName {
            name: requested.escape_default().to_string(),
            reason: format!(
                "character {} is not allowed; use letters, digits, '_', '.' or '-'",
                offending
            ),
        });
    }

    Ok(())
}

/// Appends `.drawio` unless the name already ends with it.
///
/// A bare `.drawio` counts as already suffixed and is returned unchanged.
pub fn normalize_extension(name: &str) -> String {
    if name.ends_with(DRAWIO_EXTENSION) {
        name.to_string()
    } else {
        format!("{}{}", name, DRAWIO_EXTENSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_whitelisted_names() {
        for name in ["diagram1", "my-diagram", "a_b.c", "V2.0", "-", "..", "x.drawio"] {
            assert!(validate_name(name).is_ok(), "{} should be accepted", name);
        }
    }

    #[test]
    fn test_rejects_everything_outside_the_whitelist() {
        let rejected = [
            "",
            "../evil",
            "a/b",
            "a\\b",
            "with space",
            "tab\there",
            "new\nline",
            "nul\0byte",
            "semi;colon",
            "$(rm -rf)",
            "`id`",
            "ünïcode",
            "diagram*",
            "trailing\n",
        ];
        for name in rejected {
            assert!(
                matches!(validate_name(name), Err(DrawioError::InvalidName { .. })),
                "{:?} should be rejected",
                name
            );
        }
    }

    #[test]
    fn test_normalize_extension() {
        assert_eq!(normalize_extension("diagram1"), "diagram1.drawio");
        assert_eq!(normalize_extension("diagram1.drawio"), "diagram1.drawio");
        assert_eq!(normalize_extension("diagram1.DRAWIO"), "diagram1.DRAWIO.drawio");
        assert_eq!(normalize_extension("archive.drawio.bak"), "archive.drawio.bak.drawio");
        assert_eq!(normalize_extension("diagramdrawio"), "diagramdrawio.drawio");
    }

    #[test]
    fn test_bare_extension_is_kept() {
        let name = DiagramName::parse(".drawio").unwrap();
        assert_eq!(name.as_str(), ".drawio");
    }

    #[test]
    fn test_parse_never_doubles_the_suffix() {
        let once = DiagramName::parse("diagram1").unwrap();
        let twice = DiagramName::parse(once.as_str()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_invalid_name_reports_offending_character() {
        match validate_name("a b") {
            Err(DrawioError::InvalidName { reason, .. }) => assert!(reason.contains("' '")),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
