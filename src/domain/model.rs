use serde::{Deserialize, Serialize};

/// One shape from the first page of a draw.io diagram.
///
/// draw.io stores everything as XML attributes, so every field is kept as the
/// raw attribute string and is absent when the attribute is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawioElement {
    pub id: Option<String>,
    pub value: Option<String>,
    pub label: Option<String>,
    pub tags: Option<String>,
    pub style: Option<String>,
    pub parent: Option<String>,
    pub vertex: Option<String>,
    pub x: Option<String>,
    pub y: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
}

impl DrawioElement {
    /// The visible text of the shape: `label` for objects, `value` for plain cells.
    pub fn content(&self) -> Option<&str> {
        self.label.as_deref().or(self.value.as_deref())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Tsv,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_prefers_label() {
        let element = DrawioElement {
            id: Some("2".to_string()),
            value: Some("cell value".to_string()),
            label: Some("object label".to_string()),
            ..Default::default()
        };
        assert_eq!(element.content(), Some("object label"));
    }

    #[test]
    fn test_content_falls_back_to_value() {
        let element = DrawioElement {
            value: Some("cell value".to_string()),
            ..Default::default()
        };
        assert_eq!(element.content(), Some("cell value"));
        assert_eq!(DrawioElement::default().content(), None);
    }
}
