use crate::domain::model::{DrawioElement, OutputFormat};
use crate::utils::error::{DrawioError, Result};
use serde::Serialize;

const COLUMNS: [&str; 3] = ["id", "content", "style"];

#[derive(Serialize)]
struct JsonRow<'a> {
    #[serde(flatten)]
    element: &'a DrawioElement,
    content: Option<&'a str>,
}

pub fn render(elements: &[DrawioElement], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(elements)),
        OutputFormat::Csv => render_delimited(elements, b','),
        OutputFormat::Tsv => render_delimited(elements, b'\t'),
        OutputFormat::Json => {
            let rows: Vec<JsonRow> = elements
                .iter()
                .map(|element| JsonRow {
                    element,
                    content: element.content(),
                })
                .collect();
            Ok(serde_json::to_string_pretty(&rows)?)
        }
    }
}

fn row(element: &DrawioElement) -> [&str; 3] {
    [
        element.id.as_deref().unwrap_or_default(),
        element.content().unwrap_or_default(),
        element.style.as_deref().unwrap_or_default(),
    ]
}

fn render_delimited(elements: &[DrawioElement], delimiter: u8) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    writer.write_record(COLUMNS)?;
    for element in elements {
        writer.write_record(row(element))?;
    }

    let bytes = writer.into_inner().map_err(|e| DrawioError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| DrawioError::Io(std::io::Error::other(e)))
}

fn render_table(elements: &[DrawioElement]) -> String {
    // Cells are flattened to one line so columns stay aligned.
    let rows: Vec<[String; 3]> = elements
        .iter()
        .map(|element| row(element).map(|cell| cell.replace(['\n', '\r'], " ")))
        .collect();

    let mut widths = COLUMNS.map(|c| c.chars().count());
    for cells in &rows {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_line(&COLUMNS.map(str::to_string), &widths));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for cells in &rows {
        lines.push(format_line(cells, &widths));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn format_line(cells: &[String; 3], widths: &[usize; 3]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    // Trailing empty cells are dropped so rows don't end in a bare separator.
    let last = cells
        .iter()
        .rposition(|cell| !cell.is_empty())
        .map_or(1, |i| i + 1);
    padded[..last].join(" | ").trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<DrawioElement> {
        vec![
            DrawioElement {
                id: Some("0".to_string()),
                ..Default::default()
            },
            DrawioElement {
                id: Some("svc".to_string()),
                label: Some("Service, main".to_string()),
                value: Some("ignored".to_string()),
                style: Some("shape=cylinder;".to_string()),
                ..Default::default()
            },
        ]
    }

    #[test]
    fn test_render_csv_quotes_commas() {
        let out = render(&sample(), OutputFormat::Csv).unwrap();
        assert_eq!(out, "id,content,style\n0,,\nsvc,\"Service, main\",shape=cylinder;\n");
    }

    #[test]
    fn test_render_tsv() {
        let out = render(&sample(), OutputFormat::Tsv).unwrap();
        assert_eq!(out, "id\tcontent\tstyle\n0\t\t\nsvc\tService, main\tshape=cylinder;\n");
    }

    #[test]
    fn test_render_json_includes_content() {
        let out = render(&sample(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[1]["content"], "Service, main");
        assert_eq!(value[1]["value"], "ignored");
        assert!(value[0]["content"].is_null());
    }

    #[test]
    fn test_render_table_aligns_columns() {
        let out = render(&sample(), OutputFormat::Table).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "id  | content       | style");
        assert_eq!(lines[1], "----+---------------+----------------");
        assert_eq!(lines[2], "0");
        assert_eq!(lines[3], "svc | Service, main | shape=cylinder;");
    }

    #[test]
    fn test_render_table_keeps_inner_empty_cells() {
        let elements = vec![DrawioElement {
            id: Some("edge".to_string()),
            style: Some("endArrow=none;".to_string()),
            ..Default::default()
        }];
        let out = render(&elements, OutputFormat::Table).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[2], "edge |         | endArrow=none;");
        assert!(out.lines().all(|line| !line.ends_with('|')));
    }

    #[test]
    fn test_render_empty_table_has_header() {
        let out = render(&[], OutputFormat::Table).unwrap();
        assert!(out.starts_with("id | content | style\n"));
    }
}
