pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::Value;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// Flatten a grouped links payload into per-link rows. Used by the table
/// and CSV renderers; returns None for any other payload shape.
pub(crate) fn link_rows(value: &Value) -> Option<Vec<Vec<String>>> {
    let groups = value.as_object()?.get("groups")?.as_array()?;

    let mut rows = Vec::new();
    for group in groups {
        let label = group.get("label").and_then(Value::as_str).unwrap_or("");
        let links = group.get("links").and_then(Value::as_array)?;
        for link in links {
            let done = link.get("done").and_then(Value::as_bool).unwrap_or(false);
            let recommended = link
                .get("recommended")
                .and_then(Value::as_bool)
                .unwrap_or(false);
            rows.push(vec![
                if done { "x".to_string() } else { String::new() },
                link.get("id").and_then(Value::as_str).unwrap_or("").to_string(),
                if recommended {
                    format!("{} *", link.get("title").and_then(Value::as_str).unwrap_or(""))
                } else {
                    link.get("title").and_then(Value::as_str).unwrap_or("").to_string()
                },
                label.to_string(),
                link.get("tags")
                    .and_then(Value::as_array)
                    .map(|tags| {
                        tags.iter()
                            .filter_map(Value::as_str)
                            .collect::<Vec<_>>()
                            .join(", ")
                    })
                    .unwrap_or_default(),
                link.get("url").and_then(Value::as_str).unwrap_or("").to_string(),
            ]);
        }
    }
    Some(rows)
}

pub(crate) const LINK_HEADERS: [&str; 6] = ["done", "id", "title", "category", "tags", "url"];
