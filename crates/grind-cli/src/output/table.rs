use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::{link_rows, LINK_HEADERS};

/// Format output as a table using the tabled crate.
pub fn print_table(value: &Value) {
    // Board listing: one row per link
    if let Some(rows) = link_rows(value) {
        let mut builder = Builder::default();
        builder.push_record(LINK_HEADERS);
        for row in rows {
            builder.push_record(row);
        }
        println!("{}", Table::from(builder));
        return;
    }

    match value {
        Value::Object(map) => {
            // Projection envelope: result section plus warnings/methodology
            if let Some(result) = map.get("result") {
                print_field_table(result);
                print_envelope_footers(map);
            } else if let Some(Value::Array(by_category)) = map.get("by_category") {
                // Stats payload: headline fields, then the per-category table
                let headline: Value = Value::Object(
                    map.iter()
                        .filter(|(k, _)| k.as_str() != "by_category")
                        .map(|(k, v)| (k.clone(), v.clone()))
                        .collect(),
                );
                print_field_table(&headline);
                println!();
                print_object_rows(by_category);
            } else {
                print_field_table(value);
            }
        }
        Value::Array(arr) => print_object_rows(arr),
        _ => println!("{}", value),
    }
}

fn print_field_table(value: &Value) {
    if let Value::Object(map) = value {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in map {
            builder.push_record([key.as_str(), &render(val)]);
        }
        println!("{}", Table::from(builder));
    } else {
        println!("{}", value);
    }
}

fn print_object_rows(arr: &[Value]) {
    if arr.is_empty() {
        println!("(empty)");
        return;
    }

    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<String> = first.keys().cloned().collect();
        let mut builder = Builder::default();
        builder.push_record(&headers);
        for item in arr {
            if let Value::Object(map) = item {
                builder.push_record(
                    headers
                        .iter()
                        .map(|h| map.get(h.as_str()).map(render).unwrap_or_default())
                        .collect::<Vec<_>>(),
                );
            }
        }
        println!("{}", Table::from(builder));
    } else {
        for item in arr {
            println!("{}", render(item));
        }
    }
}

fn print_envelope_footers(envelope: &serde_json::Map<String, Value>) {
    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(methodology)) = envelope.get("methodology") {
        println!("\nMethodology: {}", methodology);
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(arr) => arr.iter().map(render).collect::<Vec<_>>().join(", "),
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}
