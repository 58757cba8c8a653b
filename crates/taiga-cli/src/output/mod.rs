use serde::Serialize;
use serde_json::Value;
use taiga_core::ErrorKind;
use taiga_core::responses::{ApiEnvelope, StatusEnvelope};

use crate::cli::OutputFormat;

pub mod table;

/// Render a response in the requested format.
///
/// JSON and raw wrap the value in the `{success, message?, data}` envelope;
/// table shows the data alone.
pub fn render<T: Serialize>(
    value: &T,
    message: Option<&str>,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let mut envelope = ApiEnvelope::ok(value);
    if let Some(message) = message {
        envelope = envelope.with_message(message);
    }
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&envelope)?),
        OutputFormat::Raw => Ok(serde_json::to_string(&envelope)?),
        OutputFormat::Table => {
            let table = render_table(value)?;
            Ok(match message {
                Some(message) => format!("{message}\n\n{table}"),
                None => table,
            })
        }
    }
}

/// Print a response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render(value, None, format)?);
    Ok(())
}

/// Print a response with a summary message.
pub fn output_with_message<T: Serialize>(
    value: &T,
    message: &str,
    format: OutputFormat,
) -> anyhow::Result<()> {
    println!("{}", render(value, Some(message), format)?);
    Ok(())
}

/// Render a failure envelope; the status travels alongside for the exit path.
pub fn render_failure(kind: ErrorKind, detail: &str, format: OutputFormat) -> (u16, String) {
    let failure = StatusEnvelope::<()>::failure(kind, detail);
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&failure.body),
        OutputFormat::Raw | OutputFormat::Table => serde_json::to_string(&failure.body),
    }
    .unwrap_or_else(|_| format!(r#"{{"success":false,"detail":{detail:?}}}"#));
    (failure.status, rendered)
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let max_width = std::env::var("COLUMNS").ok().and_then(|c| c.parse().ok());
    match serde_json::to_value(value)? {
        Value::Array(items) => Ok(render_array_table(&items, max_width)),
        Value::Object(map) => {
            let rows = map
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            Ok(table::render_entity_table(&["key", "value"], &rows, max_width))
        }
        scalar => Ok(table::render_entity_table(
            &["value"],
            &[vec![value_to_cell(&scalar)]],
            max_width,
        )),
    }
}

fn render_array_table(items: &[Value], max_width: Option<usize>) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }
    if !items.iter().all(Value::is_object) {
        let rows = items.iter().map(|item| vec![value_to_cell(item)]).collect::<Vec<_>>();
        return table::render_entity_table(&["value"], &rows, max_width);
    }

    // Union of keys across items.
    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    table::render_entity_table(&header_refs, &rows, max_width)
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Object(map) if map.contains_key("name") => {
            map.get("name").map_or_else(String::new, value_to_cell)
        }
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::*;

    #[derive(Serialize)]
    struct Example {
        id: i64,
        subject: &'static str,
    }

    #[test]
    fn json_render_wraps_in_envelope() {
        let out = render(&Example { id: 7, subject: "x" }, None, OutputFormat::Json).unwrap();
        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["success"], true);
        assert_eq!(parsed["data"]["id"], 7);
        assert!(parsed.get("message").is_none());
    }

    #[test]
    fn raw_render_is_single_line_with_message() {
        let out = render(&vec![1, 2], Some("2 tasks created successfully"), OutputFormat::Raw)
            .unwrap();
        assert!(!out.contains('\n'));
        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["message"], "2 tasks created successfully");
    }

    #[test]
    fn table_render_lists_rows() {
        let rows = vec![Example { id: 1, subject: "A" }, Example { id: 2, subject: "B" }];
        let out = render(&rows, None, OutputFormat::Table).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("id"));
        assert!(lines[0].contains("subject"));
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn failure_envelope_carries_status() {
        let (status, out) = render_failure(ErrorKind::NotFound, "task 9 not found", OutputFormat::Raw);
        assert_eq!(status, 404);
        assert_eq!(out, r#"{"success":false,"detail":"task 9 not found"}"#);
    }
}
