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

/// Arrays of rows inside a result, in the order they should be presented.
pub(crate) const ROW_SECTIONS: [&str; 3] = ["summary", "points", "amortization_schedule"];

/// Render a scalar for a single table or CSV cell.
pub(crate) fn format_cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}

/// Headers for a list of row objects, taken from the first row.
pub(crate) fn row_headers(rows: &[Value]) -> Option<Vec<String>> {
    match rows.first() {
        Some(Value::Object(first)) => Some(first.keys().cloned().collect()),
        _ => None,
    }
}

/// Cells of one row object, aligned to `headers`.
pub(crate) fn row_cells(headers: &[String], row: &Value) -> Vec<String> {
    headers
        .iter()
        .map(|h| row.get(h.as_str()).map(format_cell).unwrap_or_default())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_row_cells_follow_headers() {
        let rows = vec![json!({"year": 1, "home_value": "832000"}), json!({"home_value": "1"})];
        let headers = row_headers(&rows).unwrap();
        assert_eq!(headers, vec!["year", "home_value"]);
        assert_eq!(row_cells(&headers, &rows[1]), vec!["", "1"]);
    }

    #[test]
    fn test_format_cell() {
        assert_eq!(format_cell(&json!("Buy")), "Buy");
        assert_eq!(format_cell(&json!(30)), "30");
        assert_eq!(format_cell(&Value::Null), "");
        assert_eq!(format_cell(&json!([1, 2])), "[1,2]");
    }
}
