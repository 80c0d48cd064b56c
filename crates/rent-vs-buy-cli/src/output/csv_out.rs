use serde_json::Value;
use std::io;

use super::{format_cell, row_cells, row_headers, ROW_SECTIONS};

/// Write output as CSV to stdout.
///
/// A result carrying yearly rows (summary, sweep points, schedule) is written
/// as those rows; anything else becomes a two-column field/value listing.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    let result = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    match result {
        Value::Object(map) => {
            let rows = ROW_SECTIONS
                .iter()
                .find_map(|key| map.get(*key).and_then(Value::as_array));
            match rows {
                Some(rows) => write_rows(&mut wtr, rows),
                None => {
                    let _ = wtr.write_record(["field", "value"]);
                    for (key, val) in map {
                        let _ = wtr.write_record([key.as_str(), &format_cell(val)]);
                    }
                }
            }
        }
        Value::Array(rows) => write_rows(&mut wtr, rows),
        _ => {
            let _ = wtr.write_record([&format_cell(result)]);
        }
    }

    let _ = wtr.flush();
}

fn write_rows(wtr: &mut csv::Writer<io::StdoutLock<'_>>, rows: &[Value]) {
    match row_headers(rows) {
        Some(headers) => {
            let _ = wtr.write_record(&headers);
            for row in rows {
                let _ = wtr.write_record(row_cells(&headers, row));
            }
        }
        None => {
            for item in rows {
                let _ = wtr.write_record([&format_cell(item)]);
            }
        }
    }
}
