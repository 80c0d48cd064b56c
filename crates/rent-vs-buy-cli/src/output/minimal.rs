use serde_json::Value;

use super::format_cell;

/// Fields that answer each command, in order of priority. `outcome` is
/// searched as well so `compare` reports its winner.
const PRIORITY_KEYS: [&str; 5] = [
    "monthly_payment",
    "total",
    "best_scenario_label",
    "cheapest_price_where_buying_wins",
    "investment_value_rent_reinvest",
];

/// Print just the key answer value from the output.
pub fn print_minimal(value: &Value) {
    println!("{}", minimal_answer(value));
}

fn minimal_answer(value: &Value) -> String {
    let result = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    // Yearly rows: the final year is the answer
    let result = match result {
        Value::Array(rows) => match rows.last() {
            Some(last) => last,
            None => return String::new(),
        },
        other => other,
    };

    if let Value::Object(map) = result {
        let scopes = [Some(map), map.get("outcome").and_then(Value::as_object)];
        for key in PRIORITY_KEYS {
            for scope in scopes.iter().flatten() {
                if let Some(val) = scope.get(key) {
                    if !val.is_null() {
                        return format_cell(val);
                    }
                }
            }
        }

        if let Some((key, val)) = map.iter().next() {
            return format!("{}: {}", key, format_cell(val));
        }
    }

    format_cell(result)
}
