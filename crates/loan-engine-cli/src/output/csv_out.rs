use serde_json::Value;
use std::io;

/// Preferred column order for amortization schedule rows.
const SCHEDULE_COLUMNS: [&str; 6] = [
    "period",
    "payment",
    "principal",
    "interest",
    "balance",
    "cumulative_paid",
];

/// Write output as CSV to stdout.
///
/// A result carrying a schedule emits the period rows, ready for a
/// spreadsheet or chart consumer; anything else emits field/value pairs.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    match value {
        Value::Object(map) => {
            if let Some(Value::Object(result)) = map.get("result") {
                if let Some(Value::Array(schedule)) = result.get("schedule") {
                    write_schedule_csv(&mut wtr, schedule);
                } else {
                    write_field_value_csv(&mut wtr, result);
                }
            } else {
                write_field_value_csv(&mut wtr, map);
            }
        }
        Value::Array(arr) => {
            write_array_csv(&mut wtr, arr);
        }
        _ => {
            let _ = wtr.write_record([&format_csv_value(value)]);
        }
    }

    let _ = wtr.flush();
}

fn write_schedule_csv(wtr: &mut csv::Writer<io::StdoutLock<'_>>, rows: &[Value]) {
    let _ = wtr.write_record(SCHEDULE_COLUMNS);
    for row in rows {
        if let Value::Object(map) = row {
            let record: Vec<String> = SCHEDULE_COLUMNS
                .iter()
                .map(|col| {
                    map.get(*col)
                        .map(|v| format_csv_value(v))
                        .unwrap_or_default()
                })
                .collect();
            let _ = wtr.write_record(&record);
        }
    }
}

fn write_field_value_csv(
    wtr: &mut csv::Writer<io::StdoutLock<'_>>,
    map: &serde_json::Map<String, Value>,
) {
    let _ = wtr.write_record(["field", "value"]);
    for (key, val) in map {
        let _ = wtr.write_record([key.as_str(), &format_csv_value(val)]);
    }
}

fn write_array_csv(wtr: &mut csv::Writer<io::StdoutLock<'_>>, arr: &[Value]) {
    if arr.is_empty() {
        return;
    }

    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
        let _ = wtr.write_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| {
                        map.get(*h)
                            .map(|v| format_csv_value(v))
                            .unwrap_or_default()
                    })
                    .collect();
                let _ = wtr.write_record(&row);
            }
        }
    } else {
        for item in arr {
            let _ = wtr.write_record([&format_csv_value(item)]);
        }
    }
}

fn format_csv_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
