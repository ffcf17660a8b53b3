//! Reading records from JSON, YAML and CSV text.

use anyhow::{bail, Context, Result};
use tabula_render::tabular::{Row, Value};

use crate::args::InputFormat;

/// Parses `text` into rows. JSON and YAML input must be a list of objects.
pub fn parse_records(text: &str, format: InputFormat) -> Result<Vec<Row>> {
    match format {
        InputFormat::Json => {
            let value: serde_json::Value =
                serde_json::from_str(text).context("input is not valid JSON")?;
            rows_from_value(value)
        }
        InputFormat::Yaml => {
            let value: serde_json::Value =
                serde_yaml::from_str(text).context("input is not valid YAML")?;
            rows_from_value(value)
        }
        InputFormat::Csv => rows_from_csv(text),
    }
}

fn rows_from_value(value: serde_json::Value) -> Result<Vec<Row>> {
    let items = match value {
        serde_json::Value::Array(items) => items,
        serde_json::Value::Null => return Ok(Vec::new()),
        _ => bail!("expected a list of records"),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            Row::from_json_object(item).with_context(|| format!("record {} is not an object", i))
        })
        .collect()
}

fn rows_from_csv(text: &str) -> Result<Vec<Row>> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let headers = reader.headers().context("reading CSV header")?.clone();

    reader
        .records()
        .enumerate()
        .map(|(i, record)| -> Result<Row> {
            let record = record.with_context(|| format!("reading CSV record {}", i + 1))?;
            Ok(headers
                .iter()
                .zip(record.iter())
                .map(|(name, field)| (name, Value::parse_scalar(field)))
                .collect())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_keeps_key_order() {
        let rows = parse_records(
            r#"[{"Name": "Server1", "CPU": 45.5}, {"Name": "Server2", "CPU": 78.234}]"#,
            InputFormat::Json,
        )
        .unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].names().collect::<Vec<_>>(), vec!["Name", "CPU"]);
        assert_eq!(rows[1].get("CPU"), Some(&Value::Float(78.234)));
    }

    #[test]
    fn yaml_list() {
        let rows = parse_records("- id: 1\n  up: true\n- id: 2\n  up: false\n", InputFormat::Yaml)
            .unwrap();
        assert_eq!(rows[0].get("id"), Some(&Value::Integer(1)));
        assert_eq!(rows[1].get("up"), Some(&Value::Bool(false)));
    }

    #[test]
    fn csv_fields_are_typed() {
        let rows =
            parse_records("host,load,seen\nweb-01,0.75,\ndb-01,2,x\n", InputFormat::Csv).unwrap();
        assert_eq!(rows[0].get("host"), Some(&Value::Text("web-01".into())));
        assert_eq!(rows[0].get("load"), Some(&Value::Float(0.75)));
        assert_eq!(rows[0].get("seen"), Some(&Value::Null));
        assert_eq!(rows[1].get("load"), Some(&Value::Integer(2)));
    }

    #[test]
    fn rejects_non_records() {
        assert!(parse_records(r#"{"a": 1}"#, InputFormat::Json).is_err());
        assert!(parse_records("[1, 2]", InputFormat::Json).is_err());
        assert!(parse_records("not json", InputFormat::Json).is_err());
    }
}
