//! JSON reading and writing (records orientation)

use std::io::{Read, Write};

use serde_json::Value;

use crate::error::{RecommendError, Result};
use crate::models::{Cell, LibraryTable, Recommendation};
use crate::serializers::to_rows;

/// Read a library table from a JSON array of objects.
///
/// Columns are every key seen in any record; a key missing from a record is
/// a null cell.
pub fn read_json<R: Read>(reader: R) -> Result<LibraryTable> {
    let value: Value = serde_json::from_reader(reader)?;
    let Value::Array(items) = value else {
        return Err(RecommendError::InvalidInput(
            "expected a JSON array of records".to_string(),
        ));
    };

    let mut records = Vec::with_capacity(items.len());
    for (i, item) in items.into_iter().enumerate() {
        match item {
            Value::Object(map) => records.push(map),
            _ => {
                return Err(RecommendError::InvalidInput(format!(
                    "record {} is not an object",
                    i + 1
                )))
            }
        }
    }

    let mut headers: Vec<String> = Vec::new();
    for record in &records {
        for key in record.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    let mut table = LibraryTable::new(headers.clone());
    for mut record in records {
        let row = headers
            .iter()
            .map(|h| record.remove(h).map(Cell::from).unwrap_or_default())
            .collect();
        table.push_row(row)?;
    }

    Ok(table)
}

/// Write recommendations as a pretty-printed JSON array
pub fn write_json<W: Write>(mut writer: W, recommendations: &[Recommendation]) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, &to_rows(recommendations))?;
    writeln!(writer)?;
    Ok(())
}
