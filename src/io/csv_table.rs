//! CSV reading and writing

use std::io::{Read, Write};

use crate::error::Result;
use crate::models::{Cell, LibraryTable, Recommendation};
use crate::serializers::{to_rows, OUTPUT_COLUMNS};

/// Read a library table from CSV with a header row.
///
/// Empty fields become nulls. Short rows are padded.
pub fn read_csv<R: Read>(reader: R, delimiter: u8) -> Result<LibraryTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    let mut table = LibraryTable::new(headers);

    for record in rdr.records() {
        let record = record?;
        table.push_row(record.iter().map(field_to_cell).collect())?;
    }

    Ok(table)
}

fn field_to_cell(field: &str) -> Cell {
    if field.is_empty() {
        Cell::Null
    } else {
        Cell::Text(field.to_string())
    }
}

/// Write recommendations as CSV. The header is written even with no rows.
pub fn write_csv<W: Write>(
    writer: W,
    recommendations: &[Recommendation],
    delimiter: u8,
) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .delimiter(delimiter)
        .from_writer(writer);

    wtr.write_record(OUTPUT_COLUMNS)?;
    for row in to_rows(recommendations) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;

    Ok(())
}
