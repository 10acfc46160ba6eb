//! File adapters for library tables and recommendation output
//!
//! The pipeline itself never touches files; these are the thin readers and
//! writers the CLI wraps around it.

mod csv_table;
mod json_table;

use std::fmt;
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;
use std::str::FromStr;

use crate::error::Result;
use crate::models::{LibraryTable, Recommendation};

pub use csv_table::{read_csv, write_csv};
pub use json_table::{read_json, write_json};

/// Supported table formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Csv,
    Tsv,
    Json,
}

impl TableFormat {
    /// Guess the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "csv" => Some(Self::Csv),
            "tsv" | "tab" => Some(Self::Tsv),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

impl FromStr for TableFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "tsv" | "tab" => Ok(Self::Tsv),
            "json" => Ok(Self::Json),
            other => Err(format!(
                "unknown table format '{}' (expected csv, tsv, tab or json)",
                other
            )),
        }
    }
}

impl fmt::Display for TableFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Csv => "csv",
            Self::Tsv => "tsv",
            Self::Json => "json",
        };
        f.write_str(name)
    }
}

/// Read a library table from a file.
///
/// Without an explicit format the extension decides, falling back to CSV.
/// `csv_delimiter` only applies to CSV; TSV always splits on tabs.
pub fn read_table(
    path: &Path,
    format: Option<TableFormat>,
    csv_delimiter: u8,
) -> Result<LibraryTable> {
    let format = format
        .or_else(|| TableFormat::from_path(path))
        .unwrap_or(TableFormat::Csv);
    let reader = BufReader::new(File::open(path)?);

    match format {
        TableFormat::Csv => read_csv(reader, csv_delimiter),
        TableFormat::Tsv => read_csv(reader, b'\t'),
        TableFormat::Json => read_json(reader),
    }
}

/// Write ranked recommendations in the given format
pub fn write_recommendations<W: Write>(
    writer: W,
    format: TableFormat,
    recommendations: &[Recommendation],
) -> Result<()> {
    match format {
        TableFormat::Csv => write_csv(writer, recommendations, b','),
        TableFormat::Tsv => write_csv(writer, recommendations, b'\t'),
        TableFormat::Json => write_json(writer, recommendations),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(TableFormat::from_path(Path::new("lib.CSV")), Some(TableFormat::Csv));
        assert_eq!(TableFormat::from_path(Path::new("lib.tsv")), Some(TableFormat::Tsv));
        assert_eq!(TableFormat::from_path(Path::new("lib.tab")), Some(TableFormat::Tsv));
        assert_eq!(
            TableFormat::from_path(Path::new("out/recs.json")),
            Some(TableFormat::Json)
        );
        assert_eq!(TableFormat::from_path(Path::new("library")), None);
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("JSON".parse::<TableFormat>(), Ok(TableFormat::Json));
        assert_eq!("tab".parse::<TableFormat>(), Ok(TableFormat::Tsv));
        assert_eq!("TSV".parse::<TableFormat>(), Ok(TableFormat::Tsv));
        assert!("xlsx".parse::<TableFormat>().is_err());
    }

    #[test]
    fn test_read_table_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_table(&dir.path().join("nope.csv"), None, b',').unwrap_err();
        assert!(matches!(err, crate::error::RecommendError::Io(_)));
    }
}
