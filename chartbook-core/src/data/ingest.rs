//! CSV ingestion for observation tables.

use std::path::Path;

use chrono::NaiveDate;

use crate::domain::{KeyKind, ObsKey, Observation, ObservationTable};

use super::schema::{ColumnIndexes, SchemaError, TableSchema};

/// Errors from the data loading layer.
///
/// Every failure here is a load-time condition: the figure pipeline has no
/// recovery path, it only reports where the input was malformed.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("schema error in {path}: {source}")]
    Schema {
        path: String,
        #[source]
        source: SchemaError,
    },

    #[error("row {row}: cannot parse {kind:?} key from '{text}'")]
    BadKey {
        row: usize,
        kind: KeyKind,
        text: String,
    },

    #[error("row {row}: cannot parse numeric value from '{text}'")]
    BadValue { row: usize, text: String },

    #[error("row {row}: non-finite value {value}")]
    NonFinite { row: usize, value: f64 },
}

/// Read an observation table from a CSV file.
///
/// The table name is the file stem. Headers are validated against the
/// schema before any row is parsed; row errors carry 1-based data row
/// numbers (header excluded).
pub fn read_csv(path: &Path, schema: &TableSchema) -> Result<ObservationTable, IngestError> {
    let display = path.display().to_string();

    let file = std::fs::File::open(path).map_err(|source| IngestError::Io {
        path: display.clone(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| IngestError::Csv {
            path: display.clone(),
            source: e,
        })?
        .clone();
    let header_refs: Vec<&str> = headers.iter().collect();
    let indexes = schema
        .resolve(&header_refs)
        .map_err(|e| IngestError::Schema {
            path: display.clone(),
            source: e,
        })?;

    let mut rows = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record.map_err(|e| IngestError::Csv {
            path: display.clone(),
            source: e,
        })?;
        rows.push(parse_row(&record, i + 1, schema.key_kind, indexes)?);
    }

    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| display.clone());

    Ok(ObservationTable::new(name, rows))
}

fn parse_row(
    record: &csv::StringRecord,
    row: usize,
    key_kind: KeyKind,
    indexes: ColumnIndexes,
) -> Result<Observation, IngestError> {
    let field = |idx: usize| record.get(idx).unwrap_or("").trim();

    let key_text = field(indexes.key);
    let key = parse_key(key_text, key_kind).ok_or_else(|| IngestError::BadKey {
        row,
        kind: key_kind,
        text: key_text.to_string(),
    })?;

    let value_text = field(indexes.value);
    let value: f64 = value_text.parse().map_err(|_| IngestError::BadValue {
        row,
        text: value_text.to_string(),
    })?;
    if !value.is_finite() {
        return Err(IngestError::NonFinite { row, value });
    }
    if let ObsKey::Numeric(n) = key {
        if !n.is_finite() {
            return Err(IngestError::NonFinite { row, value: n });
        }
    }

    let group = indexes
        .group
        .map(|idx| field(idx).to_string())
        .unwrap_or_default();

    Ok(Observation { key, value, group })
}

fn parse_key(text: &str, kind: KeyKind) -> Option<ObsKey> {
    match kind {
        KeyKind::Date => NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .ok()
            .map(ObsKey::Date),
        KeyKind::Category => {
            if text.is_empty() {
                None
            } else {
                Some(ObsKey::Category(text.to_string()))
            }
        }
        KeyKind::Numeric => text.parse::<f64>().ok().map(ObsKey::Numeric),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn stock_schema() -> TableSchema {
        TableSchema::new("date", KeyKind::Date, "price", Some("ticker"))
    }

    #[test]
    fn reads_dated_grouped_table() {
        let file = write_temp_csv(
            "date,ticker,price\n2012-06-01,AAPL,100.0\n2012-07-01,AAPL,104.5\n2012-06-01,MSFT,100.0\n",
        );
        let table = read_csv(file.path(), &stock_schema()).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.groups(), vec!["AAPL", "MSFT"]);
        assert_eq!(table.key_kind(), Some(KeyKind::Date));
    }

    #[test]
    fn missing_column_fails_before_rows() {
        let file = write_temp_csv("date,ticker\n2012-06-01,AAPL\n");
        let err = read_csv(file.path(), &stock_schema()).unwrap_err();
        assert!(err.to_string().contains("missing required column"));
        assert!(err.to_string().contains("price"));
    }

    #[test]
    fn bad_date_reports_row_number() {
        let file = write_temp_csv(
            "date,ticker,price\n2012-06-01,AAPL,100.0\nnot-a-date,AAPL,104.5\n",
        );
        let err = read_csv(file.path(), &stock_schema()).unwrap_err();
        match err {
            IngestError::BadKey { row, .. } => assert_eq!(row, 2),
            other => panic!("expected BadKey, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_value_is_an_error() {
        let file = write_temp_csv("date,ticker,price\n2012-06-01,AAPL,abc\n");
        let err = read_csv(file.path(), &stock_schema()).unwrap_err();
        assert!(matches!(err, IngestError::BadValue { row: 1, .. }));
    }

    #[test]
    fn non_finite_value_is_rejected() {
        let file = write_temp_csv("date,ticker,price\n2012-06-01,AAPL,inf\n");
        let err = read_csv(file.path(), &stock_schema()).unwrap_err();
        assert!(matches!(err, IngestError::NonFinite { row: 1, .. }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = read_csv(Path::new("/nonexistent/stocks.csv"), &stock_schema()).unwrap_err();
        match err {
            IngestError::Io { source, .. } => {
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound)
            }
            other => panic!("expected Io, got {other:?}"),
        }
    }

    #[test]
    fn io_error_kind_is_preserved() {
        // A path through a regular file fails with a non-NotFound kind.
        let file = write_temp_csv("date,ticker,price\n");
        let bogus = file.path().join("stocks.csv");
        let err = read_csv(&bogus, &stock_schema()).unwrap_err();
        match err {
            IngestError::Io { source, .. } => {
                assert_ne!(source.kind(), std::io::ErrorKind::NotFound)
            }
            other => panic!("expected Io, got {other:?}"),
        }
    }

    #[test]
    fn ungrouped_numeric_table() {
        let schema = TableSchema::new("predicted", KeyKind::Numeric, "observed", None);
        let file = write_temp_csv("predicted,observed\n0.1,0.15\n0.6,0.55\n");
        let table = read_csv(file.path(), &schema).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.groups(), vec![String::new()]);
        assert_eq!(table.key_range(), Some((0.1, 0.6)));
    }
}
