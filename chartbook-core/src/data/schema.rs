//! Expected column layout for a flat-file data source.

use serde::{Deserialize, Serialize};

use crate::domain::KeyKind;

/// Names the columns an input file must carry and how to read the key.
///
/// Dates are parsed as `%Y-%m-%d`. A table without a grouping column gets
/// an empty group label on every row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    pub key_column: String,
    pub key_kind: KeyKind,
    pub value_column: String,
    pub group_column: Option<String>,
}

impl TableSchema {
    pub fn new(
        key_column: impl Into<String>,
        key_kind: KeyKind,
        value_column: impl Into<String>,
        group_column: Option<&str>,
    ) -> Self {
        Self {
            key_column: key_column.into(),
            key_kind,
            value_column: value_column.into(),
            group_column: group_column.map(String::from),
        }
    }

    /// Resolve required columns against a CSV header row.
    ///
    /// Fails fast with the first missing column before any row is parsed.
    pub fn resolve(&self, headers: &[&str]) -> Result<ColumnIndexes, SchemaError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| *h == name)
                .ok_or_else(|| SchemaError::MissingColumn(name.to_string()))
        };

        Ok(ColumnIndexes {
            key: find(&self.key_column)?,
            value: find(&self.value_column)?,
            group: match &self.group_column {
                Some(name) => Some(find(name)?),
                None => None,
            },
        })
    }
}

/// Positions of the schema columns within a concrete header row.
#[derive(Debug, Clone, Copy)]
pub struct ColumnIndexes {
    pub key: usize,
    pub value: usize,
    pub group: Option<usize>,
}

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("missing required column: {0}")]
    MissingColumn(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stock_schema() -> TableSchema {
        TableSchema::new("date", KeyKind::Date, "price", Some("ticker"))
    }

    #[test]
    fn resolve_accepts_matching_headers() {
        let idx = stock_schema()
            .resolve(&["date", "ticker", "price"])
            .unwrap();
        assert_eq!(idx.key, 0);
        assert_eq!(idx.value, 2);
        assert_eq!(idx.group, Some(1));
    }

    #[test]
    fn resolve_rejects_missing_column() {
        let err = stock_schema().resolve(&["date", "ticker"]).unwrap_err();
        assert!(matches!(err, SchemaError::MissingColumn(ref c) if c == "price"));
    }

    #[test]
    fn group_column_is_optional() {
        let schema = TableSchema::new("predicted", KeyKind::Numeric, "observed", None);
        let idx = schema.resolve(&["predicted", "observed"]).unwrap();
        assert_eq!(idx.group, None);
    }
}
