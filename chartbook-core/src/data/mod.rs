//! Data loading: CSV ingestion, schema validation, sample datasets.

pub mod ingest;
pub mod sample;
pub mod schema;

pub use ingest::{read_csv, IngestError};
pub use schema::{SchemaError, TableSchema};
