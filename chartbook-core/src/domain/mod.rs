//! Domain types: observations and observation tables.

mod observation;
mod table;

pub use observation::{KeyKind, ObsKey, Observation};
pub use table::ObservationTable;
