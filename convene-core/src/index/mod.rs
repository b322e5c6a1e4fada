mod data_error;
mod flight_index;
mod flight_record;
mod index_summary;
mod leg_key;
mod load_report;

#[cfg(test)]
pub(crate) mod fixtures;

pub use data_error::DataError;
pub use flight_index::{FlightIndex, LegIterator};
pub use flight_record::FlightRecord;
pub use index_summary::IndexSummary;
pub use leg_key::LegKey;
pub use load_report::LoadReport;
