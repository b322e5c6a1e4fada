use convene_core::index::{DataError, FlightIndex, FlightRecord};
use kdam::tqdm;

use crate::app::AppError;

/// reads a flight connection CSV into a [`FlightIndex`]. rows that cannot be
/// read or validated are skipped and counted, only failing to open the file is
/// fatal.
pub fn read_flight_index(filepath: &str) -> Result<FlightIndex, AppError> {
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(filepath)
        .map_err(|e| AppError::CsvError {
            filepath: filepath.to_string(),
            source: e,
        })?;
    let rows = tqdm!(
        reader.into_deserialize::<FlightRecord>(),
        desc = format!("reading {filepath}")
    )
    .map(|row| row.map_err(|e| DataError::Unreadable(e.to_string())));
    Ok(FlightIndex::build_from_rows(rows))
}
