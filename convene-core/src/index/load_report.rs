use crate::index::DataError;

/// outcome of building a [`crate::index::FlightIndex`]: how many legs were
/// kept and which rows were skipped, by zero-based row number.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: Vec<(usize, DataError)>,
}

impl LoadReport {
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    pub fn total_rows(&self) -> usize {
        self.loaded + self.skipped.len()
    }
}
