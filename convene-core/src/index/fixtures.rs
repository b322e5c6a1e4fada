use crate::index::{FlightIndex, FlightRecord};

pub fn mock_record(origin: &str, destination: &str, date: &str, hours: f64, co2: f64) -> FlightRecord {
    FlightRecord {
        departure_airport: Some(origin.to_string()),
        arrival_airport: Some(destination.to_string()),
        scheduled_departure_date: Some(date.to_string()),
        duration_hours: Some(hours),
        estimated_co2_total_tonnes: Some(co2),
    }
}

pub fn mock_index(rows: &[(&str, &str, &str, f64, f64)]) -> FlightIndex {
    FlightIndex::build(
        rows.iter()
            .map(|(o, d, date, hours, co2)| mock_record(o, d, date, *hours, *co2)),
    )
}
