use serde::{Deserialize, Serialize};

use crate::{
    index::DataError,
    model::{date_codec::flight, FlightLeg, LegId, Location},
};

/// longest leg accepted, in hours. anything above is a corrupt row.
pub const MAX_DURATION_HOURS: f64 = 24.0 * 366.0;

/// one row of the flight-connection dataset as read from the source, before
/// validation. every field is optional so that a missing column is reported as
/// a [`DataError`] on the row instead of failing the whole read.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct FlightRecord {
    #[serde(default, alias = "DEPARTURE_AIRPORT")]
    pub departure_airport: Option<String>,
    #[serde(default, alias = "ARRIVAL_AIRPORT")]
    pub arrival_airport: Option<String>,
    #[serde(default, alias = "SCHEDULED_DEPARTURE_DATE")]
    pub scheduled_departure_date: Option<String>,
    #[serde(default, alias = "DURATION_HOURS")]
    pub duration_hours: Option<f64>,
    #[serde(default, alias = "ESTIMATED_CO2_TOTAL_TONNES")]
    pub estimated_co2_total_tonnes: Option<f64>,
}

impl FlightRecord {
    /// checks the record and assigns it the given leg id.
    pub fn validate(&self, id: LegId) -> Result<FlightLeg, DataError> {
        let origin = required_location(&self.departure_airport, "departure_airport")?;
        let destination = required_location(&self.arrival_airport, "arrival_airport")?;
        if origin == destination {
            return Err(DataError::InvalidLocation(format!(
                "departure and arrival are both '{origin}'"
            )));
        }
        let date_str = self
            .scheduled_departure_date
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(DataError::MissingField("scheduled_departure_date"))?;
        let departure_date =
            flight::parse_departure_date(date_str).map_err(|message| DataError::InvalidDate {
                value: date_str.to_string(),
                message,
            })?;
        let duration_hours = self
            .duration_hours
            .ok_or(DataError::MissingField("duration_hours"))?;
        if !duration_hours.is_finite()
            || duration_hours <= 0.0
            || duration_hours > MAX_DURATION_HOURS
        {
            return Err(DataError::InvalidDuration(duration_hours));
        }
        let co2_tonnes = self
            .estimated_co2_total_tonnes
            .ok_or(DataError::MissingField("estimated_co2_total_tonnes"))?;
        if !co2_tonnes.is_finite() || co2_tonnes < 0.0 {
            return Err(DataError::InvalidEmissions(co2_tonnes));
        }
        Ok(FlightLeg {
            id,
            origin,
            destination,
            departure_date,
            duration_hours,
            co2_tonnes,
        })
    }
}

fn required_location(value: &Option<String>, field: &'static str) -> Result<Location, DataError> {
    let location = value
        .as_deref()
        .map(Location::new)
        .ok_or(DataError::MissingField(field))?;
    if location.is_empty() {
        return Err(DataError::MissingField(field));
    }
    Ok(location)
}
