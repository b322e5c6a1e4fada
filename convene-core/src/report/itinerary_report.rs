use chrono::NaiveDate;
use serde::Serialize;

use crate::{
    model::{FlightLeg, Itinerary, Location},
    report::report_ops::{round, FIGURE_PLACES},
    solver::Co2Unit,
};

/// one flown leg. `co2` is the whole-aircraft figure in the report unit.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct LegReport {
    pub origin: Location,
    pub destination: Location,
    pub departure_date: NaiveDate,
    pub duration_hours: f64,
    pub co2: f64,
}

/// the outbound itinerary chosen for one attendee group.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ItineraryReport {
    pub stops: Vec<Location>,
    pub total_duration_hours: f64,
    pub total_co2: f64,
    pub legs: Vec<LegReport>,
}

impl ItineraryReport {
    pub fn new(itinerary: &Itinerary<'_>, unit: Co2Unit) -> ItineraryReport {
        ItineraryReport {
            stops: itinerary.stops().into_iter().cloned().collect(),
            total_duration_hours: round(itinerary.total_duration_hours(), FIGURE_PLACES),
            total_co2: round(unit.convert_tonnes(itinerary.total_co2_tonnes()), FIGURE_PLACES),
            legs: itinerary
                .legs()
                .iter()
                .map(|leg| LegReport::new(leg, unit))
                .collect(),
        }
    }
}

impl LegReport {
    pub fn new(leg: &FlightLeg, unit: Co2Unit) -> LegReport {
        LegReport {
            origin: leg.origin.clone(),
            destination: leg.destination.clone(),
            departure_date: leg.departure_date,
            duration_hours: round(leg.duration_hours, FIGURE_PLACES),
            co2: round(unit.convert_tonnes(leg.co2_tonnes), FIGURE_PLACES),
        }
    }
}
