use chrono::NaiveDate;
use ordered_float::OrderedFloat;

use crate::model::{FlightLeg, LegId};

/// ordering key for legs within one location's schedule: departure date, then
/// ascending emissions, then leg id so that equal legs remain distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LegKey {
    pub departure_date: NaiveDate,
    pub co2_tonnes: OrderedFloat<f64>,
    pub leg_id: LegId,
}

impl LegKey {
    pub fn new(leg: &FlightLeg) -> LegKey {
        LegKey {
            departure_date: leg.departure_date,
            co2_tonnes: OrderedFloat(leg.co2_tonnes),
            leg_id: leg.id,
        }
    }

    /// smallest key on the given date.
    pub fn lower(date: NaiveDate) -> LegKey {
        LegKey {
            departure_date: date,
            co2_tonnes: OrderedFloat(f64::NEG_INFINITY),
            leg_id: LegId::MIN,
        }
    }

    /// largest key on the given date.
    pub fn upper(date: NaiveDate) -> LegKey {
        LegKey {
            departure_date: date,
            co2_tonnes: OrderedFloat(f64::INFINITY),
            leg_id: LegId::MAX,
        }
    }
}
