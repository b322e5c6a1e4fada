use chrono::NaiveDate;
use itertools::Itertools;
use std::collections::{BTreeSet, HashMap};

use crate::{
    index::{DataError, FlightRecord, IndexSummary, LegKey, LoadReport},
    model::{FlightLeg, LegId, Location},
};

pub type LegIterator<'a> = Box<dyn Iterator<Item = &'a FlightLeg> + 'a>;

type LegTable = HashMap<Location, BTreeSet<LegKey>>;

/// owns every validated [`FlightLeg`] and indexes them by departure location
/// and by arrival location. each per-location schedule is ordered by
/// departure date, then ascending emissions.
///
/// the index is immutable once built. itineraries borrow legs from it.
#[derive(Debug, Clone, Default)]
pub struct FlightIndex {
    legs: Vec<FlightLeg>,
    outbound: LegTable,
    inbound: LegTable,
    report: LoadReport,
}

impl FlightIndex {
    pub fn build<I>(records: I) -> FlightIndex
    where
        I: IntoIterator<Item = FlightRecord>,
    {
        FlightIndex::build_from_rows(records.into_iter().map(Ok))
    }

    /// builds the index from rows that may already have failed to read. any
    /// row that fails, or fails validation, is skipped and recorded in the
    /// [`LoadReport`].
    pub fn build_from_rows<I>(rows: I) -> FlightIndex
    where
        I: IntoIterator<Item = Result<FlightRecord, DataError>>,
    {
        let mut index = FlightIndex::default();
        for (row, record) in rows.into_iter().enumerate() {
            let next_id = index.legs.len();
            match record.and_then(|r| r.validate(next_id)) {
                Ok(leg) => index.insert(leg),
                Err(e) => {
                    log::warn!("skipping flight record at row {row}: {e}");
                    index.report.skipped.push((row, e));
                }
            }
        }
        index.report.loaded = index.legs.len();
        log::info!(
            "flight index built with {} legs over {} locations ({} rows skipped)",
            index.legs.len(),
            index.locations().len(),
            index.report.skipped_count()
        );
        index
    }

    fn insert(&mut self, leg: FlightLeg) {
        let key = LegKey::new(&leg);
        self.outbound
            .entry(leg.origin.clone())
            .or_default()
            .insert(key);
        self.inbound
            .entry(leg.destination.clone())
            .or_default()
            .insert(key);
        self.legs.push(leg);
    }

    /// legs departing `location` dated within `[not_before, not_after]`,
    /// ordered by date then ascending emissions.
    pub fn legs_from(
        &self,
        location: &Location,
        not_before: NaiveDate,
        not_after: NaiveDate,
    ) -> LegIterator<'_> {
        self.query(&self.outbound, location, not_before, not_after)
    }

    /// legs arriving at `location` whose departure date is within
    /// `[not_before, not_after]`, in the same order as [`Self::legs_from`].
    pub fn legs_into(
        &self,
        location: &Location,
        not_before: NaiveDate,
        not_after: NaiveDate,
    ) -> LegIterator<'_> {
        self.query(&self.inbound, location, not_before, not_after)
    }

    fn query<'a>(
        &'a self,
        table: &'a LegTable,
        location: &Location,
        not_before: NaiveDate,
        not_after: NaiveDate,
    ) -> LegIterator<'a> {
        if not_before > not_after {
            return Box::new(std::iter::empty());
        }
        match table.get(location) {
            None => Box::new(std::iter::empty()),
            Some(schedule) => Box::new(
                schedule
                    .range(LegKey::lower(not_before)..=LegKey::upper(not_after))
                    .filter_map(|key| self.legs.get(key.leg_id)),
            ),
        }
    }

    pub fn get(&self, id: LegId) -> Option<&FlightLeg> {
        self.legs.get(id)
    }

    pub fn legs(&self) -> &[FlightLeg] {
        &self.legs
    }

    pub fn len(&self) -> usize {
        self.legs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// every location that appears as a leg endpoint, sorted.
    pub fn locations(&self) -> Vec<Location> {
        self.outbound
            .keys()
            .chain(self.inbound.keys())
            .sorted()
            .dedup()
            .cloned()
            .collect_vec()
    }

    pub fn load_report(&self) -> &LoadReport {
        &self.report
    }

    /// earliest and latest departure dates in the index.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.legs
            .iter()
            .map(|leg| leg.departure_date)
            .minmax()
            .into_option()
    }

    pub fn summary(&self) -> IndexSummary {
        let routes = self
            .legs
            .iter()
            .map(|leg| (&leg.origin, &leg.destination))
            .unique()
            .count();
        let (first_date, last_date) = match self.date_range() {
            Some((first, last)) => (Some(first), Some(last)),
            None => (None, None),
        };
        IndexSummary {
            locations: self.locations().len(),
            legs: self.legs.len(),
            routes,
            skipped: self.report.skipped_count(),
            first_date,
            last_date,
        }
    }
}
