use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::{
    error::EngineError,
    model::{AttendeeGroup, AvailabilityWindow, EventDuration, Location},
};

/// scenario JSON as submitted by callers, before validation.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ScenarioPayload {
    /// location code -> headcount
    pub attendees: BTreeMap<String, i64>,
    pub availability_window: AvailabilityWindow,
    pub event_duration: EventDuration,
    /// restricts the hosts under evaluation. when absent, every location in
    /// the flight index and every attendee location is a candidate.
    #[serde(default)]
    pub candidate_hosts: Option<Vec<String>>,
}

/// a validated planning exercise: who travels, when, and for how long the
/// event runs.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    attendees: Vec<AttendeeGroup>,
    availability_window: AvailabilityWindow,
    event_duration: EventDuration,
    candidate_hosts: Option<Vec<Location>>,
}

impl Scenario {
    pub fn new(
        attendees: Vec<AttendeeGroup>,
        availability_window: AvailabilityWindow,
        event_duration: EventDuration,
        candidate_hosts: Option<Vec<Location>>,
    ) -> Result<Scenario, EngineError> {
        if attendees.is_empty() {
            return Err(EngineError::InvalidScenario(String::from(
                "scenario has no attendee groups",
            )));
        }
        if let Some(group) = attendees.iter().find(|g| g.location.is_empty()) {
            return Err(EngineError::InvalidScenario(format!(
                "attendee group with headcount {} has an empty location code",
                group.headcount
            )));
        }
        if let Some(group) = attendees.iter().find(|g| g.headcount == 0) {
            return Err(EngineError::InvalidScenario(format!(
                "attendee group '{}' has a headcount of zero",
                group.location
            )));
        }
        let duplicates = attendees
            .iter()
            .map(|g| &g.location)
            .duplicates()
            .join(", ");
        if !duplicates.is_empty() {
            return Err(EngineError::InvalidScenario(format!(
                "attendee locations listed more than once: {duplicates}"
            )));
        }
        availability_window.latest_start(&event_duration.to_duration())?;
        let candidate_hosts = match candidate_hosts {
            Some(hosts) if hosts.is_empty() => {
                return Err(EngineError::InvalidScenario(String::from(
                    "candidate_hosts was provided but is empty",
                )))
            }
            Some(hosts) => Some(hosts.into_iter().sorted().dedup().collect_vec()),
            None => None,
        };

        let attendees = attendees
            .into_iter()
            .sorted_by(|a, b| a.location.cmp(&b.location))
            .collect_vec();
        Ok(Scenario {
            attendees,
            availability_window,
            event_duration,
            candidate_hosts,
        })
    }

    /// attendee groups, ordered by location.
    pub fn attendees(&self) -> &[AttendeeGroup] {
        &self.attendees
    }

    pub fn availability_window(&self) -> &AvailabilityWindow {
        &self.availability_window
    }

    pub fn event_duration(&self) -> &EventDuration {
        &self.event_duration
    }

    pub fn candidate_hosts(&self) -> Option<&[Location]> {
        self.candidate_hosts.as_deref()
    }

    pub fn total_headcount(&self) -> u64 {
        self.attendees.iter().map(|g| u64::from(g.headcount)).sum()
    }
}

impl TryFrom<ScenarioPayload> for Scenario {
    type Error = EngineError;

    /// groups with a headcount of zero are dropped, as nobody travels from
    /// them. negative headcounts are rejected.
    fn try_from(payload: ScenarioPayload) -> Result<Self, Self::Error> {
        let mut attendees = vec![];
        for (code, count) in payload.attendees.into_iter() {
            match count {
                0 => log::warn!("dropping attendee group '{code}' with a headcount of zero"),
                c if c < 0 => {
                    return Err(EngineError::InvalidScenario(format!(
                        "attendee group '{code}' has a negative headcount ({c})"
                    )))
                }
                c => {
                    let headcount = u32::try_from(c).map_err(|_| {
                        EngineError::InvalidScenario(format!(
                            "attendee group '{code}' headcount {c} is too large"
                        ))
                    })?;
                    attendees.push(AttendeeGroup::new(Location::new(&code), headcount));
                }
            }
        }
        let window = AvailabilityWindow::new(
            payload.availability_window.start,
            payload.availability_window.end,
        )?;
        let candidate_hosts = payload
            .candidate_hosts
            .map(|hosts| hosts.iter().map(|h| Location::new(h)).collect_vec());
        Scenario::new(attendees, window, payload.event_duration, candidate_hosts)
    }
}
