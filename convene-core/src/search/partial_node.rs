use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::{FlightLeg, Location},
    search::Direction,
};

pub type NodeId = usize;

/// frontier map key: where a partial itinerary stands and on which date.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrontierKey {
    pub location: Location,
    pub date: NaiveDate,
}

/// one partial itinerary in a frontier arena. the path is recovered by
/// following `parent` back to the root.
#[derive(Debug, Clone)]
pub struct PartialNode<'a> {
    /// the leg that reached this node. None only for the root.
    pub leg: Option<&'a FlightLeg>,
    pub parent: Option<NodeId>,
    pub location: Location,
    pub depth: usize,
    pub duration_hours: f64,
    pub co2_tonnes: f64,
    pub instant: DateTime<Utc>,
    pub pruned: bool,
}

impl<'a> PartialNode<'a> {
    pub fn root(location: Location, instant: DateTime<Utc>) -> PartialNode<'a> {
        PartialNode {
            leg: None,
            parent: None,
            location,
            depth: 0,
            duration_hours: 0.0,
            co2_tonnes: 0.0,
            instant,
            pruned: false,
        }
    }

    pub fn extend(
        &self,
        id: NodeId,
        leg: &'a FlightLeg,
        location: Location,
        instant: DateTime<Utc>,
    ) -> PartialNode<'a> {
        PartialNode {
            leg: Some(leg),
            parent: Some(id),
            location,
            depth: self.depth + 1,
            duration_hours: self.duration_hours + leg.duration_hours,
            co2_tonnes: self.co2_tonnes + leg.co2_tonnes,
            instant,
            pruned: false,
        }
    }

    pub fn is_root(&self) -> bool {
        self.leg.is_none()
    }

    pub fn key(&self) -> FrontierKey {
        FrontierKey {
            location: self.location.clone(),
            date: self.instant.date_naive(),
        }
    }

    /// no worse on duration, emissions and instant, strictly better on one.
    /// exact ties do not dominate.
    pub fn dominates(&self, other: &PartialNode<'a>, direction: Direction) -> bool {
        let no_worse = self.duration_hours <= other.duration_hours
            && self.co2_tonnes <= other.co2_tonnes
            && direction.no_worse(&self.instant, &other.instant);
        let better = self.duration_hours < other.duration_hours
            || self.co2_tonnes < other.co2_tonnes
            || self.instant != other.instant;
        no_worse && better
    }
}
