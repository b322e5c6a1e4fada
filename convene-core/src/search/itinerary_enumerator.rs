use chrono::{DateTime, Utc};
use std::collections::HashSet;

use crate::{
    error::EngineError,
    index::FlightIndex,
    model::{AvailabilityWindow, EventDuration, FlightLeg, Itinerary, LegId, Location},
    search::{Direction, Frontier, NodeId, SearchBounds, SearchConfig},
};

/// meet-in-the-middle itinerary search over a [`FlightIndex`].
///
/// a forward frontier grows from the origin and a backward frontier from the
/// destination, each up to `max_half_depth` legs. partials that meet at a
/// shared location with compatible times are joined, and every joined
/// itinerary is flown forward once more against the [`SearchBounds`].
pub struct ItineraryEnumerator<'a> {
    index: &'a FlightIndex,
    max_half_depth: usize,
    bounds: SearchBounds,
}

impl<'a> ItineraryEnumerator<'a> {
    pub fn new(
        index: &'a FlightIndex,
        config: &SearchConfig,
        window: &AvailabilityWindow,
        event: &EventDuration,
    ) -> Result<ItineraryEnumerator<'a>, EngineError> {
        let bounds = SearchBounds::new(window, event, config)?;
        Ok(ItineraryEnumerator {
            index,
            max_half_depth: config.max_half_depth,
            bounds,
        })
    }

    pub fn bounds(&self) -> &SearchBounds {
        &self.bounds
    }

    /// feasible itineraries from `origin` to `destination`, ordered by
    /// duration, emissions, leg count and leg ids. empty when the pair cannot
    /// be joined within the depth bound.
    pub fn enumerate(
        &self,
        origin: &Location,
        destination: &Location,
    ) -> Result<Vec<Itinerary<'a>>, EngineError> {
        if origin == destination {
            return Ok(vec![Itinerary::stay(origin.clone())]);
        }
        let forward = self.grow_forward(origin, destination);
        let backward = self.grow_backward(origin, destination);
        let joined = self.join(&forward, &backward);

        let mut itineraries = vec![];
        for legs in joined.into_iter() {
            let itinerary = Itinerary::new(origin.clone(), legs)?;
            let admitted = itinerary
                .schedule(self.bounds.earliest_departure, self.bounds.min_connection)
                .map(|s| self.bounds.admits(&s, itinerary.total_duration_hours()))
                .unwrap_or_default();
            if admitted {
                itineraries.push(itinerary);
            }
        }
        itineraries.sort_by(|a, b| {
            a.total_duration_hours()
                .total_cmp(&b.total_duration_hours())
                .then(a.total_co2_tonnes().total_cmp(&b.total_co2_tonnes()))
                .then(a.leg_count().cmp(&b.leg_count()))
                .then(a.leg_ids().cmp(&b.leg_ids()))
        });
        log::debug!(
            "{origin} -> {destination}: {} forward / {} backward partials, {} itineraries",
            forward.len(),
            backward.len(),
            itineraries.len()
        );
        Ok(itineraries)
    }

    fn grow_forward(&self, origin: &Location, destination: &Location) -> Frontier<'a> {
        let mut frontier = Frontier::new(
            Direction::Forward,
            origin.clone(),
            self.bounds.earliest_departure,
        );
        let last_date = self.bounds.arrival_deadline.date_naive();
        for depth in 0..self.max_half_depth {
            for id in frontier.live_at_depth(depth).into_iter() {
                let Some(node) = frontier.get(id).cloned() else {
                    continue;
                };
                // a path that reached the destination is complete
                if node.location == *destination {
                    continue;
                }
                let Some(ready) = self.forward_ready(node.is_root(), &node.instant) else {
                    continue;
                };
                let legs = self
                    .index
                    .legs_from(&node.location, ready.date_naive(), last_date);
                for leg in legs {
                    if frontier.visits(id, &leg.destination) {
                        continue;
                    }
                    let Some(arrival) = leg.arrival_after(&ready) else {
                        continue;
                    };
                    let duration_hours = node.duration_hours + leg.duration_hours;
                    if !self.bounds.admits_arrival(&arrival, duration_hours) {
                        continue;
                    }
                    frontier.push(node.extend(id, leg, leg.destination.clone(), arrival));
                }
            }
        }
        frontier
    }

    fn grow_backward(&self, origin: &Location, destination: &Location) -> Frontier<'a> {
        let mut frontier = Frontier::new(
            Direction::Backward,
            destination.clone(),
            self.bounds.arrival_deadline,
        );
        let first_date = self.bounds.earliest_departure.date_naive();
        for depth in 0..self.max_half_depth {
            for id in frontier.live_at_depth(depth).into_iter() {
                let Some(node) = frontier.get(id).cloned() else {
                    continue;
                };
                if node.location == *origin {
                    continue;
                }
                let deadline = if node.is_root() {
                    node.instant
                } else {
                    match node.instant.checked_sub_signed(self.bounds.min_connection) {
                        Some(deadline) => deadline,
                        None => continue,
                    }
                };
                let legs = self
                    .index
                    .legs_into(&node.location, first_date, deadline.date_naive());
                for leg in legs {
                    if frontier.visits(id, &leg.origin) {
                        continue;
                    }
                    let Some(latest) = leg.latest_departure(&deadline) else {
                        continue;
                    };
                    if latest < self.bounds.earliest_departure {
                        continue;
                    }
                    frontier.push(node.extend(id, leg, leg.origin.clone(), latest));
                }
            }
        }
        frontier
    }

    fn forward_ready(&self, is_root: bool, instant: &DateTime<Utc>) -> Option<DateTime<Utc>> {
        if is_root {
            Some(*instant)
        } else {
            instant.checked_add_signed(self.bounds.min_connection)
        }
    }

    /// concatenates forward and backward partials meeting at the same
    /// location. a connection is only required between two flown legs, so a
    /// root on either side joins on the bare instant.
    fn join(&self, forward: &Frontier<'a>, backward: &Frontier<'a>) -> Vec<Vec<&'a FlightLeg>> {
        let mut seen: HashSet<Vec<LegId>> = HashSet::new();
        let mut joined = vec![];
        for (f_id, f_node) in forward.live() {
            let f_stops = forward.path_locations(f_id);
            let candidates = backward.live_at_or_after(&f_node.location, f_node.instant.date_naive());
            for (b_id, b_node) in candidates {
                if f_node.is_root() && b_node.is_root() {
                    continue;
                }
                let ready = if f_node.is_root() || b_node.is_root() {
                    Some(f_node.instant)
                } else {
                    f_node.instant.checked_add_signed(self.bounds.min_connection)
                };
                if !ready.is_some_and(|ready| ready <= b_node.instant) {
                    continue;
                }
                if revisits(&f_stops, backward, b_id) {
                    continue;
                }
                let mut legs = forward.legs(f_id);
                legs.extend(backward.legs(b_id));
                let ids = legs.iter().map(|leg| leg.id).collect::<Vec<_>>();
                if seen.insert(ids) {
                    joined.push(legs);
                }
            }
        }
        joined
    }
}

/// true if the backward path, apart from the meeting point, passes through a
/// location the forward path already visited.
fn revisits(f_stops: &[&Location], backward: &Frontier<'_>, b_id: NodeId) -> bool {
    backward
        .path_locations(b_id)
        .into_iter()
        .rev()
        .skip(1)
        .any(|loc| f_stops.contains(&loc))
}
