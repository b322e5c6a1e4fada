use chrono::{DateTime, Utc};
use itertools::Itertools;

use crate::{
    metrics::{stats_ops, AttendeeOutcome, EventSchedule, HostMetrics},
    model::time_ops,
    search::SearchBounds,
};

/// folds the attendee outcomes for one host into [`HostMetrics`].
///
/// emissions are whole-aircraft figures per itinerary use, multiplied by the
/// group headcount and never divided per seat. with `round_trip` each group's
/// hours and emissions count the mirrored return flight as well.
pub fn aggregate(
    outcomes: &[AttendeeOutcome<'_>],
    bounds: &SearchBounds,
    round_trip: bool,
) -> HostMetrics {
    let legs_flown = if round_trip { 2.0 } else { 1.0 };
    let mut metrics = HostMetrics::default();
    let mut hours = vec![];
    let mut weighted_hours = vec![];
    // (arrival, one-way hours) per group, for the shared event
    let mut arrivals: Vec<(DateTime<Utc>, f64)> = vec![];

    for outcome in outcomes.iter() {
        let location = &outcome.group.location;
        let headcount = f64::from(outcome.group.headcount);
        let scheduled = outcome.itinerary().and_then(|itinerary| {
            itinerary
                .schedule(bounds.earliest_departure, bounds.min_connection)
                .map(|schedule| (itinerary, schedule))
        });
        let Some((itinerary, schedule)) = scheduled else {
            metrics.infeasible_groups.push(location.clone());
            continue;
        };
        let group_hours = itinerary.total_duration_hours() * legs_flown;
        let group_co2 = itinerary.total_co2_tonnes() * legs_flown * headcount;
        hours.push(group_hours);
        weighted_hours.push((group_hours, headcount));
        arrivals.push((schedule.arrival, itinerary.total_duration_hours()));
        metrics.total_co2_tonnes += group_co2;
        metrics
            .attendee_travel_hours
            .insert(location.clone(), group_hours);
        metrics.attendee_travel_co2.insert(location.clone(), group_co2);
    }

    metrics.infeasible_groups.sort();
    metrics.average_travel_hours = stats_ops::weighted_mean(&weighted_hours);
    metrics.median_travel_hours = stats_ops::median(&hours);
    metrics.fairness_score = stats_ops::gini(&hours);
    if let Some((min, max)) = hours.iter().copied().minmax_by(f64::total_cmp).into_option() {
        metrics.min_travel_hours = min;
        metrics.max_travel_hours = max;
    }
    metrics.event_schedule = event_schedule(&arrivals, bounds);
    metrics
}

/// the event starts once the last group lands. the span closes when the last
/// group is home again.
fn event_schedule(
    arrivals: &[(DateTime<Utc>, f64)],
    bounds: &SearchBounds,
) -> Option<EventSchedule> {
    let start = arrivals.iter().map(|(arrival, _)| *arrival).max()?;
    let span_start = arrivals.iter().map(|(arrival, _)| *arrival).min()?;
    let end = start + bounds.event_duration;
    let span_end = arrivals
        .iter()
        .map(|(_, hours)| end + time_ops::hours_to_duration(*hours))
        .max()?;
    let schedule = EventSchedule {
        start,
        end,
        span_start,
        span_end,
    };
    if schedule.fits_before(&bounds.window_end) {
        Some(schedule)
    } else {
        log::debug!(
            "shared event ending {} with last return at {} overruns the window",
            end,
            span_end
        );
        None
    }
}
