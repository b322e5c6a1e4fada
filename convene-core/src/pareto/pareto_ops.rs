use std::cmp::Ordering;

use crate::{model::Itinerary, pareto::RoutePreference};

/// `a` is no longer and no dirtier than `b`, and strictly better on one.
pub fn dominates(a: &Itinerary<'_>, b: &Itinerary<'_>) -> bool {
    let (da, ca) = (a.total_duration_hours(), a.total_co2_tonnes());
    let (db, cb) = (b.total_duration_hours(), b.total_co2_tonnes());
    da <= db && ca <= cb && (da < db || ca < cb)
}

/// the non-dominated subset, in input order. never empty for a non-empty
/// input. itineraries with identical totals all survive.
pub fn pareto_front<'a>(candidates: Vec<Itinerary<'a>>) -> Vec<Itinerary<'a>> {
    let keep = candidates
        .iter()
        .map(|c| !candidates.iter().any(|other| dominates(other, c)))
        .collect::<Vec<_>>();
    candidates
        .into_iter()
        .zip(keep)
        .filter_map(|(c, k)| if k { Some(c) } else { None })
        .collect()
}

/// picks one itinerary: reduce to the pareto front, min-max normalize duration
/// and emissions over it, then minimize the weighted sum. None when there are
/// no candidates.
pub fn select<'a>(
    candidates: Vec<Itinerary<'a>>,
    preference: &RoutePreference,
) -> Option<Itinerary<'a>> {
    let front = pareto_front(candidates);
    let durations = front
        .iter()
        .map(|i| i.total_duration_hours())
        .collect::<Vec<_>>();
    let emissions = front
        .iter()
        .map(|i| i.total_co2_tonnes())
        .collect::<Vec<_>>();
    let scale_duration = MinMax::over(&durations);
    let scale_emissions = MinMax::over(&emissions);

    front
        .into_iter()
        .map(|itinerary| {
            let objective = preference.duration_weight
                * scale_duration.normalize(itinerary.total_duration_hours())
                + preference.emission_weight
                    * scale_emissions.normalize(itinerary.total_co2_tonnes());
            (objective, itinerary)
        })
        .min_by(|(oa, a), (ob, b)| oa.total_cmp(ob).then_with(|| compare(a, b)))
        .map(|(_, itinerary)| itinerary)
}

/// total order used to break ties: duration, emissions, leg count, leg ids.
pub fn compare(a: &Itinerary<'_>, b: &Itinerary<'_>) -> Ordering {
    a.total_duration_hours()
        .total_cmp(&b.total_duration_hours())
        .then(a.total_co2_tonnes().total_cmp(&b.total_co2_tonnes()))
        .then(a.leg_count().cmp(&b.leg_count()))
        .then_with(|| a.leg_ids().cmp(&b.leg_ids()))
}

struct MinMax {
    min: f64,
    range: f64,
}

impl MinMax {
    fn over(values: &[f64]) -> MinMax {
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        MinMax {
            min,
            range: max - min,
        }
    }

    /// maps into [0, 1]. a degenerate range maps everything to 0.
    fn normalize(&self, value: f64) -> f64 {
        if self.range > 0.0 {
            (value - self.min) / self.range
        } else {
            0.0
        }
    }
}
