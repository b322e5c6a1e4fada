use itertools::Itertools;
use rayon::prelude::*;

use crate::{
    error::EngineError,
    index::FlightIndex,
    metrics::{AttendeeOutcome, HostCandidate},
    model::{Location, Scenario},
    pareto::pareto_ops,
    scoring::HostScorer,
    search::ItineraryEnumerator,
    solver::{EngineConfig, Solution},
};

/// runs one planning exercise to completion: enumerate and pick a route for
/// every (attendee group, host) pair, aggregate per host, rank the hosts.
///
/// configuration is validated before any search. hosts are evaluated
/// independently on a pool of `config.parallelism` threads, all reading the
/// same immutable index.
pub fn solve<'a>(
    index: &'a FlightIndex,
    scenario: &Scenario,
    config: &EngineConfig,
) -> Result<Solution<'a>, EngineError> {
    let weights = config.validate()?;
    if index.is_empty() {
        return Err(EngineError::EmptyFlightIndex);
    }
    let enumerator = ItineraryEnumerator::new(
        index,
        &config.search,
        scenario.availability_window(),
        scenario.event_duration(),
    )?;
    let hosts = candidate_hosts(index, scenario);
    log::info!(
        "evaluating {} host candidate(s) for {} attendee group(s)",
        hosts.len(),
        scenario.attendees().len()
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.parallelism)
        .build()
        .map_err(|e| EngineError::InternalError(format!("failure building thread pool: {e}")))?;
    let candidates = pool.install(|| {
        hosts
            .par_iter()
            .map(|host| evaluate_host(&enumerator, scenario, host, config))
            .collect::<Result<Vec<_>, _>>()
    })?;
    let eligible = candidates.iter().filter(|c| c.is_eligible()).count();
    log::info!("{eligible} of {} host(s) reachable by every group", candidates.len());

    let ranked = HostScorer::new(weights).rank(candidates, config.allow_partial_hosts)?;
    let solution = Solution::new(ranked, config.alternatives)?;
    log::info!(
        "selected '{}' with composite score {:.4}",
        solution.winner().candidate.location(),
        solution.winner().composite_score()
    );
    Ok(solution)
}

/// the scenario's own candidate list, or else every location in the index
/// together with every attendee location.
pub fn candidate_hosts(index: &FlightIndex, scenario: &Scenario) -> Vec<Location> {
    match scenario.candidate_hosts() {
        Some(hosts) => hosts.to_vec(),
        None => index
            .locations()
            .into_iter()
            .chain(scenario.attendees().iter().map(|g| g.location.clone()))
            .sorted()
            .dedup()
            .collect_vec(),
    }
}

/// chooses one itinerary per attendee group to `host` and aggregates the
/// outcomes. a group without any itinerary is marked infeasible, the host is
/// still evaluated.
pub fn evaluate_host<'a>(
    enumerator: &ItineraryEnumerator<'a>,
    scenario: &Scenario,
    host: &Location,
    config: &EngineConfig,
) -> Result<HostCandidate<'a>, EngineError> {
    let outcomes = scenario
        .attendees()
        .iter()
        .map(|group| {
            let candidates = enumerator.enumerate(&group.location, host)?;
            let route = pareto_ops::select(candidates, &config.route_preference).ok_or_else(|| {
                log::debug!("no itinerary from '{}' to host '{}'", group.location, host);
                EngineError::InfeasibleAttendeeRoute {
                    origin: group.location.clone(),
                    host: host.clone(),
                }
            });
            Ok(AttendeeOutcome::new(group.clone(), route))
        })
        .collect::<Result<Vec<_>, EngineError>>()?;
    Ok(HostCandidate::new(
        host.clone(),
        outcomes,
        enumerator.bounds(),
        config.round_trip,
    ))
}
