use itertools::Itertools;
use std::collections::BTreeMap;

use crate::{
    error::EngineError,
    metrics::HostCandidate,
    scoring::{HostWeights, MetricBounds, RankedHost, ScoreBreakdown},
};

/// ranks host candidates by a weighted composite of min-max normalized
/// metrics. scores are only comparable within one ranking pool.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HostScorer {
    weights: HostWeights,
}

impl HostScorer {
    pub fn new(weights: HostWeights) -> HostScorer {
        HostScorer { weights }
    }

    pub fn weights(&self) -> &HostWeights {
        &self.weights
    }

    /// composite score of one candidate against the pool's metric bounds.
    pub fn score(&self, candidate: &HostCandidate<'_>, bounds: &MetricBounds) -> ScoreBreakdown {
        let mut components = BTreeMap::new();
        for (metric, weight) in self.weights.iter() {
            let normalized = bounds.normalize(metric, metric.value(candidate.metrics()));
            components.insert(*metric, weight * normalized);
        }
        let composite = components.values().sum::<f64>() / self.weights.total();
        ScoreBreakdown {
            composite,
            components,
        }
    }

    /// orders candidates best first: ascending composite score, then location
    /// code.
    ///
    /// only hosts where every group can travel and the event fits are ranked.
    /// when there are none and `allow_partial` is set, hosts that leave some
    /// groups without a route are ranked instead. otherwise the run fails
    /// with [`EngineError::NoFeasibleHost`].
    pub fn rank<'a>(
        &self,
        candidates: Vec<HostCandidate<'a>>,
        allow_partial: bool,
    ) -> Result<Vec<RankedHost<'a>>, EngineError> {
        let evaluated = candidates.len();
        let (eligible, rest): (Vec<_>, Vec<_>) =
            candidates.into_iter().partition(|c| c.is_eligible());
        let pool = if !eligible.is_empty() {
            eligible
        } else {
            let partial = if allow_partial {
                rest.iter()
                    .filter(|c| c.metrics().is_partially_eligible())
                    .cloned()
                    .collect_vec()
            } else {
                vec![]
            };
            if partial.is_empty() {
                let infeasible = rest.iter().map(|c| c.location().clone()).sorted().collect();
                return Err(EngineError::NoFeasibleHost {
                    evaluated,
                    infeasible,
                });
            }
            log::warn!(
                "no host is reachable by every attendee group, ranking {} partially feasible host(s)",
                partial.len()
            );
            partial
        };

        let bounds = MetricBounds::over(&pool.iter().collect_vec());
        let ranked = pool
            .into_iter()
            .map(|candidate| {
                let score = self.score(&candidate, &bounds);
                RankedHost { candidate, score }
            })
            .sorted_by(|a, b| {
                a.score
                    .composite
                    .total_cmp(&b.score.composite)
                    .then_with(|| a.candidate.location().cmp(b.candidate.location()))
            })
            .collect_vec();
        Ok(ranked)
    }
}

#[cfg(test)]
mod test {
    use super::HostScorer;
    use crate::error::EngineError;
    use crate::metrics::{EventSchedule, HostCandidate, HostMetrics};
    use crate::model::{date_codec::iso8601, Location};
    use crate::scoring::{HostMetric, HostWeights};
    use std::collections::BTreeMap;

    fn mock_schedule() -> Option<EventSchedule> {
        let at = iso8601::parse_utc("2024-03-02T00:00:00Z").expect("test invariant failed: bad instant");
        Some(EventSchedule {
            start: at,
            end: at,
            span_start: at,
            span_end: at,
        })
    }

    fn mock_host(code: &str, co2: f64, gini: f64, max_hours: f64) -> HostCandidate<'static> {
        let metrics = HostMetrics {
            total_co2_tonnes: co2,
            fairness_score: gini,
            max_travel_hours: max_hours,
            attendee_travel_hours: BTreeMap::from([(Location::from("BOM"), max_hours)]),
            event_schedule: mock_schedule(),
            ..HostMetrics::default()
        };
        HostCandidate::with_metrics(Location::from(code), metrics)
    }

    fn mock_infeasible(code: &str, partial: bool) -> HostCandidate<'static> {
        let metrics = HostMetrics {
            infeasible_groups: vec![Location::from("LHR")],
            attendee_travel_hours: if partial {
                BTreeMap::from([(Location::from("BOM"), 5.0)])
            } else {
                BTreeMap::new()
            },
            event_schedule: if partial { mock_schedule() } else { None },
            ..HostMetrics::default()
        };
        HostCandidate::with_metrics(Location::from(code), metrics)
    }

    fn order(scorer: &HostScorer, hosts: Vec<HostCandidate<'static>>) -> Vec<String> {
        scorer
            .rank(hosts, false)
            .expect("ranking should succeed")
            .iter()
            .map(|r| r.candidate.location().to_string())
            .collect()
    }

    #[test]
    fn test_composite_and_components() {
        let scorer = HostScorer::default();
        let ranked = scorer
            .rank(
                vec![
                    mock_host("SIN", 100.0, 0.2, 10.0),
                    mock_host("HKG", 200.0, 0.1, 6.0),
                    mock_host("DXB", 300.0, 0.3, 8.0),
                ],
                false,
            )
            .expect("ranking should succeed");
        let sin = ranked
            .iter()
            .find(|r| r.candidate.location().as_str() == "SIN")
            .expect("test invariant failed: SIN missing");
        // co2 0, gini 0.5, max hours 1
        assert!((sin.score.composite - 0.5).abs() < 1e-12);
        assert_eq!(sin.score.components.get(&HostMetric::MaxTravelHours), Some(&1.0));
        // hkg: 0.5 + 0 + 0 = 0.5 / 3
        assert_eq!(ranked[0].candidate.location().as_str(), "HKG");
        for pair in ranked.windows(2) {
            assert!(pair[0].score.composite <= pair[1].score.composite);
        }
    }

    #[test]
    fn test_ties_broken_by_location() {
        let scorer = HostScorer::default();
        let found = order(
            &scorer,
            vec![
                mock_host("SIN", 100.0, 0.2, 10.0),
                mock_host("HKG", 100.0, 0.2, 10.0),
                mock_host("BKK", 100.0, 0.2, 10.0),
            ],
        );
        assert_eq!(found, vec!["BKK", "HKG", "SIN"]);
    }

    #[test]
    fn test_raising_co2_never_improves_rank() {
        let scorer = HostScorer::default();
        let base = || {
            vec![
                mock_host("SIN", 150.0, 0.2, 10.0),
                mock_host("HKG", 200.0, 0.1, 6.0),
                mock_host("DXB", 300.0, 0.3, 8.0),
                mock_host("BKK", 120.0, 0.25, 9.0),
            ]
        };
        let before = order(&scorer, base());
        let position = |ranking: &[String]| {
            ranking
                .iter()
                .position(|l| l == "SIN")
                .expect("test invariant failed: SIN missing")
        };
        for co2 in [160.0, 200.0, 250.0, 400.0] {
            let mut hosts = base();
            hosts[0] = mock_host("SIN", co2, 0.2, 10.0);
            let after = order(&scorer, hosts);
            assert!(position(&after) >= position(&before));
        }
    }

    #[test]
    fn test_no_feasible_host() {
        let scorer = HostScorer::default();
        let result = scorer.rank(vec![mock_infeasible("HKG", true), mock_infeasible("SIN", false)], false);
        match result {
            Err(EngineError::NoFeasibleHost {
                evaluated,
                infeasible,
            }) => {
                assert_eq!(evaluated, 2);
                assert_eq!(infeasible, vec![Location::from("HKG"), Location::from("SIN")]);
            }
            other => panic!("expected NoFeasibleHost, found {other:?}"),
        }
    }

    #[test]
    fn test_partial_hosts_only_when_allowed_and_needed() {
        let scorer = HostScorer::default();
        let ranked = scorer
            .rank(vec![mock_infeasible("HKG", true), mock_infeasible("SIN", false)], true)
            .expect("partial ranking should succeed");
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].candidate.location().as_str(), "HKG");

        let ranked = scorer
            .rank(vec![mock_infeasible("HKG", true), mock_host("SIN", 1.0, 0.0, 1.0)], true)
            .expect("ranking should succeed");
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].candidate.location().as_str(), "SIN");
    }

    #[test]
    fn test_single_metric_weights() {
        let scorer = HostScorer::new(
            HostWeights::new(BTreeMap::from([(HostMetric::MaxTravelHours, 1.0)]))
                .expect("test invariant failed: weights"),
        );
        let found = order(
            &scorer,
            vec![mock_host("SIN", 100.0, 0.2, 10.0), mock_host("HKG", 900.0, 0.9, 6.0)],
        );
        assert_eq!(found, vec!["HKG", "SIN"]);
    }
}
