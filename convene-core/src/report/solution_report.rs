use serde::Serialize;

use crate::{
    report::{ComparisonReport, HostReport},
    solver::{Co2Unit, Solution},
};

/// the serialized result of a run.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SolutionReport {
    pub solution: HostReport,
    pub alternatives: Vec<HostReport>,
    pub comparison: ComparisonReport,
}

impl SolutionReport {
    pub fn new(solution: &Solution<'_>, unit: Co2Unit) -> SolutionReport {
        let ranked = solution
            .ranked()
            .map(|host| HostReport::new(host, unit))
            .collect::<Vec<_>>();
        SolutionReport {
            solution: HostReport::new(solution.winner(), unit),
            alternatives: solution
                .alternatives()
                .iter()
                .map(|host| HostReport::new(host, unit))
                .collect(),
            comparison: ComparisonReport::new(&ranked),
        }
    }
}

#[cfg(test)]
mod test {
    use super::SolutionReport;
    use crate::index::fixtures::mock_index;
    use crate::model::{Scenario, ScenarioPayload};
    use crate::solver::{solve, Co2Unit, EngineConfig};

    fn mock_scenario() -> Scenario {
        let payload: ScenarioPayload = serde_json::from_str(
            r#"{
                "attendees": {"BOM": 2, "SHA": 1},
                "availability_window": {"start": "2024-03-01T00:00:00Z", "end": "2024-03-06T00:00:00Z"},
                "event_duration": {"days": 2}
            }"#,
        )
        .expect("test invariant failed: bad scenario json");
        Scenario::try_from(payload).expect("test invariant failed: bad scenario")
    }

    #[test]
    fn test_report_shape_and_units() {
        let index = mock_index(&[
            ("BOM", "SIN", "2024-03-01", 5.5, 0.061234),
            ("SHA", "SIN", "2024-03-01", 5.25, 0.07),
            ("BOM", "HKG", "2024-03-01", 6.0, 0.08),
            ("SHA", "HKG", "2024-03-01", 2.5, 0.03),
        ]);
        let config = EngineConfig {
            alternatives: 5,
            ..EngineConfig::default()
        };
        let solution = solve(&index, &mock_scenario(), &config).expect("scenario should solve");
        let report = SolutionReport::new(&solution, Co2Unit::Kilograms);
        assert_eq!(report.comparison.cities_evaluated, 2);
        assert_eq!(report.alternatives.len(), 1);

        let json = serde_json::to_value(&report).expect("test invariant failed: serialize");
        let solution = &json["solution"];
        for field in [
            "event_location",
            "total_co2",
            "average_travel_hours",
            "median_travel_hours",
            "fairness_score",
            "attendee_travel_hours",
            "composite_score",
            "score_breakdown",
            "event_dates",
            "event_span",
            "itineraries",
        ] {
            assert!(solution.get(field).is_some(), "missing field {field}");
        }
        assert!(json["comparison"]["travel_time_range"].get("avg_avg").is_some());

        // sin: bom 2 x 61.234 kg, sha 70 kg
        let sin = if solution["event_location"] == "SIN" {
            solution
        } else {
            &json["alternatives"][0]
        };
        assert_eq!(sin["total_co2"], 192.47);
        assert_eq!(sin["itineraries"]["BOM"]["legs"][0]["co2"], 61.23);
        assert_eq!(sin["itineraries"]["BOM"]["stops"][1], "SIN");
        assert_eq!(sin["event_dates"]["start"], "2024-03-01T05:30:00Z");
    }
}
