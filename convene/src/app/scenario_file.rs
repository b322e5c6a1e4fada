use convene_core::model::{Scenario, ScenarioPayload};
use std::{fs::File, io::BufReader};

use crate::app::AppError;

/// reads and validates a scenario JSON file.
pub fn read_scenario(filepath: &str) -> Result<Scenario, AppError> {
    let file = File::open(filepath).map_err(|e| AppError::IoError {
        filepath: filepath.to_string(),
        source: e,
    })?;
    let payload: ScenarioPayload =
        serde_json::from_reader(BufReader::new(file)).map_err(|e| AppError::JsonError {
            filepath: filepath.to_string(),
            source: e,
        })?;
    let scenario = Scenario::try_from(payload)?;
    log::info!(
        "scenario '{filepath}' has {} attendee group(s), {} traveller(s)",
        scenario.attendees().len(),
        scenario.total_headcount()
    );
    Ok(scenario)
}

#[cfg(test)]
mod test {
    use super::read_scenario;
    use crate::app::AppError;
    use convene_core::EngineError;
    use std::io::Write;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("{name}-{}.json", std::process::id()));
        let mut file = std::fs::File::create(&path).expect("test invariant failed: temp file");
        file.write_all(contents.as_bytes())
            .expect("test invariant failed: temp write");
        path
    }

    #[test]
    fn test_read_scenario() {
        let path = write_temp(
            "convene-scenario-ok",
            r#"{
                "attendees": {"Mumbai": 2, "Shanghai": 3, "Hong Kong": 1},
                "availability_window": {"start": "2024-03-01T00:00:00Z", "end": "2024-03-06T00:00:00Z"},
                "event_duration": {"days": 2, "hours": 0}
            }"#,
        );
        let scenario = read_scenario(path.to_str().expect("test invariant failed: temp path"));
        std::fs::remove_file(&path).expect("test invariant failed: temp cleanup");
        let scenario = scenario.expect("scenario should load");
        assert_eq!(scenario.total_headcount(), 6);
    }

    #[test]
    fn test_missing_field_and_invalid_values() {
        let path = write_temp(
            "convene-scenario-missing",
            r#"{"attendees": {"BOM": 1}, "event_duration": {"days": 1}}"#,
        );
        let result = read_scenario(path.to_str().expect("test invariant failed: temp path"));
        std::fs::remove_file(&path).expect("test invariant failed: temp cleanup");
        assert!(matches!(result, Err(AppError::JsonError { .. })));

        let path = write_temp(
            "convene-scenario-empty",
            r#"{
                "attendees": {},
                "availability_window": {"start": "2024-03-01T00:00:00Z", "end": "2024-03-06T00:00:00Z"},
                "event_duration": {"days": 1}
            }"#,
        );
        let result = read_scenario(path.to_str().expect("test invariant failed: temp path"));
        std::fs::remove_file(&path).expect("test invariant failed: temp cleanup");
        assert!(matches!(
            result,
            Err(AppError::EngineError(EngineError::InvalidScenario(_)))
        ));
    }
}
