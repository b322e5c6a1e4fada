use config::{Config, FileFormat};
use convene_core::solver::{Co2Unit, EngineConfig};
use std::collections::BTreeMap;

use crate::app::AppError;

/// the embedded base layer of every configuration
pub const DEFAULT_CONFIG: &str = include_str!("../resources/convene.toml");

/// prefix for environment variable overrides
pub const ENV_PREFIX: &str = "CONVENE";

/// values given on the command line. these win over every other layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub duration_weight: Option<f64>,
    pub emission_weight: Option<f64>,
    /// when non-empty, replaces the configured host weights entirely
    pub host_weights: Vec<(String, f64)>,
    pub alternatives: Option<usize>,
    pub parallelism: Option<usize>,
    pub co2_unit: Option<Co2Unit>,
    pub round_trip: bool,
    pub allow_partial_hosts: bool,
}

impl ConfigOverrides {
    pub fn apply(&self, config: &mut EngineConfig) {
        if let Some(w) = self.duration_weight {
            config.route_preference.duration_weight = w;
        }
        if let Some(w) = self.emission_weight {
            config.route_preference.emission_weight = w;
        }
        if !self.host_weights.is_empty() {
            config.host_weights = self.host_weights.iter().cloned().collect::<BTreeMap<_, _>>();
        }
        if let Some(n) = self.alternatives {
            config.alternatives = n;
        }
        if let Some(n) = self.parallelism {
            config.parallelism = n;
        }
        if let Some(unit) = self.co2_unit {
            config.co2_unit = unit;
        }
        config.round_trip |= self.round_trip;
        config.allow_partial_hosts |= self.allow_partial_hosts;
    }
}

/// builds the engine configuration from the embedded defaults, an optional
/// TOML file, `CONVENE_*` environment variables and command line overrides,
/// in that order. the result is validated before it is returned.
pub fn load_engine_config(
    config_file: Option<&str>,
    overrides: &ConfigOverrides,
) -> Result<EngineConfig, AppError> {
    let mut builder =
        Config::builder().add_source(config::File::from_str(DEFAULT_CONFIG, FileFormat::Toml));
    if let Some(filepath) = config_file {
        builder = builder.add_source(config::File::new(filepath, FileFormat::Toml));
    }
    builder = builder.add_source(
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );
    let source = config_file.unwrap_or("default configuration");
    let config = builder.build().map_err(|e| AppError::ConfigReadError {
        msg: format!("failed reading '{source}'"),
        source: e,
    })?;
    let mut engine_config =
        config
            .try_deserialize::<EngineConfig>()
            .map_err(|e| AppError::ConfigReadError {
                msg: format!("failed deserializing engine configuration from '{source}'"),
                source: e,
            })?;
    overrides.apply(&mut engine_config);
    engine_config.validate()?;
    log::debug!("engine configuration: {engine_config:?}");
    Ok(engine_config)
}

/// parses a `KEY=VALUE` host weight argument.
pub fn parse_host_weight(arg: &str) -> Result<(String, f64), String> {
    let (key, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, found '{arg}'"))?;
    let weight = value
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid weight '{value}' for '{key}': {e}"))?;
    Ok((key.trim().to_string(), weight))
}

#[cfg(test)]
mod test {
    use super::{load_engine_config, parse_host_weight, ConfigOverrides, DEFAULT_CONFIG};
    use config::{Config, FileFormat};
    use convene_core::scoring::HostWeights;
    use convene_core::solver::{Co2Unit, EngineConfig};
    use std::io::Write;

    #[test]
    fn test_embedded_defaults_match_engine_defaults() {
        let config = Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .expect("test invariant failed: embedded config should parse");
        let engine = config
            .try_deserialize::<EngineConfig>()
            .expect("test invariant failed: embedded config should deserialize");
        let defaults = EngineConfig::default();
        assert_eq!(engine.search, defaults.search);
        assert_eq!(engine.route_preference, defaults.route_preference);
        assert_eq!(engine.alternatives, defaults.alternatives);
        assert_eq!(engine.co2_unit, Co2Unit::Tonnes);
        assert!(engine.host_weights.is_empty());
        let weights = engine
            .validate()
            .expect("test invariant failed: defaults should validate");
        assert_eq!(weights, HostWeights::default());
    }

    #[test]
    fn test_file_weight_table_replaces_defaults() {
        let path = std::env::temp_dir().join(format!(
            "convene-weights-{}.toml",
            std::process::id()
        ));
        let mut file = std::fs::File::create(&path).expect("test invariant failed: temp file");
        writeln!(file, "[host_weights]\naverage_travel_hours = 1.0")
            .expect("test invariant failed: temp write");
        let filepath = path.to_str().expect("test invariant failed: temp path");

        let engine = load_engine_config(Some(filepath), &ConfigOverrides::default())
            .expect("config should load");
        std::fs::remove_file(&path).expect("test invariant failed: temp cleanup");

        assert_eq!(engine.host_weights.len(), 1);
        assert_eq!(engine.host_weights.get("average_travel_hours"), Some(&1.0));
    }

    #[test]
    fn test_file_layer_and_overrides() {
        let path = std::env::temp_dir().join(format!("convene-config-{}.toml", std::process::id()));
        let mut file = std::fs::File::create(&path).expect("test invariant failed: temp file");
        writeln!(
            file,
            "alternatives = 3\nco2_unit = \"kilograms\"\n[route_preference]\nemission_weight = 0.9"
        )
        .expect("test invariant failed: temp write");
        let filepath = path.to_str().expect("test invariant failed: temp path");

        let overrides = ConfigOverrides {
            duration_weight: Some(0.1),
            host_weights: vec![(String::from("max_travel_hours"), 2.0)],
            ..ConfigOverrides::default()
        };
        let engine = load_engine_config(Some(filepath), &overrides).expect("config should load");
        std::fs::remove_file(&path).expect("test invariant failed: temp cleanup");

        assert_eq!(engine.alternatives, 3);
        assert_eq!(engine.co2_unit, Co2Unit::Kilograms);
        assert_eq!(engine.route_preference.emission_weight, 0.9);
        assert_eq!(engine.route_preference.duration_weight, 0.1);
        assert_eq!(engine.host_weights.len(), 1);
        assert_eq!(engine.host_weights.get("max_travel_hours"), Some(&2.0));
    }

    #[test]
    fn test_invalid_override_rejected() {
        let overrides = ConfigOverrides {
            host_weights: vec![(String::from("fare"), 1.0)],
            ..ConfigOverrides::default()
        };
        assert!(load_engine_config(None, &overrides).is_err());
    }

    #[test]
    fn test_parse_host_weight() {
        assert_eq!(
            parse_host_weight("total_co2=2.5"),
            Ok((String::from("total_co2"), 2.5))
        );
        assert!(parse_host_weight("total_co2").is_err());
        assert!(parse_host_weight("total_co2=high").is_err());
    }
}
