use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// unit emissions are reported in. the engine works in tonnes, conversion
/// happens once when the report is built.
#[derive(Serialize, Deserialize, Debug, ValueEnum, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Co2Unit {
    #[default]
    Tonnes,
    Kilograms,
}

impl Co2Unit {
    pub fn convert_tonnes(&self, tonnes: f64) -> f64 {
        match self {
            Co2Unit::Tonnes => tonnes,
            Co2Unit::Kilograms => tonnes * 1000.0,
        }
    }
}
