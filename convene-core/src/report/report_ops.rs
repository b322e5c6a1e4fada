/// rounds half away from zero to the given number of decimal places.
pub fn round(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// rounding applied to emissions and hours in reports
pub const FIGURE_PLACES: i32 = 2;
/// rounding applied to fairness and composite scores in reports
pub const SCORE_PLACES: i32 = 4;
