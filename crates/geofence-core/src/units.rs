//! Distance display formatting.

/// Format a distance in meters for display.
///
/// Negative input is clamped to zero. Below 1 km the value renders as
/// whole meters; between 1 and 10 km as kilometers with two decimals;
/// beyond that with one decimal.
pub fn format_distance(meters: f64) -> String {
    let meters = meters.max(0.0);
    if meters < 1_000.0 {
        format!("{:.0} m", meters)
    } else if meters < 10_000.0 {
        format!("{:.2} km", meters / 1_000.0)
    } else {
        format!("{:.1} km", meters / 1_000.0)
    }
}
