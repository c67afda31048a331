/// Hours with at least one decimal place, e.g. `2.0h`, `0.5h`.
pub fn format_hours(hours: f64) -> String {
    format!("{:?}h", hours)
}

/// Approximate duration for narrative text: minutes below an hour,
/// otherwise hours.
pub fn format_duration_hours(hours: f64) -> String {
    if hours < 1.0 {
        format!("~{} minutes", (hours * 60.0).round() as u64)
    } else if hours == 1.0 {
        "~1 hour".to_string()
    } else {
        format!("~{} hours", hours)
    }
}

/// `LOW` when both ends agree, `LOW to HIGH` otherwise.
pub fn format_range<T: PartialEq + std::fmt::Display>(low: T, high: T) -> String {
    if low == high {
        low.to_string()
    } else {
        format!("{} to {}", low, high)
    }
}
