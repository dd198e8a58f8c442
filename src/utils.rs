/// Turns the API's ISO8601 period duration (PT1H2M3S) into the display form
/// shown in reports. Empty input means the API gave no duration at all.
pub fn display_duration(duration_raw: &str) -> String {
    if duration_raw.is_empty() {
        return "Unknown".to_string();
    }

    match duration_raw.strip_prefix("PT") {
        Some(rest) => rest.to_string(),
        None => duration_raw.to_string(),
    }
}
