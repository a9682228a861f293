/// Parse an ISO8601 duration string (PT1H2M3S) from the Data API into total
/// seconds. Empty or malformed input parses to 0.
pub fn parse_iso8601_duration_to_seconds(duration_str: &str) -> u64 {
    if !duration_str.starts_with("PT") {
        return 0;
    }

    let duration_part = &duration_str[2..]; // Remove "PT"
    let mut total_seconds = 0.0;
    let mut current_number = String::new();

    for ch in duration_part.chars() {
        if ch.is_ascii_digit() || ch == '.' {
            current_number.push(ch);
        } else {
            if let Ok(num) = current_number.parse::<f64>() {
                match ch {
                    'H' => total_seconds += num * 3600.0, // Hours
                    'M' => total_seconds += num * 60.0,   // Minutes
                    'S' => total_seconds += num,          // Seconds
                    _ => {}
                }
            }
            current_number.clear();
        }
    }

    total_seconds as u64
}
