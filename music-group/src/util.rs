//! Formatting helpers.

/// Renders a song or album length as `m:ss`, or `h:mm:ss` once it reaches an hour.
///
/// Partial seconds are dropped. Negative and NaN lengths render as "0:00".
pub fn seconds_to_hms_string(seconds: f64) -> String {
    // `as` saturates, so negatives and NaN become 0.
    let total = seconds as u64;
    let (hours, minutes, secs) = (total / 3600, total % 3600 / 60, total % 60);

    if hours == 0 {
        format!("{minutes}:{secs:02}")
    } else {
        format!("{hours}:{minutes:02}:{secs:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seconds_to_hms_string() {
        // Album-length durations keep the hour field.
        assert_eq!(seconds_to_hms_string(3600.0), "1:00:00");
        assert_eq!(seconds_to_hms_string(4210.0), "1:10:10");
        assert_eq!(seconds_to_hms_string(36_000.0), "10:00:00");

        // Song-length durations drop it; minutes are not padded.
        assert_eq!(seconds_to_hms_string(301.0), "5:01");
        assert_eq!(seconds_to_hms_string(429.7), "7:09");
        assert_eq!(seconds_to_hms_string(3599.0), "59:59");

        // Sub-minute, zero and out-of-range values.
        assert_eq!(seconds_to_hms_string(0.0), "0:00");
        assert_eq!(seconds_to_hms_string(9.99), "0:09");
        assert_eq!(seconds_to_hms_string(-0.0), "0:00");
        assert_eq!(seconds_to_hms_string(-30.0), "0:00");
        assert_eq!(seconds_to_hms_string(f64::NAN), "0:00");
    }
}
