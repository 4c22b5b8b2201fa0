//! UTC 时间格式化

use chrono::{DateTime, Utc};

/// ISO-8601 UTC 时间（无时区后缀）
///
/// 微秒为 0 时省略小数部分：`2024-05-01T12:30:45`；
/// 否则输出 6 位微秒：`2024-05-01T12:30:45.123456`
pub fn format_iso8601(at: &DateTime<Utc>) -> String {
    let naive = at.naive_utc();
    if at.timestamp_subsec_micros() == 0 {
        naive.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        naive.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_whole_second_omits_fraction() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 45).unwrap();
        assert_eq!(format_iso8601(&at), "2024-05-01T12:30:45");
    }

    #[test]
    fn test_micros_are_zero_padded() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 45).unwrap() + Duration::microseconds(1_230);
        assert_eq!(format_iso8601(&at), "2024-05-01T12:30:45.001230");
    }

    #[test]
    fn test_sub_micro_nanos_are_dropped() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 45).unwrap() + Duration::nanoseconds(999);
        assert_eq!(format_iso8601(&at), "2024-05-01T12:30:45");
    }
}
