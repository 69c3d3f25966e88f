use chrono::{DateTime, TimeZone, Utc};
use timepunch::models::Duration;
use timepunch::utils::time::{
    diff_days, hour_to_minutes, is_negative, minutes_to_hour_formatted, multiply_time,
    parse_duration, subtract_time, sum_time, validate_time,
};

#[test]
fn test_diff_days_between_dates() {
    let first = DateTime::<Utc>::from_timestamp_millis(-349_891_200_000).unwrap();
    let second = DateTime::<Utc>::from_timestamp_millis(1_581_121_289_763).unwrap();

    assert_eq!(diff_days(&first, &second), 22350);
    assert_eq!(diff_days(&second, &first), -22350);
}

#[test]
fn test_diff_days_same_day_and_dst_rounding() {
    let a = Utc.with_ymd_and_hms(2020, 3, 1, 0, 0, 0).unwrap();
    let b = Utc.with_ymd_and_hms(2020, 3, 1, 23, 0, 0).unwrap();
    assert_eq!(diff_days(&a, &a), 0);
    // 23h rounds to one day
    assert_eq!(diff_days(&a, &b), 1);
}

#[test]
fn test_is_negative() {
    let date2 = DateTime::<Utc>::from_timestamp_millis(1_581_121_289_763)
        .unwrap()
        .to_rfc3339();

    assert!(!is_negative(&date2));
    assert!(is_negative(&format!("-{date2}")));
    assert!(is_negative("-00:30"));
    assert!(!is_negative("00:00"));
    assert!(is_negative(&-5));
    assert!(!is_negative(&5));
}

#[test]
fn test_validate_time() {
    for ok in ["00:00", "08:30", "23:59", "-01:00", "12:00"] {
        assert!(validate_time(ok), "{ok} should be valid");
    }
    for bad in [
        "24:00", "23:60", "1:00", "8:5", "100:00", "", "ab:cd", "08-30", "08:30:00", "--01:00",
        " 08:30",
    ] {
        assert!(!validate_time(bad), "{bad:?} should be invalid");
    }
}

#[test]
fn test_hour_to_minutes() {
    assert_eq!(hour_to_minutes("00:00").unwrap(), 0);
    assert_eq!(hour_to_minutes("01:30").unwrap(), 90);
    assert_eq!(hour_to_minutes("1:00").unwrap(), 60);
    assert_eq!(hour_to_minutes("-02:15").unwrap(), -135);
    assert_eq!(hour_to_minutes("48:00").unwrap(), 2880);
    assert!(hour_to_minutes("-00:00").unwrap() < 1);
    assert!(hour_to_minutes("noon").is_err());
    assert!(hour_to_minutes("").is_err());
}

#[test]
fn test_minutes_to_hour_formatted() {
    assert_eq!(minutes_to_hour_formatted(0), "00:00");
    assert_eq!(minutes_to_hour_formatted(-0), "00:00");
    assert_eq!(minutes_to_hour_formatted(59), "00:59");
    assert_eq!(minutes_to_hour_formatted(60), "01:00");
    assert_eq!(minutes_to_hour_formatted(-90), "-01:30");
    assert_eq!(minutes_to_hour_formatted(6000), "100:00");
}

#[test]
fn test_format_then_parse_is_identity() {
    for minutes in (-3000..=3000).step_by(7) {
        let formatted = minutes_to_hour_formatted(minutes);
        assert_eq!(hour_to_minutes(&formatted).unwrap(), minutes, "{formatted}");
    }
}

#[test]
fn test_sum_time() {
    assert_eq!(sum_time("12:00", "12:00").unwrap(), "24:00");
    assert_eq!(sum_time("01:45", "00:30").unwrap(), "02:15");
    assert_eq!(sum_time("-01:00", "01:00").unwrap(), "00:00");
    assert_eq!(sum_time("-01:00", "00:30").unwrap(), "-00:30");
    assert!(sum_time("x", "01:00").is_err());
}

#[test]
fn test_sum_time_is_commutative() {
    let samples = ["00:00", "01:15", "-02:30", "23:59", "48:00", "-00:01"];
    for a in samples {
        for b in samples {
            assert_eq!(sum_time(a, b).unwrap(), sum_time(b, a).unwrap());
        }
    }
}

#[test]
fn test_subtract_time_takes_first_from_second() {
    assert_eq!(subtract_time("1:00", "1:00").unwrap(), "00:00");
    assert_eq!(subtract_time("48:00", "24:00").unwrap(), "-24:00");
    assert_eq!(subtract_time("08:00", "17:30").unwrap(), "09:30");
    assert_eq!(subtract_time("-01:00", "01:00").unwrap(), "02:00");
}

#[test]
fn test_multiply_time() {
    assert_eq!(multiply_time("-00:60", 1).unwrap(), "-01:00");
    assert_eq!(multiply_time("00:60", 1).unwrap(), "01:00");
    assert_eq!(multiply_time("08:00", 5).unwrap(), "40:00");
    assert_eq!(multiply_time("01:30", -2).unwrap(), "-03:00");
    assert_eq!(multiply_time("07:12", 0).unwrap(), "00:00");
}

#[test]
fn test_parse_duration_requires_two_digit_fields() {
    assert_eq!(parse_duration("00:60").unwrap().minutes(), 60);
    assert_eq!(parse_duration("-01:30").unwrap().minutes(), -90);
    assert!(parse_duration("4:00").is_err());
    assert!(parse_duration("100:00").is_err());
}

#[test]
fn test_duration_algebra() {
    let a: Duration = "08:00".parse().unwrap();
    let b: Duration = "01:30".parse().unwrap();

    assert_eq!((a + b).to_string(), "09:30");
    assert_eq!((b - a).to_string(), "-06:30");
    assert_eq!((b * 3).to_string(), "04:30");
    assert_eq!((-b).to_string(), "-01:30");
    assert!((b - a).is_negative());
    assert_eq!((a - a).to_string(), "00:00");

    let total: Duration = [a, b, -b].into_iter().sum();
    assert_eq!(total, a);
}

#[test]
fn test_arithmetic_overflow_is_an_error() {
    let big = "153722867280912930:00";
    let neg_big = "-153722867280912930:00";

    assert!(sum_time(big, big).is_err());
    assert!(sum_time(neg_big, neg_big).is_err());
    assert!(subtract_time(neg_big, big).is_err());
    assert!(subtract_time(big, neg_big).is_err());
    assert!(multiply_time(big, 2).is_err());

    // still fine right below the limit
    assert!(sum_time(big, "00:00").is_ok());
    assert!(hour_to_minutes("99999999999999999999:00").is_err());
}
