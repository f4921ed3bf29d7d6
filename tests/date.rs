use saucery::SauceDate;

#[test]
fn parse_wire_format() {
    let date = SauceDate::from_bytes(b"19940831").unwrap();
    assert_eq!(date.year, 1994);
    assert_eq!(date.month, 8);
    assert_eq!(date.day, 31);
}

#[test]
fn reject_non_digits_and_wrong_length() {
    assert!(SauceDate::from_bytes(b"1994").is_none());
    assert!(SauceDate::from_bytes(b"ABCD0831").is_none());
    assert!(SauceDate::from_bytes(b"19940831x").is_none());
    assert!(SauceDate::from_bytes(b"1994 831").is_none());
}

#[test]
fn reject_calendar_garbage() {
    assert!(SauceDate::from_bytes(b"19941331").is_none()); // month 13
    assert!(SauceDate::from_bytes(b"19940832").is_none()); // day 32
    assert!(SauceDate::from_bytes(b"19940800").is_none()); // day 0
    assert!(SauceDate::from_bytes(b"19940031").is_none()); // month 0
    assert!(SauceDate::from_bytes(b"19950229").is_none()); // not a leap year
    assert!(SauceDate::from_bytes(b"19960229").is_some()); // leap year
}

#[test]
fn wire_round_trip() {
    let date = SauceDate::new(2024, 2, 29).unwrap();
    assert_eq!(&date.to_bytes(), b"20240229");
    assert_eq!(SauceDate::from_bytes(&date.to_bytes()), Some(date));

    let early = SauceDate::new(476, 9, 4).unwrap();
    assert_eq!(&early.to_bytes(), b"04760904");
}

#[test]
fn display_format() {
    assert_eq!(SauceDate::new(2025, 11, 8).unwrap().to_string(), "2025/11/08");
}

#[test]
fn chrono_conversions() {
    use chrono::NaiveDate;

    let naive = NaiveDate::from_ymd_opt(1994, 8, 31).unwrap();
    let date = SauceDate::from(naive);
    assert_eq!(date, SauceDate::new(1994, 8, 31).unwrap());
    assert_eq!(date.to_naive_date(), Some(naive));
    assert_eq!(NaiveDate::try_from(date), Ok(naive));
}

#[test]
fn constructor_validates() {
    assert!(SauceDate::new(1994, 13, 1).is_none());
    assert!(SauceDate::new(-5, 1, 1).is_none());
    assert!(SauceDate::new(10_000, 1, 1).is_none());
}
