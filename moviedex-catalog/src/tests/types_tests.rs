use super::*;

#[test]
fn decade_buckets_by_integer_division() {
    assert_eq!(Decade::of_year(2014).to_string(), "2010s");
    assert_eq!(Decade::of_year(1994).to_string(), "1990s");
    assert_eq!(Decade::of_year(2000).to_string(), "2000s");
    assert_eq!(Decade::of_year(2009).start_year(), 2000);
}

#[test]
fn decade_truncates_negative_years_toward_zero() {
    assert_eq!(Decade::of_year(-5).to_string(), "0s");
    assert_eq!(Decade::of_year(5).to_string(), "0s");
    assert_eq!(Decade::of_year(-15).to_string(), "-10s");
}

#[test]
fn decade_of_extreme_years_does_not_overflow() {
    assert_eq!(Decade::of_year(i32::MIN).start_year(), -2147483640);
    assert_eq!(Decade::of_year(i32::MAX).start_year(), 2147483640);
}

#[test]
fn decades_order_chronologically() {
    assert!(Decade::of_year(1994) < Decade::of_year(2001));
    assert!(Decade::of_year(980) < Decade::of_year(1994));
}

#[test]
fn parse_year_trims_whitespace() {
    assert_eq!(parse_year(" 1995 ").unwrap(), 1995);
    assert_eq!(parse_year("-2147483648").unwrap(), i32::MIN);
}

#[test]
fn parse_year_rejects_non_numbers() {
    let err = parse_year("nineteen").unwrap_err();
    assert!(matches!(err, CatalogError::InvalidYear(ref s) if s == "nineteen"));
    assert!(matches!(parse_year("1995.5"), Err(CatalogError::InvalidYear(_))));
}

#[test]
fn parse_rating_accepts_finite_numbers() {
    assert_eq!(parse_rating("8.3\n").unwrap(), 8.3);
    assert_eq!(parse_rating("9").unwrap(), 9.0);
}

#[test]
fn parse_rating_rejects_non_finite_and_text() {
    for input in ["great", "NaN", "inf", ""] {
        assert!(
            matches!(parse_rating(input), Err(CatalogError::InvalidRating(_))),
            "{input:?}"
        );
    }
}

#[test]
fn rating_label_keeps_one_decimal() {
    assert_eq!(format_rating(9.0), "9.0");
    assert_eq!(format_rating(8.8), "8.8");
    assert_eq!(format_rating(7.25), "7.25");
    assert_eq!(Movie::new("X", 2000, 10.0, "Y").rating_label(), "10.0");
}
