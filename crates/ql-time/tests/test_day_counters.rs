//! Integration tests for the day-count conventions.

use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use ql_time::{
    day_count, year_fraction, Actual360, Actual365Fixed, ActualActualIsda, Date,
    DayCountConvention, DayCounter, Thirty360,
};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn test_actual_actual_isda() {
    let dc = ActualActualIsda;

    let cases: Vec<(Date, Date, f64)> = vec![
        (date(2003, 11, 1), date(2004, 5, 1), 0.497724380567),
        (date(1999, 2, 1), date(1999, 7, 1), 0.410958904110),
        (date(1999, 7, 1), date(2000, 7, 1), 1.001377348600),
        (date(2002, 8, 15), date(2003, 7, 15), 0.915068493151),
        (date(2003, 7, 15), date(2004, 1, 15), 0.504004790778),
        (date(1999, 7, 30), date(2000, 1, 30), 0.503892506924),
        (date(2000, 1, 30), date(2000, 6, 30), 0.415300546448),
    ];

    for (i, (d1, d2, expected)) in cases.iter().enumerate() {
        let calculated = dc.year_fraction(*d1, *d2);
        assert!(
            (calculated - expected).abs() < 1.0e-10,
            "ISDA case {i}: from {d1} to {d2}: calculated {calculated:.12}, expected {expected:.12}"
        );
    }
}

#[test]
fn test_thirty360_bond_basis() {
    let dc = Thirty360;
    let cases: Vec<(Date, Date, i64)> = vec![
        (date(2006, 8, 20), date(2007, 2, 20), 180),
        (date(2007, 2, 20), date(2007, 8, 20), 180),
        (date(2007, 8, 20), date(2008, 2, 20), 180),
        (date(2007, 2, 15), date(2007, 7, 31), 166),
        (date(2007, 8, 31), date(2008, 2, 29), 179),
        (date(2008, 2, 29), date(2008, 8, 31), 182),
        (date(2008, 8, 31), date(2009, 2, 28), 178),
        (date(2009, 2, 28), date(2009, 8, 31), 183),
    ];
    for (d1, d2, expected) in cases {
        assert_eq!(dc.day_count(d1, d2), expected, "30/360 from {d1} to {d2}");
    }
}

#[test]
fn test_actual_conventions() {
    let (from, to) = (date(2023, 1, 1), date(2023, 12, 31));
    assert_eq!(Actual365Fixed.day_count(from, to), 364);
    assert_abs_diff_eq!(Actual365Fixed.year_fraction(from, to), 364.0 / 365.0, epsilon = 1e-15);
    assert_abs_diff_eq!(Actual360.year_fraction(from, to), 364.0 / 360.0, epsilon = 1e-15);
    assert_eq!(day_count(from, to, DayCountConvention::Actual365Fixed), 364.0);
}

fn any_date() -> impl Strategy<Value = Date> {
    (Date::MIN.serial()..=Date::MAX.serial() - 2000).prop_map(|s| Date::from_serial(s).unwrap())
}

fn any_convention() -> impl Strategy<Value = DayCountConvention> {
    prop::sample::select(DayCountConvention::ALL.to_vec())
}

proptest! {
    #[test]
    fn same_date_counts_zero(d in any_date(), conv in any_convention()) {
        prop_assert_eq!(day_count(d, d, conv), 0.0);
        prop_assert_eq!(year_fraction(d, d, conv), 0.0);
    }

    #[test]
    fn counts_are_non_decreasing(
        from in any_date(),
        a in 0i32..1500,
        b in 0i32..1500,
        conv in any_convention(),
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let d1 = from.add_days(lo).unwrap();
        let d2 = from.add_days(hi).unwrap();
        prop_assert!(day_count(from, d1, conv) <= day_count(from, d2, conv));
        prop_assert!(year_fraction(from, d1, conv) <= year_fraction(from, d2, conv) + 1e-12);
    }
}
