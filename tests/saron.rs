use std::sync::Arc;

use approx::assert_abs_diff_eq;
use chrono::{Days, NaiveDate};

use rfrcompounding::configuration::Configuration;
use rfrcompounding::interestrate::index::compoundedindex::make_compounded_index_rounded_daily;
use rfrcompounding::interestrate::index::compoundedrate::{EffectiveDateRule, RateWindow, make_rate_window};
use rfrcompounding::interestrate::inversemodifiedfollowing::InverseModifiedFollowing;
use rfrcompounding::time::businessdayadjuster::BusinessDayConvention;
use rfrcompounding::time::calendar::holidaycalendar::HolidayCalendar;
use rfrcompounding::time::period::Period;
use rfrcompounding::time::termdate::{make_effective, make_maturity};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn configuration() -> Configuration {
    Configuration::from_reader(concat!(env!("CARGO_MANIFEST_DIR"), "/json/config.json")).unwrap()
}

fn six() -> Arc<dyn HolidayCalendar> {
    configuration().holiday_calendar_manager().get("SIX").unwrap()
}

fn one_month_start(maturity: NaiveDate, publication: &dyn HolidayCalendar) -> NaiveDate {
    let term = Period::months(1);
    let convention = InverseModifiedFollowing::new(maturity, term);
    make_effective(maturity, term, &convention, publication).unwrap()
}

#[test]
fn test_six_calendar() {
    let publication = six();
    // Good Friday, Easter Monday, Ascension, Whit Monday, Swiss National Day
    for d in [ymd(2018, 3, 30), ymd(2018, 4, 2), ymd(2018, 5, 10), ymd(2018, 5, 21), ymd(2018, 8, 1)] {
        assert!(publication.is_holiday(d), "{} should be a holiday", d);
    }
    assert!(publication.is_business_day(ymd(2018, 3, 29)));
    assert_eq!(publication.last_business_day_of_month(2018, 3), ymd(2018, 3, 29));
}

#[test]
fn test_start_date_unique_candidate() {
    assert_eq!(one_month_start(ymd(2018, 6, 15), six().as_ref()), ymd(2018, 5, 15));
}

#[test]
fn test_start_date_two_candidates() {
    let publication = six();
    let convention = InverseModifiedFollowing::new(ymd(2018, 10, 8), Period::months(1));
    assert_eq!(
        convention.start_dates(ymd(2018, 9, 8), publication.as_ref()),
        vec![ymd(2018, 9, 6), ymd(2018, 9, 7)]
    );
    assert_eq!(one_month_start(ymd(2018, 10, 8), publication.as_ref()), ymd(2018, 9, 6));
}

#[test]
fn test_start_date_three_candidates() {
    let publication = six();
    let convention = InverseModifiedFollowing::new(ymd(2018, 4, 23), Period::months(1));
    assert_eq!(
        convention.start_dates(ymd(2018, 3, 23), publication.as_ref()),
        vec![ymd(2018, 3, 21), ymd(2018, 3, 22), ymd(2018, 3, 23)]
    );
    assert_eq!(one_month_start(ymd(2018, 4, 23), publication.as_ref()), ymd(2018, 3, 22));
}

#[test]
fn test_start_date_end_of_month() {
    // 2018-03-30 is Good Friday
    assert_eq!(one_month_start(ymd(2018, 4, 30), six().as_ref()), ymd(2018, 3, 29));
}

#[test]
fn test_start_date_without_candidate() {
    let publication = six();
    let convention = InverseModifiedFollowing::new(ymd(2019, 12, 10), Period::months(1));
    assert!(convention.start_dates(ymd(2019, 11, 10), publication.as_ref()).is_empty());
    assert_eq!(one_month_start(ymd(2019, 12, 10), publication.as_ref()), ymd(2019, 11, 8));
}

#[test]
fn test_start_date_round_trip() {
    let publication = six();
    for months in [1, 2, 3, 6, 12] {
        let term = Period::months(months);
        let mut e = ymd(2017, 1, 1);
        while e <= ymd(2021, 12, 31) {
            if publication.is_business_day(e) {
                let maturity = make_maturity(
                    e,
                    term,
                    &BusinessDayConvention::ModifiedFollowing,
                    publication.as_ref()
                ).unwrap();
                let convention = InverseModifiedFollowing::new(maturity, term);
                let start = make_effective(maturity, term, &convention, publication.as_ref()).unwrap();

                assert!(publication.is_business_day(start));
                assert_eq!(
                    make_maturity(start, term, &BusinessDayConvention::ModifiedFollowing, publication.as_ref()).unwrap(),
                    maturity,
                    "{} from {} over {}", start, e, term
                );
            }
            e = e + Days::new(1);
        }
    }
}

#[test]
fn test_one_month_rate_windows() {
    let publication = six();
    for (date, effective, maturity, day_count) in [
        (ymd(2018, 6, 14), ymd(2018, 5, 15), ymd(2018, 6, 15), 31),
        (ymd(2018, 10, 5), ymd(2018, 9, 6), ymd(2018, 10, 8), 32),
        (ymd(2018, 4, 20), ymd(2018, 3, 22), ymd(2018, 4, 23), 32),
        (ymd(2018, 4, 27), ymd(2018, 3, 29), ymd(2018, 4, 30), 32)
    ] {
        let window = make_rate_window(
            date,
            Period::months(1),
            EffectiveDateRule::InverseModifiedFollowing,
            publication.as_ref()
        ).unwrap();
        assert_eq!(window, RateWindow { effective, maturity, day_count });
    }
}

#[test]
fn test_daily_rounded_index_over_easter() {
    let configuration = configuration();
    let saron = configuration.benchmark("SARON").unwrap();
    let resets = saron.resets(vec![
        (ymd(2018, 3, 26), -0.7381),
        (ymd(2018, 3, 27), -0.7352),
        (ymd(2018, 3, 28), -0.7368),
        (ymd(2018, 3, 29), -0.7446),
        (ymd(2018, 4, 3), -0.7394),
        (ymd(2018, 4, 4), -0.7382)
    ]).unwrap();

    let ci = saron.compounded_index(&resets, ymd(2018, 3, 26)).unwrap();
    let direct = make_compounded_index_rounded_daily(
        &resets,
        ymd(2018, 3, 26),
        saron.calendar().as_ref(),
        6,
        10_000.0
    ).unwrap();
    assert_eq!(ci, direct);

    let expected = [
        (ymd(2018, 3, 26), 10_000.0),
        (ymd(2018, 3, 27), 9_999.794972),
        (ymd(2018, 3, 28), 9_999.590754),
        (ymd(2018, 3, 29), 9_999.386096),
        (ymd(2018, 4, 3), 9_998.351993),
        (ymd(2018, 4, 4), 9_998.146638),
        (ymd(2018, 4, 5), 9_997.94162)
    ];
    let published: Vec<_> = ci.observations().map(|(d, v)| (d, *v)).collect();
    assert_eq!(published.len(), expected.len());
    for ((d, v), (e_d, e_v)) in published.into_iter().zip(expected) {
        assert_eq!(d, e_d);
        assert_abs_diff_eq!(v, e_v, epsilon = 1e-9);
    }
}
