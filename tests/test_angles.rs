use chrono::{TimeZone, Utc};
use chrono_tz::Asia::Kolkata;

use solar_shade::angles::*;
use solar_shade::types::SolarPosition;

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

const BHIMTAL: (f64, f64) = (29.37, 79.53);

fn bhimtal_solstice(hour: u32, minute: u32) -> SolarPosition {
    let dt = Utc.with_ymd_and_hms(2025, 6, 21, hour, minute, 0).unwrap();
    solar_position(BHIMTAL.0, BHIMTAL.1, &dt)
}

// ── DayOfYear ──

#[test]
fn test_day_of_year_known_dates() {
    assert_eq!(day_of_year(2026, 1, 1), 1);
    assert_eq!(day_of_year(2026, 3, 21), 80);
    assert_eq!(day_of_year(2025, 6, 21), 172);
    assert_eq!(day_of_year(2026, 12, 31), 365);
}

#[test]
fn test_day_of_year_leap_year() {
    assert_eq!(day_of_year(2024, 2, 29), 60);
    assert_eq!(day_of_year(2024, 3, 1), 61);
    assert_eq!(day_of_year(2024, 12, 31), 366);
}

#[test]
fn test_day_of_year_century_leap_rules() {
    assert_eq!(day_of_year(2000, 2, 29), 60);
    assert_eq!(day_of_year(1900, 2, 28), 59);
    assert_eq!(day_of_year(1900, 3, 1), 60);
}

#[test]
fn test_first_day_of_each_month_non_leap() {
    let expected = [1, 32, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335];
    for (i, &exp) in expected.iter().enumerate() {
        let month = i as u32 + 1;
        assert_eq!(day_of_year(2026, month, 1), exp, "Month {}", month);
    }
}

// ── NormalizeAngle / rounding ──

#[test]
fn test_normalize_angle_basic() {
    let cases: &[(f64, f64)] = &[
        (0.0, 0.0),
        (45.0, 45.0),
        (360.0, 0.0),
        (361.0, 1.0),
        (-1.0, 359.0),
        (-90.0, 270.0),
        (720.0, 0.0),
    ];
    for &(input, expected) in cases {
        assert_approx!(normalize_angle(input), expected, 1e-9);
    }
}

#[test]
fn test_round_to_two_decimals() {
    assert_eq!(round_to(12.3456, 2), 12.35);
    assert_eq!(round_to(-36.164, 2), -36.16);
    assert_eq!(round_to(359.996, 2), 360.0);
    assert_eq!(round_to(7.0, 2), 7.0);
}

#[test]
fn test_round_position_folds_360_to_zero() {
    let pos = SolarPosition {
        day_of_year: 1,
        fractional_hour: 0.0,
        annual_angle: 0.0,
        equation_of_time: 0.0,
        declination: 0.0,
        true_solar_time: 0.0,
        hour_angle: 10.0,
        elevation_deg: 12.3449,
        azimuth_deg: 359.997,
    };
    let rounded = round_position(&pos);
    assert_eq!(rounded.azimuth_deg, 0.0);
    assert_eq!(rounded.elevation_deg, 12.34);
    assert_eq!(rounded.hour_angle, pos.hour_angle);
}

// ── Building blocks ──

#[test]
fn test_fractional_hour() {
    assert_approx!(fractional_hour(0, 0, 0), 0.0, 1e-12);
    assert_approx!(fractional_hour(6, 30, 0), 6.5, 1e-12);
    assert_approx!(fractional_hour(23, 59, 24), 23.99, 1e-12);
}

#[test]
fn test_annual_angle() {
    assert_approx!(annual_angle(1, 12.0), 0.0, 1e-12);
    assert_approx!(annual_angle(172, 6.0), 2.939325729317573, 1e-12);
}

#[test]
fn test_equation_of_time_reference_values() {
    assert_approx!(equation_of_time(annual_angle(172, 6.0)), -1.2734, 1e-3);
    assert_approx!(equation_of_time(annual_angle(45, 12.0)), -14.2570, 1e-3);
    assert_approx!(equation_of_time(annual_angle(309, 12.0)), 16.2970, 1e-3);
}

#[test]
fn test_solar_declination_reference_values() {
    assert_approx!(solar_declination(annual_angle(172, 6.0)), 23.4501, 1e-3);
    assert_approx!(solar_declination(annual_angle(80, 12.0)), -0.0659, 1e-3);
    assert_approx!(solar_declination(annual_angle(309, 12.0)), -15.4550, 1e-3);
}

#[test]
fn test_solar_declination_bounded_all_days() {
    for n in 1..=366 {
        let decl = solar_declination(annual_angle(n, 12.0));
        assert!(decl.abs() < 23.6, "Day {}: {}", n, decl);
    }
}

#[test]
fn test_hour_angle_zero_at_solar_noon() {
    assert_approx!(hour_angle(720.0), 0.0, 1e-12);
    assert_approx!(hour_angle(true_solar_time(12.0, 0.0, 0.0)), 0.0, 1e-12);
    assert_approx!(hour_angle(true_solar_time(6.0, 0.0, 0.0)), -90.0, 1e-12);
    assert_approx!(hour_angle(true_solar_time(6.0, 0.0, 90.0)), 0.0, 1e-12);
}

// ── Azimuth guard ──

#[test]
fn test_azimuth_zero_at_pole() {
    assert_eq!(solar_azimuth(90.0, 10.0, 30.0, 20.0), 0.0);
    assert_eq!(solar_azimuth(-90.0, -10.0, -30.0, 20.0), 0.0);
}

#[test]
fn test_azimuth_zero_at_zenith() {
    assert_eq!(solar_azimuth(23.0, 23.0, 0.0, 90.0), 0.0);
    assert_eq!(solar_azimuth(10.0, 5.0, 45.0, -90.0), 0.0);
}

#[test]
fn test_position_at_pole_is_finite() {
    let dt = Utc.with_ymd_and_hms(2025, 6, 21, 12, 0, 0).unwrap();
    let pos = solar_position(90.0, 0.0, &dt);
    assert_eq!(pos.azimuth_deg, 0.0);
    assert!(pos.elevation_deg.is_finite());
    assert_approx!(pos.elevation_deg, 23.44, 0.05);
}

#[test]
fn test_azimuth_afternoon_mirrors_morning() {
    let morning = solar_azimuth(30.0, 10.0, -45.0, solar_elevation(30.0, 10.0, -45.0));
    let afternoon = solar_azimuth(30.0, 10.0, 45.0, solar_elevation(30.0, 10.0, 45.0));
    assert_approx!(morning + afternoon, 360.0, 1e-9);
    assert!(morning < 180.0);
}

// ── SolarPosition — Bhimtal summer solstice ──

#[test]
fn test_bhimtal_day_of_year() {
    assert_eq!(bhimtal_solstice(6, 44).day_of_year, 172);
}

#[test]
fn test_bhimtal_just_after_sunrise() {
    let pos = bhimtal_solstice(0, 0);
    assert_approx!(pos.elevation_deg, 2.62, 0.011);
    assert_approx!(pos.azimuth_deg, 64.45, 0.011);
}

#[test]
fn test_bhimtal_mid_morning() {
    let pos = bhimtal_solstice(3, 0);
    assert_approx!(pos.elevation_deg, 40.15, 0.011);
    assert_approx!(pos.azimuth_deg, 82.95, 0.011);
}

#[test]
fn test_bhimtal_near_solar_noon() {
    let pos = bhimtal_solstice(6, 44);
    assert_approx!(pos.elevation_deg, 84.08, 0.011);
    assert_approx!(pos.azimuth_deg, 181.87, 0.011);
    assert!(pos.hour_angle > 0.0);
}

#[test]
fn test_bhimtal_afternoon() {
    let pos = bhimtal_solstice(9, 0);
    assert_approx!(pos.elevation_deg, 58.91, 0.011);
    assert_approx!(pos.azimuth_deg, 267.19, 0.011);
}

#[test]
fn test_bhimtal_night() {
    let pos = bhimtal_solstice(18, 0);
    assert_approx!(pos.elevation_deg, -36.16, 0.011);
    assert_approx!(pos.azimuth_deg, 347.69, 0.011);
}

#[test]
fn test_equator_equinox_noon() {
    let dt = Utc.with_ymd_and_hms(2025, 3, 20, 12, 0, 0).unwrap();
    let pos = solar_position(0.0, 0.0, &dt);
    assert_approx!(pos.elevation_deg, 87.91, 0.011);
    assert_approx!(pos.azimuth_deg, 102.73, 0.011);
}

#[test]
fn test_southern_hemisphere_sun_to_the_north() {
    let dt = Utc.with_ymd_and_hms(2025, 12, 21, 2, 0, 0).unwrap();
    let pos = solar_position(-33.87, 151.21, &dt);
    assert_approx!(pos.elevation_deg, 79.43, 0.011);
    assert_approx!(pos.azimuth_deg, 350.96, 0.011);
}

#[test]
fn test_rounded_to_two_decimals() {
    let pos = bhimtal_solstice(4, 17);
    assert_approx!(pos.elevation_deg * 100.0, (pos.elevation_deg * 100.0).round(), 1e-6);
    assert_approx!(pos.azimuth_deg * 100.0, (pos.azimuth_deg * 100.0).round(), 1e-6);
}

#[test]
fn test_exact_differs_from_rounded_by_at_most_half_a_hundredth() {
    let dt = Utc.with_ymd_and_hms(2025, 6, 21, 4, 17, 0).unwrap();
    let exact = solar_position_exact(BHIMTAL.0, BHIMTAL.1, &dt);
    let rounded = solar_position(BHIMTAL.0, BHIMTAL.1, &dt);
    assert_approx!(exact.elevation_deg, rounded.elevation_deg, 0.005 + 1e-9);
    assert_approx!(exact.azimuth_deg, rounded.azimuth_deg, 0.005 + 1e-9);
    assert_eq!(exact.declination, rounded.declination);
}

#[test]
fn test_local_time_zone_converted_to_utc() {
    let local = Kolkata.with_ymd_and_hms(2025, 6, 21, 12, 14, 0).unwrap();
    let utc = Utc.with_ymd_and_hms(2025, 6, 21, 6, 44, 0).unwrap();
    assert_eq!(
        solar_position(BHIMTAL.0, BHIMTAL.1, &local),
        solar_position(BHIMTAL.0, BHIMTAL.1, &utc)
    );
}

#[test]
fn test_ranges_over_a_year_of_hours() {
    for &(lat, lon) in &[(29.37, 79.53), (-33.87, 151.21), (64.8, -147.7), (0.0, 0.0)] {
        for month in 1..=12 {
            for hour in 0..24 {
                let dt = Utc.with_ymd_and_hms(2025, month, 15, hour, 0, 0).unwrap();
                let pos = solar_position(lat, lon, &dt);
                assert!(
                    (0.0..360.0).contains(&pos.azimuth_deg),
                    "azimuth {} at ({}, {}) {}",
                    pos.azimuth_deg, lat, lon, dt
                );
                assert!(
                    (-90.0..=90.0).contains(&pos.elevation_deg),
                    "elevation {} at ({}, {}) {}",
                    pos.elevation_deg, lat, lon, dt
                );
            }
        }
    }
}
