use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};
use log::trace;

use crate::types::SolarPosition;

pub const MINUTES_PER_DEGREE: f64 = 4.0;
pub const POSITION_DECIMALS: u32 = 2;

/// Below this, `cos(elevation) * cos(latitude)` is treated as zero and the
/// azimuth is reported as 0°.
pub const AZIMUTH_DENOMINATOR_EPSILON: f64 = 1e-12;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

pub fn normalize_angle(angle: f64) -> f64 {
    angle.rem_euclid(360.0)
}

pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

pub fn leap_year(year: i32) -> bool {
    (year % 400 == 0) || (year % 4 == 0 && year % 100 != 0)
}

pub fn days_in_months(year: i32) -> [u32; 12] {
    [
        31,
        if leap_year(year) { 29 } else { 28 },
        31, 30, 31, 30, 31, 31, 30, 31, 30, 31,
    ]
}

/// `month` must be 1..=12.
pub fn day_of_year(year: i32, month: u32, day: u32) -> u32 {
    let dim = days_in_months(year);
    let sum: u32 = dim[..(month - 1) as usize].iter().sum();
    sum + day
}

pub fn fractional_hour(hour: u32, minute: u32, second: u32) -> f64 {
    hour as f64 + minute as f64 / 60.0 + second as f64 / 3600.0
}

/// Fractional year γ in radians.
pub fn annual_angle(day_of_year: u32, fractional_hour: f64) -> f64 {
    2.0 * std::f64::consts::PI / 365.0
        * (day_of_year as f64 - 1.0 + (fractional_hour - 12.0) / 24.0)
}

/// Minutes.
pub fn equation_of_time(gamma: f64) -> f64 {
    229.18
        * (0.000075
            + 0.001868 * gamma.cos()
            - 0.032077 * gamma.sin()
            - 0.014615 * (2.0 * gamma).cos()
            - 0.040849 * (2.0 * gamma).sin())
}

/// Degrees.
pub fn solar_declination(gamma: f64) -> f64 {
    rad_to_deg(
        0.006918
            - 0.399912 * gamma.cos()
            + 0.070257 * gamma.sin()
            - 0.006758 * (2.0 * gamma).cos()
            + 0.000907 * (2.0 * gamma).sin()
            - 0.002697 * (3.0 * gamma).cos()
            + 0.00148 * (3.0 * gamma).sin(),
    )
}

/// Minutes since true solar midnight, uncorrected for day wrap.
pub fn true_solar_time(fractional_hour: f64, eot: f64, longitude: f64) -> f64 {
    fractional_hour * 60.0 + eot + MINUTES_PER_DEGREE * longitude
}

/// Degrees; negative before solar noon.
pub fn hour_angle(true_solar_time: f64) -> f64 {
    true_solar_time / MINUTES_PER_DEGREE - 180.0
}

pub fn solar_elevation(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    let dec_rad = deg_to_rad(declination);
    let ha_rad = deg_to_rad(hour_angle);
    let sin_elev = lat_rad.sin() * dec_rad.sin() + lat_rad.cos() * dec_rad.cos() * ha_rad.cos();
    rad_to_deg(sin_elev.clamp(-1.0, 1.0).asin())
}

/// Azimuth clockwise from north. Returns 0° when the sun is at the zenith or
/// nadir, or the observer stands on a pole, since the bearing is undefined there.
pub fn solar_azimuth(latitude: f64, declination: f64, hour_angle: f64, elevation: f64) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    let dec_rad = deg_to_rad(declination);
    let elev_rad = deg_to_rad(elevation);

    let denom = elev_rad.cos() * lat_rad.cos();
    if denom.abs() < AZIMUTH_DENOMINATOR_EPSILON {
        trace!(
            "azimuth undefined at latitude {latitude}, elevation {elevation}; reporting 0°"
        );
        return 0.0;
    }

    let cos_az = (dec_rad.sin() - elev_rad.sin() * lat_rad.sin()) / denom;
    let az = rad_to_deg(cos_az.clamp(-1.0, 1.0).acos());
    if hour_angle > 0.0 {
        360.0 - az
    } else {
        az
    }
}

/// Full-precision sun position. The instant is converted to UTC first.
pub fn solar_position_exact<Tz: TimeZone>(
    latitude: f64,
    longitude: f64,
    dt: &DateTime<Tz>,
) -> SolarPosition {
    let utc = dt.with_timezone(&Utc);
    let n = day_of_year(utc.year(), utc.month(), utc.day());
    let h = fractional_hour(utc.hour(), utc.minute(), utc.second());
    let gamma = annual_angle(n, h);
    let eot = equation_of_time(gamma);
    let decl = solar_declination(gamma);
    let tst = true_solar_time(h, eot, longitude);
    let ha = hour_angle(tst);
    let elevation = solar_elevation(latitude, decl, ha);
    let azimuth = solar_azimuth(latitude, decl, ha, elevation);
    SolarPosition {
        day_of_year: n,
        fractional_hour: h,
        annual_angle: gamma,
        equation_of_time: eot,
        declination: decl,
        true_solar_time: tst,
        hour_angle: ha,
        elevation_deg: elevation,
        azimuth_deg: normalize_angle(azimuth),
    }
}

/// Rounds elevation and azimuth to [`POSITION_DECIMALS`]. An azimuth that
/// rounds up to 360° is folded back to 0°.
pub fn round_position(pos: &SolarPosition) -> SolarPosition {
    SolarPosition {
        elevation_deg: round_to(pos.elevation_deg, POSITION_DECIMALS),
        azimuth_deg: normalize_angle(round_to(pos.azimuth_deg, POSITION_DECIMALS)),
        ..*pos
    }
}

/// Sun position with elevation and azimuth rounded to two decimals.
pub fn solar_position<Tz: TimeZone>(
    latitude: f64,
    longitude: f64,
    dt: &DateTime<Tz>,
) -> SolarPosition {
    round_position(&solar_position_exact(latitude, longitude, dt))
}
