use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoLocation {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(Error::InvalidLatitude { value: latitude });
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(Error::InvalidLongitude { value: longitude });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

/// Sun position for one instant.
///
/// `elevation_deg` and `azimuth_deg` are the outputs; the remaining fields are
/// the intermediate terms they were derived from and are never rounded.
/// Azimuth is measured clockwise from north (0°=N, 90°=E, 180°=S).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolarPosition {
    pub day_of_year: u32,
    pub fractional_hour: f64,
    pub annual_angle: f64,
    pub equation_of_time: f64,
    pub declination: f64,
    pub true_solar_time: f64,
    pub hour_angle: f64,
    pub elevation_deg: f64,
    pub azimuth_deg: f64,
}

/// Azimuth arc blocked by an obstruction. When `start_az > end_az` the arc
/// wraps through north, e.g. 350°..10°.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShadeZone {
    pub start_az: f64,
    pub end_az: f64,
}

impl ShadeZone {
    pub fn new(start_az: f64, end_az: f64) -> Result<Self> {
        let in_range = |az: f64| az.is_finite() && (0.0..360.0).contains(&az);
        if !in_range(start_az) || !in_range(end_az) {
            return Err(Error::InvalidShadeZone {
                start: start_az,
                end: end_az,
            });
        }
        Ok(Self { start_az, end_az })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Illumination {
    Dark,
    PartiallyShaded,
    FullSun,
}

impl Illumination {
    pub fn factor(self) -> f64 {
        match self {
            Illumination::Dark => 0.0,
            Illumination::PartiallyShaded => 0.2,
            Illumination::FullSun => 1.0,
        }
    }
}

/// Whether elevation and azimuth are rounded before shade classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PositionPrecision {
    #[default]
    TwoDecimals,
    Full,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub step_minutes: i64,
    pub shade_zones: Vec<ShadeZone>,
    pub local_offset_minutes: i32,
    pub precision: PositionPrecision,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            step_minutes: 1,
            shade_zones: crate::shade::default_zones(),
            local_offset_minutes: 5 * 60 + 30,
            precision: PositionPrecision::TwoDecimals,
        }
    }
}

impl GeneratorConfig {
    pub fn with_step_minutes(mut self, step_minutes: i64) -> Self {
        self.step_minutes = step_minutes;
        self
    }

    pub fn with_shade_zones(mut self, shade_zones: Vec<ShadeZone>) -> Self {
        self.shade_zones = shade_zones;
        self
    }

    pub fn with_local_offset_minutes(mut self, local_offset_minutes: i32) -> Self {
        self.local_offset_minutes = local_offset_minutes;
        self
    }

    pub fn with_precision(mut self, precision: PositionPrecision) -> Self {
        self.precision = precision;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesRecord {
    pub instant_utc: DateTime<Utc>,
    pub instant_local: DateTime<FixedOffset>,
    /// Ordinal day of `instant_utc`. Not adjusted when a run crosses into a new year.
    pub day_of_year: u32,
    pub location: GeoLocation,
    pub solar_position: SolarPosition,
    pub illumination: Illumination,
}

/// Flat view of a [`TimeSeriesRecord`] using the exported column names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesRow {
    pub datetime_utc: String,
    pub hour_utc: u32,
    pub minute: u32,
    pub lat: f64,
    pub lon: f64,
    pub day_of_year: u32,
    pub solar_elevation_deg: f64,
    pub solar_azimuth_deg: f64,
    pub shade_factor: f64,
    pub datetime_ist: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IlluminationSummary {
    pub full_sun: usize,
    pub partially_shaded: usize,
    pub dark: usize,
    pub peak: Option<TimeSeriesRecord>,
}
