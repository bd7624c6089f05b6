use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, TimeZone, Timelike, Utc};
use log::{debug, trace};

use crate::angles;
use crate::error::{Error, Result};
use crate::shade;
use crate::types::{
    GeneratorConfig, GeoLocation, Illumination, IlluminationSummary, PositionPrecision,
    TimeSeriesRecord, TimeSeriesRow,
};

/// Minute of `end_hour` used as the inclusive upper bound of a run.
pub const TERMINAL_MINUTE: u32 = 59;

impl TimeSeriesRecord {
    pub fn hour_utc(&self) -> u32 {
        self.instant_utc.hour()
    }

    pub fn minute(&self) -> u32 {
        self.instant_utc.minute()
    }

    pub fn latitude(&self) -> f64 {
        self.location.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.location.longitude
    }

    pub fn solar_elevation_deg(&self) -> f64 {
        self.solar_position.elevation_deg
    }

    pub fn solar_azimuth_deg(&self) -> f64 {
        self.solar_position.azimuth_deg
    }

    pub fn shade_factor(&self) -> f64 {
        self.illumination.factor()
    }
}

impl From<&TimeSeriesRecord> for TimeSeriesRow {
    fn from(record: &TimeSeriesRecord) -> Self {
        TimeSeriesRow {
            datetime_utc: record.instant_utc.to_rfc3339(),
            hour_utc: record.hour_utc(),
            minute: record.minute(),
            lat: record.latitude(),
            lon: record.longitude(),
            day_of_year: record.day_of_year,
            solar_elevation_deg: record.solar_elevation_deg(),
            solar_azimuth_deg: record.solar_azimuth_deg(),
            shade_factor: record.shade_factor(),
            datetime_ist: record.instant_local.to_rfc3339(),
        }
    }
}

/// Steps through one UTC day from `start_hour:00` to `end_hour:59` inclusive.
///
/// The upper bound is always minute 59, so with a step that does not divide
/// 60 the final step falls short of it (a 7-minute step ends at :56).
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeriesGenerator {
    location: GeoLocation,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    step: Duration,
    local_offset: FixedOffset,
    config: GeneratorConfig,
}

impl TimeSeriesGenerator {
    pub fn new(
        location: GeoLocation,
        year: i32,
        month: u32,
        day: u32,
        start_hour: u32,
        end_hour: u32,
        config: GeneratorConfig,
    ) -> Result<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(Error::InvalidDate { year, month, day })?;
        let start = utc_instant(date, start_hour, 0)?;
        let end = utc_instant(date, end_hour, TERMINAL_MINUTE)?;

        let step = Some(config.step_minutes)
            .filter(|&minutes| minutes > 0)
            .and_then(Duration::try_minutes)
            .ok_or(Error::InvalidStep {
                value: config.step_minutes,
            })?;

        let local_offset = config
            .local_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or(Error::InvalidOffset {
                minutes: config.local_offset_minutes,
            })?;

        debug!(
            "time series for ({}, {}) from {} to {} every {} min, {} shade zones",
            location.latitude,
            location.longitude,
            start,
            end,
            config.step_minutes,
            config.shade_zones.len()
        );

        Ok(Self {
            location,
            start,
            end,
            step,
            local_offset,
            config,
        })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Number of records the run yields, without computing any of them.
    pub fn len(&self) -> usize {
        remaining(self.start, self.end, self.config.step_minutes)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> Records<'_> {
        Records {
            generator: self,
            cursor: Some(self.start),
        }
    }

    pub fn generate(&self) -> Vec<TimeSeriesRecord> {
        let records: Vec<TimeSeriesRecord> = self.iter().collect();
        debug!("generated {} records", records.len());
        records
    }

    pub fn rows(&self) -> Vec<TimeSeriesRow> {
        self.iter().map(|record| TimeSeriesRow::from(&record)).collect()
    }

    pub fn record_at(&self, instant: DateTime<Utc>) -> TimeSeriesRecord {
        let GeoLocation {
            latitude,
            longitude,
        } = self.location;
        let exact = angles::solar_position_exact(latitude, longitude, &instant);
        let solar_position = match self.config.precision {
            PositionPrecision::TwoDecimals => angles::round_position(&exact),
            PositionPrecision::Full => exact,
        };
        let illumination = shade::classify(&solar_position, &self.config.shade_zones);
        trace!(
            "{} elev={} az={} {:?}",
            instant,
            solar_position.elevation_deg,
            solar_position.azimuth_deg,
            illumination
        );

        TimeSeriesRecord {
            instant_utc: instant,
            instant_local: instant.with_timezone(&self.local_offset),
            day_of_year: angles::day_of_year(instant.year(), instant.month(), instant.day()),
            location: self.location,
            solar_position,
            illumination,
        }
    }
}

impl<'a> IntoIterator for &'a TimeSeriesGenerator {
    type Item = TimeSeriesRecord;
    type IntoIter = Records<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy cursor over a generator's instants, in ascending order.
#[derive(Debug, Clone)]
pub struct Records<'a> {
    generator: &'a TimeSeriesGenerator,
    cursor: Option<DateTime<Utc>>,
}

impl Iterator for Records<'_> {
    type Item = TimeSeriesRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let instant = self.cursor.filter(|t| *t <= self.generator.end)?;
        self.cursor = instant.checked_add_signed(self.generator.step);
        Some(self.generator.record_at(instant))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.cursor.map_or(0, |cursor| {
            remaining(cursor, self.generator.end, self.generator.config.step_minutes)
        });
        (n, Some(n))
    }
}

impl ExactSizeIterator for Records<'_> {}

fn utc_instant(date: NaiveDate, hour: u32, minute: u32) -> Result<DateTime<Utc>> {
    let naive = date
        .and_hms_opt(hour, minute, 0)
        .ok_or(Error::InvalidHour { value: hour })?;
    Ok(Utc.from_utc_datetime(&naive))
}

fn remaining(from: DateTime<Utc>, to: DateTime<Utc>, step_minutes: i64) -> usize {
    if from > to {
        return 0;
    }
    ((to - from).num_minutes() / step_minutes) as usize + 1
}

pub fn generate(
    location: GeoLocation,
    year: i32,
    month: u32,
    day: u32,
    start_hour: u32,
    end_hour: u32,
    config: &GeneratorConfig,
) -> Result<Vec<TimeSeriesRecord>> {
    let generator =
        TimeSeriesGenerator::new(location, year, month, day, start_hour, end_hour, config.clone())?;
    Ok(generator.generate())
}

pub fn summarize(records: &[TimeSeriesRecord]) -> IlluminationSummary {
    let mut summary = IlluminationSummary {
        full_sun: 0,
        partially_shaded: 0,
        dark: 0,
        peak: None,
    };
    for record in records {
        match record.illumination {
            Illumination::FullSun => summary.full_sun += 1,
            Illumination::PartiallyShaded => summary.partially_shaded += 1,
            Illumination::Dark => summary.dark += 1,
        }
        let higher = summary
            .peak
            .as_ref()
            .map_or(true, |peak| record.solar_elevation_deg() > peak.solar_elevation_deg());
        if higher {
            summary.peak = Some(record.clone());
        }
    }
    summary
}
