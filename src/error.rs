use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("invalid latitude {value}° (must be between -90° and +90°)")]
    InvalidLatitude { value: f64 },

    #[error("invalid longitude {value}° (must be between -180° and +180°)")]
    InvalidLongitude { value: f64 },

    #[error("invalid date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("invalid hour {value} (must be between 0 and 23)")]
    InvalidHour { value: u32 },

    #[error("invalid step of {value} minutes (must be positive)")]
    InvalidStep { value: i64 },

    #[error("invalid shade zone {start}°..{end}° (bounds must lie in [0°, 360°))")]
    InvalidShadeZone { start: f64, end: f64 },

    #[error("invalid local offset of {minutes} minutes")]
    InvalidOffset { minutes: i32 },
}
