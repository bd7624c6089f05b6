pub mod angles;
pub mod error;
pub mod shade;
pub mod time_series;
pub mod types;

pub use angles::{
    annual_angle, day_of_year, deg_to_rad, equation_of_time, fractional_hour, hour_angle,
    normalize_angle, rad_to_deg, round_position, round_to, solar_azimuth, solar_declination,
    solar_elevation, solar_position, solar_position_exact, true_solar_time,
    AZIMUTH_DENOMINATOR_EPSILON, MINUTES_PER_DEGREE, POSITION_DECIMALS,
};

pub use error::{Error, Result};

pub use shade::{classify, default_zones, matching_zone, shade_factor};

pub use time_series::{generate, summarize, Records, TimeSeriesGenerator, TERMINAL_MINUTE};

pub use types::{
    GeneratorConfig, GeoLocation, Illumination, IlluminationSummary, PositionPrecision,
    ShadeZone, SolarPosition, TimeSeriesRecord, TimeSeriesRow,
};
