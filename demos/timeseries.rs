use solar_shade::time_series::{summarize, TimeSeriesGenerator};
use solar_shade::types::{GeneratorConfig, GeoLocation, TimeSeriesRow};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let location = GeoLocation::new(29.37, 79.53)?;
    let (year, month, day) = (2025, 6, 21);
    let generator =
        TimeSeriesGenerator::new(location, year, month, day, 0, 23, GeneratorConfig::default())?;

    let records = generator.generate();
    println!(
        "Solar dataset with shade for {},{} on {}-{:02}-{:02}: {} rows",
        location.latitude,
        location.longitude,
        year,
        month,
        day,
        records.len()
    );
    println!(
        "{:<26} {:>4} {:>3} {:>4} {:>9} {:>9} {:>5}  {}",
        "datetime_utc", "hour", "min", "doy", "elev", "azimuth", "shade", "datetime_ist"
    );
    for row in records.iter().take(20).map(TimeSeriesRow::from) {
        println!(
            "{:<26} {:>4} {:>3} {:>4} {:>9.2} {:>9.2} {:>5.1}  {}",
            row.datetime_utc,
            row.hour_utc,
            row.minute,
            row.day_of_year,
            row.solar_elevation_deg,
            row.solar_azimuth_deg,
            row.shade_factor,
            row.datetime_ist
        );
    }

    let summary = summarize(&records);
    println!();
    println!("Full sun:         {} min", summary.full_sun);
    println!("Partially shaded: {} min", summary.partially_shaded);
    println!("Dark:             {} min", summary.dark);
    if let Some(peak) = summary.peak {
        println!(
            "Peak elevation {:.2}° at {} (azimuth {:.2}°)",
            peak.solar_elevation_deg(),
            peak.instant_local,
            peak.solar_azimuth_deg()
        );
    }
    Ok(())
}
