use chrono::TimeZone;
use chrono_tz::Asia::Kolkata;

use solar_shade::angles::{solar_position, solar_position_exact};
use solar_shade::shade::{classify, default_zones, matching_zone};

fn main() {
    let latitude = 29.37;
    let longitude = 79.53;

    let dt = Kolkata.with_ymd_and_hms(2025, 6, 21, 10, 30, 0).unwrap();

    let exact = solar_position_exact(latitude, longitude, &dt);
    let pos = solar_position(latitude, longitude, &dt);
    let zones = default_zones();

    println!("=== Solar Position Calculation Example ===");
    println!(
        "Location: Bhimtal, Uttarakhand ({:.2}°N, {:.2}°E)",
        latitude, longitude
    );
    println!("Date/Time: {}", dt);
    println!();
    println!("--- Solar Position ---");
    println!("Day of year: {}", pos.day_of_year);
    println!("Fractional hour (UTC): {:.4}", pos.fractional_hour);
    println!("Annual angle: {:.4} rad", pos.annual_angle);
    println!("Declination: {:.2}°", pos.declination);
    println!("Equation of Time: {:.2} minutes", pos.equation_of_time);
    println!("True Solar Time: {:.2} minutes", pos.true_solar_time);
    println!("Hour Angle: {:.2}°", pos.hour_angle);
    println!(
        "Elevation: {:.2}° (exact {:.6}°)",
        pos.elevation_deg, exact.elevation_deg
    );
    println!(
        "Azimuth: {:.2}° (exact {:.6}°, 0°=N, 90°=E, 180°=S)",
        pos.azimuth_deg, exact.azimuth_deg
    );
    println!();
    println!("--- Shading ---");
    for zone in &zones {
        println!("Zone: {:.0}° to {:.0}°", zone.start_az, zone.end_az);
    }
    let illumination = classify(&pos, &zones);
    println!(
        "Illumination: {:?} (shade factor {:.1})",
        illumination,
        illumination.factor()
    );
    if let Some(zone) = matching_zone(&pos, &zones) {
        println!("Blocked by zone {:.0}°..{:.0}°", zone.start_az, zone.end_az);
    }
}
