use crate::types::{Illumination, ShadeZone, SolarPosition};

impl ShadeZone {
    pub fn is_wrapping(&self) -> bool {
        self.start_az > self.end_az
    }

    /// Both bounds are inclusive.
    pub fn contains(&self, azimuth: f64) -> bool {
        if self.is_wrapping() {
            azimuth >= self.start_az || azimuth <= self.end_az
        } else {
            self.start_az <= azimuth && azimuth <= self.end_az
        }
    }
}

pub fn default_zones() -> Vec<ShadeZone> {
    vec![
        ShadeZone {
            start_az: 100.0,
            end_az: 150.0,
        },
        ShadeZone {
            start_az: 200.0,
            end_az: 220.0,
        },
    ]
}

/// First zone, in configuration order, that blocks a sun above the horizon.
pub fn matching_zone<'a>(pos: &SolarPosition, zones: &'a [ShadeZone]) -> Option<&'a ShadeZone> {
    if pos.elevation_deg <= 0.0 {
        return None;
    }
    zones.iter().find(|zone| zone.contains(pos.azimuth_deg))
}

pub fn classify(pos: &SolarPosition, zones: &[ShadeZone]) -> Illumination {
    if pos.elevation_deg <= 0.0 {
        Illumination::Dark
    } else if matching_zone(pos, zones).is_some() {
        Illumination::PartiallyShaded
    } else {
        Illumination::FullSun
    }
}

pub fn shade_factor(pos: &SolarPosition, zones: &[ShadeZone]) -> f64 {
    classify(pos, zones).factor()
}
