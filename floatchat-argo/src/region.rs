//! Named geographic bounding boxes for spatial filtering.

use serde::Serialize;

/// A named latitude/longitude rectangle.
///
/// Bounds are inclusive on all four edges. Containment is a plain
/// conjunction of the four comparisons; boxes are not dateline-aware.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RegionBox {
    pub name: &'static str,
    /// (south, north) bounds in degrees.
    pub lat_range: (f64, f64),
    /// (west, east) bounds in degrees.
    pub lon_range: (f64, f64),
}

impl RegionBox {
    pub const fn new(name: &'static str, lat_range: (f64, f64), lon_range: (f64, f64)) -> Self {
        RegionBox {
            name,
            lat_range,
            lon_range,
        }
    }

    /// Inclusive containment check on both coordinates.
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        latitude >= self.lat_range.0
            && latitude <= self.lat_range.1
            && longitude >= self.lon_range.0
            && longitude <= self.lon_range.1
    }
}

/// The ocean regions recognizable in prompt text, in match precedence
/// order. The Antarctic box spans the full longitude range to cover the
/// pole.
pub static OCEAN_REGIONS: &[RegionBox] = &[
    RegionBox::new("Indian Ocean", (-40.0, 30.0), (40.0, 120.0)),
    RegionBox::new("Pacific Ocean", (-60.0, 60.0), (120.0, -70.0)),
    RegionBox::new("Atlantic Ocean", (-60.0, 60.0), (-70.0, 20.0)),
    RegionBox::new("Southern Ocean/Antarctica", (-90.0, -40.0), (-180.0, 180.0)),
    RegionBox::new("Arctic Ocean", (60.0, 90.0), (-180.0, 180.0)),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_inclusive_on_all_bounds() {
        let indian = &OCEAN_REGIONS[0];
        assert!(indian.contains(-40.0, 40.0));
        assert!(indian.contains(30.0, 120.0));
        assert!(!indian.contains(30.1, 100.0));
        assert!(!indian.contains(0.0, 130.0));
    }

    #[test]
    fn antarctic_box_spans_all_longitudes() {
        let southern = &OCEAN_REGIONS[3];
        assert!(southern.contains(-75.0, -180.0));
        assert!(southern.contains(-75.0, 180.0));
        assert!(!southern.contains(-39.9, 0.0));
    }
}
