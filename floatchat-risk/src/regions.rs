//! The fixed catalog of tsunami-relevant coastal regions.

use floatchat_argo::RegionBox;

/// A catalog region: a bounding box plus a static prior risk (0–100)
/// reflecting historical seismicity of the coast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskRegion {
    pub bbox: RegionBox,
    pub base_risk: f64,
}

const fn region(
    name: &'static str,
    lat_range: (f64, f64),
    lon_range: (f64, f64),
    base_risk: f64,
) -> RiskRegion {
    RiskRegion {
        bbox: RegionBox::new(name, lat_range, lon_range),
        base_risk,
    }
}

/// The ten scored regions. Catalog order is significant: ranking ties
/// preserve it.
pub static TSUNAMI_REGIONS: &[RiskRegion] = &[
    region("Alaska Coast", (51.0, 71.0), (-180.0, -130.0), 25.0),
    region("Pacific Northwest (Canada/USA)", (42.0, 60.0), (-135.0, -122.0), 20.0),
    region("Japan Coast", (30.0, 46.0), (129.0, 146.0), 30.0),
    region("Indonesia Region", (-11.0, 6.0), (95.0, 141.0), 35.0),
    region("Chile Coast", (-56.0, -17.0), (-76.0, -66.0), 28.0),
    region("New Zealand", (-47.0, -34.0), (166.0, 179.0), 22.0),
    region("Philippines", (5.0, 21.0), (117.0, 127.0), 30.0),
    region("Peru Coast", (-18.0, -1.0), (-82.0, -70.0), 25.0),
    region("Aleutian Islands", (51.0, 55.0), (-180.0, -160.0), 27.0),
    region("Caribbean", (10.0, 27.0), (-85.0, -60.0), 18.0),
];
