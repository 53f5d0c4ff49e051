//! Equirectangular (Plate Carrée) projection on a sphere.
//!
//! forward: x = r·cos(φ_ts)·Δλ, y = r·(φ − φ₀) with Δλ, φ in radians
//! inverse: λw = (−deg(x / (r·cos φ_ts)) − λw₀) mod 360, φ = φ₀ + deg(y / r)
//!
//! The projected plane is periodic: footprints that wrap a pole or cross the
//! antimeridian go through the seam-repair pipeline.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::body::Body;
use crate::error::ProjError;
use crate::great_circle;
use crate::path::{GeoPath, PlanarPath};
use crate::proj::ground::{fmt_num, Ground};
use crate::proj::Projection;
use crate::sphere::wrap_360;

/// Default sphere radius (metres): one planar unit per degree.
pub const DEFAULT_RADIUS: f64 = 180.0 / PI;

/// Default number of great-circle samples per edge for the densified variant.
pub const DEFAULT_NPT_GC: usize = 8;

/// Tolerance for snapping an inverse longitude of 360 back to 0.
const LON_SNAP: f64 = 1e-5;

pub struct Equirectangular {
    ground: Ground,
    lat_ts: f64,
    /// cos(lat_ts)
    rc: f64,
    /// Half-width of the map: π·r·cos(lat_ts)
    xc: f64,
    /// Half-height of the map: π/2·r
    yc: f64,
}

impl Equirectangular {
    pub fn new(lon_w_0: f64, lat_0: f64, lat_ts: f64, radius_m: f64) -> Self {
        Self::with_frame(Ground::new(lon_w_0, lat_0, radius_m), lat_ts)
    }

    /// Global map of a body, centered on the antimeridian.
    pub fn on_body(body: &Body) -> Self {
        Self::with_frame(Ground::on_body(180.0, 0.0, body), 0.0)
    }

    fn with_frame(ground: Ground, lat_ts: f64) -> Self {
        let rc = lat_ts.to_radians().cos();
        let r = ground.r();
        Self {
            ground,
            lat_ts,
            rc,
            xc: PI * r * rc,
            yc: FRAC_PI_2 * r,
        }
    }

    pub fn ground(&self) -> &Ground {
        &self.ground
    }

    /// Standard parallel (degrees).
    pub fn lat_ts(&self) -> f64 {
        self.lat_ts
    }

    /// Half-width of the map (metres).
    pub fn xc(&self) -> f64 {
        self.xc
    }

    /// Half-height of the map (metres).
    pub fn yc(&self) -> f64 {
        self.yc
    }

    pub fn proj4(&self) -> String {
        let scale = format!("+lat_ts={}", fmt_num(self.lat_ts));
        self.ground.proj4("eqc", &scale)
    }

    pub fn wkt(&self) -> String {
        let params = [
            Ground::wkt_param("standard_parallel_1", self.lat_ts),
            Ground::wkt_param("central_meridian", self.ground.lon_0()),
            Ground::wkt_param("latitude_of_origin", self.ground.lat_0()),
        ]
        .concat();
        self.ground.wkt(self.name(), &params)
    }
}

impl Default for Equirectangular {
    /// Unit-degree global map: one planar unit per degree, centered on 180°W.
    fn default() -> Self {
        Self::new(180.0, 0.0, 0.0, DEFAULT_RADIUS)
    }
}

impl Projection for Equirectangular {
    fn name(&self) -> &'static str {
        "Equirectangular"
    }

    fn forward(&self, lon_w: f64, lat: f64) -> Option<(f64, f64)> {
        let r = self.ground.r();
        let x = r * self.rc * self.ground.dlon_w(lon_w).to_radians();
        let y = r * (lat - self.ground.lat_0()).to_radians();
        Some((x, y))
    }

    fn inverse(&self, x: f64, y: f64) -> Option<(f64, f64)> {
        let r = self.ground.r();
        let mut lon_w = wrap_360(-(x / (r * self.rc)).to_degrees() - self.ground.lon_w_0());
        if (lon_w - 360.0).abs() < LON_SNAP {
            lon_w = 0.0;
        }
        let lat = (y / r).to_degrees() + self.ground.lat_0();
        Some((lon_w, lat))
    }

    fn wrap_limits(&self) -> Option<(f64, f64)> {
        Some((self.xc, self.yc))
    }

    fn extent(&self) -> Option<[f64; 4]> {
        Some([-self.xc, self.xc, -self.yc, self.yc])
    }
}

/// Equirectangular projection with great-circle densified footprint edges.
///
/// Each edge of the closed footprint is subdivided along its great circle
/// before the seam-repair pipeline runs, so long edges follow the geodesic
/// rather than a straight planar segment.
pub struct EquirectangularGc {
    proj: Equirectangular,
    npt_gc: usize,
}

impl EquirectangularGc {
    pub fn new(proj: Equirectangular, npt_gc: usize) -> Self {
        Self { proj, npt_gc }
    }

    pub fn npt_gc(&self) -> usize {
        self.npt_gc
    }

    pub fn ground(&self) -> &Ground {
        self.proj.ground()
    }

    /// Closed vertex ring with every edge densified along its great circle.
    fn densify(&self, path: &GeoPath) -> Result<Vec<(f64, f64)>, ProjError> {
        let (ring, _) = path.closed();
        let mut dense = Vec::with_capacity((ring.len() - 1) * (self.npt_gc - 1) + 1);
        for edge in ring.windows(2) {
            let samples = great_circle::arc(edge[0], edge[1], self.npt_gc)?;
            dense.extend_from_slice(&samples[..samples.len() - 1]);
        }
        dense.push(ring[ring.len() - 1]);
        Ok(dense)
    }
}

impl Default for EquirectangularGc {
    fn default() -> Self {
        Self::new(Equirectangular::default(), DEFAULT_NPT_GC)
    }
}

impl Projection for EquirectangularGc {
    fn name(&self) -> &'static str {
        "Equirectangular"
    }

    fn forward(&self, lon_w: f64, lat: f64) -> Option<(f64, f64)> {
        self.proj.forward(lon_w, lat)
    }

    fn inverse(&self, x: f64, y: f64) -> Option<(f64, f64)> {
        self.proj.inverse(x, y)
    }

    fn wrap_limits(&self) -> Option<(f64, f64)> {
        self.proj.wrap_limits()
    }

    fn extent(&self) -> Option<[f64; 4]> {
        self.proj.extent()
    }

    fn forward_path(&self, path: &GeoPath) -> Result<PlanarPath, ProjError> {
        if path.len() < 3 {
            return Err(ProjError::DegenerateInput(format!(
                "closed footprint needs at least 3 vertices, got {}",
                path.len()
            )));
        }
        let dense = GeoPath::new(self.densify(path)?);
        let (xc, yc) = (self.proj.xc, self.proj.yc);
        super::project_closed(self, &dense, xc, yc)
    }
}
