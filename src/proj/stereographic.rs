//! Stereographic projection, centered anywhere on the body.
//!
//! forward: ρ = 2r / (1 + sin φ₀·sin φ + cos φ₀·cos φ·cos Δλ)
//!          x = ρ·cos φ·sin Δλ, y = ρ·(cos φ₀·sin φ − sin φ₀·cos φ·cos Δλ)
//! inverse: c = 2·atan(ρ/2r), then the spherical triangle about the center
//!
//! Conformal and unbounded: the whole sphere except the antipode of the
//! center maps to the plane, so footprint paths never need seam repair.

use crate::body::Body;
use crate::path::{GeoPath, PlanarPath};
use crate::proj::ground::Ground;
use crate::proj::Projection;
use crate::sphere::{cs, wrap_360};

/// Antipode threshold on `1 + cos c`.
const EPSILON: f64 = 1e-10;

pub struct Stereographic {
    ground: Ground,
}

impl Stereographic {
    pub fn new(lon_w_0: f64, lat_0: f64, radius_m: f64) -> Self {
        Self {
            ground: Ground::new(lon_w_0, lat_0, radius_m),
        }
    }

    pub fn on_body(lon_w_0: f64, lat_0: f64, body: &Body) -> Self {
        Self {
            ground: Ground::on_body(lon_w_0, lat_0, body),
        }
    }

    pub fn ground(&self) -> &Ground {
        &self.ground
    }

    pub fn proj4(&self) -> String {
        self.ground.proj4("stere", "+k=1")
    }

    pub fn wkt(&self) -> String {
        let params = [
            Ground::wkt_param("scale_factor", 1.0),
            Ground::wkt_param("central_meridian", self.ground.lon_0()),
            Ground::wkt_param("latitude_of_origin", self.ground.lat_0()),
        ]
        .concat();
        self.ground.wkt(self.name(), &params)
    }
}

impl Default for Stereographic {
    /// North-polar view of the unit sphere.
    fn default() -> Self {
        Self::new(0.0, 90.0, 1.0)
    }
}

impl Projection for Stereographic {
    fn name(&self) -> &'static str {
        "Stereographic"
    }

    fn forward(&self, lon_w: f64, lat: f64) -> Option<(f64, f64)> {
        let r = self.ground.r();
        let (clat0, slat0) = self.ground.cs0();
        let (clat, slat) = cs(lat);
        let (cdlon, sdlon) = cs(self.ground.lon_w_0() - lon_w);
        let denom = 1.0 + slat0 * slat + clat0 * clat * cdlon;
        if denom <= EPSILON {
            return None;
        }
        let rho = 2.0 * r / denom;
        Some((
            rho * clat * sdlon,
            rho * (clat0 * slat - slat0 * clat * cdlon),
        ))
    }

    fn inverse(&self, x: f64, y: f64) -> Option<(f64, f64)> {
        let r = self.ground.r();
        let rh = x.hypot(y);
        if rh <= EPSILON {
            return Some((wrap_360(self.ground.lon_w_0()), self.ground.lat_0()));
        }
        let (clat0, slat0) = self.ground.cs0();
        let c = 2.0 * (rh / (2.0 * r)).atan();
        let (cc, sc) = (c.cos(), c.sin());
        let lat = (cc * slat0 + y / rh * sc * clat0).asin().to_degrees();
        // Polar frames degenerate to atan2(x, ∓y): the clat0 term vanishes
        let lon = (x * sc).atan2(rh * clat0 * cc - y * slat0 * sc);
        let lon_w = wrap_360(self.ground.lon_w_0() - lon.to_degrees());
        Some((lon_w, lat))
    }

    /// Open, vertex-wise path transform. The plane is unbounded, so a closed
    /// footprint never straddles a seam; only the antipode of the center
    /// projects to NaN.
    fn forward_path(&self, path: &GeoPath) -> Result<PlanarPath, crate::error::ProjError> {
        Ok(super::project_open(self, path))
    }
}
