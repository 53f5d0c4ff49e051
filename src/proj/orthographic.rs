//! Orthographic projection — the body as seen from infinity.
//!
//! forward: x = r·cos φ·sin Δλ, y = r·(cos φ₀·sin φ − sin φ₀·cos φ·cos Δλ)
//! inverse: c = asin(ρ/r), then the spherical triangle about the view center
//!
//! Only the near hemisphere projects: a ground point is visible when
//! `cos c = sin φ₀·sin φ + cos φ₀·cos φ·cos Δλ` is non-negative. Far-side
//! points come back as `None`. Footprint paths are clipped against the limb,
//! with the limb arc between an exit and the next entry resampled every
//! `dtheta` degrees.

use std::f64::consts::FRAC_PI_2;

use crate::body::Body;
use crate::error::ProjError;
use crate::great_circle::plane_normal;
use crate::path::{closed_codes, GeoPath, PlanarPath};
use crate::proj::ground::Ground;
use crate::proj::{Projection, NAN_XY};
use crate::sphere::{cross, cs, dot, hat, lonlat, wrap_180, wrap_360, xyz};

/// Visibility threshold on `cos c`: anything below sits on or behind the limb.
const EPSILON: f64 = 1e-18;

/// Default limb resampling step (degrees of planar arc).
pub const DEFAULT_DTHETA: f64 = 5.0;

pub struct Orthographic {
    ground: Ground,
    dtheta: f64,
}

impl Orthographic {
    pub fn new(lon_w_0: f64, lat_0: f64, radius_m: f64) -> Self {
        Self {
            ground: Ground::new(lon_w_0, lat_0, radius_m),
            dtheta: DEFAULT_DTHETA,
        }
    }

    pub fn on_body(lon_w_0: f64, lat_0: f64, body: &Body) -> Self {
        Self {
            ground: Ground::on_body(lon_w_0, lat_0, body),
            dtheta: DEFAULT_DTHETA,
        }
    }

    /// Override the limb resampling step (degrees).
    pub fn with_limb_step(mut self, dtheta: f64) -> Self {
        self.dtheta = dtheta;
        self
    }

    pub fn ground(&self) -> &Ground {
        &self.ground
    }

    /// Limb resampling step (degrees).
    pub fn dtheta(&self) -> f64 {
        self.dtheta
    }

    /// `cos c`: cosine of the angular distance to the view center.
    ///
    /// Δλ is wrapped before the trig so equivalent longitudes share one
    /// rounding of `cos`: the visibility threshold sits at the floating-point
    /// noise floor, where `cos(-270°)` and `cos(90°)` land on opposite sides
    /// of zero.
    fn cos_c(&self, lon_w: f64, lat: f64) -> f64 {
        let (clat0, slat0) = self.ground.cs0();
        let (clat, slat) = cs(lat);
        let (cdlon, _) = cs(wrap_180(self.ground.lon_w_0() - lon_w));
        slat0 * slat + clat0 * clat * cdlon
    }

    /// Whether a ground point sits on the visible hemisphere.
    pub fn is_visible(&self, lon_w: f64, lat: f64) -> bool {
        self.cos_c(lon_w, lat) >= EPSILON
    }

    /// Planar coordinates without the visibility test. Altitude (km) scales
    /// the point radially off the surface.
    fn raw(&self, lon_w: f64, lat: f64, alt_km: f64) -> (f64, f64) {
        let r = self.ground.r();
        let (clat0, slat0) = self.ground.cs0();
        let (clat, slat) = cs(lat);
        let (cdlon, sdlon) = cs(wrap_180(self.ground.lon_w_0() - lon_w));
        let k = 1.0 + alt_km * 1e3 / r;
        (
            r * clat * sdlon * k,
            r * (clat0 * slat - slat0 * clat * cdlon) * k,
        )
    }

    /// Forward projection of a point above the surface (altitude in km).
    ///
    /// Visibility is judged from the ground point under it.
    pub fn forward_3d(&self, lon_w: f64, lat: f64, alt_km: f64) -> Option<(f64, f64)> {
        if self.cos_c(lon_w, lat) < EPSILON {
            return None;
        }
        Some(self.raw(lon_w, lat, alt_km))
    }

    /// Inverse projection recovering altitude: planar points beyond the limb
    /// radius are read as limb points seen at altitude `ρ − r`.
    pub fn inverse_3d(&self, x: f64, y: f64) -> Option<(f64, f64, f64)> {
        let r = self.ground.r();
        let rh = x.hypot(y);
        if rh <= EPSILON {
            return Some((wrap_360(self.ground.lon_w_0()), self.ground.lat_0(), 0.0));
        }
        let (c, alt_km) = if rh > r {
            (FRAC_PI_2, (rh - r) * 1e-3)
        } else {
            ((rh / r).asin(), 0.0)
        };
        let (lon_w, lat) = self.lonlat_at(x, y, rh, c);
        Some((lon_w, lat, alt_km))
    }

    /// Ground point for planar coordinates at angular distance `c`.
    fn lonlat_at(&self, x: f64, y: f64, rh: f64, c: f64) -> (f64, f64) {
        let (clat0, slat0) = self.ground.cs0();
        let (cc, sc) = (c.cos(), c.sin());
        let lat = (cc * slat0 + y / rh * sc * clat0).asin().to_degrees();
        // Polar frames degenerate to atan2(x, ∓y): the clat0 term vanishes
        let lon = (x * sc).atan2(rh * clat0 * cc - y * slat0 * sc);
        let lon_w = wrap_360(self.ground.lon_w_0() - lon.to_degrees());
        (lon_w, lat)
    }

    /// Planar position of the limb crossing on the great circle through an
    /// edge with one visible and one hidden endpoint.
    fn limb_point(&self, a: (f64, f64), b: (f64, f64), visible_first: bool) -> (f64, f64) {
        let center = xyz(self.ground.lon_w_0(), self.ground.lat_0());
        let normal = plane_normal(a, b);
        let mut v = hat(cross(center, normal));
        let toward = if visible_first { a } else { b };
        if dot(v, xyz(toward.0, toward.1)) < 0.0 {
            v = [-v[0], -v[1], -v[2]];
        }
        let (lon_w, lat) = lonlat(v);
        self.raw(lon_w, lat, 0.0)
    }

    /// Walk the limb circle between two planar limb points along the shorter
    /// arc, appending intermediate points every `dtheta` degrees (endpoints
    /// excluded).
    fn limb_walk(&self, from: (f64, f64), to: (f64, f64), out: &mut Vec<(f64, f64)>) {
        let r = self.ground.r();
        let th1 = from.1.atan2(from.0).to_degrees();
        let th2 = to.1.atan2(to.0).to_degrees();
        let d = wrap_180(th2 - th1);
        let step = self.dtheta.copysign(d);
        let mut k = 1;
        while (step * k as f64).abs() < d.abs() - 1e-9 {
            let th = (th1 + step * k as f64).to_radians();
            out.push((r * th.cos(), r * th.sin()));
            k += 1;
        }
    }

    pub fn proj4(&self) -> String {
        self.ground.proj4("ortho", "+k=1")
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

impl Default for Orthographic {
    /// Unit sphere viewed from above the equator at 0°W.
    fn default() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }
}

impl Projection for Orthographic {
    fn name(&self) -> &'static str {
        "Orthographic"
    }

    fn forward(&self, lon_w: f64, lat: f64) -> Option<(f64, f64)> {
        self.forward_3d(lon_w, lat, 0.0)
    }

    fn inverse(&self, x: f64, y: f64) -> Option<(f64, f64)> {
        let r = self.ground.r();
        let rh = x.hypot(y);
        if rh <= EPSILON {
            return Some((wrap_360(self.ground.lon_w_0()), self.ground.lat_0()));
        }
        if rh > r {
            return None;
        }
        Some(self.lonlat_at(x, y, rh, (rh / r).asin()))
    }

    fn extent(&self) -> Option<[f64; 4]> {
        let r = self.ground.r();
        Some([-r, r, -r, r])
    }

    /// Project a closed footprint, clipping it against the limb.
    ///
    /// Hidden vertices are dropped; every visible↔hidden edge contributes its
    /// limb crossing, and the limb between an exit and the following entry is
    /// resampled. A ring that never reaches the visible hemisphere keeps its
    /// shape as NaN vertices.
    fn forward_path(&self, path: &GeoPath) -> Result<PlanarPath, ProjError> {
        if path.len() < 3 {
            return Err(ProjError::DegenerateInput(format!(
                "closed footprint needs at least 3 vertices, got {}",
                path.len()
            )));
        }

        let (ring, alt) = path.closed();
        let n = ring.len();
        let visible: Vec<bool> = ring
            .iter()
            .map(|&(lon_w, lat)| self.is_visible(lon_w, lat))
            .collect();

        if !visible.iter().any(|&v| v) {
            return Ok(PlanarPath::new(vec![NAN_XY; n], closed_codes(n)));
        }

        let mut verts = Vec::with_capacity(n);
        let mut first_entry = None;
        let mut last_exit = None;
        for i in 0..n - 1 {
            if visible[i] {
                let alt_km = alt.as_ref().map_or(0.0, |track| track[i]);
                verts.push(self.raw(ring[i].0, ring[i].1, alt_km));
            }
            if visible[i] != visible[i + 1] {
                let q = self.limb_point(ring[i], ring[i + 1], visible[i]);
                if visible[i] {
                    verts.push(q);
                    last_exit = Some(q);
                } else {
                    match last_exit {
                        Some(exit) => self.limb_walk(exit, q, &mut verts),
                        None => first_entry = Some(q),
                    }
                    verts.push(q);
                }
            }
        }
        // A ring that starts hidden closes through the limb back to its
        // first entry point
        if !visible[0] {
            if let (Some(exit), Some(entry)) = (last_exit, first_entry) {
                self.limb_walk(exit, entry, &mut verts);
            }
        }
        verts.push(verts[0]);

        let codes = closed_codes(verts.len());
        Ok(PlanarPath::new(verts, codes))
    }
}
