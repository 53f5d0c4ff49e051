//! Mollweide projection — equal-area pseudocylindrical, whole-body view.
//!
//! forward: solve 2θ + sin 2θ = π·sin φ, then
//!          x = (2√2/π)·r·Δλ·cos θ, y = √2·r·sin θ
//! inverse: θ = asin(y / √2r), φ = asin((2θ + sin 2θ) / π)
//!
//! The auxiliary angle θ comes out of a Newton iteration that loses its
//! footing at the poles, so `|φ| ≥ 90°` short-circuits to the pole point.

use std::f64::consts::{FRAC_PI_2, PI, SQRT_2};

use crate::body::Body;
use crate::error::ProjError;
use crate::path::{GeoPath, PlanarPath};
use crate::proj::ground::{fmt_num, Ground};
use crate::proj::Projection;
use crate::sphere::wrap_360;

/// Newton iteration tolerance on the auxiliary angle (radians).
const EPSILON: f64 = 1e-10;
const MAX_ITER: usize = 100;

/// Unit map: with this radius the pole sits at `y = 1` and the antimeridian
/// at `x = ±2` on the equator.
pub const DEFAULT_RADIUS: f64 = std::f64::consts::FRAC_1_SQRT_2;

pub struct Mollweide {
    ground: Ground,
    rx: f64,
    ry: f64,
}

impl Mollweide {
    /// Map centered on `lon_w_0`; the central latitude is always the equator.
    pub fn new(lon_w_0: f64, radius_m: f64) -> Self {
        Self::with_frame(Ground::new(lon_w_0, 0.0, radius_m))
    }

    pub fn on_body(lon_w_0: f64, body: &Body) -> Self {
        Self::with_frame(Ground::on_body(lon_w_0, 0.0, body))
    }

    fn with_frame(ground: Ground) -> Self {
        let ry = ground.r() * SQRT_2;
        let rx = ry / FRAC_PI_2;
        Self { ground, rx, ry }
    }

    pub fn ground(&self) -> &Ground {
        &self.ground
    }

    /// Auxiliary angle θ for a latitude, by Newton iteration on
    /// `t + sin t = π·sin φ` (with `t = 2θ`).
    fn theta(&self, lat: f64) -> Result<f64, ProjError> {
        let t0 = PI * lat.to_radians().sin();
        let mut big = lat.to_radians();
        for _ in 0..MAX_ITER {
            let d = (big + big.sin() - t0) / (1.0 + big.cos());
            big -= d;
            if d.abs() <= EPSILON {
                return Ok(big / 2.0);
            }
        }
        Err(ProjError::Convergence { lat })
    }

    /// Forward projection surfacing solver failure.
    ///
    /// [`Projection::forward`] folds a non-converged latitude into the `None`
    /// sentinel; use this entry point (or [`Projection::forward_batch`]) when
    /// the distinction between "out of domain" and "did not converge" matters.
    pub fn try_forward(&self, lon_w: f64, lat: f64) -> Result<(f64, f64), ProjError> {
        if lat.abs() >= 90.0 {
            return Ok((0.0, self.ry.copysign(lat)));
        }
        let theta = self.theta(lat)?;
        let dlon = self.ground.dlon_w(lon_w).to_radians();
        Ok((self.rx * dlon * theta.cos(), self.ry * theta.sin()))
    }

    pub fn proj4(&self) -> String {
        format!(
            "+proj=moll +lon_0={lon_0} +x_0=0 +y_0=0 +R={r:?} +units=m +no_defs",
            lon_0 = fmt_num(self.ground.lon_0()),
            r = self.ground.r(),
        )
    }

    pub fn wkt(&self) -> String {
        let params = Ground::wkt_param("central_meridian", self.ground.lon_0());
        self.ground.wkt(self.name(), &params)
    }
}

impl Default for Mollweide {
    fn default() -> Self {
        Self::new(0.0, DEFAULT_RADIUS)
    }
}

impl Projection for Mollweide {
    fn name(&self) -> &'static str {
        "Mollweide"
    }

    fn forward(&self, lon_w: f64, lat: f64) -> Option<(f64, f64)> {
        self.try_forward(lon_w, lat).ok()
    }

    /// Batch forward transform surfacing a non-converged latitude as
    /// [`ProjError::Convergence`] rather than a NaN sentinel.
    fn forward_batch(&self, coords: &mut [(f64, f64)]) -> Result<(), ProjError> {
        for c in coords.iter_mut() {
            *c = self.try_forward(c.0, c.1)?;
        }
        Ok(())
    }

    fn inverse(&self, x: f64, y: f64) -> Option<(f64, f64)> {
        let s = y / self.ry;
        if s.abs() > 1.0 {
            return None;
        }
        let theta = s.asin();
        let ctheta = theta.cos();
        if ctheta <= EPSILON {
            return Some((wrap_360(self.ground.lon_w_0()), 90.0_f64.copysign(y)));
        }
        let ang = x / (self.rx * ctheta);
        if ang.abs() > PI {
            return None;
        }
        let lat = ((2.0 * theta + (2.0 * theta).sin()) / PI).asin().to_degrees();
        let lon_w = wrap_360(self.ground.lon_w_0() - ang.to_degrees());
        Some((lon_w, lat))
    }

    fn extent(&self) -> Option<[f64; 4]> {
        Some([-2.0 * self.ry, 2.0 * self.ry, -self.ry, self.ry])
    }

    /// Footprint paths are not supported: the elliptical outline would need
    /// its own seam repair against the curved map edge.
    fn forward_path(&self, _path: &GeoPath) -> Result<PlanarPath, ProjError> {
        Err(ProjError::PathUnsupported("Mollweide"))
    }
}
