//! Great-circle geometry on the unit sphere.
//!
//! Arcs are sampled with spherical linear interpolation:
//! `v(t) = (sin((1−t)·ω)·p₀ + sin(t·ω)·p₁) / sin ω`
//! where `ω` is the angle between the endpoint vectors.

use crate::error::ProjError;
use crate::sphere::{cross, dot, hat, lonlat, wrap_360, xyz};

const SIN_EPSILON: f64 = 1e-12;

/// Sample `npt` evenly spaced points (inclusive of both endpoints) along the
/// great-circle arc between two ground points.
///
/// Identical or antipodal endpoints leave the circle undefined and return
/// [`ProjError::DegenerateInput`].
pub fn arc(p1: (f64, f64), p2: (f64, f64), npt: usize) -> Result<Vec<(f64, f64)>, ProjError> {
    if npt < 2 {
        return Err(ProjError::DegenerateInput(format!(
            "great-circle arc needs at least 2 samples, got {npt}"
        )));
    }
    let v0 = xyz(p1.0, p1.1);
    let v1 = xyz(p2.0, p2.1);
    let omega = dot(v0, v1).clamp(-1.0, 1.0).acos();
    let s = omega.sin();
    if s.abs() < SIN_EPSILON {
        return Err(ProjError::DegenerateInput(format!(
            "identical or antipodal points ({}, {}) / ({}, {})",
            p1.0, p1.1, p2.0, p2.1
        )));
    }

    // Endpoints are the inputs verbatim, not a round-trip through the
    // Cartesian frame: callers rely on arc(...)[0] == p1 exactly
    let mut out = Vec::with_capacity(npt);
    out.push(p1);
    for k in 1..npt - 1 {
        let t = k as f64 / (npt - 1) as f64;
        let a = ((1.0 - t) * omega).sin() / s;
        let b = (t * omega).sin() / s;
        out.push(lonlat([
            a * v0[0] + b * v1[0],
            a * v0[1] + b * v1[1],
            a * v0[2] + b * v1[2],
        ]));
    }
    out.push(p2);
    Ok(out)
}

/// Latitude of the great circle through `p1` and `p2` at west longitude `lon_w`.
///
/// Undefined when the two anchors sit on the same meridian
/// (`λ1 ≡ λ2 mod 180°`).
pub fn latitude_on_circle(lon_w: f64, p1: (f64, f64), p2: (f64, f64)) -> Result<f64, ProjError> {
    let (lon_1, lat_1) = p1;
    let (lon_2, lat_2) = p2;
    let s12 = (lon_1 - lon_2).to_radians().sin();
    if s12.abs() < SIN_EPSILON {
        return Err(ProjError::DegenerateInput(format!(
            "great circle undefined by meridian-aligned anchors at {lon_1} and {lon_2}"
        )));
    }
    let t = (lat_1.to_radians().tan() * (lon_w - lon_2).to_radians().sin()
        - lat_2.to_radians().tan() * (lon_w - lon_1).to_radians().sin())
        / s12;
    Ok(t.atan().to_degrees())
}

/// Two anchor points of the great circle whose pole is `pole`.
///
/// The first anchor lies 90° down the pole's meridian, the second on the
/// equator a quarter turn to the west.
pub fn pole_axis(pole: (f64, f64)) -> ((f64, f64), (f64, f64)) {
    let (lon_p, lat_p) = pole;
    let anchor = if lat_p >= 0.0 {
        (lon_p, lat_p - 90.0)
    } else {
        (lon_p, lat_p + 90.0)
    };
    (anchor, (wrap_360(lon_p + 90.0), 0.0))
}

/// Latitude at `lon_w` of the great circle whose pole is `pole`.
pub fn latitude_under_pole(lon_w: f64, pole: (f64, f64)) -> Result<f64, ProjError> {
    let (p1, p2) = pole_axis(pole);
    latitude_on_circle(lon_w, p1, p2)
}

/// Unit normal of the great circle through two ground points.
pub(crate) fn plane_normal(p1: (f64, f64), p2: (f64, f64)) -> [f64; 3] {
    hat(cross(xyz(p1.0, p1.1), xyz(p2.0, p2.1)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_arc_endpoints_and_midway() {
        let pts = arc((20.0, 30.0), (120.0, 45.0), 10).unwrap();
        assert_eq!(pts.len(), 10);
        // Endpoints are bit-for-bit the inputs
        assert_eq!(pts[0], (20.0, 30.0));
        assert_eq!(pts[9], (120.0, 45.0));

        let two = arc((20.0, 30.0), (120.0, 45.0), 2).unwrap();
        assert_eq!(two, vec![(20.0, 30.0), (120.0, 45.0)]);

        // The arc bulges poleward of both endpoints
        assert_relative_eq!(pts[5].0, 69.6, epsilon = 0.1);
        assert_relative_eq!(pts[5].1, 50.8, epsilon = 0.1);
    }

    #[test]
    fn test_arc_degenerate() {
        assert!(arc((20.0, 30.0), (20.0, 30.0), 5).is_err());
        assert!(arc((20.0, 30.0), (200.0, -30.0), 5).is_err());
        assert!(arc((20.0, 30.0), (120.0, 45.0), 1).is_err());
    }

    #[test]
    fn test_latitude_on_circle() {
        let p1 = (20.0, 30.0);
        let p2 = (120.0, 45.0);
        assert_relative_eq!(latitude_on_circle(0.0, p1, p2).unwrap(), 9.1, epsilon = 0.1);
        assert_relative_eq!(latitude_on_circle(90.0, p1, p2).unwrap(), 51.3, epsilon = 0.1);
        assert_relative_eq!(
            latitude_on_circle(180.0, p1, p2).unwrap(),
            -9.1,
            epsilon = 0.1
        );
        assert_relative_eq!(
            latitude_on_circle(270.0, p1, p2).unwrap(),
            -51.3,
            epsilon = 0.1
        );
    }

    #[test]
    fn test_latitude_on_circle_degenerate() {
        assert!(latitude_on_circle(0.0, (20.0, 30.0), (20.0, 50.0)).is_err());
        assert!(latitude_on_circle(0.0, (20.0, 30.0), (200.0, 50.0)).is_err());
    }

    #[test]
    fn test_pole_axis() {
        let (p1, p2) = pole_axis((20.0, 30.0));
        assert_eq!(p1, (20.0, -60.0));
        assert_eq!(p2, (110.0, 0.0));

        let (p1, _) = pole_axis((20.0, -30.0));
        assert_eq!(p1, (20.0, 60.0));
    }

    #[test]
    fn test_latitude_under_pole() {
        assert_relative_eq!(
            latitude_under_pole(0.0, (20.0, 30.0)).unwrap(),
            -58.4,
            epsilon = 0.1
        );
        // Under the pole's own meridian the circle dips lowest
        assert_relative_eq!(
            latitude_under_pole(20.0, (20.0, 30.0)).unwrap(),
            -60.0,
            epsilon = 1e-6
        );
    }
}
