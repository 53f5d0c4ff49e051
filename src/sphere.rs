//! Unit-sphere vector helpers.
//!
//! Ground coordinates use planetocentric **west longitude** in `[0, 360)`
//! degrees. The matching Cartesian frame is
//! `(cos φ·cos(−λw), cos φ·sin(−λw), sin φ)`, so east longitude is `−λw`.

/// Wrap an angle to `[-180, 180)` degrees.
pub fn wrap_180(angle: f64) -> f64 {
    (angle + 180.0).rem_euclid(360.0) - 180.0
}

/// Wrap an angle to `[0, 360)` degrees.
pub fn wrap_360(angle: f64) -> f64 {
    angle.rem_euclid(360.0)
}

/// Cartesian unit vector of a ground point (west longitude / latitude, degrees).
pub fn xyz(lon_w: f64, lat: f64) -> [f64; 3] {
    let (lo, la) = ((-lon_w).to_radians(), lat.to_radians());
    [la.cos() * lo.cos(), la.cos() * lo.sin(), la.sin()]
}

/// Ground point (west longitude in `[0, 360)`, latitude) of a Cartesian vector.
pub fn lonlat(v: [f64; 3]) -> (f64, f64) {
    let u = hat(v);
    let lon_w = wrap_360(-v[1].atan2(v[0]).to_degrees());
    (lon_w, u[2].asin().to_degrees())
}

pub fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

pub fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

pub fn norm(v: [f64; 3]) -> f64 {
    dot(v, v).sqrt()
}

/// Normalized copy of `v`.
pub fn hat(v: [f64; 3]) -> [f64; 3] {
    let n = norm(v);
    [v[0] / n, v[1] / n, v[2] / n]
}

/// Cosine and sine of an angle in degrees.
pub(crate) fn cs(deg: f64) -> (f64, f64) {
    let r = deg.to_radians();
    (r.cos(), r.sin())
}
