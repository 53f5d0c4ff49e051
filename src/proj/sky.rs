//! Sky-plane (gnomonic tangent-plane) projection for instrument pointing.
//!
//! The boresight points at `(ra, dec)` with a roll of `twist` about itself;
//! the pointing matrix `M` rotates J2000 unit vectors into the camera frame,
//! where the boresight is `+X` and planar coordinates are the tangent-plane
//! slopes `(v_y / v_x, v_z / v_x)`.
//!
//! Unlike the body-surface projections, sky coordinates are right ascension
//! (east-positive) and declination, both in degrees.

use crate::sphere::{cs, hat, wrap_360};

type Matrix3 = [[f64; 3]; 3];

/// Points behind the tangent plane (boresight component at or below this)
/// do not project.
const EPSILON: f64 = 1e-12;

fn mat_mul(a: &Matrix3, b: &Matrix3) -> Matrix3 {
    let mut m = [[0.0; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            m[i][j] = (0..3).map(|k| a[i][k] * b[k][j]).sum();
        }
    }
    m
}

pub struct Sky {
    ra: f64,
    dec: f64,
    twist: f64,
    m: Matrix3,
}

impl Sky {
    /// Pointing frame for a boresight at `(ra, dec)` rolled by `twist`
    /// (all degrees).
    pub fn new(ra: f64, dec: f64, twist: f64) -> Self {
        let ra = wrap_360(ra);
        let (cra, sra) = cs(ra);
        let (cdec, sdec) = cs(dec);
        let (q0, stw) = cs(twist / 2.0);

        // Declination tilt, then right-ascension spin
        let m1 = [[cdec, 0.0, sdec], [0.0, 1.0, 0.0], [-sdec, 0.0, cdec]];
        let m2 = [[cra, sra, 0.0], [-sra, cra, 0.0], [0.0, 0.0, 1.0]];

        // Twist as a quaternion rotation about the boresight axis
        let (q1, q2, q3) = (stw * cdec * cra, stw * cdec * sra, stw * sdec);
        let m3 = [
            [
                1.0 - 2.0 * (q2 * q2 + q3 * q3),
                2.0 * (q1 * q2 + q0 * q3),
                2.0 * (q1 * q3 - q0 * q2),
            ],
            [
                2.0 * (q1 * q2 - q0 * q3),
                1.0 - 2.0 * (q1 * q1 + q3 * q3),
                2.0 * (q2 * q3 + q0 * q1),
            ],
            [
                2.0 * (q1 * q3 + q0 * q2),
                2.0 * (q2 * q3 - q0 * q1),
                1.0 - 2.0 * (q1 * q1 + q2 * q2),
            ],
        ];

        let m = mat_mul(&m1, &mat_mul(&m2, &m3));
        Self { ra, dec, twist, m }
    }

    /// Boresight right ascension (degrees, `[0, 360)`).
    pub fn ra(&self) -> f64 {
        self.ra
    }

    /// Boresight declination (degrees).
    pub fn dec(&self) -> f64 {
        self.dec
    }

    /// Roll about the boresight (degrees).
    pub fn twist(&self) -> f64 {
        self.twist
    }

    /// Pointing matrix (J2000 to camera frame).
    pub fn matrix(&self) -> &Matrix3 {
        &self.m
    }

    /// Tangent-plane slopes of a sky point, `None` when it lies on or behind
    /// the plane through the observer.
    pub fn forward(&self, ra: f64, dec: f64) -> Option<(f64, f64)> {
        let (cra, sra) = cs(ra);
        let (cdec, sdec) = cs(dec);
        let u = [cra * cdec, sra * cdec, sdec];
        let v: Vec<f64> = self
            .m
            .iter()
            .map(|row| row[0] * u[0] + row[1] * u[1] + row[2] * u[2])
            .collect();
        if v[0] <= EPSILON {
            return None;
        }
        Some((v[1] / v[0], v[2] / v[0]))
    }

    /// Sky point under tangent-plane slopes `(x, y)`; `ra` comes back in
    /// `[0, 360)`.
    pub fn inverse(&self, x: f64, y: f64) -> (f64, f64) {
        let u = hat([1.0, x, y]);
        // Transpose product: rotation matrices invert by transposition
        let v: Vec<f64> = (0..3)
            .map(|i| self.m[0][i] * u[0] + self.m[1][i] * u[1] + self.m[2][i] * u[2])
            .collect();
        let ra = wrap_360(v[1].atan2(v[0]).to_degrees());
        let dec = v[2].asin().to_degrees();
        (ra, dec)
    }

    /// Vertex-wise transform of a sky path.
    pub fn forward_batch(&self, coords: &mut [(f64, f64)]) {
        for c in coords.iter_mut() {
            *c = self.forward(c.0, c.1).unwrap_or((f64::NAN, f64::NAN));
        }
    }
}

impl Default for Sky {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}
