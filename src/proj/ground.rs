//! Shared center frame for body-surface projections.

use crate::body::Body;
use crate::sphere::{cs, wrap_180};

/// Projection center on a spherical body: central west longitude and
/// latitude, body radius, and the target name used in PROJ4/WKT output.
///
/// Frames are immutable values; [`Ground::recenter`] builds a new frame with
/// the trig terms recomputed.
#[derive(Clone, Debug)]
pub struct Ground {
    lon_w_0: f64,
    lat_0: f64,
    r: f64,
    target: &'static str,
    clat0: f64,
    slat0: f64,
}

impl Ground {
    /// Frame on an anonymous sphere of the given radius (metres).
    pub fn new(lon_w_0: f64, lat_0: f64, radius_m: f64) -> Self {
        Self::with_target(lon_w_0, lat_0, radius_m, "Undefined")
    }

    /// Frame centered on a planetary body.
    pub fn on_body(lon_w_0: f64, lat_0: f64, body: &Body) -> Self {
        Self::with_target(lon_w_0, lat_0, body.radius_m(), body.name)
    }

    fn with_target(lon_w_0: f64, lat_0: f64, r: f64, target: &'static str) -> Self {
        let (clat0, slat0) = cs(lat_0);
        Self {
            lon_w_0,
            lat_0,
            r,
            target,
            clat0,
            slat0,
        }
    }

    /// New frame at a different center, same body.
    pub fn recenter(&self, lon_w_0: f64, lat_0: f64) -> Self {
        Self::with_target(lon_w_0, lat_0, self.r, self.target)
    }

    /// Central west longitude (degrees).
    pub fn lon_w_0(&self) -> f64 {
        self.lon_w_0
    }

    /// Central latitude (degrees).
    pub fn lat_0(&self) -> f64 {
        self.lat_0
    }

    /// Body radius (metres).
    pub fn r(&self) -> f64 {
        self.r
    }

    /// Target body name.
    pub fn target(&self) -> &'static str {
        self.target
    }

    /// Cosine and sine of the central latitude.
    pub(crate) fn cs0(&self) -> (f64, f64) {
        (self.clat0, self.slat0)
    }

    /// Central meridian in east-positive longitude, for PROJ4/WKT output.
    ///
    /// `±180°W` stays `+180` rather than wrapping to `-180`.
    pub fn lon_0(&self) -> f64 {
        if self.lon_w_0.abs() == 180.0 {
            180.0
        } else {
            wrap_180(-self.lon_w_0)
        }
    }

    /// Longitude offset west of center, wrapped to `(-180, 180]`.
    ///
    /// The antipodal meridian always pins to `+180`, so antipodal points land
    /// on the right map edge regardless of which multiple of 360 the input
    /// carried.
    pub(crate) fn dlon_w(&self, lon_w: f64) -> f64 {
        let d = wrap_180(self.lon_w_0 - lon_w);
        if d == -180.0 {
            180.0
        } else {
            d
        }
    }

    /// PROJ4 definition string. `scale` carries the projection-specific
    /// parameter (`+lat_ts=…` or `+k=1`).
    pub(crate) fn proj4(&self, key: &str, scale: &str) -> String {
        format!(
            "+proj={key} +lat_0={lat_0} +lon_0={lon_0} {scale} +x_0=0 +y_0=0 \
             +a={r:?} +b={r:?} +units=m +no_defs",
            lat_0 = fmt_num(self.lat_0),
            lon_0 = fmt_num(self.lon_0()),
            r = self.r,
        )
    }

    /// WKT definition string. `params` holds the projection-specific
    /// `PARAMETER[…],` entries (scale, central meridian, latitude of
    /// origin), each comma-terminated.
    pub(crate) fn wkt(&self, name: &str, params: &str) -> String {
        format!(
            "PROJCS[\"PROJCS_{t}_{name}\",\
             GEOGCS[\"GCS_{t}\",\
             DATUM[\"D_{t}\",\
             SPHEROID[\"{t}_Mean_Sphere\", {r}, 0]],\
             PRIMEM[\"Greenwich\",0],\
             UNIT[\"Degree\",0.017453292519943295]],\
             PROJECTION[\"{name}\"],\
             PARAMETER[\"false_easting\", 0],\
             PARAMETER[\"false_northing\", 0],\
             {params}\
             UNIT[\"Meter\", 1]]",
            t = self.target,
            r = fmt_num(self.r),
        )
    }

    /// WKT parameter block entry.
    pub(crate) fn wkt_param(name: &str, value: f64) -> String {
        format!("PARAMETER[\"{name}\", {}],", fmt_num(value))
    }
}

/// Format a number the way PROJ4/WKT consumers expect: integral values print
/// without a decimal part.
pub(crate) fn fmt_num(v: f64) -> String {
    if v == v.trunc() && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::TITAN;
    use approx::assert_relative_eq;

    #[test]
    fn test_lon_0() {
        assert_relative_eq!(Ground::new(0.0, 0.0, 1.0).lon_0(), 0.0);
        assert_relative_eq!(Ground::new(90.0, 0.0, 1.0).lon_0(), -90.0);
        assert_relative_eq!(Ground::new(270.0, 0.0, 1.0).lon_0(), 90.0);
        assert_relative_eq!(Ground::new(180.0, 0.0, 1.0).lon_0(), 180.0);
        assert_relative_eq!(Ground::new(-180.0, 0.0, 1.0).lon_0(), 180.0);
    }

    #[test]
    fn test_dlon_w_pin() {
        let g = Ground::new(180.0, 0.0, 1.0);
        assert_relative_eq!(g.dlon_w(0.0), 180.0);
        assert_relative_eq!(g.dlon_w(360.0), 180.0);
        assert_relative_eq!(g.dlon_w(-360.0), 180.0);
        assert_relative_eq!(g.dlon_w(90.0), 90.0);
        assert_relative_eq!(g.dlon_w(270.0), -90.0);

        // Antipodes pin to +180 from either side of the wrap
        let g = Ground::new(0.0, 0.0, 1.0);
        assert_relative_eq!(g.dlon_w(180.0), 180.0);
        assert_relative_eq!(g.dlon_w(-180.0), 180.0);
        assert_relative_eq!(g.dlon_w(540.0), 180.0);
    }

    #[test]
    fn test_recenter_keeps_body() {
        let g = Ground::on_body(0.0, 90.0, &TITAN);
        let moved = g.recenter(180.0, 0.0);
        assert_eq!(moved.target(), "Titan");
        assert_relative_eq!(moved.r(), 2_574_730.0);
        assert_relative_eq!(moved.lat_0(), 0.0);
    }

    #[test]
    fn test_fmt_num() {
        assert_eq!(fmt_num(90.0), "90");
        assert_eq!(fmt_num(-45.0), "-45");
        assert_eq!(fmt_num(2_574_730.0), "2574730");
        assert_eq!(fmt_num(0.5), "0.5");
    }
}
