//! Planetary body constants.
//!
//! All bodies are treated as mean spheres; footprint geometry on the scale of
//! an instrument ground track does not warrant an ellipsoidal model.

/// A spherical planetary body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    /// Body name, as spelled in PROJ4/WKT output.
    pub name: &'static str,
    /// Mean radius (kilometres)
    pub radius_km: f64,
}

impl Body {
    pub const fn new(name: &'static str, radius_km: f64) -> Self {
        Self { name, radius_km }
    }

    /// Mean radius in metres.
    pub fn radius_m(&self) -> f64 {
        self.radius_km * 1e3
    }
}

pub const TITAN: Body = Body::new("Titan", 2_574.73);
pub const ENCELADUS: Body = Body::new("Enceladus", 252.1);
pub const EARTH: Body = Body::new("Earth", 6_371.0);
pub const MOON: Body = Body::new("Moon", 1_737.4);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_radius_m() {
        assert_relative_eq!(TITAN.radius_m(), 2_574_730.0);
        assert_relative_eq!(ENCELADUS.radius_m(), 252_100.0);
    }
}
