//! Map projections and the footprint path pipeline.

pub mod equirectangular;
pub mod ground;
pub mod mollweide;
pub mod orthographic;
pub mod sky;
pub mod stereographic;

use crate::error::ProjError;
use crate::path::{closed_codes, open_codes, GeoPath, PlanarPath};

const NAN_XY: (f64, f64) = (f64::NAN, f64::NAN);

/// Trait for projections from ground coordinates (west longitude / latitude,
/// degrees) to planar map coordinates (metres).
///
/// `forward` and `inverse` return `None` for points outside the projection
/// domain (far side of an orthographic view, the stereographic anti-origin,
/// planar points outside the Mollweide ellipse). That sentinel is part of
/// normal operation; [`ProjError`] is reserved for unprojectable *paths*.
pub trait Projection {
    /// Projection name, as spelled in WKT output.
    fn name(&self) -> &'static str;

    /// Forward: (lon_w, lat) degrees -> (x, y) metres.
    fn forward(&self, lon_w: f64, lat: f64) -> Option<(f64, f64)>;

    /// Inverse: (x, y) metres -> (lon_w in [0, 360), lat) degrees.
    fn inverse(&self, x: f64, y: f64) -> Option<(f64, f64)>;

    /// Batch forward transform, in place. Out-of-domain points become NaN;
    /// projections whose forward math can genuinely fail surface the error
    /// instead of writing sentinels.
    fn forward_batch(&self, coords: &mut [(f64, f64)]) -> Result<(), ProjError> {
        for c in coords.iter_mut() {
            *c = self.forward(c.0, c.1).unwrap_or(NAN_XY);
        }
        Ok(())
    }

    /// Batch inverse transform, in place. Out-of-domain points become NaN.
    fn inverse_batch(&self, coords: &mut [(f64, f64)]) -> Result<(), ProjError> {
        for c in coords.iter_mut() {
            *c = self.inverse(c.0, c.1).unwrap_or(NAN_XY);
        }
        Ok(())
    }

    /// Half-spans `(xc, yc)` of the wrapped plane for periodic projections.
    ///
    /// `Some` opts the projection into the seam-crossing pipeline: a planar
    /// jump wider than `xc` between consecutive footprint vertices marks a
    /// seam crossing, and `±yc` is the y of the wrapped poles.
    fn wrap_limits(&self) -> Option<(f64, f64)> {
        None
    }

    /// Planar bounding box `[x_min, x_max, y_min, y_max]` of the full map,
    /// when the projection has one.
    fn extent(&self) -> Option<[f64; 4]> {
        None
    }

    /// Project a footprint path.
    ///
    /// Periodic projections close the vertex ring and repair pole-wrap and
    /// antimeridian-crossing degeneracies; other projections map vertices
    /// one-to-one and leave the path open.
    fn forward_path(&self, path: &GeoPath) -> Result<PlanarPath, ProjError>
    where
        Self: Sized,
    {
        match self.wrap_limits() {
            Some((xc, yc)) => project_closed(self, path, xc, yc),
            None => Ok(project_open(self, path)),
        }
    }

    /// Project meridian lines every `step` degrees of west longitude, each
    /// sampled at `npt` latitudes pole to pole.
    fn meridians(&self, step: f64, npt: usize) -> Vec<PlanarPath> {
        if step <= 0.0 || npt < 2 {
            return Vec::new();
        }
        let mut out = Vec::new();
        let mut lon_w = 0.0;
        while lon_w < 360.0 {
            let verts: Vec<_> = (0..npt)
                .map(|k| {
                    let lat = -90.0 + 180.0 * k as f64 / (npt - 1) as f64;
                    self.forward(lon_w, lat).unwrap_or(NAN_XY)
                })
                .collect();
            out.push(PlanarPath::new(verts, open_codes(npt)));
            lon_w += step;
        }
        out
    }

    /// Project parallel lines every `step` degrees of latitude (poles
    /// excluded), each sampled at `npt` longitudes around the body.
    fn parallels(&self, step: f64, npt: usize) -> Vec<PlanarPath> {
        if step <= 0.0 || npt < 2 {
            return Vec::new();
        }
        let mut out = Vec::new();
        let mut lat = -90.0 + step;
        while lat < 90.0 {
            let verts: Vec<_> = (0..npt)
                .map(|k| {
                    let lon_w = 360.0 * k as f64 / (npt - 1) as f64;
                    self.forward(lon_w, lat).unwrap_or(NAN_XY)
                })
                .collect();
            out.push(PlanarPath::new(verts, open_codes(npt)));
            lat += step;
        }
        out
    }
}

/// Vertex-wise projection of an open path.
fn project_open<P: Projection>(proj: &P, path: &GeoPath) -> PlanarPath {
    let verts: Vec<_> = path
        .vertices()
        .iter()
        .map(|&(lon_w, lat)| proj.forward(lon_w, lat).unwrap_or(NAN_XY))
        .collect();
    let codes = open_codes(verts.len());
    PlanarPath::new(verts, codes)
}

/// Close the footprint ring, project it, and repair seam degeneracies.
fn project_closed<P: Projection>(
    proj: &P,
    path: &GeoPath,
    xc: f64,
    yc: f64,
) -> Result<PlanarPath, ProjError> {
    if path.len() < 3 {
        return Err(ProjError::DegenerateInput(format!(
            "closed footprint needs at least 3 vertices, got {}",
            path.len()
        )));
    }

    let (ring, _) = path.closed();
    let xy: Vec<_> = ring
        .iter()
        .map(|&(lon_w, lat)| proj.forward(lon_w, lat).unwrap_or(NAN_XY))
        .collect();

    let crossing: Vec<bool> = xy
        .windows(2)
        .map(|w| (w[1].0 - w[0].0).abs() > xc)
        .collect();

    match crossing.iter().filter(|&&c| c).count() {
        0 => {
            let codes = closed_codes(xy.len());
            Ok(PlanarPath::new(xy, codes))
        }
        1 => Ok(wrap_pole(&xy, &crossing, xc, yc)),
        2 => split_seam(&xy, xc),
        n => Err(ProjError::Topology { crossings: n }),
    }
}

/// Rebuild a polygon that encircles a pole.
///
/// The single seam crossing is bridged through the top (or bottom) edge of
/// the map: up the seam, across the wrapped pole line, and back down the
/// opposite seam. The bridge latitude is the linear planar interpolation of
/// y at the seam.
fn wrap_pole(xy: &[(f64, f64)], crossing: &[bool], xc: f64, yc: f64) -> PlanarPath {
    let extreme = xy
        .iter()
        .map(|&(_, y)| y)
        .fold((0.0_f64, 0.0_f64), |(best_abs, best), y| {
            if y.abs() > best_abs {
                (y.abs(), y)
            } else {
                (best_abs, best)
            }
        })
        .1;
    let y_pole = if extreme >= 0.0 { yc } else { -yc };

    let mut verts = Vec::with_capacity(xy.len() + 4);
    verts.push(xy[0]);
    for (i, &crosses) in crossing.iter().enumerate() {
        if crosses {
            let (x0, y0) = xy[i];
            let (x1, y1) = xy[i + 1];
            let (seam_out, seam_in, f) = if x0 > 0.0 {
                (xc, -xc, (xc - x0) / (x1 + 2.0 * xc - x0))
            } else {
                (-xc, xc, (xc + x0) / (x0 - x1 + 2.0 * xc))
            };
            let y_bridge = y0 + (y1 - y0) * f;
            verts.push((seam_out, y_bridge));
            verts.push((seam_out, y_pole));
            verts.push((seam_in, y_pole));
            verts.push((seam_in, y_bridge));
        }
        verts.push(xy[i + 1]);
    }

    let codes = closed_codes(verts.len());
    PlanarPath::new(verts, codes)
}

/// Split a polygon that straddles the antimeridian seam into two closed
/// polygons, left side first.
fn split_seam(xy: &[(f64, f64)], xc: f64) -> Result<PlanarPath, ProjError> {
    let span = 2.0 * xc;
    let wrapped: Vec<f64> = xy.iter().map(|&(x, _)| x.rem_euclid(span)).collect();

    let side = |offset: f64, boundary: f64, keep: fn(f64, f64) -> bool| -> Vec<(f64, f64)> {
        let mut verts = Vec::new();
        for i in 0..xy.len() - 1 {
            let x0 = wrapped[i] + offset;
            let x1 = wrapped[i + 1] + offset;
            let y0 = xy[i].1;
            let y1 = xy[i + 1].1;
            if keep(x0, boundary) {
                verts.push((x0, y0));
            }
            if keep(x0, boundary) != keep(x1, boundary) {
                let f = (boundary - x0) / (x1 - x0);
                verts.push((boundary, y0 + (y1 - y0) * f));
            }
        }
        verts
    };

    let mut left = side(-span, -xc, |x, b| x >= b);
    if left.len() < 3 {
        return Err(ProjError::DegenerateSplit {
            side: "left",
            count: left.len(),
        });
    }
    let mut right = side(0.0, xc, |x, b| x <= b);
    if right.len() < 3 {
        return Err(ProjError::DegenerateSplit {
            side: "right",
            count: right.len(),
        });
    }

    left.push(left[0]);
    right.push(right[0]);

    let mut codes = closed_codes(left.len());
    codes.extend(closed_codes(right.len()));
    left.extend(right);
    Ok(PlanarPath::new(left, codes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathCode;
    use crate::proj::equirectangular::Equirectangular;

    // Unit-degree map: 1 planar unit per degree, xc = 180, yc = 90.
    fn proj() -> Equirectangular {
        Equirectangular::default()
    }

    #[test]
    fn test_too_few_vertices() {
        let err = proj()
            .forward_path(&GeoPath::new(vec![(0.0, 0.0), (10.0, 0.0)]))
            .unwrap_err();
        assert!(matches!(err, ProjError::DegenerateInput(_)));
    }

    #[test]
    fn test_topology_error() {
        // Zig-zag across the antimeridian four times
        let path = GeoPath::new(vec![
            (10.0, 0.0),
            (-20.0, 30.0),
            (-50.0, 0.0),
            (-20.0, -30.0),
            (10.0, 0.0),
            (-20.0, 30.0),
            (-50.0, 0.0),
            (-20.0, -30.0),
        ]);
        match proj().forward_path(&path).unwrap_err() {
            ProjError::Topology { crossings } => assert!(crossings > 2),
            other => panic!("expected topology error, got {other:?}"),
        }
    }

    #[test]
    fn test_graticule_shapes() {
        let p = proj();
        let meridians = p.meridians(30.0, 19);
        assert_eq!(meridians.len(), 12);
        assert_eq!(meridians[0].len(), 19);
        assert_eq!(meridians[0].codes()[0], PathCode::Move);
        assert!(meridians[0].codes()[1..].iter().all(|&c| c == PathCode::Line));

        let parallels = p.parallels(30.0, 25);
        assert_eq!(parallels.len(), 5);
        assert_eq!(parallels[0].len(), 25);
    }
}
