//! Ground and planar vertex paths.

/// Draw code attached to each path vertex.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathCode {
    /// Start a new sub-polygon at this vertex.
    Move,
    /// Draw a segment from the previous vertex.
    Line,
    /// Close the current sub-polygon (the vertex repeats the sub-polygon start).
    Close,
}

/// Code run for an open polyline of `n` vertices.
pub(crate) fn open_codes(n: usize) -> Vec<PathCode> {
    let mut codes = Vec::with_capacity(n);
    if n > 0 {
        codes.push(PathCode::Move);
        codes.extend(std::iter::repeat(PathCode::Line).take(n - 1));
    }
    codes
}

/// Code run for a closed polygon of `n` vertices (first repeated last).
pub(crate) fn closed_codes(n: usize) -> Vec<PathCode> {
    let mut codes = Vec::with_capacity(n);
    if n > 1 {
        codes.push(PathCode::Move);
        codes.extend(std::iter::repeat(PathCode::Line).take(n - 2));
        codes.push(PathCode::Close);
    }
    codes
}

/// A ground-track path: vertices in (west longitude, latitude) degrees, with
/// an optional altitude (kilometres) per vertex.
#[derive(Clone, Debug)]
pub struct GeoPath {
    vertices: Vec<(f64, f64)>,
    altitude: Option<Vec<f64>>,
}

impl GeoPath {
    pub fn new(vertices: Vec<(f64, f64)>) -> Self {
        Self {
            vertices,
            altitude: None,
        }
    }

    /// Attach a per-vertex altitude track (km above the surface).
    ///
    /// # Panics
    /// If the altitude length does not match the vertex count.
    pub fn with_altitude(vertices: Vec<(f64, f64)>, altitude: Vec<f64>) -> Self {
        assert_eq!(
            vertices.len(),
            altitude.len(),
            "altitude track must match vertex count"
        );
        Self {
            vertices,
            altitude: Some(altitude),
        }
    }

    pub fn vertices(&self) -> &[(f64, f64)] {
        &self.vertices
    }

    pub fn altitude(&self) -> Option<&[f64]> {
        self.altitude.as_deref()
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertex ring with the first vertex repeated last (and the altitude track
    /// closed alongside when present).
    pub(crate) fn closed(&self) -> (Vec<(f64, f64)>, Option<Vec<f64>>) {
        let mut verts = self.vertices.clone();
        let mut alt = self.altitude.clone();
        if verts.first() != verts.last() {
            if let Some(first) = verts.first().copied() {
                verts.push(first);
            }
            if let Some(track) = alt.as_mut() {
                if let Some(first) = track.first().copied() {
                    track.push(first);
                }
            }
        }
        (verts, alt)
    }
}

/// A projected path: planar vertices (metres) with draw codes.
///
/// Hidden or out-of-domain vertices carry NaN coordinates so the path shape
/// stays aligned with its codes.
#[derive(Clone, Debug)]
pub struct PlanarPath {
    vertices: Vec<(f64, f64)>,
    codes: Vec<PathCode>,
}

impl PlanarPath {
    pub(crate) fn new(vertices: Vec<(f64, f64)>, codes: Vec<PathCode>) -> Self {
        debug_assert_eq!(vertices.len(), codes.len());
        Self { vertices, codes }
    }

    pub fn vertices(&self) -> &[(f64, f64)] {
        &self.vertices
    }

    pub fn codes(&self) -> &[PathCode] {
        &self.codes
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Sub-polygon vertex slices, split at each `Move`.
    pub fn polygons(&self) -> Vec<&[(f64, f64)]> {
        let mut out = Vec::new();
        let mut start = 0;
        for (i, code) in self.codes.iter().enumerate() {
            if *code == PathCode::Move && i > start {
                out.push(&self.vertices[start..i]);
                start = i;
            }
        }
        if start < self.vertices.len() {
            out.push(&self.vertices[start..]);
        }
        out
    }

    /// Signed shoelace area of one sub-polygon slice.
    pub fn area(polygon: &[(f64, f64)]) -> f64 {
        let n = polygon.len();
        if n < 3 {
            return 0.0;
        }
        let mut twice = 0.0;
        for i in 0..n - 1 {
            let (x0, y0) = polygon[i];
            let (x1, y1) = polygon[i + 1];
            twice += x0 * y1 - x1 * y0;
        }
        let (x0, y0) = polygon[n - 1];
        let (x1, y1) = polygon[0];
        twice += x0 * y1 - x1 * y0;
        twice / 2.0
    }
}
