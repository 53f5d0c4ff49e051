use thiserror::Error;

/// Errors raised by projections and the path pipeline.
///
/// Out-of-domain *points* (far side of an orthographic view, the anti-origin
/// of a stereographic frame, planar coordinates outside the Mollweide
/// ellipse) are not errors: those come back as `None` from `forward` /
/// `inverse`. Errors are reserved for inputs the pipeline cannot repair.
#[derive(Error, Debug)]
pub enum ProjError {
    #[error("degenerate input: {0}")]
    DegenerateInput(String),

    #[error("footprint crosses the projection seam {crossings} times, cannot untangle")]
    Topology { crossings: usize },

    #[error("antimeridian split left the {side} side with only {count} vertices")]
    DegenerateSplit { side: &'static str, count: usize },

    #[error("latitude solver did not converge for lat {lat}")]
    Convergence { lat: f64 },

    #[error("{0} does not support path transforms")]
    PathUnsupported(&'static str),
}
