//! Ground-track footprint projections on spherical planetary bodies.
//!
//! Instrument footprints arrive as closed rings of (west longitude, latitude)
//! vertices; this crate maps them to planar metres under a handful of map
//! projections and repairs the degeneracies that periodic maps introduce:
//! rings that encircle a pole are bridged through the map edge, rings that
//! straddle the antimeridian are split in two, and orthographic rings are
//! clipped against the limb.
//!
//! ```
//! use groundtrack::body::TITAN;
//! use groundtrack::proj::equirectangular::Equirectangular;
//! use groundtrack::{GeoPath, Projection};
//!
//! let proj = Equirectangular::on_body(&TITAN);
//! let footprint = GeoPath::new(vec![(10.0, 10.0), (350.0, 10.0), (350.0, -10.0), (10.0, -10.0)]);
//! let planar = proj.forward_path(&footprint)?;
//! assert_eq!(planar.polygons().len(), 2); // split at the antimeridian
//! # Ok::<(), groundtrack::ProjError>(())
//! ```

pub mod body;
pub mod error;
pub mod great_circle;
pub mod path;
pub mod proj;
pub mod sphere;

pub use body::Body;
pub use error::ProjError;
pub use path::{GeoPath, PathCode, PlanarPath};
pub use proj::equirectangular::{Equirectangular, EquirectangularGc};
pub use proj::mollweide::Mollweide;
pub use proj::orthographic::Orthographic;
pub use proj::sky::Sky;
pub use proj::stereographic::Stereographic;
pub use proj::Projection;
