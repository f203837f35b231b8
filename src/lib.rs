//! *Latitude-longitude grids in oblique stereographic projection*.
//!
//! A graticule (meridians and parallels) is carried from an ellipsoid of
//! revolution onto an auxiliary sphere, and from there onto a plane by a
//! stereographic projection centered at an arbitrary point. The point is
//! to visualize how a choice of ellipsoid and ellipsoid-to-sphere mapping
//! distorts the grid around the chosen center.
//!
//! The pipeline
//! ============
//!
//! [`Ellipsoid`] → [`SphereProjector`] → [`StereographicProjector`] →
//! [`GridBuilder`] → [`Grid`]
//!
//! ```
//! use stereogrid::prelude::*;
//!
//! let ellps = Ellipsoid::named("Krassovsky_1940")?;
//! let sphere = SphereProjector::new(SphereProjection::Equidistant, &ellps, 55.);
//! let plane = StereographicProjector::new(sphere, 55., 37.);
//! assert_eq!(plane.project_to_plane(55., 37.)?, Coor2D::raw(0., 0.));
//!
//! let grid = GridBuilder::new(plane, 10., 10., 55., 37.)?.build();
//! assert!(grid.equator().is_some());
//! # Ok::<(), stereogrid::Error>(())
//! ```
//!
//! All angles on the public surface are in degrees. Plane coordinates are in
//! the units of the ellipsoid axes (usually meters).

pub mod ellipsoid;
pub mod grid;
pub mod math;
pub mod sphere;
pub mod stereo;

pub use crate::ellipsoid::Ellipsoid;
pub use crate::ellipsoid::EllipsoidRegistry;
pub use crate::grid::Coor2D;
pub use crate::grid::Grid;
pub use crate::grid::GridBuilder;
pub use crate::sphere::SphereProjection;
pub use crate::sphere::SphereProjector;
pub use crate::stereo::StereographicProjector;

/// Preamble for application programs
pub mod prelude {
    pub use crate::ellipsoid::Ellipsoid;
    pub use crate::ellipsoid::EllipsoidRegistry;
    pub use crate::grid::Coor2D;
    pub use crate::grid::Family;
    pub use crate::grid::Grid;
    pub use crate::grid::GridBuilder;
    pub use crate::grid::Label;
    pub use crate::grid::Polyline;
    pub use crate::grid::Sample;
    pub use crate::grid::TableEntry;
    pub use crate::math::angular::dms_str;
    pub use crate::sphere::SphereProjection;
    pub use crate::sphere::SphereProjector;
    pub use crate::stereo::SphericalPolar;
    pub use crate::stereo::StereographicProjector;
    pub use crate::Error;
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("i/o error")]
    Io(#[from] std::io::Error),

    #[error("syntax error: {0}")]
    Syntax(String),

    #[error("{0} not found{1}")]
    NotFound(String, String),

    #[error("missing required parameter {0}")]
    MissingParam(String),

    #[error("malformed value for parameter {0}: {1}")]
    BadParam(String, String),

    #[error("cannot project ({latitude}, {longitude}): pole is reached")]
    PoleReached { latitude: f64, longitude: f64 },
}

/// Literature, that has been useful in designing and implementing this library.
pub enum Bibliography {
    /// L. Krüger (1912). Konforme Abbildung des Erdellipsoids in der Ebene.
    /// Royal Prussian Geodetic Institute, New Series 52.
    /// [DOI](https://dx.doi.org/10.2312/GFZ.b103-krueger28).
    Kru12,

    /// J.P. Snyder (1987): *Map Projections: A Working Manual*.
    /// U.S. Geological Survey Professional Paper 1395.
    /// [DOI](https://doi.org/10.3133/pp1395)
    Sny87,

    /// L.M. Bugayevskiy and J.P. Snyder (1995): *Map Projections: A Reference Manual*.
    /// Taylor & Francis, London. Source of the Gauss and Mollweide
    /// ellipsoid-to-sphere series.
    Bug95,

    /// B. R. Bowring (1983): *New equations for meridional distance*.
    /// Bull. Geodesique 57, 374–381.
    /// [DOI](https://doi.org/10.1007/BF02520940).
    Bow83,
}
