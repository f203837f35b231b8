//! Projection of the ellipsoid onto the sphere with the same meridian
//! quadrant, preserving distances along the meridians.
use super::ToSphere;
use crate::Ellipsoid;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Equidistant {
    ellps: Ellipsoid,
    radius: f64,
    // Latitude offset, radians
    c: f64,
}

impl Equidistant {
    /// Equidistant projection, with the spherical latitudes offset by
    /// `offset` degrees.
    #[must_use]
    pub fn new(ellps: &Ellipsoid, offset: f64) -> Equidistant {
        Equidistant {
            ellps: *ellps,
            radius: ellps.rectifying_radius(),
            c: offset.to_radians(),
        }
    }
}

impl ToSphere for Equidistant {
    fn radius(&self) -> f64 {
        self.radius
    }

    fn project(&self, latitude: f64, longitude: f64) -> (f64, f64) {
        let phi = self.ellps.meridian_arc_length(latitude) / self.radius + self.c;
        (phi.to_degrees(), longitude)
    }
}

// ----- Tests ---------------------------------------------------------------------
