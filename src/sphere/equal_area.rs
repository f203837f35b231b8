//! Equal area projection of the ellipsoid onto the sphere of the same
//! surface area, by the O(e⁴) authalic latitude series.
//! [Snyder 1987](crate::Bibliography::Sny87) eq. (3-18)
use super::ToSphere;
use crate::Ellipsoid;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EqualArea {
    radius: f64,
    // Coefficients of sin 2φ and sin 4φ
    a1: f64,
    b1: f64,
}

impl EqualArea {
    #[must_use]
    pub fn new(ellps: &Ellipsoid) -> EqualArea {
        let es = ellps.eccentricity_squared();
        let e4 = es * es;
        EqualArea {
            radius: ellps.semimajor_axis() * (1. - es / 6. - 17. / 360. * e4),
            a1: es / 3. + 31. / 180. * e4,
            b1: 17. / 360. * e4,
        }
    }
}

impl ToSphere for EqualArea {
    fn radius(&self) -> f64 {
        self.radius
    }

    fn project(&self, latitude: f64, longitude: f64) -> (f64, f64) {
        let phi = latitude.to_radians();
        let beta = phi - self.a1 * (2. * phi).sin() + self.b1 * (4. * phi).sin();
        (beta.to_degrees(), longitude)
    }
}

// ----- Tests ---------------------------------------------------------------------
