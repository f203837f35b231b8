//! Conformal projection of the ellipsoid onto the sphere of radius *a*,
//! by the O(e⁶) conformal latitude series.
//! [Bugayevskiy & Snyder 1995](crate::Bibliography::Bug95)
use super::ToSphere;
use crate::Ellipsoid;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mollweide {
    a: f64,
    // Coefficients of sin 2φ, sin 4φ, sin 6φ
    c2: f64,
    c4: f64,
    c6: f64,
}

impl Mollweide {
    #[must_use]
    pub fn new(ellps: &Ellipsoid) -> Mollweide {
        let es = ellps.eccentricity_squared();
        let (e4, e6) = (es * es, es * es * es);
        Mollweide {
            a: ellps.semimajor_axis(),
            c2: es / 2. + 5. * e4 / 24. + 3. * e6 / 32.,
            c4: 5. / 48. * e4 + 7. / 80. * e6,
            c6: 13. / 480. * e6,
        }
    }
}

impl ToSphere for Mollweide {
    fn radius(&self) -> f64 {
        self.a
    }

    fn project(&self, latitude: f64, longitude: f64) -> (f64, f64) {
        let phi = latitude.to_radians();
        let chi = phi - self.c2 * (2. * phi).sin() + self.c4 * (4. * phi).sin()
            - self.c6 * (6. * phi).sin();
        (chi.to_degrees(), longitude)
    }
}

// ----- Tests ---------------------------------------------------------------------
