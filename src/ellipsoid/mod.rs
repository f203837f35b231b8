mod constants;
mod meridians;
mod registry;

pub use registry::EllipsoidRegistry;

use crate::Error;
use log::warn;

/// An ellipsoid of revolution, given by both of its semi-axes.
///
/// All derived constants are computed from the axes. The reciprocal
/// flattening is carried along as given, for reference only.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    a: f64,
    b: f64,
    rf: f64,
    id: i32,
    // Derived constants
    e: f64,
    e2: f64,
    n: f64,
}

/// Krassovsky 1940 is the default ellipsoid.
impl Default for Ellipsoid {
    fn default() -> Ellipsoid {
        let (_, a, b, rf, id) = constants::ELLIPSOID_LIST[0];
        Ellipsoid::derive(a, b, rf, id)
    }
}

/// Constructors for `Ellipsoid`
impl Ellipsoid {
    /// User defined ellipsoid. Fails unless `a >= b > 0`, both finite, and
    /// the reciprocal flattening is finite and non-negative (0 means sphere).
    pub fn new(
        semimajor_axis: f64,
        semiminor_axis: f64,
        inverse_flattening: f64,
        id: i32,
    ) -> Result<Ellipsoid, Error> {
        let (a, b, rf) = (semimajor_axis, semiminor_axis, inverse_flattening);
        if !(a.is_finite() && a > 0.) {
            warn!("Ellipsoid: Bad semimajor axis {a}");
            return Err(Error::BadParam("a".to_string(), a.to_string()));
        }
        if !(b.is_finite() && b > 0.) {
            warn!("Ellipsoid: Bad semiminor axis {b}");
            return Err(Error::BadParam("b".to_string(), b.to_string()));
        }
        if b > a {
            warn!("Ellipsoid: Semiminor axis {b} exceeds semimajor axis {a}");
            return Err(Error::BadParam("b".to_string(), format!("{b} > a = {a}")));
        }
        if !(rf.is_finite() && rf >= 0.) {
            warn!("Ellipsoid: Bad reciprocal flattening {rf}");
            return Err(Error::BadParam("F1".to_string(), rf.to_string()));
        }
        Ok(Ellipsoid::derive(a, b, rf, id))
    }

    /// Predefined ellipsoid from the built-in table
    pub fn named(name: &str) -> Result<Ellipsoid, Error> {
        EllipsoidRegistry::builtin().get(name)
    }

    fn derive(a: f64, b: f64, rf: f64, id: i32) -> Ellipsoid {
        let le = (a * a - b * b).sqrt();
        Ellipsoid {
            a,
            b,
            rf,
            id,
            e: le / a,
            e2: le / b,
            n: (a - b) / (a + b),
        }
    }
}

impl Ellipsoid {
    // ----- Size and identity -----------------------------------------------------

    /// The semimajor axis, *a*
    #[must_use]
    pub fn semimajor_axis(&self) -> f64 {
        self.a
    }

    /// The semiminor axis, *b*
    #[must_use]
    pub fn semiminor_axis(&self) -> f64 {
        self.b
    }

    /// The reciprocal flattening, as given at construction
    #[must_use]
    pub fn inverse_flattening(&self) -> f64 {
        self.rf
    }

    /// The flattening, *f = 1/rf*. EPSG convention: zero reciprocal
    /// flattening indicates zero flattening
    #[must_use]
    pub fn flattening(&self) -> f64 {
        if self.rf == 0. {
            return 0.;
        }
        1. / self.rf
    }

    #[must_use]
    pub fn id(&self) -> i32 {
        self.id
    }

    // ----- Eccentricities and flattenings ----------------------------------------

    /// The eccentricity *e = sqrt(a² - b²) / a*
    #[must_use]
    pub fn eccentricity(&self) -> f64 {
        self.e
    }

    /// The squared eccentricity *e²*
    #[must_use]
    pub fn eccentricity_squared(&self) -> f64 {
        self.e * self.e
    }

    /// The second eccentricity *e' = sqrt(a² - b²) / b*
    #[must_use]
    pub fn second_eccentricity(&self) -> f64 {
        self.e2
    }

    /// The squared second eccentricity *e'²*
    #[must_use]
    pub fn second_eccentricity_squared(&self) -> f64 {
        self.e2 * self.e2
    }

    /// The third flattening, *n = (a - b) / (a + b)*
    #[must_use]
    pub fn third_flattening(&self) -> f64 {
        self.n
    }

    // ----- Curvatures ------------------------------------------------------------

    /// The meridian radius of curvature, *M*, at `latitude` (degrees)
    #[must_use]
    pub fn meridian_radius_of_curvature(&self, latitude: f64) -> f64 {
        let es = self.eccentricity_squared();
        let w2 = 1. - es * latitude.to_radians().sin().powi(2);
        self.a * (1. - es) / (w2 * w2 * w2).sqrt()
    }

    /// The radius of curvature in the prime vertical, *N*, at `latitude` (degrees)
    #[must_use]
    pub fn prime_vertical_radius_of_curvature(&self, latitude: f64) -> f64 {
        let es = self.eccentricity_squared();
        self.a / (1. - es * latitude.to_radians().sin().powi(2)).sqrt()
    }

    /// The Gaussian mean radius, *R = sqrt(M·N)*, at `latitude` (degrees)
    #[must_use]
    pub fn gaussian_mean_radius(&self, latitude: f64) -> f64 {
        (self.meridian_radius_of_curvature(latitude)
            * self.prime_vertical_radius_of_curvature(latitude))
        .sqrt()
    }
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn constructors() -> Result<(), Error> {
        let ellps = Ellipsoid::named("Krassovsky_1940")?;
        assert_eq!(ellps.semimajor_axis(), 6_378_245.0);
        assert_eq!(ellps.semiminor_axis(), 6_356_863.019);
        assert_eq!(ellps.flattening(), 1. / 298.3);
        assert_eq!(ellps.id(), 1);
        assert_eq!(ellps, Ellipsoid::default());

        assert!(Ellipsoid::named("Krassowsky").is_err());

        // a < b, non-positive, and non-finite axes are rejected
        assert!(matches!(
            Ellipsoid::new(6_356_863., 6_378_245., 298.3, 0),
            Err(Error::BadParam(..))
        ));
        assert!(Ellipsoid::new(6_378_245., 0., 298.3, 0).is_err());
        assert!(Ellipsoid::new(-1., -2., 298.3, 0).is_err());
        assert!(Ellipsoid::new(f64::NAN, 6_356_863., 298.3, 0).is_err());
        assert!(Ellipsoid::new(6_378_245., 6_356_863., f64::INFINITY, 0).is_err());
        assert!(Ellipsoid::new(6_378_245., 6_356_863., -298.3, 0).is_err());
        Ok(())
    }

    #[test]
    fn shape() -> Result<(), Error> {
        let ellps = Ellipsoid::named("Krassovsky_1940")?;
        assert_float_eq!(ellps.eccentricity(), 0.081_813_333_583_468_03, abs <= 1e-15);
        assert_float_eq!(
            ellps.second_eccentricity(),
            0.082_088_521_382_701_66,
            abs <= 1e-15
        );
        assert_float_eq!(
            ellps.third_flattening(),
            0.001_678_979_162_807_184,
            abs <= 1e-15
        );
        Ok(())
    }

    #[test]
    fn sphere() -> Result<(), Error> {
        // The degenerate a == b case must not fail, and collapses onto the sphere
        let sphere = Ellipsoid::new(6_371_000., 6_371_000., 0., 0)?;
        assert_eq!(sphere.eccentricity(), 0.);
        assert_eq!(sphere.second_eccentricity(), 0.);
        assert_eq!(sphere.third_flattening(), 0.);
        assert_eq!(sphere.flattening(), 0.);
        for lat in [-90., -45., 0., 30., 90.] {
            assert_eq!(sphere.meridian_radius_of_curvature(lat), 6_371_000.);
            assert_eq!(sphere.prime_vertical_radius_of_curvature(lat), 6_371_000.);
            assert_float_eq!(sphere.gaussian_mean_radius(lat), 6_371_000., abs <= 1e-8);
        }
        Ok(())
    }

    #[test]
    fn curvatures() -> Result<(), Error> {
        let ellps = Ellipsoid::named("Krassovsky_1940")?;
        assert_float_eq!(
            ellps.meridian_radius_of_curvature(0.),
            6_335_552.717_452_81,
            abs <= 1e-6
        );
        assert_float_eq!(
            ellps.prime_vertical_radius_of_curvature(0.),
            6_378_245.,
            abs <= 1e-6
        );
        assert_float_eq!(
            ellps.prime_vertical_radius_of_curvature(45.),
            6_388_944.935_331_285,
            abs <= 1e-6
        );
        assert_float_eq!(
            ellps.gaussian_mean_radius(45.),
            6_378_209.039_925_627,
            abs <= 1e-6
        );

        // At the poles, M and N coincide (the polar radius of curvature, a²/b)
        let c = 6_378_245f64.powi(2) / 6_356_863.019;
        assert_float_eq!(ellps.meridian_radius_of_curvature(90.), c, abs <= 1e-6);
        assert_float_eq!(
            ellps.prime_vertical_radius_of_curvature(-90.),
            c,
            abs <= 1e-6
        );
        Ok(())
    }
}
