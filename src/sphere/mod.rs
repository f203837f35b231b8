//! Ellipsoid-to-sphere projections.
//!
//! Each projection maps geodetic latitude (and, for one of them, longitude)
//! on the ellipsoid to latitude and longitude on an auxiliary sphere of a
//! projection specific radius, using truncated series expansions. The set
//! of projections is closed: [`SphereProjection`] is the tag, and
//! [`SphereProjector`] the instantiated projection.

mod equal_area;
mod equidistant;
mod gauss;
mod mollweide;

pub use equal_area::EqualArea;
pub use equidistant::Equidistant;
pub use gauss::GaussFirst;
pub use gauss::GaussSecond;
pub use mollweide::Mollweide;

use crate::Ellipsoid;
use crate::Error;
use log::debug;
use std::fmt;
use std::str::FromStr;

/// The capability shared by all the ellipsoid-to-sphere projections.
pub trait ToSphere {
    /// The radius of the auxiliary sphere
    fn radius(&self) -> f64;

    /// Ellipsoidal (latitude, longitude) to spherical (latitude, longitude),
    /// all in degrees. The raw series value: not clamped to ±90°.
    fn project(&self, latitude: f64, longitude: f64) -> (f64, f64);
}

/// Tag selecting one of the five ellipsoid-to-sphere projections
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SphereProjection {
    /// Conformal, after Mollweide
    #[default]
    Mollweide,
    /// Conformal, Gauss' first method
    GaussFirst,
    /// Conformal, Gauss' second method
    GaussSecond,
    /// Equal area
    EqualArea,
    /// Equidistant along the meridians
    Equidistant,
}

impl SphereProjection {
    pub const ALL: [SphereProjection; 5] = [
        SphereProjection::Mollweide,
        SphereProjection::GaussFirst,
        SphereProjection::GaussSecond,
        SphereProjection::EqualArea,
        SphereProjection::Equidistant,
    ];

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            SphereProjection::Mollweide => "mollweide",
            SphereProjection::GaussFirst => "gauss-first",
            SphereProjection::GaussSecond => "gauss-second",
            SphereProjection::EqualArea => "equal-area",
            SphereProjection::Equidistant => "equidistant",
        }
    }
}

impl fmt::Display for SphereProjection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SphereProjection {
    type Err = Error;

    fn from_str(name: &str) -> Result<SphereProjection, Error> {
        let wanted = name.trim().to_lowercase().replace('_', "-");
        SphereProjection::ALL
            .into_iter()
            .find(|p| p.name() == wanted)
            .ok_or_else(|| {
                Error::NotFound(name.to_string(), ": unknown sphere projection".to_string())
            })
    }
}

/// An instantiated ellipsoid-to-sphere projection, with all its
/// coefficients precomputed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SphereProjector {
    Mollweide(Mollweide),
    GaussFirst(GaussFirst),
    GaussSecond(GaussSecond),
    EqualArea(EqualArea),
    Equidistant(Equidistant),
}

impl SphereProjector {
    /// Instantiate `kind` for `ellps`, with reference latitude `phi0` (degrees).
    /// Only the Gauss projections depend on `phi0`.
    #[must_use]
    pub fn new(kind: SphereProjection, ellps: &Ellipsoid, phi0: f64) -> SphereProjector {
        let projector = match kind {
            SphereProjection::Mollweide => SphereProjector::Mollweide(Mollweide::new(ellps)),
            SphereProjection::GaussFirst => {
                SphereProjector::GaussFirst(GaussFirst::new(ellps, phi0))
            }
            SphereProjection::GaussSecond => {
                SphereProjector::GaussSecond(GaussSecond::new(ellps, phi0))
            }
            SphereProjection::EqualArea => SphereProjector::EqualArea(EqualArea::new(ellps)),
            SphereProjection::Equidistant => {
                SphereProjector::Equidistant(Equidistant::new(ellps, 0.))
            }
        };
        debug!("{kind} sphere projection: phi0 = {phi0}, R = {}", projector.radius());
        projector
    }

    #[must_use]
    pub fn kind(&self) -> SphereProjection {
        match self {
            SphereProjector::Mollweide(_) => SphereProjection::Mollweide,
            SphereProjector::GaussFirst(_) => SphereProjection::GaussFirst,
            SphereProjector::GaussSecond(_) => SphereProjection::GaussSecond,
            SphereProjector::EqualArea(_) => SphereProjection::EqualArea,
            SphereProjector::Equidistant(_) => SphereProjection::Equidistant,
        }
    }

    fn inner(&self) -> &dyn ToSphere {
        match self {
            SphereProjector::Mollweide(p) => p,
            SphereProjector::GaussFirst(p) => p,
            SphereProjector::GaussSecond(p) => p,
            SphereProjector::EqualArea(p) => p,
            SphereProjector::Equidistant(p) => p,
        }
    }

    /// The radius of the auxiliary sphere
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.inner().radius()
    }

    /// Ellipsoidal (latitude, longitude) to spherical (latitude, longitude),
    /// all in degrees. The spherical latitude is clamped to [-90, 90]: the
    /// Gauss series are local expansions around `phi0`, and overshoot the
    /// poles when evaluated far from it.
    #[must_use]
    pub fn project(&self, latitude: f64, longitude: f64) -> (f64, f64) {
        let (phi, lam) = self.inner().project(latitude, longitude);
        (phi.clamp(-90., 90.), lam)
    }
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn tags() -> Result<(), Error> {
        for kind in SphereProjection::ALL {
            assert_eq!(kind.to_string().parse::<SphereProjection>()?, kind);
        }
        assert_eq!(
            "Gauss_Second".parse::<SphereProjection>()?,
            SphereProjection::GaussSecond
        );
        assert!("mercator".parse::<SphereProjection>().is_err());
        assert_eq!(SphereProjection::default(), SphereProjection::Mollweide);

        let ellps = Ellipsoid::default();
        for kind in SphereProjection::ALL {
            assert_eq!(SphereProjector::new(kind, &ellps, 30.).kind(), kind);
        }
        Ok(())
    }

    #[test]
    fn latitude_bounds() {
        let ellps = Ellipsoid::default();
        for kind in SphereProjection::ALL {
            for phi0 in [0., 45., -60.] {
                let p = SphereProjector::new(kind, &ellps, phi0);
                for i in -180..=180 {
                    let phi = f64::from(i) * 0.5;
                    let (lat, _) = p.project(phi, 0.);
                    assert!(lat.abs() <= 90., "{kind}, phi0 = {phi0}: {phi} -> {lat}");
                }
            }
        }
    }

    #[test]
    fn overshoot_is_clamped() {
        // Gauss' first method, evaluated at the far pole, overshoots by ~0.29°
        let ellps = Ellipsoid::default();
        let g1 = GaussFirst::new(&ellps, 0.);
        assert_float_eq!(g1.project(-90., 0.).0, -90.289_721_182_801_98, abs <= 1e-9);
        let p = SphereProjector::GaussFirst(g1);
        assert_eq!(p.project(-90., 0.).0, -90.);
    }

    #[test]
    fn near_spherical_identity() -> Result<(), Error> {
        // With vanishing eccentricity, the series corrections vanish too
        let ellps = Ellipsoid::new(6_371_000., 6_370_999., 0., 0)?;
        for kind in SphereProjection::ALL {
            let p = SphereProjector::new(kind, &ellps, 30.);
            for i in -8..=8 {
                let phi = f64::from(i) * 10.;
                let (lat, lon) = p.project(phi, 100.);
                assert_float_eq!(lat, phi, abs <= 1e-4);
                assert_float_eq!(lon, 100., abs <= 1e-4);
            }
        }

        // ... and for the true sphere, they are gone
        let sphere = Ellipsoid::new(6_371_000., 6_371_000., 0., 0)?;
        for kind in SphereProjection::ALL {
            let p = SphereProjector::new(kind, &sphere, 30.);
            assert_float_eq!(p.radius(), 6_371_000., abs <= 1e-6);
            for phi in [-89., -45., 0., 12.5, 60.] {
                let (lat, lon) = p.project(phi, -75.);
                assert_float_eq!(lat, phi, abs <= 1e-9);
                assert_float_eq!(lon, -75., abs <= 1e-9);
            }
        }
        Ok(())
    }
}
