//! Oblique stereographic projection of the auxiliary sphere onto the plane.
//!
//! The ellipsoidal coordinates are first carried to the auxiliary sphere by
//! a [`SphereProjector`]. On the sphere, each point is then described by its
//! zenith distance *z* and azimuth *a* as seen from the projection center,
//! and mapped to the plane by the polar stereographic formula
//! *ρ = 2R tan(z/2)*, *x = ρ cos a*, *y = ρ sin a*.
//! [Snyder 1987](crate::Bibliography::Sny87) pp. 154-163.
//!
//! The projection has two singular points: the center, which maps exactly to
//! the origin, and its antipode, which maps to infinity and is reported as
//! [`Error::PoleReached`].
use crate::math::angular::normalize_longitude;
use crate::Coor2D;
use crate::Error;
use crate::SphereProjector;
use log::trace;
use std::f64::consts::PI;

// Center latitudes closer to the equator than this are nudged
const EQUATOR_EPS: f64 = 1e-9;
const EQUATOR_NUDGE: f64 = 1e-10;

// Coincidence tolerance, degrees for angles and radians for the azimuth
const EPS10: f64 = 1e-10;

/// Zenith distance and azimuth of a point, as seen from the projection center
/// on the auxiliary sphere. Both in degrees.
#[derive(Debug, Default, PartialEq, Copy, Clone)]
pub struct SphericalPolar {
    pub zenith_distance: f64,
    pub azimuth: f64,
}

#[derive(Debug, PartialEq, Copy, Clone)]
pub struct StereographicProjector {
    sphere: SphereProjector,
    // The center, on the sphere, in degrees
    phi0: f64,
    lam0: f64,
    rad_phi0: f64,
}

impl StereographicProjector {
    /// A stereographic projection via `sphere`, centered at the ellipsoidal
    /// coordinates (`phi0`, `lam0`), in degrees.
    #[must_use]
    pub fn new(sphere: SphereProjector, phi0: f64, lam0: f64) -> StereographicProjector {
        let phi0 = if phi0.abs() < EQUATOR_EPS {
            trace!("Center latitude {phi0} nudged to {EQUATOR_NUDGE}");
            EQUATOR_NUDGE
        } else {
            phi0
        };

        let (phi0, lam0) = sphere.project(phi0, lam0);
        StereographicProjector {
            sphere,
            phi0,
            lam0,
            rad_phi0: phi0.to_radians(),
        }
    }

    /// The projection center on the auxiliary sphere, as (latitude, longitude) in degrees
    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        (self.phi0, self.lam0)
    }

    #[must_use]
    pub fn sphere(&self) -> &SphereProjector {
        &self.sphere
    }

    /// The radius of the auxiliary sphere
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.sphere.radius()
    }

    /// Zenith distance and azimuth of the ellipsoidal point (`phi`, `lam`)
    #[must_use]
    pub fn project_to_spherical(&self, phi: f64, lam: f64) -> SphericalPolar {
        let (phi, lam) = self.sphere.project(phi, lam);
        let (z, a) = self.spherical_polar(phi, lam);
        SphericalPolar {
            zenith_distance: z.to_degrees(),
            azimuth: a.to_degrees(),
        }
    }

    /// Plane coordinates of the ellipsoidal point (`phi`, `lam`)
    pub fn project_to_plane(&self, phi: f64, lam: f64) -> Result<Coor2D, Error> {
        self.project_to_plane_scaled(phi, lam, 1.)
    }

    /// Plane coordinates of the ellipsoidal point (`phi`, `lam`), divided by
    /// the scale denominator `m`
    pub fn project_to_plane_scaled(&self, phi: f64, lam: f64, m: f64) -> Result<Coor2D, Error> {
        let (sphi, slam) = self.sphere.project(phi, lam);

        let dlam = normalize_longitude(slam - self.lam0).abs();
        let lam_is_0 = dlam < EPS10;
        let lam_is_180 = (dlam - 180.).abs() < EPS10;

        if (-sphi - self.phi0).abs() < EPS10 && lam_is_180 {
            return Err(Error::PoleReached {
                latitude: phi,
                longitude: lam,
            });
        }
        if (sphi - self.phi0).abs() < EPS10 && lam_is_0 {
            return Ok(Coor2D::raw(0., 0.));
        }

        let (z, a) = self.spherical_polar(sphi, slam);
        let rho = 2. * self.sphere.radius() * (z / 2.).tan();
        Ok(Coor2D::raw(rho * a.cos(), rho * a.sin()).scale_down(m))
    }

    // Zenith distance and azimuth (radians) of the spherical point (phi, lam) (degrees)
    fn spherical_polar(&self, phi: f64, lam: f64) -> (f64, f64) {
        let mut dist = normalize_longitude(lam - self.lam0);
        if dist > 180. {
            dist -= 180.;
        }
        let dlam = dist.to_radians();

        let (sin_phi, cos_phi) = phi.to_radians().sin_cos();
        let (sin_phi0, cos_phi0) = self.rad_phi0.sin_cos();
        let (sin_dlam, cos_dlam) = dlam.sin_cos();

        let cos_z = sin_phi * sin_phi0 + cos_phi * cos_phi0 * cos_dlam;
        let z = cos_z.clamp(-1., 1.).acos();

        let tan_a = cos_phi * sin_dlam / (sin_phi * cos_phi0 - cos_phi * sin_phi0 * cos_dlam);
        let a = self.direction(tan_a.atan(), tan_a, phi, lam);
        (z, a)
    }

    // Resolve the quadrant of the azimuth. When the tangent vanishes, the
    // point is on the central meridian or its extension across the pole,
    // and the azimuth is either 0 or π
    fn direction(&self, rad_a: f64, tan_a: f64, phi: f64, lam: f64) -> f64 {
        let close = rad_a.abs() < EPS10;
        let on_central_meridian = (lam - self.lam0).abs() < EPS10;

        if !close {
            if tan_a < 0. {
                return PI - rad_a;
            }
            return rad_a;
        }

        if self.phi0 >= 0. {
            if self.phi0 > phi && (phi < -self.phi0 || on_central_meridian) {
                return PI;
            }
        } else if self.phi0 >= phi || (phi < -self.phi0 && !on_central_meridian) {
            return PI;
        }
        rad_a
    }
}

// ----- Tests ---------------------------------------------------------------------
