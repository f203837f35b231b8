#![allow(non_snake_case)] // Textbook notation: N0, R0, P0, ...

// Gauss' conformal projections of the ellipsoid onto the sphere.
//
// Both are series in the normalized meridian arc distance from the
// reference latitude φ0, b = (s - s0)/r, and both are exact at φ0 only:
// far from φ0 they drift, and near the far pole they overshoot ±90°.
// See [Bugayevskiy & Snyder 1995](crate::Bibliography::Bug95).
use super::ToSphere;
use crate::Ellipsoid;

// ----- F I R S T   M E T H O D -------------------------------------------------------

/// Gauss' first method: sphere of radius *N0*, the prime vertical radius of
/// curvature at the reference latitude. Longitudes are kept unchanged.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GaussFirst {
    ellps: Ellipsoid,
    phi0: f64,
    N0: f64,
    s0: f64,
    P03: f64,
    P04: f64,
    P05: f64,
}

impl GaussFirst {
    #[must_use]
    pub fn new(ellps: &Ellipsoid, phi0: f64) -> GaussFirst {
        let N0 = ellps.prime_vertical_radius_of_curvature(phi0);
        let s0 = ellps.meridian_arc_length(phi0);
        let eta02 = ellps.eta_squared(phi0);
        let t2 = phi0.to_radians().tan().powi(2);

        let P03 = eta02 / 6.;
        let P04 = eta02 * phi0.to_radians().tan() / 24. * (3. + 4. * eta02);
        let P05 = eta02 / 120.
            * (4. - 3. * t2 + 3. * eta02 - 24. * eta02 * t2 + 4. * eta02 * eta02
                - 24. * eta02 * eta02 * t2);

        GaussFirst {
            ellps: *ellps,
            phi0,
            N0,
            s0,
            P03,
            P04,
            P05,
        }
    }
}

impl ToSphere for GaussFirst {
    fn radius(&self) -> f64 {
        self.N0
    }

    fn project(&self, latitude: f64, longitude: f64) -> (f64, f64) {
        let b = (self.ellps.meridian_arc_length(latitude) - self.s0) / self.N0;
        let phi = self.phi0.to_radians() + b + self.P03 * b.powi(3)
            - self.P04 * b.powi(4)
            - self.P05 * b.powi(6);
        (phi.to_degrees(), longitude)
    }
}

// ----- S E C O N D   M E T H O D -----------------------------------------------------

/// Gauss' second method: sphere of radius *R0*, the Gaussian mean radius at
/// the reference latitude. Longitudes are scaled by the factor *P0*.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GaussSecond {
    ellps: Ellipsoid,
    phi0: f64,
    R0: f64,
    s0: f64,
    P0: f64,
    P04: f64,
    P05: f64,
}

impl GaussSecond {
    #[must_use]
    pub fn new(ellps: &Ellipsoid, phi0: f64) -> GaussSecond {
        let R0 = ellps.gaussian_mean_radius(phi0);
        let s0 = ellps.meridian_arc_length(phi0);
        let eta02 = ellps.eta_squared(phi0);

        // η0² already holds one factor cos²φ0, so P0 is sqrt(1 + e'² cos⁴φ0)
        let P0 = (1. + eta02 * phi0.to_radians().cos().powi(2)).sqrt();
        let tan_phi01 = phi0.to_radians().tan() / (1. + eta02).sqrt();
        let P04 = eta02 * tan_phi01 / 6.;
        let P05 = eta02 / 30. * (1. - 6. * eta02 * tan_phi01 * tan_phi01);

        GaussSecond {
            ellps: *ellps,
            phi0,
            R0,
            s0,
            P0,
            P04,
            P05,
        }
    }

    /// The longitude scale factor
    #[must_use]
    pub fn longitude_factor(&self) -> f64 {
        self.P0
    }
}

impl ToSphere for GaussSecond {
    fn radius(&self) -> f64 {
        self.R0
    }

    fn project(&self, latitude: f64, longitude: f64) -> (f64, f64) {
        let b = (self.ellps.meridian_arc_length(latitude) - self.s0) / self.R0;
        let phi = self.phi0.to_radians() + b - self.P04 * b.powi(4) - self.P05 * b.powi(5);
        (phi.to_degrees(), self.P0 * longitude)
    }
}

// ----- T E S T S ---------------------------------------------------------------------
