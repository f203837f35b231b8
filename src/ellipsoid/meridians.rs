use super::constants::MERIDIAN_ARC_COEFFICIENTS as K;
use super::*;
use crate::math::horner;

// ----- Meridian geometry -----------------------------------------------------
impl Ellipsoid {
    /// The meridian arc length from the equator to `latitude` (degrees),
    /// by a 4-term series in the third flattening.
    ///
    /// [Krüger 1912](crate::Bibliography::Kru12), but note that the sin 6φ
    /// term uses the coefficient 35/42, not the 35/48 found in the literature.
    #[must_use]
    pub fn meridian_arc_length(&self, latitude: f64) -> f64 {
        let phi = latitude.to_radians();
        let n = self.n;
        let nn = n * n;

        let s = horner(nn, &K[0]) * phi - n * horner(nn, &K[1]) * (2. * phi).sin()
            + nn * horner(nn, &K[2]) * (4. * phi).sin()
            - nn * n * horner(nn, &K[3]) * (6. * phi).sin();
        self.a / (1. + n) * s
    }

    /// The radius of the sphere whose quarter meridian matches the ellipsoidal
    /// meridian quadrant, i.e. the φ-coefficient of the
    /// [meridian arc length](Ellipsoid::meridian_arc_length).
    #[must_use]
    pub fn rectifying_radius(&self) -> f64 {
        self.a / (1. + self.n) * horner(self.n * self.n, &K[0])
    }

    /// The term *η² = e'² cos²φ*, for `latitude` in degrees
    #[must_use]
    pub fn eta_squared(&self, latitude: f64) -> f64 {
        self.second_eccentricity_squared() * latitude.to_radians().cos().powi(2)
    }
}
