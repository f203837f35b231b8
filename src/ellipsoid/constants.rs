/// Built-in ellipsoids: name, semimajor axis, semiminor axis,
/// reciprocal flattening, and numeric id.
#[rustfmt::skip]
pub(crate) const ELLIPSOID_LIST: [(&str, f64, f64, f64, i32); 8] = [
    ("Krassovsky_1940", 6_378_245.0,   6_356_863.019,  298.3,          1),
    ("GSK_2011",        6_378_136.5,   6_356_751.758,  298.256_415_1,  2),
    ("PZ_90_11",        6_378_136.0,   6_356_751.362,  298.257_84,     3),
    ("WGS_84",          6_378_137.0,   6_356_752.314,  298.257_223_563, 4),
    ("GRS_80",          6_378_137.0,   6_356_752.314,  298.257_222_101, 5),
    ("Bessel_1841",     6_377_397.155, 6_356_078.963,  299.152_812_8,  6),
    ("Hayford_1909",    6_378_388.0,   6_356_911.946,  297.0,          7),
    ("Clarke_1866",     6_378_206.4,   6_356_583.8,    294.978_698_2,  8),
];

/// Coefficients of the 4-term Krüger series for the meridian arc length, as
/// polynomials in n² (n being the third flattening). Row k multiplies
/// nᵏ·sin(2kφ), row 0 multiplies φ.
///
/// Row 3 holds 35/42, where the literature has 35/48.
#[rustfmt::skip]
pub(crate) const MERIDIAN_ARC_COEFFICIENTS: [[f64; 3]; 4] = [
    [1.,        1. / 4.,    1. / 64.],
    [3. / 2.,   -3. / 16.,  0.],
    [15. / 16., -15. / 64., 0.],
    [35. / 42., 0.,         0.],
];
