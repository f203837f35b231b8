/// Evaluate Σ cᵢ · xⁱ using Horner's scheme
pub fn horner(arg: f64, coefficients: &[f64]) -> f64 {
    let mut coefficients = coefficients.iter().rev();
    let Some(first) = coefficients.next() else {
        return 0.;
    };
    let mut value = *first;
    for c in coefficients {
        value = value.mul_add(arg, *c);
    }
    value
}

/// The values `start + i·step`, for i = 0, 1, 2 ..., strictly below `stop`.
///
/// Each value is computed from `start` directly, rather than by repeated
/// addition, so the same (start, step) pair always yields bit-identical
/// values. Empty unless `step > 0`.
pub fn frange(start: f64, stop: f64, step: f64) -> impl Iterator<Item = f64> {
    let valid = step > 0. && step.is_finite();
    (0_u32..)
        .map(move |i| start + f64::from(i) * step)
        .take_while(move |v| valid && *v < stop)
}

// ----- Tests ---------------------------------------------------------------------
