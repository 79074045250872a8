//! Numerically careful primitives for probability-mass arithmetic.

/// True mathematical modulo: the result is always in `[0, modulus)`.
///
/// Differs from the `%` remainder for negative values:
/// `floor_mod(-1, 5) == 4` while `-1 % 5 == -1`.
///
/// Panics when `modulus` is zero, matching integer division.
pub fn floor_mod(value: i64, modulus: usize) -> usize {
    value.rem_euclid(modulus as i64) as usize
}

/// Scale `values` so they sum to 1, in place.
///
/// Returns the pre-normalization sum on success. Returns `None` and leaves
/// `values` untouched when the sum is zero, negative, or non-finite, because
/// dividing by such a sum would write NaN or a non-distribution.
pub fn normalize_in_place(values: &mut [f64]) -> Option<f64> {
    let sum: f64 = values.iter().sum();
    if !sum.is_finite() || sum <= 0.0 {
        return None;
    }
    for v in values.iter_mut() {
        *v /= sum;
    }
    Some(sum)
}

/// Absolute-difference closeness check for test assertions and guards.
pub fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    if a.is_nan() || b.is_nan() {
        return false;
    }
    (a - b).abs() <= tol
}
