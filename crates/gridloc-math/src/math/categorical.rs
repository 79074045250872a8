//! Helpers over categorical distributions stored as flat probability slices.

/// Shannon entropy in nats, with the `0 * ln(0) = 0` convention.
///
/// NaN entries propagate; negative entries make the result meaningless and
/// are the caller's validation problem.
pub fn entropy(probs: &[f64]) -> f64 {
    let mut h = 0.0;
    for &p in probs {
        if p > 0.0 {
            h -= p * p.ln();
        } else if p.is_nan() {
            return f64::NAN;
        }
    }
    h
}

/// Index of the largest entry, ties resolving to the lowest index.
///
/// Returns `None` for an empty slice or when every entry is NaN; NaN
/// entries are never selected otherwise.
pub fn argmax(values: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in values.iter().enumerate() {
        if v.is_nan() {
            continue;
        }
        match best {
            Some((_, b)) if v <= b => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i)
}

/// Sum of absolute differences. Returns NaN when the lengths differ.
pub fn l1_distance(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() {
        return f64::NAN;
    }
    a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()).sum()
}

/// True when every entry is finite and non-negative and the total lies
/// within `tol` of 1.
pub fn is_distribution(probs: &[f64], tol: f64) -> bool {
    if probs.is_empty() {
        return false;
    }
    let mut sum = 0.0;
    for &p in probs {
        if !p.is_finite() || p < 0.0 {
            return false;
        }
        sum += p;
    }
    (sum - 1.0).abs() <= tol
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::stable::approx_eq;

    #[test]
    fn entropy_uniform_is_log_n() {
        let v = [0.25, 0.25, 0.25, 0.25];
        assert!(approx_eq(entropy(&v), 4.0f64.ln(), 1e-12));
    }

    #[test]
    fn entropy_point_mass_is_zero() {
        let v = [0.0, 1.0, 0.0];
        assert!(approx_eq(entropy(&v), 0.0, 1e-12));
    }

    #[test]
    fn entropy_nan_propagates() {
        assert!(entropy(&[0.5, f64::NAN]).is_nan());
    }

    #[test]
    fn argmax_picks_first_of_ties() {
        assert_eq!(argmax(&[0.2, 0.4, 0.4, 0.1]), Some(1));
    }

    #[test]
    fn argmax_empty_is_none() {
        assert_eq!(argmax(&[]), None);
    }

    #[test]
    fn argmax_skips_nan() {
        assert_eq!(argmax(&[0.1, f64::NAN, 0.9]), Some(2));
        assert_eq!(argmax(&[f64::NAN, f64::NAN]), None);
    }

    #[test]
    fn l1_distance_basic() {
        let a = [0.5, 0.5];
        let b = [0.25, 0.75];
        assert!(approx_eq(l1_distance(&a, &b), 0.5, 1e-12));
    }

    #[test]
    fn l1_distance_length_mismatch_is_nan() {
        assert!(l1_distance(&[0.5], &[0.25, 0.75]).is_nan());
    }

    #[test]
    fn is_distribution_accepts_valid() {
        assert!(is_distribution(&[0.3, 0.7], 1e-9));
        assert!(is_distribution(&[1.0], 1e-9));
    }

    #[test]
    fn is_distribution_rejects_bad_inputs() {
        assert!(!is_distribution(&[], 1e-9));
        assert!(!is_distribution(&[0.5, 0.6], 1e-9));
        assert!(!is_distribution(&[-0.1, 1.1], 1e-9));
        assert!(!is_distribution(&[0.5, f64::NAN], 1e-9));
        assert!(!is_distribution(&[0.5, f64::INFINITY], 1e-9));
    }
}
