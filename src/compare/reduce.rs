//! Element-wise absolute difference reductions
//!
//! Callers check lengths first; these helpers only walk the common prefix.

/// Sum of `|a[i] - b[i]|`, each difference taken in f32 and accumulated in f64.
///
/// Summation runs in index order. Other backends may reduce in a different
/// order, so only exact-zero results are bit-comparable across them.
pub fn abs_diff_sum(a: &[f32], b: &[f32]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(&a_val, &b_val)| f64::from((a_val - b_val).abs()))
        .sum()
}

/// Largest absolute difference and the index where it occurs.
///
/// Returns `None` for empty input. NaN differences never win the comparison.
pub fn max_abs_diff(a: &[f32], b: &[f32]) -> Option<(usize, f32)> {
    let mut best: Option<(usize, f32)> = None;
    for (i, (&a_val, &b_val)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (a_val - b_val).abs();
        if diff.is_nan() {
            continue;
        }
        if best.map_or(true, |(_, max_diff)| diff > max_diff) {
            best = Some((i, diff));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abs_diff_sum_basic() {
        let a = [1.0f32, 2.0, 3.0];
        let b = [1.5f32, 2.0, 2.0];
        assert_eq!(abs_diff_sum(&a, &b), 1.5);
    }

    #[test]
    fn test_max_abs_diff_picks_first_largest() {
        let a = [0.0f32, 3.0, -1.0, 3.0];
        let b = [0.5f32, 0.0, 1.0, 0.0];
        assert_eq!(max_abs_diff(&a, &b), Some((1, 3.0)));
    }

    #[test]
    fn test_max_abs_diff_empty() {
        assert_eq!(max_abs_diff(&[], &[]), None);
    }

    #[test]
    fn test_max_abs_diff_skips_nan() {
        let a = [f32::NAN, 1.0];
        let b = [0.0f32, 0.25];
        assert_eq!(max_abs_diff(&a, &b), Some((1, 0.75)));
    }
}
