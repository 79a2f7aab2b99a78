#[cfg(test)]
#[path = "clamp_test.rs"]
mod clamp_test;

/// Limit `value` to the range spanned by `min` and `max`.
///
/// The bounds may arrive in either order: when `min > max` they are swapped,
/// so degenerate ranges still produce a well-defined result. A NaN `value`
/// resolves to the lower bound.
#[must_use]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    if value.is_nan() {
        return lo;
    }
    value.max(lo).min(hi)
}
