// File: crates/tics-core/src/float.rs
// Summary: Floating-point helpers shared by the tic layout code.

/// True when `a` and `b` differ by no more than `tolerance` relative to the larger magnitude.
#[inline]
pub fn almost_equal(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= a.abs().max(b.abs()) * tolerance
}

/// Smallest multiple of `step` not less than `x`. Never returns negative zero.
#[inline]
pub fn ceil_multiple(x: f64, step: f64) -> f64 {
    (x / step).ceil() * step + 0.0
}

/// Number of points `first, first + step, ...` that stay at or below `last`.
///
/// Saturates at `usize::MAX`; callers bound the ratio before relying on the count.
#[inline]
pub fn count_to(first: f64, last: f64, step: f64) -> usize {
    let n = 1.0 + ((last - first) / step).floor();
    if n.is_finite() && n > 0.0 { n as usize } else { 0 }
}

/// `10^exponent`, computed with `powf` so results are exact wherever `pow` is.
#[inline]
pub fn pow10(exponent: f64) -> f64 {
    10f64.powf(exponent)
}

/// Largest power of ten not greater than `|x|`. Falls back to 1 for zero and
/// for magnitudes whose power of ten is not a normal number.
pub fn floor_pow10(x: f64) -> f64 {
    let a = x.abs();
    if a == 0.0 || !a.is_finite() { return 1.0; }
    let p = pow10(a.log10().floor());
    if p.is_normal() { p } else { 1.0 }
}
