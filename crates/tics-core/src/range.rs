// File: crates/tics-core/src/range.rs
// Summary: Axis endpoint normalization and epsilon padding.

use crate::error::{Result, TicsError};

/// Ordered axis interval; `min <= max` always holds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    /// Build from endpoints in either order. Rejects NaN and infinities.
    pub fn new(x1: f64, x2: f64) -> Result<Self> {
        if !x1.is_finite() || !x2.is_finite() {
            return Err(TicsError::NonFiniteRange { x1, x2 });
        }
        let (min, max) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        Ok(Self { min, max })
    }

    #[inline]
    pub fn span(&self) -> f64 { self.max - self.min }

    #[inline]
    pub fn is_degenerate(&self) -> bool { self.min == self.max }

    /// Widen both ends by `span * epsilon` so tics on an endpoint survive rounding.
    pub fn padded(&self, epsilon: f64) -> Self {
        let pad = self.span() * epsilon;
        Self { min: self.min - pad, max: self.max + pad }
    }

    #[inline]
    pub fn contains(&self, x: f64) -> bool { x >= self.min && x <= self.max }
}
