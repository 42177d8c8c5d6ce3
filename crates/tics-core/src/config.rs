// File: crates/tics-core/src/config.rs
// Summary: Tunable policy for range padding, float tolerance and edge cases.

/// Relative padding applied to each end of an axis range.
pub const DEFAULT_EPSILON: f64 = f32::EPSILON as f64;
/// Relative tolerance used when testing whether a spacing is a power of ten.
pub const DEFAULT_TOLERANCE: f64 = 100.0 * f64::EPSILON;
/// Smallest accepted maximum tic count.
pub const MIN_TIC_CEILING: usize = 2;

/// What to do with a zero-width range (`x1 == x2`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DegeneratePolicy {
    /// Lay out a single tic at the endpoint value.
    #[default]
    SingleTic,
    /// Fail with [`crate::TicsError::DegenerateRange`].
    Reject,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TicsConfig {
    pub epsilon: f64,
    pub tolerance: f64,
    /// When true, a maximum tic count below 2 is raised to 2; otherwise it is an error.
    pub clamp_tic_ceiling: bool,
    pub degenerate: DegeneratePolicy,
}

impl TicsConfig {
    pub fn rejecting_degenerate() -> Self {
        Self { degenerate: DegeneratePolicy::Reject, ..Self::default() }
    }

    pub fn strict_ceiling() -> Self {
        Self { clamp_tic_ceiling: false, ..Self::default() }
    }
}

impl Default for TicsConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            tolerance: DEFAULT_TOLERANCE,
            clamp_tic_ceiling: true,
            degenerate: DegeneratePolicy::SingleTic,
        }
    }
}
