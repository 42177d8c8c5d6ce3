// File: crates/tics-core/src/tics.rs
// Summary: Major/minor tic layout for a linear axis, from an interval or a maximum count.

use std::fmt;

use log::{debug, trace, warn};

use crate::config::{DegeneratePolicy, TicsConfig, MIN_TIC_CEILING};
use crate::error::{Result, TicsError};
use crate::float::{almost_equal, ceil_multiple, count_to, floor_pow10, pow10};
use crate::grid::TicSequence;
use crate::range::AxisRange;

/// Largest ratio of span to minor spacing accepted for an explicit interval.
const MAX_MINOR_RATIO: f64 = usize::MAX as f64;

/// Factors tried when choosing a spacing for a maximum tic count.
pub const CANDIDATE_MULTIPLES: [u32; 3] = [2, 5, 10];

/// How the major tic spacing is chosen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TicDirective {
    /// Explicit major tic interval; must be positive.
    Interval(f64),
    /// Upper bound on the number of major tics.
    MaxCount(usize),
}

/// Computed tic layout for one axis.
///
/// Major tics are a subset of minor tics: between any two major tics there
/// are `multiple - 1` minor tics. The value is immutable; recompute it when
/// the axis range changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisTics {
    range: AxisRange,
    major: TicSequence,
    minor: TicSequence,
    multiple: u32,
}

/// One spacing evaluated while searching for a maximum tic count.
#[derive(Clone, Copy, Debug)]
struct Candidate {
    multiple: u32,
    delta: f64,
    first: f64,
    count: usize,
}

impl Candidate {
    fn evaluate(multiple: u32, dmax: f64, range: &AxisRange, ceiling: usize) -> Self {
        let m = multiple as f64;
        let exponent = (dmax / m).log10().floor();
        let mut delta = m * pow10(exponent);
        let mut first = ceil_multiple(range.min, delta);
        let mut count = count_to(first, range.max, delta);
        if count > ceiling {
            // one coarsening step always brings the count back under the ceiling
            delta *= 10.0;
            first = ceil_multiple(range.min, delta);
            count = count_to(first, range.max, delta);
        }
        Self { multiple, delta, first, count }
    }
}

impl AxisTics {
    /// Tics for a major interval `dtic`, with default configuration.
    pub fn with_interval(x1: f64, x2: f64, dtic: f64) -> Result<Self> {
        Self::compute(x1, x2, TicDirective::Interval(dtic), &TicsConfig::default())
    }

    /// Tics for at most `ntic` major tics, with default configuration.
    pub fn with_max_count(x1: f64, x2: f64, ntic: usize) -> Result<Self> {
        Self::compute(x1, x2, TicDirective::MaxCount(ntic), &TicsConfig::default())
    }

    /// Compute the layout for the axis `[x1, x2]` (either order).
    pub fn compute(x1: f64, x2: f64, directive: TicDirective, config: &TicsConfig) -> Result<Self> {
        let range = AxisRange::new(x1, x2)?;
        if !range.span().is_finite() {
            return Err(TicsError::NonFiniteRange { x1, x2 });
        }
        let tics = match directive {
            TicDirective::Interval(dtic) => {
                if !(dtic > 0.0 && dtic.is_finite()) {
                    return Err(TicsError::InvalidSpacing { dtic });
                }
                // minor spacing can be a tenth of dtic
                if range.span() / dtic * 10.0 >= MAX_MINOR_RATIO {
                    return Err(TicsError::TooManyTics { span: range.span(), dtic });
                }
                if range.is_degenerate() {
                    return Self::single(range.min, dtic, config);
                }
                Self::from_interval(range.padded(config.epsilon), dtic, config)
            }
            TicDirective::MaxCount(ntic) => {
                let ceiling = tic_ceiling(ntic, config)?;
                if range.is_degenerate() {
                    return Self::single(range.min, floor_pow10(range.min), config);
                }
                Self::from_max_count(range.padded(config.epsilon), ceiling, config)
            }
        };
        debug!(
            "axis tics for [{}, {}] via {:?}: {} major from {} by {}, multiple {}",
            range.min, range.max, directive, tics.major.count, tics.major.first, tics.major.delta, tics.multiple
        );
        Ok(tics)
    }

    fn from_interval(range: AxisRange, delta: f64, config: &TicsConfig) -> Self {
        let first = ceil_multiple(range.min, delta);
        let count = count_to(first, range.max, delta);
        let multiple = tic_multiple(delta, config.tolerance);
        Self::assemble(range, TicSequence::new(count, delta, first), multiple)
    }

    fn from_max_count(range: AxisRange, ceiling: usize, config: &TicsConfig) -> Self {
        let dmax = range.span() / (ceiling - 1) as f64;
        let mut best: Option<Candidate> = None;
        for &m in CANDIDATE_MULTIPLES.iter() {
            let c = Candidate::evaluate(m, dmax, &range, ceiling);
            trace!("candidate x{}: delta {} first {} count {}", c.multiple, c.delta, c.first, c.count);
            let best_count = best.map_or(0, |b| b.count);
            if best_count < c.count && c.count <= ceiling {
                best = Some(c);
            }
        }

        if let Some(b) = best {
            let count = count_to(b.first, range.max, b.delta);
            if count >= 2 {
                return Self::assemble(range, TicSequence::new(count, b.delta, b.first), b.multiple);
            }
        }

        warn!("no spacing fits {} tics in [{}, {}]; using the endpoints", ceiling, range.min, range.max);
        let delta = range.span();
        let multiple = tic_multiple(delta, config.tolerance);
        Self::assemble(range, TicSequence::new(2, delta, range.min), multiple)
    }

    fn single(value: f64, delta: f64, config: &TicsConfig) -> Result<Self> {
        if config.degenerate == DegeneratePolicy::Reject {
            return Err(TicsError::DegenerateRange { value });
        }
        warn!("degenerate axis range at {}; at most one tic on a {} grid", value, delta);
        let range = AxisRange { min: value, max: value };
        let first = ceil_multiple(value, delta);
        let multiple = tic_multiple(delta, config.tolerance);
        Ok(Self::assemble(range, TicSequence::new(count_to(first, value, delta), delta, first), multiple))
    }

    fn assemble(range: AxisRange, major: TicSequence, multiple: u32) -> Self {
        let minor = minor_tics(&major, multiple, &range);
        Self { range, major, minor, multiple }
    }

    /// Padded range the layout was computed for.
    pub fn range(&self) -> AxisRange { self.range }
    pub fn major(&self) -> TicSequence { self.major }
    pub fn minor(&self) -> TicSequence { self.minor }

    pub fn count_major(&self) -> usize { self.major.count }
    pub fn delta_major(&self) -> f64 { self.major.delta }
    pub fn first_major(&self) -> f64 { self.major.first }
    pub fn count_minor(&self) -> usize { self.minor.count }
    pub fn delta_minor(&self) -> f64 { self.minor.delta }
    pub fn first_minor(&self) -> f64 { self.minor.first }

    /// Number of (major and minor) tics per major interval: 1, 2, 5 or 10.
    pub fn multiple(&self) -> u32 { self.multiple }

    /// Whether the minor tic at `index` coincides with a major tic.
    pub fn is_major(&self, index: usize) -> bool {
        if index >= self.minor.count || self.major.count == 0 { return false; }
        let lead = ((self.major.first - self.minor.first) / self.minor.delta).round();
        if !lead.is_finite() || lead < 0.0 { return false; }
        let lead = lead as usize;
        if index < lead { return false; }
        let offset = index - lead;
        let m = self.multiple as usize;
        offset % m == 0 && offset / m < self.major.count
    }
}

impl fmt::Display for AxisTics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "count_major: {}", self.major.count)?;
        writeln!(f, "count_minor: {}", self.minor.count)?;
        writeln!(f, "delta_major: {}", self.major.delta)?;
        writeln!(f, "delta_minor: {}", self.minor.delta)?;
        writeln!(f, "first_major: {}", self.major.first)?;
        writeln!(f, "first_minor: {}", self.minor.first)?;
        writeln!(f, "multiple: {}", self.multiple)
    }
}

/// Apply the ceiling policy to a requested maximum tic count.
pub fn tic_ceiling(ntic: usize, config: &TicsConfig) -> Result<usize> {
    if ntic >= MIN_TIC_CEILING {
        Ok(ntic)
    } else if config.clamp_tic_ceiling {
        Ok(MIN_TIC_CEILING)
    } else {
        Err(TicsError::InvalidTicCeiling { ntic })
    }
}

/// First of 10, 5, 2 (in that order) for which `delta / m` is a power of ten; 1 if none is.
pub fn tic_multiple(delta: f64, tolerance: f64) -> u32 {
    for m in [10u32, 5, 2] {
        let l = (delta / m as f64).log10();
        if almost_equal(l.round(), l, tolerance) {
            return m;
        }
    }
    1
}

/// Minor tics for `major`, extended backward to cover the leading partial interval.
pub fn minor_tics(major: &TicSequence, multiple: u32, range: &AxisRange) -> TicSequence {
    let delta = major.delta / multiple as f64;
    let mut lead = 0u32;
    while lead < multiple && range.min <= major.first - (lead + 1) as f64 * delta {
        lead += 1;
    }
    let first = major.first - lead as f64 * delta;
    TicSequence::new(count_to(first, range.max, delta), delta, first)
}
