// File: crates/tics-core/src/error.rs
// Summary: Contract violations reported by tic layout construction.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum TicsError {
    #[error("major tic interval must be positive and finite, got {dtic}")]
    InvalidSpacing { dtic: f64 },
    #[error("axis range is degenerate: both endpoints equal {value}")]
    DegenerateRange { value: f64 },
    #[error("maximum tic count must be at least 2, got {ntic}")]
    InvalidTicCeiling { ntic: usize },
    #[error("interval {dtic} is too fine for a span of {span}")]
    TooManyTics { span: f64, dtic: f64 },
    #[error("axis endpoints must be finite, got ({x1}, {x2})")]
    NonFiniteRange { x1: f64, x2: f64 },
}

pub type Result<T> = std::result::Result<T, TicsError>;
