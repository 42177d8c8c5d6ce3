// File: crates/tics-core/src/lib.rs
// Summary: Core library entry point; exports the axis tic layout API.

pub mod config;
pub mod custom;
pub mod engine;
pub mod error;
pub mod float;
pub mod grid;
pub mod range;
pub mod tics;

pub use config::{DegeneratePolicy, TicsConfig};
pub use custom::{CustomSlot, CustomTicSet, CustomTics};
pub use engine::AxisTicsEngine;
pub use error::{Result, TicsError};
pub use grid::{tic_values, TicSequence, TicValues};
pub use range::AxisRange;
pub use tics::{AxisTics, TicDirective};
