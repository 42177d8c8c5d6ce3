// File: crates/tics-core/src/engine.rs
// Summary: Axis tics owner pairing a computed layout with its custom tic overlay.

use std::fmt;

use crate::config::TicsConfig;
use crate::custom::{CustomSlot, CustomTics};
use crate::error::Result;
use crate::tics::{AxisTics, TicDirective};

/// Tic state for one axis: a computed [`AxisTics`] plus optional custom tics.
///
/// Updating the range replaces the layout and leaves custom tics alone.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisTicsEngine {
    tics: AxisTics,
    custom: CustomTics,
    config: TicsConfig,
}

impl AxisTicsEngine {
    pub fn new(x1: f64, x2: f64, directive: TicDirective) -> Result<Self> {
        Self::with_config(x1, x2, directive, TicsConfig::default())
    }

    pub fn with_config(x1: f64, x2: f64, directive: TicDirective, config: TicsConfig) -> Result<Self> {
        let tics = AxisTics::compute(x1, x2, directive, &config)?;
        Ok(Self { tics, custom: CustomTics::new(), config })
    }

    pub fn with_interval(x1: f64, x2: f64, dtic: f64) -> Result<Self> {
        Self::new(x1, x2, TicDirective::Interval(dtic))
    }

    pub fn with_max_count(x1: f64, x2: f64, ntic: usize) -> Result<Self> {
        Self::new(x1, x2, TicDirective::MaxCount(ntic))
    }

    /// Recompute for new endpoints and major interval. On error the previous layout is kept.
    pub fn update_tics(&mut self, x1: f64, x2: f64, dtic: f64) -> Result<()> {
        self.update(x1, x2, TicDirective::Interval(dtic))
    }

    pub fn update(&mut self, x1: f64, x2: f64, directive: TicDirective) -> Result<()> {
        self.tics = AxisTics::compute(x1, x2, directive, &self.config)?;
        Ok(())
    }

    pub fn tics(&self) -> &AxisTics { &self.tics }
    pub fn custom(&self) -> &CustomTics { &self.custom }
    pub fn config(&self) -> &TicsConfig { &self.config }

    pub fn count_major(&self) -> usize { self.tics.count_major() }
    pub fn delta_major(&self) -> f64 { self.tics.delta_major() }
    pub fn first_major(&self) -> f64 { self.tics.first_major() }
    pub fn count_minor(&self) -> usize { self.tics.count_minor() }
    pub fn delta_minor(&self) -> f64 { self.tics.delta_minor() }
    pub fn first_minor(&self) -> f64 { self.tics.first_minor() }
    pub fn multiple(&self) -> u32 { self.tics.multiple() }

    pub fn set_custom_tics_primary(&mut self, tics: impl Into<Vec<f64>>, label: impl Into<String>) {
        self.custom.set(CustomSlot::Primary, tics, label);
    }

    pub fn set_custom_tics_secondary(&mut self, tics: impl Into<Vec<f64>>, label: impl Into<String>) {
        self.custom.set(CustomSlot::Secondary, tics, label);
    }

    pub fn clear_custom_tics_primary(&mut self) { self.custom.clear(CustomSlot::Primary); }
    pub fn clear_custom_tics_secondary(&mut self) { self.custom.clear(CustomSlot::Secondary); }

    pub fn custom_tics_primary(&self) -> Option<&[f64]> { self.custom.values(CustomSlot::Primary) }
    pub fn custom_tics_secondary(&self) -> Option<&[f64]> { self.custom.values(CustomSlot::Secondary) }
    pub fn custom_label_primary(&self) -> Option<&str> { self.custom.label(CustomSlot::Primary) }
    pub fn custom_label_secondary(&self) -> Option<&str> { self.custom.label(CustomSlot::Secondary) }
    pub fn has_custom_tics_primary(&self) -> bool { self.custom.has(CustomSlot::Primary) }
    pub fn has_custom_tics_secondary(&self) -> bool { self.custom.has(CustomSlot::Secondary) }

    /// Line-oriented `key: value` summary of the layout and custom tics, for diagnostics.
    pub fn debug_dump(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AxisTicsEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.tics, self.custom)
    }
}
