// File: crates/tics-core/src/custom.rs
// Summary: Caller-supplied tic overrides (primary and secondary key), kept apart from computed layout.

use std::fmt;

/// Which custom tic slot to address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CustomSlot {
    Primary,
    Secondary,
}

/// Arbitrary tic positions with the axis label that goes with them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CustomTicSet {
    pub values: Vec<f64>,
    pub label: String,
}

impl CustomTicSet {
    pub fn new(values: impl Into<Vec<f64>>, label: impl Into<String>) -> Self {
        Self { values: values.into(), label: label.into() }
    }
}

/// Optional primary and secondary overrides. A slot set to an empty
/// sequence is still present; only [`CustomTics::clear`] removes it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CustomTics {
    primary: Option<CustomTicSet>,
    secondary: Option<CustomTicSet>,
}

impl CustomTics {
    pub fn new() -> Self { Self::default() }

    pub fn set(&mut self, slot: CustomSlot, values: impl Into<Vec<f64>>, label: impl Into<String>) {
        *self.slot_mut(slot) = Some(CustomTicSet::new(values, label));
    }

    /// Remove a slot, returning what it held.
    pub fn clear(&mut self, slot: CustomSlot) -> Option<CustomTicSet> {
        self.slot_mut(slot).take()
    }

    pub fn get(&self, slot: CustomSlot) -> Option<&CustomTicSet> {
        match slot {
            CustomSlot::Primary => self.primary.as_ref(),
            CustomSlot::Secondary => self.secondary.as_ref(),
        }
    }

    pub fn has(&self, slot: CustomSlot) -> bool { self.get(slot).is_some() }

    pub fn values(&self, slot: CustomSlot) -> Option<&[f64]> {
        self.get(slot).map(|s| s.values.as_slice())
    }

    pub fn label(&self, slot: CustomSlot) -> Option<&str> {
        self.get(slot).map(|s| s.label.as_str())
    }

    pub fn is_empty(&self) -> bool { self.primary.is_none() && self.secondary.is_none() }

    fn slot_mut(&mut self, slot: CustomSlot) -> &mut Option<CustomTicSet> {
        match slot {
            CustomSlot::Primary => &mut self.primary,
            CustomSlot::Secondary => &mut self.secondary,
        }
    }
}

impl fmt::Display for CustomTics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (slot, name) in [(CustomSlot::Primary, "primary"), (CustomSlot::Secondary, "secondary")] {
            match self.get(slot) {
                Some(set) => {
                    writeln!(f, "custom_label_{}: {}", name, set.label)?;
                    writeln!(f, "custom_tics_{}: {:?}", name, set.values)?;
                }
                None => {
                    writeln!(f, "custom_label_{}: none", name)?;
                    writeln!(f, "custom_tics_{}: none", name)?;
                }
            }
        }
        Ok(())
    }
}
