//! Shared result store.

use crate::types::{AveragerResult, GrateResult, SandTrapResult, SumpResult};
use wt_core::DeviceKind;

/// In-memory result store with one slot per device type.
///
/// Owned and passed explicitly by the caller; there is no global instance.
/// Publishing replaces the whole slot, so a reader never observes a
/// partially written record.
#[derive(Debug, Clone, Default)]
pub struct ResultStore {
    grate: Option<GrateResult>,
    sand_trap: Option<SandTrapResult>,
    sump: Option<SumpResult>,
    averager: Option<AveragerResult>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grate(&self) -> Option<&GrateResult> {
        self.grate.as_ref()
    }

    pub fn set_grate(&mut self, result: GrateResult) {
        self.grate = Some(result);
    }

    pub fn sand_trap(&self) -> Option<&SandTrapResult> {
        self.sand_trap.as_ref()
    }

    pub fn set_sand_trap(&mut self, result: SandTrapResult) {
        self.sand_trap = Some(result);
    }

    pub fn sump(&self) -> Option<&SumpResult> {
        self.sump.as_ref()
    }

    pub fn set_sump(&mut self, result: SumpResult) {
        self.sump = Some(result);
    }

    pub fn averager(&self) -> Option<&AveragerResult> {
        self.averager.as_ref()
    }

    pub fn set_averager(&mut self, result: AveragerResult) {
        self.averager = Some(result);
    }

    /// Whether a slot currently holds a published record.
    pub fn has(&self, kind: DeviceKind) -> bool {
        match kind {
            DeviceKind::Grate => self.grate.is_some(),
            DeviceKind::SandTrap => self.sand_trap.is_some(),
            DeviceKind::Sump => self.sump.is_some(),
            DeviceKind::Averager => self.averager.is_some(),
        }
    }

    /// Clear every slot.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
