//! Manage switch's state and its most recent transition.

use core::mem;

/// On/off switch remembering whether it just rose or just fell.
///
/// Use this to hold a binary input's state over time. A host polling
/// loop feeds it one observed value per cycle through [`Switch::set`]
/// and then asks whether that cycle flipped the state. The pending
/// transition can be peeked without clearing it, or taken so that the
/// caller reacts to it exactly once.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Switch {
    on: bool,
    rose: bool,
    fell: bool,
}

impl Switch {
    /// Turn the switch on.
    ///
    /// When the switch was off this records a rising edge and drops any
    /// pending falling edge. When it was already on, a stale pending
    /// rise is cleared instead and a pending fall is left alone.
    pub fn set_on(&mut self) {
        if self.on {
            self.rose = false;
        } else {
            self.rose = true;
            self.fell = false;
        }
        self.on = true;
    }

    /// Turn the switch off.
    ///
    /// Mirror of [`Switch::set_on`]: records a falling edge when the
    /// switch was on, otherwise clears a stale pending fall.
    pub fn set_off(&mut self) {
        if self.on {
            self.fell = true;
            self.rose = false;
        } else {
            self.fell = false;
        }
        self.on = false;
    }

    /// Set the switch to the observed value.
    pub fn set(&mut self, on: bool) {
        if on {
            self.set_on();
        } else {
            self.set_off();
        }
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    /// True while an off to on transition is pending. Does not clear it.
    pub fn just_turned_on(&self) -> bool {
        self.rose
    }

    /// True while an on to off transition is pending. Does not clear it.
    pub fn just_turned_off(&self) -> bool {
        self.fell
    }

    /// Report a pending off to on transition and clear it.
    ///
    /// Of consecutive calls with no setter in between, at most the
    /// first returns true.
    pub fn take_turned_on(&mut self) -> bool {
        mem::take(&mut self.rose)
    }

    /// Report a pending on to off transition and clear it.
    ///
    /// Of consecutive calls with no setter in between, at most the
    /// first returns true.
    pub fn take_turned_off(&mut self) -> bool {
        mem::take(&mut self.fell)
    }
}
