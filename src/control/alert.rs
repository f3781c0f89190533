//! Audio alert switch watcher.
//!
//! The alert follows the switch line, but only reacts when the sampled
//! state differs from the previous sample.  Polling an unchanged switch
//! yields nothing, however many cycles pass.  The line is on when any bit
//! of the mask is set.

#[derive(Debug)]
pub struct AlertSwitch {
    mask: u32,
    enabled: bool,
}

impl AlertSwitch {
    pub fn new(mask: u32) -> Self {
        Self {
            mask,
            enabled: false,
        }
    }

    /// Feed one switch-register sample.  Returns the new state on a change.
    pub fn poll(&mut self, switches: u32) -> Option<bool> {
        let line = switches & self.mask != 0;
        if line == self.enabled {
            return None;
        }
        self.enabled = line;
        Some(line)
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }
}
