//! Debounced button reader.
//!
//! Two independent filters stand between the raw button register and a
//! logical [`Action`]:
//!
//! 1. **Edge detection**: only bits that rose since the previous sample
//!    (`current & !previous`) count.  A held button yields one edge.
//! 2. **Cooldown**: an action is accepted only if at least `cooldown_us`
//!    elapsed since the last accepted action of the same kind (or of any
//!    kind, with [`CooldownScope::Global`]).
//!
//! When several bits rise in one sample, at most one action is accepted:
//! the first in priority order (sensitivity-up, sensitivity-down,
//! motion-trigger) whose cooldown window is open.

use log::debug;

use crate::config::{ButtonMap, CooldownScope};

/// A logical user action derived from the button register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    SensitivityUp,
    SensitivityDown,
    MotionTrigger,
}

impl Action {
    /// All actions, highest priority first.
    pub const PRIORITY: [Action; 3] = [
        Action::SensitivityUp,
        Action::SensitivityDown,
        Action::MotionTrigger,
    ];

    fn index(self) -> usize {
        self as usize
    }

    fn mask(self, map: &ButtonMap) -> u32 {
        match self {
            Action::SensitivityUp => map.sensitivity_up,
            Action::SensitivityDown => map.sensitivity_down,
            Action::MotionTrigger => map.motion_trigger,
        }
    }
}

// ---------------------------------------------------------------------------
// Edge detector
// ---------------------------------------------------------------------------

/// Rising-edge detector over a register bitmask.
#[derive(Debug, Default)]
pub struct EdgeDetector {
    previous: u32,
}

impl EdgeDetector {
    pub fn new() -> Self {
        Self { previous: 0 }
    }

    /// Bits set in `current` that were clear in the previous sample.
    /// Overwrites the stored snapshot.
    pub fn rising(&mut self, current: u32) -> u32 {
        let edges = current & !self.previous;
        self.previous = current;
        edges
    }

    pub fn previous(&self) -> u32 {
        self.previous
    }
}

// ---------------------------------------------------------------------------
// Cooldown gate
// ---------------------------------------------------------------------------

/// Minimum-interval gate keyed by action.
#[derive(Debug)]
pub struct CooldownGate {
    period_us: u64,
    scope: CooldownScope,
    /// Last accepted timestamp per action; only slot 0 is used when global.
    last_us: [Option<u64>; 3],
}

impl CooldownGate {
    pub fn new(period_us: u64, scope: CooldownScope) -> Self {
        Self {
            period_us,
            scope,
            last_us: [None; 3],
        }
    }

    fn slot(&self, action: Action) -> usize {
        match self.scope {
            CooldownScope::PerAction => action.index(),
            CooldownScope::Global => 0,
        }
    }

    /// Whether `action` would be accepted at `now_us`.
    pub fn is_open(&self, action: Action, now_us: u64) -> bool {
        match self.last_us[self.slot(action)] {
            None => true,
            Some(last) => now_us.saturating_sub(last) >= self.period_us,
        }
    }

    /// Accept `action` if its window is open, recording `now_us`.
    pub fn try_accept(&mut self, action: Action, now_us: u64) -> bool {
        if !self.is_open(action, now_us) {
            return false;
        }
        let slot = self.slot(action);
        self.last_us[slot] = Some(now_us);
        true
    }
}

// ---------------------------------------------------------------------------
// Reader
// ---------------------------------------------------------------------------

/// Outcome of one [`InputReader::poll`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadOutcome {
    /// No mapped button rose this cycle.
    Quiet,
    /// The highest-priority rising action with an open cooldown window.
    Accepted(Action),
    /// Every rising action is still cooling down; carries the highest-priority one.
    Suppressed(Action),
}

/// Edge detector + cooldown gate + priority selection.
#[derive(Debug)]
pub struct InputReader {
    map: ButtonMap,
    edges: EdgeDetector,
    gate: CooldownGate,
}

impl InputReader {
    pub fn new(map: ButtonMap, cooldown_us: u64, scope: CooldownScope) -> Self {
        Self {
            map,
            edges: EdgeDetector::new(),
            gate: CooldownGate::new(cooldown_us, scope),
        }
    }

    /// Classify one button sample.  Call exactly once per cycle.
    pub fn poll(&mut self, buttons: u32, now_us: u64) -> ReadOutcome {
        let rising = self.edges.rising(buttons);
        let mut candidates = Action::PRIORITY
            .into_iter()
            .filter(|a| rising & a.mask(&self.map) != 0)
            .peekable();
        let Some(&first) = candidates.peek() else {
            return ReadOutcome::Quiet;
        };

        for action in candidates {
            if self.gate.try_accept(action, now_us) {
                return ReadOutcome::Accepted(action);
            }
            debug!("input: {:?} within cooldown, ignored", action);
        }
        ReadOutcome::Suppressed(first)
    }

    /// Raw button snapshot from the previous cycle.
    pub fn last_snapshot(&self) -> u32 {
        self.edges.previous()
    }
}
