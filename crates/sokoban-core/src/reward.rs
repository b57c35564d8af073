//! Reward signal bitfield set by the most recent transition.

use std::fmt;

/// Events raised by a single transition, as a bitfield.
///
/// The signal is cleared at the start of every transition, so it only
/// ever describes the last action applied. It is nonzero exactly when
/// that action pushed a box onto a goal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct RewardSignal(u64);

impl RewardSignal {
    /// No event.
    pub const NONE: RewardSignal = RewardSignal(0);
    /// A box was pushed onto a goal cell.
    pub const BOX_IN_GOAL: RewardSignal = RewardSignal(1 << 0);
    /// The push left every box on a goal.
    pub const ALL_BOXES_IN_GOAL: RewardSignal = RewardSignal(1 << 1);

    /// Rebuild a signal from raw bits (as stored by the codec).
    pub fn from_bits(bits: u64) -> Self {
        RewardSignal(bits)
    }

    /// Raw bits.
    pub fn bits(self) -> u64 {
        self.0
    }

    /// Whether no event is recorded.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether every bit of `other` is set.
    pub fn contains(self, other: RewardSignal) -> bool {
        self.0 & other.0 == other.0
    }

    /// Set the bits of `other`.
    pub fn insert(&mut self, other: RewardSignal) {
        self.0 |= other.0;
    }
}

impl std::ops::BitOr for RewardSignal {
    type Output = RewardSignal;

    fn bitor(self, rhs: Self) -> Self::Output {
        RewardSignal(self.0 | rhs.0)
    }
}

impl fmt::Display for RewardSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_contains() {
        let mut r = RewardSignal::NONE;
        assert!(r.is_empty());
        r.insert(RewardSignal::BOX_IN_GOAL);
        assert!(r.contains(RewardSignal::BOX_IN_GOAL));
        assert!(!r.contains(RewardSignal::ALL_BOXES_IN_GOAL));
        r.insert(RewardSignal::ALL_BOXES_IN_GOAL);
        assert_eq!(r.bits(), 0b11);
    }
}
