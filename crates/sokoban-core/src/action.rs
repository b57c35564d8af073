//! The four directional agent actions.

use std::fmt;

use crate::error::StateError;

/// Cardinal direction for agent movement.
///
/// The numeric values are the action codes exposed to external callers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Action {
    /// Move one cell up (row - 1).
    Up = 0,
    /// Move one cell right (col + 1).
    Right = 1,
    /// Move one cell down (row + 1).
    Down = 2,
    /// Move one cell left (col - 1).
    Left = 3,
}

impl Action {
    /// Number of actions.
    pub const COUNT: usize = 4;

    /// Every action, in code order.
    pub const ALL: [Action; Action::COUNT] = [Action::Up, Action::Right, Action::Down, Action::Left];

    /// Returns the `(col_offset, row_offset)` for this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Action::Up => (0, -1),
            Action::Right => (1, 0),
            Action::Down => (0, 1),
            Action::Left => (-1, 0),
        }
    }

    /// The direction pointing the other way.
    pub fn opposite(self) -> Self {
        match self {
            Action::Up => Action::Down,
            Action::Right => Action::Left,
            Action::Down => Action::Up,
            Action::Left => Action::Right,
        }
    }

    /// The numeric action code.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Lower-case name, as used in logs and text output.
    pub fn name(self) -> &'static str {
        match self {
            Action::Up => "up",
            Action::Right => "right",
            Action::Down => "down",
            Action::Left => "left",
        }
    }
}

impl TryFrom<u8> for Action {
    type Error = StateError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Action::ALL
            .get(code as usize)
            .copied()
            .ok_or(StateError::InvalidAction { code })
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_are_unit_steps() {
        for a in Action::ALL {
            let (dc, dr) = a.offset();
            assert_eq!(dc.abs() + dr.abs(), 1, "{a} is not a unit step");
            let (oc, or) = a.opposite().offset();
            assert_eq!((dc + oc, dr + or), (0, 0));
        }
    }

    #[test]
    fn try_from_rejects_out_of_range() {
        assert_eq!(Action::try_from(1), Ok(Action::Right));
        assert_eq!(
            Action::try_from(4),
            Err(StateError::InvalidAction { code: 4 })
        );
    }

    #[test]
    fn codes_match_positions() {
        for (i, a) in Action::ALL.iter().enumerate() {
            assert_eq!(a.code() as usize, i);
        }
    }
}
