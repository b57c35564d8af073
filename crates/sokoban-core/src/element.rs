//! Board element codes, static terrain, and per-cell overlay flags.

use std::fmt;

/// An element code as it appears in the textual board encoding.
///
/// The numeric values are part of the wire format and must not change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Element {
    /// The agent standing on an empty floor cell.
    Agent = 0,
    /// An impassable wall.
    Wall = 1,
    /// A box on an empty floor cell.
    Box = 2,
    /// An unoccupied goal cell.
    Goal = 3,
    /// Empty floor.
    Empty = 4,
    /// The agent standing on a goal cell.
    AgentOnGoal = 5,
    /// A box resting on a goal cell.
    BoxOnGoal = 6,
}

impl Element {
    /// Every element, in code order.
    pub const ALL: [Element; 7] = [
        Element::Agent,
        Element::Wall,
        Element::Box,
        Element::Goal,
        Element::Empty,
        Element::AgentOnGoal,
        Element::BoxOnGoal,
    ];

    /// Decode a numeric element code.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }

    /// The numeric code of this element.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Whether this code places the agent.
    pub fn has_agent(self) -> bool {
        matches!(self, Element::Agent | Element::AgentOnGoal)
    }

    /// Whether this code places a box.
    pub fn has_box(self) -> bool {
        matches!(self, Element::Box | Element::BoxOnGoal)
    }

    /// Whether the cell under this code is a goal.
    pub fn has_goal(self) -> bool {
        matches!(
            self,
            Element::Goal | Element::AgentOnGoal | Element::BoxOnGoal
        )
    }

    /// The static terrain left once the agent and boxes are lifted off.
    pub fn terrain(self) -> Terrain {
        match self {
            Element::Wall => Terrain::Wall,
            Element::Goal | Element::AgentOnGoal | Element::BoxOnGoal => Terrain::Goal,
            Element::Agent | Element::Box | Element::Empty => Terrain::Empty,
        }
    }
}

/// Immutable per-cell classification.
///
/// A cell is never simultaneously a wall and a goal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Terrain {
    /// Impassable.
    Wall = 1,
    /// Target cell for a box.
    Goal = 3,
    /// Plain floor.
    Empty = 4,
}

impl Terrain {
    /// The hash-basis kind that covers this terrain.
    pub fn hash_kind(self) -> HashKind {
        match self {
            Terrain::Wall => HashKind::Wall,
            Terrain::Goal => HashKind::Goal,
            Terrain::Empty => HashKind::Empty,
        }
    }

    /// Decode a terrain byte as stored by the state codec.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Terrain::Wall),
            3 => Some(Terrain::Goal),
            4 => Some(Terrain::Empty),
            _ => None,
        }
    }

    /// The terrain byte, matching the [`Element`] code of the bare terrain.
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Entity kind keying one row of the Zobrist hash basis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum HashKind {
    /// The agent.
    Agent = 0,
    /// Wall terrain.
    Wall = 1,
    /// A box.
    Box = 2,
    /// Goal terrain.
    Goal = 3,
    /// Empty terrain.
    Empty = 4,
}

impl HashKind {
    /// Number of hash-basis rows.
    pub const COUNT: usize = 5;

    /// Row of this kind within the basis table.
    #[inline]
    pub fn row(self) -> usize {
        self as usize
    }
}

/// Bit-flag combination describing what occupies a cell.
///
/// Used as the key of the sprite table and of the text rendering. Only
/// seven combinations are reachable on a well-formed board: empty, agent,
/// wall, box, goal, agent on goal, box on goal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct CellFlags(u8);

impl CellFlags {
    /// Nothing on plain floor.
    pub const EMPTY: CellFlags = CellFlags(0);
    /// The agent.
    pub const AGENT: CellFlags = CellFlags(1 << 0);
    /// Wall terrain.
    pub const WALL: CellFlags = CellFlags(1 << 1);
    /// A box.
    pub const BOX: CellFlags = CellFlags(1 << 2);
    /// Goal terrain.
    pub const GOAL: CellFlags = CellFlags(1 << 3);

    /// Raw flag bits.
    pub fn bits(self) -> u8 {
        self.0
    }

    /// Rebuild flags from raw bits, dropping unknown bits.
    pub fn from_bits_truncate(bits: u8) -> Self {
        CellFlags(bits & 0b1111)
    }

    /// Whether every flag in `other` is set.
    pub fn contains(self, other: CellFlags) -> bool {
        self.0 & other.0 == other.0
    }

    /// Character used by the text rendering, `None` for unreachable
    /// combinations.
    pub fn glyph(self) -> Option<char> {
        const AGENT_ON_GOAL: u8 = CellFlags::AGENT.0 | CellFlags::GOAL.0;
        const BOX_ON_GOAL: u8 = CellFlags::BOX.0 | CellFlags::GOAL.0;
        match self.0 {
            0 => Some(' '),
            x if x == CellFlags::AGENT.0 => Some('@'),
            x if x == CellFlags::WALL.0 => Some('#'),
            x if x == CellFlags::BOX.0 => Some('*'),
            x if x == CellFlags::GOAL.0 => Some('$'),
            AGENT_ON_GOAL => Some('&'),
            BOX_ON_GOAL => Some('!'),
            _ => None,
        }
    }
}

impl std::ops::BitOr for CellFlags {
    type Output = CellFlags;

    fn bitor(self, rhs: Self) -> Self::Output {
        CellFlags(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for CellFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for CellFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06b}", self.0)
    }
}
