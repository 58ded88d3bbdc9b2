use crate::math::RotationSense;

/// Side of a directed path, relative to its declared traversal orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Returns the other side.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Resolves the quarter-turn sense that points towards this side, given
    /// the sense that a path declares for turning left.
    #[must_use]
    pub fn rotation_sense(self, left_turn: RotationSense) -> RotationSense {
        match self {
            Self::Left => left_turn,
            Self::Right => left_turn.reversed(),
        }
    }
}
