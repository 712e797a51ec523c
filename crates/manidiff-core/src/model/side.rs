use serde::{Deserialize, Serialize};

/// Which of the two input collections a document came from
///
/// `Left` is collection A, `Right` is collection B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Both sides, left first
    pub const ALL: [Side; 2] = [Side::Left, Side::Right];

    /// Name of the canonical artifact this side writes under a leaf directory
    pub fn file_name(&self) -> &'static str {
        match self {
            Side::Left => "Left.txt",
            Side::Right => "Right.txt",
        }
    }

    /// Short collection marker ("A" or "B")
    pub fn marker(&self) -> &'static str {
        match self {
            Side::Left => "A",
            Side::Right => "B",
        }
    }

    /// The opposite side
    pub fn other(&self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => write!(f, "Left"),
            Side::Right => write!(f, "Right"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names_are_per_side() {
        assert_eq!(Side::Left.file_name(), "Left.txt");
        assert_eq!(Side::Right.file_name(), "Right.txt");
    }

    #[test]
    fn test_other_is_involution() {
        for side in Side::ALL {
            assert_ne!(side.other(), side);
            assert_eq!(side.other().other(), side);
        }
    }
}
