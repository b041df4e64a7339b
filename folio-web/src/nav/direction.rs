//! Transition direction in document order

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Toward an earlier section
    Up,
    /// Toward a later section
    Down,
}

impl Direction {
    /// Direction of travel from `from` to `to`; equal indices read as `Up`
    pub fn between(from: usize, to: usize) -> Self {
        if to > from {
            Direction::Down
        } else {
            Direction::Up
        }
    }

    /// Sign of the incoming section's starting offset
    ///
    /// The outgoing section travels the opposite way.
    pub fn sign(&self) -> f64 {
        match self {
            Direction::Down => 1.0,
            Direction::Up => -1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_between() {
        assert_eq!(Direction::between(1, 2), Direction::Down);
        assert_eq!(Direction::between(2, 1), Direction::Up);
        assert_eq!(Direction::between(3, 0), Direction::Up);
        assert_eq!(Direction::between(0, 0), Direction::Up);
    }

    #[test]
    fn test_sign() {
        assert_eq!(Direction::Down.sign(), 1.0);
        assert_eq!(Direction::Up.sign(), -1.0);
    }
}
