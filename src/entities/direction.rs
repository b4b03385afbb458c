/// Phase of the formation's four-step movement cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovingDirection {
    Right,
    Left,
    DownLeft,
    DownRight,
}

impl MovingDirection {
    pub fn is_descending(&self) -> bool {
        matches!(self, MovingDirection::DownLeft | MovingDirection::DownRight)
    }

    /// Right -> DownLeft -> Left -> DownRight -> Right
    pub fn next(&self) -> Self {
        match self {
            MovingDirection::Right => MovingDirection::DownLeft,
            MovingDirection::DownLeft => MovingDirection::Left,
            MovingDirection::Left => MovingDirection::DownRight,
            MovingDirection::DownRight => MovingDirection::Right,
        }
    }

    /// Shared per-frame velocity while this phase is active
    pub fn velocity(&self, x_velocity: i32, y_velocity: i32) -> (i32, i32) {
        match self {
            MovingDirection::Right => (x_velocity, 0),
            MovingDirection::Left => (-x_velocity, 0),
            MovingDirection::DownLeft | MovingDirection::DownRight => (0, y_velocity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_visits_every_phase_once() {
        let mut phase = MovingDirection::Right;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(phase);
            phase = phase.next();
        }
        assert_eq!(phase, MovingDirection::Right);
        assert_eq!(
            seen,
            vec![
                MovingDirection::Right,
                MovingDirection::DownLeft,
                MovingDirection::Left,
                MovingDirection::DownRight,
            ]
        );
    }

    #[test]
    fn test_descending_phases_alternate_with_lateral() {
        let mut phase = MovingDirection::Right;
        for _ in 0..8 {
            assert_ne!(phase.is_descending(), phase.next().is_descending());
            phase = phase.next();
        }
    }

    #[test]
    fn test_velocity_table() {
        assert_eq!(MovingDirection::Right.velocity(2, 1), (2, 0));
        assert_eq!(MovingDirection::Left.velocity(2, 1), (-2, 0));
        assert_eq!(MovingDirection::DownLeft.velocity(2, 1), (0, 1));
        assert_eq!(MovingDirection::DownRight.velocity(2, 1), (0, 1));
    }
}
