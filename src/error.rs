use core::fmt;

pub type GameResult<T> = Result<T, GameError>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameError {
    /// A density-map cell held something other than 0 (empty) or a variant 1..=3
    InvalidEnemyVariant { row: usize, col: usize, value: u8 },
    InvalidCanvas { width: i32, height: i32 },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEnemyVariant { row, col, value } => write!(
                f,
                "invalid enemy variant {value} at row {row}, column {col} (expected 0..=3)"
            ),
            Self::InvalidCanvas { width, height } => {
                write!(f, "invalid canvas size {width}x{height}")
            }
        }
    }
}

impl std::error::Error for GameError {}
