#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Paused,
    GameOver,
    Won,
}

impl GameState {
    pub fn is_finished(&self) -> bool {
        matches!(self, GameState::GameOver | GameState::Won)
    }
}
