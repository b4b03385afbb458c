use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use crate::entities::GameState;

/// Represents semantic game actions that can be triggered by input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    MoveLeft,
    MoveRight,
    Fire,
    Pause,
    Resume,
    Restart,
    Quit,
}

/// Tracks the state of keys that can be held down for continuous input
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct KeyState {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

/// Manages input polling and translates raw key events into game actions
pub struct InputManager {
    key_state: KeyState,
    oneshot_actions: Vec<InputAction>,
    /// Without release events a key only counts as held on frames where it
    /// was pressed or auto-repeated
    release_events: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new(true)
    }
}

impl InputManager {
    pub fn new(release_events: bool) -> Self {
        Self {
            key_state: KeyState::default(),
            oneshot_actions: Vec::new(),
            release_events,
        }
    }

    pub fn key_state(&self) -> KeyState {
        self.key_state
    }

    /// Polls for all pending events without blocking.
    /// Should be called once per frame before getting actions.
    pub fn poll_events(&mut self, game_state: &GameState) -> color_eyre::Result<()> {
        self.begin_frame();

        while event::poll(Duration::from_millis(0))? {
            if let Event::Key(key_event) = event::read()? {
                self.handle_key_event(key_event, game_state);
            }
        }

        Ok(())
    }

    /// Clears one-shot actions, and held keys when releases are not reported
    pub fn begin_frame(&mut self) {
        self.oneshot_actions.clear();
        if !self.release_events {
            self.key_state = KeyState::default();
        }
    }

    /// Processes a key event and updates key state and one-shot actions
    pub fn handle_key_event(&mut self, key_event: KeyEvent, game_state: &GameState) {
        match key_event.kind {
            KeyEventKind::Press => self.handle_key_press(key_event, game_state),
            KeyEventKind::Repeat => self.set_held(key_event.code, true, game_state),
            KeyEventKind::Release => self.set_held(key_event.code, false, game_state),
        }
    }

    fn handle_key_press(&mut self, key_event: KeyEvent, game_state: &GameState) {
        // Quit works in any state
        if matches!(
            key_event.code,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
        ) || (key_event.code == KeyCode::Char('c')
            && key_event.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.oneshot_actions.push(InputAction::Quit);
            return;
        }

        let is_key = |c: char| {
            matches!(key_event.code, KeyCode::Char(k) if k.eq_ignore_ascii_case(&c))
        };

        match game_state {
            GameState::Playing if is_key('p') => {
                self.oneshot_actions.push(InputAction::Pause);
            }
            GameState::Paused if is_key('p') => {
                self.oneshot_actions.push(InputAction::Resume);
            }
            state if state.is_finished() && is_key('r') => {
                self.oneshot_actions.push(InputAction::Restart);
            }
            _ => self.set_held(key_event.code, true, game_state),
        }
    }

    fn set_held(&mut self, code: KeyCode, held: bool, game_state: &GameState) {
        // Presses only register while playing; releases always do
        if held && *game_state != GameState::Playing {
            return;
        }
        match code {
            // Directions are tracked independently; the player resolves both held
            KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                self.key_state.left = held;
            }
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                self.key_state.right = held;
            }
            KeyCode::Char(' ') => {
                self.key_state.fire = held;
            }
            _ => {}
        }
    }

    /// Returns all actions for this frame (both continuous and one-shot).
    /// Must be called after poll_events().
    pub fn get_actions(&self, game_state: &GameState) -> Vec<InputAction> {
        let mut actions = Vec::new();

        actions.extend_from_slice(&self.oneshot_actions);

        if *game_state == GameState::Playing {
            if self.key_state.left {
                actions.push(InputAction::MoveLeft);
            }
            if self.key_state.right {
                actions.push(InputAction::MoveRight);
            }
            if self.key_state.fire {
                actions.push(InputAction::Fire);
            }
        }

        actions
    }
}
