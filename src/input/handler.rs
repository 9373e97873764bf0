use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Direction, Player, Turn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Steer(Turn),
    Restart,
    Quit,
    None,
}

/// Maps key presses for two players sharing one keyboard.
///
/// Player one steers with WASD, player two with IJKL or the arrow keys.
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        let steer = |player, direction| KeyAction::Steer(Turn::new(player, direction));

        match key.code {
            // Player two - arrow keys
            KeyCode::Up => steer(Player::Two, Direction::Up),
            KeyCode::Down => steer(Player::Two, Direction::Down),
            KeyCode::Left => steer(Player::Two, Direction::Left),
            KeyCode::Right => steer(Player::Two, Direction::Right),

            KeyCode::Char(c) => match c.to_ascii_lowercase() {
                // Player one - WASD
                'w' => steer(Player::One, Direction::Up),
                's' => steer(Player::One, Direction::Down),
                'a' => steer(Player::One, Direction::Left),
                'd' => steer(Player::One, Direction::Right),

                // Player two - IJKL
                'i' => steer(Player::Two, Direction::Up),
                'k' => steer(Player::Two, Direction::Down),
                'j' => steer(Player::Two, Direction::Left),
                'l' => steer(Player::Two, Direction::Right),

                'q' => KeyAction::Quit,
                'r' => KeyAction::Restart,
                _ => KeyAction::None,
            },

            KeyCode::Esc => KeyAction::Quit,

            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
