//! Keyboard mapping from key events to player commands.
//!
//! The windowing layer reports raw key transitions; this module decides what
//! they mean for the current phase.

use serde::{Deserialize, Serialize};

use nave_core::commands::PlayerCommand;
use nave_core::constants::SHIP_ROTATION_RATE;
use nave_core::enums::GamePhase;

/// Keys the game reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Up,
    Space,
    Enter,
}

/// A key transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyEvent {
    Pressed(Key),
    Released(Key),
}

/// Translate a key transition into a command, if it means anything now.
///
/// Enter only restarts after game over, and a laser cannot be fired while the
/// round is over. Releasing either turn key stops rotation.
pub fn command_for(event: KeyEvent, phase: GamePhase) -> Option<PlayerCommand> {
    match event {
        KeyEvent::Pressed(Key::Enter) => {
            (phase == GamePhase::GameOver).then_some(PlayerCommand::Restart)
        }
        KeyEvent::Pressed(Key::Right) => Some(PlayerCommand::SetRotation {
            rate: SHIP_ROTATION_RATE,
        }),
        KeyEvent::Pressed(Key::Left) => Some(PlayerCommand::SetRotation {
            rate: -SHIP_ROTATION_RATE,
        }),
        KeyEvent::Pressed(Key::Up) => Some(PlayerCommand::SetBoosting { boosting: true }),
        KeyEvent::Pressed(Key::Space) => {
            (phase == GamePhase::Playing).then_some(PlayerCommand::FireLaser)
        }
        KeyEvent::Released(Key::Left | Key::Right) => {
            Some(PlayerCommand::SetRotation { rate: 0.0 })
        }
        KeyEvent::Released(Key::Up) => Some(PlayerCommand::SetBoosting { boosting: false }),
        KeyEvent::Released(Key::Space | Key::Enter) => None,
    }
}
