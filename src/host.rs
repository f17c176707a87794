//! Ports to the presentation layer that hosts a game.
//!
//! The core owns board state and move choice. Drawing pieces, naming
//! players and advancing turns on screen belong to whoever embeds it.

use crate::games::tictactoe::{Player, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Receives every real (non-trial) placement.
pub trait PlacementSink {
    /// A piece for `player` now sits at `position`.
    fn piece_placed(&mut self, position: Position, player: Player);

    /// Every piece was removed from the board.
    fn board_cleared(&mut self) {}
}

/// Owned by the host; told when a placement has completed a turn.
pub trait TurnController {
    /// `player` has finished their turn.
    fn end_turn(&mut self, player: Player);
}

/// Who sits in each seat.
pub trait PlayerRegistry {
    /// Seat for a player.
    fn seat(&self, player: Player) -> &Seat;

    /// The automated seat, if any. The first one wins if both are automated.
    fn ai_player(&self) -> Option<Player> {
        [Player::First, Player::Second]
            .into_iter()
            .find(|player| self.seat(*player).kind == PlayerKind::Ai)
    }
}

/// Who controls a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    /// Moves come from outside (a person at the terminal).
    Human,
    /// Moves come from the search engine.
    Ai,
}

/// A named seat at the board.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct Seat {
    /// Display name.
    name: String,
    /// Who controls the seat.
    kind: PlayerKind,
}

/// Two-seat [`PlayerRegistry`].
#[derive(Debug, Clone, PartialEq, Eq, derive_new::new)]
pub struct Roster {
    first: Seat,
    second: Seat,
}

impl Roster {
    /// Changes who controls a seat.
    #[instrument(skip(self))]
    pub fn set_kind(&mut self, player: Player, kind: PlayerKind) {
        debug!(%player, ?kind, "Reassigning seat");
        match player {
            Player::First => self.first.kind = kind,
            Player::Second => self.second.kind = kind,
        }
    }
}

impl PlayerRegistry for Roster {
    fn seat(&self, player: Player) -> &Seat {
        match player {
            Player::First => &self.first,
            Player::Second => &self.second,
        }
    }
}

/// Host that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHost;

impl PlacementSink for NullHost {
    fn piece_placed(&mut self, _position: Position, _player: Player) {}
}

impl TurnController for NullHost {
    fn end_turn(&mut self, _player: Player) {}
}
