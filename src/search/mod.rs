//! Optimal move search.
//!
//! The search works on a [`CanonicalState`] copy of the board and never
//! touches the live [`Board`](crate::Board). It is exhaustive: no pruning,
//! no transposition table, every line of play is followed to the end.
//!
//! # Example
//!
//! ```
//! use strictly_negamax::{CanonicalState, Player, Position, best_move};
//!
//! // X threatens the top row; O must take the corner.
//! let state: CanonicalState = "110020000".parse().unwrap();
//! let outcome = best_move(&state, Player::Second);
//! assert_eq!(outcome.best(), Some(Position::TopRight));
//! ```

mod negamax;

pub use negamax::{Color, WIN_SCORE, negamax};

use crate::games::tictactoe::{CanonicalState, Player, Position};
use negamax::{SCORE_FLOOR, TrialMove, evaluate};
use serde::Serialize;
use tracing::{debug, instrument, trace};

/// Search counters. Informational only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Positions evaluated.
    pub nodes: u64,
    /// Deepest ply reached below the searched position.
    pub max_depth: usize,
}

impl SearchStats {
    fn record(&mut self, depth: usize) {
        self.nodes += 1;
        self.max_depth = self.max_depth.max(depth);
    }
}

/// Result of [`best_move`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    state: CanonicalState,
    player: Player,
    best: Option<Position>,
    score: Option<i32>,
    stats: SearchStats,
}

impl SearchOutcome {
    /// Searched snapshot.
    pub fn state(&self) -> &CanonicalState {
        &self.state
    }

    /// Side the move was chosen for.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Chosen cell, `None` when the board has no empty cell.
    pub fn best(&self) -> Option<Position> {
        self.best
    }

    /// Value of the chosen cell for [`player`](Self::player).
    pub fn score(&self) -> Option<i32> {
        self.score
    }

    /// Search counters.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }
}

/// Picks the best cell for `player` in `state`.
///
/// Candidates are tried in row-major order; each is scored by negating the
/// opponent's [`negamax`] value of the resulting position. The strictly
/// greatest score wins, so among equal scores the first cell scanned is
/// kept. Depth plays no part in the score: a forced win found late in the
/// scan does not beat an earlier forced win.
#[instrument(skip(state), fields(state = %state))]
pub fn best_move(state: &CanonicalState, player: Player) -> SearchOutcome {
    let mut working = *state;
    let mut stats = SearchStats::default();
    let opponent = Color::from(player).opponent();

    let mut best = None;
    let mut best_score = SCORE_FLOOR;
    for position in Position::ALL {
        let index = position.to_index();
        if !working.is_empty_at(index) {
            continue;
        }

        let mut trial = TrialMove::place(&mut working, index, player);
        let score = -evaluate(trial.state(), 1, opponent, &mut stats);
        drop(trial);

        trace!(%position, score, "Scored candidate");
        if score > best_score {
            best = Some(position);
            best_score = score;
        }
    }

    let score = best.map(|_| best_score);
    match best {
        Some(position) => debug!(%position, score = best_score, nodes = stats.nodes, "Best move found"),
        None => debug!("No empty cell to play"),
    }

    SearchOutcome {
        state: *state,
        player,
        best,
        score,
        stats,
    }
}
