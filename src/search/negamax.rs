//! Exhaustive negamax evaluator.
//!
//! Every call returns a value relative to the side about to move at that
//! call; the caller negates it to read it from its own side. A position in
//! which a line is already complete was won by the previous ply, so it is
//! a loss for the side to move.

use super::SearchStats;
use crate::games::tictactoe::{CanonicalState, Cell, Player, STATE_LEN};
use serde::{Deserialize, Serialize};

/// Magnitude of a decided game.
pub const WIN_SCORE: i32 = 10;

/// Starting value for a maximisation, below any reachable score.
pub(crate) const SCORE_FLOOR: i32 = -1000;

/// Negamax side color.
///
/// Decides which mark a trial placement writes. It never takes part in the
/// scoring arithmetic and is kept apart from [`Player::index`].
///
/// | color      | sign | writes |
/// |------------|------|--------|
/// | `Negative` | -1   | `'1'`  |
/// | `Positive` | +1   | `'2'`  |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// Plays the first player's mark.
    Negative,
    /// Plays the second player's mark.
    Positive,
}

impl Color {
    /// Numeric sign of the color.
    pub fn sign(self) -> i32 {
        match self {
            Color::Negative => -1,
            Color::Positive => 1,
        }
    }

    /// The other side.
    pub fn opponent(self) -> Self {
        match self {
            Color::Negative => Color::Positive,
            Color::Positive => Color::Negative,
        }
    }

    /// Player whose mark this color writes.
    pub fn player(self) -> Player {
        match self {
            Color::Negative => Player::First,
            Color::Positive => Player::Second,
        }
    }
}

impl From<Player> for Color {
    fn from(player: Player) -> Self {
        match player {
            Player::First => Color::Negative,
            Player::Second => Color::Positive,
        }
    }
}

/// Trial placement that is undone when dropped.
///
/// Every path out of a recursive step, early return included, restores the
/// cell to empty.
pub(crate) struct TrialMove<'a> {
    state: &'a mut CanonicalState,
    index: usize,
}

impl<'a> TrialMove<'a> {
    /// Writes `player`'s mark at `index`, which must be empty.
    pub(crate) fn place(state: &'a mut CanonicalState, index: usize, player: Player) -> Self {
        debug_assert!(state.is_empty_at(index));
        state.put(index, Cell::Occupied(player));
        Self { state, index }
    }

    /// The state with the trial mark applied.
    pub(crate) fn state(&mut self) -> &mut CanonicalState {
        &mut *self.state
    }
}

impl Drop for TrialMove<'_> {
    fn drop(&mut self) {
        self.state.put(self.index, Cell::Empty);
    }
}

/// Value of `state` for the side playing `color`, who is about to move.
///
/// `-WIN_SCORE` if a line is already complete, `0` for a full board,
/// otherwise the best negated child value. The state is mutated during the
/// call and restored before it returns.
pub fn negamax(state: &mut CanonicalState, color: Color) -> i32 {
    let mut stats = SearchStats::default();
    evaluate(state, 0, color, &mut stats)
}

/// Recursive step. `depth` only feeds the statistics.
pub(crate) fn evaluate(
    state: &mut CanonicalState,
    depth: usize,
    color: Color,
    stats: &mut SearchStats,
) -> i32 {
    stats.record(depth);

    if state.winner().is_some() {
        return -WIN_SCORE;
    }

    if state.is_full() {
        return 0;
    }

    let mut best = SCORE_FLOOR;
    for index in 0..STATE_LEN {
        if !state.is_empty_at(index) {
            continue;
        }
        let mut trial = TrialMove::place(state, index, color.player());
        let value = -evaluate(trial.state(), depth + 1, color.opponent(), stats);
        best = best.max(value);
    }

    best
}
