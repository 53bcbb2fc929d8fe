//! First-class invariants for the move history.
//!
//! Invariants are logical properties that must hold throughout a session.
//! They are testable independently and serve as documentation of system guarantees.

use super::history::GameHistory;
use super::{Board, Player, Square};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        into_result(violations)
    }
}

impl<S, I1, I2, I3, I4> InvariantSet<S> for (I1, I2, I3, I4)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
    I4: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        collect::<S, I3>(state, &mut violations);
        collect::<S, I4>(state, &mut violations);
        into_result(violations)
    }
}

/// Invariant: the first snapshot is the empty board.
pub struct StartsEmptyInvariant;

impl Invariant<GameHistory> for StartsEmptyInvariant {
    fn holds(history: &GameHistory) -> bool {
        history.snapshots().first() == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History starts from an empty board"
    }
}

/// Invariant: each snapshot fills exactly one previously empty square.
pub struct SingleStepInvariant;

impl SingleStepInvariant {
    /// Returns the single newly filled square between two boards.
    pub(crate) fn step(before: &Board, after: &Board) -> Option<(usize, Player)> {
        let mut changed = before
            .squares()
            .iter()
            .zip(after.squares())
            .enumerate()
            .filter(|(_, (a, b))| a != b);

        match (changed.next(), changed.next()) {
            (Some((index, (Square::Empty, Square::Occupied(player)))), None) => {
                Some((index, *player))
            }
            _ => None,
        }
    }
}

impl Invariant<GameHistory> for SingleStepInvariant {
    fn holds(history: &GameHistory) -> bool {
        history
            .snapshots()
            .windows(2)
            .all(|pair| Self::step(&pair[0], &pair[1]).is_some())
    }

    fn description() -> &'static str {
        "Each snapshot fills exactly one empty square"
    }
}

/// Invariant: X and O take turns, X first.
pub struct AlternatingMarkInvariant;

impl Invariant<GameHistory> for AlternatingMarkInvariant {
    fn holds(history: &GameHistory) -> bool {
        history
            .snapshots()
            .windows(2)
            .enumerate()
            .all(|(i, pair)| match SingleStepInvariant::step(&pair[0], &pair[1]) {
                Some((_, player)) => player == Player::for_move_count(i),
                // Reported by SingleStepInvariant.
                None => true,
            })
    }

    fn description() -> &'static str {
        "Marks alternate starting with X"
    }
}

/// Invariant: the viewed index points at an existing snapshot.
pub struct ViewedInBoundsInvariant;

impl Invariant<GameHistory> for ViewedInBoundsInvariant {
    fn holds(history: &GameHistory) -> bool {
        history.viewed_index() < history.len()
    }

    fn description() -> &'static str {
        "Viewed index is within the history"
    }
}

/// All history invariants as a composable set.
pub type HistoryInvariants = (
    StartsEmptyInvariant,
    SingleStepInvariant,
    AlternatingMarkInvariant,
    ViewedInBoundsInvariant,
);
