//! Rod and disk representation for the three-rod puzzle.
//!
//! These types model the simulation state the solver mutates while it
//! generates moves, plus the serializable move/solution shapes returned
//! to callers.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{Result, SolverError};

/// One of the three rods, identified by its conventional label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rod {
    A,
    B,
    C,
}

impl Rod {
    /// All rods in label order.
    pub const ALL: [Rod; 3] = [Rod::A, Rod::B, Rod::C];

    /// Index into the 3-slot stack array.
    pub fn index(self) -> usize {
        match self {
            Rod::A => 0,
            Rod::B => 1,
            Rod::C => 2,
        }
    }

    /// The rod that is neither `self` nor `other`.
    pub fn remaining(self, other: Rod) -> Rod {
        Rod::ALL
            .into_iter()
            .find(|rod| *rod != self && *rod != other)
            .unwrap_or(self)
    }
}

impl fmt::Display for Rod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rod::A => write!(f, "A"),
            Rod::B => write!(f, "B"),
            Rod::C => write!(f, "C"),
        }
    }
}

/// Mutable three-rod simulation state.
///
/// Each stack is ordered bottom (largest) to top (smallest). Disks are
/// positive sizes; across all three stacks the multiset is always exactly
/// `{1..n}` for an n-disk puzzle, since `push` and `pop` are the only
/// mutators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RodState {
    stacks: [SmallVec<[u32; 8]>; 3],
}

impl RodState {
    /// Start position: rod A holds disks `n..1` bottom-to-top, B and C
    /// are empty.
    pub fn new(disks: u32) -> Self {
        let mut source: SmallVec<[u32; 8]> = SmallVec::new();
        for disk in (1..=disks).rev() {
            source.push(disk);
        }
        Self {
            stacks: [source, SmallVec::new(), SmallVec::new()],
        }
    }

    /// The disk currently on top of `rod`, if any.
    pub fn top(&self, rod: Rod) -> Option<u32> {
        self.stacks[rod.index()].last().copied()
    }

    pub fn height(&self, rod: Rod) -> usize {
        self.stacks[rod.index()].len()
    }

    /// Disks on `rod`, bottom first.
    pub fn disks(&self, rod: Rod) -> &[u32] {
        &self.stacks[rod.index()]
    }

    /// Remove and return the top disk of `rod`.
    pub fn pop(&mut self, rod: Rod) -> Option<u32> {
        self.stacks[rod.index()].pop()
    }

    /// Place `disk` on top of `rod`.
    ///
    /// Fails if the rod's current top is smaller than `disk`; a correct
    /// move sequence never triggers this.
    pub fn push(&mut self, rod: Rod, disk: u32) -> Result<()> {
        if let Some(top) = self.top(rod) {
            if top < disk {
                return Err(SolverError::InternalConsistency {
                    message: format!(
                        "cannot place disk {} on rod {} with smaller disk {} on top",
                        disk, rod, top
                    ),
                });
            }
        }
        self.stacks[rod.index()].push(disk);
        Ok(())
    }

    /// True when `rod` holds all `disks` disks in order, largest at the
    /// bottom.
    pub fn is_complete_tower(&self, rod: Rod, disks: u32) -> bool {
        let stack = self.disks(rod);
        stack.len() as u32 == disks
            && stack
                .iter()
                .zip((1..=disks).rev())
                .all(|(have, want)| *have == want)
    }
}

/// A single relocation of the topmost disk from one rod to another.
///
/// Moves are produced in execution order; `id` is sequential and
/// one-based within a solution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub id: u32,
    pub from: Rod,
    pub to: Rod,
    pub disk: u32,
    pub description: String,
}

impl Move {
    pub fn new(id: u32, from: Rod, to: Rod, disk: u32) -> Self {
        Self {
            id,
            from,
            to,
            disk,
            description: format!("Move disk {} from rod {} to rod {}", disk, from, to),
        }
    }
}

/// Where a solution came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolutionSource {
    /// Freshly computed by the recursive solver.
    Solver,
}

/// The complete result of one solve request. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    pub number_of_disks: u32,
    pub moves: Vec<Move>,
    pub total_moves: usize,
    pub source: SolutionSource,
    pub is_valid: bool,
}

/// Minimal move count for an n-disk, three-rod puzzle: `2^n - 1`.
///
/// `None` when the count would overflow `u64`; such a sequence could not
/// be materialized anyway.
pub fn minimal_move_count(disks: u32) -> Option<u64> {
    1u64.checked_shl(disks).map(|count| count - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remaining_rod() {
        assert_eq!(Rod::A.remaining(Rod::C), Rod::B);
        assert_eq!(Rod::A.remaining(Rod::B), Rod::C);
        assert_eq!(Rod::B.remaining(Rod::C), Rod::A);
    }

    #[test]
    fn test_initial_state() {
        let state = RodState::new(3);
        assert_eq!(state.disks(Rod::A), &[3, 2, 1]);
        assert_eq!(state.height(Rod::B), 0);
        assert_eq!(state.height(Rod::C), 0);
        assert_eq!(state.top(Rod::A), Some(1));
    }

    #[test]
    fn test_push_rejects_larger_on_smaller() {
        let mut state = RodState::new(2);
        let disk = state.pop(Rod::A).unwrap();
        state.push(Rod::B, disk).unwrap();

        // Disk 2 cannot rest on disk 1
        let disk = state.pop(Rod::A).unwrap();
        assert!(state.push(Rod::B, disk).is_err());
    }

    #[test]
    fn test_pop_empty_rod() {
        let mut state = RodState::new(1);
        assert_eq!(state.pop(Rod::B), None);
    }

    #[test]
    fn test_complete_tower() {
        let state = RodState::new(4);
        assert!(state.is_complete_tower(Rod::A, 4));
        assert!(!state.is_complete_tower(Rod::C, 4));
        assert!(!state.is_complete_tower(Rod::A, 3));
    }

    #[test]
    fn test_move_description() {
        let mv = Move::new(1, Rod::A, Rod::C, 2);
        assert_eq!(mv.description, "Move disk 2 from rod A to rod C");
    }

    #[test]
    fn test_minimal_move_count() {
        assert_eq!(minimal_move_count(1), Some(1));
        assert_eq!(minimal_move_count(3), Some(7));
        assert_eq!(minimal_move_count(8), Some(255));
        assert_eq!(minimal_move_count(64), None);
    }
}
