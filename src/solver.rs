//! Recursive move generation for the three-rod puzzle.
//!
//! The solver runs the classic optimal strategy: move the top `n - 1`
//! disks aside, move the largest disk directly, then move the `n - 1`
//! disks back on top of it. Rod roles rotate through the recursion while
//! the three physical rods stay fixed. Every emitted move records the
//! disk actually popped from the simulated rod at that moment, so the
//! sequence is a faithful trace of the simulation.

use tracing::debug;

use crate::error::{Result, SolverError};
use crate::tower::{minimal_move_count, Move, Rod, RodState, Solution, SolutionSource};
use crate::validator;

/// Hard ceiling on the disk count: beyond this, `2^n - 1` overflows and
/// the move list could not be materialized anyway.
pub const MAX_SUPPORTED_DISKS: u32 = 63;

/// Configuration for the solver
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Largest accepted disk count
    pub max_disks: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self { max_disks: 8 }
    }
}

impl SolverConfig {
    /// The bound actually enforced: the configured ceiling clamped to
    /// [`MAX_SUPPORTED_DISKS`].
    pub fn effective_max_disks(&self) -> u32 {
        self.max_disks.min(MAX_SUPPORTED_DISKS)
    }
}

/// Compute the minimal move sequence transferring `disks` disks from rod
/// A to rod C.
///
/// Fails with [`SolverError::InvalidDiskCount`] before any simulation
/// when `disks` is outside `1..=config.effective_max_disks()`. Never
/// returns a partially built solution.
pub fn generate_solution(disks: u32, config: &SolverConfig) -> Result<Solution> {
    let max = config.effective_max_disks();
    if disks < 1 || disks > max {
        return Err(SolverError::InvalidDiskCount { disks, max });
    }

    let source = Rod::A;
    let target = Rod::C;
    let spare = source.remaining(target);

    let mut state = RodState::new(disks);
    let mut moves = Vec::with_capacity(minimal_move_count(disks).unwrap_or(0) as usize);
    move_tower(&mut state, &mut moves, disks, source, target, spare)?;

    debug!(disks, total_moves = moves.len(), "generated solution");

    let is_valid = validator::validate(&moves, disks);
    Ok(Solution {
        number_of_disks: disks,
        total_moves: moves.len(),
        moves,
        source: SolutionSource::Solver,
        is_valid,
    })
}

/// Move the top `n` disks of `source` onto `target`, using `spare` as
/// temporary storage.
fn move_tower(
    state: &mut RodState,
    moves: &mut Vec<Move>,
    n: u32,
    source: Rod,
    target: Rod,
    spare: Rod,
) -> Result<()> {
    if n == 0 {
        return Ok(());
    }

    // Role misuse guard: the three roles must name three distinct rods.
    // Not reachable from generate_solution, which fixes the roles at the
    // top of the recursion.
    if source == target || source == spare || target == spare {
        return Ok(());
    }

    if n == 1 {
        return move_top(state, moves, source, target);
    }

    move_tower(state, moves, n - 1, source, spare, target)?;
    move_top(state, moves, source, target)?;
    move_tower(state, moves, n - 1, spare, target, source)
}

/// Pop the top disk of `source`, push it onto `target`, and record the
/// numbered move.
fn move_top(
    state: &mut RodState,
    moves: &mut Vec<Move>,
    source: Rod,
    target: Rod,
) -> Result<()> {
    let disk = state
        .pop(source)
        .ok_or_else(|| SolverError::InternalConsistency {
            message: format!("rod {} is empty but a disk was expected", source),
        })?;
    state.push(target, disk)?;
    moves.push(Move::new(moves.len() as u32 + 1, source, target, disk));
    Ok(())
}
