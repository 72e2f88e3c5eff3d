//! Structural validation of a generated move sequence.
//!
//! The checks here are count- and shape-based only: minimal length and
//! per-move well-formedness. They deliberately do not replay the moves
//! against rod state, so physical legality (was the moved disk really on
//! top, was it placed on a larger one) is out of scope here and covered
//! by the solver's replay tests instead.

use crate::tower::{minimal_move_count, Move};

/// Check that `moves` is a structurally well-formed minimal solution for
/// a `disks`-disk puzzle. Pure; does not mutate its input.
pub fn validate(moves: &[Move], disks: u32) -> bool {
    let expected = match minimal_move_count(disks) {
        Some(count) => count,
        None => return false,
    };
    if moves.len() as u64 != expected {
        return false;
    }
    moves.iter().all(is_well_formed)
}

/// A move is well-formed when it relocates a real disk between two
/// distinct rods.
fn is_well_formed(mv: &Move) -> bool {
    mv.from != mv.to && mv.disk >= 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tower::Rod;

    fn sequence(steps: &[(u32, Rod, Rod)]) -> Vec<Move> {
        steps
            .iter()
            .enumerate()
            .map(|(i, (disk, from, to))| Move::new(i as u32 + 1, *from, *to, *disk))
            .collect()
    }

    #[test]
    fn test_accepts_minimal_sequence() {
        let moves = sequence(&[
            (1, Rod::A, Rod::B),
            (2, Rod::A, Rod::C),
            (1, Rod::B, Rod::C),
        ]);
        assert!(validate(&moves, 2));
    }

    #[test]
    fn test_rejects_wrong_length() {
        let moves = sequence(&[(1, Rod::A, Rod::C)]);
        assert!(!validate(&moves, 2));
    }

    #[test]
    fn test_rejects_move_to_same_rod() {
        let moves = sequence(&[(1, Rod::A, Rod::A)]);
        assert!(!validate(&moves, 1));
    }

    #[test]
    fn test_rejects_zero_disk() {
        let moves = sequence(&[(0, Rod::A, Rod::C)]);
        assert!(!validate(&moves, 1));
    }

    #[test]
    fn test_does_not_replay_physics() {
        // Correct count and shape with a physically impossible disk still
        // passes; replay checking is the test suite's job, not this one's.
        let moves = sequence(&[(2, Rod::A, Rod::C)]);
        assert!(validate(&moves, 1));
    }
}
