//! Closed-form recursive solver.
//!
//! The classic divide-and-conquer solution: park the n-1 smaller disks on
//! the spare peg, relocate the largest, then bring the n-1 back on top.
//! Produces exactly 2^n - 1 moves with no search bookkeeping.

use crate::state::{Move, Peg, SOURCE_PEG, TARGET_PEG};
use crate::{SolveError, MAX_DISKS};

/// Solves the puzzle for `disks` disks by direct recursion.
pub fn solve(disks: u32) -> Result<Vec<Move>, SolveError> {
    if disks > MAX_DISKS {
        return Err(SolveError::InvalidDiskCount(disks));
    }

    // peg labels sum to 3, so this picks the one that is neither endpoint
    let spare = 3 - SOURCE_PEG - TARGET_PEG;

    let mut moves = Vec::with_capacity((1usize << disks) - 1);
    move_stack(disks as usize, SOURCE_PEG, spare, TARGET_PEG, &mut moves);
    Ok(moves)
}

/// Moves the stack of the `count` smallest disks from `from` to `to`,
/// using `via` as the parking peg.
fn move_stack(count: usize, from: Peg, via: Peg, to: Peg, out: &mut Vec<Move>) {
    if count == 0 {
        return;
    }
    move_stack(count - 1, from, to, via, out);
    out.push(Move {
        disk: count - 1,
        from,
        to,
    });
    move_stack(count - 1, via, from, to, out);
}
