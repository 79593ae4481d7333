//! Breadth-first shortest-path solver.
//!
//! Uninformed counterpart to the best-first engine: a FIFO queue with
//! push-time deduplication. Every transition costs one move, so the first
//! time the goal is dequeued the path to it is shortest. Shares the
//! neighbor enumeration order and predecessor-map reconstruction with the
//! best-first engine, so both emit the same sequence.

use std::collections::VecDeque;

use crate::search::{reconstruct, PredecessorMap};
use crate::state::{Move, State};
use crate::{SolveError, MAX_DISKS};

/// Solves the puzzle for `disks` disks with breadth-first search.
pub fn solve(disks: u32) -> Result<Vec<Move>, SolveError> {
    if disks > MAX_DISKS {
        return Err(SolveError::InvalidDiskCount(disks));
    }

    let start = State::initial(disks);

    // the discovery map doubles as the visited set
    let mut came_from = PredecessorMap::default();
    came_from.insert(start.key(), None);

    let mut queue = VecDeque::new();
    queue.push_back(start);

    while let Some(state) = queue.pop_front() {
        let key = state.key();

        if state.is_goal() {
            return Ok(reconstruct(&came_from, &key));
        }

        for (next, mv) in state.neighbors() {
            let next_key = next.key();
            if came_from.contains_key(&next_key) {
                continue;
            }
            came_from.insert(next_key, Some((mv, key.clone())));
            queue.push_back(next);
        }
    }

    Err(SolveError::NoSolutionFound)
}
