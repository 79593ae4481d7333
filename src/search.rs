//! Informed best-first search over the puzzle state graph.
//!
//! Classic A*: the frontier is ordered by f = g + h, with ties broken by
//! the state identity key so the returned sequence is deterministic. The
//! closed-set check happens after popping rather than at push time, so the
//! frontier may hold stale duplicate entries for a state that was later
//! re-discovered more cheaply; they are discarded when dequeued.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::state::{Move, State, StateKey, TARGET_PEG};
use crate::{SolveError, MAX_DISKS};

/// Predecessor map: each discovered key to the move and parent key that
/// produced its best-known path. The origin key maps to `None`.
pub(crate) type PredecessorMap = FxHashMap<StateKey, Option<(Move, StateKey)>>;

/// Lower bound on remaining moves: the number of disks not yet on the
/// target peg.
///
/// A single move changes at most one disk's target-peg membership, so the
/// estimate never overestimates and never drops by more than one per move.
/// That makes it admissible and consistent, and the search cost-optimal.
pub fn heuristic(state: &State) -> u32 {
    (0..state.disk_count())
        .filter(|&disk| state.peg_of(disk) != TARGET_PEG)
        .count() as u32
}

/// A discovered, not yet expanded search node.
#[derive(PartialEq, Eq)]
struct FrontierEntry {
    f: u32,
    g: u32,
    state: State,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // state order is identity-key order, giving the deterministic
        // tie-break between equal-cost entries
        self.f
            .cmp(&other.f)
            .then_with(|| self.state.cmp(&other.state))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Solves the puzzle for `disks` disks with best-first search.
///
/// Returns the cost-optimal move sequence from the all-on-source start to
/// the all-on-target goal; empty for zero disks.
pub fn solve(disks: u32) -> Result<Vec<Move>, SolveError> {
    if disks > MAX_DISKS {
        return Err(SolveError::InvalidDiskCount(disks));
    }

    let start = State::initial(disks);
    let start_key = start.key();

    let mut frontier = BinaryHeap::new();
    let mut best_g: FxHashMap<StateKey, u32> = FxHashMap::default();
    let mut closed: FxHashSet<StateKey> = FxHashSet::default();
    let mut came_from = PredecessorMap::default();

    best_g.insert(start_key.clone(), 0);
    came_from.insert(start_key, None);
    frontier.push(Reverse(FrontierEntry {
        f: heuristic(&start),
        g: 0,
        state: start,
    }));

    while let Some(Reverse(entry)) = frontier.pop() {
        let key = entry.state.key();

        if entry.state.is_goal() {
            return Ok(reconstruct(&came_from, &key));
        }

        // stale duplicate: this state was already expanded via a cheaper entry
        if !closed.insert(key.clone()) {
            continue;
        }

        for (next, mv) in entry.state.neighbors() {
            let next_key = next.key();
            if closed.contains(&next_key) {
                continue;
            }
            let tentative_g = entry.g + 1;
            if best_g.get(&next_key).map_or(true, |&g| tentative_g < g) {
                best_g.insert(next_key.clone(), tentative_g);
                came_from.insert(next_key, Some((mv, key.clone())));
                frontier.push(Reverse(FrontierEntry {
                    f: tentative_g + heuristic(&next),
                    g: tentative_g,
                    state: next,
                }));
            }
        }
    }

    // defensive: the Hanoi move graph is connected, so the frontier never
    // empties before the goal for any valid disk count
    Err(SolveError::NoSolutionFound)
}

/// Walks the predecessor map backward from the goal key, then reverses the
/// collected moves into start-to-goal order.
pub(crate) fn reconstruct(came_from: &PredecessorMap, goal_key: &StateKey) -> Vec<Move> {
    let mut moves = Vec::new();
    let mut current = goal_key;
    while let Some(Some((mv, parent))) = came_from.get(current) {
        moves.push(*mv);
        current = parent;
    }
    moves.reverse();
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recursive;

    /// Replays `moves` from the start state, asserting every step is among
    /// the legal transitions, and returns the final state.
    fn replay(disks: u32, moves: &[Move]) -> State {
        let mut state = State::initial(disks);
        for mv in moves {
            state = state
                .neighbors()
                .into_iter()
                .find(|(_, m)| m == mv)
                .map(|(next, _)| next)
                .unwrap_or_else(|| panic!("illegal move {mv} from {state:?}"));
        }
        state
    }

    #[test]
    fn test_heuristic_counts_disks_off_target() {
        assert_eq!(heuristic(&State::initial(5)), 5);
        assert_eq!(heuristic(&State::initial(0)), 0);
        let goal = replay(2, &solve(2).unwrap());
        assert_eq!(heuristic(&goal), 0);
    }

    #[test]
    fn test_zero_disks_yields_empty_sequence() {
        assert_eq!(solve(0).unwrap(), vec![]);
    }

    #[test]
    fn test_one_disk_moves_straight_to_target() {
        assert_eq!(solve(1).unwrap(), vec![Move { disk: 0, from: 0, to: 2 }]);
    }

    #[test]
    fn test_two_disks_exact_sequence() {
        assert_eq!(
            solve(2).unwrap(),
            vec![
                Move { disk: 0, from: 0, to: 1 },
                Move { disk: 1, from: 0, to: 2 },
                Move { disk: 0, from: 1, to: 2 },
            ]
        );
    }

    #[test]
    fn test_optimal_move_counts() {
        for disks in 0..=8 {
            let moves = solve(disks).unwrap();
            assert_eq!(moves.len(), (1usize << disks) - 1, "{disks} disks");
        }
    }

    #[test]
    fn test_solutions_replay_legally_to_goal() {
        for disks in 1..=6 {
            let moves = solve(disks).unwrap();
            assert!(replay(disks, &moves).is_goal(), "{disks} disks");
        }
    }

    #[test]
    fn test_matches_recursive_solution() {
        for disks in 0..=7 {
            assert_eq!(
                solve(disks).unwrap(),
                recursive::solve(disks).unwrap(),
                "{disks} disks"
            );
        }
    }

    #[test]
    fn test_deterministic_across_runs() {
        assert_eq!(solve(5).unwrap(), solve(5).unwrap());
    }

    #[test]
    fn test_rejects_unrepresentable_disk_count() {
        assert_eq!(
            solve(MAX_DISKS + 1),
            Err(SolveError::InvalidDiskCount(MAX_DISKS + 1))
        );
    }
}
