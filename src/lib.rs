//! Tower of Hanoi Solver Library
//!
//! Relocates n size-ordered disks from peg 0 to peg 2 under the classic
//! rule that a larger disk never rests on a smaller one, and reports the
//! move sequence. Three solvers share one state-transition model:
//!
//! - `search`: informed best-first (A*) search, the primary engine;
//! - `bfs`: breadth-first shortest-path search;
//! - `recursive`: the closed-form divide-and-conquer solution.
//!
//! All three produce the optimal 2^n - 1 moves, and with the engine's
//! deterministic tie-breaking they emit identical sequences.

use std::fmt;

pub mod bfs;
pub mod recursive;
pub mod search;
pub mod state;

pub use search::solve;
pub use state::{Move, State};

/// Largest supported disk count.
///
/// The optimal solution has 2^n - 1 moves; past 31 disks that count no
/// longer fits the search's u32 cost bookkeeping.
pub const MAX_DISKS: u32 = 31;

/// Failure modes shared by the solvers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolveError {
    /// The requested disk count has no representable solution. Reported
    /// before any search work is done.
    InvalidDiskCount(u32),
    /// The frontier emptied before the goal was dequeued. Defensive only:
    /// the puzzle's move graph is connected, so every valid disk count has
    /// a solution.
    NoSolutionFound,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::InvalidDiskCount(n) => {
                write!(
                    f,
                    "invalid disk count {n}: at most {MAX_DISKS} disks are supported"
                )
            }
            SolveError::NoSolutionFound => {
                write!(f, "search exhausted without reaching the goal")
            }
        }
    }
}

impl std::error::Error for SolveError {}
