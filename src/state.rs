//! Puzzle state representation and legal move generation.
//!
//! A state records which peg each disk sits on. Stack order never needs to
//! be stored: disks stack strictly by size, so on any peg the smallest disk
//! index present is the top disk. Successor states are only ever built from
//! legal moves, which keeps every reachable state valid by construction.

use std::fmt;

/// A peg label. Exactly three pegs exist: 0, 1, 2.
pub type Peg = u8;

/// Number of pegs in the puzzle.
pub const PEG_COUNT: Peg = 3;

/// The peg every disk starts on.
pub const SOURCE_PEG: Peg = 0;

/// The peg every disk must reach.
pub const TARGET_PEG: Peg = 2;

/// One disk relocation: which disk moved, and between which pegs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    /// Disk index; 0 is the smallest disk.
    pub disk: usize,
    pub from: Peg,
    pub to: Peg,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // disks are numbered from 1 for display
        write!(
            f,
            "Move disk {} from {} to {}",
            self.disk + 1,
            self.from,
            self.to
        )
    }
}

/// Collision-free identity key: one peg label per disk, disk 0 first.
///
/// Two states produce equal keys iff their disk-to-peg assignments are
/// equal, and the lexicographic order on keys doubles as the deterministic
/// tie-break order for the search frontier.
pub type StateKey = Box<[u8]>;

/// An immutable assignment of every disk to a peg.
///
/// `pegs[d]` is the peg holding disk `d`. States are value objects: a
/// transition builds a fresh state and never mutates its source.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct State {
    pegs: Box<[Peg]>,
}

impl State {
    /// Creates the start configuration: every disk on `SOURCE_PEG`.
    pub fn initial(disks: u32) -> Self {
        Self {
            pegs: vec![SOURCE_PEG; disks as usize].into_boxed_slice(),
        }
    }

    /// Number of disks in the puzzle.
    pub fn disk_count(&self) -> usize {
        self.pegs.len()
    }

    /// The peg currently holding `disk`.
    pub fn peg_of(&self, disk: usize) -> Peg {
        self.pegs[disk]
    }

    /// True iff every disk sits on `TARGET_PEG`.
    pub fn is_goal(&self) -> bool {
        self.pegs.iter().all(|&peg| peg == TARGET_PEG)
    }

    /// True iff no smaller disk shares `disk`'s peg.
    pub fn is_top(&self, disk: usize) -> bool {
        let peg = self.pegs[disk];
        !self.pegs[..disk].contains(&peg)
    }

    /// The top disk on `peg`: the smallest disk index present, or `None`
    /// for an empty peg.
    pub fn top_disk_on(&self, peg: Peg) -> Option<usize> {
        self.pegs.iter().position(|&p| p == peg)
    }

    /// The canonical identity key for this state.
    pub fn key(&self) -> StateKey {
        self.pegs.clone()
    }

    /// Enumerates every legal single-disk move with its successor state.
    ///
    /// Disks are visited in ascending index order, destination pegs in
    /// ascending label order. A move is legal when the moved disk is the
    /// top of its peg and the destination is empty or topped by a larger
    /// disk.
    pub fn neighbors(&self) -> Vec<(State, Move)> {
        let mut out = Vec::new();
        for disk in 0..self.disk_count() {
            if !self.is_top(disk) {
                continue;
            }
            let from = self.pegs[disk];
            for to in 0..PEG_COUNT {
                if to == from {
                    continue;
                }
                if let Some(top) = self.top_disk_on(to) {
                    if top < disk {
                        continue;
                    }
                }
                out.push((self.with_disk_on(disk, to), Move { disk, from, to }));
            }
        }
        out
    }

    /// Builds the successor state with `disk` reassigned to `peg`.
    fn with_disk_on(&self, disk: usize, peg: Peg) -> State {
        let mut pegs = self.pegs.clone();
        pegs[disk] = peg;
        State { pegs }
    }
}
