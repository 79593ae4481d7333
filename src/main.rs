//! Tower of Hanoi Solver
//!
//! Solves the classic three-peg puzzle: relocate a stack of size-ordered
//! disks from peg 0 to peg 2, one disk at a time, never resting a larger
//! disk on a smaller one. Offers the library's three solvers behind one
//! command line and prints the resulting move sequence.

use clap::{Parser, Subcommand, ValueEnum};

use hanoi::{bfs, recursive, search, Move, SolveError};

/// Solves the Tower of Hanoi puzzle and prints the move sequence.
#[derive(Parser)]
#[command(name = "hanoi")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Solve the puzzle and print every move.
    Solve {
        /// Number of disks to relocate.
        #[arg(short, long, default_value_t = 3)]
        disks: u32,
        /// Solver to run.
        #[arg(short, long, value_enum, default_value_t = Algorithm::Astar)]
        algorithm: Algorithm,
    },
    /// Run all three solvers and check that their move counts agree.
    Compare {
        /// Number of disks to relocate.
        #[arg(short, long, default_value_t = 3)]
        disks: u32,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Algorithm {
    /// Informed best-first search.
    Astar,
    /// Breadth-first shortest-path search.
    Bfs,
    /// Closed-form recursion.
    Recursive,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Command::Solve { disks, algorithm }) => run_solve(disks, algorithm),
        Some(Command::Compare { disks }) => run_compare(disks),
        // default: the classic three-disk puzzle
        None => run_solve(3, Algorithm::Astar),
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

/// Runs one solver and prints its move sequence.
fn run_solve(disks: u32, algorithm: Algorithm) -> Result<(), SolveError> {
    let moves = match algorithm {
        Algorithm::Astar => search::solve(disks)?,
        Algorithm::Bfs => bfs::solve(disks)?,
        Algorithm::Recursive => recursive::solve(disks)?,
    };
    print!("{}", render_moves(&moves));
    Ok(())
}

/// Runs every solver on the same puzzle and reports the move counts.
fn run_compare(disks: u32) -> Result<(), SolveError> {
    let astar = search::solve(disks)?;
    let breadth_first = bfs::solve(disks)?;
    let closed_form = recursive::solve(disks)?;

    println!("astar:     {} moves", astar.len());
    println!("bfs:       {} moves", breadth_first.len());
    println!("recursive: {} moves", closed_form.len());

    if astar.len() == breadth_first.len() && breadth_first.len() == closed_form.len() {
        println!("all solvers agree");
    } else {
        println!("move counts disagree");
    }
    Ok(())
}

/// Formats a solution as a summary line followed by one line per move.
fn render_moves(moves: &[Move]) -> String {
    let mut output = format!("Solution found in {} moves:\n", moves.len());
    for mv in moves {
        output.push_str(&format!("{mv}\n"));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_puzzle_snapshot() {
        let moves = search::solve(3).unwrap();
        insta::assert_snapshot!(render_moves(&moves), @r"
        Solution found in 7 moves:
        Move disk 1 from 0 to 2
        Move disk 2 from 0 to 1
        Move disk 1 from 2 to 1
        Move disk 3 from 0 to 2
        Move disk 1 from 1 to 0
        Move disk 2 from 1 to 2
        Move disk 1 from 0 to 2
        ");
    }

    #[test]
    fn test_render_empty_solution() {
        assert_eq!(render_moves(&[]), "Solution found in 0 moves:\n");
    }
}
