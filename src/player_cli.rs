#![cfg(feature = "std")]
//! Interactive targeting policy reading coordinates from stdin.

use std::io::{self, BufRead, Write};

use rand::rngs::SmallRng;

use crate::common::{BoardError, Coord};
use crate::player::TargetPolicy;

/// Parse a move as two 1-based non-negative integers, row first.
/// Returns the 0-based coordinate; anything with the wrong arity or
/// non-numeric tokens is rejected here, while out-of-range values
/// (`0 0` becomes `(-1, -1)`) are left for the board to reject.
pub fn parse_move(line: &str) -> Option<Coord> {
    let mut parts = line.split_whitespace();
    let row: u32 = parts.next()?.parse().ok()?;
    let col: u32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Coord::new(row as i32 - 1, col as i32 - 1))
}

/// Prompts the user for each shot and reports board rejections back
/// to the terminal so the user can re-enter.
pub struct CliPolicy;

impl CliPolicy {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CliPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl TargetPolicy for CliPolicy {
    fn choose(&mut self, _rng: &mut SmallRng) -> Coord {
        let stdin = io::stdin();
        loop {
            print!("Your move (row col): ");
            let _ = io::stdout().flush();
            let mut line = String::new();
            let read = stdin.lock().read_line(&mut line).unwrap_or(0);
            if read == 0 {
                // stdin closed, nothing more to prompt for
                println!();
                std::process::exit(0);
            }
            match parse_move(&line) {
                Some(target) => return target,
                None => println!("Enter two numbers, e.g. 1 3"),
            }
        }
    }

    fn notify_rejected(&mut self, _target: Coord, err: &BoardError) {
        println!("{}", err);
    }
}
