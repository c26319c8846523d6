#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use rand::{rngs::SmallRng, SeedableRng};
#[cfg(feature = "std")]
use seabattle::{AiPolicy, BoardGenerator, Combatant, Match, BOARD_SIZE, FLEET};

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <board-seed> <match-seed>", args[0]);
        std::process::exit(1);
    }
    let board_seed: u64 = args[1].parse()?;
    let match_seed: u64 = args[2].parse()?;

    let mut board_rng = SmallRng::seed_from_u64(board_seed);
    let mut match_rng = SmallRng::seed_from_u64(match_seed);

    let generator = BoardGenerator::new(BOARD_SIZE, &FLEET)?;
    let board1 = generator.generate(&mut board_rng);
    let board2 = generator.generate(&mut board_rng);

    let p1 = Combatant::new(board1, Box::new(AiPolicy::new(BOARD_SIZE)));
    let p2 = Combatant::new(board2, Box::new(AiPolicy::new(BOARD_SIZE)));
    let mut game = Match::new(p1, p2);

    let mut shots = 0usize;
    let winner = loop {
        game.step(&mut match_rng)?;
        shots += 1;
        if let Some(winner) = game.winner() {
            break winner;
        }
    };

    println!("winner: {:?}, shots: {}", winner, shots);
    Ok(())
}
