#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use seabattle::{
    init_logging, render_board, AiPolicy, BoardGenerator, CliPolicy, Combatant, Match, Side,
    ShotResult, BOARD_SIZE, FLEET,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[cfg(feature = "std")]
fn greet() {
    println!("------------------");
    println!("    Welcome to    ");
    println!("    sea battle    ");
    println!("------------------");
    println!(" input format: x y");
    println!(" x - row number   ");
    println!(" y - column number");
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    greet();

    let generator = BoardGenerator::new(BOARD_SIZE, &FLEET)?;
    let human_board = generator.generate(&mut rng);
    let mut machine_board = generator.generate(&mut rng);
    machine_board.set_hidden(true);

    let human = Combatant::new(human_board, Box::new(CliPolicy::new()));
    let machine = Combatant::new(machine_board, Box::new(AiPolicy::new(BOARD_SIZE)));
    let mut game = Match::new(human, machine);

    loop {
        println!("{}", "-".repeat(20));
        println!("Your board:");
        print!("{}", render_board(game.human().board()));
        println!("{}", "-".repeat(20));
        println!("Enemy board:");
        print!("{}", render_board(game.machine().board()));
        println!("{}", "-".repeat(20));

        let report = game.step(&mut rng)?;
        if report.side == Side::Machine {
            println!("Machine fires at {}", report.target);
        }
        match report.result {
            ShotResult::Miss => println!("Miss!"),
            ShotResult::Hit => println!("Hit!"),
            ShotResult::Sunk => println!("Ship sunk!"),
        }

        if let Some(winner) = game.winner() {
            println!("{}", "-".repeat(20));
            match winner {
                Side::Human => println!("You win!"),
                Side::Machine => println!("The machine wins!"),
            }
            break;
        }
    }
    Ok(())
}
