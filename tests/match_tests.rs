use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    AiPolicy, Board, BoardError, BoardGenerator, Combatant, Coord, Match, MatchState, Orientation,
    Ship, ShotResult, Side, TargetPolicy, BOARD_SIZE, FLEET,
};

/// Plays back a fixed list of targets, recording rejections.
struct ScriptedPolicy {
    targets: Vec<Coord>,
    next: usize,
    rejected: Vec<(Coord, BoardError)>,
}

impl ScriptedPolicy {
    fn new(targets: Vec<Coord>) -> Self {
        Self {
            targets,
            next: 0,
            rejected: Vec::new(),
        }
    }
}

impl TargetPolicy for ScriptedPolicy {
    fn choose(&mut self, _rng: &mut SmallRng) -> Coord {
        let target = self.targets[self.next];
        self.next += 1;
        target
    }

    fn notify_rejected(&mut self, target: Coord, err: &BoardError) {
        self.rejected.push((target, *err));
    }
}

fn single_ship_board() -> Board {
    let mut board = Board::new(6);
    board
        .add_ship(Ship::new(Coord::new(0, 0), 1, Orientation::Horizontal))
        .unwrap();
    board.begin();
    board
}

#[test]
fn test_first_hit_wins_single_cell_fleet() {
    let human = Combatant::new(
        single_ship_board(),
        Box::new(ScriptedPolicy::new(vec![Coord::new(0, 0)])),
    );
    let machine = Combatant::new(single_ship_board(), Box::new(AiPolicy::new(6)));
    let mut game = Match::new(human, machine);
    let mut rng = SmallRng::seed_from_u64(1);

    let report = game.step(&mut rng).unwrap();
    assert_eq!(report.side, Side::Human);
    assert_eq!(report.result, ShotResult::Sunk);
    assert_eq!(game.winner(), Some(Side::Human));
    assert_eq!(
        game.step(&mut rng).unwrap_err(),
        BoardError::MatchFinished
    );
}

#[test]
fn test_hit_grants_another_turn() {
    let mut machine_board = Board::new(6);
    machine_board
        .add_ship(Ship::new(Coord::new(0, 0), 2, Orientation::Horizontal))
        .unwrap();
    machine_board.begin();

    let human = Combatant::new(
        single_ship_board(),
        Box::new(ScriptedPolicy::new(vec![
            Coord::new(0, 0),
            Coord::new(0, 1),
        ])),
    );
    let machine = Combatant::new(machine_board, Box::new(AiPolicy::new(6)));
    let mut game = Match::new(human, machine);
    let mut rng = SmallRng::seed_from_u64(1);

    let report = game.step(&mut rng).unwrap();
    assert_eq!(report.result, ShotResult::Hit);
    // the machine never got to move
    assert_eq!(game.state(), MatchState::AwaitingTurn(Side::Human));

    let report = game.step(&mut rng).unwrap();
    assert_eq!(report.result, ShotResult::Sunk);
    assert_eq!(game.winner(), Some(Side::Human));
}

#[test]
fn test_miss_passes_the_turn() {
    let human = Combatant::new(
        single_ship_board(),
        Box::new(ScriptedPolicy::new(vec![Coord::new(5, 5)])),
    );
    let machine = Combatant::new(single_ship_board(), Box::new(AiPolicy::new(6)));
    let mut game = Match::new(human, machine);
    let mut rng = SmallRng::seed_from_u64(1);

    let report = game.step(&mut rng).unwrap();
    assert_eq!(report.result, ShotResult::Miss);
    assert_eq!(game.state(), MatchState::AwaitingTurn(Side::Machine));
}

#[test]
fn test_rejected_targets_are_retried() {
    let human = Combatant::new(
        single_ship_board(),
        Box::new(ScriptedPolicy::new(vec![
            Coord::new(9, 9),
            Coord::new(5, 5),
            Coord::new(5, 5),
            Coord::new(0, 0),
        ])),
    );
    let machine = Combatant::new(single_ship_board(), Box::new(AiPolicy::new(6)));
    let mut game = Match::new(human, machine);
    let mut rng = SmallRng::seed_from_u64(1);

    // out of bounds is retried within the same turn
    let report = game.step(&mut rng).unwrap();
    assert_eq!(report.target, Coord::new(5, 5));
    assert_eq!(report.result, ShotResult::Miss);

    // machine takes its turn before the human shoots again
    game.step(&mut rng).unwrap();
    if game.winner().is_some() {
        return;
    }
    while game.state() != MatchState::AwaitingTurn(Side::Human) {
        game.step(&mut rng).unwrap();
        if game.winner().is_some() {
            return;
        }
    }
    // the repeat at (5, 5) is rejected and the next target accepted
    let report = game.step(&mut rng).unwrap();
    assert_eq!(report.target, Coord::new(0, 0));
}

#[test]
fn test_ai_vs_ai_match_terminates() {
    let mut board_rng = SmallRng::seed_from_u64(42);
    let mut match_rng = SmallRng::seed_from_u64(43);
    let generator = BoardGenerator::new(BOARD_SIZE, &FLEET).unwrap();

    let p1 = Combatant::new(
        generator.generate(&mut board_rng),
        Box::new(AiPolicy::new(BOARD_SIZE)),
    );
    let p2 = Combatant::new(
        generator.generate(&mut board_rng),
        Box::new(AiPolicy::new(BOARD_SIZE)),
    );
    let mut game = Match::new(p1, p2);

    let mut turns = 0;
    let winner = loop {
        game.step(&mut match_rng).unwrap();
        turns += 1;
        if let Some(winner) = game.winner() {
            break winner;
        }
        if turns > 200 {
            panic!("game took too many turns");
        }
    };

    let loser_board = match winner {
        Side::Human => game.machine().board(),
        Side::Machine => game.human().board(),
    };
    assert!(loser_board.defeated());
}
