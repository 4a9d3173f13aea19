use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;
use sos::{playout::random_playout, MatchConfig, Outcome, Player};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed> <games>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: u64 = args[2].parse()?;

    let mut blue_wins = 0u64;
    let mut red_wins = 0u64;
    let mut ties = 0u64;
    let mut total_lines = 0u64;

    for game in 0..games {
        let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(game));
        let (last, _) = random_playout(&mut rng, MatchConfig::default());
        total_lines += last.lines().len() as u64;
        match last.outcome() {
            Some(Outcome::Winner(Player::Blue)) => blue_wins += 1,
            Some(Outcome::Winner(Player::Red)) => red_wins += 1,
            Some(Outcome::Tie) => ties += 1,
            None => anyhow::bail!("playout {} ended before the board was full", game),
        }
    }

    let leader = match blue_wins.cmp(&red_wins) {
        std::cmp::Ordering::Greater => "blue",
        std::cmp::Ordering::Less => "red",
        std::cmp::Ordering::Equal => "tie",
    };
    let mean_lines = if games == 0 {
        0.0
    } else {
        total_lines as f64 / games as f64
    };

    let result = json!({
        "games": games,
        "blue_wins": blue_wins,
        "red_wins": red_wins,
        "ties": ties,
        "mean_lines": mean_lines,
        "leader": leader,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
