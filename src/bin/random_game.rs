use clap::Parser;
use nashsolver::{BimatrixGame, EquilibriumEnumerator};
use ndarray::Array;
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Uniform;
use rand::{SeedableRng, rngs::StdRng};

/// Solves a game with payoffs drawn uniformly from [low, high).
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of strategies of the row player.
    rows: usize,

    /// Number of strategies of the column player.
    cols: usize,

    #[arg(long, default_value_t = 0.)]
    low: f64,

    #[arg(long, default_value_t = 10.)]
    high: f64,

    /// Seed of the payoff generator. Random when omitted.
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if args.rows == 0 || args.cols == 0 || args.low >= args.high {
        eprintln!("Both players need at least one strategy and low must be below high.");
        std::process::exit(2);
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let dist = Uniform::new(args.low, args.high);
    let a = Array::random_using((args.rows, args.cols), dist, &mut rng);
    let b = Array::random_using((args.rows, args.cols), dist, &mut rng);

    println!("Payoff for player 1:");
    println!("{a}");
    println!("Payoff for player 2:");
    println!("{b}");

    let game = match BimatrixGame::new(a, b) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };
    let equilibria = EquilibriumEnumerator::new().enumerate(&game);

    println!("{} equilibria", equilibria.len());
    for (i, eq) in equilibria.iter().enumerate() {
        let eq_payoff = game.strategy_payoff(eq);
        println!("Equilibrium {i}");
        println!("Player 1: {}", eq.0);
        println!("Player 2: {}", eq.1);
        println!("Payoff: {:.5}, {:.5}", eq_payoff.0, eq_payoff.1);
    }
}
