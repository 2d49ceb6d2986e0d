use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
    process,
    time::Instant,
};

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use nashsolver::{
    BimatrixGame, Equilibrium, lemke_howson,
    solver::{Report, ReportFormat, SolverConfig, SolverError, parse_game},
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File with the game description. Reads standard input when omitted.
    input: Option<PathBuf>,

    /// JSON file with the solver configuration. Flags below override it.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Absolute tolerance under which two equilibria are the same.
    #[arg(short, long)]
    tolerance: Option<f64>,

    /// Maximum number of pivots of a single path.
    #[arg(short, long)]
    max_pivots: Option<usize>,

    /// Stop after this many distinct equilibria. Defaults to R+C.
    #[arg(long)]
    target: Option<usize>,

    /// Only restart from the artificial equilibrium.
    #[arg(long)]
    no_graph_search: bool,

    /// Follow a single path dropping this label (1..=R+C) instead of
    /// enumerating.
    #[arg(short, long)]
    label: Option<usize>,

    #[arg(short, long, value_enum, default_value_t)]
    format: ReportFormat,

    /// Show a spinner with the outcome of every path.
    #[arg(long)]
    progress: bool,

    /// Increase logging verbosity. RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn read_game(input: Option<&PathBuf>) -> Result<BimatrixGame, SolverError> {
    let contents = match input {
        Some(path) => fs::read_to_string(path)
            .map_err(|err| SolverError::InvalidPath(err, path.display().to_string()))?,
        None => {
            let mut contents = String::new();
            io::stdin()
                .read_to_string(&mut contents)
                .map_err(SolverError::ReadInput)?;
            contents
        }
    };
    parse_game(&contents)
}

fn load_config(args: &Args) -> Result<SolverConfig, SolverError> {
    let mut config = match &args.config {
        Some(path) => SolverConfig::from_file(path)?,
        None => SolverConfig::default(),
    };
    if let Some(tolerance) = args.tolerance {
        config.tolerance = tolerance;
    }
    if let Some(max_pivots) = args.max_pivots {
        config.max_pivots = max_pivots;
    }
    if args.target.is_some() {
        config.target = args.target;
    }
    if args.no_graph_search {
        config.graph_search = false;
    }
    config.validate()?;
    Ok(config)
}

fn solve(args: &Args) -> Result<Vec<Equilibrium>, SolverError> {
    let config = load_config(args)?;
    let game = read_game(args.input.as_ref())?;
    let (m, n) = game.num_strategies();
    info!("solving {m}x{n} game with {config:?}");

    let now = Instant::now();
    let equilibria = match args.label {
        Some(k0) => vec![lemke_howson(&game, k0, config.max_pivots)?],
        None if args.progress => {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::with_template("{spinner} {human_pos} paths {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            let equilibria = config.enumerator().enumerate_with(&game, |label, run| {
                pb.inc(1);
                pb.set_message(match run {
                    Ok(_) => format!("label {label}: equilibrium"),
                    Err(err) => format!("label {label}: {err}"),
                });
            });
            pb.finish_and_clear();
            equilibria
        }
        None => config.enumerator().enumerate(&game),
    };
    info!("elapsed: {:.2?}", now.elapsed());

    Ok(equilibria)
}

fn main() {
    let args = Args::parse();
    init_logger(args.verbose);

    let result = solve(&args)
        .and_then(|equilibria| Report::new(&equilibria).write(args.format, io::stdout().lock()));
    if let Err(err) = result {
        eprintln!("Error: {err}");
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            eprintln!("  caused by: {cause}");
            source = cause.source();
        }
        process::exit(1);
    }
}
