use clap::Parser;
use estimate_rs::Estimate;
use rand::{SeedableRng, rngs::StdRng};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of trials to run
    #[arg(short = 'n', long, default_value_t = 10_000)]
    trials: usize,

    /// Best case value
    #[arg(short, long)]
    best: f64,

    /// Worst case value
    #[arg(short, long)]
    worst: f64,

    /// Likely case value
    #[arg(short, long)]
    likely: f64,

    /// Label for the estimated event
    #[arg(short, long)]
    title: Option<String>,

    /// Seed for reproducible runs
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() {
    let args = Args::parse();

    let mut estimate = Estimate::new(args.best, args.worst, args.likely)
        .expect("Unable to build estimate from the given bounds");
    if let Some(title) = args.title {
        estimate = estimate.with_title(title);
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let lo = estimate.best.round() as i64;
    let hi = estimate.worst.round() as i64;
    let mut bins = vec![0u64; (hi - lo + 1) as usize];

    let mut total = 0i64;
    for _ in 0..args.trials {
        let case = estimate.trial_with(&mut rng);
        bins[(case - lo) as usize] += 1;
        total += case;
    }

    for (i, count) in bins.iter().enumerate() {
        println!("{} {}", lo + i as i64, count);
    }
    eprintln!(
        "{}: mean {} over {} trials",
        estimate.title,
        total as f64 / args.trials as f64,
        args.trials
    );
}
