use clap::Parser;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use seqkit_util::{random_ints_no_reps, shuffle};
use tracing::info;
use tracing_forest::ForestLayer;
use tracing_forest::util::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

/// Draws lottery numbers without repetition.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// How many numbers to draw.
    #[arg(short, long, default_value_t = 6)]
    count: usize,

    /// The smallest number that can be drawn.
    #[arg(long, default_value_t = 1)]
    min: i64,

    /// The largest number that can be drawn.
    #[arg(long, default_value_t = 90)]
    max: i64,

    /// Seed for the random generator, for reproducible draws.
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    Registry::default()
        .with(env_filter)
        .with(ForestLayer::default())
        .init();

    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_nanos() as u64)
    });
    info!(seed, "drawing {} numbers from [{}, {}]", args.count, args.min, args.max);
    let mut rng = SmallRng::seed_from_u64(seed);

    // The sampler takes a half-open interval.
    let upper = match args.max.checked_add(1) {
        Some(upper) => upper,
        None => {
            eprintln!("--max must be smaller than {}", i64::MAX);
            std::process::exit(2);
        }
    };

    match random_ints_no_reps(args.count, args.min, upper, &mut rng) {
        Ok(mut numbers) => {
            numbers.sort_unstable();
            println!("Numbers: {numbers:?}");

            // The draw order is a uniform permutation of the sorted numbers.
            shuffle(&mut numbers, &mut rng);
            println!("Draw order: {numbers:?}");
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
