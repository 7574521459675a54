use clap::Parser;
use color_eyre::eyre::bail;
use log::info;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use dfa_rs::batch::BatchConfig;
use dfa_rs::dfa::Dfa;
use dfa_rs::types::Fin;

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Binary words to recognize, e.g. `1011`.
    #[arg(value_name = "WORD")]
    words: Vec<String>,

    /// Number of random words to generate when no words are given.
    #[arg(long, value_name = "INT", default_value = "100000")]
    random: usize,

    /// Length of the random words.
    #[arg(long, value_name = "INT", default_value = "64")]
    len: usize,

    /// Seed for the random words.
    #[arg(long, value_name = "INT", default_value = "42")]
    seed: u64,

    /// Minimum number of words per parallel task.
    #[arg(long, value_name = "INT", default_value = "64")]
    min_len: usize,

    /// Evaluate words on a single thread.
    #[arg(long)]
    sequential: bool,
}

fn parse_word(s: &str) -> color_eyre::Result<Vec<bool>> {
    s.chars()
        .map(|c| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            _ => bail!("Invalid symbol '{}' in word '{}'", c, s),
        })
        .collect()
}

/// Random words with a fixed seed, so runs are reproducible.
fn random_words(count: usize, len: usize, seed: u64) -> Vec<Vec<bool>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| (0..len).map(|_| rng.random_bool(0.5)).collect())
        .collect()
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let args = Cli::parse();
    println!("args = {:?}", args);

    // Binary numbers (MSB first) divisible by 3, with an odd number of ones.
    let div_three = Dfa::from_fn(
        Fin::<3>::new(0),
        |q: Fin<3>| q.get() == 0,
        |q: Fin<3>, bit: bool| Fin::new((2 * q.get() + bit as usize) % 3),
    );
    let odd_ones = Dfa::from_fn(false, |q: bool| q, |q: bool, bit: bool| q ^ bit);
    let dfa = div_three.intersect(&odd_ones).materialize();

    let words = if args.words.is_empty() {
        random_words(args.random, args.len, args.seed)
    } else {
        args.words.iter().map(|w| parse_word(w)).collect::<color_eyre::Result<Vec<_>>>()?
    };

    let config = BatchConfig {
        parallel: !args.sequential,
        min_len: args.min_len,
    };

    let time_batch = std::time::Instant::now();
    let results = dfa.accepts_batch_with(&words, &config);
    let time_batch = time_batch.elapsed();

    if !args.words.is_empty() {
        for (w, accepted) in args.words.iter().zip(&results) {
            println!("{} -> {}", w, accepted);
        }
    }

    let accepted = results.iter().filter(|&&a| a).count();
    info!(
        "Accepted {} of {} words in {:.3} s",
        accepted,
        words.len(),
        time_batch.as_secs_f64()
    );

    Ok(())
}
