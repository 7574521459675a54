use clap::Parser;
use color_eyre::eyre::ensure;

use dfa_rs::dfa::Dfa;
use dfa_rs::types::Fin;

/// Upper bound on the modulus; the state space is `Fin<MAX_MODULUS>`.
const MAX_MODULUS: usize = 32;

type State = Fin<MAX_MODULUS>;

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// First modulus.
    #[arg(value_name = "INT", default_value = "3")]
    a: usize,

    /// Second modulus.
    #[arg(value_name = "INT", default_value = "5")]
    b: usize,

    /// Largest number to check.
    #[arg(long, value_name = "INT", default_value = "100")]
    limit: u64,
}

/// Binary numbers (MSB first) divisible by `n`. States `>= n` are unreachable.
fn divisible_by(n: usize) -> Dfa<bool, State> {
    Dfa::from_fn(
        Fin::new(0),
        |q: State| q.get() == 0,
        move |q: State, bit: bool| Fin::new((2 * q.get() + bit as usize) % n),
    )
}

fn binary(n: u64) -> Vec<bool> {
    format!("{:b}", n).chars().map(|c| c == '1').collect()
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
    ensure!(
        (1..=MAX_MODULUS).contains(&args.a) && (1..=MAX_MODULUS).contains(&args.b),
        "Moduli must be in 1..={}",
        MAX_MODULUS
    );

    let da = divisible_by(args.a);
    let db = divisible_by(args.b);
    println!("reachable states of mod {}: {}", args.a, da.reachable_states().len());

    let both = da.intersect(&db);
    let either = da.union(&db);
    let only_a = da.difference(&db);

    let pick = |d: &Dfa<bool, (State, State)>| -> Vec<u64> {
        (0..=args.limit).filter(|&n| d.accepts(&binary(n))).collect()
    };
    println!("divisible by {} and {}: {:?}", args.a, args.b, pick(&both));
    println!("divisible by {} or {}: {:?}", args.a, args.b, pick(&either));
    println!("divisible by {} but not {}: {:?}", args.a, args.b, pick(&only_a));

    println!(
        "divisible by {} implies divisible by {}: {}",
        args.a,
        args.b,
        da.is_subset_of(&db)
    );
    if let Some(w) = da.distinguishing_word(&db) {
        let s: String = w.iter().map(|&b| if b { '1' } else { '0' }).collect();
        println!("shortest word telling them apart: {}", s);
    }

    Ok(())
}
