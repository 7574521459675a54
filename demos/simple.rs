use dfa_rs::dfa::Dfa;
use dfa_rs::finite_enum;
use dfa_rs::table::TransitionTable;
use dfa_rs::types::Fin;

finite_enum! {
    enum Bit { Zero, One }
}

finite_enum! {
    enum State { A, B }
}

use Bit::*;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    // Binary strings ending in 1.
    let table = TransitionTable::<Bit, State>::from_fn(|_q, s| match s {
        Zero => State::A,
        One => State::B,
    });
    let ends_in_one = Dfa::new(State::A, [State::B].into_iter().collect(), table);
    println!("ends_in_one = {:?}", ends_in_one);

    for w in [vec![One, Zero, One], vec![One, Zero], vec![]] {
        println!("accepts({:?}) = {}", w, ends_in_one.accepts(&w));
    }

    let not_one = ends_in_one.complement();
    println!("complement accepts [One, Zero] = {}", not_one.accepts(&[One, Zero]));

    let even_length = Dfa::from_fn(
        Fin::<2>::new(0),
        |q: Fin<2>| q.get() == 0,
        |q: Fin<2>, _s: Bit| Fin::new(1 - q.get()),
    );
    let both = ends_in_one.intersect(&even_length);
    println!("both = {:?}", both);
    println!("both accepts [One, Zero, One, One] = {}", both.accepts(&[One, Zero, One, One]));
    println!("both accepts [One, Zero, One] = {}", both.accepts(&[One, Zero, One]));

    let either = ends_in_one.union(&even_length);
    println!("either accepts [One, Zero, One] = {}", either.accepts(&[One, Zero, One]));
    println!("shortest word accepted by both = {:?}", both.shortest_accepted());
    println!("words of length 8 accepted by both = {}", both.count_accepted(8));

    Ok(())
}
