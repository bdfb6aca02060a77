extern crate auction_fp;
use argh::FromArgs;
use auction_fp::*;
use indicatif::ProgressIterator;
use std::time::Instant;

macro_rules! time {
    ($x:expr) => {{
        let start = Instant::now();
        $x;
        let end = start.elapsed();
        end.as_nanos() as f64 / 1_000_000_000 as f64
    }};
}

#[derive(FromArgs)]
/// Time repeated fictitious-play runs of a preset rule.
struct Args {
    /// preset rule: symmetric or asymmetric
    #[argh(positional)]
    preset: String,

    /// number of runs
    #[argh(positional)]
    run: usize,

    /// override the preset's round count
    #[argh(option)]
    rounds: Option<usize>,
}

fn bench(args: &Args) -> Result<(f64, f64), Error> {
    let mut rule = rule::from_name(&args.preset)?;
    if let Some(rounds) = args.rounds {
        rule.rounds = rounds;
    }

    let mut nanos: Vec<f64> = Vec::new();
    for _ in (0..args.run).progress() {
        let mut fp = fictitious_play::FictitiousPlay::new(rule.clone())?;
        let mut sampler = valuation::Valuations::new(&rule);
        let mut rng = rule.rng();
        nanos.push(time!({
            fp.run(&mut sampler, &mut rng)?
        }));
    }

    let runs = nanos.len().max(1) as f64;
    let avg = nanos.iter().sum::<f64>() / runs;
    let std = (nanos
        .iter()
        .map(|t| t - avg)
        .map(|t| t * t)
        .sum::<f64>()
        / runs)
        .sqrt();
    Ok((avg, std))
}

fn main() {
    env_logger::init();

    let args: Args = argh::from_env();
    match bench(&args) {
        Ok((avg, std)) => {
            dbg!(avg);
            dbg!(std);
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
