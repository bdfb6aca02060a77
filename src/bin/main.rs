use argh::FromArgs;
use auction_fp::*;
use auction_fp::rule::{Format, Rule};
use std::time::Instant;

#[macro_use]
extern crate log;

#[derive(FromArgs)]
/// Approximate equilibrium bidding in first-price and all-pay auctions by
/// fictitious play.
struct Args {
    /// preset rule: symmetric or asymmetric
    #[argh(option, default = "String::from(\"symmetric\")")]
    preset: String,

    /// path to a rule json, used instead of the preset
    #[argh(option)]
    rule: Option<String>,

    /// size of the bid grid
    #[argh(option)]
    bid_space: Option<usize>,

    /// number of players
    #[argh(option)]
    players: Option<usize>,

    /// number of rounds
    #[argh(option)]
    rounds: Option<usize>,

    /// auction format: first-price or all-pay
    #[argh(option, from_str_fn(parse_format))]
    format: Option<Format>,

    /// seed for valuation draws
    #[argh(option)]
    seed: Option<u64>,

    /// compute best responses of a round in parallel
    #[argh(switch)]
    parallel: bool,

    /// print value and bid histories
    #[argh(switch)]
    history: bool,

    /// print the report as json
    #[argh(switch)]
    json: bool,
}

fn parse_format(value: &str) -> Result<Format, String> {
    match value {
        "first-price" | "first_price" => Ok(Format::FirstPrice),
        "all-pay" | "all_pay" => Ok(Format::AllPay),
        _ => Err(format!("invalid format: {}", value)),
    }
}

fn load_rule(args: &Args) -> Result<Rule, Error> {
    let mut rule = match &args.rule {
        Some(path) => rule::from_file(path)?,
        None => rule::from_name(&args.preset)?,
    };
    if let Some(bid_space) = args.bid_space {
        rule.bid_space = bid_space;
    }
    if let Some(players) = args.players {
        rule.players = players;
    }
    if let Some(rounds) = args.rounds {
        rule.rounds = rounds;
    }
    if let Some(format) = args.format {
        rule.format = format;
    }
    if args.seed.is_some() {
        rule.seed = args.seed;
    }
    rule.parallel |= args.parallel;
    Ok(rule)
}

fn run(args: &Args) -> Result<(), Error> {
    let rule = load_rule(args)?;
    let mut fp = fictitious_play::FictitiousPlay::new(rule.clone())?;
    let mut sampler = valuation::Valuations::new(&rule);
    let mut rng = rule.rng();

    let start = Instant::now();
    fp.run(&mut sampler, &mut rng)?;
    let elapsed = start.elapsed().as_nanos() as f64 / 1_000_000_000 as f64;
    info!("elapsed time: {} [sec]", elapsed);

    if args.history {
        report::print_history("Value", fp.value_history());
        report::print_history("Bid", fp.bid_history());
    }
    let report = report::Report::new(&rule, fp.bid_history(), elapsed);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        report::print_report(&report);
    }
    Ok(())
}

fn main() {
    env_logger::init();

    trace!("start: main");

    let args: Args = argh::from_env();
    if let Err(e) = run(&args) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }

    trace!("finish: main");
}
