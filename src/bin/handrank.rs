//! Hand Ranking CLI
//!
//! Ranks five-card poker hands given as arguments, or one per line on
//! stdin when no arguments are given.
//!
//! Options: --winner, --json, -v

use anyhow::Context;
use clap::Parser;
use handrank::*;
use std::io::BufRead;

#[derive(Parser)]
#[command(author, version, about = "Rank five-card poker hands, strongest first", long_about = None)]
struct Args {
    /// Hands to rank, each quoted, e.g. "AS KD QH 2S 6C"
    hands: Vec<String>,
    /// Print only the winning hand(s)
    #[arg(short, long)]
    winner: bool,
    /// Print results as JSON
    #[arg(short, long)]
    json: bool,
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(serde::Serialize)]
struct Record {
    place: usize,
    hand: String,
    strength: Strength,
    key: Vec<u8>,
}

impl Args {
    fn level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }

    fn lines(&self) -> anyhow::Result<Vec<String>> {
        match self.hands.is_empty() {
            false => Ok(self.hands.clone()),
            true => std::io::stdin()
                .lock()
                .lines()
                .collect::<Result<Vec<String>, _>>()
                .context("read hands from stdin"),
        }
    }
}

fn parse(lines: &[String]) -> anyhow::Result<Vec<Hand>> {
    lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .filter(|line| !line.starts_with('#'))
        .map(|line| Hand::try_from(line).with_context(|| format!("parse hand {:?}", line)))
        .collect()
}

/// ties share a place, the next distinct strength skips past them
fn places(showdown: &Showdown) -> Vec<usize> {
    let mut places = Vec::with_capacity(showdown.len());
    let mut prev: Option<&Strength> = None;
    for (i, (_, strength)) in showdown.iter().enumerate() {
        let place = match prev {
            Some(p) if p == strength => places.last().copied().unwrap_or(1),
            _ => i + 1,
        };
        places.push(place);
        prev = Some(strength);
    }
    places
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    handrank::log(args.level());
    let hands = parse(&args.lines()?)?;
    log::info!("ranking {} hands", hands.len());
    let showdown = Showdown::from(hands.as_slice());
    let records = places(&showdown)
        .into_iter()
        .zip(showdown)
        .map(|(place, (hand, strength))| Record {
            place,
            hand: hand.to_string(),
            key: strength.key(),
            strength,
        })
        .filter(|record| !args.winner || record.place == 1)
        .collect::<Vec<Record>>();
    if records.is_empty() {
        return Err(HandError::EmptyHandCollection).context("nothing to rank");
    }
    match args.json {
        true => println!("{}", serde_json::to_string_pretty(&records)?),
        false => records
            .iter()
            .for_each(|r| println!("{:>2}. {:<16} {}", r.place, r.hand, r.strength)),
    }
    Ok(())
}
