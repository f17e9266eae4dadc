//! pbn-to-lin: convert PBN deals into BBO LIN hand records.
//!
//! Without `--deal` or `--input` the built-in example deal is converted.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, error, info};
use pbn_to_lin::{
    convert_boards, lin::vulnerability_from_index, pbn::read_boards_file, pbn_to_lin_with,
    ConvertOptions, DealerMode,
};
use std::path::{Path, PathBuf};

const EXAMPLE_DEAL: &str =
    "N:QJ9875.K74.96.74 62.JT92.AJ43.AT5 AKT.AQ63.T7.KJ82 43.85.KQ852.Q963";

/// Convert PBN deals to BBO LIN records
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// PBN deal string, e.g. "N:QJ9875.K74.96.74 62.JT92.AJ43.AT5 ..."
    #[arg(short, long, value_name = "PBN", conflicts_with = "input")]
    deal: Option<String>,

    /// PBN file; every board with a Deal tag is converted
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Board number written into the record (with --input, the Board tags are used)
    #[arg(
        short,
        long,
        default_value_t = 2,
        value_parser = clap::value_parser!(u32).range(1..),
        conflicts_with = "input"
    )]
    board: u32,

    /// Vulnerability index: 0=None, 1=NS, 2=EW, 3=Both (with --input, the Vulnerable tags are used)
    #[arg(long, default_value_t = 1, value_name = "0-3", conflicts_with = "input")]
    vul: usize,

    /// How hands are seated and which dealer is written
    #[arg(long, value_enum, default_value_t = Seating::FixedSouth)]
    seating: Seating,

    /// Enable verbose logging (use -vv for trace output)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Seating {
    /// Listed hands go to S, W, N, E; dealer South
    FixedSouth,
    /// Listed hands go to N, E, S, W; dealer South
    NorthFirst,
    /// Listed hands are seated from the deal's dealer letter
    FromDeal,
}

impl From<Seating> for DealerMode {
    fn from(seating: Seating) -> Self {
        match seating {
            Seating::FixedSouth => DealerMode::FixedSouth,
            Seating::NorthFirst => DealerMode::NorthFirst,
            Seating::FromDeal => DealerMode::FromDeal,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp_millis()
        .init();

    let options = ConvertOptions {
        dealer_mode: args.seating.into(),
    };
    debug!("Options: {:?}", options);

    if let Some(path) = &args.input {
        return convert_file(path, &options);
    }

    let vulnerability = vulnerability_from_index(args.vul)?;
    let deal = args.deal.as_deref().unwrap_or(EXAMPLE_DEAL);

    // A bad deal is reported but is not a failure of the program
    match pbn_to_lin_with(deal, args.board, vulnerability, &options) {
        Ok(lin) => {
            println!("Original PBN String:\n{}", deal);
            println!("\nConverted BBO LIN String:\n{}", lin);
        }
        Err(e) => error!("{}", e),
    }

    Ok(())
}

fn convert_file(path: &Path, options: &ConvertOptions) -> Result<()> {
    info!("Reading {:?}", path);
    let boards = read_boards_file(path).with_context(|| format!("Failed to read {:?}", path))?;

    let mut converted = 0;
    for lin in convert_boards(&boards, options).into_iter().flatten() {
        println!("{}", lin);
        converted += 1;
    }

    info!("Converted {} of {} boards", converted, boards.len());
    if converted < boards.len() {
        error!("{} boards could not be converted", boards.len() - converted);
    }
    Ok(())
}
