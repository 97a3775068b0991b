//! Deckmeta - metagame archetype analyzer.
//!
//! Debug CLI for the library: builds a format from a scraped-deck JSON
//! batch, matches a `.dec` deck file against it, and prints the matched
//! archetype's copy-count percentages.
//!
//! ## Usage
//!
//! ```text
//! deckmeta [OPTIONS] <deck.dec>
//!
//! Options:
//!   --decks <file>   Scraped deck batch JSON (default: items.json)
//!   --cards <file>   Card database JSON; enables multiverse ID resolution
//!   --sets <list>    Comma-separated allowed set codes
//!                    (default: DTK,ORI,BFZ,OGW,SOI)
//! ```

use std::env;
use std::fs;
use std::io::BufReader;
use std::process;

use deckmeta::{
    CardDatabase, Deck, Format, ScrapeRecord, analyze_archetype, best_match, multiverse_ids,
};

/// Sets legal in Standard when the bundled scrape data was collected.
const STANDARD_SETS: [&str; 5] = ["DTK", "ORI", "BFZ", "OGW", "SOI"];

#[derive(Debug)]
struct CliOptions {
    /// Deck file to match against the format.
    deck_file: String,
    /// Scraped deck batch the format is built from.
    decks_file: String,
    /// Card database for multiverse ID resolution, if requested.
    cards_file: Option<String>,
    /// Allowed set codes for ID resolution.
    sets: Vec<String>,
}

fn print_usage() {
    println!("Usage: deckmeta [OPTIONS] <deck.dec>");
    println!();
    println!("Options:");
    println!("  --decks <file>   Scraped deck batch JSON (default: items.json)");
    println!("  --cards <file>   Card database JSON; enables multiverse ID resolution");
    println!("  --sets <list>    Comma-separated allowed set codes");
    println!("                   (default: {})", STANDARD_SETS.join(","));
}

fn parse_args() -> Result<CliOptions, String> {
    let mut deck_file = None;
    let mut decks_file = "items.json".to_string();
    let mut cards_file = None;
    let mut sets: Vec<String> = STANDARD_SETS.iter().map(|s| s.to_string()).collect();

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--decks" => {
                decks_file = args.next().ok_or("--decks requires a file argument")?;
            }
            "--cards" => {
                cards_file = Some(args.next().ok_or("--cards requires a file argument")?);
            }
            "--sets" => {
                let list = args.next().ok_or("--sets requires a comma-separated list")?;
                sets = list
                    .split(',')
                    .map(|code| code.trim().to_string())
                    .filter(|code| !code.is_empty())
                    .collect();
            }
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            other if other.starts_with("--") => {
                return Err(format!("Unknown option: {other}"));
            }
            other => {
                if deck_file.replace(other.to_string()).is_some() {
                    return Err("Only one deck file may be given".to_string());
                }
            }
        }
    }

    let deck_file = deck_file.ok_or("No deck file given")?;
    Ok(CliOptions {
        deck_file,
        decks_file,
        cards_file,
        sets,
    })
}

fn load_records(path: &str) -> Result<Vec<ScrapeRecord>, String> {
    let file = fs::File::open(path).map_err(|err| format!("Failed to open {path}: {err}"))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|err| format!("Failed to parse {path}: {err}"))
}

fn load_card_database(path: &str) -> Result<CardDatabase, String> {
    let file = fs::File::open(path).map_err(|err| format!("Failed to open {path}: {err}"))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|err| format!("Failed to parse {path}: {err}"))
}

fn run(options: &CliOptions) -> Result<(), String> {
    let records = load_records(&options.decks_file)?;
    let format = Format::from_records(&records);
    if format.is_empty() {
        return Err(format!("No decks found in {}", options.decks_file));
    }

    let deck = Deck::from_dec_file(&options.deck_file)
        .map_err(|err| format!("Failed to read {}: {err}", options.deck_file))?;

    let Some(archetype) = best_match(&format, &deck) else {
        println!("No archetype matched {}", deck.name());
        return Ok(());
    };

    let lines = analyze_archetype(archetype).map_err(|err| err.to_string())?;
    for line in &lines {
        println!("{line}");
    }

    if let Some(cards_file) = &options.cards_file {
        let database = load_card_database(cards_file)?;
        let allowed: Vec<&str> = options.sets.iter().map(String::as_str).collect();
        let targets: Vec<&str> = archetype.card_data().keys().map(String::as_str).collect();
        let ids = multiverse_ids(&database, &allowed, &targets);
        println!();
        println!("Multiverse IDs ({} of {} cards):", ids.len(), targets.len());
        for (card, id) in &ids {
            println!("{card}: {id}");
        }
    }

    Ok(())
}

fn main() {
    let options = match parse_args() {
        Ok(options) => options,
        Err(err) => {
            eprintln!("{err}");
            println!();
            print_usage();
            process::exit(2);
        }
    };

    if let Err(err) = run(&options) {
        eprintln!("{err}");
        process::exit(1);
    }
}
