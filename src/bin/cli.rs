//! fixedrec CLI
//!
//! Runs one store operation per invocation and prints the result.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use fixedrec::query::Field;
use fixedrec::record::default_dataset;
use fixedrec::store::{Matches, ScanEntry};
use fixedrec::{FixedRecError, Record, RecordStore, Result, StoreConfig, SyncStrategy};
use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

/// fixedrec CLI
#[derive(Parser, Debug)]
#[command(name = "fixedrec-cli")]
#[command(about = "Operate on a fixed-record-length binary store")]
#[command(version)]
struct Args {
    /// Store file
    #[arg(short, long, default_value = "records.bin")]
    file: PathBuf,

    /// Skip the exclusive advisory lock
    #[arg(long)]
    no_lock: bool,

    /// Do not fsync after mutations
    #[arg(long)]
    no_sync: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Replace the store contents with records from a TOML file, or with the
    /// built-in three-record dataset when no file is given
    Init {
        /// File containing [[record]] tables
        seed: Option<PathBuf>,
    },

    /// List every record
    List,

    /// Show the record at a position
    Get {
        position: u64,
    },

    /// Insert a record at a position (n+1 appends)
    Insert {
        position: u64,
        #[arg(allow_hyphen_values = true)]
        name: String,
        #[arg(allow_negative_numbers = true)]
        count: i32,
        #[arg(allow_negative_numbers = true)]
        price: f32,
        #[arg(allow_hyphen_values = true)]
        category: String,
    },

    /// Delete the record at a position
    Delete {
        position: u64,
    },

    /// Find records where a field equals a value
    Find {
        field: Field,
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Find records matching two field values
    Find2 {
        field1: Field,
        #[arg(allow_hyphen_values = true)]
        value1: String,
        field2: Field,
        #[arg(allow_hyphen_values = true)]
        value2: String,
    },

    /// Compare count (integer literal) or price (fractional literal)
    Compare {
        /// One of >, <, =
        op: String,
        #[arg(allow_negative_numbers = true)]
        literal: String,
    },
}

/// Layout of an `init` seed file
#[derive(Deserialize, Debug)]
struct SeedFile {
    #[serde(default)]
    record: Vec<Record>,
}

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,fixedrec=info"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    let config = StoreConfig::builder()
        .advisory_lock(!args.no_lock)
        .sync_strategy(if args.no_sync {
            SyncStrategy::Never
        } else {
            SyncStrategy::EveryMutation
        })
        .build();

    let mut store = match RecordStore::open(&args.file, config) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to open store {}: {}", args.file.display(), e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&mut store, args.command) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(store: &mut RecordStore, command: Commands) -> Result<()> {
    match command {
        Commands::Init { seed } => {
            let records = match seed {
                Some(path) => load_seed(&path)?,
                None => default_dataset(),
            };
            let count = store.initialize(&records)?;
            println!(
                "Wrote {} records of {} bytes",
                count,
                fixedrec::RECORD_SIZE
            );
        }
        Commands::List => {
            let mut empty = true;
            for entry in store.scan()? {
                empty = false;
                match entry? {
                    ScanEntry::Record { position, record } => {
                        println!("{:>5}: {}", position, record)
                    }
                    ScanEntry::Corrupt {
                        position,
                        bytes_read,
                    } => println!(
                        "{:>5}: <corrupt: {} of {} bytes>",
                        position,
                        bytes_read,
                        fixedrec::RECORD_SIZE
                    ),
                }
            }
            if empty {
                println!("Store is empty");
            }
        }
        Commands::Get { position } => {
            println!("{:>5}: {}", position, store.get(position)?);
        }
        Commands::Insert {
            position,
            name,
            count,
            price,
            category,
        } => {
            store.insert_at(position, &Record::new(name, count, price, category))?;
            println!("Inserted at position {}", position);
        }
        Commands::Delete { position } => {
            let removed = store.delete_at(position)?;
            println!("Deleted {}: {}", position, removed);
        }
        Commands::Find { field, value } => {
            print_matches(store.find_by_field(field, &value)?)?;
        }
        Commands::Find2 {
            field1,
            value1,
            field2,
            value2,
        } => {
            print_matches(store.find_by_two_fields(field1, &value1, field2, &value2)?)?;
        }
        Commands::Compare { op, literal } => {
            print_matches(store.find_by_comparison(&op, &literal)?)?;
        }
    }
    Ok(())
}

fn load_seed(path: &Path) -> Result<Vec<Record>> {
    let text = std::fs::read_to_string(path)?;
    let seed: SeedFile =
        toml::from_str(&text).map_err(|e| FixedRecError::Config(e.to_string()))?;
    Ok(seed.record)
}

fn print_matches(matches: Matches<'_>) -> Result<()> {
    let mut found = 0usize;
    for item in matches {
        let (position, record) = item?;
        println!("{:>5}: {}", position, record);
        found += 1;
    }
    if found == 0 {
        println!("No matching records");
    }
    Ok(())
}
