//! CLI tool for the short URL key generator and Base62 codec.
//!
//! Runs the same generator and codec the server uses, without starting it.
//!
//! # Usage
//!
//! ```bash
//! # Generate one identifier
//! cargo run --bin keygen -- generate
//!
//! # Generate a batch
//! cargo run --bin keygen -- generate --count 20
//!
//! # Base62 codec
//! cargo run --bin keygen -- encode 3521614606207
//! cargo run --bin keygen -- decode ZZZZZZZ
//! ```

use short_url::domain::id_generator::IdGenerator;
use short_url::infrastructure::keygen::{Base62KeyGenerator, ID_LENGTH};
use short_url::utils::base62;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;

/// Short URL key generator and Base62 codec.
#[derive(Parser)]
#[command(name = "keygen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate short URL identifiers
    Generate {
        /// Number of identifiers to generate
        #[arg(short, long, default_value_t = 1)]
        count: usize,
    },

    /// Encode a non-negative integer as Base62
    Encode {
        /// Value to encode
        value: u64,
    },

    /// Decode a Base62 string to an integer
    Decode {
        /// Base62 string to decode
        value: String,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { count } => generate(count)?,
        Commands::Encode { value } => encode(value),
        Commands::Decode { value } => decode(&value)?,
    }

    Ok(())
}

fn generate(count: usize) -> Result<()> {
    let generator = Base62KeyGenerator::new().context("Failed to seed key generator")?;
    let ids = generator
        .generate_many(count)
        .context("Failed to generate identifiers")?;

    println!(
        "{}",
        format!("🔑 {} identifier(s), {} chars each", ids.len(), ID_LENGTH)
            .bright_blue()
            .bold()
    );
    println!();

    for (i, id) in ids.iter().enumerate() {
        println!("  {:>4}  {}", (i + 1).to_string().dimmed(), id.green());
    }

    Ok(())
}

fn encode(value: u64) {
    println!(
        "{} {} {}",
        value.to_string().cyan(),
        "→".dimmed(),
        base62::encode(value).green().bold()
    );
}

fn decode(value: &str) -> Result<()> {
    let decoded =
        base62::decode(value).with_context(|| format!("Cannot decode '{value}'"))?;

    println!(
        "{} {} {}",
        value.cyan(),
        "→".dimmed(),
        decoded.to_string().green().bold()
    );

    Ok(())
}
