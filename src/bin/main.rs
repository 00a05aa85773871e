use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use secrecy::SecretString;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use pwd_audit::analyze_password;
use pwd_audit::wordlist::{GeneratorOptions, WordlistGenerator};

/// Password strength auditor and targeted wordlist generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Command to execute
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Check the strength of a single password
    ///
    /// Prints the entropy estimate, the strength band, and improvement
    /// recommendations.
    ///
    /// Example: pwd-audit check 'Tr1cky#Pass'
    Check {
        /// Password to analyze
        #[arg(value_name = "PASSWORD")]
        password: String,
    },

    /// Generate a guess-candidate wordlist from seed words
    ///
    /// Seeds are comma-separated (names, pets, dates). Every leetspeak
    /// variant of every seed is generated and augmented with common affix
    /// patterns and year suffixes.
    ///
    /// Example: pwd-audit wordlist "rex, smith, 1987" --output wordlist.txt
    Wordlist {
        /// Comma-separated seed words
        #[arg(value_name = "WORDS")]
        words: String,

        /// Output file path (overwritten if it exists)
        #[arg(short, long, value_name = "PATH")]
        output: PathBuf,

        /// Skip year suffixes (1990-2024)
        #[arg(long)]
        no_years: bool,

        /// Cap the number of generated candidates
        #[arg(long, value_name = "N")]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    match args.mode {
        Mode::Check { password } => check(password),
        Mode::Wordlist {
            words,
            output,
            no_years,
            limit,
        } => export_wordlist(&words, &output, no_years, limit),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn check(password: String) -> Result<()> {
    let password = SecretString::new(password.into());

    #[cfg(feature = "async")]
    let report = analyze_password(&password, None, None);

    #[cfg(not(feature = "async"))]
    let report = analyze_password(&password, None);

    let entropy = report.entropy.context("analysis did not complete")?;
    println!("Entropy: {entropy} bits");
    println!("Strength: {}", entropy.band());
    if let Some(external) = &report.external {
        println!("External score: {}/4", external.score);
    }

    if report.recommendations.is_empty() {
        println!("\nGreat password!");
    } else {
        println!("\nRecommendations:");
        for recommendation in &report.recommendations {
            println!("- {recommendation}");
        }
    }

    Ok(())
}

fn export_wordlist(words: &str, output: &Path, no_years: bool, limit: Option<usize>) -> Result<()> {
    let seeds: Vec<&str> = words
        .split(',')
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .collect();

    if seeds.is_empty() {
        bail!("no seed words provided");
    }

    info!("Generating wordlist from {} seed words...", seeds.len());
    let generator = WordlistGenerator::new(GeneratorOptions {
        include_years: !no_years,
        limit,
    });
    let wordlist = generator.generate(&seeds);

    if wordlist.is_truncated() {
        warn!(
            "Candidate cap reached; wordlist truncated at {} entries",
            wordlist.len()
        );
    }

    wordlist
        .write_to(output)
        .with_context(|| format!("failed to write wordlist to {}", output.display()))?;

    println!(
        "Wordlist saved to {} ({} candidates)",
        output.display(),
        wordlist.len()
    );

    Ok(())
}
