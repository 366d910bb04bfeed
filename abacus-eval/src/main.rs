//! abacus-eval - Apply calculator keypad intents from the command line

use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;
use libabacus::logging::LoggingConfig;
use libabacus::{apply_intent, parse_tokens, CalculatorState, Config, ErrorEntry, Result};

#[derive(Parser, Debug)]
#[command(name = "abacus-eval")]
#[command(version, about = "Press calculator keys from the command line")]
#[command(long_about = r#"Press calculator keys from the command line and print the display.

Tokens are the keypad keys, separated by whitespace. Numbers expand into
one key press per character.

EXAMPLES:
    abacus-eval 5 + 3 =
    abacus-eval 9 sqrt =
    echo "12.5 * 4 =" | abacus-eval
    abacus-eval --trace 8 / 0 =
    abacus-eval --format json 2 neg

TOKENS:
    0-9 .            digits and decimal point
    + - * /          operators (also x, ×, ÷)
    sqrt √ r         square root
    =                equals
    c clear          clear
    back bs ←        backspace
    neg n ±          toggle sign

EXIT CODES:
    0 - Success (an "Error" display is still a successful run)
    1 - Error (configuration, IO)
    3 - Invalid input (unknown token)
"#)]
struct Cli {
    /// Key tokens to press (reads from stdin if not provided)
    tokens: Vec<String>,

    /// Output format
    #[arg(short, long, default_value = "text", value_name = "FORMAT")]
    #[arg(value_parser = ["text", "json"])]
    format: String,

    /// Print the display after every key press
    #[arg(short, long)]
    trace: bool,

    /// How digits and backspace treat an "Error" display (replace or literal)
    #[arg(long, value_name = "MODE")]
    error_entry: Option<ErrorEntry>,

    /// Path to config file (defaults to $ABACUS_CONFIG or the XDG config dir)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match cli.config {
        Some(ref path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };

    // Logging waits for the config so its [logging] section applies
    LoggingConfig::from_settings(&config.logging, cli.verbose)
        .with_env_overrides()
        .init();

    let error_entry = cli.error_entry.unwrap_or(config.engine.error_entry);

    let script = if cli.tokens.is_empty() {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        input
    } else {
        cli.tokens.join(" ")
    };

    let intents = parse_tokens(&script)?;
    tracing::debug!("Applying {} intents", intents.len());

    let json = cli.format == "json";
    let mut state = CalculatorState::with_error_entry(error_entry);

    for intent in intents {
        state = apply_intent(state, intent);

        if cli.trace {
            if json {
                println!(
                    "{}",
                    serde_json::json!({ "intent": intent.label(), "display": state.display() })
                );
            } else {
                println!("{}\t{}", intent.label(), state.display());
            }
        }
    }

    if json {
        let output = serde_json::to_string(&state)
            .map_err(io::Error::from)?;
        println!("{}", output);
    } else {
        println!("{}", state.display());
    }

    Ok(())
}
