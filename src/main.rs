//! Unihide - Hide text in text
//!
//! A CLI front end for the variation selector codec. Composite strings are
//! visually identical to their carriers, so `decode` and `clean` read from
//! stdin by default - pasting invisible characters as shell arguments is
//! unreliable in many terminals.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read};

use unihide::{clean_hidden_text, decode, encode};

/// Unihide - Hide text in text
///
/// Hides a UTF-8 message inside any carrier text using invisible Unicode
/// variation selectors. The output looks identical to the carrier.
#[derive(Parser)]
#[command(name = "unihide")]
#[command(version)]
#[command(about = "Hide text in text with invisible Unicode variation selectors")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hide a message inside a carrier text
    ///
    /// The hidden bytes are placed at random positions when the message fits
    /// in the carrier, so the output differs between runs while always
    /// decoding to the same message.
    Encode {
        /// The message to hide
        #[arg(short, long)]
        message: String,

        /// The visible carrier text (a single "A" is used if empty)
        #[arg(short, long, default_value = "")]
        carrier: String,
    },

    /// Recover the hidden message from a composite string
    ///
    /// Reads the composite string from stdin unless --input is given.
    Decode {
        /// The composite string (read from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },

    /// Strip all hidden content, leaving only the visible text
    ///
    /// Reads the composite string from stdin unless --input is given.
    Clean {
        /// The composite string (read from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

/// Returns `input` if present, otherwise reads all of stdin.
fn input_or_stdin(input: Option<String>) -> Result<String> {
    match input {
        Some(text) => Ok(text),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read composite string from stdin")?;
            // Shells append a trailing newline; it never carries payload
            Ok(buf.trim_end_matches('\n').to_string())
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode { message, carrier } => {
            println!("{}", encode(&message, &carrier));
        }
        Commands::Decode { input } => {
            let encoded = input_or_stdin(input)?;
            let message = decode(&encoded).context("failed to decode hidden message")?;
            println!("{message}");
        }
        Commands::Clean { input } => {
            let text = input_or_stdin(input)?;
            println!("{}", clean_hidden_text(&text));
        }
    }

    Ok(())
}
