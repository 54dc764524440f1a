use clap::{Parser, Subcommand};

use tricode_cli::commands::{convert_ops, lexicon_ops, shell};
use tricode_cli::trace_init;

#[derive(Parser)]
#[command(name = "tricode", version, about = "Convert labels into 3-letter codes")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a single label
    Convert {
        /// Label text (multiple words allowed without quoting)
        #[arg(required = true)]
        text: Vec<String>,
        /// Keep stop words instead of dropping them
        #[arg(long)]
        keep_stop_words: bool,
        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
        /// Copy the resulting code to the clipboard
        #[arg(long)]
        copy: bool,
        /// Path to a custom lexicon TOML file
        #[arg(long)]
        lexicon: Option<String>,
    },
    /// Convert labels from a file, one per line
    Batch {
        /// Input file (blank lines and # comments are skipped)
        input_file: String,
        /// Write results to a CSV file
        #[arg(long)]
        out_csv: Option<String>,
        /// Keep stop words instead of dropping them
        #[arg(long)]
        keep_stop_words: bool,
        /// Path to a custom lexicon TOML file
        #[arg(long)]
        lexicon: Option<String>,
    },
    /// Interactive conversion shell
    Shell {
        /// Path to a custom lexicon TOML file
        #[arg(long)]
        lexicon: Option<String>,
    },
    /// Lexicon file helpers
    Lexicon {
        #[command(subcommand)]
        command: LexiconCommand,
    },
}

#[derive(Subcommand)]
enum LexiconCommand {
    /// Print the built-in lexicon TOML
    Export,
    /// Validate a custom lexicon TOML file
    Validate {
        /// Lexicon TOML file
        file: String,
    },
}

fn main() {
    trace_init::init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Convert {
            text,
            keep_stop_words,
            json,
            copy,
            lexicon,
        } => {
            let text = text.join(" ");
            convert_ops::convert_cmd(&text, keep_stop_words, json, copy, lexicon.as_deref());
        }

        Command::Batch {
            input_file,
            out_csv,
            keep_stop_words,
            lexicon,
        } => {
            convert_ops::batch_cmd(
                &input_file,
                out_csv.as_deref(),
                keep_stop_words,
                lexicon.as_deref(),
            );
        }

        Command::Shell { lexicon } => shell::shell_cmd(lexicon.as_deref()),

        Command::Lexicon { command } => match command {
            LexiconCommand::Export => lexicon_ops::lexicon_export(),
            LexiconCommand::Validate { file } => lexicon_ops::lexicon_validate(&file),
        },
    }
}
