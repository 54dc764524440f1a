//! Interactive conversion shell.
//!
//! Reads commands from stdin, keeps the session's results in a history
//! list, and exports that history as CSV on request.

use std::fs;
use std::io::{self, BufRead, BufWriter, Write};

use tricode_core::converter::{ConversionResult, Converter};

use super::convert_ops::{load_lexicon, print_result_table, print_stats};
use crate::{clipboard, csv};

const BANNER: &str = "tricode — label-to-code converter\ntype 'help' for commands, 'exit' to quit";

const HELP: &str = "\
Commands:
  convert <text>    convert a label and copy the code to the clipboard
  batch             convert multiple labels (empty line finishes)
  stats             show session statistics
  export <file>     export session history as CSV
  clear             clear session history
  help              show this help
  exit              quit

Examples:
  convert Eiffel Tower            ->  EIF-TOW
  convert Coca-Cola Can           ->  COC-COL-CAN
  convert Robot Learning Machine  ->  ROB-LEA-MAC";

pub fn shell_cmd(lexicon: Option<&str>) {
    let mut converter = Converter::with_lexicon(load_lexicon(lexicon));
    let mut history: Vec<ConversionResult> = Vec::new();

    println!("{BANNER}");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("\ntricode> ");
        let _ = io::stdout().flush();

        let Some(Ok(line)) = lines.next() else {
            break; // EOF or read error
        };
        let cmd = line.trim();

        if cmd.is_empty() {
            continue;
        }

        if cmd == "exit" || cmd == "quit" {
            break;
        } else if cmd == "help" {
            println!("{HELP}");
        } else if cmd == "stats" {
            print_stats(&converter.stats());
        } else if cmd == "clear" {
            history.clear();
            println!("history cleared");
        } else if let Some(file) = cmd.strip_prefix("export ") {
            export_history(&history, file.trim());
        } else if cmd == "batch" {
            println!("enter labels, one per line (empty line to finish):");
            let mut results = Vec::new();
            for entry in lines.by_ref() {
                let Ok(entry) = entry else { break };
                let label = entry.trim();
                if label.is_empty() {
                    break;
                }
                match converter.convert(label, true) {
                    Ok(r) => results.push(r),
                    Err(e) => println!("skipped: {e}"),
                }
            }
            print_result_table(&results);
            history.extend(results);
        } else if let Some(text) = cmd.strip_prefix("convert ") {
            match converter.convert(text.trim(), true) {
                Ok(r) => {
                    println!("  code:    {}", r.code);
                    println!("  compact: {}", r.compact);
                    if clipboard::copy(&r.code) {
                        println!("  (copied to clipboard)");
                    }
                    history.push(r);
                }
                Err(e) => println!("error: {e}"),
            }
        } else {
            println!("unknown command: {cmd} (type 'help')");
        }
    }
}

fn export_history(history: &[ConversionResult], file: &str) {
    if history.is_empty() {
        println!("no history to export");
        return;
    }
    let result = fs::File::create(file).and_then(|f| {
        let mut writer = BufWriter::new(f);
        csv::write_results(&mut writer, history)?;
        writer.flush()
    });
    match result {
        Ok(()) => println!("exported {} results to {file}", history.len()),
        Err(e) => println!("export failed: {e}"),
    }
}
