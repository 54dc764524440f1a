use std::fs;
use std::io::{BufWriter, Write};
use std::process;

use unicode_width::UnicodeWidthStr;

use tricode_core::converter::{ConversionResult, Converter, StatsSnapshot};
use tricode_core::lexicon::{parse_lexicon_toml, Lexicon};

use crate::{clipboard, csv};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub(crate) fn load_lexicon(path: Option<&str>) -> Lexicon {
    match path {
        Some(file) => {
            let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
            die!(parse_lexicon_toml(&content), "Error in lexicon {file}: {}")
        }
        None => Lexicon::default(),
    }
}

/// Read labels from a file, one per line, skipping blank lines and
/// `#` comments.
pub(crate) fn read_labels(input_file: &str) -> Vec<String> {
    let content = die!(
        fs::read_to_string(input_file),
        "Error reading {input_file}: {}"
    );
    content
        .lines()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .collect()
}

pub(crate) fn print_stats(stats: &StatsSnapshot) {
    println!();
    println!("=== Stats ===");
    println!("  Conversions:   {}", stats.total_conversions);
    println!("  Unique codes:  {}", stats.unique_codes);
    println!("  Special cases: {}", stats.special_cases);
}

/// Print one result per line, original label padded to display width.
pub(crate) fn print_result_table(results: &[ConversionResult]) {
    let width = results.iter().map(|r| r.original.width()).max().unwrap_or(0);
    for r in results {
        let pad = " ".repeat(width - r.original.width());
        println!("  {}{}  ->  {}", r.original, pad, r.code);
    }
}

pub fn convert_cmd(text: &str, keep_stop_words: bool, json: bool, copy: bool, lexicon: Option<&str>) {
    let mut converter = Converter::with_lexicon(load_lexicon(lexicon));
    let result = die!(converter.convert(text, !keep_stop_words), "Error: {}");

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&result).expect("JSON serialization failed")
        );
    } else {
        println!("{}", result.original);
        println!("  code:    {}", result.code);
        println!("  compact: {}", result.compact);
    }

    if copy && clipboard::copy(&result.code) {
        eprintln!("copied {} to clipboard", result.code);
    }
}

pub fn batch_cmd(
    input_file: &str,
    out_csv: Option<&str>,
    keep_stop_words: bool,
    lexicon: Option<&str>,
) {
    let mut converter = Converter::with_lexicon(load_lexicon(lexicon));
    let labels = read_labels(input_file);

    let mut results = Vec::with_capacity(labels.len());
    for label in &labels {
        match converter.convert(label, !keep_stop_words) {
            Ok(r) => results.push(r),
            Err(e) => eprintln!("skipped: {e}"),
        }
    }

    print_result_table(&results);

    if let Some(out_file) = out_csv {
        let file = die!(fs::File::create(out_file), "Error creating {out_file}: {}");
        let mut writer = BufWriter::new(file);
        die!(csv::write_results(&mut writer, &results), "Error writing CSV: {}");
        die!(writer.flush(), "Error writing CSV: {}");
        eprintln!("CSV written: {} results -> {}", results.len(), out_file);
    }

    print_stats(&converter.stats());
}
