use std::fs;
use std::process;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn lexicon_export() {
    print!("{}", tricode_core::lexicon::default_toml());
}

pub fn lexicon_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let lex = die!(tricode_core::lexicon::parse_lexicon_toml(&content), "Error: {}");
    println!(
        "OK: {} special cases, {} stop words",
        lex.special_case_count(),
        lex.stop_word_count()
    );
}
