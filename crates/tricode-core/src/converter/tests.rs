use proptest::prelude::*;

use super::*;
use crate::normalize::normalize;

fn code_of(converter: &mut Converter, text: &str) -> String {
    converter.convert(text, true).unwrap().code
}

#[test]
fn test_end_to_end_examples() {
    let mut c = Converter::new();
    assert_eq!(code_of(&mut c, "Eiffel Tower"), "EIF-TOW");
    assert_eq!(code_of(&mut c, "Coca-Cola Can"), "COC-COL-CAN");
    assert_eq!(code_of(&mut c, "Robot Learning Machine"), "ROB-LEA-MAC");
    assert_eq!(code_of(&mut c, "iPhone 15 Pro Max"), "IPH-015-PRO-MAX");
    assert_eq!(code_of(&mut c, "The Statue of Liberty"), "STA-LIB");
}

#[test]
fn test_result_fields() {
    let mut c = Converter::new();
    let r = c.convert("The Statue of Liberty", true).unwrap();
    assert_eq!(r.original, "The Statue of Liberty");
    assert_eq!(r.cleaned, "THE STATUE OF LIBERTY");
    assert_eq!(r.words, vec!["STATUE", "LIBERTY"]);
    assert_eq!(r.chunks, vec!["STA", "LIB"]);
    assert_eq!(r.code, "STA-LIB");
    assert_eq!(r.compact, "STALIB");
    assert_eq!(r.length, 2);
}

#[test]
fn test_keep_stop_words() {
    let mut c = Converter::new();
    let r = c.convert("The Statue of Liberty", false).unwrap();
    assert_eq!(r.code, "THE-STA-OFX-LIB");
}

#[test]
fn test_empty_input_error() {
    let mut c = Converter::new();
    for input in ["", "   ", "!!!", "?!."] {
        let err = c.convert(input, true).unwrap_err();
        assert!(matches!(err, ConvertError::EmptyInput { .. }), "{input:?}");
    }
    // The error path must not touch the counters.
    let stats = c.stats();
    assert_eq!(stats.total_conversions, 0);
    assert_eq!(stats.unique_codes, 0);
}

#[test]
fn test_all_stop_words_succeeds_with_empty_code() {
    let mut c = Converter::new();
    let r = c.convert("the and of", true).unwrap();
    assert!(r.words.is_empty());
    assert!(r.chunks.is_empty());
    assert_eq!(r.code, "");
    assert_eq!(r.compact, "");
    assert_eq!(r.length, 0);
    // The empty code still counts as a distinct code.
    let stats = c.stats();
    assert_eq!(stats.total_conversions, 1);
    assert_eq!(stats.unique_codes, 1);
}

#[test]
fn test_abbreviate_short_words() {
    let lex = Lexicon::default();
    assert_eq!(abbreviate(&lex, "W"), "WXX");
    assert_eq!(abbreviate(&lex, "GO"), "GOX");
    assert_eq!(abbreviate(&lex, "CAT"), "CAT");
    assert_eq!(abbreviate(&lex, "TOWER"), "TOW");
}

#[test]
fn test_abbreviate_numeric() {
    let lex = Lexicon::default();
    assert_eq!(abbreviate(&lex, "7"), "007");
    assert_eq!(abbreviate(&lex, "42"), "042");
    assert_eq!(abbreviate(&lex, "123"), "123");
    // Padding then truncation keeps the first three digits.
    assert_eq!(abbreviate(&lex, "1234"), "123");
}

#[test]
fn test_abbreviate_special_cases_win() {
    let lex = Lexicon::default();
    // Two-letter word would pad to "UKX" anyway; table entry is used.
    assert_eq!(abbreviate(&lex, "UK"), "UKX");
    assert_eq!(abbreviate(&lex, "AI"), "AIX");
    // Long word bypasses the prefix rule entirely.
    assert_eq!(abbreviate(&lex, "MCDONALDS"), "MCD");
    assert_eq!(abbreviate(&lex, "IPHONE"), "IPH");
}

#[test]
fn test_special_case_length_is_verbatim() {
    let lex = crate::lexicon::parse_lexicon_toml("[special_cases]\nnasa = \"NASA\"\n").unwrap();
    // A 4-character entry is returned as-is, not trimmed to 3.
    assert_eq!(abbreviate(&lex, "NASA"), "NASA");
    let mut c = Converter::with_lexicon(lex);
    assert_eq!(code_of(&mut c, "NASA Rover"), "NASA-ROV");
}

#[test]
fn test_stats_counting() {
    let mut c = Converter::new();
    for _ in 0..3 {
        code_of(&mut c, "Eiffel Tower");
    }
    code_of(&mut c, "Big Ben");
    let stats = c.stats();
    assert_eq!(stats.total_conversions, 4);
    // Repeated identical inputs produce one distinct code.
    assert_eq!(stats.unique_codes, 2);
    assert_eq!(stats.special_cases, 7);
}

#[test]
fn test_multibyte_words() {
    let lex = Lexicon::default();
    // Prefix truncation is character-based, never byte-based.
    assert_eq!(abbreviate(&lex, "ÅNGSTRÖM"), "ÅNG");
    let mut c = Converter::new();
    assert_eq!(code_of(&mut c, "Ångström Unit"), "ÅNG-UNI");
}

proptest! {
    #[test]
    fn prop_normalize_idempotent(input in ".{0,64}") {
        let once = normalize(&input);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn prop_code_views_agree(input in ".{0,64}") {
        let mut c = Converter::new();
        if let Ok(r) = c.convert(&input, true) {
            prop_assert_eq!(&r.code, &r.chunks.join("-"));
            prop_assert_eq!(&r.compact, &r.chunks.concat());
            prop_assert_eq!(r.length, r.chunks.len());
            prop_assert_eq!(r.words.len(), r.chunks.len());
        }
    }

    #[test]
    fn prop_default_chunks_are_three_chars(word in "[A-Z]{3,16}") {
        let lex = Lexicon::default();
        // Ignore words that happen to hit the special-case table.
        prop_assume!(lex.special_case(&word.to_lowercase()).is_none());
        prop_assert_eq!(abbreviate(&lex, &word).chars().count(), 3);
    }
}
