pub mod convert_ops;
pub mod lexicon_ops;
pub mod shell;
