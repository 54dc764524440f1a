pub mod converter;
pub mod lexicon;
pub mod normalize;
