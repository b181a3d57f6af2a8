//! Text preprocessing module
//!
//! Cleans raw text and reduces it to a bag of normalized tokens.

pub mod lemma;
pub mod normalizer;
pub mod stem;
pub mod stopwords;

pub use normalizer::{NormalizeMode, TextNormalizer};
