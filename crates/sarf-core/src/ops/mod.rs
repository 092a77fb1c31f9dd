pub mod lexicon;

pub use lexicon::{Lexicon, LexiconStats};
