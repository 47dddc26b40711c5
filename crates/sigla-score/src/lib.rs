//! Name tokenization, positional letter scoring, and three-letter code
//! generation.

mod generator;
mod letters;
mod tokenizer;

pub use generator::{candidates, scored_letters};
pub use letters::letter_score;
pub use tokenizer::Tokenizer;
