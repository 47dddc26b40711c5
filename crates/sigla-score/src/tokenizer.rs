/// Name tokenizer: strips everything that is not an ASCII letter or
/// whitespace, uppercases the remainder, and splits on whitespace runs.
pub struct Tokenizer;

impl Tokenizer {
    /// Tokenize a raw name into cleaned uppercase words.
    ///
    /// Input with no letters produces an empty list.
    pub fn tokenize(raw: &str) -> Vec<String> {
        let cleaned: String = raw
            .chars()
            .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
            .map(|c| c.to_ascii_uppercase())
            .collect();

        cleaned.split_whitespace().map(str::to_string).collect()
    }
}
