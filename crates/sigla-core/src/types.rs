use crate::error::SiglaError;
use serde::Serialize;
use std::collections::BTreeMap;

/// A single uppercase letter paired with its positional score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredLetter {
    pub letter: char,
    pub score: u32,
}

/// A three-letter code drawn in order from one name's letters: the name's
/// first letter plus two later letters. The score is the sum of the second
/// and third letters' scores; the first letter always scores 0 and is
/// omitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub code: String,
    pub score: u32,
}

/// The emitted result for one name: the raw input and its chosen code(s).
///
/// `abbreviation` holds a single code, several space-separated codes when
/// scores tie at the minimum, or the empty string when every code the name
/// produced was contested by another name. `score` is the winning score,
/// `None` when nothing survived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment {
    pub name: String,
    pub abbreviation: String,
    pub score: Option<u32>,
    pub candidates: usize,
}

/// Per-letter weights used when scoring interior letters.
///
/// Covers all 26 uppercase ASCII letters. The default table is the standard
/// one; a custom table can be loaded from a JSON object mapping each letter
/// to a positive weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightTable {
    weights: [u32; 26],
}

impl WeightTable {
    pub fn new(weights: [u32; 26]) -> Self {
        Self { weights }
    }

    /// The weight for an uppercase letter. Non-letters weigh 0.
    pub fn weight(&self, letter: char) -> u32 {
        if letter.is_ascii_uppercase() {
            self.weights[(letter as u8 - b'A') as usize]
        } else {
            0
        }
    }

    /// Parse a table from a JSON object like `{"A": 25, "B": 8, ...}`.
    pub fn from_json(input: &str) -> Result<Self, SiglaError> {
        let map: BTreeMap<String, u32> = serde_json::from_str(input)
            .map_err(|err| SiglaError::Config(format!("invalid weight table: {err}")))?;
        Self::from_map(&map)
    }

    /// Build a table from a letter-to-weight map. Every one of the 26
    /// uppercase letters must be present with a positive weight.
    pub fn from_map(map: &BTreeMap<String, u32>) -> Result<Self, SiglaError> {
        let mut weights = [0u32; 26];
        let mut seen = [false; 26];

        for (key, &value) in map {
            let mut chars = key.chars();
            let letter = match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii_uppercase() => c,
                _ => {
                    return Err(SiglaError::Config(format!(
                        "weight key {key:?} is not a single uppercase letter"
                    )));
                }
            };
            if value == 0 {
                return Err(SiglaError::Config(format!(
                    "weight for {letter} must be positive"
                )));
            }
            let index = (letter as u8 - b'A') as usize;
            weights[index] = value;
            seen[index] = true;
        }

        if let Some(missing) = seen.iter().position(|&s| !s) {
            return Err(SiglaError::Config(format!(
                "weight table is missing letter {}",
                (b'A' + missing as u8) as char
            )));
        }

        Ok(Self { weights })
    }
}

impl Default for WeightTable {
    fn default() -> Self {
        Self::new([
            25, 8, 8, 9, 35, 7, 9, 7, 25, 3, 6, 15, 8, 15, 20, 8, 1, 15, 15, 15, 20, 7, 7, 3, 7, 1,
        ])
    }
}
