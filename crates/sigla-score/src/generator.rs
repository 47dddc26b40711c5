use crate::letters::letter_score;
use sigla_core::{Candidate, ScoredLetter, WeightTable};

/// Flatten a name's words into one ordered letter sequence, scoring each
/// letter by its position within its own word.
pub fn scored_letters(words: &[String], table: &WeightTable) -> Vec<ScoredLetter> {
    let mut letters = Vec::new();
    for word in words {
        let len = word.chars().count();
        for (position, letter) in word.chars().enumerate() {
            letters.push(ScoredLetter {
                letter,
                score: letter_score(letter, position, len, table),
            });
        }
    }
    letters
}

/// Enumerate every three-letter code for a flattened letter sequence.
///
/// A code is the sequence's first letter (score discarded) followed by any
/// two later letters in increasing position order; its score is the sum of
/// those two letters' scores. Codes are emitted with the second position
/// ascending in the outer loop and the third ascending in the inner loop;
/// selection relies on this order when breaking score ties.
///
/// Fewer than three letters yields no codes.
pub fn candidates(letters: &[ScoredLetter]) -> Vec<Candidate> {
    if letters.len() < 3 {
        return Vec::new();
    }

    let first = letters[0].letter;
    let n = letters.len();
    let mut codes = Vec::with_capacity((n - 1) * (n - 2) / 2);
    for i in 1..n {
        for j in (i + 1)..n {
            let code: String = [first, letters[i].letter, letters[j].letter]
                .into_iter()
                .collect();
            codes.push(Candidate {
                code,
                score: letters[i].score + letters[j].score,
            });
        }
    }
    codes
}
