//! Sigla core domain types, weight tables, and errors.

mod error;
mod types;

pub use error::SiglaError;
pub use types::{Assignment, Candidate, ScoredLetter, WeightTable};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    // --- WeightTable::default ---

    #[test]
    fn default_table_spot_checks() {
        let table = WeightTable::default();
        assert_eq!(table.weight('A'), 25);
        assert_eq!(table.weight('E'), 35);
        assert_eq!(table.weight('N'), 15);
        assert_eq!(table.weight('Q'), 1);
        assert_eq!(table.weight('Z'), 1);
    }

    #[test]
    fn default_table_covers_all_letters() {
        let table = WeightTable::default();
        for letter in 'A'..='Z' {
            assert!(table.weight(letter) > 0, "no weight for {letter}");
        }
    }

    // --- WeightTable::weight ---

    #[test]
    fn weight_non_letter_is_zero() {
        let table = WeightTable::default();
        assert_eq!(table.weight('a'), 0);
        assert_eq!(table.weight('3'), 0);
        assert_eq!(table.weight(' '), 0);
    }

    // --- WeightTable::from_json ---

    fn full_map() -> BTreeMap<String, u32> {
        ('A'..='Z').map(|c| (c.to_string(), 10)).collect()
    }

    #[test]
    fn from_json_full_table() {
        let map = full_map();
        let json = serde_json::to_string(&map).unwrap();
        let table = WeightTable::from_json(&json).unwrap();
        assert_eq!(table.weight('A'), 10);
        assert_eq!(table.weight('Z'), 10);
    }

    #[test]
    fn from_json_rejects_malformed_input() {
        let err = WeightTable::from_json("not json").unwrap_err();
        assert!(err.to_string().contains("invalid weight table"));
    }

    #[test]
    fn from_map_rejects_missing_letter() {
        let mut map = full_map();
        map.remove("M");
        let err = WeightTable::from_map(&map).unwrap_err();
        assert!(err.to_string().contains("missing letter M"));
    }

    #[test]
    fn from_map_rejects_lowercase_key() {
        let mut map = full_map();
        map.insert("a".to_string(), 5);
        let err = WeightTable::from_map(&map).unwrap_err();
        assert!(err.to_string().contains("single uppercase letter"));
    }

    #[test]
    fn from_map_rejects_multi_char_key() {
        let mut map = full_map();
        map.insert("AB".to_string(), 5);
        assert!(WeightTable::from_map(&map).is_err());
    }

    #[test]
    fn from_map_rejects_zero_weight() {
        let mut map = full_map();
        map.insert("K".to_string(), 0);
        let err = WeightTable::from_map(&map).unwrap_err();
        assert!(err.to_string().contains("must be positive"));
    }

    // --- Assignment ---

    #[test]
    fn assignment_serializes() {
        let assignment = Assignment {
            name: "Ann".to_string(),
            abbreviation: "ANN".to_string(),
            score: Some(21),
            candidates: 1,
        };
        let json = serde_json::to_string(&assignment).unwrap();
        assert!(json.contains("\"ANN\""));
        assert!(json.contains("21"));
    }

    // --- SiglaError ---

    #[test]
    fn error_display() {
        let err = SiglaError::Config("bad table".to_string());
        assert!(err.to_string().contains("bad table"));
    }

    #[test]
    fn error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "not found");
        let err: SiglaError = io_err.into();
        assert!(err.to_string().contains("not found"));
    }
}
