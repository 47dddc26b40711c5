use crate::registry::Registry;
use crate::selector;
use sigla_core::{Assignment, WeightTable};
use sigla_score::{candidates, scored_letters, Tokenizer};
use std::collections::HashSet;

/// One name's record across the batch: the raw input plus every distinct
/// code it produced, in first-generation order.
#[derive(Debug)]
struct NameRecord {
    raw: String,
    codes: Vec<String>,
    seen: HashSet<String>,
}

/// Drives a batch of names through its two phases.
///
/// `push` tokenizes, scores, and registers one name's codes into the shared
/// registry; `finish` consumes the driver and selects the winning code for
/// every name in input order. Selection cannot start while names can still
/// register, so a late name contesting an early name's code is always
/// accounted for.
#[derive(Debug)]
pub struct Abbreviator {
    table: WeightTable,
    registry: Registry,
    names: Vec<NameRecord>,
    skipped: usize,
}

impl Abbreviator {
    pub fn new(table: WeightTable) -> Self {
        Self {
            table,
            registry: Registry::new(),
            names: Vec::new(),
            skipped: 0,
        }
    }

    /// Register one raw name. Names with fewer than three letters after
    /// cleaning produce no codes and are dropped from the batch entirely.
    pub fn push(&mut self, raw: &str) {
        let words = Tokenizer::tokenize(raw);
        let letters = scored_letters(&words, &self.table);
        let generated = candidates(&letters);
        if generated.is_empty() {
            self.skipped += 1;
            return;
        }

        let owner = self.names.len();
        let mut record = NameRecord {
            raw: raw.to_string(),
            codes: Vec::new(),
            seen: HashSet::new(),
        };
        for candidate in generated {
            self.registry.register(&candidate.code, candidate.score, owner);
            if record.seen.insert(candidate.code.clone()) {
                record.codes.push(candidate.code);
            }
        }
        self.names.push(record);
    }

    /// Names dropped for having fewer than three letters.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Names registered so far.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Select the winning code(s) for every registered name, in input
    /// order. Consuming the driver ends the registration phase for good.
    pub fn finish(self) -> Vec<Assignment> {
        let registry = self.registry;
        self.names
            .into_iter()
            .enumerate()
            .map(|(owner, record)| {
                let selection = selector::choose(&registry, owner, &record.codes);
                Assignment {
                    name: record.raw,
                    abbreviation: selection.text,
                    score: selection.score,
                    candidates: record.codes.len(),
                }
            })
            .collect()
    }
}
