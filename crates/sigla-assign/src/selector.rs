use crate::registry::Registry;

/// Outcome of selection for one name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Winning code(s), space-separated on ties; empty when nothing
    /// survived conflict resolution.
    pub text: String,
    /// The winning score, `None` when nothing survived.
    pub score: Option<u32>,
}

/// Pick the lowest-scoring surviving code(s) for one name.
///
/// `codes` is the name's distinct code list in generation order; that order
/// breaks score ties. Codes contested by another name are filtered out.
/// Every code tied at the minimum score is emitted, space-separated; codes
/// scoring higher are dropped even when valid.
pub fn choose(registry: &Registry, owner: usize, codes: &[String]) -> Selection {
    let mut survivors: Vec<(u32, usize, &str)> = codes
        .iter()
        .enumerate()
        .filter_map(|(sequence, code)| {
            registry
                .score_for(code, owner)
                .map(|score| (score, sequence, code.as_str()))
        })
        .collect();

    survivors.sort_by_key(|&(score, sequence, _)| (score, sequence));

    let Some(&(best, _, _)) = survivors.first() else {
        return Selection {
            text: String::new(),
            score: None,
        };
    };

    let text = survivors
        .iter()
        .take_while(|&&(score, _, _)| score == best)
        .map(|&(_, _, code)| code)
        .collect::<Vec<_>>()
        .join(" ");

    Selection {
        text,
        score: Some(best),
    }
}
