//! "Did you mean?" suggestion ranking.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WordbookError};
use crate::spelling::sequence_matcher::SequenceMatcher;

/// A suggested word with its similarity to the query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The suggested word.
    pub word: String,
    /// Similarity ratio (higher is better, 0.0 to 1.0).
    pub score: f64,
}

impl Suggestion {
    /// Create a new suggestion.
    pub fn new(word: String, score: f64) -> Self {
        Suggestion { word, score }
    }

    /// Ordering that puts higher scores first.
    fn by_score_desc(&self, other: &Self) -> Ordering {
        other
            .score
            .partial_cmp(&self.score)
            .unwrap_or(Ordering::Equal)
    }
}

/// Configuration for suggestion generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SuggestionConfig {
    /// Maximum number of suggestions to return.
    pub max_results: usize,
    /// Minimum similarity a candidate needs to be suggested.
    pub cutoff: f64,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        SuggestionConfig {
            max_results: 5,
            cutoff: 0.4,
        }
    }
}

impl SuggestionConfig {
    /// Create a configuration with the given limits.
    pub fn new(max_results: usize, cutoff: f64) -> Self {
        SuggestionConfig {
            max_results,
            cutoff,
        }
    }

    /// Check that the cutoff is a ratio.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.cutoff) {
            return Err(WordbookError::invalid_argument(format!(
                "cutoff must be within [0.0, 1.0], got {}",
                self.cutoff
            )));
        }
        Ok(())
    }
}

/// Ranks candidate words by similarity to a query.
///
/// No case folding is applied; callers pass whatever case they want matched.
#[derive(Debug, Clone, Default)]
pub struct Suggester {
    config: SuggestionConfig,
}

impl Suggester {
    /// Create a suggester with custom configuration.
    pub fn new(config: SuggestionConfig) -> Self {
        Suggester { config }
    }

    /// Return up to `max_results` candidates scoring at least `cutoff`,
    /// best first. Candidates with equal scores keep their input order.
    pub fn suggest<I, S>(&self, query: &str, candidates: I) -> Vec<Suggestion>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if self.config.max_results == 0 {
            return Vec::new();
        }

        let cutoff = self.config.cutoff;
        let mut matcher = SequenceMatcher::new("", query);
        let mut scored = Vec::new();

        for candidate in candidates {
            let candidate = candidate.as_ref();
            matcher.set_first(candidate);

            // Cheap upper bounds first.
            if matcher.real_quick_ratio() < cutoff || matcher.quick_ratio() < cutoff {
                continue;
            }
            let score = matcher.ratio();
            if score >= cutoff {
                scored.push(Suggestion::new(candidate.to_string(), score));
            }
        }

        // sort_by is stable, which keeps ties in input order
        scored.sort_by(Suggestion::by_score_desc);
        scored.truncate(self.config.max_results);
        scored
    }
}

/// Convenience wrapper returning only the suggested words.
pub fn suggest<I, S>(query: &str, candidates: I, max_results: usize, cutoff: f64) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Suggester::new(SuggestionConfig::new(max_results, cutoff))
        .suggest(query, candidates)
        .into_iter()
        .map(|s| s.word)
        .collect()
}
