//! Query validation and correction against the vocabulary index.

use ahash::AHashSet;
use serde::Serialize;

use crate::analysis::tokenize;
use crate::data::ProductId;
use crate::index::VocabularyIndex;
use crate::spelling::levenshtein::levenshtein;

/// Maximum edit distance a vocabulary word may have from a query token to
/// count as a correction.
const MAX_EDIT_DISTANCE: usize = 2;
/// Corrections offered for a single-word query.
const SINGLE_WORD_SUGGESTIONS: usize = 5;
/// Candidate corrections considered per token of a phrase query.
const PHRASE_CANDIDATES_PER_TOKEN: usize = 3;

/// Outcome of a spell check.
#[derive(Debug, Clone, Serialize)]
pub struct SpellCheckReport {
    /// Whether every token of the query is present in the vocabulary.
    pub exists: bool,
    /// Proposed replacements; empty when the query exists or nothing
    /// within range was found.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

/// Validates queries against the vocabulary and proposes corrections.
///
/// Borrows the index; construct one per check or keep one alive alongside
/// the index, both are equally cheap.
pub struct SpellCorrector<'a> {
    index: &'a VocabularyIndex,
}

impl<'a> SpellCorrector<'a> {
    pub fn new(index: &'a VocabularyIndex) -> Self {
        Self { index }
    }

    /// Check `query` against the vocabulary.
    ///
    /// The query exists when all of its tokens are indexed (an empty token
    /// list exists vacuously). A single misspelled word yields up to five
    /// nearest vocabulary words within edit distance two, nearest first. A
    /// phrase with misspelled words yields at most one corrected phrase:
    /// the first combination of per-token candidates whose tokens all occur
    /// together in at least one product name.
    pub fn check(&self, query: &str) -> SpellCheckReport {
        let tokens = tokenize(query);
        let exists = tokens.iter().all(|token| self.index.contains(token));
        if exists {
            return SpellCheckReport {
                exists: true,
                suggestions: Vec::new(),
            };
        }

        let suggestions = if tokens.len() == 1 {
            self.nearest_words(&tokens[0], SINGLE_WORD_SUGGESTIONS)
        } else {
            self.correct_phrase(&tokens).into_iter().collect()
        };
        SpellCheckReport {
            exists: false,
            suggestions,
        }
    }

    /// Up to `limit` vocabulary words within [`MAX_EDIT_DISTANCE`] of
    /// `token`, nearest first. Ties keep vocabulary enumeration order.
    fn nearest_words(&self, token: &str, limit: usize) -> Vec<String> {
        let mut scored: Vec<(usize, String)> = self
            .index
            .all_words()
            .into_iter()
            .map(|word| (levenshtein(token, &word), word))
            .filter(|(distance, _)| *distance <= MAX_EDIT_DISTANCE)
            .collect();
        // Stable sort: equal distances keep enumeration order.
        scored.sort_by_key(|(distance, _)| *distance);
        scored
            .into_iter()
            .take(limit)
            .map(|(_, word)| word)
            .collect()
    }

    /// The first candidate phrase whose tokens all occur together in some
    /// product, if any.
    fn correct_phrase(&self, tokens: &[String]) -> Option<String> {
        let candidates: Vec<Vec<String>> = tokens
            .iter()
            .map(|token| {
                if self.index.contains(token) {
                    return vec![token.clone()];
                }
                let nearest = self.nearest_words(token, PHRASE_CANDIDATES_PER_TOKEN);
                if nearest.is_empty() {
                    // Last resort: keep the token as typed.
                    vec![token.clone()]
                } else {
                    nearest
                }
            })
            .collect();

        let mut phrase = Vec::with_capacity(candidates.len());
        self.enumerate_phrases(&candidates, &mut phrase)
    }

    /// Depth-first, left-to-right walk of the candidate cross product,
    /// stopping at the first phrase that matches at least one product.
    fn enumerate_phrases<'w>(
        &self,
        candidates: &'w [Vec<String>],
        phrase: &mut Vec<&'w str>,
    ) -> Option<String> {
        if phrase.len() == candidates.len() {
            let joined = phrase.join(" ");
            if self.phrase_matches(&joined) {
                return Some(joined);
            }
            return None;
        }
        for word in &candidates[phrase.len()] {
            phrase.push(word.as_str());
            if let Some(found) = self.enumerate_phrases(candidates, phrase) {
                return Some(found);
            }
            phrase.pop();
        }
        None
    }

    /// AND-intersection over the phrase's own tokens, mirroring the search
    /// path without filters or ranking.
    fn phrase_matches(&self, phrase: &str) -> bool {
        let tokens = tokenize(phrase);
        if tokens.is_empty() {
            return false;
        }

        let mut survivors: Option<AHashSet<ProductId>> = None;
        for token in &tokens {
            let postings: AHashSet<ProductId> =
                self.index.postings(token).iter().copied().collect();
            let next = match survivors {
                None => postings,
                Some(current) => current.intersection(&postings).copied().collect(),
            };
            if next.is_empty() {
                return false;
            }
            survivors = Some(next);
        }
        true
    }
}
