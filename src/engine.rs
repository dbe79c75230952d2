//! The search engine facade.
//!
//! [`SearchEngine`] wires the catalog, the vocabulary index, the pattern
//! matcher and the frequency tracker into the query surface the serving
//! layer calls. It is constructed once at startup (catalog first, then the
//! index over product names) and shared by reference afterwards. The
//! catalog and index are immutable from then on; only the tracker mutates
//! under queries, and it synchronizes internally.

pub mod search;

use ahash::AHashSet;
use log::debug;

use crate::analysis::tokenize;
use crate::catalog::Catalog;
use crate::data::{Product, ProductId};
use crate::index::VocabularyIndex;
use crate::matcher::PatternMatcher;
use crate::spelling::corrector::{SpellCheckReport, SpellCorrector};
use crate::tracker::SearchTracker;

use self::search::{SearchOptions, apply_sorting};

/// Weight of a whole-phrase occurrence relative to single-token hits.
const PHRASE_BONUS: usize = 10;

/// The process-scoped engine over one loaded catalog.
pub struct SearchEngine {
    catalog: Catalog,
    vocabulary: VocabularyIndex,
    tracker: SearchTracker,
}

impl SearchEngine {
    /// Build an engine over `catalog`, indexing every token of every
    /// product name.
    pub fn new(catalog: Catalog) -> Self {
        let mut vocabulary = VocabularyIndex::new();
        for (id, product) in catalog.iter() {
            for token in tokenize(&product.name) {
                vocabulary.insert(&token, id);
            }
        }
        debug!(
            "indexed {} products, {} distinct tokens",
            catalog.len(),
            vocabulary.len()
        );
        Self {
            catalog,
            vocabulary,
            tracker: SearchTracker::new(),
        }
    }

    /// Execute a keyword search.
    ///
    /// The keyword is recorded verbatim, tokenized, and resolved through
    /// the index with AND semantics: only products containing every token
    /// in their name survive. Survivors pass the brand and type filters,
    /// are ranked by relevance (per-token occurrence counts in the name,
    /// plus a weighted bonus for the whole phrase when the query has more
    /// than one token), and finally reordered by the requested sort keys.
    /// Ties at every stage keep catalog order.
    pub fn search(&self, keyword: &str, options: &SearchOptions) -> Vec<Product> {
        self.tracker.track(keyword);

        let tokens = tokenize(keyword);
        let candidates = self.intersect_postings(&tokens);
        if candidates.is_empty() {
            return Vec::new();
        }

        let survivors: Vec<ProductId> = candidates
            .into_iter()
            .filter(|&id| {
                self.catalog
                    .get(id)
                    .is_some_and(|product| options.matches_filters(product))
            })
            .collect();
        if survivors.is_empty() {
            return Vec::new();
        }

        let matchers: Vec<PatternMatcher> =
            tokens.iter().map(|token| PatternMatcher::new(token)).collect();
        let phrase_matcher =
            (tokens.len() > 1).then(|| PatternMatcher::new(&keyword.to_lowercase()));

        let mut scored: Vec<(ProductId, usize)> = survivors
            .into_iter()
            .map(|id| (id, self.relevance(id, &matchers, phrase_matcher.as_ref())))
            .collect();
        // Stable sort over catalog-ordered candidates: equal scores keep
        // catalog order.
        scored.sort_by(|a, b| b.1.cmp(&a.1));

        let mut products: Vec<Product> = scored
            .into_iter()
            .filter_map(|(id, _)| self.catalog.get(id).cloned())
            .collect();
        apply_sorting(&mut products, &options.sort_keys());
        products
    }

    /// Every product passing the filters, in catalog order unless sort
    /// keys reorder them.
    pub fn all_products(&self, options: &SearchOptions) -> Vec<Product> {
        let mut products: Vec<Product> = self
            .catalog
            .products()
            .iter()
            .filter(|product| options.matches_filters(product))
            .cloned()
            .collect();
        apply_sorting(&mut products, &options.sort_keys());
        products
    }

    /// Sorted distinct non-empty brand names.
    pub fn brands(&self) -> Vec<String> {
        distinct_sorted(self.catalog.products().iter().map(|p| p.brand.as_str()))
    }

    /// Sorted distinct non-empty toothbrush types.
    pub fn toothbrush_types(&self) -> Vec<String> {
        distinct_sorted(
            self.catalog
                .products()
                .iter()
                .filter_map(|p| p.toothbrush_type.as_deref()),
        )
    }

    /// Validate `query` against the vocabulary and propose corrections.
    pub fn check_spelling(&self, query: &str) -> SpellCheckReport {
        SpellCorrector::new(&self.vocabulary).check(query)
    }

    /// Indexed tokens completing `prefix`, in deterministic order.
    pub fn autocomplete(&self, prefix: &str) -> Vec<String> {
        self.vocabulary.words_with_prefix(&prefix.to_lowercase())
    }

    /// Total occurrences of `word` across every product's name and
    /// description, case-insensitive. Overlapping occurrences count.
    pub fn word_frequency(&self, word: &str) -> usize {
        let matcher = PatternMatcher::new(&word.to_lowercase());
        self.catalog
            .products()
            .iter()
            .map(|product| {
                let text =
                    format!("{} {}", product.name, product.description).to_lowercase();
                matcher.count_occurrences(&text)
            })
            .sum()
    }

    /// Record `query` without running a search.
    pub fn track_search(&self, query: &str) {
        self.tracker.track(query);
    }

    /// The ten most frequent raw search strings with their counts.
    pub fn top_searches(&self) -> Vec<(String, u64)> {
        self.tracker.top_searches()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn vocabulary(&self) -> &VocabularyIndex {
        &self.vocabulary
    }

    /// AND-intersect the posting lists of `tokens`, returning survivors in
    /// catalog order. Empty when any token has no postings, when the
    /// running intersection dries up, or when there are no tokens at all.
    fn intersect_postings(&self, tokens: &[String]) -> Vec<ProductId> {
        let mut survivors: Option<AHashSet<ProductId>> = None;
        for token in tokens {
            let postings: AHashSet<ProductId> =
                self.vocabulary.postings(token).iter().copied().collect();
            let next = match survivors {
                None => postings,
                Some(current) => current.intersection(&postings).copied().collect(),
            };
            if next.is_empty() {
                return Vec::new();
            }
            survivors = Some(next);
        }
        let mut ids: Vec<ProductId> = survivors
            .map(|set| set.into_iter().collect())
            .unwrap_or_default();
        ids.sort_unstable();
        ids
    }

    /// Occurrences of each query token in the product name, plus the
    /// weighted whole-phrase bonus.
    fn relevance(
        &self,
        id: ProductId,
        matchers: &[PatternMatcher],
        phrase: Option<&PatternMatcher>,
    ) -> usize {
        let Some(product) = self.catalog.get(id) else {
            return 0;
        };
        let name = product.name.to_lowercase();
        let mut score: usize = matchers
            .iter()
            .map(|matcher| matcher.count_occurrences(&name))
            .sum();
        if let Some(phrase) = phrase {
            score += PHRASE_BONUS * phrase.count_occurrences(&name);
        }
        score
    }
}

fn distinct_sorted<'p>(values: impl Iterator<Item = &'p str>) -> Vec<String> {
    let mut out: Vec<String> = values
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect();
    out.sort();
    out.dedup();
    out
}
