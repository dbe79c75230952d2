//! Spelling validation and correction.
//!
//! Powers the "did you mean?" flow over the vocabulary index: an edit
//! distance function and a corrector that validates queries and proposes
//! single-word or whole-phrase replacements.

pub mod corrector;
pub mod levenshtein;

pub use corrector::{SpellCheckReport, SpellCorrector};
pub use levenshtein::levenshtein;
