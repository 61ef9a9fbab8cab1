//! Core data models for langscout
//!
//! These models are shared by the profiling pipeline, the on-disk
//! profile store, and the output reporters.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A trigram: exactly 3 consecutive Unicode code points, stored UTF-8.
///
/// Trigrams are compared by code-point content, so a multi-byte character
/// counts as a single unit.
pub type Trigram = String;

/// Frequency profile mapping each trigram to a weight.
///
/// Before normalization the weight is a raw occurrence count; after
/// [`normalize_trigram_profile`](crate::profile::normalize_trigram_profile)
/// the weights form a unit vector under the L2 norm. Iteration order is
/// never semantically significant.
pub type TrigramProfile = FxHashMap<Trigram, f32>;

/// An input text: ordered lines without terminators.
///
/// Lines may still carry a trailing `\r` from Windows-style sources; the
/// profile builder strips it.
pub type Text = Vec<String>;

/// A reference language with its pre-normalized trigram profile.
#[derive(Debug, Clone)]
pub struct LanguageProfile {
    /// Short ISO-639-style identifier, e.g. "en".
    pub code: String,
    /// Human-readable language name, e.g. "English".
    pub name: String,
    /// Normalized trigram frequency vector.
    pub profile: TrigramProfile,
}

/// Ordered candidate set. The order defines the deterministic tie-break:
/// on equal scores the earliest entry wins.
pub type LanguageProfiles = Vec<LanguageProfile>;

/// One candidate's similarity against an input text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageMatch {
    pub code: String,
    pub name: String,
    /// Cosine similarity in [0, 1] (both vectors are non-negative).
    pub score: f32,
}

/// Identification result for a single input, ready for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentificationReport {
    /// Label of the input: a file path or "stdin".
    pub input: String,
    /// Winning language code; empty when no identification was possible.
    pub code: String,
    /// Winning language name; empty when no identification was possible.
    pub name: String,
    /// Ranked candidate scores (may be truncated to the requested top-N).
    pub matches: Vec<LanguageMatch>,
}

impl IdentificationReport {
    /// True when no candidate could be selected (empty store or no signal).
    pub fn is_unknown(&self) -> bool {
        self.code.is_empty()
    }
}
