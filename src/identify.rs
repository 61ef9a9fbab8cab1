//! Language selection
//!
//! Drives the profiling pipeline over a candidate set: build the text
//! profile, normalize it, score every candidate, pick the best. Candidate
//! order is the tie-break: a later candidate replaces the current best
//! only on a strictly greater score.

use crate::models::{LanguageMatch, LanguageProfiles, Text};
use crate::profile::{build_trigram_profile, normalize_trigram_profile};
use crate::similarity::cosine_similarity;

/// Identify the language of a text against an ordered candidate set.
///
/// Returns the winning language code, or an empty string when the
/// candidate set is empty. Degenerate input (empty text, no shared
/// trigrams) still selects the first candidate, since every score ties
/// at zero and the sentinel starts below any attainable similarity.
pub fn identify_language(text: &Text, profiles: &LanguageProfiles) -> String {
    let mut text_profile = build_trigram_profile(text);
    normalize_trigram_profile(&mut text_profile);

    let mut best_code = String::new();
    let mut best_score = -1.0f32;

    for candidate in profiles {
        let score = cosine_similarity(&text_profile, &candidate.profile);
        if score > best_score {
            best_score = score;
            best_code = candidate.code.clone();
        }
    }

    best_code
}

/// Score every candidate and return the matches sorted by descending
/// similarity.
///
/// The sort is stable, so candidates with equal scores keep their input
/// order and the first entry agrees with [`identify_language`].
pub fn rank_languages(text: &Text, profiles: &LanguageProfiles) -> Vec<LanguageMatch> {
    let mut text_profile = build_trigram_profile(text);
    normalize_trigram_profile(&mut text_profile);

    let mut matches: Vec<LanguageMatch> = profiles
        .iter()
        .map(|candidate| LanguageMatch {
            code: candidate.code.clone(),
            name: candidate.name.clone(),
            score: cosine_similarity(&text_profile, &candidate.profile),
        })
        .collect();

    matches.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    matches
}
