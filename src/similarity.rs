//! Cosine similarity between trigram profiles
//!
//! Both profiles are expected to be normalized already, so cosine
//! similarity reduces to a plain dot product over shared keys. The
//! function itself is a correct dot product for any two weight vectors.

use crate::models::TrigramProfile;

/// Dot product over the trigrams present in both profiles.
///
/// Trigrams present in only one profile contribute zero (implicit zero in
/// the missing dimension). Returns 0.0 for disjoint or empty profiles.
/// Commutative: `cosine_similarity(a, b) == cosine_similarity(b, a)`.
pub fn cosine_similarity(a: &TrigramProfile, b: &TrigramProfile) -> f32 {
    // Iterate the smaller map, probe the larger.
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    let mut sum = 0.0f64;
    for (trigram, &weight) in small {
        if let Some(&other) = large.get(trigram) {
            sum += weight as f64 * other as f64;
        }
    }

    sum as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{build_trigram_profile, normalize_trigram_profile};

    fn profile_of(line: &str) -> TrigramProfile {
        build_trigram_profile(&vec![line.to_string()])
    }

    fn normalized_profile_of(line: &str) -> TrigramProfile {
        let mut p = profile_of(line);
        normalize_trigram_profile(&mut p);
        p
    }

    #[test]
    fn test_self_similarity_of_normalized_profile_is_one() {
        let p = normalized_profile_of("the quick brown fox jumps");
        let score = cosine_similarity(&p, &p);
        assert!((score - 1.0).abs() < 1e-5, "score was {score}");
    }

    #[test]
    fn test_commutative() {
        let a = normalized_profile_of("some english words");
        let b = normalized_profile_of("unas palabras en castellano");
        assert_eq!(cosine_similarity(&a, &b), cosine_similarity(&b, &a));
    }

    #[test]
    fn test_disjoint_profiles_score_zero() {
        let a = profile_of("aaaa");
        let b = profile_of("bbbb");
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_empty_profile_scores_zero() {
        let a = TrigramProfile::default();
        let b = normalized_profile_of("anything at all");
        assert_eq!(cosine_similarity(&a, &b), 0.0);
        assert_eq!(cosine_similarity(&b, &a), 0.0);
    }

    #[test]
    fn test_partial_overlap_accumulates_shared_terms_only() {
        let mut a = TrigramProfile::default();
        a.insert("abc".to_string(), 0.5);
        a.insert("xyz".to_string(), 0.5);

        let mut b = TrigramProfile::default();
        b.insert("abc".to_string(), 0.4);
        b.insert("qrs".to_string(), 0.9);

        let score = cosine_similarity(&a, &b);
        assert!((score - 0.2).abs() < 1e-6, "score was {score}");
    }
}
