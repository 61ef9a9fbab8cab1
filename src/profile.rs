//! Trigram profile construction and normalization
//!
//! A profile is built by sliding a 3-code-point window over every line of
//! the input and counting occurrences. Normalization rescales the counts
//! to a unit vector so that cosine similarity reduces to a dot product.

use crate::models::{Text, TrigramProfile};

/// Build a raw (unnormalized) trigram occurrence profile from a text.
///
/// Per line: a single trailing `\r` is stripped, then every contiguous
/// window of 3 code points is counted. Lines shorter than 3 code points
/// contribute nothing. Windows slide by one position and may span
/// whitespace and punctuation; no filtering or case-folding is applied.
pub fn build_trigram_profile(text: &Text) -> TrigramProfile {
    let mut profile = TrigramProfile::default();

    for line in text {
        let line = line.strip_suffix('\r').unwrap_or(line);

        // Index by code point, not by byte, so multi-byte characters are
        // single window positions.
        let chars: Vec<char> = line.chars().collect();
        if chars.len() < 3 {
            continue;
        }

        for window in chars.windows(3) {
            let trigram: String = window.iter().collect();
            *profile.entry(trigram).or_insert(0.0) += 1.0;
        }
    }

    profile
}

/// Rescale a profile in place so its Euclidean (L2) norm becomes 1.
///
/// The sum of squares is accumulated in `f64` before taking the square
/// root. A zero-norm profile (empty, or pathologically all-zero) is left
/// untouched to avoid dividing by zero. Idempotent on normalized input.
pub fn normalize_trigram_profile(profile: &mut TrigramProfile) {
    let sum_of_squares: f64 = profile
        .values()
        .map(|&weight| weight as f64 * weight as f64)
        .sum();

    if sum_of_squares == 0.0 {
        return;
    }

    let norm = sum_of_squares.sqrt();
    for weight in profile.values_mut() {
        *weight = (*weight as f64 / norm) as f32;
    }
}
