//! Langscout - trigram-based language identification
//!
//! Identifies the natural language of a short text by comparing its
//! character-trigram frequency profile against precomputed reference
//! profiles under cosine similarity.
//!
//! The core pipeline is four pure functions over a shared profile map:
//!
//! - [`profile::build_trigram_profile`] - text to raw trigram counts
//! - [`profile::normalize_trigram_profile`] - rescale to a unit vector
//! - [`similarity::cosine_similarity`] - dot product of two profiles
//! - [`identify::identify_language`] - best match over a candidate set
//!
//! Everything else (profile store, CLI, reporters, config) is plumbing
//! around that pipeline.

pub mod cli;
pub mod config;
pub mod identify;
pub mod models;
pub mod profile;
pub mod reporters;
pub mod similarity;
pub mod store;
