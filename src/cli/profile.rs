//! Profile command - build a reference profile from a corpus file

use crate::models::Text;
use crate::profile::build_trigram_profile;
use crate::store::ProfileStore;
use anyhow::{Context, Result};
use console::style;
use std::path::Path;
use tracing::info;

/// Run the profile command
///
/// Counts the corpus trigrams with the same builder the identifier uses
/// and writes the raw counts to the store; normalization happens at load
/// time, so stored files stay human-inspectable integers.
pub fn run(profiles_dir: &Path, corpus: &Path, code: &str, name: Option<&str>) -> Result<()> {
    let content = std::fs::read_to_string(corpus)
        .with_context(|| format!("Failed to read corpus {}", corpus.display()))?;
    let text: Text = content.lines().map(str::to_string).collect();

    let profile = build_trigram_profile(&text);
    if profile.is_empty() {
        anyhow::bail!(
            "Corpus {} produced no trigrams (every line is shorter than 3 characters)",
            corpus.display()
        );
    }
    info!("Profiled {}: {} distinct trigrams", corpus.display(), profile.len());

    let name = name.unwrap_or(code);
    let store = ProfileStore::new(profiles_dir);
    store
        .save_profile(code, name, &profile)
        .with_context(|| format!("Failed to store profile for '{code}'"))?;

    println!(
        "{} Stored {} ({}) with {} trigrams in {}",
        style("[OK]").green(),
        style(name).cyan(),
        code,
        profile.len(),
        profiles_dir.display()
    );

    Ok(())
}
