//! Languages command - list the profiles available in the store

use crate::store::ProfileStore;
use anyhow::{Context, Result};
use console::style;
use std::path::Path;

/// Run the languages command
pub fn run(profiles_dir: &Path) -> Result<()> {
    let store = ProfileStore::new(profiles_dir);
    let languages = store.list_languages().with_context(|| {
        format!(
            "Failed to list languages in {}",
            profiles_dir.display()
        )
    })?;

    println!("\nLanguages in {}\n", style(profiles_dir.display()).cyan());
    if languages.is_empty() {
        println!("  {}", style("(none)").dim());
    }
    for (code, name) in &languages {
        println!("  {:<4} {}", style(code).cyan(), name);
    }
    println!("\n{} language(s)", languages.len());

    Ok(())
}
