//! Identify command - score inputs against the profile store

use crate::identify::{identify_language, rank_languages};
use crate::models::{IdentificationReport, LanguageProfiles, Text};
use crate::reporters;
use crate::store::ProfileStore;
use anyhow::{Context, Result};
use indicatif::ProgressBar;
use rayon::prelude::*;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Run the identify command over files, or stdin when no file is given
pub fn run(
    profiles_dir: &Path,
    inputs: &[PathBuf],
    format: &str,
    top: usize,
    allow: Option<&[String]>,
) -> Result<()> {
    let store = ProfileStore::new(profiles_dir);
    let profiles = store.load(allow).with_context(|| {
        format!(
            "Failed to load reference profiles from {}",
            profiles_dir.display()
        )
    })?;
    if profiles.is_empty() {
        warn!(
            "No reference profiles in {}; every input will report unknown",
            profiles_dir.display()
        );
    }

    let reports = if inputs.is_empty() {
        vec![identify_stdin(&profiles, top)?]
    } else {
        identify_files(inputs, &profiles, top)?
    };

    for report in &reports {
        println!("{}", reporters::report(report, format)?);
    }

    Ok(())
}

/// Read stdin to end and identify it as a single text
fn identify_stdin(profiles: &LanguageProfiles, top: usize) -> Result<IdentificationReport> {
    let text: Text = std::io::stdin()
        .lock()
        .lines()
        .collect::<Result<_, _>>()
        .context("Failed to read stdin")?;

    Ok(identify_text("stdin".to_string(), &text, profiles, top))
}

/// Identify each file, in parallel for multi-file batches.
///
/// Scoring is independent per input, so files fan out over the rayon
/// pool; `collect` keeps input order, and each per-text best-match
/// reduction stays sequential to preserve the order-stable tie-break.
fn identify_files(
    inputs: &[PathBuf],
    profiles: &LanguageProfiles,
    top: usize,
) -> Result<Vec<IdentificationReport>> {
    if let [single] = inputs {
        return Ok(vec![identify_file(single, profiles, top)?]);
    }

    let bar = ProgressBar::new(inputs.len() as u64);
    let reports = inputs
        .par_iter()
        .map(|path| {
            let report = identify_file(path, profiles, top);
            bar.inc(1);
            report
        })
        .collect::<Result<Vec<_>>>();
    bar.finish_and_clear();

    reports
}

fn identify_file(
    path: &Path,
    profiles: &LanguageProfiles,
    top: usize,
) -> Result<IdentificationReport> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let text: Text = content.lines().map(str::to_string).collect();

    Ok(identify_text(
        path.display().to_string(),
        &text,
        profiles,
        top,
    ))
}

/// Score one text and assemble its report.
///
/// With `top == 1` only the winner is computed; otherwise the full
/// ranking is taken and truncated. Both paths agree on the winner.
fn identify_text(
    input: String,
    text: &Text,
    profiles: &LanguageProfiles,
    top: usize,
) -> IdentificationReport {
    if top <= 1 {
        let code = identify_language(text, profiles);
        let name = profiles
            .iter()
            .find(|p| p.code == code)
            .map(|p| p.name.clone())
            .unwrap_or_default();
        return IdentificationReport {
            input,
            code,
            name,
            matches: Vec::new(),
        };
    }

    let mut matches = rank_languages(text, profiles);
    matches.truncate(top);
    let (code, name) = matches
        .first()
        .map(|m| (m.code.clone(), m.name.clone()))
        .unwrap_or_default();

    IdentificationReport {
        input,
        code,
        name,
        matches,
    }
}
