//! On-disk reference profile store
//!
//! A profiles directory holds one index file plus one CSV per language:
//!
//! ```text
//! profiles/
//!   languages.csv    rows: code,name
//!   en.csv           rows: trigram,count
//!   es.csv
//!   ...
//! ```
//!
//! Trigram rows are split on the LAST comma, since a trigram may itself
//! contain a comma. Profiles are normalized once at load time so the
//! scorer can treat them as unit vectors. The index order defines the
//! candidate order, and with it the deterministic tie-break.

use crate::models::{LanguageProfile, LanguageProfiles, TrigramProfile};
use crate::profile::normalize_trigram_profile;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Name of the index file listing available languages.
const INDEX_FILE: &str = "languages.csv";

/// Errors that can occur while reading or writing the profile store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No language index at {0} (expected a languages.csv)")]
    MissingIndex(PathBuf),
}

/// Handle to a profiles directory.
pub struct ProfileStore {
    dir: PathBuf,
}

impl ProfileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory this store reads from and writes to.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// List `(code, name)` pairs from the index, in index order.
    ///
    /// Rows without a comma are skipped with a warning.
    pub fn list_languages(&self) -> Result<Vec<(String, String)>, StoreError> {
        let path = self.dir.join(INDEX_FILE);
        if !path.exists() {
            return Err(StoreError::MissingIndex(self.dir.clone()));
        }
        let content = std::fs::read_to_string(&path).map_err(|source| StoreError::Read {
            path: path.clone(),
            source,
        })?;

        let mut languages = Vec::new();
        for line in content.lines() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            if line.is_empty() {
                continue;
            }
            match line.split_once(',') {
                Some((code, name)) => {
                    languages.push((code.trim().to_string(), name.trim().to_string()))
                }
                None => warn!("Skipping malformed index row in {}: {line:?}", path.display()),
            }
        }

        Ok(languages)
    }

    /// Load all reference profiles, normalized, in index order.
    ///
    /// `allow` restricts loading to the given codes; the index order is
    /// preserved regardless, so filtering never disturbs the tie-break.
    pub fn load(&self, allow: Option<&[String]>) -> Result<LanguageProfiles, StoreError> {
        let mut profiles = Vec::new();

        for (code, name) in self.list_languages()? {
            if let Some(allowed) = allow {
                if !allowed.iter().any(|c| c == &code) {
                    continue;
                }
            }

            let mut profile = self.load_profile(&code)?;
            normalize_trigram_profile(&mut profile);
            debug!(
                "Loaded profile {code} ({name}): {} trigrams",
                profile.len()
            );
            profiles.push(LanguageProfile {
                code,
                name,
                profile,
            });
        }

        Ok(profiles)
    }

    /// Load one language's raw trigram counts from `<code>.csv`.
    ///
    /// Malformed rows (no comma, or a non-numeric count) are skipped with
    /// a warning rather than failing the whole load.
    pub fn load_profile(&self, code: &str) -> Result<TrigramProfile, StoreError> {
        let path = self.profile_path(code);
        let content = std::fs::read_to_string(&path).map_err(|source| StoreError::Read {
            path: path.clone(),
            source,
        })?;

        let mut profile = TrigramProfile::default();
        for line in content.lines() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            if line.is_empty() {
                continue;
            }

            // Split on the last comma: the trigram itself may contain one.
            let Some((trigram, count)) = line.rsplit_once(',') else {
                warn!("Skipping malformed row in {}: {line:?}", path.display());
                continue;
            };
            match count.trim().parse::<f32>() {
                Ok(count) => {
                    *profile.entry(trigram.to_string()).or_insert(0.0) += count;
                }
                Err(_) => {
                    warn!("Skipping non-numeric count in {}: {line:?}", path.display())
                }
            }
        }

        Ok(profile)
    }

    /// Persist a profile to `<code>.csv` and register the code in the
    /// index if it is not already present.
    ///
    /// Rows are written sorted by descending count (trigram as the
    /// secondary key) so the output is deterministic and diffs cleanly.
    pub fn save_profile(
        &self,
        code: &str,
        name: &str,
        profile: &TrigramProfile,
    ) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.dir).map_err(|source| StoreError::Write {
            path: self.dir.clone(),
            source,
        })?;

        let mut rows: Vec<(&String, &f32)> = profile.iter().collect();
        rows.sort_by(|a, b| {
            b.1.partial_cmp(a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(b.0))
        });

        let mut out = String::with_capacity(rows.len() * 8);
        for (trigram, count) in rows {
            out.push_str(trigram);
            out.push(',');
            out.push_str(&count.to_string());
            out.push('\n');
        }

        let path = self.profile_path(code);
        std::fs::write(&path, out).map_err(|source| StoreError::Write {
            path: path.clone(),
            source,
        })?;
        debug!("Wrote profile {code}: {}", path.display());

        self.register_language(code, name)
    }

    /// Append `code,name` to the index unless the code is already listed.
    fn register_language(&self, code: &str, name: &str) -> Result<(), StoreError> {
        let index_path = self.dir.join(INDEX_FILE);

        let mut content = match std::fs::read_to_string(&index_path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(source) => {
                return Err(StoreError::Read {
                    path: index_path,
                    source,
                })
            }
        };

        let already_listed = content
            .lines()
            .filter_map(|l| l.split_once(','))
            .any(|(c, _)| c.trim() == code);
        if already_listed {
            return Ok(());
        }

        if !content.is_empty() && !content.ends_with('\n') {
            content.push('\n');
        }
        content.push_str(code);
        content.push(',');
        content.push_str(name);
        content.push('\n');

        std::fs::write(&index_path, content).map_err(|source| StoreError::Write {
            path: index_path.clone(),
            source,
        })
    }

    fn profile_path(&self, code: &str) -> PathBuf {
        self.dir.join(format!("{code}.csv"))
    }
}
