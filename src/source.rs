// src/source.rs
//! Article supply: the sampling boundary in front of the graph engine.
//!
//! The core never fetches anything. A snapshot of articles per category is
//! kept on disk as JSON (one file per category slug), and [`SnapshotSource`]
//! draws a fixed-size random sample from it. Everything downstream of
//! [`ArticleSource::sample`] is deterministic for a fixed article sequence.

use std::fs;
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Deserialize;

use crate::article::Article;
use crate::category::Category;
use crate::error::{CoauthorError, Result};

/// Supplies one sampled article sequence per category, already filtered to
/// that category.
pub trait ArticleSource {
    /// Draws this source's sample for `category`.
    ///
    /// # Errors
    /// Returns an error when the underlying snapshot cannot be read or parsed.
    fn sample(&self, category: Category) -> Result<Vec<Article>>;
}

/// On-disk wire format: one snapshot file holds an array of these.
#[derive(Debug, Deserialize)]
struct ArticleRecord {
    #[serde(default)]
    #[allow(dead_code)]
    title: Option<String>,
    authors: Vec<String>,
}

/// Loads `<data_dir>/<slug>_articles.json` and samples `sample_size`
/// articles from it (all of them when the snapshot is smaller).
pub struct SnapshotSource {
    data_dir: PathBuf,
    sample_size: usize,
    seed: Option<u64>,
}

impl SnapshotSource {
    #[must_use]
    pub fn new(data_dir: PathBuf, sample_size: usize) -> Self {
        Self {
            data_dir,
            sample_size,
            seed: None,
        }
    }

    /// Fixes the sampling RNG so repeated runs draw the same sample.
    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn snapshot_path(&self, category: Category) -> PathBuf {
        self.data_dir.join(category.snapshot_file())
    }

    fn load_records(&self, path: &Path) -> Result<Vec<ArticleRecord>> {
        let raw = fs::read_to_string(path).map_err(|source| CoauthorError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        serde_json::from_str(&raw).map_err(|source| CoauthorError::Snapshot {
            source,
            path: path.to_path_buf(),
        })
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl ArticleSource for SnapshotSource {
    fn sample(&self, category: Category) -> Result<Vec<Article>> {
        let path = self.snapshot_path(category);
        let records = self.load_records(&path)?;

        // Boundary sanitation: empty name strings and author-less records
        // are contract violations by whoever wrote the snapshot.
        let articles: Vec<Article> = records
            .into_iter()
            .map(|record| {
                let authors = record
                    .authors
                    .into_iter()
                    .filter(|name| !name.is_empty())
                    .collect::<Vec<String>>();
                Article::new(category, authors)
            })
            .filter(|article| !article.authors.is_empty())
            .collect();

        let mut rng = self.rng();
        let sampled: Vec<Article> = articles
            .choose_multiple(&mut rng, self.sample_size)
            .cloned()
            .collect();
        Ok(sampled)
    }
}
