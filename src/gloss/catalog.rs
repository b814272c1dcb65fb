//! Asset catalogs: the set of sign clips the player can show.
//!
//! Lookups are exact filename matches ("Walk.mp4") against an in-memory set.
//! [`DirectoryCatalog`] scans its directory once when opened.

use crate::gloss::error::GlossError;
use rustc_hash::FxHashSet;
use std::fs;
use std::path::Path;
use tracing::info;

/// Existence check for an asset filename.
pub trait AssetCatalog: Send + Sync {
    fn exists(&self, filename: &str) -> bool;
}

impl<F> AssetCatalog for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn exists(&self, filename: &str) -> bool {
        self(filename)
    }
}

/// Catalog backed by a fixed set of filenames.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    files: FxHashSet<String>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from full filenames ("Walk.mp4").
    pub fn from_files<I, S>(files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            files: files.into_iter().map(Into::into).collect(),
        }
    }

    /// Builds a catalog from sign names ("Walk"), appending `extension`.
    pub fn from_names<I, S>(names: I, extension: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            files: names
                .into_iter()
                .map(|name| format!("{}{}", name.as_ref(), extension))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl AssetCatalog for MemoryCatalog {
    fn exists(&self, filename: &str) -> bool {
        self.files.contains(filename)
    }
}

/// Catalog of the files under a directory tree, keyed by bare filename.
#[derive(Debug, Clone)]
pub struct DirectoryCatalog {
    files: MemoryCatalog,
}

impl DirectoryCatalog {
    pub fn open(root: impl AsRef<Path>) -> Result<Self, GlossError> {
        let root = root.as_ref();
        let mut names = Vec::new();
        scan(root, &mut names).map_err(|e| GlossError::Catalog {
            path: root.to_path_buf(),
            reason: e.to_string(),
        })?;
        let files = MemoryCatalog::from_files(names);
        info!(path = %root.display(), assets = files.len(), "asset catalog opened");
        Ok(Self { files })
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl AssetCatalog for DirectoryCatalog {
    fn exists(&self, filename: &str) -> bool {
        self.files.exists(filename)
    }
}

fn scan(dir: &Path, names: &mut Vec<String>) -> std::io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            scan(&path, names)?;
        } else if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            names.push(name.to_string());
        }
    }
    Ok(())
}
