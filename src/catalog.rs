use std::fs;
use std::path::Path;

use clap::ValueEnum;
use include_dir::{include_dir, Dir};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::snippet::Snippet;

static SNIPPET_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/snippets");

/// Snippet sets compiled into the binary
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "lowercase")]
pub enum SnippetSet {
    Javascript,
    Rust,
}

impl SnippetSet {
    fn file_name(&self) -> String {
        format!("{}.json", self.to_string().to_lowercase())
    }
}

/// On-disk shape of a catalog, shared by the built-in sets and user files
#[derive(Deserialize, Clone, Debug)]
struct CatalogFile {
    name: String,
    snippets: Vec<String>,
}

/// Ordered, non-empty collection of snippets to practice on
#[derive(Debug, Clone)]
pub struct Catalog {
    name: String,
    snippets: Vec<Snippet>,
}

impl Catalog {
    pub fn new(name: impl Into<String>, snippets: Vec<Snippet>) -> Result<Self, CatalogError> {
        if snippets.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self {
            name: name.into(),
            snippets,
        })
    }

    /// Builds a catalog from raw texts, rejecting empty entries
    pub fn from_texts<I, S>(name: impl Into<String>, texts: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let snippets = texts
            .into_iter()
            .enumerate()
            .map(|(index, text)| Snippet::new(text).ok_or(CatalogError::EmptySnippet { index }))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(name, snippets)
    }

    pub fn builtin(set: SnippetSet) -> Result<Self, CatalogError> {
        let file_name = set.file_name();
        let file = SNIPPET_DIR
            .get_file(&file_name)
            .ok_or_else(|| CatalogError::UnknownBuiltin {
                name: set.to_string(),
            })?;
        let contents = file
            .contents_utf8()
            .ok_or_else(|| CatalogError::UnknownBuiltin {
                name: set.to_string(),
            })?;
        let parsed: CatalogFile =
            serde_json::from_str(contents).map_err(|source| CatalogError::Parse {
                path: file_name.into(),
                source,
            })?;
        Self::from_texts(parsed.name, parsed.snippets)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let parsed: CatalogFile =
            serde_json::from_slice(&bytes).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_texts(parsed.name, parsed.snippets)
    }

    /// Single-snippet catalog for practicing a custom text
    pub fn from_prompt(text: impl Into<String>) -> Result<Self, CatalogError> {
        let text: String = text.into();
        Self::from_texts("custom", [text])
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    /// Always false for a constructed catalog
    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }

    pub fn first(&self) -> &Snippet {
        &self.snippets[0]
    }

    pub fn get(&self, index: usize) -> Option<&Snippet> {
        self.snippets.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Snippet> {
        self.snippets.iter()
    }

    pub fn contains(&self, snippet: &Snippet) -> bool {
        self.snippets.contains(snippet)
    }

    /// Uniform independent draw; the same snippet may come up twice in a row
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &Snippet {
        &self.snippets[rng.gen_range(0..self.snippets.len())]
    }
}
