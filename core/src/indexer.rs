use crate::index::{Corpus, Document};
use crate::stem::{SnowballStemmer, Stem};
use crate::tokenizer::{Lexer, Token};
use anyhow::{bail, Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{self, Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct IndexOptions {
    /// File-name suffixes whose contents are tokenized alongside the path.
    pub content_suffixes: Vec<String>,
    /// Descend into symlinked directories. Link cycles are skipped.
    pub follow_links: bool,
    /// Deepest level visited below the root (children of the root are depth 1).
    pub max_depth: Option<usize>,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self { content_suffixes: vec![".txt".to_string()], follow_links: false, max_depth: None }
    }
}

/// Builds a [`Corpus`] from a directory tree.
///
/// The walk is depth-first and single threaded. Children are indexed before
/// their parent directory, siblings in file-name order. Entries that cannot
/// be read are skipped and the walk carries on.
pub struct Indexer<S = SnowballStemmer> {
    stemmer: S,
    options: IndexOptions,
}

impl Default for Indexer {
    fn default() -> Self { Self::new(SnowballStemmer::default(), IndexOptions::default()) }
}

impl<S: Stem> Indexer<S> {
    pub fn new(stemmer: S, options: IndexOptions) -> Self { Self { stemmer, options } }

    pub fn options(&self) -> &IndexOptions { &self.options }

    pub fn stemmer(&self) -> &S { &self.stemmer }

    /// Index every node below `root`. The root itself never gets a Document.
    /// A missing root, or one that is not a directory, yields an empty corpus.
    pub fn index(&self, root: impl AsRef<Path>) -> Corpus {
        let mut corpus = Corpus::new();
        let root = match resolve_root(root.as_ref()) {
            Ok(root) => root,
            Err(err) => {
                tracing::warn!(error = %err, "nothing to index");
                return corpus;
            }
        };

        let mut walker = WalkDir::new(&root)
            .min_depth(1)
            .contents_first(true)
            .follow_links(self.options.follow_links)
            .sort_by_file_name();
        if let Some(depth) = self.options.max_depth {
            walker = walker.max_depth(depth);
        }

        // Directories whose listing failed: walkdir still yields them after
        // the error, but they must not get a Document.
        let mut unreadable: HashSet<PathBuf> = HashSet::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::debug!(path = ?err.path(), error = %err, "skipping unreadable entry");
                    if let Some(path) = err.path() {
                        unreadable.insert(path.to_path_buf());
                    }
                    continue;
                }
            };
            if unreadable.contains(entry.path()) {
                continue;
            }
            let is_dir = match entry.metadata() {
                Ok(meta) => meta.is_dir(),
                Err(err) => {
                    tracing::debug!(path = %entry.path().display(), error = %err, "skipping entry without metadata");
                    continue;
                }
            };

            let path = entry.into_path();
            let Ok(relative) = path.strip_prefix(&root).map(|r| r.to_string_lossy().into_owned()) else {
                continue;
            };
            let content = if !is_dir && self.has_content_suffix(&path) {
                match read_content(&path) {
                    Ok(text) => Some(text),
                    Err(err) => {
                        tracing::debug!(error = %err, "indexing path only");
                        None
                    }
                }
            } else {
                None
            };

            let doc = corpus.create(path);
            self.add_path_terms(doc, &relative);
            if let Some(text) = content {
                self.add_content_terms(doc, &text);
            }
        }

        tracing::info!(root = %root.display(), documents = corpus.len(), "indexing complete");
        corpus
    }

    fn has_content_suffix(&self, path: &Path) -> bool {
        let Some(name) = path.file_name() else { return false };
        let name = name.to_string_lossy();
        self.options.content_suffixes.iter().any(|s| name.ends_with(s.as_str()))
    }

    /// Separator symbols are dropped; every other token counts.
    fn add_path_terms(&self, doc: &mut Document, relative: &str) {
        for token in Lexer::new(relative, &self.stemmer) {
            if matches!(token, Token::Symbol(c) if path::is_separator(c)) {
                continue;
            }
            doc.add(token.into_term());
        }
    }

    fn add_content_terms(&self, doc: &mut Document, text: &str) {
        for token in Lexer::new(text, &self.stemmer) {
            doc.add(token.into_term());
        }
    }
}

fn resolve_root(root: &Path) -> Result<PathBuf> {
    let resolved = fs::canonicalize(root).with_context(|| format!("cannot find {}", root.display()))?;
    if !resolved.is_dir() {
        bail!("{} is not a directory", root.display());
    }
    Ok(resolved)
}

fn read_content(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
