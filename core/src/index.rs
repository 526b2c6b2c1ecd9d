use std::collections::hash_map::{self, HashMap};
use std::path::{Path, PathBuf};

pub type TermCount = u32;

/// Term counts for one indexed node. Counts are always positive: a term is
/// either present with `count >= 1` or absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    term_freq: HashMap<String, TermCount>,
}

impl Document {
    pub fn new() -> Self { Self::default() }

    /// Bump the count for `term` by one.
    pub fn add(&mut self, term: impl Into<String>) {
        *self.term_freq.entry(term.into()).or_insert(0) += 1;
    }

    /// Raw count for `term`, `None` when absent.
    pub fn count(&self, term: &str) -> Option<TermCount> {
        self.term_freq.get(term).copied()
    }

    pub fn contains(&self, term: &str) -> bool { self.term_freq.contains_key(term) }

    /// Sum of all term counts.
    pub fn total(&self) -> u64 {
        self.term_freq.values().map(|&c| u64::from(c)).sum()
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize { self.term_freq.len() }

    pub fn is_empty(&self) -> bool { self.term_freq.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (&str, TermCount)> {
        self.term_freq.iter().map(|(t, &c)| (t.as_str(), c))
    }
}

impl<S: Into<String>> FromIterator<S> for Document {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut doc = Document::new();
        for term in iter {
            doc.add(term);
        }
        doc
    }
}

/// Every indexed node keyed by absolute path.
///
/// Built by a single indexing run and read-only afterwards; share it between
/// readers through [`crate::SharedCorpus`] rather than mutating it in place.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    documents: HashMap<PathBuf, Document>,
}

impl Corpus {
    pub fn new() -> Self { Self::default() }

    /// Create the Document for `path` and hand back a handle into the corpus'
    /// own storage. An existing Document at `path` is replaced.
    pub fn create(&mut self, path: PathBuf) -> &mut Document {
        match self.documents.entry(path) {
            hash_map::Entry::Occupied(mut e) => {
                e.insert(Document::new());
                e.into_mut()
            }
            hash_map::Entry::Vacant(e) => e.insert(Document::new()),
        }
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, doc: Document) {
        self.documents.insert(path.into(), doc);
    }

    pub fn get(&self, path: &Path) -> Option<&Document> { self.documents.get(path) }

    pub fn contains(&self, path: &Path) -> bool { self.documents.contains_key(path) }

    pub fn len(&self) -> usize { self.documents.len() }

    pub fn is_empty(&self) -> bool { self.documents.is_empty() }

    /// Number of Documents containing `term` at least once.
    pub fn document_frequency(&self, term: &str) -> usize {
        self.documents.values().filter(|d| d.contains(term)).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Path, &Document)> {
        self.documents.iter().map(|(p, d)| (p.as_path(), d))
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.documents.keys().map(PathBuf::as_path)
    }
}
