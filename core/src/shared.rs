use crate::index::Corpus;
use crate::indexer::Indexer;
use crate::stem::Stem;
use parking_lot::RwLock;
use std::path::Path;
use std::sync::Arc;

/// Cloneable handle to the current corpus.
///
/// Published corpora are never mutated. Readers take a snapshot and query it
/// without holding the lock; a rebuild swaps in a whole new corpus.
#[derive(Clone, Default)]
pub struct SharedCorpus {
    current: Arc<RwLock<Arc<Corpus>>>,
}

impl SharedCorpus {
    pub fn new(corpus: Corpus) -> Self {
        Self { current: Arc::new(RwLock::new(Arc::new(corpus))) }
    }

    pub fn snapshot(&self) -> Arc<Corpus> { self.current.read().clone() }

    /// Publish `corpus`, returning the one it replaces.
    pub fn replace(&self, corpus: Corpus) -> Arc<Corpus> {
        std::mem::replace(&mut *self.current.write(), Arc::new(corpus))
    }

    /// Rebuild from `root` and publish the result. The lock is only taken for
    /// the swap, so queries keep running against the old snapshot meanwhile.
    pub fn reindex<S: Stem>(&self, indexer: &Indexer<S>, root: impl AsRef<Path>) -> usize {
        let corpus = indexer.index(root);
        let documents = corpus.len();
        self.replace(corpus);
        documents
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::Document;

    #[test]
    fn snapshot_survives_replace() {
        let mut first = Corpus::new();
        first.insert("/a", Document::new());
        let shared = SharedCorpus::new(first);

        let before = shared.snapshot();
        let old = shared.replace(Corpus::new());

        assert_eq!(before.len(), 1);
        assert!(Arc::ptr_eq(&before, &old));
        assert!(shared.snapshot().is_empty());
    }

    #[test]
    fn clones_share_state() {
        let shared = SharedCorpus::default();
        let other = shared.clone();
        let mut corpus = Corpus::new();
        corpus.insert("/x", Document::new());
        other.replace(corpus);
        assert_eq!(shared.snapshot().len(), 1);
    }
}
