use crate::index::{Corpus, Document};
use crate::stem::{SnowballStemmer, Stem};
use crate::tokenizer::Lexer;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::{self, Write};
use std::path::PathBuf;

/// Multiplier applied to the count of a multi-character term found in a
/// document. Without it, nodes with very few terms (short file names) outrank
/// everything else.
pub const EXACT_MATCH_BOOST: u32 = 60;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredEntry {
    pub path: PathBuf,
    pub score: f32,
}

/// Scores corpus documents against a query by summed TF-IDF.
pub struct Ranker<S = SnowballStemmer> {
    stemmer: S,
}

impl Default for Ranker {
    fn default() -> Self { Self::new(SnowballStemmer::default()) }
}

impl<S: Stem> Ranker<S> {
    /// `stemmer` must match the one the corpus was indexed with.
    pub fn new(stemmer: S) -> Self { Self { stemmer } }

    /// Every document in `corpus`, best match first. Equal scores are
    /// ordered by path.
    ///
    /// Query terms are not deduplicated: a term given twice contributes its
    /// TF-IDF twice.
    pub fn rank(&self, query: &str, corpus: &Corpus) -> Vec<ScoredEntry> {
        let terms = Lexer::new(query, &self.stemmer).into_terms();

        let mut idf: HashMap<&str, f32> = HashMap::new();
        for term in &terms {
            idf.entry(term.as_str()).or_insert_with(|| inverse_document_frequency(term, corpus));
        }

        let mut scored: Vec<ScoredEntry> = corpus
            .iter()
            .map(|(path, doc)| {
                let score = terms.iter().fold(0.0, |acc, t| acc + term_frequency(t, doc) * idf[t.as_str()]);
                ScoredEntry { path: path.to_path_buf(), score }
            })
            .collect();
        scored.sort_by(|a, b| b.score.total_cmp(&a.score).then_with(|| a.path.cmp(&b.path)));
        tracing::debug!(query, terms = terms.len(), documents = scored.len(), "ranked query");
        scored
    }

    /// The first `k` entries of [`Ranker::rank`].
    pub fn top(&self, query: &str, corpus: &Corpus, k: usize) -> Vec<ScoredEntry> {
        let mut scored = self.rank(query, corpus);
        scored.truncate(k);
        scored
    }
}

/// Boosted count of `term` over the document's total count.
///
/// An absent term counts as 1 so it still nudges the score; a present term
/// longer than one character is multiplied by [`EXACT_MATCH_BOOST`]. A
/// document with no terms scores 0.
pub fn term_frequency(term: &str, doc: &Document) -> f32 {
    let total = doc.total();
    if total == 0 {
        return 0.0;
    }
    let count = match doc.count(term) {
        None => 1,
        Some(c) if term.chars().count() > 1 => u64::from(c) * u64::from(EXACT_MATCH_BOOST),
        Some(c) => u64::from(c),
    };
    count as f32 / total as f32
}

/// `log10(N / n)` where `n` is the number of documents holding `term`,
/// taken as 1 when no document does. An empty corpus gives 0.
pub fn inverse_document_frequency(term: &str, corpus: &Corpus) -> f32 {
    if corpus.is_empty() {
        return 0.0;
    }
    let n = corpus.document_frequency(term).max(1);
    (corpus.len() as f64 / n as f64).log10() as f32
}

/// Write one `"<path> <score>"` line per entry.
pub fn write_results<W: Write>(entries: &[ScoredEntry], out: &mut W) -> io::Result<()> {
    for entry in entries {
        writeln!(out, "{} {}", entry.path.display(), entry.score)?;
    }
    Ok(())
}

/// Write one JSON object per entry, one per line.
pub fn write_results_json<W: Write>(entries: &[ScoredEntry], out: &mut W) -> io::Result<()> {
    for entry in entries {
        serde_json::to_writer(&mut *out, entry)?;
        out.write_all(b"\n")?;
    }
    Ok(())
}
