//! Filesystem search: tokenize node paths and `.txt` contents into per-node
//! term counts, then rank nodes against free-text queries by TF-IDF.
//!
//! ```no_run
//! use pathrank_core::{Indexer, Ranker};
//!
//! let corpus = Indexer::default().index("/srv/notes");
//! for entry in Ranker::default().top("meeting notes", &corpus, 10) {
//!     println!("{} {}", entry.path.display(), entry.score);
//! }
//! ```

pub mod index;
pub mod indexer;
pub mod rank;
pub mod shared;
pub mod stem;
pub mod tokenizer;

pub use index::{Corpus, Document, TermCount};
pub use indexer::{IndexOptions, Indexer};
pub use rank::{write_results, write_results_json, Ranker, ScoredEntry, EXACT_MATCH_BOOST};
pub use shared::SharedCorpus;
pub use stem::{IdentityStemmer, SnowballStemmer, Stem};
pub use tokenizer::{tokenize, Lexer, Token};
