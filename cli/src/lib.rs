use anyhow::Result;
use clap::{Parser, ValueEnum};
use pathrank_core::{
    write_results, write_results_json, IdentityStemmer, IndexOptions, Indexer, Ranker, SharedCorpus, SnowballStemmer, Stem,
};
use std::borrow::Cow;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "pathrank")]
#[command(about = "Rank files under a directory against a free-text query", long_about = None)]
pub struct Args {
    /// Directory to index
    #[arg(long)]
    pub root: PathBuf,
    /// Query to answer; without it, one query is read per line from stdin
    #[arg(long)]
    pub query: Option<String>,
    /// Print at most this many results per query
    #[arg(long)]
    pub limit: Option<usize>,
    /// Emit JSON lines instead of "<path> <score>"
    #[arg(long, default_value_t = false)]
    pub json: bool,
    #[arg(long, value_enum, default_value_t = StemmerKind::English)]
    pub stemmer: StemmerKind,
    /// Descend into symlinked directories
    #[arg(long, default_value_t = false)]
    pub follow_links: bool,
    #[arg(long)]
    pub max_depth: Option<usize>,
    /// File-name suffix whose contents are indexed (repeatable, default .txt)
    #[arg(long = "suffix")]
    pub suffixes: Vec<String>,
    /// Rebuild the index every N seconds while reading queries from stdin
    #[arg(long)]
    pub refresh_secs: Option<u64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StemmerKind {
    English,
    #[value(name = "none")]
    Identity,
}

pub enum CliStemmer {
    Snowball(SnowballStemmer),
    Identity(IdentityStemmer),
}

impl Stem for CliStemmer {
    fn stem<'a>(&self, word: &'a str) -> Cow<'a, str> {
        match self {
            CliStemmer::Snowball(s) => s.stem(word),
            CliStemmer::Identity(s) => s.stem(word),
        }
    }
}

pub fn build_indexer(args: &Args) -> Indexer<CliStemmer> {
    let stemmer = match args.stemmer {
        StemmerKind::English => CliStemmer::Snowball(SnowballStemmer::default()),
        StemmerKind::Identity => CliStemmer::Identity(IdentityStemmer),
    };
    let mut options = IndexOptions { follow_links: args.follow_links, max_depth: args.max_depth, ..IndexOptions::default() };
    if !args.suffixes.is_empty() {
        options.content_suffixes = args.suffixes.clone();
    }
    Indexer::new(stemmer, options)
}

/// Index `args.root`, then answer `args.query` or every non-blank line of
/// `input`, writing ranked results to `out`.
pub fn run<R: BufRead, W: Write>(args: &Args, input: R, out: &mut W) -> Result<()> {
    let indexer = Arc::new(build_indexer(args));
    let shared = SharedCorpus::new(indexer.index(&args.root));

    if let Some(query) = &args.query {
        return answer(args, &indexer, &shared, query, out);
    }

    let refresher = args.refresh_secs.map(|secs| spawn_refresher(&indexer, &shared, args.root.clone(), secs));
    for line in input.lines() {
        let line = line?;
        let query = line.trim();
        if query.is_empty() {
            continue;
        }
        answer(args, &indexer, &shared, query, out)?;
        out.flush()?;
    }
    if let Some((stop, handle)) = refresher {
        stop_refresher(stop, handle);
    }
    Ok(())
}

/// Returns false when the refresh thread had panicked.
fn stop_refresher(stop: mpsc::Sender<()>, handle: thread::JoinHandle<()>) -> bool {
    drop(stop);
    if handle.join().is_err() {
        tracing::warn!("index refresh thread panicked");
        return false;
    }
    true
}

fn answer<W: Write>(args: &Args, indexer: &Indexer<CliStemmer>, shared: &SharedCorpus, query: &str, out: &mut W) -> Result<()> {
    let corpus = shared.snapshot();
    let ranker = Ranker::new(indexer.stemmer());
    let results = match args.limit {
        Some(k) => ranker.top(query, &corpus, k),
        None => ranker.rank(query, &corpus),
    };
    if args.json {
        write_results_json(&results, out)?;
    } else {
        write_results(&results, out)?;
    }
    Ok(())
}

/// Periodically rebuild the corpus until the returned sender is dropped.
fn spawn_refresher(
    indexer: &Arc<Indexer<CliStemmer>>,
    shared: &SharedCorpus,
    root: PathBuf,
    secs: u64,
) -> (mpsc::Sender<()>, thread::JoinHandle<()>) {
    let (stop, stopped) = mpsc::channel::<()>();
    let indexer = Arc::clone(indexer);
    let shared = shared.clone();
    let interval = Duration::from_secs(secs.max(1));
    let handle = thread::spawn(move || loop {
        match stopped.recv_timeout(interval) {
            Err(RecvTimeoutError::Timeout) => {
                let documents = shared.reindex(&*indexer, &root);
                tracing::info!(documents, "refreshed index");
            }
            Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
        }
    });
    (stop, handle)
}
