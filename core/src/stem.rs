use lazy_static::lazy_static;
use rust_stemmers::{Algorithm, Stemmer};
use std::borrow::Cow;

lazy_static! {
    static ref ENGLISH: Stemmer = Stemmer::create(Algorithm::English);
}

/// Maps a lowercase word to its stem. Implementations must be deterministic:
/// the same word always yields the same stem.
pub trait Stem {
    fn stem<'a>(&self, word: &'a str) -> Cow<'a, str>;
}

impl<S: Stem + ?Sized> Stem for &S {
    fn stem<'a>(&self, word: &'a str) -> Cow<'a, str> { (**self).stem(word) }
}

/// Snowball stemming via `rust_stemmers`.
pub enum SnowballStemmer {
    English,
    Other(Stemmer),
}

impl SnowballStemmer {
    pub fn new(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::English => SnowballStemmer::English,
            other => SnowballStemmer::Other(Stemmer::create(other)),
        }
    }
}

impl Default for SnowballStemmer {
    fn default() -> Self { SnowballStemmer::English }
}

impl Stem for SnowballStemmer {
    fn stem<'a>(&self, word: &'a str) -> Cow<'a, str> {
        match self {
            SnowballStemmer::English => ENGLISH.stem(word),
            SnowballStemmer::Other(stemmer) => stemmer.stem(word),
        }
    }
}

/// Leaves words untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityStemmer;

impl Stem for IdentityStemmer {
    fn stem<'a>(&self, word: &'a str) -> Cow<'a, str> { Cow::Borrowed(word) }
}
