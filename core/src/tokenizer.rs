use crate::stem::{SnowballStemmer, Stem};
use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref LETTER: Regex = Regex::new(r"^\p{L}$").expect("valid regex");
}

/// General category L*. Narrower than `char::is_alphabetic`, which also takes
/// letter-numbers and combining vowel signs.
fn is_letter(c: char) -> bool {
    LETTER.is_match(c.encode_utf8(&mut [0; 4]))
}

/// A classified token. End of input is the iterator returning `None`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// Stem of an alphanumeric run that starts with a letter.
    Word(String),
    /// A run of digits, verbatim.
    Number(String),
    /// Any other single non-whitespace character, verbatim.
    Symbol(char),
}

impl Token {
    /// The string used as a term key.
    pub fn into_term(self) -> String {
        match self {
            Token::Word(s) | Token::Number(s) => s,
            Token::Symbol(c) => c.to_string(),
        }
    }
}

/// Forward-only scanner over NFKC-normalized, lowercased text.
///
/// A `Lexer` is consumed as it is iterated and cannot be rewound; build a new
/// one from the original text to tokenize it again. Dropping it part way
/// through is the way to stop early.
pub struct Lexer<'s, S: Stem + ?Sized> {
    chars: Vec<char>,
    pos: usize,
    stemmer: &'s S,
}

impl<'s, S: Stem + ?Sized> Lexer<'s, S> {
    pub fn new(text: &str, stemmer: &'s S) -> Self {
        let chars = text.nfkc().collect::<String>().to_lowercase().chars().collect();
        Self { chars, pos: 0, stemmer }
    }

    /// Drain the remaining tokens into their term strings, in order and with
    /// duplicates kept.
    pub fn into_terms(self) -> Vec<String> {
        self.map(Token::into_term).collect()
    }

    fn peek(&self) -> Option<char> { self.chars.get(self.pos).copied() }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &[char] {
        let start = self.pos;
        while self.peek().is_some_and(&pred) {
            self.pos += 1;
        }
        &self.chars[start..self.pos]
    }
}

impl<S: Stem + ?Sized> Iterator for Lexer<'_, S> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.take_while(char::is_whitespace);
        let c = self.peek()?;

        if is_letter(c) {
            let word: String = self.take_while(|c| is_letter(c) || c.is_numeric()).iter().collect();
            Some(Token::Word(self.stemmer.stem(&word).into_owned()))
        } else if c.is_numeric() {
            let digits = self.take_while(char::is_numeric).iter().collect();
            Some(Token::Number(digits))
        } else {
            self.pos += 1;
            Some(Token::Symbol(c))
        }
    }
}

/// Tokenize `text` with the English stemmer and return its terms.
pub fn tokenize(text: &str) -> Vec<String> {
    Lexer::new(text, &SnowballStemmer::default()).into_terms()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stem::IdentityStemmer;

    fn lex(text: &str) -> Vec<Token> {
        Lexer::new(text, &IdentityStemmer).collect()
    }

    #[test]
    fn letter_run_swallows_digits() {
        assert_eq!(lex("foo123 bar"), vec![Token::Word("foo123".into()), Token::Word("bar".into())]);
    }

    #[test]
    fn digit_run_stops_at_letter() {
        assert_eq!(lex("123foo"), vec![Token::Number("123".into()), Token::Word("foo".into())]);
    }

    #[test]
    fn symbols_are_single_chars() {
        assert_eq!(lex("a/.b"), vec![
            Token::Word("a".into()),
            Token::Symbol('/'),
            Token::Symbol('.'),
            Token::Word("b".into()),
        ]);
    }

    #[test]
    fn combining_marks_are_not_letters() {
        assert_eq!(lex("\u{93F}"), vec![Token::Symbol('\u{93F}')]);
        assert_eq!(lex("\u{915}\u{93F}"), vec![Token::Word("\u{915}".into()), Token::Symbol('\u{93F}')]);
    }

    #[test]
    fn letter_numbers_are_numbers() {
        assert_eq!(lex("\u{3007}"), vec![Token::Number("\u{3007}".into())]);
        assert_eq!(lex("\u{3007}1"), vec![Token::Number("\u{3007}1".into())]);
    }

    #[test]
    fn lowercases_before_classifying() {
        assert_eq!(lex("HeLLo"), vec![Token::Word("hello".into())]);
    }

    #[test]
    fn default_tokenize_stems_words() {
        assert_eq!(tokenize("Running 42 /"), vec!["run", "42", "/"]);
    }
}
