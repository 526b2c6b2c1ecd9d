use pathrank_core::{tokenize, IdentityStemmer, Lexer, SnowballStemmer, Stem, Token};
use std::borrow::Cow;

fn lex(text: &str) -> Vec<Token> {
    Lexer::new(text, &IdentityStemmer).collect()
}

#[test]
fn empty_and_blank_input_yield_nothing() {
    assert!(lex("").is_empty());
    assert!(lex(" \t\n\u{3000} ").is_empty());
}

#[test]
fn alphanumeric_word_is_one_token() {
    let stemmer = SnowballStemmer::default();
    let toks: Vec<Token> = Lexer::new("foo123 bar", &stemmer).collect();
    assert_eq!(toks, vec![
        Token::Word(stemmer.stem("foo123").into_owned()),
        Token::Word(stemmer.stem("bar").into_owned()),
    ]);
}

#[test]
fn number_then_word() {
    assert_eq!(lex("123 foo"), vec![Token::Number("123".into()), Token::Word("foo".into())]);
}

#[test]
fn lone_slash_is_a_symbol() {
    assert_eq!(lex("/"), vec![Token::Symbol('/')]);
}

#[test]
fn numbers_are_not_stemmed() {
    struct Upper;
    impl Stem for Upper {
        fn stem<'a>(&self, word: &'a str) -> Cow<'a, str> { Cow::Owned(word.to_uppercase()) }
    }
    let toks: Vec<Token> = Lexer::new("abc 42 !", &Upper).collect();
    assert_eq!(toks, vec![Token::Word("ABC".into()), Token::Number("42".into()), Token::Symbol('!')]);
}

#[test]
fn it_normalizes_and_stems() {
    let words = tokenize("Running Runners RUN! The café's menu.");
    assert!(words.contains(&"run".to_string()));
    assert!(words.contains(&"café".to_string()));
    // No stop-word filtering.
    assert!(words.contains(&"the".to_string()));
}

#[test]
fn unicode_letters_and_digits() {
    assert_eq!(lex("Ünïcode٣"), vec![Token::Word("ünïcode٣".into())]);
    assert_eq!(lex("٣٤x"), vec![Token::Number("٣٤".into()), Token::Word("x".into())]);
}

#[test]
fn eager_terms_keep_order_and_duplicates() {
    let terms = Lexer::new("b a b", &IdentityStemmer).into_terms();
    assert_eq!(terms, vec!["b", "a", "b"]);
}

#[test]
fn consumer_can_stop_early() {
    let first: Vec<Token> = Lexer::new("one two three", &IdentityStemmer).take(1).collect();
    assert_eq!(first, vec![Token::Word("one".into())]);
}

#[test]
fn fresh_lexers_are_deterministic() {
    let text = "src/main.rs v2.0 README";
    let a: Vec<Token> = Lexer::new(text, &SnowballStemmer::default()).collect();
    let b: Vec<Token> = Lexer::new(text, &SnowballStemmer::default()).collect();
    assert_eq!(a, b);
}
