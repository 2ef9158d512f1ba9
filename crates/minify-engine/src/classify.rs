//! Character classes: whitespace, quote delimiter, token punctuation, word.

use minify_core::MinifyConfig;

/// Which branch of the line compactor a character takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharKind {
    Whitespace,
    Quote,
    Token,
    /// Everything else, including characters that are neither letters nor digits.
    Word,
}

/// Fixed character sets taken from a [`MinifyConfig`].
#[derive(Debug, Clone)]
pub struct CharClassifier {
    quotes: Vec<char>,
    tokens: Vec<char>,
    word_chars: Vec<char>,
}

impl CharClassifier {
    pub fn new(quotes: &str, tokens: &str, word_chars: &str) -> Self {
        Self {
            quotes: quotes.chars().collect(),
            tokens: tokens.chars().collect(),
            word_chars: word_chars.chars().collect(),
        }
    }

    pub fn from_config(config: &MinifyConfig) -> Self {
        Self::new(&config.quotes, &config.tokens, &config.word_chars)
    }

    #[inline]
    pub fn is_quote(&self, c: char) -> bool {
        self.quotes.contains(&c)
    }

    #[inline]
    pub fn is_token(&self, c: char) -> bool {
        self.tokens.contains(&c)
    }

    #[inline]
    pub fn is_whitespace(&self, c: char) -> bool {
        c.is_whitespace()
    }

    /// Letter or digit, plus any configured extra word characters.
    #[inline]
    pub fn is_word_char(&self, c: char) -> bool {
        c.is_alphanumeric() || self.word_chars.contains(&c)
    }

    pub fn classify(&self, c: char) -> CharKind {
        if self.is_whitespace(c) {
            CharKind::Whitespace
        } else if self.is_quote(c) {
            CharKind::Quote
        } else if self.is_token(c) {
            CharKind::Token
        } else {
            CharKind::Word
        }
    }
}

impl Default for CharClassifier {
    fn default() -> Self {
        Self::from_config(&MinifyConfig::default())
    }
}
