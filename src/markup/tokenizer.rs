use super::{tags, Token};
use std::iter::FusedIterator;

const TAG_OPEN: char = '<';
const TAG_CLOSE: char = '>';

/// Lazily splits markup into tokens.
///
/// Adjacent text runs, including unrecognized tags, are merged into a
/// single `Words` token.
#[derive(Clone, Debug)]
pub struct Tokenizer<'a> {
    rest: &'a str,
    pending: Option<Token>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(content: &'a str) -> Self {
        Self {
            rest: content,
            pending: None,
        }
    }

    /// Splits the next text run or tag off `rest`.
    fn next_piece(&mut self) -> Option<Piece<'a>> {
        if self.rest.is_empty() {
            return None;
        }
        let Some(body_start) = self.rest.strip_prefix(TAG_OPEN) else {
            let end = self.rest.find(TAG_OPEN).unwrap_or(self.rest.len());
            let (text, rest) = self.rest.split_at(end);
            self.rest = rest;
            return Some(Piece::Text(text));
        };
        let Some(close) = body_start.find(TAG_CLOSE) else {
            let text = self.rest;
            self.rest = "";
            return Some(Piece::Text(text));
        };
        let body = &body_start[..close];
        // '<' + body + '>'
        let whole = &self.rest[..close + 2];
        self.rest = &body_start[close + 1..];
        Some(match tags::lookup(body) {
            Some((kind, parameter)) => Piece::Tag(Token::new(kind, parameter)),
            None => Piece::Text(whole),
        })
    }
}

enum Piece<'a> {
    Text(&'a str),
    Tag(Token),
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let mut words = String::new();
        loop {
            if let Some(tag) = self.pending.take() {
                return Some(tag);
            }
            match self.next_piece() {
                Some(Piece::Text(text)) => words.push_str(text),
                Some(Piece::Tag(tag)) if words.is_empty() => return Some(tag),
                Some(Piece::Tag(tag)) => {
                    self.pending = Some(tag);
                    return Some(Token::words(words));
                }
                None if words.is_empty() => return None,
                None => return Some(Token::words(words)),
            }
        }
    }
}

impl FusedIterator for Tokenizer<'_> {}

/// Parse markup into an ordered token list. Never fails: anything that is
/// not a recognized tag is kept as text.
pub fn tokenize(content: &str) -> Vec<Token> {
    Tokenizer::new(content).collect()
}
