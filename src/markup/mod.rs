//! Inline tag markup: `Hello <b>there</b><w=0.5>, friend<wi>`.

pub mod tags;
pub mod token;
pub mod tokenizer;

pub use tags::tag_help;
pub use token::{Token, TokenKind};
pub use tokenizer::{tokenize, Tokenizer};
