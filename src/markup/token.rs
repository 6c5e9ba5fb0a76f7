/// Kind of a parsed markup unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Plain text to reveal.
    Words,
    BoldStart,
    BoldEnd,
    ItalicStart,
    ItalicEnd,
    ColorStart,
    ColorEnd,
    /// Pause for a number of seconds.
    Wait,
    /// Block until input arrives, keep the text.
    WaitForInputNoClear,
    /// Block until input arrives, then clear the text.
    WaitForInputAndClear,
    WaitOnPunctuationStart,
    WaitOnPunctuationEnd,
    Clear,
    SpeedStart,
    SpeedEnd,
    Exit,
    Message,
    VerticalPunch,
    HorizontalPunch,
    Punch,
    Flash,
    Audio,
    AudioLoop,
    AudioPause,
    AudioStop,
}

/// A typed unit of markup. `parameter` holds the text run for
/// [`TokenKind::Words`] and the raw tag argument otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub parameter: String,
}

impl Token {
    pub fn new(kind: TokenKind, parameter: impl Into<String>) -> Self {
        Self {
            kind,
            parameter: parameter.into(),
        }
    }

    /// Token without an argument.
    pub fn bare(kind: TokenKind) -> Self {
        Self::new(kind, String::new())
    }

    pub fn words(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Words, text)
    }

    pub fn is_words(&self) -> bool {
        self.kind == TokenKind::Words
    }
}
