//! Step-by-step reveal of a single `Words` token.

use super::host::TextTarget;
use super::timing::{is_punctuation, TickBudget, TimingState};
use unicode_segmentation::UnicodeSegmentation;

/// Outcome of driving a suspendable step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Progress {
    /// Suspended; needs more ticks.
    Pending,
    Done,
}

/// How a `Words` token is drawn. Fixed when the token starts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct RevealStyle {
    pub open: String,
    pub close: String,
    /// Opening tag for unrevealed text; `None` leaves that text out.
    pub hidden_open: Option<String>,
    pub whole_words: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    /// Render the next step.
    Step,
    /// Start the delay between steps.
    Delay,
    Sleeping { remaining: f32, then: Wake },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Wake {
    Delay,
    Step,
}

/// Resume state for revealing one text run.
///
/// Steps are counted in grapheme clusters so accents and emoji appear whole.
#[derive(Debug, Clone)]
pub(crate) struct Reveal {
    text: String,
    /// Byte offset just past each grapheme.
    ends: Vec<usize>,
    /// Target text from before this run started.
    prior: String,
    style: RevealStyle,
    next: usize,
    phase: Phase,
}

impl Reveal {
    pub fn new(text: &str, prior: String, style: RevealStyle) -> Self {
        let ends = text
            .grapheme_indices(true)
            .map(|(start, g)| start + g.len())
            .collect();
        Self {
            text: text.to_string(),
            ends,
            prior,
            style,
            next: 0,
            phase: Phase::Step,
        }
    }

    fn grapheme(&self, index: usize) -> &str {
        let start = match index {
            0 => 0,
            i => self.ends[i - 1],
        };
        &self.text[start..self.ends[index]]
    }

    /// Last grapheme shown by the step that starts at `start`.
    fn step_end(&self, start: usize) -> usize {
        let last = self.ends.len() - 1;
        if !self.style.whole_words {
            return start;
        }
        (start..last)
            .find(|&i| self.grapheme(i).starts_with(char::is_whitespace))
            .unwrap_or(last)
    }

    /// Full target text with everything through grapheme `end` visible.
    fn compose(&self, end: usize) -> String {
        let (left, right) = self.text.split_at(self.ends[end]);
        let mut out = String::with_capacity(self.prior.len() + self.text.len() + 32);
        out.push_str(&self.prior);
        out.push_str(&self.style.open);
        out.push_str(left);
        out.push_str(&self.style.close);
        if let (Some(hidden_open), false) = (&self.style.hidden_open, right.is_empty()) {
            out.push_str(hidden_open);
            out.push_str(right);
            out.push_str("</color>");
        }
        out
    }

    pub fn advance(
        &mut self,
        budget: &mut TickBudget,
        timing: &TimingState,
        target: &mut dyn TextTarget,
    ) -> Progress {
        loop {
            match self.phase {
                Phase::Step => {
                    if self.next >= self.ends.len() {
                        return Progress::Done;
                    }
                    let end = self.step_end(self.next);
                    target.set_text(&self.compose(end));
                    self.next = end + 1;

                    let paused = self
                        .grapheme(end)
                        .chars()
                        .next_back()
                        .is_some_and(is_punctuation);
                    self.phase = if paused {
                        Phase::Sleeping {
                            remaining: timing.punctuation_pause,
                            then: Wake::Delay,
                        }
                    } else {
                        Phase::Delay
                    };
                }
                Phase::Delay => {
                    self.phase = match timing.step_delay() {
                        Some(delay) => Phase::Sleeping {
                            remaining: delay,
                            then: Wake::Step,
                        },
                        None => Phase::Step,
                    };
                }
                Phase::Sleeping { remaining, then } => match budget.spend(remaining) {
                    Some(left) => {
                        self.phase = Phase::Sleeping {
                            remaining: left,
                            then,
                        };
                        return Progress::Pending;
                    }
                    None => {
                        self.phase = match then {
                            Wake::Delay => Phase::Delay,
                            Wake::Step => Phase::Step,
                        };
                    }
                },
            }
        }
    }
}
