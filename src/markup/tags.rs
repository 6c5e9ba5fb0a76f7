//! Recognized tag names.
//!
//! A tag body is `name` or `name=parameter`. Names are matched
//! case-sensitively. A tag written with the wrong parameter shape is not
//! recognized, so `<b=1>` and `<color>` stay literal text.

use super::TokenKind;

/// Whether a tag carries an `=parameter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter {
    None,
    Required,
    /// Bare or with a parameter; only `w`.
    Optional,
}

/// One entry of the tag grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagSpec {
    pub name: &'static str,
    pub kind: TokenKind,
    pub parameter: Parameter,
    /// Usage shown by [`tag_help`].
    pub usage: &'static str,
    pub summary: &'static str,
}

const fn tag(
    name: &'static str,
    kind: TokenKind,
    parameter: Parameter,
    usage: &'static str,
    summary: &'static str,
) -> TagSpec {
    TagSpec {
        name,
        kind,
        parameter,
        usage,
        summary,
    }
}

pub const TAGS: &[TagSpec] = &[
    tag("b", TokenKind::BoldStart, Parameter::None, "<b>", "start bold text"),
    tag("/b", TokenKind::BoldEnd, Parameter::None, "</b>", "end bold text"),
    tag("i", TokenKind::ItalicStart, Parameter::None, "<i>", "start italic text"),
    tag("/i", TokenKind::ItalicEnd, Parameter::None, "</i>", "end italic text"),
    tag("color", TokenKind::ColorStart, Parameter::Required, "<color=red>", "start colored text"),
    tag("/color", TokenKind::ColorEnd, Parameter::None, "</color>", "end colored text"),
    tag("w", TokenKind::Wait, Parameter::Optional, "<w=0.5>", "wait for seconds (default 1)"),
    tag("wi", TokenKind::WaitForInputNoClear, Parameter::None, "<wi>", "wait for input"),
    tag("wc", TokenKind::WaitForInputAndClear, Parameter::None, "<wc>", "wait for input, then clear"),
    tag("wp", TokenKind::WaitOnPunctuationStart, Parameter::Required, "<wp=0.5>", "set punctuation pause"),
    tag("/wp", TokenKind::WaitOnPunctuationEnd, Parameter::None, "</wp>", "restore punctuation pause"),
    tag("x", TokenKind::Exit, Parameter::None, "<x>", "stop writing"),
    tag("clear", TokenKind::Clear, Parameter::None, "<clear>", "clear the text"),
    tag("s", TokenKind::SpeedStart, Parameter::Required, "<s=60>", "set writing speed (chars/sec)"),
    tag("/s", TokenKind::SpeedEnd, Parameter::None, "</s>", "restore writing speed"),
    tag("m", TokenKind::Message, Parameter::Required, "<m=name>", "broadcast a message"),
    tag("vpunch", TokenKind::VerticalPunch, Parameter::Required, "<vpunch=10>", "vertical shake"),
    tag("hpunch", TokenKind::HorizontalPunch, Parameter::Required, "<hpunch=10>", "horizontal shake"),
    tag("punch", TokenKind::Punch, Parameter::Required, "<punch=10>", "shake both axes"),
    tag("flash", TokenKind::Flash, Parameter::Required, "<flash=0.2>", "flash the screen white"),
    tag("audio", TokenKind::Audio, Parameter::Required, "<audio=name>", "play a sound once"),
    tag("audioloop", TokenKind::AudioLoop, Parameter::Required, "<audioloop=name>", "play a sound looping"),
    tag("audiopause", TokenKind::AudioPause, Parameter::Required, "<audiopause=name>", "pause a sound"),
    tag("audiostop", TokenKind::AudioStop, Parameter::Required, "<audiostop=name>", "stop a sound"),
];

/// Resolve a tag body into its kind and parameter.
///
/// Returns `None` when the body is not a recognized tag.
pub fn lookup(body: &str) -> Option<(TokenKind, &str)> {
    let (name, parameter) = match body.split_once('=') {
        Some((name, parameter)) => (name, Some(parameter)),
        None => (body, None),
    };
    let spec = TAGS.iter().find(|spec| spec.name == name)?;
    match (spec.parameter, parameter) {
        (Parameter::None, None) | (Parameter::Optional, None) => Some((spec.kind, "")),
        (Parameter::Required | Parameter::Optional, Some(parameter)) => {
            Some((spec.kind, parameter))
        }
        (Parameter::None, Some(_)) | (Parameter::Required, None) => None,
    }
}

/// Human-readable listing of every supported tag.
pub fn tag_help() -> String {
    let width = TAGS.iter().map(|spec| spec.usage.len()).max().unwrap_or(0);
    TAGS.iter()
        .map(|spec| format!("{:<width$}  {}", spec.usage, spec.summary))
        .collect::<Vec<_>>()
        .join("\n")
}
