//! Street-line parser.
//!
//! A street line is split into digit runs, whitespace runs and other text,
//! after any `", Unit <digits>"` designators have been lifted out. Rendering
//! then decides, per digit run, how it joins the text that follows:
//!
//! - digits followed (after optional whitespace) by a letter get exactly one
//!   separating space: `9690Canon` -> `9690 Canon`
//! - unless the text is an ordinal `th`/`nd` ending at a word boundary, which
//!   is joined directly: `6 th` and `6th` both render as `6th`
//!
//! Everything else is emitted as parsed.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use addr_model::NormalizationOptions;

static WORD_CHAR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w$").expect("Invalid word character regex"));

const UNIT_LABEL: &str = ", Unit ";
const ORDINAL_SUFFIXES: [&str; 2] = ["th", "nd"];

/// One run of a street line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Segment {
    /// ASCII digits.
    Number(String),
    /// Whitespace.
    Space(String),
    /// Anything else.
    Text(String),
}

impl Segment {
    pub fn as_str(&self) -> &str {
        match self {
            Segment::Number(s) | Segment::Space(s) | Segment::Text(s) => s,
        }
    }

    fn first_char(&self) -> Option<char> {
        self.as_str().chars().next()
    }
}

/// What rendering changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LineEdits {
    pub units_removed: usize,
    pub numbers_separated: usize,
    pub ordinals_joined: usize,
}

impl LineEdits {
    pub fn is_empty(&self) -> bool {
        self.units_removed == 0 && self.numbers_separated == 0 && self.ordinals_joined == 0
    }
}

/// A parsed street line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreetLine {
    pub segments: Vec<Segment>,
    /// Unit numbers lifted out of `", Unit <digits>"` designators.
    pub units: Vec<String>,
}

impl StreetLine {
    /// Parse `raw`. Unit designators are lifted out only when
    /// `options.strip_units` is set; otherwise they stay in the segments.
    pub fn parse(raw: &str, options: &NormalizationOptions) -> Self {
        let chars: Vec<char> = raw.chars().collect();
        let (body, units) = if options.strip_units {
            lift_units(&chars)
        } else {
            (chars, Vec::new())
        };
        Self {
            segments: segment(&body),
            units,
        }
    }

    /// The leading digit run, if the line starts with one.
    pub fn house_number(&self) -> Option<&str> {
        match self.segments.first() {
            Some(Segment::Number(digits)) => Some(digits),
            _ => None,
        }
    }

    /// Render the line. With `separate_numbers` off the segments are joined
    /// as parsed.
    pub fn render(&self, options: &NormalizationOptions) -> (String, LineEdits) {
        let mut edits = LineEdits {
            units_removed: self.units.len(),
            ..LineEdits::default()
        };
        let mut out = String::new();
        if !options.separate_numbers {
            for segment in &self.segments {
                out.push_str(segment.as_str());
            }
            return (out, edits);
        }
        let segments = &self.segments;
        let mut idx = 0;
        while idx < segments.len() {
            let Segment::Number(digits) = &segments[idx] else {
                out.push_str(segments[idx].as_str());
                idx += 1;
                continue;
            };
            out.push_str(digits);
            let (gap, text_idx) = match segments.get(idx + 1) {
                Some(Segment::Space(gap)) => (Some(gap.as_str()), idx + 2),
                _ => (None, idx + 1),
            };
            let Some(Segment::Text(text)) = segments.get(text_idx) else {
                idx += 1;
                continue;
            };
            if !text.starts_with(|ch: char| ch.is_ascii_alphabetic()) {
                idx += 1;
                continue;
            }
            let after = segments.get(text_idx + 1).and_then(Segment::first_char);
            if is_ordinal_suffix(text, after) {
                if gap.is_some() {
                    edits.ordinals_joined += 1;
                }
            } else {
                if gap != Some(" ") {
                    edits.numbers_separated += 1;
                }
                out.push(' ');
            }
            idx = text_idx;
        }
        (out, edits)
    }
}

/// Normalize one street line.
///
/// ```
/// use addr_model::NormalizationOptions;
/// use addr_normalize::normalize_street_line;
///
/// let options = NormalizationOptions::default();
/// assert_eq!(normalize_street_line("3640 Oak Creek Dr, Unit 10", &options), "3640 Oak Creek Dr");
/// assert_eq!(normalize_street_line("9690Canon Way", &options), "9690 Canon Way");
/// assert_eq!(normalize_street_line("431 6th St", &options), "431 6th St");
/// ```
pub fn normalize_street_line(raw: &str, options: &NormalizationOptions) -> String {
    StreetLine::parse(raw, options).render(options).0
}

/// Unicode `\w`, the class behind regex `\b`: letters, marks, decimal
/// digits, connector punctuation and joiners.
fn is_word_char(ch: char) -> bool {
    if ch.is_ascii() {
        return ch.is_ascii_alphanumeric() || ch == '_';
    }
    let mut buf = [0u8; 4];
    WORD_CHAR_REGEX.is_match(ch.encode_utf8(&mut buf))
}

/// `text` starts with `th`/`nd` and the suffix ends at a word boundary.
/// `after` is the first character following `text`, if any.
fn is_ordinal_suffix(text: &str, after: Option<char>) -> bool {
    ORDINAL_SUFFIXES.iter().any(|suffix| {
        let Some(rest) = text.strip_prefix(*suffix) else {
            return false;
        };
        let next = rest.chars().next().or(after);
        !next.is_some_and(is_word_char)
    })
}

/// Length of the `", Unit <digits>"` designator starting at `start`, if any.
fn unit_designator_len(chars: &[char], start: usize) -> Option<usize> {
    let label_len = UNIT_LABEL.chars().count();
    let label_matches = UNIT_LABEL
        .chars()
        .enumerate()
        .all(|(offset, ch)| chars.get(start + offset) == Some(&ch));
    if !label_matches {
        return None;
    }
    let digits = chars[start + label_len..]
        .iter()
        .take_while(|ch| ch.is_ascii_digit())
        .count();
    (digits > 0).then_some(label_len + digits)
}

fn lift_units(chars: &[char]) -> (Vec<char>, Vec<String>) {
    let label_len = UNIT_LABEL.chars().count();
    let mut body = Vec::with_capacity(chars.len());
    let mut units = Vec::new();
    let mut idx = 0;
    while idx < chars.len() {
        if let Some(len) = unit_designator_len(chars, idx) {
            units.push(chars[idx + label_len..idx + len].iter().collect());
            idx += len;
        } else {
            body.push(chars[idx]);
            idx += 1;
        }
    }
    (body, units)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Run {
    Number,
    Space,
    Text,
}

fn run_of(ch: char) -> Run {
    if ch.is_ascii_digit() {
        Run::Number
    } else if ch.is_whitespace() {
        Run::Space
    } else {
        Run::Text
    }
}

fn segment(chars: &[char]) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut kind: Option<Run> = None;
    for &ch in chars {
        let run = run_of(ch);
        if kind.is_some_and(|k| k != run) {
            segments.push(make_segment(kind, std::mem::take(&mut current)));
        }
        kind = Some(run);
        current.push(ch);
    }
    if !current.is_empty() {
        segments.push(make_segment(kind, current));
    }
    segments
}

fn make_segment(kind: Option<Run>, value: String) -> Segment {
    match kind {
        Some(Run::Number) => Segment::Number(value),
        Some(Run::Space) => Segment::Space(value),
        Some(Run::Text) | None => Segment::Text(value),
    }
}
