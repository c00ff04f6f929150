// SPDX-License-Identifier: AGPL-3.0-or-later
//! The response formatter
//!
//! Backend replies use a constrained markdown-like convention: double-asterisk
//! bold, single-asterisk italic, blank-line-separated paragraphs, and bullet
//! paragraphs introduced by a marker glyph. This module converts that raw text
//! into entity-escaped, markup-ready blocks.
//!
//! Substitution order is load-bearing: escaping runs first so no input
//! substring reaches the output unescaped, bold runs before italic so the
//! asterisks of an already-converted bold span cannot re-match as italic, and
//! both run over the whole string before paragraph splitting (an inline span
//! may therefore cross a blank line; the split then cuts through the inserted
//! tags).

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

use crate::blocks::{BlockKind, FormattedBlock};

/// Leading glyphs that mark a paragraph as a bullet block.
///
/// The set is fixed: the bullet dot plus the siren, warning and clipboard
/// glyphs the reply composers emit at the head of list paragraphs.
pub const BULLET_MARKERS: [&str; 4] = ["•", "🚨", "⚠️", "📋"];

fn bold_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)\*\*(.*?)\*\*").expect("Invalid bold regex"))
}

fn italic_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)\*(.*?)\*").expect("Invalid italic regex"))
}

/// Entity-escape text destined for an HTML fragment.
///
/// Escapes `&`, `<`, `>` and both quote kinds. The display surfaces use the
/// same primitive for every scalar they interpolate outside the formatter.
pub fn escape(text: &str) -> Cow<'_, str> {
    html_escape::encode_safe(text)
}

/// Convert raw backend text into an ordered sequence of display blocks.
///
/// Total over any input: unmatched markers pass through as literal text and
/// the empty string yields a single empty paragraph. No paragraph is dropped,
/// merged or reordered.
pub fn format(raw: &str) -> Vec<FormattedBlock> {
    let safe = escape(raw);
    let bolded = bold_regex().replace_all(&safe, "<strong>$1</strong>");
    let inline = italic_regex().replace_all(&bolded, "<em>$1</em>");

    inline
        .split("\n\n")
        .map(|para| {
            if starts_with_marker(para) {
                FormattedBlock::new(BlockKind::BulletList, break_before_markers(para))
            } else {
                FormattedBlock::new(BlockKind::Paragraph, para.replace('\n', "<br>"))
            }
        })
        .collect()
}

/// The concatenated `<p>` rendition the display surfaces inject.
pub fn format_html(raw: &str) -> String {
    format(raw).iter().map(FormattedBlock::to_html).collect()
}

fn starts_with_marker(para: &str) -> bool {
    BULLET_MARKERS.iter().any(|m| para.starts_with(m))
}

/// Make newlines that introduce a new bullet item visible breaks.
///
/// Only a newline immediately followed by a marker glyph is converted; any
/// other newline inside a bullet block stays a literal newline character.
fn break_before_markers(para: &str) -> String {
    let mut out = para.to_string();
    for marker in BULLET_MARKERS {
        out = out.replace(&format!("\n{marker}"), &format!("<br>{marker}"));
    }
    out
}
